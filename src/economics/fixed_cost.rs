use serde::{Deserialize, Serialize};

use super::is_positive;

/// 고정비 산출에 쓰이는 연간 비율 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmortizationRatios {
    /// 폐기가치율(취득가격 대비)
    pub salvage: f64,
    /// 연 수리비율
    pub repair: f64,
    /// 연 이자율
    pub interest: f64,
}

impl Default for AmortizationRatios {
    fn default() -> Self {
        Self {
            salvage: 0.05,
            repair: 0.06,
            interest: 0.025,
        }
    }
}

/// 자산 1개의 연간 고정비 = 감가상각비 + 수리비 + 이자.
///
/// 가격 또는 내구연한이 0 이하이면 0을 돌려준다.
pub fn annual_fixed_cost(price: f64, useful_life: f64, ratios: &AmortizationRatios) -> f64 {
    if !is_positive(price) || !is_positive(useful_life) {
        return 0.0;
    }
    let salvage = price * ratios.salvage;
    let depreciation = (price - salvage) / useful_life;
    let repair = price * ratios.repair;
    let interest = price * ratios.interest;
    depreciation + repair + interest
}

/// 시간당 고정비 = 연간 고정비 / 연간 가동시간.
///
/// `price`, `useful_life`, `annual_hours` 중 하나라도 0 이하이면 0.
pub fn hourly_fixed_cost(
    price: f64,
    useful_life: f64,
    annual_hours: f64,
    ratios: &AmortizationRatios,
) -> f64 {
    if !is_positive(annual_hours) {
        return 0.0;
    }
    annual_fixed_cost(price, useful_life, ratios) / annual_hours
}
