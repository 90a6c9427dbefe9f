use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::fixed_cost::{annual_fixed_cost, AmortizationRatios};
use super::is_positive;
use super::variable_cost::hourly_wage;

/// 고정비 산출 대상 자산(트랙터, 작업기, 자율주행키트 등).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    /// 취득가격 [원]
    pub price: f64,
    /// 내구연한 [년]
    pub useful_life: f64,
}

impl Asset {
    pub fn new(name: impl Into<String>, price: f64, useful_life: f64) -> Self {
        Self {
            name: name.into(),
            price,
            useful_life,
        }
    }
}

/// 한 공정을 수행하는 기계화 수준 하나.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanizationLevel {
    pub label: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// 연료소모량 [L/h]. 원동기가 없으면 0.
    #[serde(default)]
    pub fuel_burn_rate: f64,
    /// 기본 작업 능률 [ha/h]
    pub default_work_rate: f64,
    /// 기본 투입 인력 [명]
    #[serde(default)]
    pub default_crew_size: u32,
    /// 여러 공정이 함께 쓰는 공통 자산 분류(예: "tractor").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_asset: Option<String>,
}

/// 여러 공정에 걸쳐 쓰이는 공통 자산. 연간 고정비를 공정별 가동시간 비율로 안분한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedAsset {
    pub category: String,
    pub name: String,
    pub price: f64,
    pub useful_life: f64,
}

impl SharedAsset {
    /// 시간으로 나누기 전의 연간 고정비.
    pub fn annual_fixed_cost(&self, ratios: &AmortizationRatios) -> f64 {
        annual_fixed_cost(self.price, self.useful_life, ratios)
    }
}

/// 고정비 산출용 연간 가동시간 기준.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnnualHoursMode {
    /// 1년 동안 분석 면적만 작업한다고 보고 면적 / 능률로 계산한다.
    #[default]
    ThisAreaOnly,
    /// 사용자가 직접 입력한 연간 가동시간 [h]
    Explicit(f64),
}

/// 공정 하나에서 도입안/비교안 중 한쪽의 작업 계획.
///
/// 카탈로그 수준을 복사해 보관하므로 가격을 바꿔도 카탈로그나 다른 계획에 영향이 없다.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub level: MechanizationLevel,
    /// 작업 능률 [ha/h]
    pub work_rate: f64,
    /// 투입 인력 [명]
    pub crew_size: u32,
    pub annual_hours: AnnualHoursMode,
    /// 자산 이름별 사용자 가격
    pub asset_prices: BTreeMap<String, f64>,
}

impl Plan {
    /// 수준의 기본 능률/인력과 "현재 면적만" 기준으로 계획을 만든다.
    pub fn new(level: MechanizationLevel) -> Self {
        Self {
            work_rate: level.default_work_rate,
            crew_size: level.default_crew_size,
            annual_hours: AnnualHoursMode::ThisAreaOnly,
            asset_prices: BTreeMap::new(),
            level,
        }
    }

    pub fn with_work_rate(mut self, work_rate: f64) -> Self {
        self.work_rate = work_rate;
        self
    }

    pub fn with_crew_size(mut self, crew_size: u32) -> Self {
        self.crew_size = crew_size;
        self
    }

    pub fn with_annual_hours(mut self, mode: AnnualHoursMode) -> Self {
        self.annual_hours = mode;
        self
    }

    pub fn with_asset_price(mut self, name: impl Into<String>, price: f64) -> Self {
        self.asset_prices.insert(name.into(), price);
        self
    }

    /// 사용자 가격을 반영한 자산 목록.
    pub fn effective_assets(&self) -> impl Iterator<Item = Asset> + '_ {
        self.level.assets.iter().map(|asset| match self.asset_prices.get(&asset.name) {
            Some(&price) => Asset {
                price,
                ..asset.clone()
            },
            None => asset.clone(),
        })
    }

    /// 자산별 시간당 고정비의 분모가 되는 연간 가동시간.
    ///
    /// "현재 면적만" 기준에서 능률이 0 이하이면 1.0을 쓴다.
    pub fn annual_hours(&self, area: f64) -> f64 {
        match self.annual_hours {
            AnnualHoursMode::ThisAreaOnly => {
                if is_positive(self.work_rate) {
                    area / self.work_rate
                } else {
                    1.0
                }
            }
            AnnualHoursMode::Explicit(hours) => hours,
        }
    }

    /// 공통 자산 안분에 쓰는 가동시간. 능률이나 시간이 유효하지 않으면 0.
    pub fn operating_hours(&self, area: f64) -> f64 {
        if !is_positive(self.work_rate) {
            return 0.0;
        }
        let hours = match self.annual_hours {
            AnnualHoursMode::ThisAreaOnly => area / self.work_rate,
            AnnualHoursMode::Explicit(hours) => hours,
        };
        if is_positive(hours) {
            hours
        } else {
            0.0
        }
    }
}

/// 비교 대상 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// 도입안
    Introduced,
    /// 비교안
    Comparison,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::Introduced, Scenario::Comparison];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Introduced => "introduced",
            Scenario::Comparison => "comparison",
        }
    }

    pub fn other(&self) -> Scenario {
        match self {
            Scenario::Introduced => Scenario::Comparison,
            Scenario::Comparison => Scenario::Introduced,
        }
    }
}

/// 작업 공정 하나. 도입안과 비교안 계획을 하나씩 가진다.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStep {
    /// 영문 식별자(예: "transplanting")
    pub key: String,
    /// 표시용 이름(예: "정식")
    pub name: String,
    pub introduced: Plan,
    pub comparison: Plan,
}

impl ProcessStep {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        introduced: Plan,
        comparison: Plan,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            introduced,
            comparison,
        }
    }

    pub fn plan(&self, scenario: Scenario) -> &Plan {
        match scenario {
            Scenario::Introduced => &self.introduced,
            Scenario::Comparison => &self.comparison,
        }
    }

    /// 도입안과 비교안을 맞바꾼 공정.
    pub fn swapped(&self) -> Self {
        Self {
            key: self.key.clone(),
            name: self.name.clone(),
            introduced: self.comparison.clone(),
            comparison: self.introduced.clone(),
        }
    }
}

/// 분석 전체에 공통으로 적용되는 환경 값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentParams {
    /// 1일 노임 [원]
    pub daily_wage: f64,
    /// 1일 작업 시간 [h]
    pub hours_per_day: f64,
    /// 면세유 가격 [원/L]
    pub fuel_price: f64,
    pub ratios: AmortizationRatios,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shared_assets: Vec<SharedAsset>,
}

impl Default for EnvironmentParams {
    fn default() -> Self {
        Self {
            daily_wage: 153_294.0,
            hours_per_day: 8.0,
            fuel_price: 1_158.0,
            ratios: AmortizationRatios::default(),
            shared_assets: Vec::new(),
        }
    }
}

impl EnvironmentParams {
    pub fn hourly_wage(&self) -> f64 {
        hourly_wage(self.daily_wage, self.hours_per_day)
    }

    pub fn shared_asset(&self, category: &str) -> Option<&SharedAsset> {
        self.shared_assets.iter().find(|s| s.category == category)
    }

    pub fn with_shared_assets(mut self, shared_assets: Vec<SharedAsset>) -> Self {
        self.shared_assets = shared_assets;
        self
    }
}
