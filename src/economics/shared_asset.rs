use super::fixed_cost::AmortizationRatios;
use super::is_positive;
use super::plan::{EnvironmentParams, ProcessStep, Scenario, SharedAsset};

/// 공통 자산을 쓰는 공정 하나의 몫.
#[derive(Debug, Clone, PartialEq)]
pub struct StepShare {
    /// 입력 공정 목록에서의 위치
    pub step_index: usize,
    /// 이 공정의 가동시간 [h]
    pub hours: f64,
    /// 전체 가동시간 중 비율(0~1)
    pub share: f64,
    /// 안분된 연간 고정비 [원]
    pub annual_cost: f64,
}

/// 공통 자산 1개, 구분 1개에 대한 안분 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedAllocation {
    pub category: String,
    pub scenario: Scenario,
    pub annual_fixed_total: f64,
    pub total_hours: f64,
    pub shares: Vec<StepShare>,
}

impl SharedAllocation {
    pub fn share_of(&self, step_index: usize) -> Option<&StepShare> {
        self.shares.iter().find(|s| s.step_index == step_index)
    }

    /// 몫의 합. 가동시간이 있는 공정이 하나라도 있으면 1, 없으면 0.
    pub fn share_sum(&self) -> f64 {
        self.shares.iter().map(|s| s.share).sum()
    }
}

/// 같은 분류의 공통 자산을 쓰는 공정들에 연간 고정비를 가동시간 비율로 나눈다.
///
/// 각 공정의 가동시간은 [`Plan::operating_hours`](super::plan::Plan::operating_hours)를 따른다.
pub fn allocate_shared_asset(
    shared: &SharedAsset,
    steps: &[ProcessStep],
    scenario: Scenario,
    area: f64,
    ratios: &AmortizationRatios,
) -> SharedAllocation {
    let annual_fixed_total = shared.annual_fixed_cost(ratios);

    let hours: Vec<(usize, f64)> = steps
        .iter()
        .enumerate()
        .filter_map(|(idx, step)| {
            let plan = step.plan(scenario);
            (plan.level.shared_asset.as_deref() == Some(shared.category.as_str()))
                .then(|| (idx, plan.operating_hours(area)))
        })
        .collect();
    let total_hours: f64 = hours.iter().map(|(_, h)| h).sum();

    let shares = hours
        .into_iter()
        .map(|(step_index, hours)| {
            let share = if is_positive(total_hours) {
                hours / total_hours
            } else {
                0.0
            };
            StepShare {
                step_index,
                hours,
                share,
                annual_cost: annual_fixed_total * share,
            }
        })
        .collect();

    SharedAllocation {
        category: shared.category.clone(),
        scenario,
        annual_fixed_total,
        total_hours,
        shares,
    }
}

/// 환경에 정의된 모든 공통 자산을 두 구분 각각에 대해 안분한다.
pub fn allocate_shared_assets(
    steps: &[ProcessStep],
    env: &EnvironmentParams,
    area: f64,
) -> Vec<SharedAllocation> {
    env.shared_assets
        .iter()
        .flat_map(|shared| {
            Scenario::ALL
                .into_iter()
                .map(move |scenario| allocate_shared_asset(shared, steps, scenario, area, &env.ratios))
        })
        .collect()
}

/// 특정 공정/구분에 안분된 연간 고정비 합계.
pub fn shared_annual_cost(
    allocations: &[SharedAllocation],
    step_index: usize,
    scenario: Scenario,
) -> f64 {
    allocations
        .iter()
        .filter(|a| a.scenario == scenario)
        .filter_map(|a| a.share_of(step_index))
        .map(|s| s.annual_cost)
        .sum()
}
