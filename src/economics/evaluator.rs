use super::fixed_cost::hourly_fixed_cost;
use super::is_positive;
use super::plan::{AnnualHoursMode, EnvironmentParams, Plan, Scenario};
use super::variable_cost::hourly_variable_cost;

/// 시간당 비용 내역 [원/h].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HourlyBreakdown {
    pub fuel: f64,
    pub labor: f64,
    /// 계획 자체 자산의 고정비 합
    pub own_fixed: f64,
    /// 공통 자산 안분 고정비
    pub shared_fixed: f64,
}

impl HourlyBreakdown {
    pub fn variable(&self) -> f64 {
        self.fuel + self.labor
    }

    pub fn fixed(&self) -> f64 {
        self.own_fixed + self.shared_fixed
    }

    pub fn total(&self) -> f64 {
        self.variable() + self.fixed()
    }
}

/// 계획 하나의 평가 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEvaluation {
    /// 자산 고정비 산출에 쓴 연간 가동시간 [h]
    pub annual_hours: f64,
    pub hourly: HourlyBreakdown,
    /// 단위면적당 비용 [원/ha]
    pub cost_per_area: f64,
    /// 단위면적당 소요시간 [h/ha]
    pub time_per_area: f64,
    /// 입력값 점검 메시지
    pub warnings: Vec<String>,
}

/// 공정/구분별 평가 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub step_key: String,
    pub step_name: String,
    pub scenario: Scenario,
    pub level_label: String,
    pub evaluation: PlanEvaluation,
}

/// 공통 자산 없이 계획을 평가한다.
pub fn evaluate_plan(plan: &Plan, env: &EnvironmentParams, area: f64) -> PlanEvaluation {
    evaluate_plan_with_share(plan, env, area, 0.0)
}

/// 계획을 평가한다. `shared_annual_cost`는 이 계획에 안분된 공통 자산의 연간 고정비이다.
///
/// 능률이 0 이하이면 단위면적당 비용/시간은 0으로 처리한다.
pub fn evaluate_plan_with_share(
    plan: &Plan,
    env: &EnvironmentParams,
    area: f64,
    shared_annual_cost: f64,
) -> PlanEvaluation {
    let annual_hours = plan.annual_hours(area);
    let own_fixed: f64 = plan
        .effective_assets()
        .map(|asset| hourly_fixed_cost(asset.price, asset.useful_life, annual_hours, &env.ratios))
        .sum();

    let shared_hours = plan.operating_hours(area);
    let shared_fixed = if is_positive(shared_hours) && is_positive(shared_annual_cost) {
        shared_annual_cost / shared_hours
    } else {
        0.0
    };

    let variable = hourly_variable_cost(
        plan.level.fuel_burn_rate,
        env.fuel_price,
        f64::from(plan.crew_size),
        env.hourly_wage(),
    );
    let hourly = HourlyBreakdown {
        fuel: variable.fuel,
        labor: variable.labor,
        own_fixed,
        shared_fixed,
    };

    let (cost_per_area, time_per_area) = if is_positive(plan.work_rate) {
        (hourly.total() / plan.work_rate, 1.0 / plan.work_rate)
    } else {
        (0.0, 0.0)
    };

    PlanEvaluation {
        annual_hours,
        hourly,
        cost_per_area,
        time_per_area,
        warnings: plan_warnings(plan),
    }
}

/// 입력값 점검 메시지. 면적과 무관하게 계획만으로 정해진다.
pub(crate) fn plan_warnings(plan: &Plan) -> Vec<String> {
    let mut warnings = Vec::new();
    if !is_positive(plan.work_rate) {
        warnings.push(format!(
            "[{}] 작업 능률은 0보다 커야 합니다. 비용과 시간을 0으로 처리했습니다.",
            plan.level.label
        ));
    }
    if let AnnualHoursMode::Explicit(hours) = plan.annual_hours {
        if !is_positive(hours) && !plan.level.assets.is_empty() {
            warnings.push(format!(
                "[{}] 연간 가동시간이 0 이하여서 자산 고정비를 제외했습니다.",
                plan.level.label
            ));
        }
    }
    for asset in plan.effective_assets() {
        if !is_positive(asset.useful_life) {
            warnings.push(format!(
                "[{}] {}의 내구연한이 0 이하여서 고정비를 제외했습니다.",
                plan.level.label, asset.name
            ));
        }
    }
    warnings
}
