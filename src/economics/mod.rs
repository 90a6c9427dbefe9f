//! 농작업 기계화 경제성 계산 핵심.
//!
//! 자산 고정비 환산, 유동비, 계획 평가, 공통 자산(트랙터) 안분, 면적별 재계산, 합산으로 구성한다.
//! 모든 계산은 입력만으로 결정되며 잘못된 수치 입력은 오류 대신 0으로 처리한다.

pub mod aggregate;
pub mod evaluator;
pub mod fixed_cost;
pub mod plan;
pub mod shared_asset;
pub mod sweep;
pub mod variable_cost;

pub use aggregate::{aggregate, Delta, ScenarioTotals, Totals};
pub use evaluator::{evaluate_plan, evaluate_plan_with_share, HourlyBreakdown, PlanEvaluation, StepResult};
pub use fixed_cost::{annual_fixed_cost, hourly_fixed_cost, AmortizationRatios};
pub use plan::{
    AnnualHoursMode, Asset, EnvironmentParams, MechanizationLevel, Plan, ProcessStep, Scenario,
    SharedAsset,
};
pub use shared_asset::{allocate_shared_asset, allocate_shared_assets, SharedAllocation, StepShare};
pub use sweep::{sweep_area, sweep_area_by_step, AreaRange, StepSweepPoint, SweepError, SweepPoint};
pub use variable_cost::{hourly_variable_cost, hourly_wage, VariableCost};

use log::{debug, warn};

/// NaN을 포함해 0 이하인 값을 걸러낸다.
pub(crate) fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// 한 면적에 대한 전체 평가 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// 분석 면적 [ha]
    pub area: f64,
    /// 공정 순서대로 도입안, 비교안 결과
    pub steps: Vec<StepResult>,
    pub allocations: Vec<SharedAllocation>,
    pub totals: ScenarioTotals,
    pub delta: Delta,
}

impl Evaluation {
    pub fn result(&self, step_key: &str, scenario: Scenario) -> Option<&StepResult> {
        self.steps
            .iter()
            .find(|r| r.step_key == step_key && r.scenario == scenario)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .flat_map(|r| r.evaluation.warnings.iter().map(String::as_str))
    }
}

/// 공정 목록과 환경 값으로 `area` 면적에 대한 공정별 결과, 합계, 차이를 계산한다.
/// 점검 메시지는 결과에만 담는다. 로그는 [`log_input_warnings`]로 따로 남긴다.
pub fn evaluate(steps: &[ProcessStep], env: &EnvironmentParams, area: f64) -> Evaluation {
    debug!("evaluate: {} steps, area={area} ha", steps.len());
    let allocations = allocate_shared_assets(steps, env, area);

    let mut results = Vec::with_capacity(steps.len() * 2);
    for (idx, step) in steps.iter().enumerate() {
        for scenario in Scenario::ALL {
            let plan = step.plan(scenario);
            let share = shared_asset::shared_annual_cost(&allocations, idx, scenario);
            let mut evaluation = evaluate_plan_with_share(plan, env, area, share);
            evaluation.warnings.extend(missing_shared_warning(plan, env));
            results.push(StepResult {
                step_key: step.key.clone(),
                step_name: step.name.clone(),
                scenario,
                level_label: plan.level.label.clone(),
                evaluation,
            });
        }
    }

    let totals = aggregate(&results);
    let delta = totals.delta();
    debug!(
        "evaluate: introduced={:.0} comparison={:.0} delta={:.0}",
        totals.introduced.cost, totals.comparison.cost, delta.cost
    );
    Evaluation {
        area,
        steps: results,
        allocations,
        totals,
        delta,
    }
}

fn missing_shared_warning(plan: &Plan, env: &EnvironmentParams) -> Option<String> {
    let category = plan.level.shared_asset.as_deref()?;
    env.shared_asset(category).is_none().then(|| {
        format!(
            "[{}] 공통 자산 '{category}' 정의가 없어 안분 고정비를 제외했습니다.",
            plan.level.label
        )
    })
}

/// 공정/구분별 입력값 점검 메시지. 면적과 무관하다.
pub fn input_warnings(
    steps: &[ProcessStep],
    env: &EnvironmentParams,
) -> Vec<(String, Scenario, String)> {
    steps
        .iter()
        .flat_map(|step| {
            Scenario::ALL.into_iter().flat_map(move |scenario| {
                let plan = step.plan(scenario);
                evaluator::plan_warnings(plan)
                    .into_iter()
                    .chain(missing_shared_warning(plan, env))
                    .map(move |w| (step.key.clone(), scenario, w))
            })
        })
        .collect()
}

/// 입력값 점검 메시지를 한 번씩 경고 로그로 남긴다.
pub fn log_input_warnings(steps: &[ProcessStep], env: &EnvironmentParams) {
    for (key, scenario, w) in input_warnings(steps, env) {
        warn!("{key} ({}): {w}", scenario.as_str());
    }
}
