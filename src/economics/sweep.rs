use super::{evaluate, is_positive};
use super::plan::{EnvironmentParams, ProcessStep, Scenario};

/// 면적 구간 설정 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    /// NaN 또는 무한대 경계
    NonFinite,
    /// 0 이하 면적. 연간 가동시간이 0이 되어 고정비가 빠진다.
    NonPositiveArea(f64),
    /// 최소 > 최대
    Inverted { min: f64, max: f64 },
    /// 구간 수 0
    NoSamples,
}

impl std::fmt::Display for SweepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepError::NonFinite => write!(f, "면적 범위에 유한하지 않은 값이 있습니다"),
            SweepError::NonPositiveArea(v) => write!(f, "면적은 0보다 커야 합니다: {v}"),
            SweepError::Inverted { min, max } => {
                write!(f, "최소 면적({min})이 최대 면적({max})보다 큽니다")
            }
            SweepError::NoSamples => write!(f, "면적 구간 수는 1 이상이어야 합니다"),
        }
    }
}

impl std::error::Error for SweepError {}

/// 양 끝을 포함해 등간격으로 나눈 면적 범위 [ha].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaRange {
    min: f64,
    max: f64,
    samples: usize,
}

impl AreaRange {
    pub fn new(min: f64, max: f64, samples: usize) -> Result<Self, SweepError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SweepError::NonFinite);
        }
        if !is_positive(min) {
            return Err(SweepError::NonPositiveArea(min));
        }
        if min > max {
            return Err(SweepError::Inverted { min, max });
        }
        if samples == 0 {
            return Err(SweepError::NoSamples);
        }
        Ok(Self { min, max, samples })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// 표본 면적 목록. 표본이 1개면 최소 면적만 돌려준다.
    pub fn areas(&self) -> Vec<f64> {
        if self.samples == 1 {
            return vec![self.min];
        }
        let last = self.samples - 1;
        let step = (self.max - self.min) / last as f64;
        (0..self.samples)
            .map(|i| if i == last { self.max } else { self.min + step * i as f64 })
            .collect()
    }
}

/// 면적별 전 공정 합산 단위비용.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub area: f64,
    pub scenario: Scenario,
    pub total_cost_per_area: f64,
}

/// 면적별 공정 단위비용.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSweepPoint {
    pub area: f64,
    pub step_key: String,
    pub scenario: Scenario,
    pub cost_per_area: f64,
}

/// 면적을 바꿔가며 전체 평가를 다시 수행한다. 능률/인력/가격은 그대로 두고
/// 면적에 따라 달라지는 연간 가동시간과 공통 자산 몫만 다시 계산된다.
pub fn sweep_area(
    steps: &[ProcessStep],
    env: &EnvironmentParams,
    range: &AreaRange,
) -> Vec<SweepPoint> {
    range
        .areas()
        .into_iter()
        .flat_map(|area| {
            let totals = evaluate(steps, env, area).totals;
            Scenario::ALL.into_iter().map(move |scenario| SweepPoint {
                area,
                scenario,
                total_cost_per_area: totals.get(scenario).cost,
            })
        })
        .collect()
}

/// [`sweep_area`]와 같되 공정별 값을 돌려준다.
pub fn sweep_area_by_step(
    steps: &[ProcessStep],
    env: &EnvironmentParams,
    range: &AreaRange,
) -> Vec<StepSweepPoint> {
    range
        .areas()
        .into_iter()
        .flat_map(|area| {
            evaluate(steps, env, area)
                .steps
                .into_iter()
                .map(move |result| StepSweepPoint {
                    area,
                    step_key: result.step_key,
                    scenario: result.scenario,
                    cost_per_area: result.evaluation.cost_per_area,
                })
        })
        .collect()
}
