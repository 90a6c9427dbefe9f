use super::evaluator::StepResult;
use super::is_positive;
use super::plan::Scenario;

/// 전 공정 합계.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// 단위면적당 비용 합 [원/ha]
    pub cost: f64,
    /// 단위면적당 시간 합 [h/ha]
    pub time: f64,
}

/// 도입안/비교안 합계.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScenarioTotals {
    pub introduced: Totals,
    pub comparison: Totals,
}

/// 비교안 - 도입안. 양수면 도입안이 저렴하거나 빠르다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub cost: f64,
    pub time: f64,
}

impl Delta {
    pub fn introduced_cheaper(&self) -> bool {
        self.cost > 0.0
    }

    pub fn introduced_faster(&self) -> bool {
        self.time > 0.0
    }
}

impl ScenarioTotals {
    pub fn get(&self, scenario: Scenario) -> Totals {
        match scenario {
            Scenario::Introduced => self.introduced,
            Scenario::Comparison => self.comparison,
        }
    }

    pub fn delta(&self) -> Delta {
        Delta {
            cost: self.comparison.cost - self.introduced.cost,
            time: self.comparison.time - self.introduced.time,
        }
    }

    /// 비교안 시간 / 도입안 시간. 도입안 시간이 0이면 None.
    pub fn speedup(&self) -> Option<f64> {
        is_positive(self.introduced.time).then(|| self.comparison.time / self.introduced.time)
    }
}

/// 공정별 결과를 구분별로 합산한다.
pub fn aggregate(results: &[StepResult]) -> ScenarioTotals {
    let mut totals = ScenarioTotals::default();
    for result in results {
        let slot = match result.scenario {
            Scenario::Introduced => &mut totals.introduced,
            Scenario::Comparison => &mut totals.comparison,
        };
        slot.cost += result.evaluation.cost_per_area;
        slot.time += result.evaluation.time_per_area;
    }
    totals
}
