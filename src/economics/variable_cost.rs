/// 시간당 유동비 구성.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VariableCost {
    /// 시간당 연료비 [원/h]
    pub fuel: f64,
    /// 시간당 인건비 [원/h]
    pub labor: f64,
}

impl VariableCost {
    pub fn total(&self) -> f64 {
        self.fuel + self.labor
    }
}

/// 1인 시간당 노임 = 1일 노임 / 1일 작업시간. 작업시간이 0 이하이면 0.
pub fn hourly_wage(daily_wage: f64, hours_per_day: f64) -> f64 {
    if hours_per_day > 0.0 {
        daily_wage / hours_per_day
    } else {
        0.0
    }
}

/// 연료소모량(L/h) x 유류비 + 투입인력 x 시간당 노임.
pub fn hourly_variable_cost(
    fuel_burn_rate: f64,
    fuel_price: f64,
    crew_size: f64,
    hourly_wage: f64,
) -> VariableCost {
    VariableCost {
        fuel: fuel_burn_rate.max(0.0) * fuel_price.max(0.0),
        labor: crew_size.max(0.0) * hourly_wage.max(0.0),
    }
}
