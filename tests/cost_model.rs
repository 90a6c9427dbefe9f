//! 고정비/유동비/계획 평가 회귀 테스트. 농업기계 이용비 산출 예시 값을 활용한다.
use farm_mech_economics::economics::{
    annual_fixed_cost, evaluate_plan, hourly_fixed_cost, hourly_variable_cost, hourly_wage,
    AmortizationRatios, AnnualHoursMode, Asset, EnvironmentParams, MechanizationLevel, Plan,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn transplanter_level() -> MechanizationLevel {
    MechanizationLevel {
        label: "정식기".into(),
        assets: vec![Asset::new("정식기", 60_000_000.0, 8.0)],
        fuel_burn_rate: 10.0,
        default_work_rate: 0.1,
        default_crew_size: 2,
        shared_asset: None,
    }
}

#[test]
fn annual_fixed_cost_reference_point() {
    // 60,000,000원, 8년: 3,600,000 + 1,500,000 + 7,125,000
    let annual = annual_fixed_cost(60_000_000.0, 8.0, &AmortizationRatios::default());
    assert_close("annual", annual, 12_225_000.0, 1e-12);
    let hourly = hourly_fixed_cost(60_000_000.0, 8.0, 200.0, &AmortizationRatios::default());
    assert_close("hourly", hourly, 61_125.0, 1e-12);
}

#[test]
fn fixed_cost_zero_guards() {
    let r = AmortizationRatios::default();
    assert_eq!(hourly_fixed_cost(0.0, 8.0, 200.0, &r), 0.0);
    assert_eq!(hourly_fixed_cost(-1.0, 8.0, 200.0, &r), 0.0);
    assert_eq!(hourly_fixed_cost(60_000_000.0, 0.0, 200.0, &r), 0.0);
    assert_eq!(hourly_fixed_cost(60_000_000.0, 8.0, 0.0, &r), 0.0);
    assert_eq!(hourly_fixed_cost(60_000_000.0, 8.0, -5.0, &r), 0.0);
    assert_eq!(hourly_fixed_cost(f64::NAN, 8.0, 200.0, &r), 0.0);
    assert_eq!(hourly_fixed_cost(60_000_000.0, 8.0, f64::NAN, &r), 0.0);
}

#[test]
fn fixed_cost_is_additive_over_assets() {
    let r = AmortizationRatios::default();
    let a = hourly_fixed_cost(49_000_000.0, 5.0, 120.0, &r);
    let b = hourly_fixed_cost(12_000_000.0, 6.0, 120.0, &r);
    let level = MechanizationLevel {
        assets: vec![
            Asset::new("정식기", 49_000_000.0, 5.0),
            Asset::new("자율주행키트", 12_000_000.0, 6.0),
        ],
        ..transplanter_level()
    };
    let plan = Plan::new(level).with_annual_hours(AnnualHoursMode::Explicit(120.0));
    let eval = evaluate_plan(&plan, &EnvironmentParams::default(), 1.0);
    assert_close("own_fixed", eval.hourly.own_fixed, a + b, 1e-12);
}

#[test]
fn hourly_variable_cost_reference_point() {
    let wage = hourly_wage(153_294.0, 8.0);
    assert_close("wage", wage, 19_161.75, 1e-12);
    let v = hourly_variable_cost(10.0, 1_158.0, 2.0, wage);
    assert_close("fuel", v.fuel, 11_580.0, 1e-12);
    assert_close("labor", v.labor, 38_323.5, 1e-12);
    assert_close("total", v.total(), 49_903.5, 1e-12);
}

#[test]
fn hourly_wage_zero_hours_per_day() {
    assert_eq!(hourly_wage(153_294.0, 0.0), 0.0);
}

#[test]
fn plan_with_explicit_hours() {
    let plan = Plan::new(transplanter_level()).with_annual_hours(AnnualHoursMode::Explicit(200.0));
    let eval = evaluate_plan(&plan, &EnvironmentParams::default(), 1.0);
    assert_close("annual_hours", eval.annual_hours, 200.0, 1e-12);
    assert_close("hourly", eval.hourly.total(), 111_028.5, 1e-12);
    assert_close("cost_per_area", eval.cost_per_area, 1_110_285.0, 1e-12);
    assert_close("time_per_area", eval.time_per_area, 10.0, 1e-12);
    assert!(eval.warnings.is_empty());
}

#[test]
fn plan_this_area_only_uses_area_over_work_rate() {
    let plan = Plan::new(transplanter_level());
    let eval = evaluate_plan(&plan, &EnvironmentParams::default(), 2.0);
    assert_close("annual_hours", eval.annual_hours, 20.0, 1e-12);
    assert_close("own_fixed", eval.hourly.own_fixed, 12_225_000.0 / 20.0, 1e-12);
}

#[test]
fn zero_work_rate_yields_zero_without_nan() {
    let plan = Plan::new(transplanter_level()).with_work_rate(0.0);
    let eval = evaluate_plan(&plan, &EnvironmentParams::default(), 1.0);
    assert_eq!(eval.cost_per_area, 0.0);
    assert_eq!(eval.time_per_area, 0.0);
    assert_close("annual_hours fallback", eval.annual_hours, 1.0, 1e-12);
    assert!(eval.hourly.total().is_finite());
    assert_eq!(eval.warnings.len(), 1);
}

#[test]
fn explicit_zero_hours_drops_fixed_cost_with_warning() {
    let plan = Plan::new(transplanter_level()).with_annual_hours(AnnualHoursMode::Explicit(0.0));
    let eval = evaluate_plan(&plan, &EnvironmentParams::default(), 1.0);
    assert_eq!(eval.hourly.own_fixed, 0.0);
    assert_close("variable only", eval.hourly.total(), 49_903.5, 1e-12);
    assert_eq!(eval.warnings.len(), 1);
}

#[test]
fn asset_price_override_changes_only_that_plan() {
    let base = Plan::new(transplanter_level()).with_annual_hours(AnnualHoursMode::Explicit(200.0));
    let cheaper = base.clone().with_asset_price("정식기", 30_000_000.0);
    let env = EnvironmentParams::default();
    let a = evaluate_plan(&base, &env, 1.0);
    let b = evaluate_plan(&cheaper, &env, 1.0);
    assert!(b.hourly.own_fixed < a.hourly.own_fixed);
    assert_eq!(base.level.assets[0].price, 60_000_000.0);
}
