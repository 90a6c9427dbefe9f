use farm_mech_economics::economics::{
    allocate_shared_asset, evaluate, input_warnings, sweep_area, AmortizationRatios,
    AnnualHoursMode, AreaRange, EnvironmentParams, MechanizationLevel, Plan, ProcessStep,
    Scenario, SharedAsset,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn tractor() -> SharedAsset {
    SharedAsset {
        category: "tractor".into(),
        name: "트랙터".into(),
        price: 50_000_000.0,
        useful_life: 8.0,
    }
}

fn level(label: &str, work_rate: f64, shared: bool) -> MechanizationLevel {
    MechanizationLevel {
        label: label.into(),
        assets: Vec::new(),
        fuel_burn_rate: 0.0,
        default_work_rate: work_rate,
        default_crew_size: 1,
        shared_asset: shared.then(|| "tractor".to_string()),
    }
}

fn step(key: &str, work_rate: f64, shared: bool) -> ProcessStep {
    ProcessStep::new(
        key,
        key,
        Plan::new(level(key, work_rate, shared)),
        Plan::new(level("인력", 0.01, false)),
    )
}

#[test]
fn shares_follow_operating_hours() {
    let steps = vec![step("a", 0.1, true), step("b", 0.2, true), step("c", 0.5, false)];
    let alloc = allocate_shared_asset(
        &tractor(),
        &steps,
        Scenario::Introduced,
        1.0,
        &AmortizationRatios::default(),
    );
    // 4,250,000 + 47,500,000 / 8
    assert_close("annual", alloc.annual_fixed_total, 10_187_500.0, 1e-12);
    assert_close("total_hours", alloc.total_hours, 15.0, 1e-12);
    assert_eq!(alloc.shares.len(), 2);
    assert_close("share a", alloc.share_of(0).map(|s| s.share).unwrap_or(0.0), 2.0 / 3.0, 1e-12);
    assert_close("share b", alloc.share_of(1).map(|s| s.share).unwrap_or(0.0), 1.0 / 3.0, 1e-12);
    assert!(alloc.share_of(2).is_none());
    assert_close("sum", alloc.share_sum(), 1.0, 1e-12);
}

#[test]
fn no_qualifying_hours_allocates_nothing() {
    let steps = vec![step("a", 0.0, true), step("b", 0.5, false)];
    let alloc = allocate_shared_asset(
        &tractor(),
        &steps,
        Scenario::Introduced,
        1.0,
        &AmortizationRatios::default(),
    );
    assert_eq!(alloc.total_hours, 0.0);
    assert_eq!(alloc.share_sum(), 0.0);
    assert!(alloc.shares.iter().all(|s| s.annual_cost == 0.0));
}

#[test]
fn explicit_hours_are_the_allocation_base() {
    let explicit = ProcessStep::new(
        "a",
        "a",
        Plan::new(level("a", 0.1, true)).with_annual_hours(AnnualHoursMode::Explicit(30.0)),
        Plan::new(level("인력", 0.01, false)),
    );
    let steps = vec![explicit, step("b", 0.1, true)];
    let alloc = allocate_shared_asset(
        &tractor(),
        &steps,
        Scenario::Introduced,
        1.0,
        &AmortizationRatios::default(),
    );
    assert_close("total_hours", alloc.total_hours, 40.0, 1e-12);
    assert_close("share a", alloc.share_of(0).map(|s| s.share).unwrap_or(0.0), 0.75, 1e-12);
}

#[test]
fn shared_hourly_cost_is_spread_over_all_sharing_hours() {
    let steps = vec![step("a", 0.1, true), step("b", 0.2, true)];
    let env = EnvironmentParams::default().with_shared_assets(vec![tractor()]);
    let evaluation = evaluate(&steps, &env, 1.0);
    let expected = 10_187_500.0 / 15.0;
    for key in ["a", "b"] {
        let result = evaluation
            .result(key, Scenario::Introduced)
            .expect("introduced result");
        assert_close(key, result.evaluation.hourly.shared_fixed, expected, 1e-9);
    }
    let comparison = evaluation
        .result("a", Scenario::Comparison)
        .expect("comparison result");
    assert_eq!(comparison.evaluation.hourly.shared_fixed, 0.0);
}

#[test]
fn missing_shared_asset_definition_is_warned() {
    let steps = vec![step("a", 0.1, true)];
    let evaluation = evaluate(&steps, &EnvironmentParams::default(), 1.0);
    assert!(evaluation.allocations.is_empty());
    assert_eq!(evaluation.warnings().count(), 1);
}

#[test]
fn input_warnings_do_not_depend_on_sweep_samples() {
    let steps = vec![step("a", 0.1, true), step("b", 0.0, false)];
    let env = EnvironmentParams::default();
    let warnings = input_warnings(&steps, &env);
    // a: 공통 자산 정의 없음, b: 능률 0
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|(_, scenario, _)| *scenario == Scenario::Introduced));

    let range = AreaRange::new(1.0, 5.0, 5).expect("range");
    assert_eq!(sweep_area(&steps, &env, &range).len(), 10);
    assert_eq!(input_warnings(&steps, &env), warnings);
    let evaluation = evaluate(&steps, &env, 1.0);
    assert_eq!(evaluation.warnings().count(), warnings.len());
}
