use farm_mech_economics::economics::{
    allocate_shared_asset, evaluate, hourly_fixed_cost, sweep_area, AmortizationRatios, AreaRange,
    Asset, EnvironmentParams, MechanizationLevel, Plan, ProcessStep, Scenario, SharedAsset,
};
use proptest::prelude::*;

fn shared_level(work_rate: f64) -> MechanizationLevel {
    MechanizationLevel {
        label: "트랙터 작업".into(),
        assets: Vec::new(),
        fuel_burn_rate: 10.0,
        default_work_rate: work_rate,
        default_crew_size: 1,
        shared_asset: Some("tractor".into()),
    }
}

fn tractor() -> SharedAsset {
    SharedAsset {
        category: "tractor".into(),
        name: "트랙터".into(),
        price: 50_000_000.0,
        useful_life: 8.0,
    }
}

fn manual_plan() -> Plan {
    Plan::new(MechanizationLevel {
        label: "인력".into(),
        assets: Vec::new(),
        fuel_burn_rate: 0.0,
        default_work_rate: 0.01,
        default_crew_size: 3,
        shared_asset: None,
    })
}

proptest! {
    #[test]
    fn hourly_fixed_cost_is_zero_for_non_positive_inputs(
        price in -1.0e8f64..=0.0,
        life in -10.0f64..=0.0,
        hours in -100.0f64..=0.0,
    ) {
        let r = AmortizationRatios::default();
        prop_assert_eq!(hourly_fixed_cost(price, 8.0, 200.0, &r), 0.0);
        prop_assert_eq!(hourly_fixed_cost(60_000_000.0, life, 200.0, &r), 0.0);
        prop_assert_eq!(hourly_fixed_cost(60_000_000.0, 8.0, hours, &r), 0.0);
    }

    #[test]
    fn hourly_fixed_cost_dilutes_with_hours(
        price in 1.0e5f64..1.0e8,
        life in 1.0f64..20.0,
        hours in 1.0f64..1000.0,
    ) {
        let r = AmortizationRatios::default();
        prop_assert!(hourly_fixed_cost(price, life, hours * 2.0, &r) < hourly_fixed_cost(price, life, hours, &r));
    }

    #[test]
    fn shared_shares_partition_unity(
        rates in prop::collection::vec(0.01f64..1.0, 1..6),
        area in 0.1f64..50.0,
    ) {
        let steps: Vec<ProcessStep> = rates
            .iter()
            .enumerate()
            .map(|(i, &wr)| {
                let key = format!("s{i}");
                ProcessStep::new(key.clone(), key, Plan::new(shared_level(wr)), manual_plan())
            })
            .collect();
        let alloc = allocate_shared_asset(
            &tractor(),
            &steps,
            Scenario::Introduced,
            area,
            &AmortizationRatios::default(),
        );
        prop_assert!((alloc.share_sum() - 1.0).abs() < 1e-9);
        let cost: f64 = alloc.shares.iter().map(|s| s.annual_cost).sum();
        prop_assert!((cost - alloc.annual_fixed_total).abs() < 1e-6 * alloc.annual_fixed_total);
    }

    #[test]
    fn swapping_plans_negates_delta(
        wr_a in 0.01f64..1.0,
        wr_b in 0.001f64..0.5,
        area in 0.1f64..20.0,
    ) {
        let steps = vec![ProcessStep::new("a", "a", Plan::new(shared_level(wr_a)), manual_plan().with_work_rate(wr_b))];
        let swapped: Vec<ProcessStep> = steps.iter().map(ProcessStep::swapped).collect();
        let env = EnvironmentParams::default().with_shared_assets(vec![tractor()]);
        let d1 = evaluate(&steps, &env, area).delta;
        let d2 = evaluate(&swapped, &env, area).delta;
        prop_assert!((d1.cost + d2.cost).abs() <= 1e-6 * d1.cost.abs().max(1.0));
        prop_assert!((d1.time + d2.time).abs() <= 1e-9 * d1.time.abs().max(1.0));
    }

    #[test]
    fn evaluation_never_produces_nan(
        wr in prop_oneof![Just(0.0), -1.0f64..0.0, 0.001f64..1.0],
        area in 0.0f64..20.0,
    ) {
        let steps = vec![ProcessStep::new("a", "a", Plan::new(shared_level(wr)), manual_plan())];
        let env = EnvironmentParams::default().with_shared_assets(vec![tractor()]);
        let evaluation = evaluate(&steps, &env, area);
        prop_assert!(evaluation.totals.introduced.cost.is_finite());
        prop_assert!(evaluation.totals.comparison.cost.is_finite());
        prop_assert!(evaluation.delta.time.is_finite());
    }

    #[test]
    fn sweep_with_shared_tractor_dilutes_and_matches_evaluate(
        rates in prop::collection::vec(0.01f64..1.0, 2..5),
        min in 0.1f64..5.0,
        span in 0.5f64..20.0,
        samples in 2usize..8,
    ) {
        let steps: Vec<ProcessStep> = rates
            .iter()
            .enumerate()
            .map(|(i, &wr)| {
                let key = format!("s{i}");
                let level = MechanizationLevel {
                    assets: vec![Asset::new("작업기", 20_000_000.0, 8.0)],
                    ..shared_level(wr)
                };
                ProcessStep::new(key.clone(), key, Plan::new(level), manual_plan())
            })
            .collect();
        let env = EnvironmentParams::default().with_shared_assets(vec![tractor()]);
        let range = AreaRange::new(min, min + span, samples).expect("range");
        let points = sweep_area(&steps, &env, &range);

        let introduced: Vec<(f64, f64)> = points
            .iter()
            .filter(|p| p.scenario == Scenario::Introduced)
            .map(|p| (p.area, p.total_cost_per_area))
            .collect();
        prop_assert_eq!(introduced.len(), samples);
        for w in introduced.windows(2) {
            prop_assert!(w[1].1 <= w[0].1 * (1.0 + 1e-12), "{:?}", introduced);
        }

        for p in &points {
            let direct = evaluate(&steps, &env, p.area).totals.get(p.scenario).cost;
            prop_assert!((p.total_cost_per_area - direct).abs() <= 1e-9 * direct.abs().max(1.0));
        }
    }
}
