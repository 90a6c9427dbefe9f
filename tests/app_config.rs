use std::path::PathBuf;

use farm_mech_economics::app::{prepare, sweep_range};
use farm_mech_economics::cli::{AnalysisArgs, SweepArgs};
use farm_mech_economics::config::{self, Config};
use farm_mech_economics::i18n::{resolve_language, Language, Translator};
use farm_mech_economics::report::{format_amount, write_evaluation, write_sweep};
use farm_mech_economics::units::{convert_area, AreaUnit};
use farm_mech_economics::economics::{evaluate, sweep_area, Scenario};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("farm_mech_{}_{name}", std::process::id()))
}

#[test]
fn default_config_is_written_and_reloaded() {
    let path = temp_path("config.toml");
    let _ = std::fs::remove_file(&path);
    let cfg = config::load_or_default(&path).expect("write default");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded, cfg);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn partial_config_keeps_defaults() {
    let cfg = Config::from_toml_str("[environment]\nfuel_price = 1300\n").expect("parse");
    assert_eq!(cfg.environment.fuel_price, 1_300.0);
    assert_eq!(cfg.environment.daily_wage, 153_294.0);
    assert_eq!(cfg.environment.ratios.repair, 0.06);
    assert_eq!(cfg.analysis.catalog, "onion");
    assert_eq!(cfg.language, "auto");
}

#[test]
fn area_conversions() {
    assert_eq!(convert_area(1.0, AreaUnit::Hectare, AreaUnit::Pyeong), 3_025.0);
    assert_eq!(convert_area(3_025.0, AreaUnit::Pyeong, AreaUnit::Hectare), 1.0);
    assert_eq!(convert_area(250.0, AreaUnit::Are, AreaUnit::Hectare), 2.5);
    assert_eq!(convert_area(1.0, AreaUnit::Hectare, AreaUnit::SquareMeter), 10_000.0);
    assert_eq!("평".parse::<AreaUnit>(), Ok(AreaUnit::Pyeong));
    assert_eq!("M2".parse::<AreaUnit>(), Ok(AreaUnit::SquareMeter));
    assert!("acre".parse::<AreaUnit>().is_err());
}

#[test]
fn cli_arguments_take_precedence() {
    let cfg = Config::default();
    let args = AnalysisArgs {
        catalog: Some("basic".into()),
        area: Some(6_050.0),
        unit: Some(AreaUnit::Pyeong),
        fuel_price: Some(1_000.0),
        ..AnalysisArgs::default()
    };
    let session = prepare(&cfg, &args).expect("session");
    assert_eq!(session.catalog.id, "basic");
    assert_eq!(session.area_ha, 2.0);
    assert_eq!(session.env.fuel_price, 1_000.0);
    assert!(session.env.shared_assets.is_empty());
    assert_eq!(session.steps.len(), 4);
}

#[test]
fn config_catalog_supplies_shared_assets() {
    let session = prepare(&Config::default(), &AnalysisArgs::default()).expect("session");
    assert_eq!(session.catalog.id, "onion");
    assert_eq!(session.env.shared_assets.len(), 1);
    assert_eq!(session.area_ha, 1.0);
}

#[test]
fn sweep_range_defaults_from_config() {
    let range = sweep_range(&Config::default(), &SweepArgs::default()).expect("range");
    assert_eq!(range.min(), 1.0);
    assert_eq!(range.max(), 10.0);
    assert_eq!(range.samples(), 10);
    let bad = SweepArgs {
        min: Some(5.0),
        max: Some(1.0),
        ..SweepArgs::default()
    };
    assert!(sweep_range(&Config::default(), &bad).is_err());
}

#[test]
fn amounts_are_grouped() {
    assert_eq!(format_amount(0.0), "0");
    assert_eq!(format_amount(999.4), "999");
    assert_eq!(format_amount(1_110_285.0), "1,110,285");
    assert_eq!(format_amount(-61_125.0), "-61,125");
}

#[test]
fn language_resolution() {
    assert_eq!(resolve_language("en", Some("ko")), "en");
    assert_eq!(resolve_language("auto", Some("ko-KR")), "ko");
    assert_eq!(Translator::new("en_US.UTF-8").language(), Language::En);
    assert_eq!(Translator::new("fr").language(), Language::Ko);
}

#[test]
fn evaluation_report_mentions_every_step() {
    let session = prepare(&Config::default(), &AnalysisArgs::default()).expect("session");
    let evaluation = evaluate(&session.steps, &session.env, session.area_ha);
    let mut buf = Vec::new();
    write_evaluation(&mut buf, &Translator::new("ko"), &evaluation).expect("write");
    let text = String::from_utf8(buf).expect("utf8");
    for step in &session.catalog.steps {
        assert!(text.contains(&step.name), "missing {}", step.name);
    }
    assert!(text.contains("도입안"));
}

#[test]
fn report_rows_use_separators_instead_of_padding() {
    let session = prepare(&Config::default(), &AnalysisArgs::default()).expect("session");
    let tr = Translator::new("ko");
    let evaluation = evaluate(&session.steps, &session.env, session.area_ha);
    let mut buf = Vec::new();
    write_evaluation(&mut buf, &tr, &evaluation).expect("write");
    let text = String::from_utf8(buf).expect("utf8");
    for result in &evaluation.steps {
        let label = if result.scenario == Scenario::Introduced {
            "도입안"
        } else {
            "비교안"
        };
        let line = format!("[{}] {label}: {}", result.step_name, result.level_label);
        assert!(text.lines().any(|l| l == line), "missing {line}");
    }

    let range = sweep_range(&Config::default(), &SweepArgs::default()).expect("range");
    let points = sweep_area(&session.steps, &session.env, &range);
    let mut buf = Vec::new();
    write_sweep(&mut buf, &tr, &points).expect("write");
    let text = String::from_utf8(buf).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "면적(ha) | 도입안 | 비교안");
    assert!(lines[2].starts_with("1.00 | "));
    assert_eq!(lines.len(), 2 + range.samples());
}
