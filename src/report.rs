//! 평가 결과를 터미널용 텍스트 표로 출력한다.

use std::io::{self, Write};

use crate::catalog::Catalog;
use crate::economics::{Evaluation, Scenario, StepSweepPoint, SweepPoint};
use crate::i18n::{keys, Translator};
use crate::units::PYEONG_PER_HECTARE;

/// 정수로 반올림하고 세 자리마다 쉼표를 넣는다.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn scenario_label(tr: &Translator, scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Introduced => tr.t(keys::INTRODUCED),
        Scenario::Comparison => tr.t(keys::COMPARISON),
    }
}

pub fn write_evaluation(
    out: &mut impl Write,
    tr: &Translator,
    evaluation: &Evaluation,
) -> io::Result<()> {
    writeln!(out, "{}", tr.t(keys::REPORT_TITLE))?;
    writeln!(
        out,
        "{}",
        tr.fmt(
            keys::REPORT_AREA,
            &[
                &format!("{:.4}", evaluation.area),
                &format_amount(evaluation.area * PYEONG_PER_HECTARE)
            ]
        )
    )?;
    writeln!(out)?;
    for result in &evaluation.steps {
        let e = &result.evaluation;
        writeln!(
            out,
            "[{}] {}: {}",
            result.step_name,
            scenario_label(tr, result.scenario),
            result.level_label
        )?;
        let detail = tr.fmt(
            keys::DETAIL,
            &[
                &format_amount(e.hourly.total()),
                &format_amount(e.hourly.variable()),
                &format_amount(e.hourly.fixed()),
            ],
        );
        writeln!(
            out,
            "    {} {} | {} {:.1} | {}: {detail}",
            tr.t(keys::COL_COST),
            format_amount(e.cost_per_area),
            tr.t(keys::COL_TIME),
            e.time_per_area,
            tr.t(keys::COL_DETAIL)
        )?;
    }

    for allocation in &evaluation.allocations {
        writeln!(
            out,
            "{}",
            tr.fmt(
                keys::SHARED_ALLOCATION,
                &[
                    &allocation.category,
                    scenario_label(tr, allocation.scenario),
                    &format_amount(allocation.annual_fixed_total),
                    &format!("{:.1}", allocation.total_hours),
                ]
            )
        )?;
    }

    let warnings: Vec<&str> = evaluation.warnings().collect();
    if !warnings.is_empty() {
        writeln!(out)?;
        for w in warnings {
            writeln!(out, "{}: {w}", tr.t(keys::WARNING_PREFIX))?;
        }
    }

    writeln!(out)?;
    write_summary(out, tr, evaluation)
}

fn write_summary(out: &mut impl Write, tr: &Translator, evaluation: &Evaluation) -> io::Result<()> {
    let totals = &evaluation.totals;
    let delta = &evaluation.delta;
    writeln!(
        out,
        "{}",
        tr.fmt(
            keys::SUMMARY_COST,
            &[
                &format_amount(totals.comparison.cost),
                &format_amount(totals.introduced.cost)
            ]
        )
    )?;
    let cost_line = if delta.cost > 0.0 {
        tr.fmt(keys::COST_SAVED, &[&format_amount(delta.cost)])
    } else if delta.cost < 0.0 {
        tr.fmt(keys::COST_INCREASED, &[&format_amount(-delta.cost)])
    } else {
        tr.t(keys::COST_SAME).to_string()
    };
    writeln!(out, "{cost_line}")?;

    writeln!(
        out,
        "{}",
        tr.fmt(
            keys::SUMMARY_TIME,
            &[
                &format!("{:.1}", totals.comparison.time),
                &format!("{:.1}", totals.introduced.time)
            ]
        )
    )?;
    let time_line = match totals.speedup() {
        Some(ratio) if delta.time > 0.0 => tr.fmt(
            keys::TIME_SAVED,
            &[&format!("{:.1}", delta.time), &format!("{ratio:.1}")],
        ),
        Some(_) if delta.time < 0.0 => tr.t(keys::TIME_LONGER).to_string(),
        Some(_) => tr.t(keys::COST_SAME).to_string(),
        None => tr.t(keys::TIME_ZERO).to_string(),
    };
    writeln!(out, "{time_line}")
}

// 한글 라벨은 표시 폭이 글자 수와 달라 고정 폭 정렬 대신 구분자로 나눈다.
fn write_sweep_header(out: &mut impl Write, tr: &Translator) -> io::Result<()> {
    writeln!(
        out,
        "{} | {} | {}",
        tr.t(keys::COL_AREA),
        tr.t(keys::INTRODUCED),
        tr.t(keys::COMPARISON)
    )
}

/// 면적별 전 공정 합산 단위비용 표.
pub fn write_sweep(out: &mut impl Write, tr: &Translator, points: &[SweepPoint]) -> io::Result<()> {
    writeln!(out, "{}", tr.t(keys::SWEEP_TITLE))?;
    write_sweep_header(out, tr)?;
    for row in points.chunks(Scenario::ALL.len()) {
        let Some(first) = row.first() else {
            continue;
        };
        let cost = |scenario: Scenario| {
            row.iter()
                .find(|p| p.scenario == scenario)
                .map(|p| format_amount(p.total_cost_per_area))
                .unwrap_or_default()
        };
        writeln!(
            out,
            "{:.2} | {} | {}",
            first.area,
            cost(Scenario::Introduced),
            cost(Scenario::Comparison)
        )?;
    }
    Ok(())
}

/// 공정별 면적별 단위비용 표. 공정 순서는 처음 등장한 순서를 따른다.
pub fn write_step_sweep(
    out: &mut impl Write,
    tr: &Translator,
    points: &[StepSweepPoint],
) -> io::Result<()> {
    writeln!(out, "{}", tr.t(keys::SWEEP_STEP_TITLE))?;
    let mut step_keys: Vec<&str> = Vec::new();
    for p in points {
        if !step_keys.contains(&p.step_key.as_str()) {
            step_keys.push(&p.step_key);
        }
    }
    for key in step_keys {
        writeln!(out, "\n[{key}]")?;
        write_sweep_header(out, tr)?;
        let rows: Vec<&StepSweepPoint> = points.iter().filter(|p| p.step_key == key).collect();
        for pair in rows.chunks(Scenario::ALL.len()) {
            let cost = |scenario: Scenario| {
                pair.iter()
                    .find(|p| p.scenario == scenario)
                    .map(|p| format_amount(p.cost_per_area))
                    .unwrap_or_default()
            };
            writeln!(
                out,
                "{:.2} | {} | {}",
                pair[0].area,
                cost(Scenario::Introduced),
                cost(Scenario::Comparison)
            )?;
        }
    }
    Ok(())
}

/// 카탈로그의 공정/수준 목록.
pub fn write_catalog(out: &mut impl Write, tr: &Translator, catalog: &Catalog) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        tr.fmt(keys::CATALOG_TITLE, &[&format!("{} ({})", catalog.name, catalog.id)])
    )?;
    for shared in &catalog.shared_assets {
        writeln!(
            out,
            "{}",
            tr.fmt(
                keys::CATALOG_SHARED,
                &[
                    &shared.name,
                    &shared.category,
                    &format_amount(shared.price),
                    &format!("{}", shared.useful_life),
                ]
            )
        )?;
    }
    for step in &catalog.steps {
        writeln!(out, "\n[{}] {}", step.key, step.name)?;
        for (idx, level) in step.levels.iter().enumerate() {
            writeln!(out, "  {idx}) {}", level.label)?;
            writeln!(
                out,
                "     {}",
                tr.fmt(
                    keys::CATALOG_LEVEL_LINE,
                    &[
                        &format!("{:.4}", level.default_work_rate),
                        &level.default_crew_size.to_string(),
                        &format!("{:.1}", level.fuel_burn_rate),
                    ]
                )
            )?;
            let assets = if level.assets.is_empty() {
                tr.t(keys::CATALOG_NO_ASSETS).to_string()
            } else {
                level
                    .assets
                    .iter()
                    .map(|a| format!("{} {}원/{}년", a.name, format_amount(a.price), a.useful_life))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            writeln!(out, "     {}: {assets}", tr.t(keys::CATALOG_ASSETS))?;
            if let Some(category) = &level.shared_asset {
                writeln!(out, "     {}", tr.fmt(keys::CATALOG_USES_SHARED, &[category]))?;
            }
        }
    }
    Ok(())
}
