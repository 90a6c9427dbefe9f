use std::io::{self, Write};

use log::info;

use crate::catalog::{self, Catalog, CatalogError};
use crate::cli::{AnalysisArgs, Cli, Command, SweepArgs};
use crate::config::{Config, ConfigError};
use crate::economics::{self, AreaRange, EnvironmentParams, ProcessStep, SweepError};
use crate::i18n::{keys, Translator};
use crate::report;
use crate::scenario::{ScenarioError, ScenarioFile};
use crate::units::{convert_area, AreaUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 카탈로그 로드 오류
    Catalog(CatalogError),
    /// 분석 조건 파일 오류
    Scenario(ScenarioError),
    /// 면적 범위 오류
    Sweep(SweepError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Catalog(e) => write!(f, "카탈로그 오류: {e}"),
            AppError::Scenario(e) => write!(f, "분석 조건 오류: {e}"),
            AppError::Sweep(e) => write!(f, "면적 범위 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        AppError::Catalog(value)
    }
}

impl From<ScenarioError> for AppError {
    fn from(value: ScenarioError) -> Self {
        AppError::Scenario(value)
    }
}

impl From<SweepError> for AppError {
    fn from(value: SweepError) -> Self {
        AppError::Sweep(value)
    }
}

/// 입력 수집 단계의 결과. 평가 단계는 이 값만 사용한다.
#[derive(Debug, Clone)]
pub struct Session {
    pub catalog: Catalog,
    pub steps: Vec<ProcessStep>,
    pub env: EnvironmentParams,
    /// 분석 면적 [ha]
    pub area_ha: f64,
}

/// CLI 인자 > 조건 파일 > 설정 파일 순으로 값을 정해 공정 목록과 환경 값을 만든다.
pub fn prepare(cfg: &Config, args: &AnalysisArgs) -> Result<Session, AppError> {
    let file = match &args.scenario {
        Some(path) => ScenarioFile::load(path)?,
        None => ScenarioFile::default(),
    };

    let catalog_ref = args
        .catalog
        .as_deref()
        .or(file.catalog.as_deref())
        .unwrap_or(&cfg.analysis.catalog);
    let catalog = catalog::resolve(catalog_ref)?;
    info!("using catalog '{}'", catalog.id);

    let steps = file.build_steps(&catalog)?;

    let mut env = cfg.environment.clone();
    file.apply_environment(&mut env);
    if let Some(v) = args.daily_wage {
        env.daily_wage = v;
    }
    if let Some(v) = args.hours_per_day {
        env.hours_per_day = v;
    }
    if let Some(v) = args.fuel_price {
        env.fuel_price = v;
    }
    let base_shared = if env.shared_assets.is_empty() {
        catalog.shared_assets.clone()
    } else {
        env.shared_assets.clone()
    };
    env.shared_assets = file.shared_assets(&base_shared)?;

    let area = args.area.or(file.area).unwrap_or(cfg.analysis.area);
    let unit = args.unit.or(file.area_unit).unwrap_or(cfg.analysis.area_unit);
    let area_ha = convert_area(area, unit, AreaUnit::Hectare);

    Ok(Session {
        catalog,
        steps,
        env,
        area_ha,
    })
}

/// 면적별 재계산 범위. 지정하지 않은 값은 설정을 따른다.
pub fn sweep_range(cfg: &Config, args: &SweepArgs) -> Result<AreaRange, AppError> {
    let range = AreaRange::new(
        args.min.unwrap_or(cfg.analysis.sweep_min_ha),
        args.max.unwrap_or(cfg.analysis.sweep_max_ha),
        args.samples.unwrap_or(cfg.analysis.sweep_samples),
    )?;
    Ok(range)
}

/// 하위 명령을 실행한다.
pub fn run(cli: &Cli, cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Evaluate(args) => {
            let session = prepare(cfg, args)?;
            economics::log_input_warnings(&session.steps, &session.env);
            let evaluation = economics::evaluate(&session.steps, &session.env, session.area_ha);
            report::write_evaluation(&mut out, tr, &evaluation)?;
        }
        Command::Sweep(args) => {
            let session = prepare(cfg, &args.analysis)?;
            let range = sweep_range(cfg, args)?;
            economics::log_input_warnings(&session.steps, &session.env);
            let points = economics::sweep_area(&session.steps, &session.env, &range);
            report::write_sweep(&mut out, tr, &points)?;
            if args.by_step {
                writeln!(out)?;
                let points = economics::sweep_area_by_step(&session.steps, &session.env, &range);
                report::write_step_sweep(&mut out, tr, &points)?;
            }
        }
        Command::Catalog { catalog } => {
            let id = catalog.as_deref().unwrap_or(&cfg.analysis.catalog);
            let catalog = catalog::resolve(id)?;
            report::write_catalog(&mut out, tr, &catalog)?;
        }
        Command::ConvertArea { value, from, to } => {
            let converted = convert_area(*value, *from, *to);
            writeln!(
                out,
                "{} {converted:.4} {}",
                tr.t(keys::CONVERT_RESULT),
                to.symbol()
            )?;
        }
    }
    out.flush()?;
    Ok(())
}

