use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::units::AreaUnit;

/// 농작업 공정별 기계화 경제성(비용/시간) 비교 계산기.
#[derive(Debug, Parser)]
#[command(name = "farm_mech_economics", version)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 출력 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    pub lang: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 현재 면적 기준 공정별 비용/시간과 합계를 계산한다
    Evaluate(AnalysisArgs),
    /// 면적 범위에 따른 단위면적당 비용 변화를 계산한다
    Sweep(SweepArgs),
    /// 카탈로그의 공정과 기계화 수준을 보여준다
    Catalog {
        /// 내장 카탈로그 id 또는 TOML 경로
        #[arg(long)]
        catalog: Option<String>,
    },
    /// 면적 단위를 변환한다
    ConvertArea {
        value: f64,
        #[arg(long)]
        from: AreaUnit,
        #[arg(long, default_value = "ha")]
        to: AreaUnit,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct AnalysisArgs {
    /// 분석 조건 파일(TOML)
    #[arg(long, short)]
    pub scenario: Option<PathBuf>,
    /// 내장 카탈로그 id 또는 TOML 경로
    #[arg(long)]
    pub catalog: Option<String>,
    /// 분석 면적
    #[arg(long)]
    pub area: Option<f64>,
    /// 면적 단위 (ha, a, 평, m2)
    #[arg(long)]
    pub unit: Option<AreaUnit>,
    /// 1일 노임 [원]
    #[arg(long)]
    pub daily_wage: Option<f64>,
    /// 1일 작업 시간 [h]
    #[arg(long)]
    pub hours_per_day: Option<f64>,
    /// 면세유 가격 [원/L]
    #[arg(long)]
    pub fuel_price: Option<f64>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,
    /// 최소 면적 [ha]
    #[arg(long)]
    pub min: Option<f64>,
    /// 최대 면적 [ha]
    #[arg(long)]
    pub max: Option<f64>,
    /// 면적 구간 수(양 끝 포함)
    #[arg(long)]
    pub samples: Option<usize>,
    /// 공정별 표도 출력한다
    #[arg(long)]
    pub by_step: bool,
}
