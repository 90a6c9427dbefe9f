//! 분석 조건 파일(TOML)을 읽어 공정별 도입안/비교안 계획을 만든다.
//!
//! ```toml
//! catalog = "onion"
//! area = 3000
//! area_unit = "pyeong"
//!
//! [shared_asset_prices]
//! tractor = 60000000
//!
//! [[steps]]
//! step = "transplanting"
//! introduced = { level = "정식기 (8조)", work_rate = 0.06, annual_hours = 200 }
//! comparison = { level = 0 }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogStep};
use crate::economics::{AnnualHoursMode, EnvironmentParams, Plan, ProcessStep, SharedAsset};
use crate::units::AreaUnit;

/// 조건 파일 해석 오류.
#[derive(Debug)]
pub enum ScenarioError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    /// 카탈로그에 없는 공정
    UnknownStep(String),
    /// 같은 공정이 두 번 지정됨
    DuplicateStep(String),
    /// 수준이 없는 공정
    EmptyStep(String),
    UnknownLevel { step: String, level: String },
    LevelOutOfRange { step: String, index: usize, count: usize },
    /// 선택한 수준에 없는 자산 가격 지정
    UnknownAsset { step: String, asset: String },
    UnknownSharedAsset(String),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Io(e) => write!(f, "조건 파일 입출력 오류: {e}"),
            ScenarioError::Parse(e) => write!(f, "조건 파일 파싱 오류: {e}"),
            ScenarioError::UnknownStep(s) => write!(f, "카탈로그에 없는 공정: {s}"),
            ScenarioError::DuplicateStep(s) => write!(f, "공정이 중복 지정되었습니다: {s}"),
            ScenarioError::EmptyStep(s) => write!(f, "공정 '{s}'에 기계화 수준이 없습니다"),
            ScenarioError::UnknownLevel { step, level } => {
                write!(f, "공정 '{step}'에 '{level}' 수준이 없습니다")
            }
            ScenarioError::LevelOutOfRange { step, index, count } => write!(
                f,
                "공정 '{step}'의 수준 번호 {index}가 범위(0~{})를 벗어났습니다",
                count.saturating_sub(1)
            ),
            ScenarioError::UnknownAsset { step, asset } => {
                write!(f, "공정 '{step}'의 선택 수준에 '{asset}' 자산이 없습니다")
            }
            ScenarioError::UnknownSharedAsset(c) => write!(f, "정의되지 않은 공통 자산: {c}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<std::io::Error> for ScenarioError {
    fn from(value: std::io::Error) -> Self {
        ScenarioError::Io(value)
    }
}

impl From<toml::de::Error> for ScenarioError {
    fn from(value: toml::de::Error) -> Self {
        ScenarioError::Parse(value)
    }
}

/// 수준 지정: 0부터 시작하는 번호 또는 라벨.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelRef {
    Index(usize),
    Label(String),
}

/// 한쪽 계획의 사용자 입력. 비어 있는 값은 카탈로그 기본값을 쓴다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    pub level: Option<LevelRef>,
    /// 작업 능률 [ha/h]
    pub work_rate: Option<f64>,
    pub crew_size: Option<u32>,
    /// 지정하면 연간 가동시간 직접 입력, 없으면 현재 면적만 기준
    pub annual_hours: Option<f64>,
    #[serde(default)]
    pub asset_prices: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepInput {
    /// 공정 키 또는 이름
    pub step: String,
    #[serde(default)]
    pub introduced: PlanInput,
    #[serde(default)]
    pub comparison: PlanInput,
}

/// 환경 값 중 바꿀 항목만 지정한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentOverrides {
    pub daily_wage: Option<f64>,
    pub hours_per_day: Option<f64>,
    pub fuel_price: Option<f64>,
    pub salvage_ratio: Option<f64>,
    pub repair_ratio: Option<f64>,
    pub interest_ratio: Option<f64>,
}

/// 분석 조건 파일.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    /// 내장 카탈로그 id 또는 경로
    pub catalog: Option<String>,
    pub area: Option<f64>,
    pub area_unit: Option<AreaUnit>,
    #[serde(default)]
    pub environment: EnvironmentOverrides,
    /// 공통 자산 분류별 가격
    #[serde(default)]
    pub shared_asset_prices: BTreeMap<String, f64>,
    #[serde(default)]
    pub steps: Vec<StepInput>,
}

impl ScenarioFile {
    pub fn from_toml_str(src: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path)?;
        let scenario = Self::from_toml_str(&content)?;
        log::info!(
            "scenario loaded from {} ({} step overrides)",
            path.display(),
            scenario.steps.len()
        );
        Ok(scenario)
    }

    /// 카탈로그 공정 순서대로 계획을 만든다. 파일에 없는 공정은 비교안=첫 수준,
    /// 도입안=마지막 수준의 기본값을 쓴다.
    pub fn build_steps(&self, catalog: &Catalog) -> Result<Vec<ProcessStep>, ScenarioError> {
        let mut inputs: BTreeMap<&str, &StepInput> = BTreeMap::new();
        for input in &self.steps {
            let step = catalog
                .step(&input.step)
                .ok_or_else(|| ScenarioError::UnknownStep(input.step.clone()))?;
            if inputs.insert(step.key.as_str(), input).is_some() {
                return Err(ScenarioError::DuplicateStep(step.key.clone()));
            }
        }

        catalog
            .steps
            .iter()
            .map(|step| {
                let input = inputs.get(step.key.as_str()).copied();
                let introduced = build_plan(
                    step,
                    input.map(|i| &i.introduced),
                    step.levels.len().saturating_sub(1),
                )?;
                let comparison = build_plan(step, input.map(|i| &i.comparison), 0)?;
                Ok(ProcessStep::new(&step.key, &step.name, introduced, comparison))
            })
            .collect()
    }

    pub fn apply_environment(&self, env: &mut EnvironmentParams) {
        let o = &self.environment;
        if let Some(v) = o.daily_wage {
            env.daily_wage = v;
        }
        if let Some(v) = o.hours_per_day {
            env.hours_per_day = v;
        }
        if let Some(v) = o.fuel_price {
            env.fuel_price = v;
        }
        if let Some(v) = o.salvage_ratio {
            env.ratios.salvage = v;
        }
        if let Some(v) = o.repair_ratio {
            env.ratios.repair = v;
        }
        if let Some(v) = o.interest_ratio {
            env.ratios.interest = v;
        }
    }

    /// 기준 공통 자산 목록에 분류별 가격을 덮어쓴 사본.
    pub fn shared_assets(&self, base: &[SharedAsset]) -> Result<Vec<SharedAsset>, ScenarioError> {
        if let Some(category) = self
            .shared_asset_prices
            .keys()
            .find(|c| !base.iter().any(|s| &s.category == *c))
        {
            return Err(ScenarioError::UnknownSharedAsset(category.clone()));
        }
        Ok(base
            .iter()
            .map(|s| match self.shared_asset_prices.get(&s.category) {
                Some(&price) => SharedAsset {
                    price,
                    ..s.clone()
                },
                None => s.clone(),
            })
            .collect())
    }
}

/// 조건 파일 없이 카탈로그 기본값으로 공정 목록을 만든다.
pub fn default_steps(catalog: &Catalog) -> Result<Vec<ProcessStep>, ScenarioError> {
    ScenarioFile::default().build_steps(catalog)
}

fn build_plan(
    step: &CatalogStep,
    input: Option<&PlanInput>,
    default_index: usize,
) -> Result<Plan, ScenarioError> {
    if step.levels.is_empty() {
        return Err(ScenarioError::EmptyStep(step.key.clone()));
    }
    let level = match input.and_then(|i| i.level.as_ref()) {
        None => step.level_at(default_index),
        Some(LevelRef::Index(index)) => Some(step.level_at(*index).ok_or_else(|| {
            ScenarioError::LevelOutOfRange {
                step: step.key.clone(),
                index: *index,
                count: step.levels.len(),
            }
        })?),
        Some(LevelRef::Label(label)) => Some(step.level(label).ok_or_else(|| {
            ScenarioError::UnknownLevel {
                step: step.key.clone(),
                level: label.clone(),
            }
        })?),
    }
    .ok_or_else(|| ScenarioError::EmptyStep(step.key.clone()))?;

    let mut plan = Plan::new(level.clone());
    let Some(input) = input else {
        return Ok(plan);
    };
    if let Some(rate) = input.work_rate {
        plan = plan.with_work_rate(rate);
    }
    if let Some(crew) = input.crew_size {
        plan = plan.with_crew_size(crew);
    }
    if let Some(hours) = input.annual_hours {
        plan = plan.with_annual_hours(AnnualHoursMode::Explicit(hours));
    }
    for (name, &price) in &input.asset_prices {
        if !level.assets.iter().any(|a| &a.name == name) {
            return Err(ScenarioError::UnknownAsset {
                step: step.key.clone(),
                asset: name.clone(),
            });
        }
        plan = plan.with_asset_price(name.clone(), price);
    }
    Ok(plan)
}
