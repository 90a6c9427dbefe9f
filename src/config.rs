use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::economics::EnvironmentParams;
use crate::units::AreaUnit;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 분석 기본값(카탈로그, 면적, 면적별 그래프 범위).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisDefaults {
    /// 내장 카탈로그 id 또는 카탈로그 TOML 경로
    pub catalog: String,
    /// 분석 대상 면적 (area_unit 기준)
    pub area: f64,
    pub area_unit: AreaUnit,
    /// 면적별 단위비용 범위 [ha]
    pub sweep_min_ha: f64,
    pub sweep_max_ha: f64,
    pub sweep_samples: usize,
}

impl Default for AnalysisDefaults {
    fn default() -> Self {
        Self {
            catalog: "onion".to_string(),
            area: 1.0,
            area_unit: AreaUnit::Hectare,
            sweep_min_ha: 1.0,
            sweep_max_ha: 10.0,
            sweep_samples: 10,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 출력 언어(auto/ko/en)
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub environment: EnvironmentParams,
    #[serde(default)]
    pub analysis: AnalysisDefaults,
}

fn default_language() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            environment: EnvironmentParams::default(),
            analysis: AnalysisDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 직렬화/역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        log::info!("config loaded from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        log::info!("default config written to {}", path.display());
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }

    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }
}
