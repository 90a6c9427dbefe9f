//! 공정별 기계화 수준 참고 DB.
//! 내장 카탈로그는 정적 테이블로 두고 처음 조회할 때 한 번만 소유 구조로 옮긴다.
//! 값은 참고용이며 실제 가격/능률은 지역과 모델에 따라 다르다.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use log::info;
use serde::{Deserialize, Serialize};

use crate::economics::{Asset, MechanizationLevel, SharedAsset};

#[derive(Debug, Clone, Copy)]
struct AssetData {
    name: &'static str,
    price: f64,
    life_years: f64,
}

const fn asset(name: &'static str, price: f64, life_years: f64) -> AssetData {
    AssetData {
        name,
        price,
        life_years,
    }
}

#[derive(Debug)]
struct LevelData {
    label: &'static str,
    shared_asset: Option<&'static str>,
    fuel_lph: f64,
    assets: &'static [AssetData],
    work_rate_ha_per_h: f64,
    workers: u32,
}

#[derive(Debug)]
struct StepData {
    key: &'static str,
    name: &'static str,
    levels: &'static [LevelData],
}

#[derive(Debug)]
struct SharedAssetData {
    category: &'static str,
    name: &'static str,
    price: f64,
    life_years: f64,
}

#[derive(Debug)]
struct CatalogData {
    id: &'static str,
    name: &'static str,
    shared_assets: &'static [SharedAssetData],
    steps: &'static [StepData],
}

const TRACTOR: &str = "tractor";

static ONION: CatalogData = CatalogData {
    id: "onion",
    name: "양파 (트랙터 공통 자산 안분)",
    shared_assets: &[SharedAssetData {
        category: TRACTOR,
        name: "트랙터",
        price: 50_000_000.0,
        life_years: 8.0,
    }],
    steps: &[
        StepData {
            key: "sowing",
            name: "파종·육묘",
            levels: &[
                LevelData {
                    label: "인력 파종",
                    shared_asset: None,
                    fuel_lph: 0.0,
                    assets: &[],
                    work_rate_ha_per_h: 0.0312,
                    workers: 3,
                },
                LevelData {
                    label: "파종기",
                    shared_asset: None,
                    fuel_lph: 8.0,
                    assets: &[asset("파종기", 8_000_000.0, 7.0)],
                    work_rate_ha_per_h: 0.25,
                    workers: 1,
                },
            ],
        },
        StepData {
            key: "bed_prep",
            name: "정식 준비",
            levels: &[
                LevelData {
                    label: "동력방제기 + 휴립피복기",
                    shared_asset: Some(TRACTOR),
                    fuel_lph: 12.0,
                    assets: &[
                        asset("휴립피복기", 11_800_000.0, 10.0),
                        asset("동력방제기", 1_500_000.0, 7.0),
                    ],
                    work_rate_ha_per_h: 0.0588,
                    workers: 1,
                },
                LevelData {
                    label: "복합휴립피복기",
                    shared_asset: Some(TRACTOR),
                    fuel_lph: 13.5,
                    assets: &[asset("복합휴립피복기", 25_000_000.0, 10.0)],
                    work_rate_ha_per_h: 0.1429,
                    workers: 1,
                },
                LevelData {
                    label: "복합휴립피복기 (자율주행)",
                    shared_asset: Some(TRACTOR),
                    fuel_lph: 13.5,
                    assets: &[
                        asset("복합휴립피복기", 25_000_000.0, 10.0),
                        asset("자율주행키트", 12_000_000.0, 6.0),
                    ],
                    work_rate_ha_per_h: 0.1429,
                    workers: 1,
                },
            ],
        },
        StepData {
            key: "transplanting",
            name: "정식",
            levels: &[
                LevelData {
                    label: "인력 정식",
                    shared_asset: None,
                    fuel_lph: 0.0,
                    assets: &[],
                    work_rate_ha_per_h: 0.0031,
                    workers: 5,
                },
                LevelData {
                    label: "반자동 정식기",
                    shared_asset: None,
                    fuel_lph: 0.0,
                    assets: &[asset("반자동정식기", 15_000_000.0, 7.0)],
                    work_rate_ha_per_h: 0.025,
                    workers: 3,
                },
                LevelData {
                    label: "정식기 (8조)",
                    shared_asset: Some(TRACTOR),
                    fuel_lph: 10.0,
                    assets: &[asset("자동정식기(8조)", 49_000_000.0, 5.0)],
                    work_rate_ha_per_h: 0.0565,
                    workers: 2,
                },
                LevelData {
                    label: "정식기 (8조) (자율주행)",
                    shared_asset: Some(TRACTOR),
                    fuel_lph: 10.0,
                    assets: &[
                        asset("자동정식기(8조)", 49_000_000.0, 5.0),
                        asset("자율주행키트", 12_000_000.0, 6.0),
                    ],
                    work_rate_ha_per_h: 0.0629,
                    workers: 1,
                },
            ],
        },
        StepData {
            key: "spraying",
            name: "방제",
            levels: &[
                LevelData {
                    label: "인력 방제",
                    shared_asset: None,
                    fuel_lph: 0.0,
                    assets: &[],
                    work_rate_ha_per_h: 0.1053,
                    workers: 2,
                },
                LevelData {
                    label: "동력방제기",
                    shared_asset: None,
                    fuel_lph: 0.0,
                    assets: &[asset("동력방제기", 1_500_000.0, 7.0)],
                    work_rate_ha_per_h: 0.5988,
                    workers: 1,
                },
                LevelData {
                    label: "승용형 붐 스프레이어",
                    shared_asset: Some(TRACTOR),
                    fuel_lph: 10.0,
                    assets: &[asset("붐 스프레이어", 35_000_000.0, 10.0)],
                    work_rate_ha_per_h: 1.25,
                    workers: 1,
                },
                LevelData {
                    label: "방제 드론",
                    shared_asset: None,
                    fuel_lph: 0.0,
                    assets: &[asset("농업용 드론", 25_000_000.0, 5.0)],
                    work_rate_ha_per_h: 3.0303,
                    workers: 1,
                },
            ],
        },
        StepData {
            key: "stalk_cutting",
            name: "줄기절단",
            levels: &[
                LevelData {
                    label: "인력 줄기절단",
                    shared_asset: None,
                    fuel_lph: 0.0,
                    assets: &[],
                    work_rate_ha_per_h: 0.0058,
                    workers: 5,
                },
                LevelData {
                    label: "줄기절단기",
                    shared_asset: Some(TRACTOR),
                    fuel_lph: 12.0,
                    assets: &[asset("줄기절단기", 5_000_000.0, 10.0)],
                    work_rate_ha_per_h: 0.2,
                    workers: 1,
                },
            ],
        },
        StepData {
            key: "harvesting",
            name: "수확",
            levels: &[
                LevelData {
                    label: "굴취기 + 인력 수집",
                    shared_asset: Some(TRACTOR),
                    fuel_lph: 14.0,
                    assets: &[asset("굴취기", 68_000_000.0, 9.0)],
                    work_rate_ha_per_h: 0.0032,
                    workers: 5,
                },
                LevelData {
                    label: "굴취기 + 수집기",
                    shared_asset: Some(TRACTOR),
                    fuel_lph: 16.0,
                    assets: &[
                        asset("굴취기", 68_000_000.0, 9.0),
                        asset("수집기", 18_150_000.0, 9.0),
                    ],
                    work_rate_ha_per_h: 0.0671,
                    workers: 2,
                },
                LevelData {
                    label: "일관 수확기",
                    shared_asset: None,
                    fuel_lph: 18.0,
                    assets: &[asset("일관수확기", 180_000_000.0, 10.0)],
                    work_rate_ha_per_h: 0.0943,
                    workers: 1,
                },
                LevelData {
                    label: "일관 수확기 (자율주행)",
                    shared_asset: None,
                    fuel_lph: 18.0,
                    assets: &[
                        asset("일관수확기", 180_000_000.0, 10.0),
                        asset("자율주행키트", 15_000_000.0, 6.0),
                    ],
                    work_rate_ha_per_h: 0.0943,
                    workers: 1,
                },
            ],
        },
    ],
};

// 트랙터를 각 수준의 자산으로 직접 포함하는 4공정 카탈로그.
static BASIC: CatalogData = CatalogData {
    id: "basic",
    name: "기본 4공정 (트랙터 개별 포함)",
    shared_assets: &[],
    steps: &[
        StepData {
            key: "bed_prep",
            name: "휴립피복",
            levels: &[
                LevelData {
                    label: "동력분무기 + 트랙터부착형 휴립피복기",
                    shared_asset: None,
                    fuel_lph: 12.0,
                    assets: &[
                        asset("트랙터(중형)", 60_000_000.0, 8.0),
                        asset("휴립피복기", 11_800_000.0, 10.0),
                        asset("동력분무기", 1_500_000.0, 7.0),
                    ],
                    work_rate_ha_per_h: 0.10,
                    workers: 1,
                },
                LevelData {
                    label: "트랙터부착형 복합휴립피복기 (방제+두둑성형+비닐피복)",
                    shared_asset: None,
                    fuel_lph: 13.5,
                    assets: &[
                        asset("트랙터(중형)", 60_000_000.0, 8.0),
                        asset("복합휴립피복기", 25_000_000.0, 10.0),
                    ],
                    work_rate_ha_per_h: 0.13,
                    workers: 1,
                },
                LevelData {
                    label: "트랙터부착형 복합휴립피복기 + 자율주행키트",
                    shared_asset: None,
                    fuel_lph: 13.5,
                    assets: &[
                        asset("트랙터(중형)", 60_000_000.0, 8.0),
                        asset("복합휴립피복기", 25_000_000.0, 10.0),
                        asset("자율주행키트", 12_000_000.0, 6.0),
                    ],
                    work_rate_ha_per_h: 0.15,
                    workers: 1,
                },
            ],
        },
        StepData {
            key: "transplanting",
            name: "정식",
            levels: &[
                LevelData {
                    label: "인력정식",
                    shared_asset: None,
                    fuel_lph: 0.0,
                    assets: &[],
                    work_rate_ha_per_h: 0.0020,
                    workers: 5,
                },
                LevelData {
                    label: "반자동 정식기",
                    shared_asset: None,
                    fuel_lph: 0.0,
                    assets: &[asset("반자동정식기", 15_000_000.0, 7.0)],
                    work_rate_ha_per_h: 0.020,
                    workers: 3,
                },
                LevelData {
                    label: "자동 정식기",
                    shared_asset: None,
                    fuel_lph: 10.0,
                    assets: &[
                        asset("트랙터(소형)", 40_000_000.0, 8.0),
                        asset("자동정식기", 49_000_000.0, 5.0),
                    ],
                    work_rate_ha_per_h: 0.060,
                    workers: 2,
                },
                LevelData {
                    label: "자동 정식기 + 자율주행키트",
                    shared_asset: None,
                    fuel_lph: 10.0,
                    assets: &[
                        asset("트랙터(소형)", 40_000_000.0, 8.0),
                        asset("자동정식기", 49_000_000.0, 5.0),
                        asset("자율주행키트", 12_000_000.0, 6.0),
                    ],
                    work_rate_ha_per_h: 0.070,
                    workers: 1,
                },
            ],
        },
        StepData {
            key: "stalk_cutting",
            name: "줄기절단",
            levels: &[
                LevelData {
                    label: "인력 줄기절단",
                    shared_asset: None,
                    fuel_lph: 0.0,
                    assets: &[],
                    work_rate_ha_per_h: 0.0048,
                    workers: 5,
                },
                LevelData {
                    label: "트랙터부착형 줄기절단기",
                    shared_asset: None,
                    fuel_lph: 12.0,
                    assets: &[
                        asset("트랙터(중형)", 60_000_000.0, 8.0),
                        asset("줄기절단기", 5_000_000.0, 10.0),
                    ],
                    work_rate_ha_per_h: 0.30,
                    workers: 1,
                },
            ],
        },
        StepData {
            key: "digging",
            name: "굴취·수집",
            levels: &[
                LevelData {
                    label: "트랙터부착형 굴취기 + 인력수집",
                    shared_asset: None,
                    fuel_lph: 14.0,
                    assets: &[
                        asset("트랙터(대형)", 70_000_000.0, 8.0),
                        asset("굴취기", 68_000_000.0, 9.0),
                    ],
                    work_rate_ha_per_h: 0.18,
                    workers: 5,
                },
                LevelData {
                    label: "트랙터부착형 굴취기 + 트랙터부착형 수집기",
                    shared_asset: None,
                    fuel_lph: 16.0,
                    assets: &[
                        asset("트랙터(대형)", 70_000_000.0, 8.0),
                        asset("굴취기", 68_000_000.0, 9.0),
                        asset("수집기", 18_150_000.0, 9.0),
                    ],
                    work_rate_ha_per_h: 0.25,
                    workers: 2,
                },
                LevelData {
                    label: "일관 수확기",
                    shared_asset: None,
                    fuel_lph: 18.0,
                    assets: &[asset("일관수확기", 180_000_000.0, 10.0)],
                    work_rate_ha_per_h: 0.35,
                    workers: 1,
                },
                LevelData {
                    label: "일관 수확기 + 자율주행키트",
                    shared_asset: None,
                    fuel_lph: 18.0,
                    assets: &[
                        asset("일관수확기", 180_000_000.0, 10.0),
                        asset("자율주행키트", 15_000_000.0, 6.0),
                    ],
                    work_rate_ha_per_h: 0.40,
                    workers: 1,
                },
            ],
        },
    ],
};

static BUILT_IN: &[&CatalogData] = &[&ONION, &BASIC];

/// 카탈로그 로드/조회 오류.
#[derive(Debug)]
pub enum CatalogError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
    /// 내장 카탈로그 id도 아니고 파일도 아님
    Unknown(String),
    /// 수준이 하나도 없는 공정
    EmptyStep(String),
    /// 같은 키를 가진 공정이 둘 이상
    DuplicateStep(String),
    /// 한 공정 안에서 같은 라벨을 가진 수준이 둘 이상
    DuplicateLevel { step: String, label: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "카탈로그 파일 오류: {e}"),
            CatalogError::Parse(e) => write!(f, "카탈로그 파싱 오류: {e}"),
            CatalogError::Unknown(id) => write!(f, "알 수 없는 카탈로그: {id}"),
            CatalogError::EmptyStep(key) => write!(f, "공정 '{key}'에 기계화 수준이 없습니다"),
            CatalogError::DuplicateStep(key) => write!(f, "공정 키 '{key}'가 중복되었습니다"),
            CatalogError::DuplicateLevel { step, label } => {
                write!(f, "공정 '{step}'에 '{label}' 수준이 중복되었습니다")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        CatalogError::Io(value)
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(value: toml::de::Error) -> Self {
        CatalogError::Parse(value)
    }
}

/// 공정 하나와 선택 가능한 기계화 수준들.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStep {
    pub key: String,
    pub name: String,
    pub levels: Vec<MechanizationLevel>,
}

impl CatalogStep {
    /// 라벨로 수준을 찾는다. 영문은 대소문자를 구분하지 않는다.
    pub fn level(&self, label: &str) -> Option<&MechanizationLevel> {
        self.levels
            .iter()
            .find(|l| l.label.eq_ignore_ascii_case(label))
    }

    pub fn level_at(&self, index: usize) -> Option<&MechanizationLevel> {
        self.levels.get(index)
    }
}

/// 공정 순서가 고정된 기계화 수준 DB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub shared_assets: Vec<SharedAsset>,
    pub steps: Vec<CatalogStep>,
}

impl Catalog {
    /// 키 또는 표시 이름으로 공정을 찾는다.
    pub fn step(&self, key_or_name: &str) -> Option<&CatalogStep> {
        self.steps
            .iter()
            .find(|s| s.key.eq_ignore_ascii_case(key_or_name) || s.name == key_or_name)
    }

    /// TOML 문자열에서 카탈로그를 읽고 검증한다.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(src)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        info!(
            "catalog '{}' loaded from {} ({} steps)",
            catalog.id,
            path.display(),
            catalog.steps.len()
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (idx, step) in self.steps.iter().enumerate() {
            if step.levels.is_empty() {
                return Err(CatalogError::EmptyStep(step.key.clone()));
            }
            if self.steps[..idx].iter().any(|s| s.key == step.key) {
                return Err(CatalogError::DuplicateStep(step.key.clone()));
            }
            // 라벨 조회는 대소문자를 구분하지 않으므로 중복 검사도 같은 기준을 쓴다.
            for (pos, level) in step.levels.iter().enumerate() {
                if step.levels[..pos]
                    .iter()
                    .any(|l| l.label.eq_ignore_ascii_case(&level.label))
                {
                    return Err(CatalogError::DuplicateLevel {
                        step: step.key.clone(),
                        label: level.label.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    fn from_data(data: &CatalogData) -> Self {
        Self {
            id: data.id.to_string(),
            name: data.name.to_string(),
            shared_assets: data
                .shared_assets
                .iter()
                .map(|s| SharedAsset {
                    category: s.category.to_string(),
                    name: s.name.to_string(),
                    price: s.price,
                    useful_life: s.life_years,
                })
                .collect(),
            steps: data
                .steps
                .iter()
                .map(|step| CatalogStep {
                    key: step.key.to_string(),
                    name: step.name.to_string(),
                    levels: step.levels.iter().map(level_from_data).collect(),
                })
                .collect(),
        }
    }
}

fn level_from_data(level: &LevelData) -> MechanizationLevel {
    MechanizationLevel {
        label: level.label.to_string(),
        assets: level
            .assets
            .iter()
            .map(|a| Asset::new(a.name, a.price, a.life_years))
            .collect(),
        fuel_burn_rate: level.fuel_lph,
        default_work_rate: level.work_rate_ha_per_h,
        default_crew_size: level.workers,
        shared_asset: level.shared_asset.map(str::to_string),
    }
}

fn built_in_catalogs() -> &'static [Catalog] {
    static CATALOGS: OnceLock<Vec<Catalog>> = OnceLock::new();
    CATALOGS.get_or_init(|| BUILT_IN.iter().map(|d| Catalog::from_data(d)).collect())
}

/// 내장 카탈로그 id 목록.
pub fn built_in_ids() -> impl Iterator<Item = &'static str> {
    BUILT_IN.iter().map(|d| d.id)
}

pub fn built_in(id: &str) -> Option<&'static Catalog> {
    built_in_catalogs()
        .iter()
        .find(|c| c.id.eq_ignore_ascii_case(id))
}

/// 내장 id를 먼저 찾고, 없으면 파일 경로로 보고 읽는다.
pub fn resolve(id_or_path: &str) -> Result<Catalog, CatalogError> {
    if let Some(catalog) = built_in(id_or_path) {
        return Ok(catalog.clone());
    }
    let path = Path::new(id_or_path);
    if path.exists() {
        Catalog::load(path)
    } else {
        Err(CatalogError::Unknown(id_or_path.to_string()))
    }
}
