use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 헥타르(ha)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    #[serde(alias = "ha")]
    Hectare,
    /// 아르(a) = 100 m²
    #[serde(alias = "a")]
    Are,
    /// 평 (1 ha = 3025평)
    #[serde(alias = "평")]
    Pyeong,
    #[serde(alias = "m2")]
    SquareMeter,
}

pub const PYEONG_PER_HECTARE: f64 = 3025.0;

fn to_hectare(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::Hectare => value,
        AreaUnit::Are => value / 100.0,
        AreaUnit::Pyeong => value / PYEONG_PER_HECTARE,
        AreaUnit::SquareMeter => value / 10_000.0,
    }
}

fn from_hectare(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::Hectare => value,
        AreaUnit::Are => value * 100.0,
        AreaUnit::Pyeong => value * PYEONG_PER_HECTARE,
        AreaUnit::SquareMeter => value * 10_000.0,
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    let ha = to_hectare(value, from);
    from_hectare(ha, to)
}

impl AreaUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::Hectare => "ha",
            AreaUnit::Are => "a",
            AreaUnit::Pyeong => "평",
            AreaUnit::SquareMeter => "m2",
        }
    }

    /// `ha`, `a`, `평`/`pyeong`, `m2`/`m²` 등의 문자열을 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ha" | "hectare" | "헥타르" => Some(AreaUnit::Hectare),
            "a" | "are" | "아르" => Some(AreaUnit::Are),
            "평" | "py" | "pyeong" => Some(AreaUnit::Pyeong),
            "m2" | "m²" | "sqm" | "square_meter" => Some(AreaUnit::SquareMeter),
            _ => None,
        }
    }
}

impl std::str::FromStr for AreaUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AreaUnit::parse(s).ok_or_else(|| format!("알 수 없는 면적 단위: {s}"))
    }
}
