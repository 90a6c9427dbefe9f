//! 단위 정의 및 변환 모듈 모음.

pub mod area;

pub use area::{convert_area, AreaUnit, PYEONG_PER_HECTARE};
