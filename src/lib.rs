//! 농작업 기계화 경제성 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 쓸 수 있게 한다.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod economics;
pub mod i18n;
pub mod report;
pub mod scenario;
pub mod units;
