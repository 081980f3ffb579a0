//! 정확한 유리수 배율 기반 단위 변환 라이브러리. CLI 는 이 라이브러리를 얇게 감싼다.

pub mod app;
pub mod catalog;
pub mod config;
pub mod conversion;
pub mod normalized_angle;
pub mod quantity;
pub mod ratio;
pub mod ui_cli;
pub mod units;
