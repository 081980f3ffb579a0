use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::quantity::QuantityKind;

/// 기본 설정 파일 이름.
pub const DEFAULT_PATH: &str = "config.toml";

fn default_precision() -> usize {
    6
}

fn default_denominator() -> i64 {
    1
}

/// 설정 파일에서 정의하는 사용자 단위.
///
/// ```toml
/// [[custom_units]]
/// name = "centimetre"
/// symbols = ["cm"]
/// kind = "length"
/// numerator = 1
/// denominator = 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomUnit {
    pub name: String,
    #[serde(default)]
    pub symbols: Vec<String>,
    pub kind: QuantityKind,
    pub numerator: i64,
    #[serde(default = "default_denominator")]
    pub denominator: i64,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// 변환 결과를 출력할 소수 자릿수
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default)]
    pub custom_units: Vec<CustomUnit>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            custom_units: Vec::new(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
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
        tracing::debug!(path = %path.display(), custom_units = cfg.custom_units.len(), "loaded config");
        Ok(cfg)
    } else {
        tracing::info!(path = %path.display(), "config not found, writing defaults");
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
