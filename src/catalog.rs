//! 기호로 단위를 찾는 런타임 단위표.

use crate::config::CustomUnit;
use crate::conversion::ConversionError;
use crate::quantity::QuantityKind;
use crate::units::{self, AnyUnit, SymbolEntry};

/// 단위표의 한 항목.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitEntry {
    pub name: String,
    pub symbols: Vec<String>,
    pub unit: AnyUnit,
}

impl UnitEntry {
    fn matches(&self, key: &str) -> bool {
        self.name.to_lowercase() == key || self.symbols.iter().any(|s| s.to_lowercase() == key)
    }
}

/// 표준 카탈로그와 사용자 정의 단위를 함께 담는다.
#[derive(Debug, Clone, Default)]
pub struct UnitTable {
    entries: Vec<UnitEntry>,
}

impl UnitTable {
    /// 빈 단위표.
    pub fn new() -> Self {
        Self::default()
    }

    /// 기본 제공 단위를 모두 담은 단위표.
    pub fn standard() -> Self {
        let groups: [&[SymbolEntry]; 6] = [
            units::SI_SYMBOLS,
            units::length::SYMBOLS,
            units::time::SYMBOLS,
            units::speed::SYMBOLS,
            units::angle::SYMBOLS,
            units::rotation::SYMBOLS,
        ];
        let entries = groups
            .iter()
            .flat_map(|g| g.iter())
            .map(|(name, symbols, unit)| UnitEntry {
                name: (*name).to_string(),
                symbols: symbols.iter().map(|s| (*s).to_string()).collect(),
                unit: *unit,
            })
            .collect();
        Self { entries }
    }

    /// 표준 단위표에 설정 파일의 사용자 정의 단위를 추가한다.
    pub fn with_custom_units(custom: &[CustomUnit]) -> Result<Self, ConversionError> {
        let mut table = Self::standard();
        for def in custom {
            let unit = AnyUnit::try_new(def.kind, def.numerator, def.denominator)?;
            table.register(&def.name, &def.symbols, unit)?;
        }
        Ok(table)
    }

    /// 단위를 등록한다. 앞뒤 공백을 제거한 이름과 기호를 저장하며,
    /// 빈 키나 이미 쓰이고 있는 키는 거부한다.
    pub fn register(
        &mut self,
        name: &str,
        symbols: &[String],
        unit: AnyUnit,
    ) -> Result<(), ConversionError> {
        let name = name.trim();
        let symbols: Vec<String> = symbols.iter().map(|s| s.trim().to_string()).collect();
        let mut keys: Vec<String> = Vec::with_capacity(symbols.len() + 1);
        for key in std::iter::once(name).chain(symbols.iter().map(String::as_str)) {
            if key.is_empty() {
                return Err(ConversionError::EmptySymbol);
            }
            let lower = key.to_lowercase();
            if self.lookup(key).is_some() || keys.contains(&lower) {
                return Err(ConversionError::DuplicateSymbol(key.to_string()));
            }
            keys.push(lower);
        }
        tracing::info!(name, kind = %unit.kind(), ratio = %unit.ratio(), "registered unit");
        self.entries.push(UnitEntry {
            name: name.to_string(),
            symbols,
            unit,
        });
        Ok(())
    }

    /// 이름 또는 기호로 단위를 찾는다. 대소문자와 앞뒤 공백을 무시한다.
    pub fn lookup(&self, symbol: &str) -> Option<AnyUnit> {
        let key = symbol.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        let found = self.entries.iter().find(|e| e.matches(&key)).map(|e| e.unit);
        tracing::trace!(symbol, found = found.is_some(), "unit lookup");
        found
    }

    pub fn entries(&self) -> &[UnitEntry] {
        &self.entries
    }

    pub fn units_of(&self, kind: QuantityKind) -> impl Iterator<Item = &UnitEntry> {
        self.entries.iter().filter(move |e| e.unit.kind() == kind)
    }
}
