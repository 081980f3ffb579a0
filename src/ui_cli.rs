use std::io::{self, Write};

use crate::app::AppError;
use crate::catalog::UnitTable;
use crate::config::Config;
use crate::conversion;
use crate::normalized_angle::{AngleRange, AngleUnit, NormalizedAngle};
use crate::quantity::QuantityKind;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    UnitList,
    AngleNormalize,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Metric Toolbox ===");
    println!("1) 단위 변환기");
    println!("2) 단위 목록");
    println!("3) 각도 정규화");
    println!("4) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::UnitList),
            "3" => return Ok(MenuChoice::AngleNormalize),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(cfg: &Config, table: &UnitTable) -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("참고: si 는 종류에 관계없이 SI 기준값으로 취급됩니다.");
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line("입력 단위(ex: m, kn, deg): ")?;
    let to_unit = read_line("변환 단위(ex: NM, m/s, rad): ")?;
    let result = conversion::convert_named(table, value, from_unit.trim(), to_unit.trim())?;
    println!("변환 결과: {}", format_result(result, to_unit.trim(), cfg.precision));
    Ok(())
}

/// 단위 목록 메뉴를 처리한다.
pub fn handle_unit_list(table: &UnitTable) -> Result<(), AppError> {
    println!("\n-- 단위 목록 --");
    println!("물리량: length, time, speed, angle, rotational_rate, arbitrary");
    let sel = read_line("물리량 (전체는 엔터): ")?;
    let kind = if sel.trim().is_empty() {
        None
    } else {
        match sel.trim().parse::<QuantityKind>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                println!("{e}");
                return Ok(());
            }
        }
    };
    print_units(table, kind);
    Ok(())
}

/// 각도 정규화 메뉴를 처리한다.
pub fn handle_angle_normalize(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 각도 정규화 --");
    let value = read_f64("각도 값: ")?;
    let unit = match read_line("단위: 1=deg 2=rad: ")?.trim() {
        "2" => AngleUnit::Radian,
        _ => AngleUnit::Degree,
    };
    let range = match read_line("범위: 1=0부터 2=0 중심: ")?.trim() {
        "2" => AngleRange::Symmetric,
        _ => AngleRange::FromZero,
    };
    let angle = NormalizedAngle::new(value, unit, range);
    let p = cfg.precision;
    println!(
        "정규화 결과: {:.p$} deg / {:.p$} rad",
        angle.in_degrees(),
        angle.in_radians()
    );
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 출력 자릿수: {}", cfg.precision);
    let sel = read_line("변경할 자릿수(취소하려면 엔터): ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim().parse::<usize>() {
        Ok(p) if p <= 17 => {
            cfg.precision = p;
            println!("출력 자릿수가 {p} 로 설정되었습니다.");
        }
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

/// 변환 결과를 설정된 자릿수로 포맷한다.
pub fn format_result(value: f64, unit: &str, precision: usize) -> String {
    format!("{value:.precision$} {unit}")
}

/// 단위표를 물리량별로 출력한다.
pub fn print_units(table: &UnitTable, kind: Option<QuantityKind>) {
    for k in QuantityKind::ALL {
        if kind.is_some_and(|want| want != k) {
            continue;
        }
        let mut entries = table.units_of(k).peekable();
        if entries.peek().is_none() {
            continue;
        }
        println!("[{k}]");
        for e in entries {
            println!(
                "  {:<20} {:<24} x{}",
                e.name,
                e.symbols.join(", "),
                e.unit.ratio()
            );
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_uses_precision() {
        assert_eq!(format_result(0.539956803, "NM", 3), "0.540 NM");
        assert_eq!(format_result(2.0, "m", 0), "2 m");
    }
}
