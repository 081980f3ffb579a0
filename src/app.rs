use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::UnitTable;
use crate::config::{self, Config};
use crate::conversion;
use crate::quantity::QuantityKind;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 정확한 배율 기반 단위 변환 도구.
#[derive(Debug, Parser)]
#[command(name = "metric_toolbox_cli", version, about)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 값을 한 단위에서 다른 단위로 변환한다 (예: convert 1000 m NM)
    #[command(allow_negative_numbers = true)]
    Convert {
        value: f64,
        from: String,
        to: String,
    },
    /// 사용 가능한 단위를 나열한다
    List {
        /// 특정 물리량만 표시 (length, time, speed, angle, rotational_rate, arbitrary)
        #[arg(long)]
        kind: Option<QuantityKind>,
    },
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// 명령행 인자에 따라 한 번 실행하거나 대화형 메뉴를 띄운다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let table = UnitTable::with_custom_units(&cfg.custom_units)?;
    match cli.command {
        Some(Command::Convert { value, from, to }) => {
            let result = conversion::convert_named(&table, value, &from, &to)?;
            println!("{}", ui_cli::format_result(result, &to, cfg.precision));
        }
        Some(Command::List { kind }) => ui_cli::print_units(&table, kind),
        None => {
            run_interactive(&mut cfg, &table)?;
            cfg.save(&cli.config)?;
        }
    }
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run_interactive(config: &mut Config, table: &UnitTable) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::UnitConversion => {
                // 변환 오류는 메뉴를 빠져나가지 않고 출력만 한다
                if let Err(e) = ui_cli::handle_unit_conversion(config, table) {
                    match e {
                        AppError::Conversion(err) => println!("{err}"),
                        other => return Err(other),
                    }
                }
            }
            MenuChoice::UnitList => ui_cli::handle_unit_list(table)?,
            MenuChoice::AngleNormalize => ui_cli::handle_angle_normalize(config)?,
            MenuChoice::Settings => ui_cli::handle_settings(config)?,
            MenuChoice::Exit => {
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
