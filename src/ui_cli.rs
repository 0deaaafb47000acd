use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, MAX_PRECISION};
use crate::i18n::{keys, Translator};
use crate::registry::{ConversionRow, Registry};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Converter,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("\n{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("1) {}", tr.t(keys::MAIN_MENU_CONVERTER));
    println!("2) {}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("0) {}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Converter),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 선택한 카테고리는 다음 실행의 기본값으로 남긴다.
pub fn handle_conversion(
    tr: &Translator,
    cfg: &mut Config,
    registry: &Registry,
) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::CONVERTER_HEADING));
    for (i, def) in registry.categories().iter().enumerate() {
        println!("{}) {}", i + 1, tr.t(def.label_key));
    }
    let category = loop {
        let sel = read_line(tr.t(keys::CONVERTER_PROMPT_CATEGORY))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if (1..=registry.categories().len()).contains(&n) {
                break registry.categories()[n - 1].category;
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };

    let units = registry.units(category.key())?;
    for (i, unit) in units.iter().enumerate() {
        println!("{}) {}", i + 1, tr.t(unit.label_key));
    }
    let from_key = loop {
        let sel = read_line(tr.t(keys::CONVERTER_PROMPT_FROM_UNIT))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if (1..=units.len()).contains(&n) {
                break units[n - 1].key;
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };

    let value = read_f64(tr, tr.t(keys::CONVERTER_PROMPT_VALUE))?;
    let precision = read_precision(tr, cfg.precision)?;

    let rows = registry.convert_all(category.key(), from_key, value)?;
    print_results(tr, &rows, precision);
    cfg.default_category = category;
    Ok(())
}

/// 설정 메뉴를 처리한다. 저장은 호출한 쪽에서 담당한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}: {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}: {}", tr.t(keys::SETTINGS_CURRENT_PRECISION), cfg.precision);
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => {
            let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            match lang.trim() {
                "auto" | "pt-br" | "en-us" => {
                    cfg.language = lang.trim().to_string();
                    println!("{}", tr.t(keys::SETTINGS_LANG_RESTART));
                    println!("{}", tr.t(keys::SETTINGS_SAVED));
                }
                _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
            }
        }
        "2" => {
            let prec = read_line(tr.t(keys::SETTINGS_PROMPT_PRECISION))?;
            match prec.trim().parse::<u8>() {
                Ok(p) if p <= MAX_PRECISION => {
                    cfg.precision = p;
                    println!("{}", tr.t(keys::SETTINGS_SAVED));
                }
                _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
            }
        }
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

/// 변환 결과를 표 형태로 출력한다. 입력 단위 행에는 원본 표시를 붙인다.
fn print_results(tr: &Translator, rows: &[ConversionRow], precision: usize) {
    let labels: Vec<&str> = rows.iter().map(|r| tr.t(r.label_key)).collect();
    let width = labels
        .iter()
        .map(|l| l.chars().count())
        .chain([tr.t(keys::CONVERTER_TABLE_UNIT).chars().count()])
        .max()
        .unwrap_or(0);
    println!(
        "{:<width$} | {}",
        tr.t(keys::CONVERTER_TABLE_UNIT),
        tr.t(keys::CONVERTER_TABLE_VALUE)
    );
    for (row, label) in rows.iter().zip(labels.iter()) {
        let marker = if row.is_source {
            format!(" {}", tr.t(keys::CONVERTER_SOURCE_MARKER))
        } else {
            String::new()
        };
        let pad = width.saturating_sub(label.chars().count());
        println!("{label}{:pad$} | {:.precision$}{marker}", "", row.value);
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_precision(tr: &Translator, default: u8) -> Result<usize, AppError> {
    loop {
        let s = read_line(tr.t(keys::CONVERTER_PROMPT_PRECISION))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default.min(MAX_PRECISION) as usize);
        }
        match trimmed.parse::<u8>() {
            Ok(p) if p <= MAX_PRECISION => return Ok(p as usize),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}
