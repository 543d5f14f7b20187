use std::io::{self, Write};

use crate::app::AppError;
use crate::category::Category;
use crate::config::Config;
use crate::conversion::selectable_labels;
use crate::form::FormState;
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 변환 폼을 처리한다.
///
/// 단위는 엔터로 건너뛸 수 있고 값은 한 줄 그대로 받는다. 검증은 폼이
/// 수행하며 실패는 알림 한 줄로 표시하고 메뉴로 돌아간다.
pub fn handle_convert(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    let menu = selectable_menu();
    print_unit_menu(tr, &menu);
    let from = read_unit_choice(tr, &menu, keys::CONVERT_PROMPT_FROM)?;
    let to = read_unit_choice(tr, &menu, keys::CONVERT_PROMPT_TO)?;
    let value = read_line(tr.t(keys::CONVERT_PROMPT_VALUE))?;

    let form = FormState::new()
        .set_from_unit(&from)
        .set_to_unit(&to)
        .set_value(value.trim());
    let (form, alert) = form.convert();
    match alert {
        Some(err) => println!("{}", tr.t(err.alert_key())),
        None => println!(
            "{} {} {}",
            tr.t(keys::CONVERT_RESULT),
            form.result_text(),
            form.to_unit
        ),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "auto".to_string(),
        "2" => "en-us".to_string(),
        "3" => "ko-kr".to_string(),
        "4" => "de-de".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.language.clone()
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

/// 카테고리 순서대로 이어붙인 선택 메뉴 라벨 목록.
fn selectable_menu() -> Vec<&'static str> {
    Category::ALL
        .iter()
        .flat_map(|c| selectable_labels(*c))
        .collect()
}

fn print_unit_menu(tr: &Translator, menu: &[&'static str]) {
    let mut n: usize = 1;
    for category in Category::ALL {
        println!("[{}]", tr.t(category_key(category)));
        for label in selectable_labels(category) {
            println!("  {n}) {label}");
            n += 1;
        }
    }
    debug_assert_eq!(n - 1, menu.len());
}

fn category_key(category: Category) -> &'static str {
    match category {
        Category::Length => keys::CATEGORY_LENGTH,
        Category::Weight => keys::CATEGORY_WEIGHT,
        Category::Volume => keys::CATEGORY_VOLUME,
    }
}

/// 단위 번호를 읽어 라벨을 돌려준다. 빈 입력은 미선택을 뜻한다.
fn read_unit_choice(
    tr: &Translator,
    menu: &[&'static str],
    prompt_key: &str,
) -> Result<String, AppError> {
    loop {
        let sel = read_line(tr.t(prompt_key))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(String::new());
        }
        if let Ok(n) = sel.parse::<usize>() {
            if n >= 1 && n <= menu.len() {
                return Ok(menu[n - 1].to_string());
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
