use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
///
/// 변환 실패는 폼 알림으로만 처리하고 여기까지 올라오지 않는다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
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

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 설정 메뉴에서 언어를 바꾸면 저장 직후 번역기를 다시 만들어
/// 다음 출력부터 새 언어를 적용한다.
pub fn run(config: &mut Config, tr: Translator) -> Result<(), AppError> {
    let mut tr = tr;
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Convert => ui_cli::handle_convert(&tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(&tr, config)?;
                config.save()?;
                let resolved = i18n::resolve_language(&config.language, None);
                tr = Translator::new_with_pack(&resolved, config.language_pack_dir.as_deref());
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
