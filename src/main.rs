use clap::Parser;

use unit_converter::{app, config, i18n};

/// 터미널용 단위 변환기.
#[derive(Parser)]
#[command(
    name = "unit_converter_cli",
    about = "Convert values between length, weight and volume units",
    version
)]
struct Cli {
    /// 언어 코드 (auto/en-us/ko-kr/de-de)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let resolved = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&resolved, cfg.language_pack_dir.as_deref());
    app::run(&mut cfg, tr)?;
    Ok(())
}
