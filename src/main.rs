use clap::Parser;

use boiler_efficiency_toolbox::{app, config, i18n, ui_cli};

/// 보일러 효율 계산기 CLI.
#[derive(Debug, Parser)]
#[command(name = "boiler_efficiency_toolbox")]
struct Cli {
    /// 언어 코드 (ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 예제값으로 전체 계산을 실행하고 종료한다.
    #[arg(long)]
    demo: bool,
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
    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = i18n::Translator::new(&lang);
    if cli.demo {
        ui_cli::run_demo(&tr)?;
    } else {
        app::run(&mut cfg, &tr)?;
    }
    Ok(())
}
