use crate::config::Config;
use crate::efficiency;
use crate::fuel;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 연료 식별 오류
    Fuel(fuel::FuelError),
    /// 효율 계산 오류
    Efficiency(efficiency::EfficiencyError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Fuel(e) => write!(f, "{e}"),
            AppError::Efficiency(e) => write!(f, "{e}"),
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

impl From<fuel::FuelError> for AppError {
    fn from(value: fuel::FuelError) -> Self {
        AppError::Fuel(value)
    }
}

impl From<efficiency::EfficiencyError> for AppError {
    fn from(value: efficiency::EfficiencyError) -> Self {
        AppError::Efficiency(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Direct => ui_cli::handle_direct(tr)?,
            MenuChoice::Consumption => ui_cli::handle_consumption(tr, config)?,
            MenuChoice::FlueLoss => ui_cli::handle_flue_loss(tr, config)?,
            MenuChoice::Analysis => ui_cli::handle_analysis(tr, config)?,
            MenuChoice::Fuels => ui_cli::handle_fuels(tr),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
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
