use sys_locale::get_locale;

use crate::fuel::FuelType;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_DIRECT: &str = "main_menu.direct";
    pub const MAIN_MENU_CONSUMPTION: &str = "main_menu.consumption";
    pub const MAIN_MENU_FLUE_LOSS: &str = "main_menu.flue_loss";
    pub const MAIN_MENU_ANALYSIS: &str = "main_menu.analysis";
    pub const MAIN_MENU_FUELS: &str = "main_menu.fuels";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROMPT_USEFUL_ENERGY: &str = "prompt.useful_energy";
    pub const PROMPT_CONSUMED_ENERGY: &str = "prompt.consumed_energy";
    pub const PROMPT_USEFUL_POWER: &str = "prompt.useful_power";
    pub const PROMPT_FUEL_FLOW: &str = "prompt.fuel_flow";
    pub const PROMPT_FLUE_TEMP: &str = "prompt.flue_temp";
    pub const PROMPT_AIR_TEMP: &str = "prompt.air_temp";
    pub const PROMPT_CO2: &str = "prompt.co2";
    pub const PROMPT_FUEL_SELECT: &str = "prompt.fuel_select";
    pub const PROMPT_BASIS_SELECT: &str = "prompt.basis_select";
    pub const ANALYSIS_HEADING: &str = "analysis.heading";
    pub const ANALYSIS_HINT_OPTIONAL: &str = "analysis.hint_optional";
    pub const ANALYSIS_NO_INPUTS: &str = "analysis.no_inputs";

    pub const METHOD_DIRECT: &str = "method.direct";
    pub const METHOD_CONSUMPTION: &str = "method.consumption";
    pub const METHOD_FLUE_LOSS: &str = "method.flue_loss";

    pub const RESULT_EFFICIENCY: &str = "result.efficiency";
    pub const RESULT_CONSUMED_POWER: &str = "result.consumed_power";
    pub const RESULT_HEATING_VALUE: &str = "result.heating_value";
    pub const RESULT_FLUE_LOSS: &str = "result.flue_loss";
    pub const RESULT_DELTA_T: &str = "result.delta_t";
    pub const RESULT_COEFFICIENTS: &str = "result.coefficients";

    pub const FUELS_HEADING: &str = "fuels.heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const DEMO_TITLE: &str = "demo.title";
    pub const DEMO_DIRECT: &str = "demo.direct";
    pub const DEMO_CONSUMPTION: &str = "demo.consumption";
    pub const DEMO_FLUE_LOSS: &str = "demo.flue_loss";
    pub const DEMO_ANALYSIS: &str = "demo.analysis";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &'static str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// 연료명의 표시 문자열.
    pub fn fuel_label(&self, fuel: FuelType) -> &'static str {
        match (self.lang, fuel) {
            (Language::Ko, FuelType::NaturalGas) => "천연가스",
            (Language::Ko, FuelType::HeatingOil) => "난방유",
            (Language::Ko, FuelType::Propane) => "프로판",
            (Language::Ko, FuelType::Wood) => "목재",
            (Language::En, FuelType::NaturalGas) => "Natural gas",
            (Language::En, FuelType::HeatingOil) => "Heating oil",
            (Language::En, FuelType::Propane) => "Propane",
            (Language::En, FuelType::Wood) => "Wood",
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn detect_system_language() -> Option<String> {
    get_locale().and_then(|loc| normalize_lang(&loc))
}

fn ko(key: &'static str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",

        MAIN_MENU_TITLE => "=== 보일러 효율 계산기 ===",
        MAIN_MENU_DIRECT => "1) 직접법 (에너지 비율)",
        MAIN_MENU_CONSUMPTION => "2) 연료 소비 기반",
        MAIN_MENU_FLUE_LOSS => "3) 배기가스 손실법 (Siegert)",
        MAIN_MENU_ANALYSIS => "4) 종합 분석",
        MAIN_MENU_FUELS => "5) 연료 목록",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",

        PROMPT_USEFUL_ENERGY => "유효 에너지 [kWh]: ",
        PROMPT_CONSUMED_ENERGY => "소비 에너지 [kWh]: ",
        PROMPT_USEFUL_POWER => "유효 열출력 [kW]: ",
        PROMPT_FUEL_FLOW => "연료 소비율 [m³/h 또는 kg/h]: ",
        PROMPT_FLUE_TEMP => "배기가스 온도 [°C]: ",
        PROMPT_AIR_TEMP => "공기 온도 [°C]: ",
        PROMPT_CO2 => "CO2 농도 [%]: ",
        PROMPT_FUEL_SELECT => "연료 선택 (1=천연가스 2=난방유 3=프로판 4=목재): ",
        PROMPT_BASIS_SELECT => "발열량 기준 (1=PCI 2=PCS): ",
        ANALYSIS_HEADING => "-- 종합 분석 --",
        ANALYSIS_HINT_OPTIONAL => "값이 없는 항목은 엔터로 건너뜁니다.",
        ANALYSIS_NO_INPUTS => "어느 방법에도 충분한 입력이 없습니다.",

        METHOD_DIRECT => "직접법",
        METHOD_CONSUMPTION => "연료 소비 기반",
        METHOD_FLUE_LOSS => "배기가스 손실법",

        RESULT_EFFICIENCY => "효율",
        RESULT_CONSUMED_POWER => "투입 열출력",
        RESULT_HEATING_VALUE => "사용 발열량",
        RESULT_FLUE_LOSS => "배기가스 손실",
        RESULT_DELTA_T => "온도차",
        RESULT_COEFFICIENTS => "사용 계수",

        FUELS_HEADING => "=== 지원 연료 ===",

        SETTINGS_HEADING => "-- 설정 --",
        SETTINGS_CURRENT => "현재 기본 연료",
        SETTINGS_SAVED => "설정이 저장되었습니다.",

        DEMO_TITLE => "=== 보일러 효율 계산 예제 ===",
        DEMO_DIRECT => "1. 직접법: 유효 80 kWh / 소비 100 kWh",
        DEMO_CONSUMPTION => "2. 연료 소비 기반: 20 kW, 천연가스 2.5 m³/h, PCI",
        DEMO_FLUE_LOSS => "3. 배기가스 손실법: 배기 180°C, 공기 20°C, CO2 10%",
        DEMO_ANALYSIS => "4. 종합 분석 (모든 입력 제공)",

        _ => key,
    }
}

fn en(key: &'static str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",

        MAIN_MENU_TITLE => "=== Boiler Efficiency Toolbox ===",
        MAIN_MENU_DIRECT => "1) Direct method (energy ratio)",
        MAIN_MENU_CONSUMPTION => "2) Fuel consumption method",
        MAIN_MENU_FLUE_LOSS => "3) Flue-gas loss method (Siegert)",
        MAIN_MENU_ANALYSIS => "4) Full analysis",
        MAIN_MENU_FUELS => "5) Fuel list",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid selection, try again.",
        ERROR_INVALID_NUMBER => "Enter a number.",

        PROMPT_USEFUL_ENERGY => "Useful energy [kWh]: ",
        PROMPT_CONSUMED_ENERGY => "Consumed energy [kWh]: ",
        PROMPT_USEFUL_POWER => "Useful power [kW]: ",
        PROMPT_FUEL_FLOW => "Fuel consumption [m³/h or kg/h]: ",
        PROMPT_FLUE_TEMP => "Flue gas temperature [°C]: ",
        PROMPT_AIR_TEMP => "Ambient air temperature [°C]: ",
        PROMPT_CO2 => "CO2 concentration [%]: ",
        PROMPT_FUEL_SELECT => "Fuel (1=natural gas 2=heating oil 3=propane 4=wood): ",
        PROMPT_BASIS_SELECT => "Heating value basis (1=LHV 2=HHV): ",
        ANALYSIS_HEADING => "-- Full analysis --",
        ANALYSIS_HINT_OPTIONAL => "Press enter to skip a value you do not have.",
        ANALYSIS_NO_INPUTS => "No method had sufficient input.",

        METHOD_DIRECT => "Direct method",
        METHOD_CONSUMPTION => "Fuel consumption method",
        METHOD_FLUE_LOSS => "Flue-gas loss method",

        RESULT_EFFICIENCY => "Efficiency",
        RESULT_CONSUMED_POWER => "Consumed power",
        RESULT_HEATING_VALUE => "Heating value used",
        RESULT_FLUE_LOSS => "Flue-gas loss",
        RESULT_DELTA_T => "Temperature delta",
        RESULT_COEFFICIENTS => "Coefficients used",

        FUELS_HEADING => "=== Supported fuels ===",

        SETTINGS_HEADING => "-- Settings --",
        SETTINGS_CURRENT => "Current default fuel",
        SETTINGS_SAVED => "Settings saved.",

        DEMO_TITLE => "=== Boiler efficiency examples ===",
        DEMO_DIRECT => "1. Direct method: useful 80 kWh / consumed 100 kWh",
        DEMO_CONSUMPTION => "2. Fuel consumption: 20 kW, natural gas 2.5 m³/h, LHV",
        DEMO_FLUE_LOSS => "3. Flue-gas loss: flue 180°C, air 20°C, CO2 10%",
        DEMO_ANALYSIS => "4. Full analysis (all inputs supplied)",

        _ => return None,
    };
    Some(s)
}
