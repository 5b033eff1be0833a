use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::efficiency::{
    self, AnalysisInput, AnalysisReport, ConsumptionInput, ConsumptionResult, FlueLossInput,
    FlueLossResult,
};
use crate::fuel::{self, FuelType};
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Direct,
    Consumption,
    FlueLoss,
    Analysis,
    Fuels,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("\n{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_DIRECT));
    println!("{}", tr.t(keys::MAIN_MENU_CONSUMPTION));
    println!("{}", tr.t(keys::MAIN_MENU_FLUE_LOSS));
    println!("{}", tr.t(keys::MAIN_MENU_ANALYSIS));
    println!("{}", tr.t(keys::MAIN_MENU_FUELS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Direct),
            "2" => return Ok(MenuChoice::Consumption),
            "3" => return Ok(MenuChoice::FlueLoss),
            "4" => return Ok(MenuChoice::Analysis),
            "5" => return Ok(MenuChoice::Fuels),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 직접법 메뉴를 처리한다.
pub fn handle_direct(tr: &Translator) -> Result<(), AppError> {
    println!("\n-- {} --", tr.t(keys::METHOD_DIRECT));
    let useful = read_f64(tr, tr.t(keys::PROMPT_USEFUL_ENERGY))?;
    let consumed = read_f64(tr, tr.t(keys::PROMPT_CONSUMED_ENERGY))?;
    let eff = efficiency::direct_efficiency(useful, consumed)?;
    println!("{}: {:.1} %", tr.t(keys::RESULT_EFFICIENCY), eff);
    Ok(())
}

/// 연료 소비 기반 메뉴를 처리한다.
pub fn handle_consumption(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("\n-- {} --", tr.t(keys::METHOD_CONSUMPTION));
    let power = read_f64(tr, tr.t(keys::PROMPT_USEFUL_POWER))?;
    let flow = read_f64(tr, tr.t(keys::PROMPT_FUEL_FLOW))?;
    let fuel = read_fuel(tr, cfg.default_fuel)?;
    let use_lhv = read_basis(tr, cfg.use_lower_heating_value)?;
    let res = efficiency::consumption_efficiency(ConsumptionInput {
        useful_power_kw: power,
        fuel_flow_per_h: flow,
        fuel,
        use_lower_heating_value: use_lhv,
    })?;
    print_consumption(tr, &res);
    Ok(())
}

/// 배기가스 손실법 메뉴를 처리한다.
pub fn handle_flue_loss(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("\n-- {} --", tr.t(keys::METHOD_FLUE_LOSS));
    let flue_temp = read_f64(tr, tr.t(keys::PROMPT_FLUE_TEMP))?;
    let air_temp = read_f64(tr, tr.t(keys::PROMPT_AIR_TEMP))?;
    let co2 = read_f64(tr, tr.t(keys::PROMPT_CO2))?;
    let fuel = read_fuel(tr, cfg.default_fuel)?;
    let res = efficiency::flue_loss_efficiency(FlueLossInput {
        flue_gas_temp_c: flue_temp,
        ambient_air_temp_c: air_temp,
        co2_percent: co2,
        fuel,
    })?;
    print_flue_loss(tr, &res);
    Ok(())
}

/// 종합 분석 메뉴를 처리한다. 값이 없는 항목은 엔터로 건너뛴다.
pub fn handle_analysis(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::ANALYSIS_HEADING));
    println!("{}", tr.t(keys::ANALYSIS_HINT_OPTIONAL));
    let input = AnalysisInput {
        useful_energy_kwh: read_optional_f64(tr, tr.t(keys::PROMPT_USEFUL_ENERGY))?,
        consumed_energy_kwh: read_optional_f64(tr, tr.t(keys::PROMPT_CONSUMED_ENERGY))?,
        useful_power_kw: read_optional_f64(tr, tr.t(keys::PROMPT_USEFUL_POWER))?,
        fuel_flow_per_h: read_optional_f64(tr, tr.t(keys::PROMPT_FUEL_FLOW))?,
        flue_gas_temp_c: read_optional_f64(tr, tr.t(keys::PROMPT_FLUE_TEMP))?,
        ambient_air_temp_c: read_optional_f64(tr, tr.t(keys::PROMPT_AIR_TEMP))?,
        co2_percent: read_optional_f64(tr, tr.t(keys::PROMPT_CO2))?,
        fuel: Some(read_fuel(tr, cfg.default_fuel)?),
        use_lower_heating_value: Some(cfg.use_lower_heating_value),
    };

    if !input.has_direct_inputs() && !input.has_consumption_inputs() && !input.has_flue_loss_inputs()
    {
        println!("{}", tr.t(keys::ANALYSIS_NO_INPUTS));
        return Ok(());
    }

    let report = efficiency::full_analysis(&input)?;
    print_report(tr, &report);
    Ok(())
}

/// 지원 연료와 발열량(PCI/PCS)을 나열한다.
pub fn handle_fuels(tr: &Translator) {
    println!("\n{}", tr.t(keys::FUELS_HEADING));
    for fuel in FuelType::ALL {
        let props = fuel.properties();
        println!(
            "{} ({}): PCI {} MJ/{unit}, PCS {} MJ/{unit}",
            tr.fuel_label(fuel),
            fuel.code(),
            props.lhv_mj_per_unit,
            props.hhv_mj_per_unit,
            unit = fuel.consumption_unit(),
        );
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}: {} ({})",
        tr.t(keys::SETTINGS_CURRENT),
        tr.fuel_label(cfg.default_fuel),
        if cfg.use_lower_heating_value {
            "PCI"
        } else {
            "PCS"
        }
    );
    cfg.default_fuel = read_fuel(tr, cfg.default_fuel)?;
    cfg.use_lower_heating_value = read_basis(tr, cfg.use_lower_heating_value)?;
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 고정 예제값으로 세 가지 방법과 종합 분석을 실행해 출력한다.
pub fn run_demo(tr: &Translator) -> Result<(), AppError> {
    println!("{}\n", tr.t(keys::DEMO_TITLE));

    println!("{}", tr.t(keys::DEMO_DIRECT));
    let eff = efficiency::direct_efficiency(80.0, 100.0)?;
    println!("{}: {:.1} %\n", tr.t(keys::RESULT_EFFICIENCY), eff);

    println!("{}", tr.t(keys::DEMO_CONSUMPTION));
    let res = efficiency::consumption_efficiency(ConsumptionInput {
        useful_power_kw: 20.0,
        fuel_flow_per_h: 2.5,
        fuel: FuelType::NaturalGas,
        use_lower_heating_value: true,
    })?;
    print_consumption(tr, &res);
    println!();

    println!("{}", tr.t(keys::DEMO_FLUE_LOSS));
    let res = efficiency::flue_loss_efficiency(FlueLossInput {
        flue_gas_temp_c: 180.0,
        ambient_air_temp_c: 20.0,
        co2_percent: 10.0,
        fuel: FuelType::NaturalGas,
    })?;
    print_flue_loss(tr, &res);
    println!();

    println!("{}", tr.t(keys::DEMO_ANALYSIS));
    let report = efficiency::full_analysis(&AnalysisInput {
        useful_energy_kwh: Some(85.0),
        consumed_energy_kwh: Some(100.0),
        useful_power_kw: Some(20.0),
        fuel_flow_per_h: Some(2.5),
        flue_gas_temp_c: Some(180.0),
        ambient_air_temp_c: Some(20.0),
        co2_percent: Some(10.0),
        fuel: Some(FuelType::NaturalGas),
        use_lower_heating_value: Some(true),
    })?;
    print_report(tr, &report);
    println!();

    handle_fuels(tr);
    Ok(())
}

fn print_consumption(tr: &Translator, res: &ConsumptionResult) {
    println!(
        "{}: {:.1} %",
        tr.t(keys::RESULT_EFFICIENCY),
        res.efficiency_percent
    );
    println!(
        "{}: {:.1} kW",
        tr.t(keys::RESULT_CONSUMED_POWER),
        res.consumed_power_kw
    );
    println!(
        "{}: {} {} MJ/unit",
        tr.t(keys::RESULT_HEATING_VALUE),
        res.heating_value_basis.label(),
        res.heating_value_mj_per_unit
    );
}

fn print_flue_loss(tr: &Translator, res: &FlueLossResult) {
    println!(
        "{}: {:.1} %",
        tr.t(keys::RESULT_EFFICIENCY),
        res.efficiency_percent
    );
    println!(
        "{}: {:.1} %",
        tr.t(keys::RESULT_FLUE_LOSS),
        res.flue_gas_loss_percent
    );
    println!(
        "{}: {:.1} K",
        tr.t(keys::RESULT_DELTA_T),
        res.temperature_delta_k
    );
    println!(
        "{}: A1={}, A2={}",
        tr.t(keys::RESULT_COEFFICIENTS),
        res.coefficients.a1,
        res.coefficients.a2
    );
}

fn print_report(tr: &Translator, report: &AnalysisReport) {
    if let Some(eff) = report.direct_efficiency_percent {
        println!(
            "{}: {:.1} %",
            tr.t(keys::METHOD_DIRECT),
            eff
        );
    }
    if let Some(ref res) = report.consumption {
        println!(
            "{}: {:.1} %",
            tr.t(keys::METHOD_CONSUMPTION),
            res.efficiency_percent
        );
    }
    if let Some(ref res) = report.flue_loss {
        println!(
            "{}: {:.1} %",
            tr.t(keys::METHOD_FLUE_LOSS),
            res.efficiency_percent
        );
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

/// 빈 입력이면 None, 아니면 숫자를 읽는다.
fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 번호 또는 연료 코드를 읽는다. 빈 입력은 기본 연료를 쓴다.
fn read_fuel(tr: &Translator, default: FuelType) -> Result<FuelType, AppError> {
    let sel = read_line(tr.t(keys::PROMPT_FUEL_SELECT))?;
    let trimmed = sel.trim();
    let fuel = match trimmed {
        "" => default,
        "1" => FuelType::NaturalGas,
        "2" => FuelType::HeatingOil,
        "3" => FuelType::Propane,
        "4" => FuelType::Wood,
        code => fuel::parse_fuel_type(code)?,
    };
    Ok(fuel)
}

/// PCI/PCS 선택을 읽는다. 빈 입력은 기본값을 쓴다.
fn read_basis(tr: &Translator, default: bool) -> Result<bool, AppError> {
    let sel = read_line(tr.t(keys::PROMPT_BASIS_SELECT))?;
    let use_lhv = match sel.trim() {
        "" => default,
        "2" => false,
        _ => true,
    };
    Ok(use_lhv)
}
