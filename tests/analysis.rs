//! 종합 분석의 입력 유무 판정과 결과 합성 테스트.
use boiler_efficiency_toolbox::efficiency::{
    consumption_efficiency, direct_efficiency, flue_loss_efficiency, full_analysis,
    AnalysisInput, ConsumptionInput, FlueLossInput, HeatingValueBasis,
};
use boiler_efficiency_toolbox::fuel::FuelType;

fn all_inputs() -> AnalysisInput {
    AnalysisInput {
        useful_energy_kwh: Some(85.0),
        consumed_energy_kwh: Some(100.0),
        useful_power_kw: Some(20.0),
        fuel_flow_per_h: Some(2.5),
        flue_gas_temp_c: Some(180.0),
        ambient_air_temp_c: Some(20.0),
        co2_percent: Some(10.0),
        fuel: Some(FuelType::NaturalGas),
        use_lower_heating_value: Some(true),
    }
}

#[test]
fn direct_inputs_only_yields_single_method() {
    let input = AnalysisInput {
        useful_energy_kwh: Some(80.0),
        consumed_energy_kwh: Some(100.0),
        ..AnalysisInput::default()
    };
    assert!(input.has_direct_inputs());
    assert!(!input.has_consumption_inputs());
    assert!(!input.has_flue_loss_inputs());

    let report = full_analysis(&input).expect("analysis");
    assert_eq!(report.method_count(), 1);
    assert_eq!(report.direct_efficiency_percent, Some(80.0));
    assert!(report.consumption.is_none());
    assert!(report.flue_loss.is_none());
}

#[test]
fn empty_input_yields_empty_report() {
    let report = full_analysis(&AnalysisInput::default()).expect("analysis");
    assert_eq!(report.method_count(), 0);
}

#[test]
fn all_inputs_yield_three_methods_matching_direct_calls() {
    let report = full_analysis(&all_inputs()).expect("analysis");
    assert_eq!(report.method_count(), 3);

    let direct = direct_efficiency(85.0, 100.0).expect("direct");
    assert_eq!(report.direct_efficiency_percent, Some(direct));

    let consumption = consumption_efficiency(ConsumptionInput {
        useful_power_kw: 20.0,
        fuel_flow_per_h: 2.5,
        fuel: FuelType::NaturalGas,
        use_lower_heating_value: true,
    })
    .expect("consumption");
    let in_report = report.consumption.as_ref().expect("consumption entry");
    assert_eq!(in_report.efficiency_percent, consumption.efficiency_percent);
    assert_eq!(in_report.consumed_power_kw, consumption.consumed_power_kw);

    let flue = flue_loss_efficiency(FlueLossInput {
        flue_gas_temp_c: 180.0,
        ambient_air_temp_c: 20.0,
        co2_percent: 10.0,
        fuel: FuelType::NaturalGas,
    })
    .expect("flue loss");
    let in_report = report.flue_loss.as_ref().expect("flue loss entry");
    assert_eq!(in_report.efficiency_percent, flue.efficiency_percent);
    assert_eq!(in_report.flue_gas_loss_percent, flue.flue_gas_loss_percent);
}

#[test]
fn fuel_and_basis_default_to_natural_gas_and_lower() {
    let input = AnalysisInput {
        useful_power_kw: Some(20.0),
        fuel_flow_per_h: Some(2.5),
        ..AnalysisInput::default()
    };
    let report = full_analysis(&input).expect("analysis");
    let res = report.consumption.expect("consumption entry");
    assert_eq!(res.heating_value_basis, HeatingValueBasis::Lower);
    assert!((res.heating_value_mj_per_unit - 35.17).abs() < 1e-12);
}

#[test]
fn underlying_error_aborts_whole_analysis() {
    let mut input = all_inputs();
    input.consumed_energy_kwh = Some(0.0);
    assert!(full_analysis(&input).is_err());

    let mut input = all_inputs();
    input.co2_percent = Some(-1.0);
    assert!(full_analysis(&input).is_err());
}

#[test]
fn repeated_calls_are_bit_identical() {
    let input = all_inputs();
    let a = full_analysis(&input).expect("analysis");
    let b = full_analysis(&input).expect("analysis");
    assert_eq!(a.direct_efficiency_percent, b.direct_efficiency_percent);
    assert_eq!(
        a.consumption.as_ref().map(|r| r.efficiency_percent),
        b.consumption.as_ref().map(|r| r.efficiency_percent)
    );
    assert_eq!(
        a.flue_loss.as_ref().map(|r| r.efficiency_percent),
        b.flue_loss.as_ref().map(|r| r.efficiency_percent)
    );
}
