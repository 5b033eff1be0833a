//! 세 가지 효율 계산법의 기준값/전제조건 회귀 테스트.
use boiler_efficiency_toolbox::efficiency::{
    consumption_efficiency, direct_efficiency, flue_loss_efficiency, ConsumptionInput,
    EfficiencyError, FlueLossInput, HeatingValueBasis,
};
use boiler_efficiency_toolbox::fuel::{parse_fuel_type, FuelError, FuelType};

#[test]
fn direct_matches_energy_ratio() {
    let eff = direct_efficiency(80.0, 100.0).expect("direct calc");
    assert!((eff - 80.0).abs() < 1e-12);
}

#[test]
fn direct_does_not_clamp_implausible_results() {
    // 진단용 계산기이므로 100% 초과나 음수도 그대로 반환한다.
    let over = direct_efficiency(150.0, 100.0).expect("direct calc");
    assert!((over - 150.0).abs() < 1e-12);
    let negative = direct_efficiency(-10.0, 100.0).expect("direct calc");
    assert!((negative + 10.0).abs() < 1e-12);
}

#[test]
fn direct_rejects_non_positive_consumed_energy() {
    assert!(matches!(
        direct_efficiency(80.0, 0.0),
        Err(EfficiencyError::InvalidInput(_))
    ));
    assert!(matches!(
        direct_efficiency(80.0, -5.0),
        Err(EfficiencyError::InvalidInput(_))
    ));
}

#[test]
fn unknown_fuel_string_is_rejected() {
    assert!(matches!(
        parse_fuel_type("charbon"),
        Err(FuelError::Unknown(_))
    ));
    assert_eq!(
        parse_fuel_type("natural_gas").expect("known fuel"),
        FuelType::NaturalGas
    );
}

#[test]
fn consumption_natural_gas_reference_case() {
    // 20 kW / 2.5 m³/h, PCI 35.17 => 투입 24.42 kW, 효율 약 81.9%
    let res = consumption_efficiency(ConsumptionInput {
        useful_power_kw: 20.0,
        fuel_flow_per_h: 2.5,
        fuel: FuelType::NaturalGas,
        use_lower_heating_value: true,
    })
    .expect("consumption calc");
    assert_eq!(res.heating_value_basis, HeatingValueBasis::Lower);
    assert!((res.heating_value_mj_per_unit - 35.17).abs() < 1e-12);
    assert!((res.consumed_power_kw - 2.5 * 35.17 / 3.6).abs() < 1e-9);
    assert!((res.efficiency_percent - 81.9).abs() < 0.05);
}

#[test]
fn consumption_selects_higher_heating_value() {
    let res = consumption_efficiency(ConsumptionInput {
        useful_power_kw: 20.0,
        fuel_flow_per_h: 2.5,
        fuel: FuelType::NaturalGas,
        use_lower_heating_value: false,
    })
    .expect("consumption calc");
    assert_eq!(res.heating_value_basis, HeatingValueBasis::Higher);
    assert!((res.heating_value_mj_per_unit - 39.11).abs() < 1e-12);
}

#[test]
fn flue_loss_natural_gas_reference_case() {
    // Δt=160, 손실 = 0.66·160/10 + 0.009·160 = 12.0, 효율 88.0
    let res = flue_loss_efficiency(FlueLossInput {
        flue_gas_temp_c: 180.0,
        ambient_air_temp_c: 20.0,
        co2_percent: 10.0,
        fuel: FuelType::NaturalGas,
    })
    .expect("flue loss calc");
    assert!((res.temperature_delta_k - 160.0).abs() < 1e-12);
    assert!((res.flue_gas_loss_percent - 12.0).abs() < 1e-9);
    assert!((res.efficiency_percent - 88.0).abs() < 1e-9);
    assert!((res.coefficients.a1 - 0.66).abs() < 1e-12);
    assert!((res.coefficients.a2 - 0.009).abs() < 1e-12);
}

#[test]
fn flue_loss_rejects_non_positive_co2() {
    let input = FlueLossInput {
        flue_gas_temp_c: 180.0,
        ambient_air_temp_c: 20.0,
        co2_percent: 0.0,
        fuel: FuelType::NaturalGas,
    };
    assert!(matches!(
        flue_loss_efficiency(input),
        Err(EfficiencyError::InvalidInput(_))
    ));
}

#[test]
fn flue_loss_allows_negative_temperature_delta() {
    // 배기가스가 공기보다 차가운 비정상 입력도 거부하지 않는다.
    let res = flue_loss_efficiency(FlueLossInput {
        flue_gas_temp_c: 20.0,
        ambient_air_temp_c: 30.0,
        co2_percent: 10.0,
        fuel: FuelType::Wood,
    })
    .expect("flue loss calc");
    assert!(res.temperature_delta_k < 0.0);
    assert!(res.efficiency_percent > 100.0);
}
