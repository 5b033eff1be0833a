use crate::efficiency::{EfficiencyError, MJ_PER_KWH};
use crate::fuel::FuelType;

/// 발열량 기준 선택 (PCI=저위, PCS=고위).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatingValueBasis {
    Lower,
    Higher,
}

impl HeatingValueBasis {
    pub const fn label(self) -> &'static str {
        match self {
            HeatingValueBasis::Lower => "PCI",
            HeatingValueBasis::Higher => "PCS",
        }
    }
}

/// 연료 소비 기반 효율 계산 입력.
#[derive(Debug, Clone)]
pub struct ConsumptionInput {
    /// 유효 열출력 [kW]
    pub useful_power_kw: f64,
    /// 연료 소비율 [연료단위/h] (가스 m³/h, 그 외 kg/h)
    pub fuel_flow_per_h: f64,
    /// 연료 종류
    pub fuel: FuelType,
    /// true면 PCI, false면 PCS 기준으로 계산
    pub use_lower_heating_value: bool,
}

/// 연료 소비 기반 효율 계산 결과.
#[derive(Debug, Clone)]
pub struct ConsumptionResult {
    /// 효율 [%] (클램프하지 않음)
    pub efficiency_percent: f64,
    /// 연료 투입 열출력 [kW]
    pub consumed_power_kw: f64,
    /// 사용한 발열량 기준
    pub heating_value_basis: HeatingValueBasis,
    /// 사용한 발열량 값 [MJ/연료단위]
    pub heating_value_mj_per_unit: f64,
}

/// 유효 출력과 연료 소비율로 효율을 계산한다.
///
/// 투입 열출력은 소비율 × 발열량 [MJ/h]을 3.6으로 나눠 kW로 환산한다.
pub fn consumption_efficiency(
    input: ConsumptionInput,
) -> Result<ConsumptionResult, EfficiencyError> {
    let props = input.fuel.properties();
    let (basis, heating_value) = if input.use_lower_heating_value {
        (HeatingValueBasis::Lower, props.lhv_mj_per_unit)
    } else {
        (HeatingValueBasis::Higher, props.hhv_mj_per_unit)
    };

    let consumed_power_kw = (input.fuel_flow_per_h * heating_value) / MJ_PER_KWH;
    let efficiency_percent = (input.useful_power_kw / consumed_power_kw) * 100.0;

    Ok(ConsumptionResult {
        efficiency_percent,
        consumed_power_kw,
        heating_value_basis: basis,
        heating_value_mj_per_unit: heating_value,
    })
}
