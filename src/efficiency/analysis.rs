use crate::efficiency::consumption::{consumption_efficiency, ConsumptionInput, ConsumptionResult};
use crate::efficiency::direct::direct_efficiency;
use crate::efficiency::flue_loss::{flue_loss_efficiency, FlueLossInput, FlueLossResult};
use crate::efficiency::EfficiencyError;
use crate::fuel::FuelType;

/// 종합 분석 입력. 값이 없는 항목은 `None`으로 두면 해당 방법을 건너뛴다.
#[derive(Debug, Clone, Default)]
pub struct AnalysisInput {
    /// 유효 에너지 [kWh] (직접법)
    pub useful_energy_kwh: Option<f64>,
    /// 소비 에너지 [kWh] (직접법)
    pub consumed_energy_kwh: Option<f64>,
    /// 유효 열출력 [kW] (소비 기반)
    pub useful_power_kw: Option<f64>,
    /// 연료 소비율 [연료단위/h] (소비 기반)
    pub fuel_flow_per_h: Option<f64>,
    /// 배기가스 온도 [°C] (손실법)
    pub flue_gas_temp_c: Option<f64>,
    /// 연소용 공기 온도 [°C] (손실법)
    pub ambient_air_temp_c: Option<f64>,
    /// 배기가스 CO2 농도 [%] (손실법)
    pub co2_percent: Option<f64>,
    /// 연료 종류. 없으면 천연가스로 간주한다.
    pub fuel: Option<FuelType>,
    /// PCI/PCS 선택. 없으면 PCI로 간주한다.
    pub use_lower_heating_value: Option<bool>,
}

impl AnalysisInput {
    /// 직접법에 필요한 값이 모두 있는지 확인한다.
    pub fn has_direct_inputs(&self) -> bool {
        self.useful_energy_kwh.is_some() && self.consumed_energy_kwh.is_some()
    }

    /// 연료 소비 기반 계산에 필요한 값이 모두 있는지 확인한다.
    pub fn has_consumption_inputs(&self) -> bool {
        self.useful_power_kw.is_some() && self.fuel_flow_per_h.is_some()
    }

    /// 손실법에 필요한 값이 모두 있는지 확인한다.
    pub fn has_flue_loss_inputs(&self) -> bool {
        self.flue_gas_temp_c.is_some()
            && self.ambient_air_temp_c.is_some()
            && self.co2_percent.is_some()
    }
}

/// 종합 분석 결과. 계산하지 못한 방법은 `None`으로 남는다.
#[derive(Debug, Clone, Default)]
pub struct AnalysisReport {
    /// 직접법 효율 [%]
    pub direct_efficiency_percent: Option<f64>,
    /// 연료 소비 기반 결과
    pub consumption: Option<ConsumptionResult>,
    /// 배기가스 손실법 결과
    pub flue_loss: Option<FlueLossResult>,
}

impl AnalysisReport {
    /// 실제로 계산된 방법 수.
    pub fn method_count(&self) -> usize {
        [
            self.direct_efficiency_percent.is_some(),
            self.consumption.is_some(),
            self.flue_loss.is_some(),
        ]
        .iter()
        .filter(|b| **b)
        .count()
    }
}

/// 입력이 갖춰진 방법만 골라 실행하는 종합 분석.
///
/// 개별 계산이 반환한 오류는 감추지 않고 그대로 전파한다.
pub fn full_analysis(input: &AnalysisInput) -> Result<AnalysisReport, EfficiencyError> {
    let fuel = input.fuel.unwrap_or(FuelType::NaturalGas);
    let mut report = AnalysisReport::default();

    if let (Some(useful), Some(consumed)) = (input.useful_energy_kwh, input.consumed_energy_kwh) {
        report.direct_efficiency_percent = Some(direct_efficiency(useful, consumed)?);
    }

    if let (Some(power), Some(flow)) = (input.useful_power_kw, input.fuel_flow_per_h) {
        report.consumption = Some(consumption_efficiency(ConsumptionInput {
            useful_power_kw: power,
            fuel_flow_per_h: flow,
            fuel,
            use_lower_heating_value: input.use_lower_heating_value.unwrap_or(true),
        })?);
    }

    if let (Some(flue_temp), Some(air_temp), Some(co2)) = (
        input.flue_gas_temp_c,
        input.ambient_air_temp_c,
        input.co2_percent,
    ) {
        report.flue_loss = Some(flue_loss_efficiency(FlueLossInput {
            flue_gas_temp_c: flue_temp,
            ambient_air_temp_c: air_temp,
            co2_percent: co2,
            fuel,
        })?);
    }

    Ok(report)
}
