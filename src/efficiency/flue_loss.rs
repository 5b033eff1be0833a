use crate::efficiency::EfficiencyError;
use crate::fuel::{FuelType, SiegertCoefficients};

/// 배기가스 손실법(Siegert 간이식) 입력.
#[derive(Debug, Clone)]
pub struct FlueLossInput {
    /// 배기가스 온도 [°C]
    pub flue_gas_temp_c: f64,
    /// 연소용 공기(주변) 온도 [°C]
    pub ambient_air_temp_c: f64,
    /// 배기가스 CO2 농도 [%]
    pub co2_percent: f64,
    /// 연료 종류
    pub fuel: FuelType,
}

/// 배기가스 손실법 계산 결과.
#[derive(Debug, Clone)]
pub struct FlueLossResult {
    /// 효율 [%] = 100 − 손실
    pub efficiency_percent: f64,
    /// 배기가스 손실 [%]
    pub flue_gas_loss_percent: f64,
    /// 배기가스-공기 온도차 [K]
    pub temperature_delta_k: f64,
    /// 사용한 연료별 계수
    pub coefficients: SiegertCoefficients,
}

/// Siegert 간이식으로 배기가스 손실과 효율을 계산한다.
///
/// 손실 = A1·Δt/CO2 + A2·Δt. 온도차가 음수인 입력도 거부하지 않는다.
pub fn flue_loss_efficiency(input: FlueLossInput) -> Result<FlueLossResult, EfficiencyError> {
    if input.co2_percent <= 0.0 {
        return Err(EfficiencyError::InvalidInput("CO2 농도는 양수여야 합니다"));
    }

    let coefficients = input.fuel.siegert_coefficients();
    let delta_t = input.flue_gas_temp_c - input.ambient_air_temp_c;
    let flue_gas_loss_percent =
        (coefficients.a1 * delta_t / input.co2_percent) + (coefficients.a2 * delta_t);

    Ok(FlueLossResult {
        efficiency_percent: 100.0 - flue_gas_loss_percent,
        flue_gas_loss_percent,
        temperature_delta_k: delta_t,
        coefficients,
    })
}
