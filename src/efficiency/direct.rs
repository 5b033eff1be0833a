use crate::efficiency::EfficiencyError;

/// 직접법 효율을 계산한다.
///
/// 효율 = 유효 에너지 / 소비 에너지 × 100. 두 값은 같은 단위(예: kWh)면 된다.
/// 결과는 진단용이므로 100%를 넘거나 음수라도 그대로 반환한다.
pub fn direct_efficiency(
    useful_energy_kwh: f64,
    consumed_energy_kwh: f64,
) -> Result<f64, EfficiencyError> {
    if consumed_energy_kwh <= 0.0 {
        return Err(EfficiencyError::InvalidInput(
            "소비 에너지는 양수여야 합니다",
        ));
    }
    Ok((useful_energy_kwh / consumed_energy_kwh) * 100.0)
}
