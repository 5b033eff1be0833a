use serde::{Deserialize, Serialize};

/// 지원하는 연료 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    /// 천연가스 (m³ 기준)
    NaturalGas,
    /// 난방유/경질 연료유 (kg 기준)
    HeatingOil,
    /// 프로판 (kg 기준)
    Propane,
    /// 목재, 평균값 (kg 기준)
    Wood,
}

/// 연료 발열량 테이블 엔트리 [MJ/연료단위].
#[derive(Debug, Clone, Copy)]
pub struct FuelProperties {
    /// 저위 발열량 PCI
    pub lhv_mj_per_unit: f64,
    /// 고위 발열량 PCS
    pub hhv_mj_per_unit: f64,
}

/// Siegert 간이식 계수 (연료별).
#[derive(Debug, Clone, Copy)]
pub struct SiegertCoefficients {
    pub a1: f64,
    pub a2: f64,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::NaturalGas,
        FuelType::HeatingOil,
        FuelType::Propane,
        FuelType::Wood,
    ];

    /// 발열량 테이블을 조회한다. 테이블은 초기화 이후 불변이다.
    pub const fn properties(self) -> FuelProperties {
        match self {
            FuelType::NaturalGas => FuelProperties {
                lhv_mj_per_unit: 35.17,
                hhv_mj_per_unit: 39.11,
            },
            FuelType::HeatingOil => FuelProperties {
                lhv_mj_per_unit: 42.6,
                hhv_mj_per_unit: 45.4,
            },
            FuelType::Propane => FuelProperties {
                lhv_mj_per_unit: 46.35,
                hhv_mj_per_unit: 50.35,
            },
            FuelType::Wood => FuelProperties {
                lhv_mj_per_unit: 15.0,
                hhv_mj_per_unit: 18.5,
            },
        }
    }

    /// 손실법(Siegert)에서만 사용하는 연료별 계수.
    pub const fn siegert_coefficients(self) -> SiegertCoefficients {
        match self {
            FuelType::NaturalGas => SiegertCoefficients { a1: 0.66, a2: 0.009 },
            FuelType::HeatingOil => SiegertCoefficients { a1: 0.68, a2: 0.007 },
            FuelType::Propane => SiegertCoefficients { a1: 0.63, a2: 0.008 },
            FuelType::Wood => SiegertCoefficients { a1: 0.65, a2: 0.010 },
        }
    }

    /// 설정/CLI에서 쓰는 식별 코드.
    pub const fn code(self) -> &'static str {
        match self {
            FuelType::NaturalGas => "natural_gas",
            FuelType::HeatingOil => "heating_oil",
            FuelType::Propane => "propane",
            FuelType::Wood => "wood",
        }
    }

    /// 소비량을 측정하는 연료 단위 (가스=m³, 그 외=kg).
    pub const fn consumption_unit(self) -> &'static str {
        match self {
            FuelType::NaturalGas => "m³",
            FuelType::HeatingOil | FuelType::Propane | FuelType::Wood => "kg",
        }
    }
}

/// 연료 식별 시 발생 가능한 오류.
#[derive(Debug)]
pub enum FuelError {
    /// 지원 목록에 없는 연료 문자열
    Unknown(String),
}

impl std::fmt::Display for FuelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FuelError::Unknown(s) => write!(f, "알 수 없는 연료: {s}"),
        }
    }
}

impl std::error::Error for FuelError {}

/// 문자열로 전달된 연료명을 enum으로 변환한다.
pub fn parse_fuel_type(s: &str) -> Result<FuelType, FuelError> {
    match s.trim().to_lowercase().as_str() {
        "natural_gas" | "gas" | "ng" => Ok(FuelType::NaturalGas),
        "heating_oil" | "oil" | "fuel_oil" => Ok(FuelType::HeatingOil),
        "propane" | "lpg" => Ok(FuelType::Propane),
        "wood" => Ok(FuelType::Wood),
        _ => Err(FuelError::Unknown(s.to_string())),
    }
}
