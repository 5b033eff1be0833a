//! 보일러 효율 계산 모듈 모음.
//!
//! 세 가지 독립적인 계산법(직접법, 연료 소비 기반, 배기가스 손실법)과
//! 입력이 갖춰진 방법만 골라 실행하는 종합 분석을 제공한다.

pub mod analysis;
pub mod consumption;
pub mod direct;
pub mod flue_loss;

pub use analysis::*;
pub use consumption::*;
pub use direct::*;
pub use flue_loss::*;

/// MJ → kWh 환산 계수. MJ/h 단위의 연료 에너지율을 kW로 바꿀 때 나눈다.
pub const MJ_PER_KWH: f64 = 3.6;

/// 효율 계산 시 발생 가능한 오류.
#[derive(Debug)]
pub enum EfficiencyError {
    /// 수치 전제조건 위반
    InvalidInput(&'static str),
}

impl std::fmt::Display for EfficiencyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EfficiencyError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for EfficiencyError {}
