//! 환율 조회 전반에서 사용되는 공통 타입.

mod currency;
mod date_key;
mod rate;

pub use currency::*;
pub use date_key::*;
pub use rate::*;
