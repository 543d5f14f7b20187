//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod volume;
pub mod weight;

pub use length::{convert_length, LengthUnit};
pub use volume::{convert_volume, VolumeUnit};
pub use weight::{convert_weight, WeightUnit};
