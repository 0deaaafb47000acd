//! 단위 정의 및 변환 모듈 모음.

pub mod area;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod temperature;
pub mod volume;

pub use area::{convert_area, AreaUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use volume::{convert_volume, VolumeUnit};
