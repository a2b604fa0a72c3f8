//! Fahrenheit → Celsius conversion and display.
//!
//! Rounding policy: one decimal place, ties to even, applied to the scaled
//! value (`round_ties_even(c * 10) / 10`).

use std::fmt::Display;

use crate::error::{Result, WeatherError};

/// Unit marker appended by [`format_temperature`].
pub const DEGREE_CELSIUS: &str = "\u{00B0}C";

/// Anything that can be read as a Fahrenheit reading: numbers, or text that
/// parses as one.
pub trait TemperatureValue {
    fn to_fahrenheit(&self) -> Result<f64>;
}

macro_rules! impl_numeric_temperature {
    ($($t:ty),*) => {
        $(
            impl TemperatureValue for $t {
                fn to_fahrenheit(&self) -> Result<f64> {
                    Ok(f64::from(*self))
                }
            }
        )*
    };
}

impl_numeric_temperature!(i8, i16, i32, u8, u16, u32, f32);

impl TemperatureValue for f64 {
    fn to_fahrenheit(&self) -> Result<f64> {
        if self.is_finite() {
            Ok(*self)
        } else {
            Err(WeatherError::Conversion {
                input: self.to_string(),
            })
        }
    }
}

impl TemperatureValue for str {
    fn to_fahrenheit(&self) -> Result<f64> {
        self.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| WeatherError::Conversion {
                input: self.to_string(),
            })
    }
}

impl TemperatureValue for String {
    fn to_fahrenheit(&self) -> Result<f64> {
        self.as_str().to_fahrenheit()
    }
}

impl<T: TemperatureValue + ?Sized> TemperatureValue for &T {
    fn to_fahrenheit(&self) -> Result<f64> {
        (**self).to_fahrenheit()
    }
}

/// Append the degree-Celsius marker. No rounding or padding is applied.
pub fn format_temperature(value: impl Display) -> String {
    format!("{value}{DEGREE_CELSIUS}")
}

/// Convert Fahrenheit to Celsius, rounded to one decimal place.
pub fn convert_f_to_c(value: impl TemperatureValue) -> Result<f64> {
    let fahrenheit = value.to_fahrenheit()?;
    Ok(round_one_decimal((fahrenheit - 32.0) * 5.0 / 9.0))
}

fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round_ties_even() / 10.0
}
