//! Unit conversion utilities
//!
//! All geometry is computed in millimetres. This module is the display layer:
//! it converts millimetres to Metric or Imperial text (decimal or reduced
//! inch fractions) and parses user input back to millimetres.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format a length for display
///
/// * `value_mm` - Value in millimetres
/// * `system` - Target measurement system
/// * `step` - For Imperial output, the fraction denominator (16 renders
///   sixteenths). `None` renders decimal inches.
pub fn format_length(value_mm: f64, system: MeasurementSystem, step: Option<u32>) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1} mm", value_mm),
        MeasurementSystem::Imperial => {
            let inches = value_mm / MM_PER_INCH;
            match step {
                Some(denominator) if denominator > 0 => format_fraction(inches, denominator),
                _ => format!("{:.1}\"", inches),
            }
        }
    }
}

/// Render inches as a reduced mixed fraction on a `1/denominator` grid.
fn format_fraction(inches: f64, denominator: u32) -> String {
    let den = i64::from(denominator);
    let numerator = (inches * den as f64).round() as i64;
    if numerator == 0 {
        return "0\"".to_string();
    }

    let sign = if numerator < 0 { "-" } else { "" };
    let numerator = numerator.abs();
    let whole = numerator / den;
    let remainder = numerator % den;

    if remainder == 0 {
        return format!("{sign}{whole}\"");
    }

    let divisor = gcd(remainder, den);
    let (num, den) = (remainder / divisor, den / divisor);
    if whole == 0 {
        format!("{sign}{num}/{den}\"")
    } else {
        format!("{sign}{whole} {num}/{den}\"")
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Format an angle given in radians as degrees with two decimals
pub fn format_angle_deg(radians: f64) -> String {
    format!("{:.2}°", radians.to_degrees())
}

/// Parse length string to millimetres
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim().trim_end_matches(['"', '\'']).trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric => {
            let input = input.trim_end_matches("mm").trim();
            input.parse::<f64>().map_err(|e| e.to_string())
        }
        MeasurementSystem::Imperial => {
            if !input.contains('/') {
                let inches = input.parse::<f64>().map_err(|e| e.to_string())?;
                return Ok(inches * MM_PER_INCH);
            }

            let negative = input.starts_with('-');
            let mut total_inches = 0.0;
            for part in input.trim_start_matches('-').split_whitespace() {
                if let Some((num, den)) = part.split_once('/') {
                    let num = num.parse::<f64>().map_err(|_| "Invalid numerator")?;
                    let den = den.parse::<f64>().map_err(|_| "Invalid denominator")?;
                    if den == 0.0 {
                        return Err("Division by zero".to_string());
                    }
                    total_inches += num / den;
                } else {
                    total_inches += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                }
            }
            let sign = if negative { -1.0 } else { 1.0 };
            Ok(sign * total_inches * MM_PER_INCH)
        }
    }
}
