//! Interactive pressure-ratio prompt for the sizing workflow.

use std::io::{self, BufRead, Write};

/// Parse a pressure ratio typed by the user.
///
/// Empty, unparseable, non-finite or sub-unity input yields `default`.
pub fn parse_pressure_ratio(input: &str, default: f64) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return default;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 1.0 => v,
        _ => {
            tracing::warn!(
                input = trimmed,
                default,
                "invalid pressure ratio, using default"
            );
            default
        }
    }
}

/// Ask once for a pressure ratio; end of input falls back to `default`.
///
/// Bytes that are not UTF-8 count as invalid input, not as an I/O error.
pub fn prompt_pressure_ratio<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default: f64,
) -> io::Result<f64> {
    write!(output, "Enter pressure ratio [{default}]: ")?;
    output.flush()?;

    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf)?;
    Ok(parse_pressure_ratio(&String::from_utf8_lossy(&buf), default))
}
