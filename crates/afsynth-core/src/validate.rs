//! Order bounds and coefficient sanity checks

use crate::error::{SynthResult, SynthesisError};
use crate::types::{Complex, MAX_ORDER};

/// Fail with `OrderTooHigh` when `order` exceeds [`MAX_ORDER`].
pub fn order_limit(order: i32) -> SynthResult<i32> {
    if order > MAX_ORDER {
        return Err(SynthesisError::OrderTooHigh { order });
    }
    Ok(order)
}

/// Scan poles and zeros for non-finite parts.
///
/// The first offending value is reported by field path, e.g. `poles[3].re`.
pub fn coefficients(poles: &[Complex], zeros: &[Complex]) -> SynthResult<()> {
    scan("poles", poles)?;
    scan("zeros", zeros)
}

fn scan(name: &str, values: &[Complex]) -> SynthResult<()> {
    for (i, v) in values.iter().enumerate() {
        if !v.re.is_finite() {
            return Err(SynthesisError::invalid_field(format!("{}[{}].re", name, i)));
        }
        if !v.im.is_finite() {
            return Err(SynthesisError::invalid_field(format!("{}[{}].im", name, i)));
        }
    }
    Ok(())
}
