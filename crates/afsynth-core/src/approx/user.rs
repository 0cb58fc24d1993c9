//! User-supplied transfer function
//!
//! Zeros are the numerator roots and poles the denominator roots, found with
//! the general root solver and then put through the canonical reorder.

use super::PoleZeroSet;
use crate::error::{SynthResult, SynthesisError};
use crate::poly;
use crate::reform::reform;
use crate::types::TransferFunction;
use crate::validate;

pub fn synthesize(tf: &TransferFunction) -> SynthResult<PoleZeroSet> {
    if tf.is_missing() {
        return Err(SynthesisError::MissingCoefficients);
    }
    let order = validate::order_limit(i32::try_from(tf.order()).unwrap_or(i32::MAX))?;

    let mut zeros = poly::roots(&tf.numerator);
    let mut poles = poly::roots(&tf.denominator);
    tracing::debug!(
        order,
        zeros = zeros.len(),
        poles = poles.len(),
        "User transfer function factored"
    );

    reform(&mut poles);
    reform(&mut zeros);
    Ok(PoleZeroSet {
        order: order as usize,
        poles,
        zeros,
    })
}
