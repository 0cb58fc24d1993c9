//! # Synthesis Engine
//!
//! Runs one filter request through the full pipeline:
//!
//! ```text
//! FilterSpec -> LowpassPrototype -> approximation engine -> checks -> SynthesisResult
//! ```
//!
//! Every call is independent: nothing is cached or shared between runs.
//!
//! # Example
//!
//! ```
//! use afsynth_core::engine::synthesize;
//! use afsynth_core::types::{Approximation, FilterSpec};
//!
//! let spec = FilterSpec::lowpass(Approximation::Chebyshev, 1000.0, 1500.0)
//!     .with_ripple(0.5)
//!     .with_stopband_atten(60.0);
//!
//! let result = synthesize(&spec).unwrap();
//! assert_eq!(result.order(), 9);
//! assert_eq!(result.poles().len(), 9);
//! assert!(result.is_stable());
//! ```

use crate::approx::{bessel, butterworth, cauer, chebyshev, inv_chebyshev, user, PoleZeroSet};
use crate::error::{SynthResult, SynthesisError};
use crate::prototype::LowpassPrototype;
use crate::types::{Approximation, FilterSpec, SynthesisResult};
use crate::validate;

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Compute the order and normalized pole/zero set for `spec`.
pub fn synthesize(spec: &FilterSpec) -> SynthResult<SynthesisResult> {
    let proto = LowpassPrototype::from_spec(spec);

    let set = run_engine(spec, &proto)?;

    if set.poles.is_empty() {
        return Err(SynthesisError::NoPolesGenerated);
    }
    if set.zeros.is_empty() && spec.approximation.requires_zeros() {
        return Err(SynthesisError::NoZerosGenerated);
    }
    validate::coefficients(&set.poles, &set.zeros)?;

    tracing::info!(
        approximation = %spec.approximation,
        filter_type = %spec.filter_type,
        order = set.order,
        poles = set.poles.len(),
        zeros = set.zeros.len(),
        "Synthesis complete"
    );

    Ok(SynthesisResult::new(
        set.order,
        spec.approximation,
        proto,
        set.poles,
        set.zeros,
    ))
}

fn run_engine(spec: &FilterSpec, proto: &LowpassPrototype) -> SynthResult<PoleZeroSet> {
    match spec.approximation {
        Approximation::Butterworth => butterworth::synthesize(proto),
        Approximation::Chebyshev => chebyshev::synthesize(proto),
        Approximation::InvChebyshev => inv_chebyshev::synthesize(proto),
        Approximation::Cauer => cauer::synthesize(proto),
        Approximation::Bessel => bessel::synthesize(spec.requested_order),
        Approximation::User => user::synthesize(&spec.transfer_function),
    }
}

// ---------------------------------------------------------------------------
// Order estimation and comparison
// ---------------------------------------------------------------------------

/// Order the selected family would use, without placing poles.
pub fn estimate_order(spec: &FilterSpec) -> SynthResult<i32> {
    let proto = LowpassPrototype::from_spec(spec);
    match spec.approximation {
        Approximation::Butterworth => butterworth::order(&proto),
        Approximation::Chebyshev => chebyshev::order(&proto),
        Approximation::InvChebyshev => inv_chebyshev::order(&proto),
        Approximation::Cauer => cauer::order(&proto),
        Approximation::Bessel => crate::bessel_table::poles(spec.requested_order)
            .map(|_| spec.requested_order),
        Approximation::User => {
            let tf = &spec.transfer_function;
            if tf.is_missing() {
                return Err(SynthesisError::MissingCoefficients);
            }
            validate::order_limit(i32::try_from(tf.order()).unwrap_or(i32::MAX))
        }
    }
}

/// Synthesize `spec` with every magnitude-specified family.
///
/// Returns `(family, order)` pairs with successful orders ascending and
/// failed families last, in declaration order.
pub fn compare_orders(spec: &FilterSpec) -> Vec<(Approximation, SynthResult<usize>)> {
    let mut results: Vec<(Approximation, SynthResult<usize>)> = Approximation::MAGNITUDE_SPECIFIED
        .iter()
        .map(|&approximation| {
            let candidate = FilterSpec {
                approximation,
                ..spec.clone()
            };
            (approximation, synthesize(&candidate).map(|r| r.order()))
        })
        .collect();
    results.sort_by_key(|(_, r)| match r {
        Ok(order) => (0, *order),
        Err(_) => (1, 0),
    });
    results
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
