//! Butterworth (maximally flat) approximation
//!
//! Order from the passband-edge attenuation Ap and stopband attenuation As:
//!
//! ```text
//! N = round( log10((10^(Ap/10) - 1) / (10^(As/10) - 1)) / (2 log10 kf) + 1 )
//! kf = min(Fc/Fs, Fs/Fc)
//! ```
//!
//! Poles lie on the unit circle: `p_k = -sin θ_k + j cos θ_k`,
//! `θ_k = π(2k - 1) / 2N`, k = 1..N.

use super::{bump_to_even, pole_angle, to_order, PoleZeroSet};
use crate::error::SynthResult;
use crate::prototype::LowpassPrototype;
use crate::types::{Complex, FilterType};
use crate::validate;

/// Order needed to meet the prototype's attenuation targets.
///
/// Bandstop requests are raised to even order. Fails with `OrderTooHigh`
/// above 50; there is no lower bound check.
pub fn order(proto: &LowpassPrototype) -> SynthResult<i32> {
    let kf = proto.min_ratio();
    let c1 = (10f64.powf(0.1 * proto.edge_atten_db) - 1.0)
        / (10f64.powf(0.1 * proto.stopband_atten_db) - 1.0);
    let estimate = c1.log10() / (2.0 * kf.log10()) + 1.0;
    tracing::debug!(kf, estimate, "Butterworth order estimate");

    let mut n = to_order(estimate.round());
    if proto.filter_type == FilterType::BandStop {
        n = bump_to_even(n, "butterworth");
    }
    validate::order_limit(n)
}

/// Unit-circle poles of the order-`n` Butterworth prototype.
pub fn poles(n: i32) -> Vec<Complex> {
    (1..=n)
        .map(|k| {
            let theta = pole_angle(k, n);
            Complex::new(-theta.sin(), theta.cos())
        })
        .collect()
}

pub fn synthesize(proto: &LowpassPrototype) -> SynthResult<PoleZeroSet> {
    let n = order(proto)?;
    Ok(PoleZeroSet::all_pole(poles(n)))
}

/// Attenuation in dB an order-`n` filter reaches at the stopband edge.
pub fn stopband_attenuation_db(proto: &LowpassPrototype, n: i32) -> f64 {
    let kf = proto.max_ratio();
    let c = 10f64.powf(0.1 * proto.edge_atten_db) - 1.0;
    10.0 * (1.0 + c * kf.powi(2 * n)).log10()
}
