//! Inverse Chebyshev (Chebyshev type II) approximation
//!
//! Flat passband, equiripple stopband. The order depends only on the
//! stopband attenuation and the band-edge ratio:
//!
//! ```text
//! N = ceil( acosh(sqrt(10^(As/10) - 1)) / acosh(kf) ),  kf = max(Fc/Fs, Fs/Fc)
//! ```
//!
//! Zeros sit on the jω axis at `j / cos θ_k`. Poles are the reciprocals of
//! type I poles computed with `eps = 1 / sqrt(10^(As/10) - 1)`. For odd N the
//! middle zero (`θ = π/2`) lands at a very large but finite frequency, which
//! stands for the transmission zero at infinity.

use super::{bump_to_even, pole_angle, to_order, PoleZeroSet};
use crate::error::SynthResult;
use crate::prototype::LowpassPrototype;
use crate::reform::reform;
use crate::types::Complex;
use crate::validate;

/// Order needed to meet the stopband attenuation.
///
/// Band filters are raised to even order before the `OrderTooHigh` check.
pub fn order(proto: &LowpassPrototype) -> SynthResult<i32> {
    let kf = proto.max_ratio();
    let estimate = (10f64.powf(0.1 * proto.stopband_atten_db) - 1.0)
        .sqrt()
        .acosh()
        / kf.acosh();
    tracing::debug!(kf, estimate, "Inverse Chebyshev order estimate");

    let mut n = to_order(estimate.ceil());
    if proto.filter_type.is_band() {
        n = bump_to_even(n, "inv_chebyshev");
    }
    validate::order_limit(n)
}

/// Transmission zeros of the order-`n` prototype, before reordering.
pub fn zeros(n: i32) -> Vec<Complex> {
    (1..=n)
        .map(|k| Complex::new(0.0, 1.0 / pole_angle(k, n).cos()))
        .collect()
}

/// Poles of the order-`n` prototype, before reordering.
pub fn poles(n: i32, stopband_atten_db: f64) -> Vec<Complex> {
    let eps = 1.0 / (10f64.powf(0.1 * stopband_atten_db) - 1.0).sqrt();
    let v0 = (1.0 / eps).asinh() / f64::from(n);
    let (a, b) = (v0.sinh(), v0.cosh());
    (1..=n)
        .map(|k| {
            let theta = pole_angle(k, n);
            Complex::new(-a * theta.sin(), b * theta.cos()).inv()
        })
        .collect()
}

pub fn synthesize(proto: &LowpassPrototype) -> SynthResult<PoleZeroSet> {
    let n = order(proto)?;
    let mut poles = poles(n, proto.stopband_atten_db);
    let mut zeros = zeros(n);
    reform(&mut poles);
    reform(&mut zeros);
    Ok(PoleZeroSet {
        order: n.max(0) as usize,
        poles,
        zeros,
    })
}
