//! Elliptic (Cauer) approximation
//!
//! Equiripple in both passband and stopband. Order estimation and exact
//! placement both go through the nome `q` of the selectivity `k`, obtained
//! from a truncated Landen-transform series:
//!
//! ```text
//! kk = (1 - k²)^(1/4)
//! u  = (1 - kk) / (2 (1 + kk))
//! q  = 150 u^13 + 2 u^9 + 2 u^5 + u
//! N  = ceil( log10(16 D) / log10(1/q) ),  D = (10^(As/10) - 1) / (10^(Rp/10) - 1)
//! ```
//!
//! The order estimate folds the band-edge ratio below one
//! (`k = min(Fc/Fs, Fs/Fc)`). Exact synthesis uses `k = Fc/Fs` unfolded and
//! therefore only produces finite values for `Fc < Fs`; a highpass request
//! given with `Fc > Fs` yields NaN coefficients and is rejected by the
//! coefficient validator.
//!
//! Pole/zero placement evaluates two 5-term theta-function ratios per
//! section. Poles and zeros are emitted as the positive-frequency half
//! (sections 1..r), then the real pole for odd order, then the mirrored
//! negative-frequency half (sections r..1).

use super::{bump_to_even, to_order, PoleZeroSet};
use crate::error::SynthResult;
use crate::prototype::LowpassPrototype;
use crate::types::Complex;
use crate::validate;
use std::f64::consts::PI;

/// Number of terms kept in every nome/theta series.
pub const SERIES_TERMS: usize = 5;

/// Nome approximation for selectivity `k`.
pub fn nome(k: f64) -> f64 {
    let kk = (1.0 - k * k).sqrt().sqrt();
    let u = 0.5 * (1.0 - kk) / (1.0 + kk);
    150.0 * u.powi(13) + 2.0 * u.powi(9) + 2.0 * u.powi(5) + u
}

fn alternating(m: usize) -> f64 {
    if m % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Ratio of truncated theta series:
///
/// ```text
/// 2 q^(1/4) Σ_{m=0}^{4} (-1)^m q^(m(m+1)) odd(2m+1)
/// -------------------------------------------------
///     1 + 2 Σ_{m=1}^{4} (-1)^m q^(m²) even(2m)
/// ```
fn theta_ratio(q: f64, odd: impl Fn(f64) -> f64, even: impl Fn(f64) -> f64) -> f64 {
    let numer: f64 = (0..SERIES_TERMS)
        .map(|m| alternating(m) * q.powi((m * (m + 1)) as i32) * odd((2 * m + 1) as f64))
        .sum();
    let denom: f64 = (1..SERIES_TERMS)
        .map(|m| alternating(m) * q.powi((m * m) as i32) * even((2 * m) as f64))
        .sum();
    2.0 * numer * q.sqrt().sqrt() / (1.0 + 2.0 * denom)
}

/// Second-order section coefficients: zero at `±j sqrt(aa)`, poles are the
/// roots of `s² + bb s + cc`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Section {
    aa: f64,
    bb: f64,
    cc: f64,
}

impl Section {
    fn zero(&self) -> Complex {
        Complex::new(0.0, self.aa.sqrt())
    }

    fn pole(&self) -> Complex {
        Complex::new(
            -0.5 * self.bb,
            0.5 * (4.0 * self.cc - self.bb * self.bb).sqrt(),
        )
    }
}

/// Order needed to meet the ripple and attenuation targets.
///
/// Band filters are raised to even order before the `OrderTooHigh` check.
pub fn order(proto: &LowpassPrototype) -> SynthResult<i32> {
    let q = nome(proto.min_ratio());
    let dd = (10f64.powf(proto.stopband_atten_db / 10.0) - 1.0)
        / (10f64.powf(proto.ripple_db / 10.0) - 1.0);
    let estimate = (16.0 * dd).log10() / (1.0 / q).log10();
    tracing::debug!(q, dd, estimate, "Cauer order estimate");

    let mut n = to_order(estimate.ceil());
    if proto.filter_type.is_band() {
        n = bump_to_even(n, "cauer");
    }
    validate::order_limit(n)
}

/// Poles and zeros of the order-`n` prototype with selectivity `k = Fc/Fs`.
///
/// Returns empty sequences for `n < 1`.
pub fn place(n: i32, k: f64, ripple_db: f64) -> (Vec<Complex>, Vec<Complex>) {
    if n < 1 {
        return (Vec::new(), Vec::new());
    }
    let order = f64::from(n);
    let q = nome(k);

    let g = 10f64.powf(ripple_db / 20.0);
    let vv = ((g + 1.0) / (g - 1.0)).ln() / (2.0 * order);
    let p0 = theta_ratio(q, |a| (a * vv).sinh(), |a| (a * vv).cosh()).abs();
    let ww = ((1.0 + k * p0 * p0) * (1.0 + p0 * p0 / k)).sqrt();

    let odd = n % 2 != 0;
    let r = (n - n % 2) / 2;
    let sections: Vec<Section> = (1..=r)
        .map(|i| {
            let mu = if odd { f64::from(i) } else { f64::from(i) - 0.5 };
            let xx = theta_ratio(
                q,
                |a| (a * PI * mu / order).sin(),
                |a| (a * PI * mu / order).cos(),
            );
            let yy = ((1.0 - k * xx * xx) * (1.0 - xx * xx / k)).sqrt();
            let d = 1.0 + (p0 * xx).powi(2);
            Section {
                aa: 1.0 / (xx * xx),
                bb: 2.0 * p0 * yy / d,
                cc: ((p0 * yy).powi(2) + (xx * ww).powi(2)) / (d * d),
            }
        })
        .collect();
    tracing::debug!(q, p0, sections = sections.len(), "Cauer sections placed");

    let mut poles = Vec::with_capacity(n as usize);
    let mut zeros = Vec::with_capacity(2 * sections.len());
    for s in &sections {
        zeros.push(s.zero());
        poles.push(s.pole());
    }
    if odd {
        poles.push(Complex::new(-p0, 0.0));
    }
    for s in sections.iter().rev() {
        zeros.push(s.zero().conj());
        poles.push(s.pole().conj());
    }
    (poles, zeros)
}

pub fn synthesize(proto: &LowpassPrototype) -> SynthResult<PoleZeroSet> {
    let n = order(proto)?;
    let (poles, zeros) = place(n, proto.raw_ratio(), proto.ripple_db);
    Ok(PoleZeroSet {
        order: poles.len(),
        poles,
        zeros,
    })
}
