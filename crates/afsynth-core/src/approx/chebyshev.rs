//! Chebyshev type I (equiripple passband) approximation
//!
//! ```text
//! eps = sqrt(10^(Rp/10) - 1)
//! kf  = max(Fc/Fs, Fs/Fc)
//! N   = ceil( acosh( sqrt((10^(As/10) - 1) / eps²) ) / acosh(kf) )
//! ```
//!
//! Poles sit on an ellipse with semi-axes `a = sinh(asinh(1/eps)/N)` and
//! `b = cosh(asinh(1/eps)/N)`: `p_k = -a sin θ_k + j b cos θ_k`.

use super::{bump_to_even, pole_angle, to_order, PoleZeroSet};
use crate::error::{OrderDiagnostics, SynthResult, SynthesisError};
use crate::prototype::LowpassPrototype;
use crate::types::{Complex, FilterType};
use crate::validate;

fn epsilon(ripple_db: f64) -> f64 {
    (10f64.powf(0.1 * ripple_db) - 1.0).sqrt()
}

/// Order needed to meet the prototype's ripple and attenuation targets.
///
/// Fails with `OrderInvalid` if the estimate is below one (ripple,
/// attenuation and band edges are incompatible) and with `OrderTooHigh`
/// above 50. Bandstop requests are then raised to even order.
pub fn order(proto: &LowpassPrototype) -> SynthResult<i32> {
    let eps = epsilon(proto.ripple_db);
    let kf = proto.max_ratio();
    let ratio = ((10f64.powf(0.1 * proto.stopband_atten_db) - 1.0) / (eps * eps)).sqrt();
    let estimate = ratio.acosh() / kf.acosh();
    tracing::debug!(eps, kf, estimate, "Chebyshev order estimate");

    let n = to_order(estimate.ceil());
    if n < 1 {
        return Err(SynthesisError::OrderInvalid {
            order: n,
            diagnostics: OrderDiagnostics::Estimate {
                stopband_atten_db: proto.stopband_atten_db,
                ripple_db: proto.ripple_db,
                cutoff_freq: proto.cutoff_freq,
                stopband_freq: proto.stopband_freq,
                freq_ratio: kf,
            },
        });
    }
    let n = validate::order_limit(n)?;

    if proto.filter_type == FilterType::BandStop {
        return Ok(bump_to_even(n, "chebyshev"));
    }
    Ok(n)
}

/// Poles of the order-`n` Chebyshev prototype with passband ripple `ripple_db`.
pub fn poles(n: i32, ripple_db: f64) -> Vec<Complex> {
    let v0 = (1.0 / epsilon(ripple_db)).asinh() / f64::from(n);
    let (a, b) = (v0.sinh(), v0.cosh());
    (1..=n)
        .map(|k| {
            let theta = pole_angle(k, n);
            Complex::new(-a * theta.sin(), b * theta.cos())
        })
        .collect()
}

pub fn synthesize(proto: &LowpassPrototype) -> SynthResult<PoleZeroSet> {
    let n = order(proto)?;
    Ok(PoleZeroSet::all_pole(poles(n, proto.ripple_db)))
}

/// Attenuation in dB an order-`n` filter reaches at the stopband edge.
pub fn stopband_attenuation_db(proto: &LowpassPrototype, n: i32) -> f64 {
    let eps = epsilon(proto.ripple_db);
    let t = (f64::from(n) * proto.max_ratio().acosh()).cosh();
    10.0 * (1.0 + eps * eps * t * t).log10()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Approximation, FilterSpec};

    fn proto(spec: &FilterSpec) -> LowpassPrototype {
        LowpassPrototype::from_spec(spec)
    }

    fn reference_spec() -> FilterSpec {
        FilterSpec::lowpass(Approximation::Chebyshev, 1000.0, 1500.0)
            .with_ripple(0.5)
            .with_stopband_atten(60.0)
    }

    #[test]
    fn test_order_reference_case() {
        // acosh(sqrt(999999/0.12202)) / acosh(1.5) = 8.99 -> 9
        let p = proto(&reference_spec());
        assert_eq!(order(&p).unwrap(), 9);
    }

    #[test]
    fn test_order_is_minimal() {
        for (fs, rp, as_db) in [
            (1500.0, 0.5, 60.0),
            (2000.0, 1.0, 40.0),
            (1200.0, 0.1, 30.0),
            (3000.0, 2.0, 80.0),
        ] {
            let spec = FilterSpec::lowpass(Approximation::Chebyshev, 1000.0, fs)
                .with_ripple(rp)
                .with_stopband_atten(as_db);
            let p = proto(&spec);
            let n = order(&p).unwrap();
            assert!(
                stopband_attenuation_db(&p, n) >= as_db - 1e-9,
                "order {} misses target",
                n
            );
            assert!(
                stopband_attenuation_db(&p, n - 1) < as_db,
                "order {} is not minimal",
                n
            );
        }
    }

    #[test]
    fn test_reference_poles_stable_and_finite() {
        let set = synthesize(&proto(&reference_spec())).unwrap();
        assert_eq!(set.order, 9);
        assert_eq!(set.poles.len(), 9);
        assert!(set.zeros.is_empty());
        for p in &set.poles {
            assert!(p.re.is_finite() && p.im.is_finite());
            assert!(p.re < 0.0, "unstable pole {:?}", p);
        }
        // Odd order keeps one real pole in the middle
        assert!(set.poles[4].im.abs() < 1e-12);
    }

    #[test]
    fn test_order_two_poles() {
        // Rp = 1 dB: eps = 0.50885, v0 = asinh(1.9652)/2 = 0.71429
        let p = poles(2, 1.0);
        let v0 = (1.0 / (10f64.powf(0.1) - 1.0).sqrt()).asinh() / 2.0;
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert!((p[0].re + v0.sinh() * s).abs() < 1e-12);
        assert!((p[0].im - v0.cosh() * s).abs() < 1e-12);
        assert_eq!(p[1], p[0].conj());
    }

    #[test]
    fn test_incompatible_spec_is_invalid() {
        // As below Rp: the acosh argument drops under one
        let spec = FilterSpec::lowpass(Approximation::Chebyshev, 1000.0, 2000.0)
            .with_ripple(1.0)
            .with_stopband_atten(0.5);
        let err = order(&proto(&spec)).unwrap_err();
        match err {
            SynthesisError::OrderInvalid { order, diagnostics } => {
                assert!(order < 1);
                assert_eq!(
                    diagnostics,
                    OrderDiagnostics::Estimate {
                        stopband_atten_db: 0.5,
                        ripple_db: 1.0,
                        cutoff_freq: 1000.0,
                        stopband_freq: 2000.0,
                        freq_ratio: 2.0,
                    }
                );
            }
            other => panic!("expected OrderInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_bandstop_even() {
        let spec = FilterSpec::bandstop(Approximation::Chebyshev, 900.0, 1100.0, 100.0)
            .with_ripple(1.0)
            .with_stopband_atten(40.0);
        let set = synthesize(&proto(&spec)).unwrap();
        assert_eq!(set.order % 2, 0);
        assert_eq!(set.order, set.poles.len());
    }

    #[test]
    fn test_order_too_high() {
        let spec = FilterSpec::lowpass(Approximation::Chebyshev, 1000.0, 1001.0)
            .with_ripple(0.1)
            .with_stopband_atten(100.0);
        assert!(matches!(
            order(&proto(&spec)),
            Err(SynthesisError::OrderTooHigh { .. })
        ));
    }
}
