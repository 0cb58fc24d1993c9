//! Approximation engines
//!
//! Each engine turns a [`LowpassPrototype`](crate::prototype::LowpassPrototype)
//! (or, for Bessel and User, an explicit order or transfer function) into the
//! order and normalized pole/zero set of the lowpass prototype.
//!
//! | Engine          | Order from              | Zeros        | Reform |
//! |-----------------|-------------------------|--------------|--------|
//! | Butterworth     | Ap, As, Fc/Fs           | none         | no     |
//! | Chebyshev       | Rp, As, Fc/Fs           | none         | no     |
//! | Inv. Chebyshev  | As, Fc/Fs               | N on jω axis | yes    |
//! | Cauer           | Rp, As, Fc/Fs (nome)    | N - N mod 2  | no     |
//! | Bessel          | requested order         | none         | yes    |
//! | User            | polynomial degrees      | numerator    | yes    |

pub mod bessel;
pub mod butterworth;
pub mod cauer;
pub mod chebyshev;
pub mod inv_chebyshev;
pub mod user;

use crate::types::Complex;
use std::f64::consts::PI;

/// Raw output of one approximation engine, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PoleZeroSet {
    pub order: usize,
    pub poles: Vec<Complex>,
    pub zeros: Vec<Complex>,
}

impl PoleZeroSet {
    /// All-pole set whose order is the number of poles generated.
    pub fn all_pole(poles: Vec<Complex>) -> Self {
        Self {
            order: poles.len(),
            poles,
            zeros: Vec::new(),
        }
    }
}

/// Angle `π(2k - 1) / 2N` of the k-th pole (k counted from 1).
pub(crate) fn pole_angle(k: i32, n: i32) -> f64 {
    PI * f64::from(2 * k - 1) / f64::from(2 * n)
}

/// Round an odd order up to the next even one.
pub(crate) fn bump_to_even(order: i32, family: &'static str) -> i32 {
    if order % 2 == 0 {
        return order;
    }
    let bumped = order.saturating_add(1);
    tracing::debug!(family, from = order, to = bumped, "Order bumped to even");
    bumped
}

/// Convert a float order estimate to an integer order.
///
/// Non-finite estimates saturate (NaN maps to 0).
pub(crate) fn to_order(estimate: f64) -> i32 {
    estimate as i32
}
