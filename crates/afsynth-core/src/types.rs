//! Core types for analog filter synthesis
//!
//! This module defines the request and response types that flow through the
//! synthesis pipeline:
//!
//! - [`FilterSpec`]: what the caller wants (filter type, approximation family,
//!   band edges, ripple/attenuation targets)
//! - [`SynthesisResult`]: what the engine produces (order plus the normalized
//!   pole/zero set of the lowpass prototype)
//!
//! ## Poles and zeros
//!
//! Every pole or zero is a point in the complex s-plane of the normalized
//! lowpass prototype (cutoff = 1 rad/s):
//!
//! ```text
//!              jω
//!              ^
//!      x       |       o  zero on the jω axis (Cauer, inverse Chebyshev)
//!              |
//!   x          |
//!   ---x-------+---------> σ
//!   x          |
//!              |
//!      x       |       o
//! ```
//!
//! A physically realizable prototype keeps every pole in the left half plane
//! (σ < 0). The order of the pole and zero sequences matters: the realization
//! layer pairs consecutive entries into second-order stages.

use crate::error::{SynthResult, SynthesisError};
use crate::prototype::LowpassPrototype;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type alias for complex numbers using f64 precision
pub type Complex = Complex64;

/// Highest filter order any engine will produce.
pub const MAX_ORDER: i32 = 50;

/// Frequency-selective shape of the requested filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    LowPass,
    HighPass,
    BandPass,
    BandStop,
}

impl Default for FilterType {
    fn default() -> Self {
        FilterType::LowPass
    }
}

impl FilterType {
    /// All filter types, in declaration order.
    pub const ALL: [FilterType; 4] = [
        FilterType::LowPass,
        FilterType::HighPass,
        FilterType::BandPass,
        FilterType::BandStop,
    ];

    /// True for bandpass and bandstop, which are specified by two band edges.
    pub fn is_band(self) -> bool {
        matches!(self, FilterType::BandPass | FilterType::BandStop)
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterType::LowPass => write!(f, "lowpass"),
            FilterType::HighPass => write!(f, "highpass"),
            FilterType::BandPass => write!(f, "bandpass"),
            FilterType::BandStop => write!(f, "bandstop"),
        }
    }
}

impl FromStr for FilterType {
    type Err = SynthesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "lowpass" | "lp" | "lpf" => Ok(FilterType::LowPass),
            "highpass" | "hp" | "hpf" => Ok(FilterType::HighPass),
            "bandpass" | "bp" | "bpf" => Ok(FilterType::BandPass),
            "bandstop" | "bs" | "bsf" | "notch" => Ok(FilterType::BandStop),
            _ => Err(SynthesisError::UnknownFilterType(s.to_string())),
        }
    }
}

/// Approximation family used to shape the magnitude response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Approximation {
    /// Maximally flat passband
    Butterworth,
    /// Chebyshev type I: equiripple passband
    Chebyshev,
    /// Chebyshev type II: flat passband, equiripple stopband
    InvChebyshev,
    /// Elliptic: equiripple in both bands
    Cauer,
    /// Maximally flat group delay, order given explicitly
    Bessel,
    /// Caller-supplied rational transfer function
    User,
}

impl Default for Approximation {
    fn default() -> Self {
        Approximation::Butterworth
    }
}

impl Approximation {
    /// Families whose order is derived from ripple/attenuation targets.
    pub const MAGNITUDE_SPECIFIED: [Approximation; 4] = [
        Approximation::Butterworth,
        Approximation::Chebyshev,
        Approximation::InvChebyshev,
        Approximation::Cauer,
    ];

    /// Families that always place transmission zeros on the jω axis.
    pub fn requires_zeros(self) -> bool {
        matches!(self, Approximation::Cauer | Approximation::InvChebyshev)
    }
}

impl fmt::Display for Approximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Approximation::Butterworth => write!(f, "Butterworth"),
            Approximation::Chebyshev => write!(f, "Chebyshev"),
            Approximation::InvChebyshev => write!(f, "Inverse Chebyshev"),
            Approximation::Cauer => write!(f, "Cauer"),
            Approximation::Bessel => write!(f, "Bessel"),
            Approximation::User => write!(f, "User"),
        }
    }
}

impl FromStr for Approximation {
    type Err = SynthesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "butterworth" | "butter" => Ok(Approximation::Butterworth),
            "chebyshev" | "chebyshev1" | "cheby1" => Ok(Approximation::Chebyshev),
            "invchebyshev" | "inversechebyshev" | "chebyshev2" | "cheby2" => {
                Ok(Approximation::InvChebyshev)
            }
            "cauer" | "elliptic" | "ellip" => Ok(Approximation::Cauer),
            "bessel" | "thomson" => Ok(Approximation::Bessel),
            "user" | "custom" => Ok(Approximation::User),
            _ => Err(SynthesisError::UnknownFilterFunction(s.to_string())),
        }
    }
}

fn normalize_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Rational transfer function `H(s) = B(s) / A(s)` supplied by the caller.
///
/// Coefficients are in ascending powers of s: `[c0, c1, ..., cn]` is
/// `c0 + c1*s + ... + cn*s^n`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferFunction {
    /// Numerator B(s); its roots become the zeros
    pub numerator: Vec<f64>,
    /// Denominator A(s); its roots become the poles
    pub denominator: Vec<f64>,
}

impl TransferFunction {
    pub fn new(numerator: Vec<f64>, denominator: Vec<f64>) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// True when either polynomial has no coefficients at all.
    pub fn is_missing(&self) -> bool {
        self.numerator.is_empty() || self.denominator.is_empty()
    }

    /// Nominal order: the larger of the two polynomial degrees.
    pub fn order(&self) -> usize {
        self.numerator
            .len()
            .max(self.denominator.len())
            .saturating_sub(1)
    }
}

/// High-level filter specification.
///
/// Immutable input to a synthesis run. Which fields are read depends on the
/// filter type and approximation family:
///
/// | Field                 | Used by                                   |
/// |-----------------------|-------------------------------------------|
/// | `cutoff_freq`, `stopband_freq` | lowpass / highpass               |
/// | `lower_freq`, `upper_freq`, `transition_width` | bandpass / bandstop |
/// | `passband_atten_db`   | Butterworth (forced to 3 dB for band types) |
/// | `passband_ripple_db`  | Chebyshev, Cauer                          |
/// | `stopband_atten_db`   | all magnitude-specified families          |
/// | `requested_order`     | Bessel                                    |
/// | `transfer_function`   | User                                      |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub approximation: Approximation,
    /// Passband ripple Rp in dB
    pub passband_ripple_db: f64,
    /// Attenuation Ap at the passband edge in dB
    pub passband_atten_db: f64,
    /// Minimum stopband attenuation As in dB
    pub stopband_atten_db: f64,
    /// Passband edge (lowpass/highpass) in Hz
    pub cutoff_freq: f64,
    /// Stopband edge (lowpass/highpass) in Hz
    pub stopband_freq: f64,
    /// Lower band edge (bandpass/bandstop) in Hz
    pub lower_freq: f64,
    /// Upper band edge (bandpass/bandstop) in Hz
    pub upper_freq: f64,
    /// Transition width beyond each band edge in Hz
    pub transition_width: f64,
    /// Linear passband gain, passed through to the realization layer
    pub passband_gain: f64,
    /// Explicit order for Bessel
    pub requested_order: i32,
    /// Coefficients for the User family
    pub transfer_function: TransferFunction,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            filter_type: FilterType::LowPass,
            approximation: Approximation::Butterworth,
            passband_ripple_db: 1.0,
            passband_atten_db: 3.0,
            stopband_atten_db: 20.0,
            cutoff_freq: 1000.0,
            stopband_freq: 1200.0,
            lower_freq: 1000.0,
            upper_freq: 2000.0,
            transition_width: 200.0,
            passband_gain: 1.0,
            requested_order: 5,
            transfer_function: TransferFunction::default(),
        }
    }
}

impl FilterSpec {
    /// Lowpass specification with passband edge `cutoff` and stopband edge `stopband`.
    pub fn lowpass(approximation: Approximation, cutoff: f64, stopband: f64) -> Self {
        Self {
            filter_type: FilterType::LowPass,
            approximation,
            cutoff_freq: cutoff,
            stopband_freq: stopband,
            ..Default::default()
        }
    }

    /// Highpass specification with passband edge `cutoff` and stopband edge `stopband`.
    pub fn highpass(approximation: Approximation, cutoff: f64, stopband: f64) -> Self {
        Self {
            filter_type: FilterType::HighPass,
            ..Self::lowpass(approximation, cutoff, stopband)
        }
    }

    /// Bandpass specification between `lower` and `upper` with the given transition width.
    pub fn bandpass(approximation: Approximation, lower: f64, upper: f64, transition: f64) -> Self {
        Self {
            filter_type: FilterType::BandPass,
            approximation,
            lower_freq: lower,
            upper_freq: upper,
            transition_width: transition,
            ..Default::default()
        }
    }

    /// Bandstop specification between `lower` and `upper` with the given transition width.
    pub fn bandstop(approximation: Approximation, lower: f64, upper: f64, transition: f64) -> Self {
        Self {
            filter_type: FilterType::BandStop,
            ..Self::bandpass(approximation, lower, upper, transition)
        }
    }

    /// Bessel specification of a fixed order.
    pub fn bessel(filter_type: FilterType, order: i32) -> Self {
        Self {
            filter_type,
            approximation: Approximation::Bessel,
            requested_order: order,
            ..Default::default()
        }
    }

    /// User transfer-function specification.
    pub fn user(filter_type: FilterType, transfer_function: TransferFunction) -> Self {
        Self {
            filter_type,
            approximation: Approximation::User,
            transfer_function,
            ..Default::default()
        }
    }

    pub fn with_ripple(mut self, ripple_db: f64) -> Self {
        self.passband_ripple_db = ripple_db;
        self
    }

    pub fn with_edge_atten(mut self, atten_db: f64) -> Self {
        self.passband_atten_db = atten_db;
        self
    }

    pub fn with_stopband_atten(mut self, atten_db: f64) -> Self {
        self.stopband_atten_db = atten_db;
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.requested_order = order;
        self
    }

    pub fn with_gain(mut self, gain: f64) -> Self {
        self.passband_gain = gain;
        self
    }

    /// Parse both enum fields from text, e.g. from a command line.
    pub fn parse_kind(filter_type: &str, approximation: &str) -> SynthResult<(FilterType, Approximation)> {
        Ok((filter_type.parse()?, approximation.parse()?))
    }
}

/// Outcome of one synthesis run.
///
/// Produced once by [`crate::engine::synthesize`] and never mutated
/// afterwards; the fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisResult {
    order: usize,
    approximation: Approximation,
    prototype: LowpassPrototype,
    poles: Vec<Complex>,
    zeros: Vec<Complex>,
}

impl SynthesisResult {
    pub(crate) fn new(
        order: usize,
        approximation: Approximation,
        prototype: LowpassPrototype,
        poles: Vec<Complex>,
        zeros: Vec<Complex>,
    ) -> Self {
        Self {
            order,
            approximation,
            prototype,
            poles,
            zeros,
        }
    }

    /// Filter order (degree of the characteristic polynomial).
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn approximation(&self) -> Approximation {
        self.approximation
    }

    /// The lowpass prototype the poles were computed for.
    pub fn prototype(&self) -> &LowpassPrototype {
        &self.prototype
    }

    /// Poles in canonical stage-pairing order.
    pub fn poles(&self) -> &[Complex] {
        &self.poles
    }

    /// Zeros in canonical stage-pairing order (may be empty).
    pub fn zeros(&self) -> &[Complex] {
        &self.zeros
    }

    /// Number of second-order stages plus one first-order stage for odd orders.
    pub fn num_stages(&self) -> usize {
        self.order / 2 + self.order % 2
    }

    /// True when every pole lies strictly in the left half plane.
    pub fn is_stable(&self) -> bool {
        self.poles.iter().all(|p| p.re < 0.0)
    }

    /// Consume the result, returning `(order, poles, zeros)`.
    pub fn into_parts(self) -> (usize, Vec<Complex>, Vec<Complex>) {
        (self.order, self.poles, self.zeros)
    }
}

impl fmt::Display for SynthesisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::report::format_listing(
            self,
            self.prototype.filter_type.is_band(),
        ))
    }
}
