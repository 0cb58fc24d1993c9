//! Frequency transform / prototype selection
//!
//! Every approximation engine solves a lowpass problem. Highpass requests are
//! already in that form (the engines only look at the Fc/Fs ratio). Bandpass
//! and bandstop requests are folded onto an equivalent lowpass prototype
//! through the band-edge mapping:
//!
//! ```text
//! BW   = |Fu - Fl|                 F0 = sqrt(Fu * Fl)
//! Fc'  = BW
//! Fs1  = Fu + TW    ->  |Fs1 - F0²/Fs1|
//! Fs2  = Fl - TW    ->  |Fs2 - F0²/Fs2|
//! Fs'  = min of the two mapped stopband edges
//! ```
//!
//! The passband-edge attenuation of the prototype is pinned to 3 dB for band
//! filters. The quality factor `Q = F0 / BW` is carried along for the stage
//! realization and never feeds back into the order computation.

use crate::types::{FilterSpec, FilterType};
use serde::{Deserialize, Serialize};

/// Passband-edge attenuation used for band-filter prototypes.
pub const BAND_EDGE_ATTEN_DB: f64 = 3.0;

/// Geometry of a bandpass/bandstop request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandGeometry {
    /// Bandwidth |Fu - Fl| in Hz
    pub bandwidth: f64,
    /// Geometric center frequency in Hz
    pub center_freq: f64,
    /// F0 / BW
    pub quality_factor: f64,
}

impl BandGeometry {
    pub fn new(lower: f64, upper: f64) -> Self {
        let bandwidth = (upper - lower).abs();
        let center_freq = (upper * lower).sqrt();
        Self {
            bandwidth,
            center_freq,
            quality_factor: center_freq / bandwidth,
        }
    }

    /// Map a bandpass-domain frequency onto the lowpass prototype axis.
    pub fn to_lowpass(&self, freq: f64) -> f64 {
        (freq - self.center_freq * self.center_freq / freq).abs()
    }
}

/// Normalized lowpass problem handed to an approximation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowpassPrototype {
    /// Filter type of the original request
    pub filter_type: FilterType,
    /// Prototype passband edge in Hz
    pub cutoff_freq: f64,
    /// Prototype stopband edge in Hz
    pub stopband_freq: f64,
    /// Attenuation at the passband edge (Ap) in dB
    pub edge_atten_db: f64,
    /// Passband ripple (Rp) in dB
    pub ripple_db: f64,
    /// Minimum stopband attenuation (As) in dB
    pub stopband_atten_db: f64,
    /// Present for bandpass/bandstop requests only
    pub band: Option<BandGeometry>,
}

impl LowpassPrototype {
    /// Derive the lowpass prototype for `spec`.
    pub fn from_spec(spec: &FilterSpec) -> Self {
        let proto = match spec.filter_type {
            FilterType::LowPass | FilterType::HighPass => Self {
                filter_type: spec.filter_type,
                cutoff_freq: spec.cutoff_freq,
                stopband_freq: spec.stopband_freq,
                edge_atten_db: spec.passband_atten_db,
                ripple_db: spec.passband_ripple_db,
                stopband_atten_db: spec.stopband_atten_db,
                band: None,
            },
            FilterType::BandPass | FilterType::BandStop => {
                let geom = BandGeometry::new(spec.lower_freq, spec.upper_freq);
                let upper_stop = geom.to_lowpass(spec.upper_freq + spec.transition_width);
                let lower_stop = geom.to_lowpass(spec.lower_freq - spec.transition_width);
                Self {
                    filter_type: spec.filter_type,
                    cutoff_freq: geom.bandwidth,
                    stopband_freq: upper_stop.min(lower_stop),
                    edge_atten_db: BAND_EDGE_ATTEN_DB,
                    ripple_db: spec.passband_ripple_db,
                    stopband_atten_db: spec.stopband_atten_db,
                    band: Some(geom),
                }
            }
        };

        tracing::debug!(
            filter_type = %proto.filter_type,
            fc = proto.cutoff_freq,
            fs = proto.stopband_freq,
            ap = proto.edge_atten_db,
            rp = proto.ripple_db,
            as_db = proto.stopband_atten_db,
            "Derived lowpass prototype"
        );

        proto
    }

    /// Fc/Fs folded below one.
    pub fn min_ratio(&self) -> f64 {
        let r = self.cutoff_freq / self.stopband_freq;
        r.min(1.0 / r)
    }

    /// Fc/Fs folded above one.
    pub fn max_ratio(&self) -> f64 {
        let r = self.cutoff_freq / self.stopband_freq;
        r.max(1.0 / r)
    }

    /// Fc/Fs exactly as given, unfolded.
    pub fn raw_ratio(&self) -> f64 {
        self.cutoff_freq / self.stopband_freq
    }

    pub fn bandwidth(&self) -> Option<f64> {
        self.band.map(|b| b.bandwidth)
    }

    pub fn center_freq(&self) -> Option<f64> {
        self.band.map(|b| b.center_freq)
    }

    pub fn quality_factor(&self) -> Option<f64> {
        self.band.map(|b| b.quality_factor)
    }
}
