//! # Analog Active-Filter Synthesis
//!
//! This crate computes the order and normalized pole/zero set of an analog
//! filter prototype from a high-level specification. The result feeds a
//! realization layer (Sallen-Key, multiple feedback, ...) that turns poles and
//! zeros into component values.
//!
//! ## Overview
//!
//! - **Filter types**: lowpass, highpass, bandpass, bandstop
//! - **Approximations**: Butterworth, Chebyshev, inverse Chebyshev,
//!   elliptic (Cauer), Bessel, and user-supplied transfer functions
//! - **Order estimation**: closed-form formulas and a truncated nome series
//! - **Root finding**: Aberth-Ehrlich iteration for user polynomials
//!
//! ## Signal Flow
//!
//! ```text
//! FilterSpec → Prototype Selector → Approximation Engine → Reform → Validator → SynthesisResult
//! ```
//!
//! ## Example
//!
//! ```rust
//! use afsynth_core::prelude::*;
//!
//! let spec = FilterSpec::lowpass(Approximation::Butterworth, 1000.0, 3000.0)
//!     .with_stopband_atten(40.0);
//!
//! let result = synthesize(&spec).unwrap();
//! assert_eq!(result.order(), 5);
//! assert!(result.is_stable());
//! println!("{}", result);
//! ```

pub mod approx;
pub mod bessel_table;
pub mod config;
pub mod engine;
pub mod error;
pub mod observe;
pub mod poly;
pub mod prototype;
pub mod reform;
pub mod report;
pub mod types;
pub mod validate;

pub use engine::{compare_orders, estimate_order, synthesize};
pub use error::{ErrorKind, SynthResult, SynthesisError};
pub use types::{Approximation, Complex, FilterSpec, FilterType, SynthesisResult, TransferFunction};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{AfsConfig, ConfigError};
    pub use crate::engine::{compare_orders, estimate_order, synthesize};
    pub use crate::error::{ErrorKind, SynthResult, SynthesisError};
    pub use crate::prototype::LowpassPrototype;
    pub use crate::types::{
        Approximation, Complex, FilterSpec, FilterType, SynthesisResult, TransferFunction,
    };
}
