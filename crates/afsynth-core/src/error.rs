//! Error types for filter synthesis

use std::fmt;

/// Result type for synthesis operations
pub type SynthResult<T> = Result<T, SynthesisError>;

/// Parameters that led to an invalid order, reported for diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderDiagnostics {
    /// Magnitude-specified order estimate came out below one
    Estimate {
        stopband_atten_db: f64,
        ripple_db: f64,
        cutoff_freq: f64,
        stopband_freq: f64,
        freq_ratio: f64,
    },
    /// Requested order is outside the tabulated range `1..=max_order`
    Table { max_order: i32 },
}

impl fmt::Display for OrderDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDiagnostics::Estimate {
                stopband_atten_db,
                ripple_db,
                cutoff_freq,
                stopband_freq,
                freq_ratio,
            } => write!(
                f,
                "As = {} dB, Rp = {} dB, Fc = {} Hz, Fs = {} Hz, Fs/Fc = {}",
                stopband_atten_db, ripple_db, cutoff_freq, stopband_freq, freq_ratio
            ),
            OrderDiagnostics::Table { max_order } => {
                write!(f, "supported orders are 1..={}", max_order)
            }
        }
    }
}

/// Errors that can occur during filter synthesis
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthesisError {
    #[error("Filter order too high: {order}. Maximum is 50")]
    OrderTooHigh { order: i32 },

    #[error("Invalid filter order: {order} ({diagnostics})")]
    OrderInvalid {
        order: i32,
        diagnostics: OrderDiagnostics,
    },

    #[error("Transfer function numerator or denominator is empty")]
    MissingCoefficients,

    #[error("No poles generated")]
    NoPolesGenerated,

    #[error("No zeros generated")]
    NoZerosGenerated,

    #[error("Invalid coefficient: {field} is not finite")]
    InvalidCoefficient { field: String },

    #[error("Unknown filter function: {0}")]
    UnknownFilterFunction(String),

    #[error("Unknown filter type: {0}")]
    UnknownFilterType(String),
}

/// Payload-free discriminant of [`SynthesisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    OrderTooHigh,
    OrderInvalid,
    MissingCoefficients,
    NoPolesGenerated,
    NoZerosGenerated,
    InvalidCoefficient,
    UnknownFilterFunction,
    UnknownFilterType,
}

impl SynthesisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SynthesisError::OrderTooHigh { .. } => ErrorKind::OrderTooHigh,
            SynthesisError::OrderInvalid { .. } => ErrorKind::OrderInvalid,
            SynthesisError::MissingCoefficients => ErrorKind::MissingCoefficients,
            SynthesisError::NoPolesGenerated => ErrorKind::NoPolesGenerated,
            SynthesisError::NoZerosGenerated => ErrorKind::NoZerosGenerated,
            SynthesisError::InvalidCoefficient { .. } => ErrorKind::InvalidCoefficient,
            SynthesisError::UnknownFilterFunction(_) => ErrorKind::UnknownFilterFunction,
            SynthesisError::UnknownFilterType(_) => ErrorKind::UnknownFilterType,
        }
    }

    pub(crate) fn invalid_field(field: impl Into<String>) -> Self {
        SynthesisError::InvalidCoefficient {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            SynthesisError::OrderTooHigh { order: 51 }.kind(),
            ErrorKind::OrderTooHigh
        );
        assert_eq!(
            SynthesisError::invalid_field("poles[0].re").kind(),
            ErrorKind::InvalidCoefficient
        );
        assert_eq!(
            SynthesisError::UnknownFilterType("x".into()).kind(),
            ErrorKind::UnknownFilterType
        );
    }

    #[test]
    fn test_display_carries_payload() {
        let err = SynthesisError::OrderTooHigh { order: 64 };
        assert!(err.to_string().contains("64"));

        let err = SynthesisError::OrderInvalid {
            order: 0,
            diagnostics: OrderDiagnostics::Estimate {
                stopband_atten_db: 0.5,
                ripple_db: 1.0,
                cutoff_freq: 1000.0,
                stopband_freq: 2000.0,
                freq_ratio: 2.0,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("As = 0.5 dB"), "got: {}", msg);
        assert!(msg.contains("Fs/Fc = 2"), "got: {}", msg);

        let err = SynthesisError::invalid_field("zeros[2].im");
        assert!(err.to_string().contains("zeros[2].im"));
    }

    #[test]
    fn test_table_diagnostics() {
        let err = SynthesisError::OrderInvalid {
            order: 21,
            diagnostics: OrderDiagnostics::Table { max_order: 20 },
        };
        assert!(err.to_string().contains("1..=20"));
    }
}
