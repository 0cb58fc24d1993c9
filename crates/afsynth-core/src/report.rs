//! Plain-text pole/zero listing
//!
//! ```text
//! Filter order = 3
//! Poles list Pk=Re+j*Im
//! -0.5 + j*0.866025
//! -1 + j*0
//! -0.5 + j*-0.866025
//! ```
//!
//! Numbers use six significant digits, switching to exponent notation
//! outside `1e-4 ..= 1e6`, the way `%g` does.

use crate::types::{Complex, FilterSpec, SynthesisResult};
use std::fmt::Write;

/// Render the listing for a result produced from `spec`.
pub fn poles_zeros_listing(spec: &FilterSpec, result: &SynthesisResult) -> String {
    format_listing(result, spec.filter_type.is_band())
}

pub(crate) fn format_listing(result: &SynthesisResult, band: bool) -> String {
    let mut out = String::new();
    let _ = write!(out, "Filter order = {}", result.order());

    if !result.zeros().is_empty() {
        out.push_str("\n\nZeros list Pk=Re+j*Im");
        push_values(&mut out, result.zeros());
    }

    if band {
        out.push_str("\nLPF prototype poles list Pk=Re+j*Im");
    } else {
        out.push_str("\nPoles list Pk=Re+j*Im");
    }
    push_values(&mut out, result.poles());
    out.push('\n');
    out
}

fn push_values(out: &mut String, values: &[Complex]) {
    for v in values {
        let _ = write!(out, "\n{} + j*{}", format_g(v.re), format_g(v.im));
    }
}

/// Format with six significant digits, `%g` style.
pub fn format_g(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if !x.is_finite() {
        return x.to_string();
    }

    let sci = format!("{:.5e}", x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs());
    }

    let decimals = (5 - exp).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, x)).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
