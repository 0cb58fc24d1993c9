//! Polynomial root finding for real-coefficient polynomials
//!
//! Coefficients are in ascending powers: `[c0, c1, ..., cn]` represents
//! `c0 + c1*x + ... + cn*x^n`.
//!
//! ## Algorithm
//!
//! 1. Leading coefficients that are negligible against the largest one
//!    (`|c| <= 1e-14 * max|c|`) are dropped, so near-degenerate inputs
//!    reduce to the effective degree.
//! 2. Exact zero constant terms are factored out as roots at the origin.
//! 3. Degrees 1 and 2 are solved in closed form.
//! 4. Higher degrees use Aberth-Ehrlich simultaneous iteration. Starting
//!    points sit on a circle of radius `|c0/cn|^(1/n)` (the geometric mean
//!    root magnitude), rotated off the real axis so conjugate roots separate.
//!    Each sweep updates roots in place:
//!
//!    ```text
//!    w_k = (p/p')(z_k) / (1 - (p/p')(z_k) * Σ_{j≠k} 1/(z_k - z_j))
//!    z_k <- z_k - w_k
//!    ```
//!
//!    Convergence is cubic for simple roots and linear for multiple roots.
//!
//! Finally, imaginary parts below `1e-9 * (1 + |z|)` are snapped to zero.
//! The remaining estimates are matched into conjugate pairs and each pair is
//! averaged so it is exactly symmetric. A root of multiplicity m is only
//! resolved to about `eps^(1/m)`, so a repeated real root comes back as a
//! small cluster with imaginary noise well above the snap tolerance; any
//! cluster member left without a conjugate partner is projected onto the
//! real axis. The output is therefore closed under conjugation.
//!
//! Canonical order: conjugate pairs first, by descending `|Im|`, each as
//! `(+Im, -Im)`; then real roots by descending real part.

use crate::types::Complex;
use std::f64::consts::PI;

const TRIM_RELATIVE: f64 = 1e-14;
const MAX_SWEEPS: usize = 500;
const STEP_TOLERANCE: f64 = 1e-12;
const SNAP_TOLERANCE: f64 = 1e-9;
const START_ANGLE_OFFSET: f64 = 0.4;
const NUDGE_RELATIVE: f64 = 1e-3;

/// Find all complex roots of a real polynomial.
///
/// A polynomial with no non-zero coefficient, or of effective degree zero,
/// has no roots.
pub fn roots(coeffs: &[f64]) -> Vec<Complex> {
    let max = coeffs.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    if max == 0.0 || !max.is_finite() {
        return Vec::new();
    }

    let mut end = coeffs.len();
    while end > 0 && coeffs[end - 1].abs() <= TRIM_RELATIVE * max {
        end -= 1;
    }
    let trimmed = &coeffs[..end];

    let origin = trimmed.iter().take_while(|&&c| c == 0.0).count();
    let reduced = &trimmed[origin..];

    let mut found: Vec<Complex> = vec![Complex::new(0.0, 0.0); origin];
    match reduced.len() {
        0 | 1 => {}
        2 => found.push(Complex::new(-reduced[0] / reduced[1], 0.0)),
        3 => found.extend(quadratic(reduced[0], reduced[1], reduced[2])),
        _ => found.extend(aberth(reduced)),
    }

    canonical_order(found)
}

/// Evaluate a real polynomial at a complex point (Horner).
pub fn eval(coeffs: &[f64], z: Complex) -> Complex {
    coeffs
        .iter()
        .rev()
        .fold(Complex::new(0.0, 0.0), |acc, &c| acc * z + c)
}

/// Roots of `c0 + c1*x + c2*x^2` with `c0 != 0` and `c2 != 0`.
fn quadratic(c0: f64, c1: f64, c2: f64) -> [Complex; 2] {
    let disc = c1 * c1 - 4.0 * c2 * c0;
    if disc < 0.0 {
        let re = -c1 / (2.0 * c2);
        let im = (-disc).sqrt() / (2.0 * c2.abs());
        return [Complex::new(re, im), Complex::new(re, -im)];
    }
    // Cancellation-free form
    let q = -0.5 * (c1 + c1.signum() * disc.sqrt());
    if q == 0.0 {
        return [Complex::new(0.0, 0.0); 2];
    }
    [Complex::new(q / c2, 0.0), Complex::new(c0 / q, 0.0)]
}

fn aberth(coeffs: &[f64]) -> Vec<Complex> {
    let n = coeffs.len() - 1;
    let lead = coeffs[n];
    let monic: Vec<f64> = coeffs.iter().map(|c| c / lead).collect();
    let deriv = derivative(&monic);

    let radius = monic[0].abs().powf(1.0 / n as f64);
    let mut z: Vec<Complex> = (0..n)
        .map(|k| Complex::from_polar(radius, 2.0 * PI * k as f64 / n as f64 + START_ANGLE_OFFSET))
        .collect();

    let mut converged = false;
    for _ in 0..MAX_SWEEPS {
        converged = sweep(&monic, &deriv, &mut z);
        if converged {
            break;
        }
    }

    if !converged {
        tracing::warn!(
            degree = n,
            sweeps = MAX_SWEEPS,
            "Root solver did not converge; returning best estimates"
        );
    }

    z
}

fn derivative(coeffs: &[f64]) -> Vec<f64> {
    coeffs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, &c)| c * i as f64)
        .collect()
}

/// One Aberth-Ehrlich pass over every estimate. Returns true when no
/// estimate moved by more than the step tolerance.
///
/// An estimate whose correction is not finite (critical point of `p`, or
/// two coincident estimates) is nudged off its position and counts as
/// not converged.
fn sweep(monic: &[f64], deriv: &[f64], z: &mut [Complex]) -> bool {
    let n = z.len();
    let mut converged = true;
    for k in 0..n {
        let p = eval(monic, z[k]);
        if p.norm() == 0.0 {
            continue;
        }
        let dp = eval(deriv, z[k]);
        let ratio = p / dp;
        let repulsion: Complex = (0..n)
            .filter(|&j| j != k)
            .map(|j| (z[k] - z[j]).inv())
            .sum();
        let w = ratio / (Complex::new(1.0, 0.0) - ratio * repulsion);
        if !w.re.is_finite() || !w.im.is_finite() {
            let nudge = NUDGE_RELATIVE * (1.0 + z[k].norm());
            z[k] += Complex::from_polar(nudge, k as f64 + START_ANGLE_OFFSET);
            converged = false;
            continue;
        }
        z[k] -= w;
        if w.norm() > STEP_TOLERANCE * (1.0 + z[k].norm()) {
            converged = false;
        }
    }
    converged
}

fn canonical_order(found: Vec<Complex>) -> Vec<Complex> {
    let mut reals = Vec::new();
    let mut upper = Vec::new();
    let mut lower = Vec::new();

    for r in found {
        if r.im.abs() < SNAP_TOLERANCE * (1.0 + r.norm()) {
            reals.push(r.re);
        } else if r.im > 0.0 {
            upper.push(r);
        } else {
            lower.push(r);
        }
    }

    upper.sort_by(|a, b| b.im.total_cmp(&a.im));

    let mut pairs = Vec::with_capacity(upper.len());
    for u in upper {
        let partner = lower
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - u.conj()).norm().total_cmp(&(*b - u.conj()).norm()))
            .map(|(i, _)| i);
        match partner {
            Some(i) => {
                let l = lower.swap_remove(i);
                pairs.push(Complex::new(0.5 * (u.re + l.re), 0.5 * (u.im - l.im)));
            }
            // A real polynomial has no unpaired complex root: this is one
            // member of a split real cluster
            None => reals.push(u.re),
        }
    }
    reals.extend(lower.iter().map(|l| l.re));

    reals.sort_by(|a, b| b.total_cmp(a));

    let mut out = Vec::with_capacity(2 * pairs.len() + reals.len());
    for p in pairs {
        out.push(p);
        out.push(p.conj());
    }
    out.extend(reals.into_iter().map(|re| Complex::new(re, 0.0)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ascending coefficients of prod (x - r).
    fn from_real_roots(rs: &[f64]) -> Vec<f64> {
        let mut c = vec![1.0];
        for &r in rs {
            let mut next = vec![0.0; c.len() + 1];
            for (i, &ci) in c.iter().enumerate() {
                next[i] -= r * ci;
                next[i + 1] += ci;
            }
            c = next;
        }
        c
    }

    /// Ascending coefficients of the product of `factors`.
    fn product(factors: &[&[f64]]) -> Vec<f64> {
        factors.iter().fold(vec![1.0], |acc, f| {
            let mut next = vec![0.0; acc.len() + f.len() - 1];
            for (i, &a) in acc.iter().enumerate() {
                for (j, &b) in f.iter().enumerate() {
                    next[i + j] += a * b;
                }
            }
            next
        })
    }

    fn close(a: Complex, re: f64, im: f64, tol: f64) -> bool {
        (a.re - re).abs() < tol && (a.im - im).abs() < tol
    }

    fn assert_conjugate_closed(r: &[Complex]) {
        for z in r {
            assert!(
                r.iter().any(|w| *w == z.conj()),
                "{:?} has no conjugate in {:?}",
                z,
                r
            );
        }
        let upper = r.iter().filter(|z| z.im > 0.0).count();
        let lower = r.iter().filter(|z| z.im < 0.0).count();
        assert_eq!(upper, lower, "unbalanced pairs in {:?}", r);
    }

    #[test]
    fn test_linear() {
        let r = roots(&[4.0, 2.0]);
        assert_eq!(r.len(), 1);
        assert!(close(r[0], -2.0, 0.0, 1e-15));
    }

    #[test]
    fn test_quadratic_complex() {
        // x^2 + 2x + 5: -1 ± 2j
        let r = roots(&[5.0, 2.0, 1.0]);
        assert_eq!(r.len(), 2);
        assert!(close(r[0], -1.0, 2.0, 1e-12));
        assert!(close(r[1], -1.0, -2.0, 1e-12));
    }

    #[test]
    fn test_quadratic_double_root() {
        let r = roots(&[1.0, 2.0, 1.0]);
        assert_eq!(r.len(), 2);
        assert!(close(r[0], -1.0, 0.0, 1e-12));
        assert!(close(r[1], -1.0, 0.0, 1e-12));
    }

    #[test]
    fn test_cubic_butterworth() {
        // 1 + 2s + 2s^2 + s^3 = (s + 1)(s^2 + s + 1)
        let r = roots(&[1.0, 2.0, 2.0, 1.0]);
        assert_eq!(r.len(), 3);
        let h = 3.0_f64.sqrt() / 2.0;
        assert!(close(r[0], -0.5, h, 1e-10), "got {:?}", r);
        assert!(close(r[1], -0.5, -h, 1e-10), "got {:?}", r);
        assert!(close(r[2], -1.0, 0.0, 1e-10), "got {:?}", r);
        assert_eq!(r[2].im, 0.0);
        assert_eq!(r[0], r[1].conj());
    }

    #[test]
    fn test_imaginary_axis_pairs_ordered() {
        // (s^2 + 1)(s^2 + 4)
        let r = roots(&[4.0, 0.0, 5.0, 0.0, 1.0]);
        assert_eq!(r.len(), 4);
        assert!(close(r[0], 0.0, 2.0, 1e-10), "got {:?}", r);
        assert!(close(r[1], 0.0, -2.0, 1e-10), "got {:?}", r);
        assert!(close(r[2], 0.0, 1.0, 1e-10), "got {:?}", r);
        assert!(close(r[3], 0.0, -1.0, 1e-10), "got {:?}", r);
    }

    #[test]
    fn test_real_roots_descending() {
        let expected = [-1.0, -2.0, -3.0, -4.0, -5.0, -6.0];
        let r = roots(&from_real_roots(&expected));
        assert_eq!(r.len(), 6);
        for (got, want) in r.iter().zip(expected.iter()) {
            assert!(close(*got, *want, 0.0, 1e-8), "got {:?}", r);
        }
    }

    #[test]
    fn test_double_root_higher_degree() {
        // (x + 1)^2 (x + 3)
        let r = roots(&from_real_roots(&[-1.0, -1.0, -3.0]));
        assert_eq!(r.len(), 3);
        for z in &r {
            let near_one = (*z - Complex::new(-1.0, 0.0)).norm() < 1e-6;
            let near_three = (*z - Complex::new(-3.0, 0.0)).norm() < 1e-6;
            assert!(near_one || near_three, "stray root {:?}", z);
        }
        let ones = r
            .iter()
            .filter(|z| (**z - Complex::new(-1.0, 0.0)).norm() < 1e-6)
            .count();
        assert_eq!(ones, 2);
    }

    #[test]
    fn test_negligible_leading_trimmed() {
        // 2 + 3x + x^2 + 1e-20 x^3 behaves like a quadratic
        let r = roots(&[2.0, 3.0, 1.0, 1e-20]);
        assert_eq!(r.len(), 2);
        assert!(close(r[0], -1.0, 0.0, 1e-12));
        assert!(close(r[1], -2.0, 0.0, 1e-12));
    }

    #[test]
    fn test_origin_roots() {
        // x^2 (x + 1)
        let r = roots(&[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(r.len(), 3);
        assert_eq!(r[0], Complex::new(0.0, 0.0));
        assert_eq!(r[1], Complex::new(0.0, 0.0));
        assert!(close(r[2], -1.0, 0.0, 1e-15));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(roots(&[]).is_empty());
        assert!(roots(&[0.0, 0.0, 0.0]).is_empty());
        assert!(roots(&[7.0]).is_empty());
        assert!(roots(&[7.0, 0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_roots_satisfy_polynomial() {
        // Chebyshev-like denominator with well separated complex roots
        let c = [1.0, 0.9, 2.1, 1.3, 1.7, 0.6];
        let r = roots(&c);
        assert_eq!(r.len(), 5);
        for z in &r {
            assert!(eval(&c, *z).norm() < 1e-9, "p({:?}) = {:?}", z, eval(&c, *z));
        }
    }

    #[test]
    fn test_quadruple_real_root() {
        // (s + 1)^4: critically damped, roots only resolved to ~eps^(1/4)
        let r = roots(&[1.0, 4.0, 6.0, 4.0, 1.0]);
        assert_eq!(r.len(), 4);
        assert_conjugate_closed(&r);
        for z in &r {
            assert!(close(*z, -1.0, 0.0, 1e-3), "got {:?}", r);
        }
    }

    #[test]
    fn test_triple_real_root() {
        let r = roots(&product(&[&[1.0, 1.0], &[1.0, 1.0], &[1.0, 1.0]]));
        assert_eq!(r.len(), 3);
        assert_conjugate_closed(&r);
        for z in &r {
            assert!(close(*z, -1.0, 0.0, 1e-4), "got {:?}", r);
        }
    }

    #[test]
    fn test_repeated_imaginary_pair() {
        // (s^2 + 1)^2
        let r = roots(&[1.0, 0.0, 2.0, 0.0, 1.0]);
        assert_eq!(r.len(), 4);
        assert_conjugate_closed(&r);
        assert_eq!(r.iter().filter(|z| close(**z, 0.0, 1.0, 1e-6)).count(), 2, "got {:?}", r);
        assert_eq!(r.iter().filter(|z| close(**z, 0.0, -1.0, 1e-6)).count(), 2, "got {:?}", r);
    }

    #[test]
    fn test_triple_complex_pair() {
        // (s^2 + 2s + 2)^3: -1 ± j, each three times
        let q: &[f64] = &[2.0, 2.0, 1.0];
        let r = roots(&product(&[q, q, q]));
        assert_eq!(r.len(), 6);
        assert_conjugate_closed(&r);
        for z in &r {
            assert!(close(*z, -1.0, z.im.signum(), 1e-4), "got {:?}", r);
        }
    }

    #[test]
    fn test_split_cluster_projected_to_real_axis() {
        // Typical solver output for (s + 1)^4: one pair, one stray lower
        // estimate, one real
        let ordered = canonical_order(vec![
            Complex::new(-0.999986, 1.02e-4),
            Complex::new(-0.999986, -1.02e-4),
            Complex::new(-0.999849, -3.27e-7),
            Complex::new(-1.000102, 0.0),
        ]);
        assert_eq!(
            ordered,
            vec![
                Complex::new(-0.999986, 1.02e-4),
                Complex::new(-0.999986, -1.02e-4),
                Complex::new(-0.999849, 0.0),
                Complex::new(-1.000102, 0.0),
            ]
        );

        // Unpaired upper estimate
        let ordered = canonical_order(vec![Complex::new(-2.0, 0.0), Complex::new(-1.0, 5e-5)]);
        assert_eq!(ordered, vec![Complex::new(-1.0, 0.0), Complex::new(-2.0, 0.0)]);
    }

    #[test]
    fn test_sweep_nudges_coincident_estimates() {
        // x^3 - 1 with every estimate on the same point: the corrections are
        // not finite, so the sweep must not report convergence
        let monic = [-1.0, 0.0, 0.0, 1.0];
        let deriv = derivative(&monic);
        let mut z = vec![Complex::new(2.0, 0.0); 3];

        assert!(!sweep(&monic, &deriv, &mut z));
        for (i, a) in z.iter().enumerate() {
            assert!(a.re.is_finite() && a.im.is_finite(), "{:?}", z);
            for b in &z[i + 1..] {
                assert!(*a != *b, "estimates still coincide: {:?}", z);
            }
        }

        let mut converged = false;
        for _ in 0..MAX_SWEEPS {
            converged = sweep(&monic, &deriv, &mut z);
            if converged {
                break;
            }
        }
        assert!(converged);
        for root in &z {
            assert!(eval(&monic, *root).norm() < 1e-9, "got {:?}", z);
        }
    }
}
