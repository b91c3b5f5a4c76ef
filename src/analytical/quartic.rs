// Copyright (c) 2015, Mikhail Vorotilov
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// * Redistributions of source code must retain the above copyright notice, this
//   list of conditions and the following disclaimer.
//
// * Redistributions in binary form must reproduce the above copyright notice,
//   this list of conditions and the following disclaimer in the documentation
//   and/or other materials provided with the distribution.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use num_complex::Complex;
use tracing::trace;

use super::super::config::Tolerances;
use super::super::regime::{DepressedQuartic, QuarticRegime};
use super::super::{FloatType, Root, RootSet};
use super::biquadratic::biquadratic_depressed;
use super::cubic::solve_cubic_monic;
use super::numeric::{deflated_pair, quadratic_monic};

// Largest root of the resolvent cubic that counts as real.
// The first root returned by the cubic solver is always real.
fn largest_real_root<F: FloatType>(roots: &RootSet<F, 3>, imaginary_tolerance: F) -> F {
    roots
        .iter()
        .filter(|root| Tolerances::negligible(imaginary_tolerance, root.im(), root.re().hypot(root.im())))
        .map(Root::re)
        .fold(roots[0].re(), |best, y| best.max(y))
}

/// Root `y` of the resolvent y^3 + 2p*y^2 + (p^2 - 4r)*y - q^2 = 0 used by Ferrari's method.
///
/// `None` when the root is negligible next to `|p| + sqrt(|r|)`; the quartic is
/// then biquadratic to working precision. A small root comes out of the cubic
/// solver as `q^2 / (y2*y3)`, so it keeps its relative precision however
/// small `q` is.
pub(crate) fn resolvent_root<F: FloatType>(p: F, q: F, r: F, tolerances: &Tolerances<F>) -> Option<F> {
    let _2 = F::from(2i16);
    let _4 = F::from(4i16);

    let (roots, _) = solve_cubic_monic(_2 * p, p * p - _4 * r, -(q * q), tolerances);
    // The resolvent is -q^2 <= 0 at y = 0, so its largest real root is never negative.
    let y = largest_real_root(&roots, tolerances.resolvent_imaginary).max(F::zero());

    if Tolerances::negligible(tolerances.resolvent_root, y, p.abs() + r.abs().sqrt()) {
        None
    } else {
        Some(y)
    }
}

/// Splits t^4 + p*t^2 + q*t + r into (t^2 + s*t + alpha)(t^2 - s*t + beta), `s = sqrt(y)`.
///
/// Returns the `(linear, constant)` coefficients of both factors. Of `alpha`
/// and `beta`, the one whose two terms share a sign is summed directly and
/// the other is recovered from `alpha * beta = r`.
pub(crate) fn ferrari_factors<F: FloatType>(p: F, q: F, r: F, y: F) -> [(F, F); 2] {
    let zero = F::zero();
    let _2 = F::from(2i16);

    let s = y.sqrt();
    let m = (p + y) / _2;
    let h = q / (_2 * s);

    let (alpha, beta) = if (m >= zero) == (h >= zero) {
        let beta = m + h;
        let alpha = if beta != zero { r / beta } else { m - h };
        (alpha, beta)
    } else {
        let alpha = m - h;
        let beta = if alpha != zero { r / alpha } else { m + h };
        (alpha, beta)
    };
    [(s, alpha), (-s, beta)]
}

fn ferrari_roots<F: FloatType>(p: F, q: F, r: F, y: F) -> [Complex<F>; 4] {
    let [(b1, c1), (b2, c2)] = ferrari_factors(p, q, r, y);
    let [t1, t2] = quadratic_monic(b1, c1);
    let [t3, t4] = quadratic_monic(b2, c2);
    [t1, t2, t3, t4]
}

/// Divides the root of largest modulus out of x^4 + b*x^3 + c*x^2 + d*x + e.
///
/// Undoing the shift costs the smaller roots absolute precision relative to
/// `b/4`. The largest root does not suffer from it, and dividing it out from
/// the constant term upwards leaves a cubic or quadratic whose roots keep
/// their own relative precision.
fn deflate_largest<F: FloatType>(candidates: [Complex<F>; 4], c: F, d: F, e: F, tolerances: &Tolerances<F>) -> RootSet<F, 4> {
    let zero = F::zero();
    let _2 = F::from(2i16);

    let anchor = candidates
        .iter()
        .fold(candidates[0], |best, &z| if z.re.hypot(z.im) > best.re.hypot(best.im) { z } else { best });
    if anchor.re == zero && anchor.im == zero {
        return candidates.map(Root::from_complex);
    }

    if anchor.im == zero {
        let x1 = anchor.re;
        let q0 = -e / x1;
        let q1 = (q0 - d) / x1;
        let q2 = (q1 - c) / x1;
        let (rest, _) = solve_cubic_monic(q2, q1, q0, tolerances);
        return [Root::Real(x1), rest[0], rest[1], rest[2]];
    }

    // (x^2 + g*x + h)(x^2 + k*x + l) with x^2 + g*x + h vanishing at the anchor
    let z = if anchor.im > zero { anchor } else { anchor.conj() };
    let g = -_2 * z.re;
    let h = z.norm_sqr();
    let l = e / h;
    let k = (d - g * l) / h;
    let [w1, w2] = deflated_pair(-k, l, tolerances.cubic_discriminant);
    [
        Root::Complex(z),
        Root::Complex(z.conj()),
        Root::from_complex(w1),
        Root::from_complex(w2),
    ]
}

pub(crate) fn solve_quartic_with<F: FloatType>(
    tolerances: &Tolerances<F>,
    a4: F,
    a3: F,
    a2: F,
    a1: F,
    a0: F,
) -> RootSet<F, 4> {
    let (b, c, d, e) = (a3 / a4, a2 / a4, a1 / a4, a0 / a4);
    let quartic = DepressedQuartic::from_monic(b, c, d, e, tolerances);
    let (p, q, r) = (quartic.p, quartic.q, quartic.r);

    let roots = match quartic.regime {
        QuarticRegime::Biquadratic => biquadratic_depressed(p, r),
        QuarticRegime::Ferrari => match resolvent_root(p, q, r, tolerances) {
            Some(y) => ferrari_roots(p, q, r, y),
            None => {
                trace!(?q, "resolvent root vanishes, solving as biquadratic");
                biquadratic_depressed(p, r)
            }
        },
    };
    if quartic.shift == F::zero() {
        return roots.map(Root::from_complex);
    }
    deflate_largest(roots.map(|t| t - quartic.shift), c, d, e, tolerances)
}

/// Solves a quartic equation a4*x^4 + a3*x^3 + a2*x^2 + a1*x + a0 = 0 in closed form.
///
/// Always returns four roots. `a4` must not be zero; use
/// [`find_roots_quartic`](crate::find_roots_quartic) when it may vanish.
///
/// A complex-conjugate pair is always adjacent, positive imaginary part
/// first. The root of largest modulus comes first whenever the cubic term
/// survives the shift to depressed form. No iterative polishing is done;
/// expect about 1e-14 relative accuracy for simple roots in f64 and the square
/// root of that for double roots.
///
/// # Examples
///
/// ```
/// use quartic_roots::solve_quartic;
///
/// let roots = solve_quartic(1f64, 0f64, -5f64, 0f64, 4f64);
/// // Returns four real roots 2, -2, 1, -1 as 'x^4 - 5x^2 + 4 = 0' has roots -2, -1, 1 and 2
/// assert!(roots.iter().all(|root| root.is_real()));
///
/// let roots = solve_quartic(1f64, 0f64, 0f64, 0f64, 1f64);
/// // Returns the four points (+-1 +-i)/sqrt(2) as 'x^4 + 1 = 0' has no real roots
/// assert!(roots.iter().all(|root| (root.to_complex().norm() - 1f64).abs() < 1e-15));
/// ```
pub fn solve_quartic<F: FloatType>(a4: F, a3: F, a2: F, a1: F, a0: F) -> RootSet<F, 4> {
    solve_quartic_with(&Tolerances::default(), a4, a3, a2, a1, a0)
}

#[cfg(test)]
mod test {
    use super::super::super::*;
    use super::*;

    fn sorted_real(roots: RootSet<f64, 4>) -> [f64; 4] {
        assert!(roots.iter().all(Root::is_real), "Expected real roots, got {:?}", roots);
        let mut x = roots.map(|r| r.re());
        x.sort_by(|a, b| a.partial_cmp(b).unwrap());
        x
    }

    // Matches every expected root to a distinct returned root within `tol`.
    fn assert_root_set_approx(actual: &[Complex<f64>], expected: &[Complex<f64>], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        let mut used = vec![false; actual.len()];
        for want in expected {
            let hit = (0..actual.len())
                .filter(|&i| !used[i])
                .min_by(|&i, &j| (actual[i] - want).norm().partial_cmp(&(actual[j] - want).norm()).unwrap())
                .unwrap();
            assert!(
                (actual[hit] - want).norm() <= tol,
                "No root near {}: got {:?}",
                want,
                actual
            );
            used[hit] = true;
        }
    }

    fn complex_roots(roots: RootSet<f64, 4>) -> Vec<Complex<f64>> {
        roots.iter().map(Root::to_complex).collect()
    }

    #[test]
    fn test_solve_quartic_biquadratic() {
        assert_float_array_eq!(1e-15, sorted_real(solve_quartic(1f64, 0f64, -5f64, 0f64, 4f64)), [-2f64, -1f64, 1f64, 2f64]);
        assert_float_array_eq!(
            1e-14,
            sorted_real(solve_quartic(1f64, -10f64, 35f64, -50f64, 24f64)),
            [1f64, 2f64, 3f64, 4f64]
        );
        assert_float_array_eq!(
            1e-13,
            sorted_real(solve_quartic(1f64, 2f64, -13f64, -14f64, 24f64)),
            [-4f64, -2f64, 1f64, 3f64]
        );
    }

    #[test]
    fn test_solve_quartic_unit_circle() {
        let h = 0.5f64.sqrt();
        assert_root_set_approx(
            &complex_roots(solve_quartic(1f64, 0f64, 0f64, 0f64, 1f64)),
            &[
                Complex::new(h, h),
                Complex::new(-h, h),
                Complex::new(-h, -h),
                Complex::new(h, -h),
            ],
            1e-15,
        );
    }

    #[test]
    fn test_solve_quartic_ferrari_real() {
        // (x+2)(x+1)(3x-1)(x-1)
        assert_float_array_eq!(
            1e-12,
            sorted_real(solve_quartic(3f64, 5f64, -5f64, -5f64, 2f64)),
            [-2f64, -1f64, 1f64 / 3f64, 1f64]
        );
        // (x-1)(x-2)(x-3)(x+5) = x^4 - x^3 - 19x^2 + 49x - 30
        assert_float_array_eq!(
            1e-12,
            sorted_real(solve_quartic(1f64, -1f64, -19f64, 49f64, -30f64)),
            [-5f64, 1f64, 2f64, 3f64]
        );
    }

    #[test]
    fn test_solve_quartic_ferrari_complex() {
        // (x^2 + 1)(x^2 + 2x + 5) = x^4 + 2x^3 + 6x^2 + 2x + 5
        assert_root_set_approx(
            &complex_roots(solve_quartic(1f64, 2f64, 6f64, 2f64, 5f64)),
            &[
                Complex::new(0f64, 1f64),
                Complex::new(0f64, -1f64),
                Complex::new(-1f64, 2f64),
                Complex::new(-1f64, -2f64),
            ],
            1e-12,
        );
        // (x - 2)(x + 1)(x^2 + x + 1) = x^4 - 2x^2 - 3x - 2
        assert_root_set_approx(
            &complex_roots(solve_quartic(1f64, 0f64, -2f64, -3f64, -2f64)),
            &[
                Complex::new(2f64, 0f64),
                Complex::new(-1f64, 0f64),
                Complex::new(-0.5f64, 0.75f64.sqrt()),
                Complex::new(-0.5f64, -0.75f64.sqrt()),
            ],
            1e-12,
        );
    }

    #[test]
    fn test_solve_quartic_conjugate_pairs_adjacent() {
        let roots = solve_quartic(1f64, 2f64, 6f64, 2f64, 5f64);
        for pair in roots.chunks(2) {
            assert_eq!(pair[0].re(), pair[1].re());
            assert_eq!(pair[0].im(), -pair[1].im());
        }
    }

    #[test]
    fn test_solve_quartic_unit_circle_pairs_adjacent() {
        // x^4 + 1 has no cubic term, so the roots come straight from the biquadratic branch
        let roots = solve_quartic(1f64, 0f64, 0f64, 0f64, 1f64);
        for pair in roots.chunks(2) {
            assert!(pair[0].im() > 0f64, "{:?}", roots);
            assert_eq!(pair[0].to_complex().conj(), pair[1].to_complex());
        }
    }

    fn relative_residual(coefficients: &[f64], root: Root<f64>) -> f64 {
        let x = root.to_complex();
        let scale = coefficients
            .iter()
            .rev()
            .enumerate()
            .map(|(i, a)| a.abs() * x.norm().powi(i as i32))
            .sum::<f64>();
        if scale == 0f64 {
            return 0f64;
        }
        eval_polynomial(coefficients, x).norm() / scale
    }

    fn assert_small_relative_residuals(coefficients: [f64; 5]) {
        let [a4, a3, a2, a1, a0] = coefficients;
        let roots = solve_quartic(a4, a3, a2, a1, a0);
        for root in roots {
            let residual = relative_residual(&coefficients, root);
            assert!(residual < 1e-12, "Relative residual {} at {} for {:?}", residual, root, roots);
        }
    }

    #[test]
    fn test_solve_quartic_small_resolvent_root() {
        // x^4 + x^2 + q*x: the resolvent root is about q^2 and must not be lost to rounding
        for q in [1e-7f64, 1e-6, 1e-4] {
            assert_small_relative_residuals([1f64, 0f64, 1f64, q, 0f64]);
        }
        // t^4 + t^2 - 2 + q*t, resolvent pair complex
        assert_small_relative_residuals([1f64, 0f64, 1f64, 1e-9f64, -2f64]);
    }

    #[test]
    fn test_small_resolvent_root_keeps_ferrari() {
        let y = resolvent_root(1f64, 1e-7f64, 0f64, &Tolerances::default()).unwrap();
        assert!((y - 1e-14f64).abs() <= 1e-27, "{}", y);
    }

    #[test]
    fn test_solve_quartic_roots_far_apart() {
        // One root near -8.6e5, the rest near the roots of 267x^3 - 201x^2 + 267x - 4
        assert_small_relative_residuals([3.1e-4f64, 267f64, -201f64, 267f64, -4f64]);
        // (x - 1e6)(x - 1)(x - 2)(x - 3)
        let roots = solve_quartic(1f64, -1000006f64, 6000011f64, -11000006f64, 6000000f64);
        let x = sorted_real(roots);
        for (root, expected) in x.iter().zip([1f64, 2f64, 3f64, 1e6f64]) {
            assert!((root - expected).abs() <= 1e-12 * expected, "{:?}", x);
        }
    }

    #[test]
    fn test_solve_quartic_quadruple_root() {
        assert_eq!(solve_quartic(1f64, 0f64, 0f64, 0f64, 0f64), [Root::Real(0f64); 4]);
        // (x+1)^4
        assert_eq!(solve_quartic(1f64, 4f64, 6f64, 4f64, 1f64), [Root::Real(-1f64); 4]);
    }

    #[test]
    fn test_solve_quartic_double_root_pair() {
        // (x-1)^2 (x-3)^2 = x^4 - 8x^3 + 22x^2 - 24x + 9
        assert_float_array_eq!(
            1e-12,
            sorted_real(solve_quartic(1f64, -8f64, 22f64, -24f64, 9f64)),
            [1f64, 1f64, 3f64, 3f64]
        );
    }

    #[test]
    fn test_solve_quartic_zero_root() {
        // x^4 - 5x^3 + 6x^2 = x^2 (x-2)(x-3)
        let coefficients = [1f64, -5f64, 6f64, 0f64, 0f64];
        for root in solve_quartic(1f64, -5f64, 6f64, 0f64, 0f64) {
            let residual = eval_polynomial(&coefficients, root.to_complex());
            assert!(residual.norm() < 1e-10, "Residual too large: P({}) = {}", root, residual);
        }
    }

    #[test]
    fn test_solve_quartic_residual_tim_luecke() {
        // -(3.75x^2 + 0.5x - 4)^2: two double roots
        let coefficients = [-14.0625f64, -3.75, 29.75, 4.0, -16.0];
        for root in solve_quartic(-14.0625f64, -3.75, 29.75, 4.0, -16.0) {
            let residual = eval_polynomial(&coefficients, root.to_complex());
            assert!(residual.norm() < 1e-8, "Residual too large: P({}) = {}", root, residual);
        }
    }

    #[test]
    fn test_solve_quartic_residual_check() {
        let coefficients = [2f64, -3.0, -5.0, 7.0, -1.0];
        for root in solve_quartic(2f64, -3.0, -5.0, 7.0, -1.0) {
            let residual = eval_polynomial(&coefficients, root.to_complex());
            assert!(residual.norm() < 1e-12, "Residual too large: P({}) = {}", root, residual);
        }
    }

    #[test]
    fn test_solve_quartic_negative_leading() {
        assert_float_array_eq!(
            1e-15,
            sorted_real(solve_quartic(-1f64, 0f64, 5f64, 0f64, -4f64)),
            [-2f64, -1f64, 1f64, 2f64]
        );
    }

    #[test]
    fn test_solve_quartic_f32() {
        let roots = solve_quartic(3f32, 5f32, -5f32, -5f32, 2f32);
        let x = sorted_real(roots.map(|r| Root::from_complex(Complex::new(r.re() as f64, r.im() as f64))));
        assert_float_array_eq!(5e-6, x, [-2f64, -1f64, 1f64 / 3f64, 1f64]);
    }

    #[test]
    fn test_resolvent_root_vanishes_for_positive_biquadratic() {
        // x^4 + 5x^2 + 4: resolvent y(y+1)(y+9) has largest root 0
        assert_eq!(resolvent_root(5f64, 0f64, 4f64, &Tolerances::default()), None);
        // x^4 - 5x^2 + 4: resolvent y(y-1)(y-9) has largest root 9
        let y = resolvent_root(-5f64, 0f64, 4f64, &Tolerances::default()).unwrap();
        assert!((y - 9f64).abs() < 1e-13);
    }

    #[test]
    fn test_ferrari_factors_multiply_back() {
        let (p, q, r) = (-3f64, 2f64, 0.5f64);
        let y = resolvent_root(p, q, r, &Tolerances::default()).unwrap();
        let [(s1, alpha), (s2, beta)] = ferrari_factors(p, q, r, y);
        assert_eq!(s1, -s2);
        // (t^2 + s*t + alpha)(t^2 - s*t + beta)
        assert!((alpha + beta - s1 * s1 - p).abs() < 1e-13);
        assert!((s1 * (beta - alpha) - q).abs() < 1e-13);
        assert!((alpha * beta - r).abs() < 1e-13);
    }

    #[test]
    fn test_factor_order_does_not_change_root_set() {
        for (p, q, r) in [(-3f64, 2f64, 0.5f64), (1f64, -4f64, 2f64), (0f64, 1f64, 0f64)] {
            let y = resolvent_root(p, q, r, &Tolerances::default()).unwrap();
            let [first, second] = ferrari_factors(p, q, r, y);
            let forward: Vec<_> = [first, second]
                .iter()
                .flat_map(|&(b, c)| quadratic_monic(b, c))
                .collect();
            let backward: Vec<_> = [second, first]
                .iter()
                .flat_map(|&(b, c)| quadratic_monic(b, c))
                .collect();
            assert_root_set_approx(&forward, &backward, 0f64);
            assert_root_set_approx(&forward, &ferrari_roots(p, q, r, y), 0f64);
        }
    }
}
