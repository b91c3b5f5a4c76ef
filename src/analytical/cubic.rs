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

use super::super::config::Tolerances;
use super::super::regime::{CubicRegime, DepressedCubic};
use super::super::{FloatType, Root, RootSet};
use super::numeric::{cardano_terms, deflated_pair};

// Real root and the upper member of the conjugate pair `-t0/2 +- i*spread`.
fn with_pair<F: FloatType>(t0: F, spread: F) -> (F, Complex<F>) {
    let _2 = F::from(2i16);
    (t0, Complex::new(-t0 / _2, spread.abs()))
}

fn half_sqrt_3<F: FloatType>() -> F {
    F::from(3i16).sqrt() / F::from(2i16)
}

// t^3 = -q
fn pure_cube_roots<F: FloatType>(half_q: F) -> (F, Complex<F>) {
    let t0 = (-F::from(2i16) * half_q).cbrt();
    with_pair(t0, half_sqrt_3::<F>() * t0)
}

// Simple root first, then the double root.
fn repeated_roots<F: FloatType>(half_q: F) -> [F; 3] {
    let u = (-half_q).cbrt();
    [F::from(2i16) * u, -u, -u]
}

// Viete's trigonometric form; third_p < 0 whenever the discriminant is negative.
fn trigonometric_roots<F: FloatType>(third_p: F, half_q: F) -> [F; 3] {
    let _2 = F::from(2i16);
    let _3 = F::from(3i16);

    let sqrt_minus_p = (-third_p).sqrt();
    let cos_3theta = (-half_q / (-third_p * sqrt_minus_p)).max(-F::one()).min(F::one());
    let phi = cos_3theta.acos() / _3;
    let m = _2 * sqrt_minus_p;
    let two_thirds_pi = _2 * F::PI() / _3;
    [m * phi.cos(), m * (phi - two_thirds_pi).cos(), m * (phi + two_thirds_pi).cos()]
}

fn cardano_roots<F: FloatType>(third_p: F, half_q: F, discriminant: F) -> (F, Complex<F>) {
    let (u, v) = cardano_terms(-half_q, third_p, discriminant);
    with_pair(u + v, half_sqrt_3::<F>() * (u - v))
}

fn sort_descending<F: FloatType>(mut x: [F; 3]) -> [F; 3] {
    for (i, j) in [(0, 1), (1, 2), (0, 1)] {
        if x[i] < x[j] {
            x.swap(i, j);
        }
    }
    x
}

/// Divides a real root `anchor` out of x^3 + b*x^2 + c*x + d and solves what is left.
///
/// The remaining pair follows from Vieta without touching `b`:
/// `x2*x3 = -d/anchor` and `x2 + x3 = (c - x2*x3)/anchor`. Accurate as long
/// as `anchor` is, which holds when no other root is much larger.
fn deflate<F: FloatType>(anchor: F, c: F, d: F, tolerance: F) -> RootSet<F, 3> {
    let product = -d / anchor;
    let sum = (c - product) / anchor;
    let [z1, z2] = deflated_pair(sum, product, tolerance);
    if z1.im != F::zero() {
        return [Root::Real(anchor), Root::Complex(z1), Root::Complex(z2)];
    }
    sort_descending([anchor, z1.re, z2.re]).map(Root::Real)
}

/// Solves the monic cubic x^3 + b*x^2 + c*x + d and reports the regime of the result.
///
/// The depressed-form formulas fix the root of largest magnitude, which they
/// deliver to full relative precision. Smaller roots lose digits to the shift
/// `b/3`, so they are recovered from it by deflation.
pub(crate) fn solve_cubic_monic<F: FloatType>(
    b: F,
    c: F,
    d: F,
    tolerances: &Tolerances<F>,
) -> (RootSet<F, 3>, CubicRegime) {
    let zero = F::zero();
    let _2 = F::from(2i16);
    let cubic = DepressedCubic::from_monic(b, c, d, tolerances);
    let shift = cubic.shift;
    let tolerance = tolerances.cubic_discriminant;

    let roots = match cubic.regime {
        CubicRegime::TripleRoot => return ([Root::Real(-shift); 3], CubicRegime::TripleRoot),
        CubicRegime::PureCube | CubicRegime::OneReal => {
            let (t0, z) = if cubic.regime == CubicRegime::PureCube {
                pure_cube_roots(cubic.half_q)
            } else {
                cardano_roots(cubic.third_p, cubic.half_q, cubic.discriminant)
            };
            let x0 = t0 - shift;
            let z = z - shift;
            if z.norm_sqr() > _2 * _2 * x0 * x0 {
                // The pair dominates; the real root follows from x0 * |z|^2 = -d.
                [Root::Real(-d / z.norm_sqr()), Root::Complex(z), Root::Complex(z.conj())]
            } else if x0 == zero {
                [Root::Real(zero); 3]
            } else {
                deflate(x0, c, d, tolerance)
            }
        }
        CubicRegime::RepeatedReal => {
            let [simple, double, _] = repeated_roots(cubic.half_q).map(|t| t - shift);
            if _2 * simple.abs() >= double.abs() {
                deflate(simple, c, d, tolerance)
            } else {
                // The dominant root is double; the simple root follows from double^2 * simple = -d.
                sort_descending([double, double, -d / (double * double)]).map(Root::Real)
            }
        }
        CubicRegime::ThreeReal => {
            let x = trigonometric_roots(cubic.third_p, cubic.half_q).map(|t| t - shift);
            let anchor = x.iter().fold(zero, |best, &xi| if xi.abs() > best.abs() { xi } else { best });
            if anchor == zero {
                [Root::Real(zero); 3]
            } else {
                deflate(anchor, c, d, tolerance)
            }
        }
    };

    let regime = match roots {
        _ if cubic.regime == CubicRegime::PureCube => CubicRegime::PureCube,
        [_, Root::Complex(_), _] | [Root::Complex(_), ..] => CubicRegime::OneReal,
        [x1, x2, x3] if x1 == x2 || x2 == x3 => CubicRegime::RepeatedReal,
        _ => CubicRegime::ThreeReal,
    };
    (roots, regime)
}

pub(crate) fn solve_cubic_with<F: FloatType>(tolerances: &Tolerances<F>, a3: F, a2: F, a1: F, a0: F) -> RootSet<F, 3> {
    solve_cubic_monic(a2 / a3, a1 / a3, a0 / a3, tolerances).0
}

pub(crate) fn find_one_real_root_cubic_with<F: FloatType>(tolerances: &Tolerances<F>, a2: F, a1: F, a0: F) -> F {
    // Either the only real root or the largest of three.
    solve_cubic_monic(a2, a1, a0, tolerances).0[0].re()
}

/// Solves a cubic equation a3*x^3 + a2*x^2 + a1*x + a0 = 0 in closed form.
///
/// Always returns three roots. `a3` must not be zero; use
/// [`find_roots_cubic`](crate::find_roots_cubic) when it may vanish.
///
/// The real root comes first; three real roots are listed in descending
/// order. A complex-conjugate pair is listed with the positive imaginary part
/// first. Repeated roots are listed repeatedly.
///
/// # Examples
///
/// ```
/// use quartic_roots::{solve_cubic, Root};
///
/// let roots = solve_cubic(1f64, -6f64, 11f64, -6f64);
/// // Returns [Real(3), Real(2), Real(1)] (up to rounding) as 'x^3 - 6x^2 + 11x - 6 = 0' has roots 1, 2 and 3
/// assert!(roots.iter().all(Root::is_real));
///
/// let roots = solve_cubic(1f64, 0f64, 0f64, -8f64);
/// // Returns [Real(2), Complex(-1+1.732i), Complex(-1-1.732i)]
/// assert_eq!(roots[0], Root::Real(2f64));
/// ```
pub fn solve_cubic<F: FloatType>(a3: F, a2: F, a1: F, a0: F) -> RootSet<F, 3> {
    solve_cubic_with(&Tolerances::default(), a3, a2, a1, a0)
}

/// Finds the largest real root of the monic cubic x^3 + a2*x^2 + a1*x + a0 = 0.
///
/// A cubic with real coefficients always has at least one real root, so this
/// never fails.
///
/// # Examples
///
/// ```
/// use quartic_roots::find_one_real_root_cubic;
///
/// let x = find_one_real_root_cubic(-6f64, 11f64, -6f64);
/// // Returns 3 as 'x^3 - 6x^2 + 11x - 6 = 0' has roots 1, 2 and 3
/// assert!((x - 3f64).abs() < 1e-14);
/// ```
pub fn find_one_real_root_cubic<F: FloatType>(a2: F, a1: F, a0: F) -> F {
    find_one_real_root_cubic_with(&Tolerances::default(), a2, a1, a0)
}
