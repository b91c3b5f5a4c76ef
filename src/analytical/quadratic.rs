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

use super::super::{FloatType, Root, RootSet};
use super::numeric::sqrt_real;

// Helper: Integer power for generic FloatType. Used for scaling thresholds.
fn pow_n<F: FloatType>(base: F, mut exp: u32) -> F {
    let mut res = F::one();
    let mut b = base;
    while exp > 0 {
        if exp % 2 == 1 {
            res = res * b;
        }
        b = b * b;
        exp /= 2;
    }
    res
}

// Helper: Veltkamp splitting
fn veltkamp_split<F: FloatType>(x: F) -> (F, F) {
    let gamma = F::veltkamp_factor() * x;
    let delta = x - gamma;
    let x_hi = gamma + delta;
    let x_lo = x - x_hi;
    (x_hi, x_lo)
}

// Helper: Exact multiplication (Dekker's Product), returns the rounding error of `product`
fn exact_mult<F: FloatType>(x: F, y: F, product: F) -> F {
    let (x_hi, x_lo) = veltkamp_split(x);
    let (y_hi, y_lo) = veltkamp_split(y);
    let t1 = -product + x_hi * y_hi;
    let t2 = t1 + x_hi * y_lo;
    let t3 = t2 + x_lo * y_hi;
    t3 + x_lo * y_lo
}

// Helper: Kahan discriminant b^2 - 4ac, recomputed with exact products when it cancels
fn kahan_discriminant_exact<F: FloatType>(a: F, b: F, c: F) -> F {
    let _3 = F::from(3i16);
    let _4 = F::from(4i16);

    let prod_bb = b * b;
    let prod_4ac = _4 * a * c;

    let discriminant = prod_bb - prod_4ac;

    let sum_magnitudes = prod_bb.abs() + prod_4ac.abs();

    if _3 * discriminant.abs() >= sum_magnitudes {
        discriminant
    } else {
        let err_bb = exact_mult(b, b, prod_bb);
        let err_4ac = exact_mult(_4 * a, c, prod_4ac);
        (prod_bb - prod_4ac) + (err_bb - err_4ac)
    }
}

// Rescales the coefficients by a power of two when b^2 or 4ac would leave the exponent range.
fn rescale<F: FloatType>(a2: F, a1: F, a0: F) -> (F, F, F) {
    let zero = F::zero();
    let one = F::one();
    let two = F::from(2i16);
    let _4 = F::from(4i16);

    let max_abs = a2.abs().max(a1.abs()).max(a0.abs());

    let is_f32 = std::mem::size_of::<F>() == 4;
    // Thresholds (Powers of 2)
    let (low_threshold, high_threshold, scale_up) = if is_f32 {
        (one / pow_n(two, 60), pow_n(two, 60), pow_n(two, 64))
    } else {
        // Construct 2^600 safely
        let p200 = pow_n(two, 200);
        let p600 = p200 * p200 * p200;
        (one / pow_n(two, 500), pow_n(two, 500), p600)
    };

    if max_abs < low_threshold && max_abs > zero {
        (a2 * scale_up, a1 * scale_up, a0 * scale_up)
    } else if max_abs > high_threshold {
        let prod_bb = a1 * a1;
        let prod_ac = _4 * a2 * a0;

        if prod_bb.is_infinite() || prod_ac.is_infinite() {
            let scale_down = one / max_abs;
            (a2 * scale_down, a1 * scale_down, a0 * scale_down)
        } else {
            (a2, a1, a0)
        }
    } else {
        (a2, a1, a0)
    }
}

/// Solves a quadratic equation a2*x^2 + a1*x + a0 = 0.
///
/// Always returns two roots. `a2` must not be zero; use
/// [`find_roots_quadratic`](crate::find_roots_quadratic) when it may vanish.
/// Real roots are ordered ascending, a double root is listed twice and a
/// complex-conjugate pair has the positive imaginary part first.
///
/// # Examples
///
/// ```
/// use quartic_roots::{solve_quadratic, Root};
///
/// let two_roots = solve_quadratic(1f32, 0f32, -1f32);
/// // Returns [Real(-1), Real(1)] as 'x^2 - 1 = 0' has roots -1 and 1
/// assert_eq!(two_roots, [Root::Real(-1f32), Root::Real(1f32)]);
///
/// let double_root = solve_quadratic(1f64, 0f64, 0f64);
/// // Returns [Real(0), Real(0)] as 'x^2 = 0' has the double root 0
///
/// let complex_roots = solve_quadratic(1f64, 0f64, 1f64);
/// // Returns [Complex(i), Complex(-i)] as 'x^2 + 1 = 0' has roots i and -i
/// assert_eq!(complex_roots[0].im(), 1f64);
/// ```
pub fn solve_quadratic<F: FloatType>(a2: F, a1: F, a0: F) -> RootSet<F, 2> {
    let zero = F::zero();
    let _2 = F::from(2i16);

    if a0 == zero {
        let root2 = -a1 / a2;
        return if root2 < zero {
            [Root::Real(root2), Root::Real(zero)]
        } else {
            [Root::Real(zero), Root::Real(root2)]
        };
    }
    if a1 == zero {
        // Compute sqrt(|a0|)/sqrt(|a2|) to avoid overflow
        let r = a0.abs().sqrt() / a2.abs().sqrt();
        if (a0 > zero) == (a2 > zero) {
            return [Root::Complex(Complex::new(zero, r)), Root::Complex(Complex::new(zero, -r))];
        }
        return [Root::Real(-r), Root::Real(r)];
    }

    let (sc_a2, sc_a1, sc_a0) = rescale(a2, a1, a0);

    let discriminant = kahan_discriminant_exact(sc_a2, sc_a1, sc_a0);

    // Tolerance Check
    let tolerance = F::epsilon() * sc_a1 * sc_a1;

    if discriminant < -tolerance {
        let re = -sc_a1 / (_2 * sc_a2);
        let im = (sqrt_real(discriminant).im / (_2 * sc_a2)).abs();
        return [Root::Complex(Complex::new(re, im)), Root::Complex(Complex::new(re, -im))];
    }

    let safe_d = discriminant.max(zero);
    if safe_d == zero {
        let x = -sc_a1 / (_2 * sc_a2);
        return [Root::Real(x); 2];
    }

    let sq = safe_d.sqrt();
    let q = if sc_a1 >= zero {
        -(sc_a1 + sq) / _2
    } else {
        -(sc_a1 - sq) / _2
    };

    let x1 = q / sc_a2;
    let x2 = sc_a0 / q;

    if x1 < x2 {
        [Root::Real(x1), Root::Real(x2)]
    } else {
        [Root::Real(x2), Root::Real(x1)]
    }
}
