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
use super::super::FloatType;

/// Principal square root of a complex number.
///
/// Avoids the polar round-trip, so purely real arguments give exactly real or
/// exactly imaginary results.
pub(crate) fn csqrt<F: FloatType>(z: Complex<F>) -> Complex<F> {
    let zero = F::zero();
    let _2 = F::from(2i16);

    if z.re == zero && z.im == zero {
        return Complex::new(zero, z.im);
    }
    let t = ((z.re.abs() + z.re.hypot(z.im)) / _2).sqrt();
    if z.re >= zero {
        Complex::new(t, z.im / (_2 * t))
    } else {
        Complex::new(z.im.abs() / (_2 * t), t.copysign(z.im))
    }
}

/// Square root of a real number, imaginary when the argument is negative.
pub(crate) fn sqrt_real<F: FloatType>(x: F) -> Complex<F> {
    if x < F::zero() {
        Complex::new(F::zero(), (-x).sqrt())
    } else {
        Complex::new(x.sqrt(), F::zero())
    }
}

/// Roots of the monic quadratic t^2 + b*t + c with real coefficients.
///
/// Real roots come from the citardauq pairing `w`, `c / w`; a complex pair is
/// returned with the positive imaginary part first.
pub(crate) fn quadratic_monic<F: FloatType>(b: F, c: F) -> [Complex<F>; 2] {
    let zero = F::zero();
    let _2 = F::from(2i16);
    let _4 = F::from(4i16);

    let discriminant = b * b - _4 * c;
    if discriminant < zero {
        let re = -b / _2;
        let im = (-discriminant).sqrt() / _2;
        return [Complex::new(re, im), Complex::new(re, -im)];
    }

    let w = -(b + discriminant.sqrt().copysign(b)) / _2;
    if w == zero {
        // b == 0 and c == 0
        return [Complex::new(zero, zero); 2];
    }
    [Complex::new(w, zero), Complex::new(c / w, zero)]
}

/// Roots of t^2 - sum*t + product, the factor left after dividing out known roots.
///
/// A discriminant negligible next to `sum^2 + 4|product|` is taken as an exact
/// double real root.
pub(crate) fn deflated_pair<F: FloatType>(sum: F, product: F, tolerance: F) -> [Complex<F>; 2] {
    let _2 = F::from(2i16);
    let _4 = F::from(4i16);

    let discriminant = sum * sum - _4 * product;
    if Tolerances::negligible(tolerance, discriminant, sum * sum + (_4 * product).abs()) {
        return [Complex::new(sum / _2, F::zero()); 2];
    }
    quadratic_monic(-sum, product)
}

/// Cardano terms `u`, `v` of a depressed cubic with one real root.
///
/// `r` is minus half the constant term, `third_p` a third of the linear term and
/// `discriminant = r^2 + third_p^3 > 0`. The cube root takes the sign of `r`,
/// which maximizes `|u|`; `v` then follows from `u*v = -third_p` without
/// subtracting nearly equal values.
pub(crate) fn cardano_terms<F: FloatType>(r: F, third_p: F, discriminant: F) -> (F, F) {
    let magnitude = (r.abs() + discriminant.sqrt()).cbrt();
    let u = if r >= F::zero() { magnitude } else { -magnitude };
    (u, -third_p / u)
}

/// Evaluates a polynomial given highest degree first, using Horner's scheme.
pub fn eval_polynomial<F: FloatType>(coefficients: &[F], x: Complex<F>) -> Complex<F> {
    coefficients
        .iter()
        .fold(Complex::new(F::zero(), F::zero()), |acc, &c| acc * x + c)
}
