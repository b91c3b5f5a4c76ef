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
use super::numeric::{csqrt, quadratic_monic};

/// Roots of t^4 + p*t^2 + r = 0 as `+-sqrt(z)` for both roots `z` of z^2 + p*z + r.
///
/// Conjugate roots are kept adjacent, positive imaginary part first.
pub(crate) fn biquadratic_depressed<F: FloatType>(p: F, r: F) -> [Complex<F>; 4] {
    let [z1, z2] = quadratic_monic(p, r);
    let t1 = csqrt(z1);
    let t2 = csqrt(z2);
    if z1.im != F::zero() {
        // z2 is the conjugate of z1, so t2 is the conjugate of t1
        return [t1, t2, -t2, -t1];
    }
    [t1, -t1, t2, -t2]
}

/// Solves a biquadratic equation a4*x^4 + a2*x^2 + a0 = 0.
///
/// `a4` must not be zero. Real and purely imaginary roots come in pairs `x, -x`;
/// other complex roots come in conjugate pairs.
///
/// # Examples
///
/// ```
/// use quartic_roots::{solve_biquadratic, Root};
///
/// let roots = solve_biquadratic(1f64, -5f64, 4f64);
/// // Returns [Real(2), Real(-2), Real(1), Real(-1)] as 'x^4 - 5x^2 + 4 = 0' has roots -2, -1, 1 and 2
/// assert_eq!(roots, [Root::Real(2f64), Root::Real(-2f64), Root::Real(1f64), Root::Real(-1f64)]);
/// ```
pub fn solve_biquadratic<F: FloatType>(a4: F, a2: F, a0: F) -> RootSet<F, 4> {
    biquadratic_depressed(a2 / a4, a0 / a4).map(Root::from_complex)
}
