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

//! Discriminant regimes that select the formula branch for each solve call

use super::config::Tolerances;
use super::FloatType;

/// Root structure of a depressed cubic `t^3 + p*t + q = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubicRegime {
    /// `p` and `q` both negligible: `t = 0` three times.
    TripleRoot,
    /// `p` exactly zero: `t^3 = -q`.
    PureCube,
    /// One simple and one double real root.
    RepeatedReal,
    /// Three distinct real roots, solved trigonometrically.
    ThreeReal,
    /// One real root and a complex-conjugate pair, solved with Cardano's formula.
    OneReal,
}

/// Formula branch for a depressed quartic `t^4 + p*t^2 + q*t + r = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuarticRegime {
    /// `q` negligible: a quadratic in `t^2`.
    Biquadratic,
    /// Ferrari factorization through the resolvent cubic.
    Ferrari,
}

/// Monic cubic `x^3 + b*x^2 + c*x + d` shifted by `x = t - shift`.
///
/// Holds `third_p = p/3` and `half_q = q/2` rather than `p` and `q`, so that
/// `discriminant = half_q^2 + third_p^3` is negative exactly when there are
/// three distinct real roots.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DepressedCubic<F> {
    pub shift: F,
    pub third_p: F,
    pub half_q: F,
    pub discriminant: F,
    pub regime: CubicRegime,
}

impl<F: FloatType> DepressedCubic<F> {
    pub fn from_monic(b: F, c: F, d: F, tolerances: &Tolerances<F>) -> Self {
        let _2 = F::from(2i16);
        let _3 = F::from(3i16);
        let _6 = F::from(6i16);
        let _9 = F::from(9i16);
        let _27 = F::from(27i16);

        let b2 = b * b;
        let b3 = b2 * b;
        let bc = b * c;

        let third_p = c / _3 - b2 / _9;
        let half_q = b3 / _27 - bc / _6 + d / _2;
        let discriminant = half_q * half_q + third_p * third_p * third_p;

        // Magnitudes of the terms each quantity is assembled from; their rounding
        // errors bound how close to zero a computed value can be trusted.
        let p_scale = c.abs() / _3 + b2 / _9;
        let q_scale = b3.abs() / _27 + bc.abs() / _6 + d.abs() / _2;
        let discriminant_scale = half_q.abs() * q_scale + third_p * third_p * p_scale;

        let regime = if Tolerances::negligible(tolerances.cubic_depressed, third_p, p_scale)
            && Tolerances::negligible(tolerances.cubic_depressed, half_q, q_scale)
        {
            CubicRegime::TripleRoot
        } else if third_p == F::zero() {
            CubicRegime::PureCube
        } else if Tolerances::negligible(tolerances.cubic_discriminant, discriminant, discriminant_scale) {
            CubicRegime::RepeatedReal
        } else if discriminant < F::zero() {
            CubicRegime::ThreeReal
        } else {
            CubicRegime::OneReal
        };

        Self {
            shift: b / _3,
            third_p,
            half_q,
            discriminant,
            regime,
        }
    }
}

/// Monic quartic `x^4 + b*x^3 + c*x^2 + d*x + e` shifted by `x = t - shift`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DepressedQuartic<F> {
    pub shift: F,
    pub p: F,
    pub q: F,
    pub r: F,
    pub regime: QuarticRegime,
}

impl<F: FloatType> DepressedQuartic<F> {
    pub fn from_monic(b: F, c: F, d: F, e: F, tolerances: &Tolerances<F>) -> Self {
        let _2 = F::from(2i16);
        let _3 = F::from(3i16);
        let _4 = F::from(4i16);
        let _6 = F::from(6i16);
        let _8 = F::from(8i16);

        let shift = b / _4;
        let shift2 = shift * shift;
        let shift3 = shift2 * shift;

        let p = c - _6 * shift2;
        let q = d - _2 * c * shift + _8 * shift3;
        let r = e - d * shift + c * shift2 - _3 * shift2 * shift2;

        let q_scale = d.abs() + (_2 * c * shift).abs() + (_8 * shift3).abs();
        let regime = if Tolerances::negligible(tolerances.quartic_depressed, q, q_scale) {
            QuarticRegime::Biquadratic
        } else {
            QuarticRegime::Ferrari
        };

        Self { shift, p, q, r, regime }
    }
}

/// Classifies the cubic `a3*x^3 + a2*x^2 + a1*x + a0` by the roots `solve_cubic` returns.
///
/// A negligible discriminant only says the roots are close relative to the
/// shift `a2/(3*a3)`. Roots that turn out distinct once the dominant root is
/// divided out are reported as [`CubicRegime::ThreeReal`] or
/// [`CubicRegime::OneReal`]. `a3` must not be zero.
pub fn classify_cubic<F: FloatType>(tolerances: &Tolerances<F>, a3: F, a2: F, a1: F, a0: F) -> CubicRegime {
    super::analytical::cubic::solve_cubic_monic(a2 / a3, a1 / a3, a0 / a3, tolerances).1
}

/// Classifies the quartic `a4*x^4 + a3*x^3 + a2*x^2 + a1*x + a0` without solving it.
///
/// Includes the fallback taken when the resolvent root vanishes, so the result
/// is the branch `solve_quartic` actually uses. `a4` must not be zero.
pub fn classify_quartic<F: FloatType>(tolerances: &Tolerances<F>, a4: F, a3: F, a2: F, a1: F, a0: F) -> QuarticRegime {
    let depressed = DepressedQuartic::from_monic(a3 / a4, a2 / a4, a1 / a4, a0 / a4, tolerances);
    match depressed.regime {
        QuarticRegime::Biquadratic => QuarticRegime::Biquadratic,
        QuarticRegime::Ferrari => {
            match super::analytical::quartic::resolvent_root(depressed.p, depressed.q, depressed.r, tolerances) {
                Some(_) => QuarticRegime::Ferrari,
                None => QuarticRegime::Biquadratic,
            }
        }
    }
}
