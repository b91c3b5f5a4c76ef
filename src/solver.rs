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

//! Degree dispatcher
//!
//! Drops vanishing leading coefficients before handing a polynomial to the
//! closed-form solver of its effective degree.

use tracing::trace;

use super::analytical::cubic::{find_one_real_root_cubic_with, solve_cubic_with};
use super::analytical::linear::solve_linear;
use super::analytical::quadratic::solve_quadratic;
use super::analytical::quartic::solve_quartic_with;
use super::config::Tolerances;
use super::error::{Error, Result};
use super::{FloatType, Root, RootSet, Roots};

/// Closed-form solver configured with a set of [`Tolerances`].
///
/// Holds no state besides the tolerances, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solver<F> {
    tolerances: Tolerances<F>,
}

impl<F: FloatType> Default for Solver<F> {
    fn default() -> Self {
        Self {
            tolerances: Tolerances::default(),
        }
    }
}

impl<F: FloatType> Solver<F> {
    pub fn new(tolerances: Tolerances<F>) -> Result<Self> {
        tolerances.validate()?;
        Ok(Self { tolerances })
    }

    pub fn tolerances(&self) -> &Tolerances<F> {
        &self.tolerances
    }

    /// See [`solve_cubic`](crate::solve_cubic).
    pub fn solve_cubic(&self, a3: F, a2: F, a1: F, a0: F) -> RootSet<F, 3> {
        solve_cubic_with(&self.tolerances, a3, a2, a1, a0)
    }

    /// See [`find_one_real_root_cubic`](crate::find_one_real_root_cubic).
    pub fn find_one_real_root_cubic(&self, a2: F, a1: F, a0: F) -> F {
        find_one_real_root_cubic_with(&self.tolerances, a2, a1, a0)
    }

    /// See [`solve_quartic`](crate::solve_quartic).
    pub fn solve_quartic(&self, a4: F, a3: F, a2: F, a1: F, a0: F) -> RootSet<F, 4> {
        solve_quartic_with(&self.tolerances, a4, a3, a2, a1, a0)
    }

    fn leading_negligible(&self, leading: F, rest: &[F]) -> bool {
        let scale = rest.iter().fold(F::zero(), |acc, c| acc.max(c.abs()));
        Tolerances::negligible(self.tolerances.leading_coefficient, leading, scale)
    }

    /// Roots of a1*x + a0 = 0.
    ///
    /// `0 = 0` is satisfied by any x and reports the single root 0.
    pub fn find_roots_linear(&self, a1: F, a0: F) -> Roots<F> {
        if !(a1.is_finite() && a0.is_finite()) {
            return Roots::No([]);
        }
        if a1 == F::zero() {
            if a0 == F::zero() {
                Roots::One([Root::Real(F::zero())])
            } else {
                Roots::No([])
            }
        } else {
            Roots::One(solve_linear(a1, a0))
        }
    }

    /// Roots of a2*x^2 + a1*x + a0 = 0, falling back to the linear case when `a2` vanishes.
    pub fn find_roots_quadratic(&self, a2: F, a1: F, a0: F) -> Roots<F> {
        if !(a2.is_finite() && a1.is_finite() && a0.is_finite()) {
            return Roots::No([]);
        }
        if self.leading_negligible(a2, &[a1, a0]) {
            trace!(?a2, "leading coefficient negligible, solving as linear");
            return self.find_roots_linear(a1, a0);
        }
        Roots::Two(solve_quadratic(a2, a1, a0))
    }

    /// Roots of a3*x^3 + a2*x^2 + a1*x + a0 = 0, falling back to lower degrees when `a3` vanishes.
    pub fn find_roots_cubic(&self, a3: F, a2: F, a1: F, a0: F) -> Roots<F> {
        if !(a3.is_finite() && a2.is_finite() && a1.is_finite() && a0.is_finite()) {
            return Roots::No([]);
        }
        if self.leading_negligible(a3, &[a2, a1, a0]) {
            trace!(?a3, "leading coefficient negligible, solving as quadratic");
            return self.find_roots_quadratic(a2, a1, a0);
        }
        Roots::Three(self.solve_cubic(a3, a2, a1, a0))
    }

    /// Roots of a4*x^4 + a3*x^3 + a2*x^2 + a1*x + a0 = 0, falling back to lower degrees when `a4` vanishes.
    pub fn find_roots_quartic(&self, a4: F, a3: F, a2: F, a1: F, a0: F) -> Roots<F> {
        if !(a4.is_finite() && a3.is_finite() && a2.is_finite() && a1.is_finite() && a0.is_finite()) {
            return Roots::No([]);
        }
        if self.leading_negligible(a4, &[a3, a2, a1, a0]) {
            trace!(?a4, "leading coefficient negligible, solving as cubic");
            return self.find_roots_cubic(a3, a2, a1, a0);
        }
        Roots::Four(self.solve_quartic(a4, a3, a2, a1, a0))
    }

    /// Roots of the polynomial with the given coefficients, highest degree first.
    ///
    /// Accepts one to five coefficients. Unlike the fixed-degree functions,
    /// non-finite coefficients are reported as an error instead of yielding no roots.
    pub fn find_roots(&self, coefficients: &[F]) -> Result<Roots<F>> {
        if let Some(index) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(Error::NonFiniteCoefficient { index });
        }
        match *coefficients {
            [] => Err(Error::EmptyCoefficients),
            [a0] => Ok(self.find_roots_linear(F::zero(), a0)),
            [a1, a0] => Ok(self.find_roots_linear(a1, a0)),
            [a2, a1, a0] => Ok(self.find_roots_quadratic(a2, a1, a0)),
            [a3, a2, a1, a0] => Ok(self.find_roots_cubic(a3, a2, a1, a0)),
            [a4, a3, a2, a1, a0] => Ok(self.find_roots_quartic(a4, a3, a2, a1, a0)),
            _ => Err(Error::DegreeTooHigh {
                degree: coefficients.len() - 1,
            }),
        }
    }
}

/// Solves a linear equation a1*x + a0 = 0.
///
/// # Examples
///
/// ```
/// use quartic_roots::{find_roots_linear, Root, Roots};
///
/// assert_eq!(find_roots_linear(2f64, -1f64), Roots::One([Root::Real(0.5f64)]));
/// // 'x * 0 + 1 = 0' has no roots
/// assert_eq!(find_roots_linear(0f64, 1f64), Roots::No([]));
/// ```
pub fn find_roots_linear<F: FloatType>(a1: F, a0: F) -> Roots<F> {
    Solver::default().find_roots_linear(a1, a0)
}

/// Solves a quadratic equation a2*x^2 + a1*x + a0 = 0.
///
/// # Examples
///
/// ```
/// use quartic_roots::{find_roots_quadratic, Root, Roots};
///
/// // 'x^2 - 1 = 0' has roots -1 and 1
/// assert_eq!(find_roots_quadratic(1f32, 0f32, -1f32), Roots::Two([Root::Real(-1f32), Root::Real(1f32)]));
/// // '0x^2 + 2x - 4 = 0' is linear
/// assert_eq!(find_roots_quadratic(0f64, 2f64, -4f64), Roots::One([Root::Real(2f64)]));
/// ```
pub fn find_roots_quadratic<F: FloatType>(a2: F, a1: F, a0: F) -> Roots<F> {
    Solver::default().find_roots_quadratic(a2, a1, a0)
}

/// Solves a cubic equation a3*x^3 + a2*x^2 + a1*x + a0 = 0.
///
/// # Examples
///
/// ```
/// use quartic_roots::find_roots_cubic;
///
/// // 'x^3 - 8 = 0' has one real root and a complex pair
/// let roots = find_roots_cubic(1f64, 0f64, 0f64, -8f64);
/// assert_eq!(roots.real().collect::<Vec<_>>(), vec![2f64]);
/// ```
pub fn find_roots_cubic<F: FloatType>(a3: F, a2: F, a1: F, a0: F) -> Roots<F> {
    Solver::default().find_roots_cubic(a3, a2, a1, a0)
}

/// Solves a quartic equation a4*x^4 + a3*x^3 + a2*x^2 + a1*x + a0 = 0.
///
/// # Examples
///
/// ```
/// use quartic_roots::find_roots_quartic;
///
/// // 'x^4 - 1 = 0' has roots -1, 1, -i and i
/// let roots = find_roots_quartic(1f64, 0f64, 0f64, 0f64, -1f64);
/// assert_eq!(roots.len(), 4);
/// assert_eq!(roots.real().count(), 2);
///
/// // A vanishing leading coefficient leaves a cubic
/// let roots = find_roots_quartic(0f64, 1f64, -6f64, 11f64, -6f64);
/// assert_eq!(roots.len(), 3);
/// ```
pub fn find_roots_quartic<F: FloatType>(a4: F, a3: F, a2: F, a1: F, a0: F) -> Roots<F> {
    Solver::default().find_roots_quartic(a4, a3, a2, a1, a0)
}

/// Solves the polynomial given by up to five coefficients, highest degree first.
///
/// # Examples
///
/// ```
/// use quartic_roots::{find_roots, Error};
///
/// let roots = find_roots(&[1f64, -6f64, 11f64, -6f64]).unwrap();
/// assert_eq!(roots.len(), 3);
///
/// assert_eq!(find_roots::<f64>(&[]), Err(Error::EmptyCoefficients));
/// ```
pub fn find_roots<F: FloatType>(coefficients: &[F]) -> Result<Roots<F>> {
    Solver::default().find_roots(coefficients)
}

#[cfg(test)]
mod test {
    use super::super::*;

    #[test]
    fn test_find_roots_linear() {
        assert_eq!(find_roots_linear(0f32, 0f32), Roots::One([Root::Real(0f32)]));
        assert_eq!(find_roots_linear(2f32, 1f32), Roots::One([Root::Real(-0.5f32)]));
        assert_eq!(find_roots_linear(0f32, 1f32), Roots::No([]));
    }

    #[test]
    fn test_no_solution_nan_inf() {
        let nan = f64::NAN;
        let inf = f64::INFINITY;
        let cases = [
            (1.0, 2.0, nan),
            (1.0, nan, 3.0),
            (nan, 2.0, 3.0),
            (nan, nan, nan),
            (1.0, 2.0, inf),
            (1.0, inf, 3.0),
            (inf, 2.0, 3.0),
            (-inf, inf, inf),
        ];
        for (a, b, c) in cases {
            assert_eq!(
                find_roots_quadratic(a, b, c),
                Roots::No([]),
                "Failed on NaN/Inf case: ({},{},{})",
                a,
                b,
                c
            );
            assert_eq!(find_roots_quartic(a, b, c, 1.0, 1.0), Roots::No([]));
            assert_eq!(find_roots_cubic(1.0, a, b, c), Roots::No([]));
        }
    }

    #[test]
    fn test_find_roots_quadratic_degenerate() {
        assert_eq!(find_roots_quadratic(0f64, 1f64, 0f64), Roots::One([Root::Real(-0f64)]));
        assert_eq!(find_roots_quadratic(0f64, 1f64, 2f64), Roots::One([Root::Real(-2f64)]));
        let pow2_600 = 2.0f64.powi(600);
        assert_eq!(find_roots_quadratic(0f64, pow2_600, -pow2_600), Roots::One([Root::Real(1f64)]));
        assert_eq!(
            find_roots_quadratic(0.0, 2.0f64.powi(-600), pow2_600),
            Roots::One([Root::Real(f64::NEG_INFINITY)])
        );
        assert_eq!(find_roots_quadratic(0f32, 0f32, 0f32), Roots::One([Root::Real(0f32)]));
        assert_eq!(find_roots_quadratic(0f64, 0f64, 1f64), Roots::No([]));
    }

    #[test]
    fn test_find_roots_cubic_degenerate() {
        // 0x^3 + x^2 - 3x + 2 = (x-1)(x-2)
        assert_eq!(
            find_roots_cubic(0f64, 1f64, -3f64, 2f64),
            Roots::Two([Root::Real(1f64), Root::Real(2f64)])
        );
        // a3 is twenty orders of magnitude below the rest
        assert_eq!(
            find_roots_cubic(1e-20f64, 1f64, -3f64, 2f64),
            Roots::Two([Root::Real(1f64), Root::Real(2f64)])
        );
    }

    #[test]
    fn test_find_roots_quartic_degenerate_a4_zero() {
        match find_roots_quartic(0.0, 1.0, -6.0, 11.0, -6.0) {
            Roots::Three(x) => {
                let mut x = x.map(|r| r.re());
                x.sort_by(|a, b| a.partial_cmp(b).unwrap());
                assert_float_array_eq!(1e-13, x, [1f64, 2f64, 3f64]);
            }
            other => panic!("Expected Three roots, got {:?}", other),
        }
        // Two vanishing leading coefficients fall through to the quadratic
        assert_eq!(
            find_roots_quartic(0f64, 0f64, 1f64, 0f64, -1f64),
            Roots::Two([Root::Real(-1f64), Root::Real(1f64)])
        );
    }

    #[test]
    fn test_find_roots_quartic_full_degree() {
        assert_eq!(find_roots_quartic(1f64, 0f64, 0f64, 0f64, 0f64), Roots::Four([Root::Real(0f64); 4]));
        assert_eq!(find_roots_quartic(1f64, 0f64, -5f64, 0f64, 4f64).real().count(), 4);
    }

    #[test]
    fn test_find_roots_slice() {
        assert_eq!(find_roots(&[5f64]), Ok(Roots::No([])));
        assert_eq!(find_roots(&[0f64]), Ok(Roots::One([Root::Real(0f64)])));
        assert_eq!(find_roots(&[2f64, -1f64]), Ok(Roots::One([Root::Real(0.5f64)])));
        assert_eq!(
            find_roots(&[1f64, 0f64, -1f64]),
            Ok(Roots::Two([Root::Real(-1f64), Root::Real(1f64)]))
        );
        assert_eq!(find_roots(&[1f64, -3f64, 3f64, -1f64]), Ok(Roots::Three([Root::Real(1f64); 3])));
        assert_eq!(find_roots(&[1f64, 0f64, -5f64, 0f64, 4f64]).map(|r| r.len()), Ok(4));
    }

    #[test]
    fn test_find_roots_slice_errors() {
        assert_eq!(find_roots::<f64>(&[]), Err(Error::EmptyCoefficients));
        assert_eq!(
            find_roots(&[1f64, 0f64, 0f64, 0f64, 0f64, 1f64]),
            Err(Error::DegreeTooHigh { degree: 5 })
        );
        assert_eq!(
            find_roots(&[1f64, f64::NAN, 0f64]),
            Err(Error::NonFiniteCoefficient { index: 1 })
        );
        assert_eq!(
            find_roots(&[1f64, 0f64, 0f64, 0f64, 0f64, 0f64, f64::INFINITY]),
            Err(Error::NonFiniteCoefficient { index: 6 })
        );
    }

    #[test]
    fn test_solver_rejects_invalid_tolerances() {
        let tolerances = Tolerances::<f64> {
            cubic_discriminant: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(
            Solver::new(tolerances),
            Err(Error::InvalidTolerance { name: "cubic_discriminant" })
        );
    }

    #[test]
    fn test_solver_leading_tolerance() {
        let loose = Solver::new(Tolerances::<f64> {
            leading_coefficient: 1e-6,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(loose.tolerances().leading_coefficient, 1e-6);
        assert_eq!(loose.find_roots_quartic(1e-8, 0.0, 1.0, 0.0, -1.0).len(), 2);
        assert_eq!(Solver::default().find_roots_quartic(1e-8, 0.0, 1.0, 0.0, -1.0).len(), 4);
    }
}
