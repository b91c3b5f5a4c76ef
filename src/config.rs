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

//! Tunable thresholds for branch selection

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::FloatType;

/// Relative tolerances used to pick between equivalent formulas.
///
/// Every value is relative: a quantity is treated as zero when its magnitude
/// does not exceed `tolerance * scale`, where `scale` is the magnitude of the
/// terms it was computed from. Deserializing from a partial document fills the
/// missing fields with their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "F: FloatType + Deserialize<'de>"))]
pub struct Tolerances<F> {
    /// Leading coefficient vs. largest remaining coefficient, below which the
    /// dispatcher drops one degree.
    pub leading_coefficient: F,
    /// `p` and `q` of the depressed cubic, below which the cubic has a triple root.
    pub cubic_depressed: F,
    /// `(q/2)² + (p/3)³`, below which the cubic has a repeated real root.
    pub cubic_discriminant: F,
    /// `q` of the depressed quartic, below which the quartic is biquadratic.
    pub quartic_depressed: F,
    /// Resolvent root vs. `|p| + √|r|`, below which Ferrari falls back to the biquadratic branch.
    ///
    /// Dropping the odd term moves the roots by about the square root of this
    /// value, so it defaults to the square of the base tolerance.
    pub resolvent_root: F,
    /// Imaginary part of a resolvent root vs. its modulus, below which the root counts as real.
    pub resolvent_imaginary: F,
}

impl<F: FloatType> Default for Tolerances<F> {
    fn default() -> Self {
        let eps = F::epsilon() * F::tolerance_factor();
        Self {
            leading_coefficient: eps,
            cubic_depressed: eps,
            cubic_discriminant: eps,
            quartic_depressed: eps,
            resolvent_root: eps * eps,
            resolvent_imaginary: eps.sqrt(),
        }
    }
}

impl<F: FloatType> Tolerances<F> {
    /// Rejects tolerances that would make every branch test meaningless.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("leading_coefficient", self.leading_coefficient),
            ("cubic_depressed", self.cubic_depressed),
            ("cubic_discriminant", self.cubic_discriminant),
            ("quartic_depressed", self.quartic_depressed),
            ("resolvent_root", self.resolvent_root),
            ("resolvent_imaginary", self.resolvent_imaginary),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < F::zero() {
                return Err(Error::InvalidTolerance { name });
            }
        }
        Ok(())
    }

    /// `true` when `value` is negligible next to `scale`.
    #[inline]
    pub(crate) fn negligible(tolerance: F, value: F, scale: F) -> bool {
        value.abs() <= tolerance * scale
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Tolerances::<f64>::default().validate(), Ok(()));
        assert_eq!(Tolerances::<f32>::default().validate(), Ok(()));
    }

    #[test]
    fn test_f32_defaults_are_looser() {
        let loose = Tolerances::<f32>::default().cubic_discriminant as f64;
        assert!(loose > Tolerances::<f64>::default().cubic_discriminant);
    }

    #[test]
    fn test_resolvent_root_default_is_squared() {
        let tolerances = Tolerances::<f64>::default();
        assert_eq!(tolerances.resolvent_root, tolerances.quartic_depressed * tolerances.quartic_depressed);
        assert!(tolerances.resolvent_root > 0f64);
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let tolerances = Tolerances::<f64> {
            resolvent_root: -1e-12,
            ..Default::default()
        };
        assert_eq!(tolerances.validate(), Err(Error::InvalidTolerance { name: "resolvent_root" }));

        let tolerances = Tolerances::<f64> {
            leading_coefficient: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            tolerances.validate(),
            Err(Error::InvalidTolerance { name: "leading_coefficient" })
        );
    }

    #[test]
    fn test_negligible() {
        assert!(Tolerances::negligible(1e-12f64, 1e-13, 1.0));
        assert!(Tolerances::negligible(0f64, 0.0, 0.0));
        assert!(!Tolerances::negligible(1e-12f64, 1e-11, 1.0));
    }
}
