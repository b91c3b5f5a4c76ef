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

use std::fmt;

use num_complex::Complex;

use super::FloatType;

/// A single root of a polynomial with real coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Root<F> {
    Real(F),
    Complex(Complex<F>),
}

impl<F: FloatType> Root<F> {
    /// Wraps a complex value, collapsing it to `Root::Real` when the imaginary part is exactly zero.
    pub fn from_complex(z: Complex<F>) -> Self {
        if z.im == F::zero() {
            Root::Real(z.re)
        } else {
            Root::Complex(z)
        }
    }

    pub fn re(&self) -> F {
        match *self {
            Root::Real(x) => x,
            Root::Complex(z) => z.re,
        }
    }

    pub fn im(&self) -> F {
        match *self {
            Root::Real(_) => F::zero(),
            Root::Complex(z) => z.im,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Root::Real(_))
    }

    pub fn to_complex(&self) -> Complex<F> {
        match *self {
            Root::Real(x) => Complex::new(x, F::zero()),
            Root::Complex(z) => z,
        }
    }

    /// Shifts the root along the real axis. Used for back-substitution.
    pub(crate) fn shift(self, delta: F) -> Self {
        match self {
            Root::Real(x) => Root::Real(x + delta),
            Root::Complex(z) => Root::Complex(Complex::new(z.re + delta, z.im)),
        }
    }
}

impl<F: FloatType> From<F> for Root<F> {
    fn from(x: F) -> Self {
        Root::Real(x)
    }
}

impl<F: FloatType> fmt::Display for Root<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Real(x) => write!(f, "{}", x),
            Root::Complex(z) => write!(f, "{}", z),
        }
    }
}

/// Fixed-size root array returned by the degree-specific solvers.
pub type RootSet<F, const N: usize> = [Root<F>; N];

/// Roots returned by the degree dispatcher.
///
/// The variant equals the effective degree of the polynomial once vanishing
/// leading coefficients have been dropped. Repeated roots are listed repeatedly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots<F> {
    No([Root<F>; 0]),
    One([Root<F>; 1]),
    Two([Root<F>; 2]),
    Three([Root<F>; 3]),
    Four([Root<F>; 4]),
}

impl<F: FloatType> Roots<F> {
    pub fn len(&self) -> usize {
        self.as_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Roots::No(_))
    }

    /// Iterates over the real roots only, in the order they are stored.
    pub fn real(&self) -> impl Iterator<Item = F> + '_ {
        self.as_ref().iter().filter_map(|root| match root {
            Root::Real(x) => Some(*x),
            Root::Complex(_) => None,
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Root<F>> {
        self.as_ref().iter()
    }
}

impl<F: FloatType> AsRef<[Root<F>]> for Roots<F> {
    fn as_ref(&self) -> &[Root<F>] {
        match self {
            Roots::No(x) => x,
            Roots::One(x) => x,
            Roots::Two(x) => x,
            Roots::Three(x) => x,
            Roots::Four(x) => x,
        }
    }
}

impl<F: FloatType> From<[Root<F>; 1]> for Roots<F> {
    fn from(roots: [Root<F>; 1]) -> Self {
        Roots::One(roots)
    }
}

impl<F: FloatType> From<[Root<F>; 2]> for Roots<F> {
    fn from(roots: [Root<F>; 2]) -> Self {
        Roots::Two(roots)
    }
}

impl<F: FloatType> From<[Root<F>; 3]> for Roots<F> {
    fn from(roots: [Root<F>; 3]) -> Self {
        Roots::Three(roots)
    }
}

impl<F: FloatType> From<[Root<F>; 4]> for Roots<F> {
    fn from(roots: [Root<F>; 4]) -> Self {
        Roots::Four(roots)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_complex_collapses_real() {
        assert_eq!(Root::from_complex(Complex::new(2f64, 0f64)), Root::Real(2f64));
        assert_eq!(
            Root::from_complex(Complex::new(2f64, -0.5f64)),
            Root::Complex(Complex::new(2f64, -0.5f64))
        );
    }

    #[test]
    fn test_shift_keeps_imaginary_part() {
        let z = Root::Complex(Complex::new(1f64, 3f64)).shift(-2f64);
        assert_eq!(z.re(), -1f64);
        assert_eq!(z.im(), 3f64);
        assert!(!z.is_real());
    }

    #[test]
    fn test_roots_real_filters_complex() {
        let roots: Roots<f64> = [
            Root::Real(2f64),
            Root::Complex(Complex::new(-1f64, 1f64)),
            Root::Complex(Complex::new(-1f64, -1f64)),
        ]
        .into();
        assert_eq!(roots.len(), 3);
        assert_eq!(roots.real().collect::<Vec<_>>(), vec![2f64]);
        assert!(!roots.is_empty());
        assert!(Roots::<f64>::No([]).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Root::Real(1.5f64).to_string(), "1.5");
        assert_eq!(Root::Complex(Complex::new(1f64, -2f64)).to_string(), "1-2i");
    }
}
