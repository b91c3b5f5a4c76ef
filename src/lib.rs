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

//! Closed-form roots of polynomials up to degree four.
//!
//! Cubics are solved with Cardano's formula when there is one real root and
//! with the trigonometric (Viète) form when all three are real. Quartics go
//! through Ferrari's resolvent cubic, or through the biquadratic shortcut when
//! the depressed quartic has no odd term. Every solver classifies the input
//! into a numerical regime first, using relative tolerances, so nearly
//! degenerate inputs take the branch that stays accurate.
//!
//! The degree-specific functions ([`solve_cubic`], [`solve_quartic`], ...)
//! always return exactly `n` roots, real or complex. The `find_roots_*`
//! dispatchers drop vanishing leading coefficients first and return [`Roots`].
//!
//! ```
//! use quartic_roots::{find_roots_quartic, Root};
//!
//! // (x - 1)(x - 2)(x^2 + 1)
//! let roots = find_roots_quartic(1f64, -3f64, 3f64, -3f64, 2f64);
//! let mut real: Vec<f64> = roots.real().collect();
//! real.sort_by(|a, b| a.partial_cmp(b).unwrap());
//! assert_eq!(real.len(), 2);
//! assert!((real[0] - 1f64).abs() < 1e-12);
//! assert!((real[1] - 2f64).abs() < 1e-12);
//! assert!(roots.iter().any(|r| matches!(r, Root::Complex(z) if z.im > 0.0)));
//! ```

#[cfg(test)]
macro_rules! assert_float_eq {
    ($delta:expr, $x:expr, $y:expr) => {
        let (x, y) = ($x, $y);
        assert!((x - y).abs() < $delta, "{} and {} differ by more than {}", x, y, $delta);
    };
}

#[cfg(test)]
macro_rules! assert_float_array_eq {
    ($delta:expr, $x:expr, $y:expr) => {
        let x = $x;
        let y = $y;
        assert_eq!(x.len(), y.len(), "Lengths differ: {:?} vs {:?}", x, y);
        for i in 0..x.len() {
            assert_float_eq!($delta, x[i], y[i]);
        }
    };
}

mod analytical;
mod batch;
mod config;
mod error;
mod float;
mod regime;
mod roots;
mod solver;

pub use num_complex;

pub use analytical::biquadratic::solve_biquadratic;
pub use analytical::cubic::{find_one_real_root_cubic, solve_cubic};
pub use analytical::linear::solve_linear;
pub use analytical::numeric::eval_polynomial;
pub use analytical::quadratic::solve_quadratic;
pub use analytical::quartic::solve_quartic;
pub use config::Tolerances;
pub use error::{Error, Result};
pub use float::FloatType;
pub use regime::{classify_cubic, classify_quartic, CubicRegime, QuarticRegime};
pub use roots::{Root, RootSet, Roots};
pub use solver::{find_roots, find_roots_cubic, find_roots_linear, find_roots_quadratic, find_roots_quartic, Solver};
