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

use std::fmt::{Debug, Display};
use std::ops::Neg;

use num_traits::{FloatConst, Num};

/// Generic floating-point type accepted by all solvers.
///
/// Only the operations the closed-form formulas need are exposed, so small
/// integer constants can be written `F::from(3i16)` without colliding with
/// `NumCast::from`.
pub trait FloatType:
    Num + Copy + PartialOrd + Neg<Output = Self> + FloatConst + From<i16> + Debug + Display + Default + Send + Sync + 'static
{
    fn epsilon() -> Self;
    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn cbrt(self) -> Self;
    fn cos(self) -> Self;
    fn acos(self) -> Self;
    fn hypot(self, other: Self) -> Self;
    fn copysign(self, sign: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn min(self, other: Self) -> Self;
    fn is_finite(self) -> bool;
    fn is_infinite(self) -> bool;

    /// Multiplier applied to `epsilon()` for the default relative tolerances.
    /// `f32` carries too few bits for the `f64` factor to leave any headroom.
    fn tolerance_factor() -> Self;

    /// Splitter constant `2^s + 1` for Veltkamp splitting, `s = ceil(mantissa / 2)`.
    fn veltkamp_factor() -> Self;
}

macro_rules! impl_float_type {
    ($t:ident, $tolerance_factor:expr, $veltkamp_factor:expr) => {
        impl FloatType for $t {
            fn epsilon() -> Self {
                $t::EPSILON
            }
            fn abs(self) -> Self {
                $t::abs(self)
            }
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }
            fn cbrt(self) -> Self {
                $t::cbrt(self)
            }
            fn cos(self) -> Self {
                $t::cos(self)
            }
            fn acos(self) -> Self {
                $t::acos(self)
            }
            fn hypot(self, other: Self) -> Self {
                $t::hypot(self, other)
            }
            fn copysign(self, sign: Self) -> Self {
                $t::copysign(self, sign)
            }
            fn max(self, other: Self) -> Self {
                $t::max(self, other)
            }
            fn min(self, other: Self) -> Self {
                $t::min(self, other)
            }
            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }
            fn is_infinite(self) -> bool {
                $t::is_infinite(self)
            }
            fn tolerance_factor() -> Self {
                $tolerance_factor
            }
            fn veltkamp_factor() -> Self {
                $veltkamp_factor
            }
        }
    };
}

impl_float_type!(f32, 16.0, 4097.0);
impl_float_type!(f64, 64.0, 134_217_729.0);
