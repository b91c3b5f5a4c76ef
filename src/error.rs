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

//! Error types for the slice dispatcher and solver configuration

use thiserror::Error;

/// Result type alias using the crate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported outside the closed-form core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No coefficients were supplied
    #[error("Polynomial has no coefficients")]
    EmptyCoefficients,

    /// More than five coefficients were supplied
    #[error("Polynomial degree {degree} is above the supported maximum of 4")]
    DegreeTooHigh {
        /// Degree implied by the coefficient count
        degree: usize,
    },

    /// A coefficient is NaN or infinite
    #[error("Coefficient at index {index} is not finite")]
    NonFiniteCoefficient {
        /// Position in the highest-degree-first coefficient slice
        index: usize,
    },

    /// A tolerance is negative, NaN or infinite
    #[error("Tolerance '{name}' must be finite and non-negative")]
    InvalidTolerance {
        /// Field name in `Tolerances`
        name: &'static str,
    },
}
