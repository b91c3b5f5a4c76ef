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

//! Parallel solving of many polynomials with one [`Solver`].

use rayon::prelude::*;
use tracing::debug;

use super::error::Result;
use super::solver::Solver;
use super::{FloatType, RootSet, Roots};

impl<F: FloatType> Solver<F> {
    /// Solves every cubic `[a3, a2, a1, a0]` in parallel. Output order matches input order.
    pub fn solve_cubic_batch(&self, polynomials: &[[F; 4]]) -> Vec<RootSet<F, 3>> {
        debug!(polynomials = polynomials.len(), "solving cubic batch");
        polynomials
            .par_iter()
            .map(|&[a3, a2, a1, a0]| self.solve_cubic(a3, a2, a1, a0))
            .collect()
    }

    /// Solves every quartic `[a4, a3, a2, a1, a0]` in parallel. Output order matches input order.
    pub fn solve_quartic_batch(&self, polynomials: &[[F; 5]]) -> Vec<RootSet<F, 4>> {
        debug!(polynomials = polynomials.len(), "solving quartic batch");
        polynomials
            .par_iter()
            .map(|&[a4, a3, a2, a1, a0]| self.solve_quartic(a4, a3, a2, a1, a0))
            .collect()
    }

    /// Runs [`Solver::find_roots`] on every coefficient slice in parallel.
    pub fn find_roots_batch<C>(&self, polynomials: &[C]) -> Vec<Result<Roots<F>>>
    where
        C: AsRef<[F]> + Sync,
    {
        debug!(polynomials = polynomials.len(), "solving mixed-degree batch");
        polynomials
            .par_iter()
            .map(|coefficients| self.find_roots(coefficients.as_ref()))
            .collect()
    }
}
