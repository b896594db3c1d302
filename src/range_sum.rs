/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

/// Prefix-sum index over a fixed coefficient sequence.
///
/// Built in a single pass, it answers inclusive range-sum queries in O(1).
/// This is what keeps boundary-truncated renormalization constant-time per
/// sample instead of O(kernel width).
#[derive(Debug, Clone)]
pub struct RangeSum {
    partials: Vec<f64>,
}

impl RangeSum {
    pub fn new(coefficients: &[f64]) -> Self {
        let mut partials = Vec::with_capacity(coefficients.len() + 1);
        let mut total = 0.0;
        partials.push(total);
        for &coefficient in coefficients {
            total += coefficient;
            partials.push(total);
        }
        Self { partials }
    }

    /// Inclusive sum of coefficients over `[left, right]`.
    ///
    /// Both ends are clamped to the coefficient range; an empty or inverted
    /// range yields 0.
    pub fn sum(&self, left: isize, right: isize) -> f64 {
        let length = self.partials.len() - 1;
        if length == 0 || right < 0 {
            return 0.0;
        }
        let left = left.max(0) as usize;
        let right = (right as usize).min(length - 1);
        if left > right {
            return 0.0;
        }
        self.partials[right + 1] - self.partials[left]
    }
}
