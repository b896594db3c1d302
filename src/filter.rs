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
use crate::err::LapletError;
use crate::range_sum::RangeSum;
use std::borrow::Cow;

/// Provides finite-impulse filter coefficients for resampling.
///
/// Any coefficient source qualifies as long as it can produce an ordered
/// coefficient sequence together with the signed reach of its first and last
/// taps relative to the sample center.
pub trait FilterProvider {
    /// Returns the filter coefficients.
    fn coefficients(&self) -> Cow<'_, [f64]>;
    /// Index of the first coefficient relative to the sample center, typically ≤ 0.
    fn left_reach(&self) -> isize;
    /// Index of the last coefficient relative to the sample center, typically ≥ 0.
    fn right_reach(&self) -> isize;
}

/// Immutable description of a finite kernel: an ordered coefficient sequence
/// plus the signed offset of the first tap relative to the sample center.
///
/// Two prefix-sum indexes are derived at construction, one over the raw
/// coefficients and one over the parity-alternated coefficients. Together they
/// bound the DC and the Nyquist response of a truncated window, which is what
/// [`Kernel::normalization`] draws on.
#[derive(Debug, Clone)]
pub struct Kernel {
    coefficients: Vec<f64>,
    left: isize,
    right: isize,
    plain: RangeSum,
    alternating: RangeSum,
}

impl Kernel {
    /// Builds a kernel from its coefficients and the reach of the first tap.
    ///
    /// The right reach follows from the coefficient count. At least one
    /// coefficient is required.
    pub fn new(coefficients: Vec<f64>, left_reach: isize) -> Result<Self, LapletError> {
        if coefficients.is_empty() {
            return Err(LapletError::EmptyKernel);
        }
        let alternating: Vec<f64> = coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| if i % 2 == 0 { c } else { -c })
            .collect();
        Ok(Self {
            plain: RangeSum::new(&coefficients),
            alternating: RangeSum::new(&alternating),
            left: left_reach,
            right: left_reach + coefficients.len() as isize - 1,
            coefficients,
        })
    }

    /// Builds a kernel from an external coefficient source, validating that
    /// the declared reach matches the coefficient count.
    pub fn from_provider(provider: &dyn FilterProvider) -> Result<Self, LapletError> {
        let coefficients = provider.coefficients().into_owned();
        let reach_span = provider.right_reach() - provider.left_reach() + 1;
        if reach_span.max(0) as usize != coefficients.len() {
            return Err(LapletError::ReachMismatch(
                reach_span.max(0) as usize,
                coefficients.len(),
            ));
        }
        Self::new(coefficients, provider.left_reach())
    }

    /// Single unit tap at the center; resampling with it is the identity.
    pub fn identity() -> Self {
        let coefficients = vec![1.0];
        Self {
            plain: RangeSum::new(&coefficients),
            alternating: RangeSum::new(&coefficients),
            left: 0,
            right: 0,
            coefficients,
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn left_reach(&self) -> isize {
        self.left
    }

    pub fn right_reach(&self) -> isize {
        self.right
    }

    /// Number of taps.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Renormalization factor for the truncated coefficient window
    /// `[left, right]` (coefficient indices, inclusive).
    ///
    /// A kernel truncated at a signal edge no longer integrates to its design
    /// gain. The factor is the larger magnitude of the truncated DC sum and
    /// the truncated Nyquist-alternating sum, so neither smooth nor
    /// oscillatory content blows up or vanishes near boundaries. A window in
    /// which both sums cancel yields 1.0, never 0.
    pub fn normalization(&self, left: isize, right: isize) -> f64 {
        let plain = self.plain.sum(left, right).abs();
        let alternating = self.alternating.sum(left, right).abs();
        let factor = plain.max(alternating);
        if factor == 0.0 {
            1.0
        } else {
            factor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Triangular;

    impl FilterProvider for Triangular {
        fn coefficients(&self) -> Cow<'_, [f64]> {
            Cow::Borrowed(&[0.5, 1.0, 0.5])
        }

        fn left_reach(&self) -> isize {
            -1
        }

        fn right_reach(&self) -> isize {
            1
        }
    }

    #[test]
    fn test_reach_follows_from_length() {
        let kernel = Kernel::new(vec![0.25, 0.5, 0.25], -1).unwrap();
        assert_eq!(kernel.left_reach(), -1);
        assert_eq!(kernel.right_reach(), 1);
        assert_eq!(kernel.len(), 3);
    }

    #[test]
    fn test_empty_kernel_rejected() {
        assert!(matches!(
            Kernel::new(vec![], 0),
            Err(LapletError::EmptyKernel)
        ));
    }

    #[test]
    fn test_provider_roundtrip() {
        let kernel = Kernel::from_provider(&Triangular).unwrap();
        assert_eq!(kernel.coefficients(), &[0.5, 1.0, 0.5]);
        assert_eq!(kernel.left_reach(), -1);
        assert_eq!(kernel.right_reach(), 1);
    }

    #[test]
    fn test_provider_reach_mismatch_rejected() {
        struct Broken;
        impl FilterProvider for Broken {
            fn coefficients(&self) -> Cow<'_, [f64]> {
                Cow::Borrowed(&[1.0, 1.0])
            }
            fn left_reach(&self) -> isize {
                -1
            }
            fn right_reach(&self) -> isize {
                1
            }
        }
        assert!(matches!(
            Kernel::from_provider(&Broken),
            Err(LapletError::ReachMismatch(3, 2))
        ));
    }

    #[test]
    fn test_normalization_prefers_larger_candidate() {
        // plain sum 2.0 dominates the cancelled alternating sum on the full window
        let kernel = Kernel::new(vec![0.5, 1.0, 0.5], -1).unwrap();
        assert_eq!(kernel.normalization(0, 2), 2.0);
        // truncated to the last two taps the plain sum is 1.5
        assert_eq!(kernel.normalization(1, 2), 1.5);
    }

    #[test]
    fn test_normalization_alternating_dominates() {
        // DC sum cancels, the Nyquist-alternating sum does not
        let kernel = Kernel::new(vec![1.0, -1.0], 0).unwrap();
        assert_eq!(kernel.normalization(0, 1), 2.0);
    }

    #[test]
    fn test_normalization_never_zero() {
        let kernel = Kernel::new(vec![0.0, 0.0], 0).unwrap();
        assert_eq!(kernel.normalization(0, 1), 1.0);
        let kernel = Kernel::new(vec![1.0], 0).unwrap();
        assert_eq!(kernel.normalization(5, 2), 1.0);
    }

    #[test]
    fn test_identity_kernel() {
        let kernel = Kernel::identity();
        assert_eq!(kernel.coefficients(), &[1.0]);
        assert_eq!(kernel.left_reach(), 0);
        assert_eq!(kernel.right_reach(), 0);
        assert_eq!(kernel.normalization(0, 0), 1.0);
    }
}
