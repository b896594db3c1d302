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
use crate::err::{try_vec, LapletError};
use crate::filter::Kernel;
use crate::SignalSample;
use std::marker::PhantomData;
use std::sync::Arc;

/// Evaluates a [`Kernel`] against signals of element type `T`.
///
/// The sampler is stateless apart from the shared, read-only kernel: every
/// call is a pure function of its arguments, so one sampler may be used from
/// any number of threads.
pub struct Sampler<T> {
    kernel: Arc<Kernel>,
    phantom_data: PhantomData<T>,
}

impl<T> Clone for Sampler<T> {
    fn clone(&self) -> Self {
        Self {
            kernel: self.kernel.clone(),
            phantom_data: PhantomData,
        }
    }
}

impl<T: SignalSample> Sampler<T> {
    pub fn new(kernel: Arc<Kernel>) -> Self {
        Self {
            kernel,
            phantom_data: PhantomData,
        }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Lowpass estimate of `source` at `center`.
    ///
    /// The coefficient window is truncated to the part of the kernel that
    /// overlaps the signal and the weighted sum is divided by the
    /// renormalization factor of that truncated window. When the kernel lies
    /// entirely outside the signal the result saturates to the zero element.
    pub fn sample_lowpass(&self, source: &[T], center: usize) -> T {
        let shift = center as isize + self.kernel.left_reach();
        let left = (-shift).max(0);
        let right = (self.kernel.len() as isize - 1).min(source.len() as isize - 1 - shift);
        if left > right {
            return T::zero();
        }
        let window = &source[(left + shift) as usize..=(right + shift) as usize];
        let taps = &self.kernel.coefficients()[left as usize..=right as usize];
        let mut acc = T::zero();
        for (&src, &tap) in window.iter().zip(taps.iter()) {
            acc = acc + src * tap;
        }
        acc / self.kernel.normalization(left, right)
    }

    /// Highpass complement at `center`: `source[center]` minus the lowpass
    /// estimate. Unlike [`Sampler::sample_lowpass`] the center itself must be
    /// in bounds.
    pub fn sample_highpass(&self, source: &[T], center: usize) -> Result<T, LapletError> {
        if center >= source.len() {
            return Err(LapletError::CenterOutOfBounds(center, source.len()));
        }
        Ok(source[center] - self.sample_lowpass(source, center))
    }

    /// Applies [`Sampler::sample_lowpass`] at every index, producing a
    /// same-length signal.
    pub fn convolute(&self, source: &[T]) -> Result<Vec<T>, LapletError> {
        let mut output = try_vec![T::zero(); source.len()];
        self.convolute_into(source, &mut output)?;
        Ok(output)
    }

    pub fn convolute_into(&self, source: &[T], output: &mut [T]) -> Result<(), LapletError> {
        if source.len() != output.len() {
            return Err(LapletError::InOutSizesMismatch(source.len(), output.len()));
        }
        for (center, dst) in output.iter_mut().enumerate() {
            *dst = self.sample_lowpass(source, center);
        }
        Ok(())
    }

    /// Applies [`Sampler::sample_highpass`] at every index.
    pub fn convolute_highpass(&self, source: &[T]) -> Result<Vec<T>, LapletError> {
        let mut output = try_vec![T::zero(); source.len()];
        self.convolute_highpass_into(source, &mut output)?;
        Ok(output)
    }

    pub fn convolute_highpass_into(
        &self,
        source: &[T],
        output: &mut [T],
    ) -> Result<(), LapletError> {
        if source.len() != output.len() {
            return Err(LapletError::InOutSizesMismatch(source.len(), output.len()));
        }
        for (center, dst) in output.iter_mut().enumerate() {
            *dst = self.sample_highpass(source, center)?;
        }
        Ok(())
    }

    /// Decimates `source` by `factor`, sampling the lowpass estimate at
    /// centers `i * factor + shift`. The output length truncates to
    /// `source.len() / factor`.
    pub fn downsample(
        &self,
        source: &[T],
        factor: usize,
        shift: usize,
    ) -> Result<Vec<T>, LapletError> {
        if factor == 0 {
            return Err(LapletError::ZeroSamplingFactor);
        }
        let mut output = try_vec![T::zero(); source.len() / factor];
        for (i, dst) in output.iter_mut().enumerate() {
            *dst = self.sample_lowpass(source, i * factor + shift);
        }
        Ok(output)
    }

    /// Highpass variant of [`Sampler::downsample`]. Every sampled center must
    /// be in bounds, so `shift` must stay below `factor`.
    pub fn downsample_highpass(
        &self,
        source: &[T],
        factor: usize,
        shift: usize,
    ) -> Result<Vec<T>, LapletError> {
        if factor == 0 {
            return Err(LapletError::ZeroSamplingFactor);
        }
        let mut output = try_vec![T::zero(); source.len() / factor];
        for (i, dst) in output.iter_mut().enumerate() {
            *dst = self.sample_highpass(source, i * factor + shift)?;
        }
        Ok(output)
    }

    /// Zero-stuffed interpolation: spreads `source` over `factor` times its
    /// length at phase `shift`, filling the gaps with the zero element, then
    /// reconstruction-filters the result with [`Sampler::convolute`].
    ///
    /// Amplitude scaling comes from the kernel's own normalization; there is
    /// no separate gain factor.
    pub fn upsample(
        &self,
        source: &[T],
        factor: usize,
        shift: usize,
    ) -> Result<Vec<T>, LapletError> {
        let stuffed = self.zero_stuff(source, factor, shift)?;
        self.convolute(&stuffed)
    }

    /// Highpass variant of [`Sampler::upsample`].
    pub fn upsample_highpass(
        &self,
        source: &[T],
        factor: usize,
        shift: usize,
    ) -> Result<Vec<T>, LapletError> {
        let stuffed = self.zero_stuff(source, factor, shift)?;
        self.convolute_highpass(&stuffed)
    }

    fn zero_stuff(
        &self,
        source: &[T],
        factor: usize,
        shift: usize,
    ) -> Result<Vec<T>, LapletError> {
        if factor == 0 {
            return Err(LapletError::ZeroSamplingFactor);
        }
        if shift >= factor {
            return Err(LapletError::ShiftOutOfRange(shift, factor));
        }
        let mut stuffed = try_vec![T::zero(); source.len() * factor];
        for (i, &src) in source.iter().enumerate() {
            stuffed[i * factor + shift] = src;
        }
        Ok(stuffed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangular() -> Sampler<f64> {
        Sampler::new(Arc::new(Kernel::new(vec![0.5, 1.0, 0.5], -1).unwrap()))
    }

    const SOURCE: [f64; 6] = [1.0, 4.0, 9.0, 16.0, 25.0, 36.0];

    #[test]
    fn test_interior_sample_matches_direct_sum() {
        let sampler = triangular();
        // kernel fully inside the signal: clamping must be a no-op
        let direct = (0.5 * SOURCE[1] + 1.0 * SOURCE[2] + 0.5 * SOURCE[3]) / 2.0;
        assert_eq!(sampler.sample_lowpass(&SOURCE, 2), direct);
    }

    #[test]
    fn test_convolute_renormalizes_at_edges() {
        let sampler = triangular();
        let reference = [2.0, 4.5, 9.5, 16.5, 25.5, 97.0 / 3.0];
        let out = sampler.convolute(&SOURCE).unwrap();
        out.iter().enumerate().for_each(|(i, x)| {
            assert!(
                (reference[i] - x).abs() < 1e-12,
                "difference expected to be < 1e-12, but values were ref {}, derived {}",
                reference[i],
                x
            );
        });
    }

    #[test]
    fn test_identity_kernel_convolute_is_identity() {
        let sampler = Sampler::new(Arc::new(Kernel::identity()));
        let out = sampler.convolute(&SOURCE).unwrap();
        assert_eq!(out, SOURCE.to_vec());
    }

    #[test]
    fn test_empty_overlap_saturates_to_zero() {
        let sampler = triangular();
        assert_eq!(sampler.sample_lowpass(&SOURCE, 100), 0.0);
        let short = [5.0, 7.0];
        assert_eq!(sampler.sample_lowpass(&short, 4), 0.0);
    }

    #[test]
    fn test_highpass_is_exact_complement() {
        let sampler = triangular();
        for center in 0..SOURCE.len() {
            let high = sampler.sample_highpass(&SOURCE, center).unwrap();
            let low = sampler.sample_lowpass(&SOURCE, center);
            assert_eq!(high, SOURCE[center] - low);
        }
    }

    #[test]
    fn test_highpass_center_out_of_bounds() {
        let sampler = triangular();
        assert!(matches!(
            sampler.sample_highpass(&SOURCE, 6),
            Err(LapletError::CenterOutOfBounds(6, 6))
        ));
    }

    #[test]
    fn test_lowpass_plus_highpass_restores_signal() {
        let sampler = triangular();
        let low = sampler.convolute(&SOURCE).unwrap();
        let high = sampler.convolute_highpass(&SOURCE).unwrap();
        for ((&l, &h), &src) in low.iter().zip(high.iter()).zip(SOURCE.iter()) {
            assert_eq!(l + h, src);
        }
    }

    #[test]
    fn test_downsample_factor_one_equals_convolute() {
        // factor-1 decimation visits every center once, so it is exactly one
        // convolution pass, element for element
        let sampler = triangular();
        let decimated = sampler.downsample(&SOURCE, 1, 0).unwrap();
        let convolved = sampler.convolute(&SOURCE).unwrap();
        assert_eq!(decimated, convolved);
    }

    #[test]
    fn test_downsample_pairwise_averages() {
        let sampler = triangular();
        let out = sampler.downsample(&SOURCE, 2, 0).unwrap();
        assert_eq!(out, vec![2.0, 9.5, 25.5]);
    }

    #[test]
    fn test_downsample_with_shift() {
        let sampler = triangular();
        let out = sampler.downsample(&SOURCE, 2, 1).unwrap();
        let reference = [4.5, 16.5, 97.0 / 3.0];
        out.iter().enumerate().for_each(|(i, x)| {
            assert!(
                (reference[i] - x).abs() < 1e-12,
                "difference expected to be < 1e-12, but values were ref {}, derived {}",
                reference[i],
                x
            );
        });
    }

    #[test]
    fn test_downsample_zero_factor_rejected() {
        let sampler = triangular();
        assert!(matches!(
            sampler.downsample(&SOURCE, 0, 0),
            Err(LapletError::ZeroSamplingFactor)
        ));
    }

    #[test]
    fn test_upsample_triangular_reference() {
        let sampler = triangular();
        let coarse = [2.0, 9.5, 25.5];
        let reference = [4.0 / 3.0, 2.875, 4.75, 8.75, 12.75, 8.5];
        let out = sampler.upsample(&coarse, 2, 0).unwrap();
        out.iter().enumerate().for_each(|(i, x)| {
            assert!(
                (reference[i] - x).abs() < 1e-12,
                "difference expected to be < 1e-12, but values were ref {}, derived {}",
                reference[i],
                x
            );
        });
    }

    #[test]
    fn test_upsample_shift_out_of_range_rejected() {
        let sampler = triangular();
        assert!(matches!(
            sampler.upsample(&SOURCE, 2, 2),
            Err(LapletError::ShiftOutOfRange(2, 2))
        ));
    }

    #[test]
    fn test_upsample_then_downsample_identity_kernel() {
        let sampler = Sampler::new(Arc::new(Kernel::identity()));
        let up = sampler.upsample(&SOURCE, 2, 0).unwrap();
        assert_eq!(up.len(), SOURCE.len() * 2);
        let down = sampler.downsample(&up, 2, 0).unwrap();
        assert_eq!(down, SOURCE.to_vec());
    }

    #[test]
    fn test_upsample_then_downsample_triangular_half_amplitude() {
        // half the taps land on stuffed zeros at factor 2, so the round trip
        // settles at half amplitude away from the edges
        let sampler = triangular();
        let ramp: Vec<f64> = (0..16).map(|i| i as f64).collect();
        let up = sampler.upsample(&ramp, 2, 0).unwrap();
        let down = sampler.downsample(&up, 2, 0).unwrap();
        for (i, &x) in down.iter().enumerate().take(14).skip(2) {
            assert!(
                (ramp[i] / 2.0 - x).abs() < 1e-12,
                "difference expected to be < 1e-12, but values were ref {}, derived {}",
                ramp[i] / 2.0,
                x
            );
        }
    }

    #[test]
    fn test_convolute_into_size_mismatch() {
        let sampler = triangular();
        let mut output = vec![0.0; 4];
        assert!(matches!(
            sampler.convolute_into(&SOURCE, &mut output),
            Err(LapletError::InOutSizesMismatch(6, 4))
        ));
    }

    #[test]
    fn test_convolute_is_stable_under_repetition() {
        let sampler = triangular();
        let once = sampler.convolute(&SOURCE).unwrap();
        let twice = sampler.convolute(&once).unwrap();
        assert_eq!(twice.len(), SOURCE.len());
    }
}
