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
use crate::sampler::Sampler;
use crate::SignalSample;
use std::sync::Arc;

/// Result of a **single-level** two-band decomposition.
pub struct Pyramid1D<T> {
    /// Coarse approximation at half the sample rate.
    pub approximation: Vec<T>,
    /// Residual the re-expanded approximation fails to reproduce, at the
    /// original sample rate.
    pub detail: Vec<T>,
}

/// Result of a **multi-level** decomposition, finest level first.
pub struct PyramidLevels<T> {
    pub levels: Vec<Pyramid1D<T>>,
}

/// Two-band multiresolution transform of a 1-D signal, composed from an
/// analysis sampler and a synthesis sampler.
///
/// Reconstruction is exact when the analysis and synthesis kernels match and
/// the kernel never crosses a signal edge. Boundary truncation makes
/// invertibility an approximate property near the edges of the signal; the
/// transform reports what the filters produce and never compensates for it.
pub struct LaplacianPyramid<T> {
    analysis: Sampler<T>,
    synthesis: Sampler<T>,
}

impl<T: SignalSample> LaplacianPyramid<T> {
    pub fn new(analysis: Arc<Kernel>, synthesis: Arc<Kernel>) -> Self {
        Self {
            analysis: Sampler::new(analysis),
            synthesis: Sampler::new(synthesis),
        }
    }

    /// Decomposes `source` into a half-rate approximation and a full-rate
    /// detail residual.
    ///
    /// For odd-length signals the re-expanded approximation is one sample
    /// short; trailing detail samples then carry the source value unchanged.
    pub fn forward(&self, source: &[T]) -> Result<Pyramid1D<T>, LapletError> {
        let approximation = self.analysis.downsample(source, 2, 0)?;
        let expanded = self.analysis.upsample(&approximation, 2, 0)?;
        let mut detail = try_vec![T::zero(); source.len()];
        for (i, (dst, &src)) in detail.iter_mut().zip(source.iter()).enumerate() {
            *dst = match expanded.get(i) {
                Some(&e) => src - e,
                None => src,
            };
        }
        Ok(Pyramid1D {
            approximation,
            detail,
        })
    }

    /// Reconstructs the signal from one decomposition level.
    pub fn inverse(&self, pyramid: &Pyramid1D<T>) -> Result<Vec<T>, LapletError> {
        self.reconstruct(&pyramid.approximation, &pyramid.detail)
    }

    fn reconstruct(&self, approximation: &[T], detail: &[T]) -> Result<Vec<T>, LapletError> {
        if approximation.len() != detail.len() / 2 {
            return Err(LapletError::PyramidShapeMismatch(
                approximation.len(),
                detail.len(),
            ));
        }
        let expanded = self.synthesis.upsample(approximation, 2, 0)?;
        let mut output = try_vec![T::zero(); detail.len()];
        for (i, (dst, &det)) in output.iter_mut().zip(detail.iter()).enumerate() {
            *dst = match expanded.get(i) {
                Some(&e) => e + det,
                None => det,
            };
        }
        Ok(output)
    }

    /// Repeatedly decomposes the approximation channel, storing every level.
    /// `levels == 0` is treated as a single level.
    pub fn forward_multi(
        &self,
        source: &[T],
        levels: usize,
    ) -> Result<PyramidLevels<T>, LapletError> {
        let levels = levels.max(1);
        let mut store = Vec::with_capacity(levels);
        let mut current = source.to_vec();
        for _ in 0..levels {
            if current.len() < 2 {
                return Err(LapletError::SignalTooSmallForLevel);
            }
            let level = self.forward(&current)?;
            current = level.approximation.clone();
            store.push(level);
        }
        Ok(PyramidLevels { levels: store })
    }

    /// Folds a multi-level decomposition back into a signal, coarsest level
    /// first.
    pub fn inverse_multi(&self, pyramid: &PyramidLevels<T>) -> Result<Vec<T>, LapletError> {
        let deepest = pyramid.levels.last().ok_or(LapletError::EmptyPyramid)?;
        let mut current = deepest.approximation.clone();
        for level in pyramid.levels.iter().rev() {
            current = self.reconstruct(&current, &level.detail)?;
        }
        Ok(current)
    }
}
