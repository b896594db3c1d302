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
use crate::SignalSample;

/// Length of a signal decimated by `factor` (truncating).
///
/// `factor` must be non-zero.
#[inline]
pub fn downsampled_length(len: usize, factor: usize) -> usize {
    len / factor
}

/// Length of a signal interpolated by `factor`.
#[inline]
pub fn upsampled_length(len: usize, factor: usize) -> usize {
    len * factor
}

/// Elementwise sum of two equal-length signals.
pub fn add<T: SignalSample>(u: &[T], v: &[T]) -> Result<Vec<T>, LapletError> {
    if u.len() != v.len() {
        return Err(LapletError::LengthMismatch(u.len(), v.len()));
    }
    let mut output = try_vec![T::zero(); u.len()];
    for (dst, (&a, &b)) in output.iter_mut().zip(u.iter().zip(v.iter())) {
        *dst = a + b;
    }
    Ok(output)
}

/// Elementwise difference of two equal-length signals.
pub fn sub<T: SignalSample>(u: &[T], v: &[T]) -> Result<Vec<T>, LapletError> {
    if u.len() != v.len() {
        return Err(LapletError::LengthMismatch(u.len(), v.len()));
    }
    let mut output = try_vec![T::zero(); u.len()];
    for (dst, (&a, &b)) in output.iter_mut().zip(u.iter().zip(v.iter())) {
        *dst = a - b;
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(downsampled_length(7, 2), 3);
        assert_eq!(downsampled_length(6, 2), 3);
        assert_eq!(upsampled_length(3, 2), 6);
    }

    #[test]
    fn test_add() {
        let u = [1.0, 2.0, 3.0, 4.0, 5.0];
        let v = [3.0, 3.0, 3.0, 3.0, 3.0];
        assert_eq!(add(&u, &v).unwrap(), vec![4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_sub() {
        let u = [1.0, 2.0, 3.0, 4.0, 5.0];
        let v = [3.0, 3.0, 3.0, 3.0, 3.0];
        assert_eq!(sub(&u, &v).unwrap(), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let u = [1.0, 2.0];
        let v = [1.0, 2.0, 3.0];
        assert!(matches!(
            add(&u, &v),
            Err(LapletError::LengthMismatch(2, 3))
        ));
        assert!(matches!(
            sub(&u, &v),
            Err(LapletError::LengthMismatch(2, 3))
        ));
    }
}
