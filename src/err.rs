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

#[derive(Clone, Debug)]
pub enum LapletError {
    OutOfMemory(usize),
    EmptyKernel,
    ReachMismatch(usize, usize),
    CenterOutOfBounds(usize, usize),
    ZeroSamplingFactor,
    ShiftOutOfRange(usize, usize),
    InOutSizesMismatch(usize, usize),
    LengthMismatch(usize, usize),
    PyramidShapeMismatch(usize, usize),
    EmptyPyramid,
    SignalTooSmallForLevel,
}

impl Error for LapletError {}

impl std::fmt::Display for LapletError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LapletError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} bytes to vector",))
            }
            LapletError::EmptyKernel => {
                f.write_str("Kernel must contain at least one coefficient")
            }
            LapletError::ReachMismatch(expected, actual) => f.write_fmt(format_args!(
                "Kernel reach implies {expected} coefficients but {actual} were provided"
            )),
            LapletError::CenterOutOfBounds(center, length) => f.write_fmt(format_args!(
                "Sample center {center} is out of bounds for signal of length {length}"
            )),
            LapletError::ZeroSamplingFactor => f.write_str("Resampling factor must be non-zero"),
            LapletError::ShiftOutOfRange(shift, factor) => f.write_fmt(format_args!(
                "Phase shift {shift} must be less than resampling factor {factor}"
            )),
            LapletError::InOutSizesMismatch(input_size, output_size) => f.write_fmt(format_args!(
                "Input size {input_size} does not match output size {output_size}"
            )),
            LapletError::LengthMismatch(left, right) => f.write_fmt(format_args!(
                "Signals must have equal lengths, but they were {left} and {right}"
            )),
            LapletError::PyramidShapeMismatch(approx, detail) => f.write_fmt(format_args!(
                "Approximation length {approx} does not pair with detail length {detail}"
            )),
            LapletError::EmptyPyramid => f.write_str("Pyramid has no levels"),
            LapletError::SignalTooSmallForLevel => {
                f.write_str("Signal was too small for requested level")
            }
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::LapletError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

use std::error::Error;
use std::fmt::Formatter;
pub(crate) use try_vec;
