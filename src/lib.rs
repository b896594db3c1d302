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
//! 1-D finite-impulse resampling with edge-consistent renormalization, plus a
//! two-band Laplacian-style pyramid built on top of it.
//!
//! A [`Kernel`] holds filter coefficients and a signed reach; a [`Sampler`]
//! evaluates it against signals of any element type that forms a vector space
//! over `f64`, deriving convolution, decimation, zero-stuffed interpolation
//! and the highpass complement from a single sampling primitive. Near signal
//! edges the coefficient window is truncated and renormalized by the larger
//! of its truncated DC and Nyquist-alternating sums, queried in O(1) through
//! prefix sums. [`LaplacianPyramid`] pairs an analysis and a synthesis
//! sampler into a forward decomposition (approximation + detail) and an
//! inverse reconstruction.

mod err;
mod filter;
mod pyramid;
mod range_sum;
mod sampler;
mod util;
mod yuv;

pub use err::LapletError;
pub use filter::{FilterProvider, Kernel};
pub use pyramid::{LaplacianPyramid, Pyramid1D, PyramidLevels};
pub use range_sum::RangeSum;
pub use sampler::Sampler;
pub use util::{add, downsampled_length, sub, upsampled_length};
pub use yuv::Yuv;

use num_traits::Zero;
use std::fmt::Debug;
use std::ops::{Div, Mul, Sub};

/// Element type of a resampled signal.
///
/// Anything that behaves as a vector space over `f64` qualifies: addition and
/// subtraction between elements, scalar multiplication and division, and an
/// additive identity via [`num_traits::Zero`]. Numeric scalars such as `f64`
/// and small aggregates such as [`Yuv`] both satisfy the blanket impl.
pub trait SignalSample:
    Copy
    + Debug
    + Zero
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + Send
    + Sync
    + 'static
{
}

impl<T> SignalSample for T where
    T: Copy
        + Debug
        + Zero
        + Sub<Output = T>
        + Mul<f64, Output = T>
        + Div<f64, Output = T>
        + Send
        + Sync
        + 'static
{
}
