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
use num_traits::Zero;
use std::ops::{Add, Div, Mul, Sub};

const WR: f64 = 0.299;
const WB: f64 = 0.114;
const WG: f64 = 1.0 - WR - WB;

const U_MAX: f64 = 0.436;
const V_MAX: f64 = 0.615;

/// Double-precision YUV color, BT.601 SDTV weights.
///
/// Forms a vector space over `f64`, so a `&[Yuv]` signal can be resampled by
/// any [`Sampler`](crate::Sampler) directly. The resampling core itself never
/// depends on this type.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Yuv {
    pub y: f64,
    pub u: f64,
    pub v: f64,
}

impl Yuv {
    pub const fn new(y: f64, u: f64, v: f64) -> Self {
        Self { y, u, v }
    }

    /// Converts an 8-bit RGB triple into normalized YUV.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let (r, g, b) = (r as f64, g as f64, b as f64);
        Self {
            y: (WR * r + WG * g + WB * b) / 255.0,
            u: (-U_MAX * WR / (WR + WG) * r - U_MAX * WG / (WR + WG) * g + U_MAX * b) / 255.0,
            v: (V_MAX * r - V_MAX * WG / (WG + WB) * g - V_MAX * WB / (WG + WB) * b) / 255.0,
        }
    }

    /// Converts back to 8-bit RGB, rounding and clamping each channel.
    pub fn to_rgb8(self) -> [u8; 3] {
        let r = self.y + (WG + WB) / V_MAX * self.v;
        let g = self.y + WB * (WB - 1.0) / WG / U_MAX * self.u + WR * (WR - 1.0) / WG / V_MAX * self.v;
        let b = self.y + (WR + WG) / U_MAX * self.u;
        [to_byte(r), to_byte(g), to_byte(b)]
    }
}

#[inline]
fn to_byte(x: f64) -> u8 {
    ((x * 255.0).round() as i64).clamp(0, 255) as u8
}

impl Add for Yuv {
    type Output = Yuv;

    fn add(self, rhs: Yuv) -> Yuv {
        Yuv::new(self.y + rhs.y, self.u + rhs.u, self.v + rhs.v)
    }
}

impl Sub for Yuv {
    type Output = Yuv;

    fn sub(self, rhs: Yuv) -> Yuv {
        Yuv::new(self.y - rhs.y, self.u - rhs.u, self.v - rhs.v)
    }
}

impl Mul<f64> for Yuv {
    type Output = Yuv;

    fn mul(self, rhs: f64) -> Yuv {
        Yuv::new(self.y * rhs, self.u * rhs, self.v * rhs)
    }
}

impl Div<f64> for Yuv {
    type Output = Yuv;

    fn div(self, rhs: f64) -> Yuv {
        Yuv::new(self.y / rhs, self.u / rhs, self.v / rhs)
    }
}

impl Zero for Yuv {
    fn zero() -> Self {
        Yuv::new(0.0, 0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.y == 0.0 && self.u == 0.0 && self.v == 0.0
    }
}
