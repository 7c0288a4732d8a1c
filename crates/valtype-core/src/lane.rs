//! Lane descriptors for fixed and scalable vectors.
//!
//! A fixed vector has exactly `min` lanes. A scalable vector has `min * vscale`
//! lanes, where `vscale` is a positive multiplier chosen by the hardware and
//! unknown at compile time. The scalable flag is part of the identity:
//! `vscale x 4` and `4` never compare equal.

use std::fmt;
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

use crate::LaneError;

/// Vector multiplicity: minimum lane count plus the scalable flag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ElementCount {
    min: u32,
    scalable: bool,
}

impl ElementCount {
    pub const fn new(min: u32, scalable: bool) -> Self {
        Self { min, scalable }
    }

    /// Exactly `min` lanes.
    pub const fn fixed(min: u32) -> Self {
        Self::new(min, false)
    }

    /// `vscale x min` lanes.
    pub const fn scalable(min: u32) -> Self {
        Self::new(min, true)
    }

    /// Minimum lane count (the exact count for fixed vectors).
    #[inline]
    pub const fn min(self) -> u32 {
        self.min
    }

    #[inline]
    pub const fn is_scalable(self) -> bool {
        self.scalable
    }

    #[inline]
    pub const fn is_fixed(self) -> bool {
        !self.scalable
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.min == 0
    }

    /// Whether this descriptor can describe a vector (at least one lane).
    #[inline]
    pub const fn is_vector(self) -> bool {
        self.min >= 1
    }

    /// Lane count known at compile time, `None` for scalable descriptors.
    pub const fn fixed_value(self) -> Option<u32> {
        if self.scalable { None } else { Some(self.min) }
    }

    /// Multiply the minimum lane count, keeping the scalable flag.
    pub fn checked_mul(self, factor: u32) -> Result<Self, LaneError> {
        if factor == 0 {
            return Err(LaneError::ZeroFactor);
        }
        let min = self.min.checked_mul(factor).ok_or(LaneError::Overflow {
            min: self.min,
            factor,
        })?;
        Ok(Self { min, ..self })
    }

    /// Divide the minimum lane count, keeping the scalable flag.
    ///
    /// Only exact divisions succeed: flooring would silently drop lanes.
    pub fn checked_div(self, divisor: u32) -> Result<Self, LaneError> {
        if divisor == 0 {
            return Err(LaneError::ZeroFactor);
        }
        if self.min % divisor != 0 {
            return Err(LaneError::InexactDivision {
                count: self,
                divisor,
            });
        }
        Ok(Self {
            min: self.min / divisor,
            ..self
        })
    }

    pub fn double(self) -> Result<Self, LaneError> {
        self.checked_mul(2)
    }

    pub fn halve(self) -> Result<Self, LaneError> {
        self.checked_div(2)
    }
}

impl From<(u32, bool)> for ElementCount {
    fn from((min, scalable): (u32, bool)) -> Self {
        Self::new(min, scalable)
    }
}

/// Panics on a zero factor or overflow. Use `checked_mul` to handle those.
impl Mul<u32> for ElementCount {
    type Output = Self;

    fn mul(self, factor: u32) -> Self {
        self.ensure_mul(factor)
    }
}

/// Panics on a zero or inexact divisor. Use `checked_div` to handle those.
impl Div<u32> for ElementCount {
    type Output = Self;

    fn div(self, divisor: u32) -> Self {
        self.ensure_div(divisor)
    }
}

impl fmt::Display for ElementCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scalable {
            write!(f, "vscale x {}", self.min)
        } else {
            write!(f, "{}", self.min)
        }
    }
}

/// Size of a value in bits; scalable sizes are multiplied by `vscale`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TypeSize {
    min_bits: u64,
    scalable: bool,
}

impl TypeSize {
    pub const fn fixed(bits: u64) -> Self {
        Self {
            min_bits: bits,
            scalable: false,
        }
    }

    pub const fn scalable(min_bits: u64) -> Self {
        Self {
            min_bits,
            scalable: true,
        }
    }

    /// Size of `count` lanes of `lane_bits` each.
    pub const fn of_lanes(lane_bits: u32, count: ElementCount) -> Self {
        Self {
            min_bits: lane_bits as u64 * count.min() as u64,
            scalable: count.is_scalable(),
        }
    }

    pub const fn known_min_bits(self) -> u64 {
        self.min_bits
    }

    pub const fn is_scalable(self) -> bool {
        self.scalable
    }
}

impl fmt::Display for TypeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scalable {
            write!(f, "vscale x {}", self.min_bits)
        } else {
            write!(f, "{}", self.min_bits)
        }
    }
}
