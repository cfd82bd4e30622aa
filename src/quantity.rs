pub mod cost;
pub mod rate;

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// Dimensioned `f64` wrapper: `TIME` is the exponent of hours, `COST` the
/// exponent of US dollars.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Quantity<const TIME: isize, const COST: isize>(pub f64);

impl<const TIME: isize, const COST: isize> Quantity<TIME, COST> {
    pub const ZERO: Self = Self(0.0);
}

impl<const TIME: isize, const COST: isize> Mul<f64> for Quantity<TIME, COST> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl<const TIME: isize, const COST: isize> Div<f64> for Quantity<TIME, COST> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}
