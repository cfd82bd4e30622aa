use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Usd};

/// US dollars per hour.
pub type UsdPerHour = Quantity<-1, 1>;

/// Plain duration in hours.
pub type Hours = Quantity<1, 0>;

/// The projection works on fixed 720-hour months (30 days × 24 hours).
pub const HOURS_PER_MONTH: Hours = Quantity(720.0);

impl Mul<Hours> for UsdPerHour {
    type Output = Usd;

    fn mul(self, rhs: Hours) -> Usd {
        Quantity(self.0 * rhs.0)
    }
}

impl Display for UsdPerHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.5}/hr", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_rate_times_hours() {
        assert_abs_diff_eq!((UsdPerHour::from(0.02) * HOURS_PER_MONTH).0, 14.4);
    }
}
