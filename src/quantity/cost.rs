use std::fmt::{Display, Formatter};

use crate::quantity::Quantity;

/// US dollars.
pub type Usd = Quantity<0, 1>;

impl Usd {
    /// Round the amount to [mills][1]: chart points carry 3 decimal places.
    ///
    /// [1]: https://en.wikipedia.org/wiki/Mill_(currency)
    pub fn round_to_mills(self) -> Self {
        Self((self.0 * 1000.0).round() / 1000.0)
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.3}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_round_to_mills() {
        assert_abs_diff_eq!(Usd::from(0.0015).round_to_mills().0, 0.002);
        assert_abs_diff_eq!(Usd::from(14.400_4).round_to_mills().0, 14.4);
    }
}
