//! Cumulative 3-year cost projection, sampled monthly.

use crate::{
    pricing::RateRecord,
    quantity::{cost::Usd, rate::HOURS_PER_MONTH},
};

pub const PROJECTION_YEARS: u32 = 3;
pub const MONTHS_PER_YEAR: u32 = 12;

/// Cumulative spend at the end of each of the 36 projected months.
pub type CostSeries = Vec<Usd>;

/// Projects the cumulative spend of one plan over 36 months.
///
/// The upfront fee recurs at the start of every commitment cycle, not only
/// once: a 1-year plan pays it in years 0, 1 and 2, a 3-year plan only in
/// year 0. The accumulator stays unrounded; only the emitted points are
/// rounded to mills.
pub fn project(record: &RateRecord) -> CostSeries {
    let monthly = record.per_hour * HOURS_PER_MONTH;
    let mut spent = Usd::ZERO;
    let mut series = CostSeries::with_capacity((PROJECTION_YEARS * MONTHS_PER_YEAR) as usize);
    for year in 0..PROJECTION_YEARS {
        if record.years > 0 && year % record.years == 0 {
            spent += record.upfront;
        }
        for _ in 0..MONTHS_PER_YEAR {
            spent += monthly;
            series.push(spent.round_to_mills());
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::rate::UsdPerHour;

    fn on_demand(per_hour: f64) -> RateRecord {
        RateRecord {
            years: 0,
            upfront: Usd::ZERO,
            per_hour: UsdPerHour::from(per_hour),
            savings: Some(0.0),
        }
    }

    fn reserved(years: u32, upfront: f64, per_hour: f64) -> RateRecord {
        RateRecord {
            years,
            upfront: Usd::from(upfront),
            per_hour: UsdPerHour::from(per_hour),
            savings: None,
        }
    }

    #[test]
    fn test_on_demand_increases_by_monthly_cost() {
        let series = project(&on_demand(0.02));
        assert_eq!(series.len(), 36);
        for (month, point) in series.iter().enumerate() {
            let expected = 0.02 * 720.0 * (month + 1) as f64;
            assert_abs_diff_eq!(point.0, expected, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_one_year_commitment_pays_upfront_every_year() {
        let series = project(&reserved(1, 100.0, 0.01));
        let monthly = 0.01 * 720.0;
        // Upfront lands on months 1, 13 and 25.
        assert_abs_diff_eq!(series[0].0, 100.0 + monthly, epsilon = 1e-3);
        assert_abs_diff_eq!(series[12].0, 200.0 + 13.0 * monthly, epsilon = 1e-3);
        assert_abs_diff_eq!(series[24].0, 300.0 + 25.0 * monthly, epsilon = 1e-3);
        assert_abs_diff_eq!(series[35].0, 300.0 + 36.0 * monthly, epsilon = 1e-3);
    }

    #[test]
    fn test_three_year_commitment_pays_upfront_once() {
        let series = project(&reserved(3, 100.0, 15.0 / 720.0));
        assert_abs_diff_eq!(series[0].0, 115.0, epsilon = 1e-3);
        assert_abs_diff_eq!(series[35].0, 100.0 + 36.0 * 15.0, epsilon = 1e-3);
    }

    #[test]
    fn test_commitment_not_dividing_horizon() {
        // 2 years do not divide the 3-year horizon; the modulo check still
        // charges the upfront in years 0 and 2.
        let series = project(&reserved(2, 50.0, 0.0));
        assert_abs_diff_eq!(series[0].0, 50.0);
        assert_abs_diff_eq!(series[23].0, 50.0);
        assert_abs_diff_eq!(series[24].0, 100.0);
    }

    #[test]
    fn test_series_is_non_decreasing_and_mill_rounded() {
        let series = project(&reserved(1, 33.333_444, 0.012_345));
        assert_eq!(series.len(), 36);
        for window in series.windows(2) {
            assert!(window[0] <= window[1]);
        }
        for point in series {
            assert_abs_diff_eq!(point.0, point.round_to_mills().0);
        }
    }
}
