//! Rate extraction: flattens the nested pricing document into a price index.

pub mod document;

use std::collections::BTreeMap;

use crate::{
    prelude::*,
    pricing::document::{PricingDocument, PurchaseOption, Term},
    quantity::{
        cost::Usd,
        rate::{HOURS_PER_MONTH, UsdPerHour},
    },
};

pub const ONDEMAND_PLAN: &str = "ondemand";

/// Normalized pricing for one payment plan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateRecord {
    /// Commitment length in years; `0` means on-demand.
    pub years: u32,

    /// Upfront fee charged at the start of every commitment cycle.
    pub upfront: Usd,

    pub per_hour: UsdPerHour,

    /// Stated savings over on-demand, in percent, copied verbatim from the feed.
    pub savings: Option<f64>,
}

/// Plan identifier → rate record, for one (instance type, region) pair.
pub type PlanTable = BTreeMap<String, RateRecord>;

/// Instance type → region → plan table. Built once, read-only afterwards.
pub type PriceIndex = BTreeMap<String, BTreeMap<String, PlanTable>>;

/// Walks `config.regions[] → instanceTypes[] → terms[]` and builds the index.
///
/// Any purchase option missing a required value column aborts the whole
/// extraction: the feed claims to offer the plan, so a hole in it is a data
/// error rather than an absent plan.
pub fn extract(document: &PricingDocument) -> Result<PriceIndex> {
    let mut index = PriceIndex::new();
    for region in &document.config.regions {
        for instance in &region.instance_types {
            let plans = extract_plans(&instance.terms).with_context(|| {
                format!("bad pricing data for {} in {}", instance.instance_type, region.region)
            })?;
            index
                .entry(instance.instance_type.clone())
                .or_default()
                .insert(region.region.clone(), plans);
        }
    }
    Ok(index)
}

fn extract_plans(terms: &[Term]) -> Result<PlanTable> {
    let mut plans = PlanTable::new();
    for term in terms {
        let on_demand = term.on_demand_hourly.first().context("missing on-demand hourly price")?;
        plans.insert(ONDEMAND_PLAN.to_owned(), RateRecord {
            years: 0,
            upfront: Usd::ZERO,
            per_hour: UsdPerHour::from(on_demand.prices.usd),
            savings: Some(0.0),
        });
        for option in &term.purchase_options {
            let record = reserved_record(term, option).with_context(|| {
                format!("purchase option `{}` of term `{}`", option.purchase_option, term.term)
            })?;
            plans.insert(format!("{}-{}", option.purchase_option, term.term), record);
        }
    }
    Ok(plans)
}

fn reserved_record(term: &Term, option: &PurchaseOption) -> Result<RateRecord> {
    let monthly = value_column(option, "monthlyStar")?;
    Ok(RateRecord {
        years: term_years(&term.term)?,
        upfront: Usd::from(value_column(option, "upfront")?),
        per_hour: UsdPerHour::from(monthly / HOURS_PER_MONTH.0),
        savings: option.savings_over_od,
    })
}

fn value_column(option: &PurchaseOption, name: &str) -> Result<f64> {
    option
        .value_columns
        .iter()
        .find(|column| column.name == name)
        .map(|column| column.prices.usd)
        .with_context(|| format!("missing `{name}` value column"))
}

/// The commitment length is encoded as the final character of the term label.
fn term_years(term: &str) -> Result<u32> {
    term.chars()
        .last()
        .and_then(|last| last.to_digit(10))
        .with_context(|| format!("term `{term}` does not end in a digit"))
}
