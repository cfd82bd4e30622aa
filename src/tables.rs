//! Terminal tables for the run summary and the `rates` subcommand.

use comfy_table::{Cell, CellAlignment, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    instance_type::score_type,
    pricing::{PlanTable, PriceIndex},
};

/// One row per instance type: regions covered and plans on offer.
pub fn build_summary_table(index: &PriceIndex) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Instance type", "Regions", "Plans"]);
    for (instance_type, regions) in
        index.iter().sorted_by_key(|(instance_type, _)| (score_type(instance_type), *instance_type))
    {
        let n_plans = regions.values().map(PlanTable::len).max().unwrap_or_default();
        table.add_row(vec![
            Cell::new(instance_type),
            Cell::new(regions.len()).set_alignment(CellAlignment::Right),
            Cell::new(n_plans).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Every payment plan for one (instance type, region) pair.
pub fn build_plan_table(plans: &PlanTable) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Plan", "Years", "Upfront", "Hourly", "Savings"]);
    for (plan, record) in plans {
        table.add_row(vec![
            Cell::new(plan),
            Cell::new(record.years).set_alignment(CellAlignment::Right),
            Cell::new(record.upfront).set_alignment(CellAlignment::Right),
            Cell::new(record.per_hour).set_alignment(CellAlignment::Right),
            Cell::new(
                record.savings.map_or_else(String::new, |savings| format!("{savings:.0}%")),
            )
            .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::sample_index;

    #[test]
    fn test_summary_orders_types_by_score() {
        let rendered = build_summary_table(&sample_index()).to_string();
        let t2 = rendered.find("t2.micro").unwrap();
        let m1 = rendered.find("m1.large").unwrap();
        assert!(t2 < m1);
    }

    #[test]
    fn test_plan_table_lists_every_plan() {
        let index = sample_index();
        let rendered = build_plan_table(&index["t2.micro"]["us-east-1"]).to_string();
        assert!(rendered.contains("ondemand"));
        assert!(rendered.contains("partial-yrTerm3"));
        assert!(rendered.contains("20%"));
    }
}
