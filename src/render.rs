//! Static HTML report rendering: one comparison index page and one chart page
//! per (instance type, region) pair.

mod chart;
mod index;

pub use self::{chart::render_chart_page, index::render_index_page};

use std::collections::BTreeMap;

use crate::{
    pricing::PriceIndex,
    projection::{self, CostSeries},
};

/// One plan's projected series, named by its plan identifier.
pub struct PlanSeries {
    pub plan: String,
    pub points: CostSeries,
}

/// Everything needed to render one chart page.
pub struct RegionTypeReport {
    pub instance_type: String,
    pub region: String,
    pub series: Vec<PlanSeries>,
}

impl RegionTypeReport {
    pub fn title(&self) -> String {
        format!("{}-{}", self.instance_type, self.region)
    }

    pub fn file_name(&self) -> String {
        format!("{}.html", self.title())
    }
}

/// Region → instance type → report.
pub type ReportSet = BTreeMap<String, BTreeMap<String, RegionTypeReport>>;

/// Projects every plan in the index into its 36-month series.
pub fn build_reports(index: &PriceIndex) -> ReportSet {
    let mut reports = ReportSet::new();
    for (instance_type, regions) in index {
        for (region, plans) in regions {
            let series = plans
                .iter()
                .map(|(plan, record)| PlanSeries {
                    plan: plan.clone(),
                    points: projection::project(record),
                })
                .collect();
            reports.entry(region.clone()).or_default().insert(
                instance_type.clone(),
                RegionTypeReport {
                    instance_type: instance_type.clone(),
                    region: region.clone(),
                    series,
                },
            );
        }
    }
    reports
}

/// Attribution and analytics furniture shared by every page.
const FOOTER: &str = r"
<footer>By <a target='_blank' href='http://grahamc.com/'>Graham Christensen</a></footer>
<script>
  (function(i,s,o,g,r,a,m){i['GoogleAnalyticsObject']=r;i[r]=i[r]||function(){
  (i[r].q=i[r].q||[]).push(arguments)},i[r].l=1*new Date();a=s.createElement(o),
  m=s.getElementsByTagName(o)[0];a.async=1;a.src=g;m.parentNode.insertBefore(a,m)
  })(window,document,'script','//www.google-analytics.com/analytics.js','ga');

  ga('create', 'UA-34283093-1', 'auto');
  ga('send', 'pageview');

</script>
";
