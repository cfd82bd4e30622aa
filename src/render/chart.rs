//! Chart page: a Highcharts specification embedded in a static HTML shell.

use serde::Serialize;

use crate::{
    prelude::*,
    projection::{MONTHS_PER_YEAR, PROJECTION_YEARS},
    quantity::cost::Usd,
    render::{FOOTER, RegionTypeReport},
};

#[derive(Serialize)]
struct ChartSpec {
    tooltip: Tooltip,
    title: Text,

    #[serde(rename = "xAxis")]
    x_axis: Axis,

    #[serde(rename = "yAxis")]
    y_axis: Axis,

    series: Vec<ChartSeries>,
}

#[derive(Serialize)]
struct Tooltip {
    shared: bool,
}

#[derive(Serialize)]
struct Text {
    text: String,
}

#[derive(Serialize)]
struct Axis {
    title: Text,

    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<u32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
}

#[derive(Serialize)]
struct ChartSeries {
    name: String,
    data: Vec<Usd>,
}

impl From<&RegionTypeReport> for ChartSpec {
    fn from(report: &RegionTypeReport) -> Self {
        Self {
            tooltip: Tooltip { shared: true },
            title: Text {
                text: format!(
                    "Cumulative Cost of {} in {} on EC2",
                    report.instance_type, report.region
                ),
            },
            x_axis: Axis {
                title: Text { text: "months".to_owned() },
                categories: Some((1..=PROJECTION_YEARS * MONTHS_PER_YEAR).collect()),
                min: None,
            },
            y_axis: Axis {
                title: Text { text: "USD".to_owned() },
                categories: None,
                min: Some(0.0),
            },
            series: report
                .series
                .iter()
                .map(|series| ChartSeries {
                    name: series.plan.clone(),
                    data: series.points.clone(),
                })
                .collect(),
        }
    }
}

/// Renders one chart page. The chart itself is drawn client-side by
/// Highcharts from the embedded specification.
pub fn render_chart_page(report: &RegionTypeReport) -> Result<String> {
    let spec = serde_json::to_string_pretty(&ChartSpec::from(report))
        .with_context(|| format!("failed to serialize the chart for `{}`", report.title()))?;
    let container = format!("container-{}", report.title().replace('.', "-"));
    Ok(format!(
        r#"<title>Cumulative Cost of {instance_type} in {region} on EC2</title>
<script type="text/javascript" src="https://code.jquery.com/jquery-1.9.1.js"></script>
<script src="http://code.highcharts.com/highcharts.js"></script>
<script src="http://code.highcharts.com/modules/exporting.js"></script>
<script>$(function () {{$('#{container}').highcharts({spec});}});</script>
<div id='{container}' style='height: 100%; width: 100%;'></div>
{FOOTER}"#,
        instance_type = report.instance_type,
        region = report.region,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{build_reports, tests::sample_index};

    #[test]
    fn test_chart_page() -> Result {
        let reports = build_reports(&sample_index());
        let page = render_chart_page(&reports["us-east-1"]["t2.micro"])?;

        assert!(page.contains("<title>Cumulative Cost of t2.micro in us-east-1 on EC2</title>"));
        // Dots make for awkward element ids.
        assert!(page.contains("container-t2-micro-us-east-1"));
        assert!(page.contains(r#""name": "ondemand""#));
        assert!(page.contains(r#""name": "partial-yrTerm3""#));
        assert!(page.contains("highcharts.js"));
        Ok(())
    }

    #[test]
    fn test_chart_spec_data() -> Result {
        let reports = build_reports(&sample_index());
        let spec = ChartSpec::from(&reports["us-east-1"]["t2.micro"]);

        assert_eq!(spec.x_axis.categories.as_ref().map(Vec::len), Some(36));
        for series in &spec.series {
            assert_eq!(series.data.len(), 36);
        }
        let value = serde_json::to_value(&spec)?;
        // Newtype costs serialize as bare numbers.
        assert_eq!(value["series"][0]["data"][0], serde_json::json!(14.4));
        Ok(())
    }
}
