//! Comparison index page: one table of links, instance types down the side,
//! regions across the top.

use std::fmt::Write;

use itertools::Itertools;

use crate::{
    instance_type::score_type,
    render::{FOOTER, ReportSet},
};

/// Renders the index page. Regions are sorted by name; instance types by
/// their classification score, so families and sizes group together.
pub fn render_index_page(reports: &ReportSet) -> String {
    let regions: Vec<&String> = reports.keys().collect();
    let instance_types: Vec<&String> = reports
        .values()
        .flat_map(|types| types.keys())
        .unique()
        .sorted_by_key(|instance_type| (score_type(instance_type), instance_type.as_str()))
        .collect();

    let mut html = String::new();
    html.push_str("<title>EC2 Payment Plan Comparisons</title>");
    html.push_str(
        r#"<link href="https://maxcdn.bootstrapcdn.com/bootstrap/3.3.2/css/bootstrap.min.css" rel="stylesheet">"#,
    );
    html.push_str("<h1>EC2 Payment Plan Comparisons</h1>");
    html.push_str(r#"<table class="table table-striped table-hover">"#);

    html.push_str("<tr><td></td>");
    for region in &regions {
        let _ = write!(html, "<th>{region}</th>");
    }
    html.push_str("</tr>");

    for instance_type in instance_types {
        let _ = write!(html, "<tr><th>{instance_type}</th>");
        for region in &regions {
            html.push_str("<td>");
            if let Some(report) = reports[*region].get(instance_type) {
                let _ = write!(html, "<a href='./{0}'>{1}</a>", report.file_name(), report.title());
            }
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }

    html.push_str("</table>");
    html.push_str(FOOTER);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{build_reports, tests::sample_index};

    #[test]
    fn test_index_links_every_pair_once() {
        let page = render_index_page(&build_reports(&sample_index()));

        assert_eq!(page.matches("<a href='./t2.micro-us-east-1.html'>").count(), 1);
        assert_eq!(page.matches("<a href='./t2.micro-us-west-2.html'>").count(), 1);
        assert_eq!(page.matches("<a href='./m1.large-us-east-1.html'>").count(), 1);
        // m1.large has no us-west-2 pricing, so its second cell stays empty.
        assert!(page.contains("<a href='./m1.large-us-east-1.html'>m1.large-us-east-1</a></td><td></td>"));
    }

    #[test]
    fn test_index_orders_types_by_score() {
        let page = render_index_page(&build_reports(&sample_index()));
        // t2.micro scores below m1.large, so its row comes first.
        let t2 = page.find("<th>t2.micro</th>").unwrap();
        let m1 = page.find("<th>m1.large</th>").unwrap();
        assert!(t2 < m1);
    }

    #[test]
    fn test_index_orders_regions_by_name() {
        let page = render_index_page(&build_reports(&sample_index()));
        let east = page.find("<th>us-east-1</th>").unwrap();
        let west = page.find("<th>us-west-2</th>").unwrap();
        assert!(east < west);
    }
}
