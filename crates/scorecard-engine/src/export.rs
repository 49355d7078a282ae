use scorecard_types::{CollegeMetric, CollegeRecord};
use std::io::Write;

use crate::compare::format_metric;
use crate::error::Result;

/// Write one CSV row per college, headed by the record's field names
pub fn write_csv<W: Write>(writer: W, records: &[CollegeRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Metrics as rows, colleges as columns
pub fn html_table(records: &[CollegeRecord]) -> String {
    let mut html = String::from("<table>\n  <thead>\n    <tr><th>Metric</th>");
    for record in records {
        html.push_str(&format!("<th>{}</th>", escape_html(&record.name)));
    }
    html.push_str("</tr>\n  </thead>\n  <tbody>\n");

    for metric in CollegeMetric::ALL {
        html.push_str(&format!("    <tr><td>{}</td>", escape_html(metric.label())));
        for record in records {
            html.push_str(&format!(
                "<td>{}</td>",
                escape_html(&format_metric(record.metric(metric)))
            ));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("  </tbody>\n</table>\n");
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
