use scorecard_types::{CollegeMetric, CollegeRecord};

/// Text report listing every metric for every college
pub fn comparison_report(records: &[CollegeRecord]) -> String {
    let names = records
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut report = format!("Comparison between {}:\n\n", names);
    for metric in CollegeMetric::ALL {
        report.push_str(&format!("{}:\n", metric.report_heading()));
        for record in records {
            report.push_str(&format!(
                "  {}: {}\n",
                record.name,
                format_metric(record.metric(metric))
            ));
        }
        report.push('\n');
    }
    report
}

/// Markdown summary of two colleges, one metric per paragraph
pub fn side_by_side(first: &CollegeRecord, second: &CollegeRecord) -> String {
    let rows: [(&str, CollegeMetric, &str); 6] = [
        ("Tuition (In-State)", CollegeMetric::TuitionInState, "$"),
        ("Tuition (Out-of-State)", CollegeMetric::TuitionOutOfState, "$"),
        ("SAT Score", CollegeMetric::SatScore, ""),
        ("ACT Score", CollegeMetric::ActScore, ""),
        ("Acceptance Rate", CollegeMetric::AcceptanceRate, ""),
        ("Student Size", CollegeMetric::StudentSize, ""),
    ];

    let mut out = format!("Comparison of {} and {}:\n\n", first.name, second.name);
    let blocks = rows
        .iter()
        .map(|(title, metric, prefix)| {
            format!(
                "**{}:**\n{}: {}  |  {}: {}",
                title,
                first.name,
                with_prefix(prefix, first.metric(*metric)),
                second.name,
                with_prefix(prefix, second.metric(*metric)),
            )
        })
        .collect::<Vec<_>>();
    out.push_str(&blocks.join("\n\n"));
    out
}

/// Integers print without a fractional part; missing values print `N/A`
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        Some(v) => format!("{}", v),
        None => "N/A".to_string(),
    }
}

fn with_prefix(prefix: &str, value: Option<f64>) -> String {
    match value {
        Some(_) => format!("{}{}", prefix, format_metric(value)),
        None => format_metric(None),
    }
}
