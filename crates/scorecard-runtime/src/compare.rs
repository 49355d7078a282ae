use scorecard_engine::{ChartFigure, comparison_chart, comparison_report, side_by_side};
use scorecard_types::CollegeRecord;

use crate::client::CollegeSource;
use crate::{Error, Result};

pub const MAX_COLLEGES: usize = 3;

/// Result of comparing colleges looked up by name
#[derive(Debug, Clone)]
pub struct Comparison {
    pub records: Vec<CollegeRecord>,
    pub report: String,
    pub chart: ChartFigure,
    /// Names that could not be fetched, with the reason
    pub skipped: Vec<(String, String)>,
}

/// Fetch up to three colleges and build the report and chart.
///
/// Blank names are ignored. A college that cannot be fetched is skipped; the
/// comparison only fails when none could be fetched.
pub fn compare_by_name<S>(source: &S, names: &[String]) -> Result<Comparison>
where
    S: CollegeSource + ?Sized,
{
    let names: Vec<&str> = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();

    if names.is_empty() {
        return Err(Error::InvalidOperation(
            "at least one college name is required".to_string(),
        ));
    }
    if names.len() > MAX_COLLEGES {
        return Err(Error::InvalidOperation(format!(
            "at most {} colleges can be compared, got {}",
            MAX_COLLEGES,
            names.len()
        )));
    }

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    for name in names {
        match source.fetch(name) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(college = name, error = %err, "skipping college");
                skipped.push((name.to_string(), err.to_string()));
            }
        }
    }

    if records.is_empty() {
        return Err(Error::InvalidOperation(
            "none of the requested colleges could be fetched".to_string(),
        ));
    }

    Ok(Comparison {
        report: comparison_report(&records),
        chart: comparison_chart(&records),
        records,
        skipped,
    })
}

/// Two-college markdown summary; either lookup failing fails the comparison
pub fn compare_pair<S>(source: &S, first: &str, second: &str) -> Result<String>
where
    S: CollegeSource + ?Sized,
{
    let a = source.fetch(first)?;
    let b = source.fetch(second)?;
    Ok(side_by_side(&a, &b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct StaticSource(HashMap<&'static str, CollegeRecord>);

    impl StaticSource {
        fn new() -> Self {
            let mut map = HashMap::new();
            for (name, tuition) in [("MIT", 57986), ("Stanford", 58416)] {
                map.insert(
                    name,
                    CollegeRecord {
                        name: name.to_string(),
                        tuition_in_state: Some(tuition),
                        ..Default::default()
                    },
                );
            }
            Self(map)
        }
    }

    impl CollegeSource for StaticSource {
        fn fetch(&self, name: &str) -> Result<CollegeRecord> {
            self.0
                .get(name)
                .cloned()
                .ok_or_else(|| Error::NotFound(name.to_string()))
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compare_builds_report_and_chart() {
        let comparison = compare_by_name(&StaticSource::new(), &names(&["MIT", "Stanford"])).unwrap();
        assert_eq!(comparison.records.len(), 2);
        assert!(comparison.report.starts_with("Comparison between MIT, Stanford:"));
        assert_eq!(comparison.chart.data.len(), 2);
        assert!(comparison.skipped.is_empty());
    }

    #[test]
    fn test_failed_fetch_is_skipped() {
        let comparison =
            compare_by_name(&StaticSource::new(), &names(&["MIT", "Atlantis U", " "])).unwrap();
        assert_eq!(comparison.records.len(), 1);
        assert_eq!(comparison.skipped.len(), 1);
        assert_eq!(comparison.skipped[0].0, "Atlantis U");
    }

    #[test]
    fn test_nothing_fetched_is_an_error() {
        assert!(matches!(
            compare_by_name(&StaticSource::new(), &names(&["Atlantis U"])),
            Err(Error::InvalidOperation(_))
        ));
        assert!(matches!(
            compare_by_name(&StaticSource::new(), &names(&["", "  "])),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_more_than_three_is_rejected() {
        let result = compare_by_name(&StaticSource::new(), &names(&["MIT", "MIT", "MIT", "MIT"]));
        assert!(matches!(result, Err(Error::InvalidOperation(_))));
    }

    #[test]
    fn test_compare_pair() {
        let text = compare_pair(&StaticSource::new(), "MIT", "Stanford").unwrap();
        assert!(text.starts_with("Comparison of MIT and Stanford:"));
        assert!(text.contains("MIT: $57986  |  Stanford: $58416"));

        assert!(matches!(
            compare_pair(&StaticSource::new(), "MIT", "Atlantis U"),
            Err(Error::NotFound(_))
        ));
    }
}
