use crate::presentation::DisplayOptions;
use crate::presentation::report::{ComparisonJson, ComparisonView};
use crate::types::OutputFormat;
use anyhow::{Context, Result, bail};
use scorecard_engine::{html_table, write_csv};
use scorecard_runtime::{CollegeSource, Config, ScorecardClient, compare_by_name, compare_pair};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub struct CompareRequest {
    pub names: Vec<String>,
    pub side_by_side: bool,
    pub csv: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub chart: Option<PathBuf>,
}

pub fn handle(data_dir: &Path, format: OutputFormat, request: CompareRequest) -> Result<()> {
    let config = Config::load(data_dir)?;
    let client = ScorecardClient::new(&config.api)?;
    execute(&client, format, &request)
}

fn execute<S>(source: &S, format: OutputFormat, request: &CompareRequest) -> Result<()>
where
    S: CollegeSource + ?Sized,
{
    if request.side_by_side {
        let [first, second] = request.names.as_slice() else {
            bail!("--side-by-side needs exactly two colleges");
        };
        let summary = compare_pair(source, first, second)?;
        match format {
            OutputFormat::Plain => println!("{}", summary),
            OutputFormat::Json => println!("{}", serde_json::json!({ "summary": summary })),
        }
        return Ok(());
    }

    let comparison = compare_by_name(source, &request.names)?;

    if let Some(path) = &request.csv {
        let file = File::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        write_csv(BufWriter::new(file), &comparison.records)?;
    }
    if let Some(path) = &request.html {
        std::fs::write(path, html_table(&comparison.records))
            .with_context(|| format!("cannot write {}", path.display()))?;
    }
    if let Some(path) = &request.chart {
        std::fs::write(path, serde_json::to_string_pretty(&comparison.chart)?)
            .with_context(|| format!("cannot write {}", path.display()))?;
    }

    match format {
        OutputFormat::Plain => {
            let options = DisplayOptions::for_stdout();
            println!(
                "{}",
                ComparisonView {
                    comparison: &comparison,
                    options: &options,
                }
            );
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&ComparisonJson::from(&comparison))?
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_types::CollegeRecord;
    use tempfile::TempDir;

    struct OneCollege;

    impl CollegeSource for OneCollege {
        fn fetch(&self, name: &str) -> scorecard_runtime::Result<CollegeRecord> {
            if name == "MIT" {
                Ok(CollegeRecord {
                    name: "MIT".to_string(),
                    tuition_in_state: Some(57986),
                    ..Default::default()
                })
            } else {
                Err(scorecard_runtime::Error::NotFound(name.to_string()))
            }
        }
    }

    fn request(names: &[&str]) -> CompareRequest {
        CompareRequest {
            names: names.iter().map(|n| n.to_string()).collect(),
            side_by_side: false,
            csv: None,
            html: None,
            chart: None,
        }
    }

    #[test]
    fn test_exports_are_written() -> Result<()> {
        let temp = TempDir::new()?;
        let mut req = request(&["MIT", "Atlantis U"]);
        req.csv = Some(temp.path().join("colleges.csv"));
        req.html = Some(temp.path().join("colleges.html"));
        req.chart = Some(temp.path().join("chart.json"));

        execute(&OneCollege, OutputFormat::Json, &req)?;

        let csv = std::fs::read_to_string(temp.path().join("colleges.csv"))?;
        assert_eq!(csv.lines().count(), 2);
        let html = std::fs::read_to_string(temp.path().join("colleges.html"))?;
        assert!(html.contains("<th>MIT</th>"));
        let chart: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(temp.path().join("chart.json"))?)?;
        assert_eq!(chart["layout"]["barmode"], "group");
        Ok(())
    }

    #[test]
    fn test_side_by_side_needs_two_names() {
        let mut req = request(&["MIT"]);
        req.side_by_side = true;
        assert!(execute(&OneCollege, OutputFormat::Plain, &req).is_err());
    }

    #[test]
    fn test_side_by_side_fails_when_either_lookup_fails() {
        let mut req = request(&["MIT", "Atlantis U"]);
        req.side_by_side = true;
        let err = execute(&OneCollege, OutputFormat::Plain, &req).unwrap_err();
        assert!(err.to_string().contains("Atlantis U"));
    }
}
