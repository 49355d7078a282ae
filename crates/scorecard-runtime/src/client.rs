use std::time::Duration;

use scorecard_types::CollegeRecord;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::{Error, Result};

/// Anything that can look up a college by name
pub trait CollegeSource {
    fn fetch(&self, name: &str) -> Result<CollegeRecord>;
}

/// API field paths requested for every lookup, in `fields=` order
pub const SCORECARD_FIELDS: [&str; 10] = [
    "school.name",
    "school.city",
    "school.state",
    "school.student.size",
    "school.ownership",
    "school.sat_scores.average.overall",
    "school.act_scores.average.overall",
    "school.admission_rate.overall",
    "school.cost.tuition.in_state",
    "school.cost.tuition.out_of_state",
];

/// Blocking client for the College Scorecard `schools` endpoint.
///
/// The first matching school wins. There is no caching and no retry.
pub struct ScorecardClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl ScorecardClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            Error::Config(format!(
                "no API key configured; set api.api_key or {}",
                crate::config::API_KEY_ENV
            ))
        })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn schools_url(&self) -> String {
        format!("{}/v1/schools", self.base_url)
    }
}

impl CollegeSource for ScorecardClient {
    fn fetch(&self, name: &str) -> Result<CollegeRecord> {
        tracing::debug!(college = name, "fetching college data");

        let fields = SCORECARD_FIELDS.join(",");
        let resp = self
            .client
            .get(self.schools_url())
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("school.name", name),
                ("fields", fields.as_str()),
            ])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(Error::Api(format!("{}: {}", status, body)));
        }

        let body: Value = resp.json()?;
        parse_schools_response(&body, name)
    }
}

/// Extract the first result of a `schools` response.
///
/// Accepts both the dotted-key layout the API uses with `fields=`
/// (`{"school.name": ..}`) and the nested layout (`{"school": {"name": ..}}`).
pub fn parse_schools_response(body: &Value, query: &str) -> Result<CollegeRecord> {
    let results = body
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Api("response has no results array".to_string()))?;

    let first = results
        .first()
        .ok_or_else(|| Error::NotFound(query.to_string()))?;

    let name = lookup(first, "school.name")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Api("result has no school.name".to_string()))?;

    Ok(CollegeRecord {
        name: name.to_string(),
        city: lookup_str(first, "school.city"),
        state: lookup_str(first, "school.state"),
        student_size: lookup_u64(first, "school.student.size"),
        ownership: lookup_u64(first, "school.ownership").and_then(|v| u8::try_from(v).ok()),
        sat_score: lookup_f64(first, "school.sat_scores.average.overall"),
        act_score: lookup_f64(first, "school.act_scores.average.overall"),
        acceptance_rate: lookup_f64(first, "school.admission_rate.overall"),
        tuition_in_state: lookup_u64(first, "school.cost.tuition.in_state"),
        tuition_out_of_state: lookup_u64(first, "school.cost.tuition.out_of_state"),
    })
}

fn lookup<'a>(result: &'a Value, path: &str) -> Option<&'a Value> {
    if let Some(value) = result.get(path) {
        return Some(value);
    }
    path.split('.')
        .try_fold(result, |node, key| node.get(key))
}

fn lookup_str(result: &Value, path: &str) -> Option<String> {
    lookup(result, path)?.as_str().map(str::to_string)
}

fn lookup_f64(result: &Value, path: &str) -> Option<f64> {
    lookup(result, path)?.as_f64()
}

fn lookup_u64(result: &Value, path: &str) -> Option<u64> {
    let value = lookup(result, path)?;
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|v| *v >= 0.0).map(|v| v.round() as u64))
}
