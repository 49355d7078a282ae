use serde::{Deserialize, Serialize};

/// Statistics for one institution as returned by the College Scorecard API.
///
/// Numeric fields are optional: the API reports `null` for schools that do
/// not publish a figure (e.g. test-optional schools have no SAT average).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollegeRecord {
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub student_size: Option<u64>,
    #[serde(default)]
    pub ownership: Option<u8>,
    #[serde(default)]
    pub sat_score: Option<f64>,
    #[serde(default)]
    pub act_score: Option<f64>,
    #[serde(default)]
    pub acceptance_rate: Option<f64>,
    #[serde(default)]
    pub tuition_in_state: Option<u64>,
    #[serde(default)]
    pub tuition_out_of_state: Option<u64>,
}

impl CollegeRecord {
    pub fn ownership_label(&self) -> Option<&'static str> {
        match self.ownership? {
            1 => Some("Public"),
            2 => Some("Private nonprofit"),
            3 => Some("Private for-profit"),
            _ => None,
        }
    }

    pub fn location(&self) -> Option<String> {
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
            (Some(city), None) => Some(city.clone()),
            (None, Some(state)) => Some(state.clone()),
            (None, None) => None,
        }
    }

    pub fn metric(&self, metric: CollegeMetric) -> Option<f64> {
        match metric {
            CollegeMetric::TuitionInState => self.tuition_in_state.map(|v| v as f64),
            CollegeMetric::TuitionOutOfState => self.tuition_out_of_state.map(|v| v as f64),
            CollegeMetric::SatScore => self.sat_score,
            CollegeMetric::ActScore => self.act_score,
            CollegeMetric::AcceptanceRate => self.acceptance_rate,
            CollegeMetric::StudentSize => self.student_size.map(|v| v as f64),
        }
    }
}

/// Metrics compared across colleges, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollegeMetric {
    TuitionInState,
    TuitionOutOfState,
    SatScore,
    ActScore,
    AcceptanceRate,
    StudentSize,
}

impl CollegeMetric {
    pub const ALL: [CollegeMetric; 6] = [
        CollegeMetric::TuitionInState,
        CollegeMetric::TuitionOutOfState,
        CollegeMetric::SatScore,
        CollegeMetric::ActScore,
        CollegeMetric::AcceptanceRate,
        CollegeMetric::StudentSize,
    ];

    /// Field name in `CollegeRecord` (and CSV header)
    pub fn key(&self) -> &'static str {
        match self {
            CollegeMetric::TuitionInState => "tuition_in_state",
            CollegeMetric::TuitionOutOfState => "tuition_out_of_state",
            CollegeMetric::SatScore => "sat_score",
            CollegeMetric::ActScore => "act_score",
            CollegeMetric::AcceptanceRate => "acceptance_rate",
            CollegeMetric::StudentSize => "student_size",
        }
    }

    /// Human label used on chart axes
    pub fn label(&self) -> &'static str {
        match self {
            CollegeMetric::TuitionInState => "Tuition (In-state)",
            CollegeMetric::TuitionOutOfState => "Tuition (Out-of-state)",
            CollegeMetric::SatScore => "SAT Score",
            CollegeMetric::ActScore => "ACT Score",
            CollegeMetric::AcceptanceRate => "Acceptance Rate",
            CollegeMetric::StudentSize => "Student Size",
        }
    }

    /// Title-cased field name, as used in the text report ("Sat Score")
    pub fn report_heading(&self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
