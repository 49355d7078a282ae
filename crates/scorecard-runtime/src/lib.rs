// Runtime module - everything around the trace pipeline that touches the
// outside world: config files, the Scorecard API, recorded traces, uploads

pub mod client;
pub mod compare;
pub mod config;
pub mod error;
pub mod replay;
pub mod session;
pub mod upload;

pub use client::{CollegeSource, ScorecardClient, parse_schools_response};
pub use compare::{Comparison, MAX_COLLEGES, compare_by_name, compare_pair};
pub use config::{Config, resolve_data_dir};
pub use error::{Error, Result};
pub use replay::ReplayAgent;
pub use session::ChatSession;
pub use upload::upload_file;
