pub mod college;
pub mod error;
pub mod executor;
pub mod message;
pub mod step;
pub mod trace;

pub use college::*;
pub use error::{Error, Result};
pub use executor::*;
pub use message::*;
pub use step::*;
pub use trace::*;
