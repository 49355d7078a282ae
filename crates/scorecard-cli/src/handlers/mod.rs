pub mod compare;
pub mod config;
pub mod run;
pub mod upload;
