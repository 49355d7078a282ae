pub mod message;
pub mod options;
pub mod report;

pub use message::MessageView;
pub use options::DisplayOptions;
