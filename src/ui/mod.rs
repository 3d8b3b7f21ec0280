pub mod output;

pub use output::{completion_line, OutputFormatter, OutputMode};
