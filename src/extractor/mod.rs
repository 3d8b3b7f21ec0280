pub mod log_writer;
pub mod renderer;

pub use log_writer::{LogWriter, PlanetLog, PlannedWrite, SplitReport, WrittenFile, PLANET_LOGS};
pub use renderer::render_value;
