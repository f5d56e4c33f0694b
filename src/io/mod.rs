pub mod input;
pub mod output;

pub use input::load_requirements;
pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};
