// Driving the pipeline end to end and putting results on disk

pub mod config;
pub mod pipeline;
pub mod writer;


pub use config::GeneratorConfig;
pub use pipeline::{generate, GeneratedFile, Generation, Summary, LITERALS_FILE, UNITS_DIR};
pub use writer::{check_generation, load_input, write_generation, FileReport, FileStatus};
