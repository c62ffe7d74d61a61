pub mod import;
pub mod render;

pub use import::{ImportReport, InputFormat, RecordImporter, Rejection};
pub use render::{render_employees, OutputFormat};
