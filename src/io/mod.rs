pub mod file;

pub use file::{export_json, export_to_file, import_from_file, import_json, parse_records};
