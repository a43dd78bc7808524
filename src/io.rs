//! Recording I/O: datalogger CSV input and JSON report output.
//!
//! - `load_recording`: read a `Time(ms)`,`Distance(cm)` CSV into an ordered
//!   sample sequence.
//! - `write_json_file`: pretty-print a serializable value to disk.

use crate::types::Sample;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load a datalogger CSV file into an ordered sample sequence.
pub fn load_recording(path: &Path) -> Result<Vec<Sample>, String> {
    let file =
        fs::File::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    read_recording(file).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Read a recording from any CSV source with `Time(ms)` and `Distance(cm)`
/// headers. Row order is preserved; it is the time order of the recording.
pub fn read_recording<R: Read>(reader: R) -> Result<Vec<Sample>, String> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut samples = Vec::new();
    for record in csv_reader.deserialize() {
        let sample: Sample = record.map_err(|e| e.to_string())?;
        samples.push(sample);
    }
    Ok(samples)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
