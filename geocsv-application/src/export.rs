use std::path::{Path, PathBuf};

use crate::{error::AppError, process::OutputRecord};

const OUTPUT_FILE_SUFFIX: &str = "_geocode";

/// Columns appended to the original table.
pub const DERIVED_COLUMNS: [&str; 3] = ["latitude", "longitude", "distance"];

/// Derive the output file path from the input path:
/// `<input without extension>_geocode.csv`.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.push_str(OUTPUT_FILE_SUFFIX);
    name.push_str(".csv");
    input.with_file_name(name)
}

/// Serialize the processed records to a CSV file.
///
/// The columns are the original input columns followed by the derived
/// ones. Records without a resolved position emit empty values for all
/// derived columns. An existing file at `path` is overwritten without
/// warning.
pub fn write_table(
    path: &Path,
    headers: &[String],
    records: &[OutputRecord],
) -> Result<(), AppError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(headers.iter().map(String::as_str).chain(DERIVED_COLUMNS))?;
    for record in records {
        let derived = [
            format_optional(record.latitude),
            format_optional(record.longitude),
            format_optional(record.distance),
        ];
        wtr.write_record(
            record
                .fields
                .iter()
                .map(String::as_str)
                .chain(derived.iter().map(String::as_str)),
        )?;
    }
    wtr.flush()?;
    Ok(())
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(String::new, |value| value.to_string())
}
