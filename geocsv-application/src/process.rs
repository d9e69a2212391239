use std::path::{Path, PathBuf};

use geocsv_core::gateways::geocode::GeoCodingGateway;

use crate::{
    entities::{DistanceUnit, Id, MapPoint, Table},
    export::{output_path, write_table},
    import::read_table,
    usecases::{self, AddressMode},
    Result,
};

/// Settings of one processing run.
#[derive(Debug, Clone, Copy)]
pub struct ProcessParams {
    pub reference_point: MapPoint,
    pub distance_unit: DistanceUnit,
    pub address_mode: AddressMode,
}

/// One fully processed output row.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub id: Id,
    pub fields: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub distance: Option<f64>,
}

/// Geocode all records of the table, one blocking request at a time,
/// preserving the input row order.
pub fn geocode_table(
    gateway: &dyn GeoCodingGateway,
    table: Table,
    params: &ProcessParams,
) -> Vec<OutputRecord> {
    let total = table.len();
    let mut failed = 0;
    let records: Vec<_> = table
        .records
        .into_iter()
        .map(|record| {
            let geocoded = usecases::geocode_record(
                gateway,
                &record.address,
                params.address_mode,
                params.reference_point,
                params.distance_unit,
            );
            if geocoded.latitude.is_none() {
                failed += 1;
                warn!("Could not geocode record {}", record.id);
            }
            OutputRecord {
                id: record.id,
                fields: record.fields,
                latitude: geocoded.latitude,
                longitude: geocoded.longitude,
                distance: geocoded.distance,
            }
        })
        .collect();
    info!(
        "Geocoded {} of {} records ({} failed)",
        total - failed,
        total,
        failed
    );
    records
}

/// Process one input file into its derived output file.
///
/// All geocoding work happens before the output file is created: a
/// failing writer (full disk, missing permission) wastes the completed
/// lookups. Known limitation of the single-pass design.
pub fn geocode_csv_file(
    gateway: &dyn GeoCodingGateway,
    input: &Path,
    params: &ProcessParams,
) -> Result<PathBuf> {
    let table = read_table(input, params.address_mode)?;
    info!("Loaded {} records from {}", table.len(), input.display());
    let headers = table.headers.clone();
    let records = geocode_table(gateway, table, params);
    let output = output_path(input);
    write_table(&output, &headers, &records)?;
    info!("Wrote {} records to {}", records.len(), output.display());
    Ok(output)
}
