use std::{collections::HashSet, fs::File, path::Path};

use crate::{
    entities::{Address, Record, Table},
    error::LoadError,
    usecases::AddressMode,
};

pub const ID_COLUMN: &str = "id";

#[rustfmt::skip]
const FULL_ADDRESS_COLUMNS: &[&str] =
    &["street1", "street2", "street3", "city", "state", "postalcode", "country"];
const SHORT_ADDRESS_COLUMNS: &[&str] = &["city", "state", "country"];

// Column names that the processing stage derives itself.
const RESERVED_COLUMNS: &[&str] = &["latitude", "longitude", "distance", "address"];

fn address_columns(mode: AddressMode) -> &'static [&'static str] {
    match mode {
        AddressMode::Full => FULL_ADDRESS_COLUMNS,
        AddressMode::Short => SHORT_ADDRESS_COLUMNS,
    }
}

/// Read the input table from a CSV file.
///
/// The header row must contain an `id` column and the address columns
/// referenced by the given mode. Absent values are normalized to empty
/// strings. All values are carried as literal text, so a `postalcode`
/// like `00123` keeps its leading zeros.
pub fn read_table(path: &Path, mode: AddressMode) -> Result<Table, LoadError> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);
    let headers: Vec<String> = rdr.headers()?.iter().map(ToString::to_string).collect();

    if let Some(reserved) = headers
        .iter()
        .find(|header| RESERVED_COLUMNS.contains(&header.as_str()))
    {
        return Err(LoadError::ReservedColumn(reserved.clone()));
    }
    let column = |name: &str| headers.iter().position(|header| header == name);
    let Some(id_idx) = column(ID_COLUMN) else {
        return Err(LoadError::MissingColumn(ID_COLUMN));
    };
    for &name in address_columns(mode) {
        if column(name).is_none() {
            return Err(LoadError::MissingColumn(name));
        }
    }

    let mut seen_ids = HashSet::new();
    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let fields: Vec<String> = result?.iter().map(ToString::to_string).collect();
        let id = fields[id_idx].clone();
        if id.is_empty() {
            return Err(LoadError::MissingId(row + 1));
        }
        if !seen_ids.insert(id.clone()) {
            return Err(LoadError::DuplicateId(id));
        }
        let part = |name: &str| {
            column(name)
                .map(|idx| fields[idx].as_str())
                .filter(|value| !value.is_empty())
                .map(ToString::to_string)
        };
        let address = Address {
            street1: part("street1"),
            street2: part("street2"),
            street3: part("street3"),
            city: part("city"),
            state: part("state"),
            postalcode: part("postalcode"),
            country: part("country"),
        };
        records.push(Record {
            id: id.into(),
            address,
            fields,
        });
    }
    Ok(Table { headers, records })
}
