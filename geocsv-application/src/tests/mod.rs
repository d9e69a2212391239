use std::{collections::HashMap, fs, path::PathBuf};

use geocsv_core::gateways::geocode::GeoCodingGateway;

use crate::{
    entities::{DistanceUnit, MapPoint},
    error::AppError,
    prelude::*,
    usecases::AddressMode,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Resolves exactly the addresses it was given.
struct GeoCoderStub(HashMap<String, (f64, f64)>);

impl GeoCoderStub {
    fn resolving<const N: usize>(entries: [(&str, (f64, f64)); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(address, coords)| (address.to_string(), coords))
                .collect(),
        )
    }

    fn resolving_nothing() -> Self {
        Self(HashMap::new())
    }
}

impl GeoCodingGateway for GeoCoderStub {
    fn resolve_address_lat_lng(&self, address: &str) -> Option<(f64, f64)> {
        self.0.get(address).copied()
    }
}

/// Resolves every address to the same position.
struct FixedGeoCoder(f64, f64);

impl GeoCodingGateway for FixedGeoCoder {
    fn resolve_address_lat_lng(&self, _address: &str) -> Option<(f64, f64)> {
        Some((self.0, self.1))
    }
}

fn glasgow_params() -> ProcessParams {
    ProcessParams {
        reference_point: MapPoint::try_from_lat_lng_deg(55.8668, -4.2500).unwrap(),
        distance_unit: DistanceUnit::Miles,
        address_mode: AddressMode::Short,
    }
}

fn write_input(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("members.csv");
    fs::write(&path, content).unwrap();
    path
}

fn read_output(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(Into::into).collect();
    let rows = rdr
        .records()
        .map(|row| row.unwrap().iter().map(Into::into).collect())
        .collect();
    (headers, rows)
}

#[test]
fn geocode_short_address_file() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "id,city,state,country\n1,Glasgow,,UK\n");
    let gateway = GeoCoderStub::resolving([("Glasgow UK", (55.8642, -4.2518))]);

    let output = geocode_csv_file(&gateway, &input, &glasgow_params()).unwrap();

    assert_eq!(dir.path().join("members_geocode.csv"), output);
    let (headers, rows) = read_output(&output);
    assert_eq!(
        vec!["id", "city", "state", "country", "latitude", "longitude", "distance"],
        headers
    );
    assert_eq!(1, rows.len());
    let row = &rows[0];
    assert_eq!(["1", "Glasgow", "", "UK"], row[..4]);
    assert_eq!("55.8642", row[4]);
    assert_eq!("-4.2518", row[5]);
    let distance: f64 = row[6].parse().unwrap();
    assert!((distance - 0.1927).abs() < 1e-3);
}

#[test]
fn unresolvable_records_have_empty_derived_fields() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "id,city,state,country\n1,Glasgow,,UK\n");
    let gateway = GeoCoderStub::resolving_nothing();

    let output = geocode_csv_file(&gateway, &input, &glasgow_params()).unwrap();

    let (_, rows) = read_output(&output);
    assert_eq!(1, rows.len());
    assert_eq!(["1", "Glasgow", "", "UK", "", "", ""], rows[0][..]);
}

#[test]
fn row_count_order_and_ids_are_preserved() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "id,city,state,country\n\
         42,Glasgow,,UK\n\
         7,Atlantis,,\n\
         19,Edinburgh,,UK\n",
    );
    let gateway = GeoCoderStub::resolving([
        ("Glasgow UK", (55.8642, -4.2518)),
        ("Edinburgh UK", (55.9533, -3.1883)),
    ]);

    let output = geocode_csv_file(&gateway, &input, &glasgow_params()).unwrap();

    let (_, rows) = read_output(&output);
    let ids: Vec<_> = rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(["42", "7", "19"], ids[..]);
    // the unresolvable row in the middle is kept, with empty fields
    assert_eq!(["", "", ""], rows[1][4..]);
    assert!(!rows[0][6].is_empty());
    assert!(!rows[2][6].is_empty());
}

#[test]
fn records_resolving_to_the_reference_point_have_distance_zero() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "id,city,state,country\n1,Glasgow,,UK\n2,Perth,,UK\n",
    );
    let params = glasgow_params();
    let gateway = FixedGeoCoder(
        params.reference_point.lat_deg(),
        params.reference_point.lng_deg(),
    );

    let output = geocode_csv_file(&gateway, &input, &params).unwrap();

    let (_, rows) = read_output(&output);
    assert_eq!(2, rows.len());
    for row in &rows {
        assert_eq!("0", row[6]);
    }
}

#[test]
fn full_address_mode_round_trip_keeps_all_columns() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "id,street1,street2,street3,city,state,postalcode,country,member-since\n\
         1,71 Renfield St,,,Glasgow,,00123,UK,2019\n",
    );
    let gateway = GeoCoderStub::resolving([("71 Renfield St Glasgow 00123 UK", (55.8642, -4.2518))]);
    let params = ProcessParams {
        address_mode: AddressMode::Full,
        ..glasgow_params()
    };

    let output = geocode_csv_file(&gateway, &input, &params).unwrap();

    let (headers, rows) = read_output(&output);
    assert_eq!(
        vec![
            "id",
            "street1",
            "street2",
            "street3",
            "city",
            "state",
            "postalcode",
            "country",
            "member-since",
            "latitude",
            "longitude",
            "distance"
        ],
        headers
    );
    // untouched original values, including the literal postal code
    assert_eq!("00123", rows[0][6]);
    assert_eq!("2019", rows[0][8]);
    assert_eq!("55.8642", rows[0][9]);
}

#[test]
fn existing_output_file_is_overwritten() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "id,city,state,country\n1,Glasgow,,UK\n");
    let stale = dir.path().join("members_geocode.csv");
    fs::write(&stale, "stale content\n").unwrap();
    let gateway = GeoCoderStub::resolving_nothing();

    let output = geocode_csv_file(&gateway, &input, &glasgow_params()).unwrap();

    assert_eq!(stale, output);
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("id,city,state,country,latitude,longitude,distance"));
}

#[test]
fn load_failure_aborts_before_any_output_is_written() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "id,city,state,country\n1,Glasgow,,UK\n1,Perth,,UK\n");

    let result = geocode_csv_file(
        &GeoCoderStub::resolving_nothing(),
        &input,
        &glasgow_params(),
    );

    assert!(matches!(result, Err(AppError::Load(_))));
    assert!(!dir.path().join("members_geocode.csv").exists());
}
