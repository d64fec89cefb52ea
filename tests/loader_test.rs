mod common;

use std::fs;

use tarmac::load_dataset;

use common::*;

#[test]
fn test_loads_clean_dataset() {
    let dataset_dir = sample_dataset();
    let results = results_dir();

    let (dataset, summary) =
        load_dataset(dataset_dir.path(), results.path()).expect("load should succeed");

    assert_eq!(dataset.aircraft_count(), 2);
    assert_eq!(dataset.flight_count(), 3);
    assert_eq!(dataset.passenger_count(), 2);
    assert_eq!(dataset.airport_count(), 3);
    assert_eq!(dataset.reservation_count(), 2);
    assert!(!summary.had_errors);
    assert_eq!(summary.flights.accepted, 3);
    assert_eq!(summary.flights.rejected, 0);

    // no error files for a clean load
    assert!(!results.path().join("aircrafts_errors.csv").exists());
    assert!(!results.path().join("flights_errors.csv").exists());
}

#[test]
fn test_ancillary_lists_sorted_and_deduplicated() {
    let dataset_dir = sample_dataset();
    let results = results_dir();

    let (dataset, _) =
        load_dataset(dataset_dir.path(), results.path()).expect("load should succeed");

    assert_eq!(dataset.airport_codes(), ["JFK", "LIS", "OPO"]);
    assert_eq!(dataset.manufacturers(), ["Airbus", "Boeing"]);
    assert_eq!(dataset.nationalities(), ["American", "Portuguese"]);
}

#[test]
fn test_invalid_rows_logged_and_skipped() {
    let dataset_dir = sample_dataset();
    let results = results_dir();

    let bad_id = r#""AR10003","Airbus","A320","2010","180","6300""#;
    let bad_year = r#""AR-10004","Airbus","A320","2030","180","6300""#;
    let mut rows = AIRCRAFT_ROWS.to_vec();
    rows.push(bad_id);
    rows.push(bad_year);
    write_table(dataset_dir.path(), "aircrafts.csv", AIRCRAFTS_HEADER, &rows);

    let (dataset, summary) =
        load_dataset(dataset_dir.path(), results.path()).expect("load should succeed");

    assert_eq!(dataset.aircraft_count(), 2);
    assert_eq!(summary.aircraft.accepted, 2);
    assert_eq!(summary.aircraft.rejected, 2);
    assert!(summary.had_errors);

    let errors = fs::read_to_string(results.path().join("aircrafts_errors.csv"))
        .expect("error file should exist");
    let lines: Vec<&str> = errors.lines().collect();
    assert_eq!(lines, vec![AIRCRAFTS_HEADER, bad_id, bad_year]);
}

#[test]
fn test_duplicate_key_rejected() {
    let dataset_dir = sample_dataset();
    let results = results_dir();

    let duplicate = r#""AR-10001","Airbus","A350","2018","410","15000""#;
    let mut rows = AIRCRAFT_ROWS.to_vec();
    rows.push(duplicate);
    write_table(dataset_dir.path(), "aircrafts.csv", AIRCRAFTS_HEADER, &rows);

    let (dataset, summary) =
        load_dataset(dataset_dir.path(), results.path()).expect("load should succeed");

    assert_eq!(summary.aircraft.rejected, 1);
    // the first row wins; the duplicate never replaces it
    let kept = dataset.aircraft("AR-10001").expect("aircraft present");
    assert_eq!(kept.model, "A380");

    let errors = fs::read_to_string(results.path().join("aircrafts_errors.csv"))
        .expect("error file should exist");
    assert!(errors.contains(duplicate));
}

#[test]
fn test_flight_referential_failures() {
    let dataset_dir = sample_dataset();
    let results = results_dir();

    let unknown_aircraft = r#""TP00009","2024-06-03 10:00","2024-06-03 10:00","2024-06-03 11:30","2024-06-03 11:30","1","On Time","LIS","OPO","ZZ-99999","TAP","""#;
    let cancelled_with_times = r#""TP00010","2024-06-03 10:00","2024-06-03 10:00","2024-06-03 11:30","2024-06-03 11:30","1","Cancelled","LIS","OPO","AR-10001","TAP","""#;
    let mut rows = FLIGHT_ROWS.to_vec();
    rows.push(unknown_aircraft);
    rows.push(cancelled_with_times);
    write_table(dataset_dir.path(), "flights.csv", FLIGHTS_HEADER, &rows);

    let (dataset, summary) =
        load_dataset(dataset_dir.path(), results.path()).expect("load should succeed");

    assert_eq!(dataset.flight_count(), 3);
    assert_eq!(summary.flights.rejected, 2);
    assert!(dataset.flight("TP00009").is_none());
    assert!(dataset.flight("TP00010").is_none());
}

#[test]
fn test_reservation_referential_failures() {
    let dataset_dir = sample_dataset();
    let results = results_dir();

    let unknown_passenger =
        r#""R000000003","['TP00001']","999999999","1A","50.00","False","False","qr""#;
    let unknown_flight =
        r#""R000000004","['XX99999']","100000001","1A","50.00","False","False","qr""#;
    let disconnected =
        r#""R000000005","['TP00002', 'TP00002']","100000001","1A","50.00","False","False","qr""#;
    let mut rows = RESERVATION_ROWS.to_vec();
    rows.push(unknown_passenger);
    rows.push(unknown_flight);
    rows.push(disconnected);
    write_table(
        dataset_dir.path(),
        "reservations.csv",
        RESERVATIONS_HEADER,
        &rows,
    );

    let (dataset, summary) =
        load_dataset(dataset_dir.path(), results.path()).expect("load should succeed");

    assert_eq!(dataset.reservation_count(), 2);
    assert_eq!(summary.reservations.rejected, 3);

    let errors = fs::read_to_string(results.path().join("reservations_errors.csv"))
        .expect("error file should exist");
    let lines: Vec<&str> = errors.lines().collect();
    assert_eq!(lines[0], RESERVATIONS_HEADER);
    assert_eq!(
        &lines[1..],
        &[unknown_passenger, unknown_flight, disconnected]
    );
}

#[test]
fn test_referential_closure_of_accepted_rows() {
    let dataset_dir = sample_dataset();
    let results = results_dir();

    let (dataset, _) =
        load_dataset(dataset_dir.path(), results.path()).expect("load should succeed");

    for flight in dataset.iter_flights() {
        assert!(
            dataset.aircraft(&flight.aircraft_id).is_some(),
            "flight {} references missing aircraft {}",
            flight.id,
            flight.aircraft_id
        );
    }
    for reservation in dataset.iter_reservations() {
        assert!(dataset.passenger(reservation.document_no).is_some());
        for flight_id in &reservation.flight_ids {
            assert!(dataset.flight(flight_id).is_some());
        }
    }
}

#[test]
fn test_missing_file_leaves_table_empty_and_load_continues() {
    let dataset_dir = sample_dataset();
    let results = results_dir();
    fs::remove_file(dataset_dir.path().join("passengers.csv")).expect("remove passengers");

    let (dataset, summary) =
        load_dataset(dataset_dir.path(), results.path()).expect("load should succeed");

    assert_eq!(dataset.passenger_count(), 0);
    assert!(summary.had_errors);
    // every reservation now fails its passenger check
    assert_eq!(dataset.reservation_count(), 0);
    assert_eq!(summary.reservations.rejected, 2);
    // unrelated tables are unaffected
    assert_eq!(dataset.flight_count(), 3);
    assert_eq!(dataset.airport_count(), 3);
}

#[test]
fn test_missing_aircraft_file_rejects_all_flights() {
    let dataset_dir = sample_dataset();
    let results = results_dir();
    fs::remove_file(dataset_dir.path().join("aircrafts.csv")).expect("remove aircrafts");

    let (dataset, summary) =
        load_dataset(dataset_dir.path(), results.path()).expect("load should succeed");

    assert_eq!(dataset.aircraft_count(), 0);
    assert_eq!(dataset.flight_count(), 0);
    assert_eq!(summary.flights.rejected, 3);
    assert!(summary.had_errors);
}

#[test]
fn test_blank_lines_ignored() {
    let dataset_dir = sample_dataset();
    let results = results_dir();

    let mut contents = String::from(AIRCRAFTS_HEADER);
    contents.push('\n');
    contents.push('\n');
    for row in AIRCRAFT_ROWS {
        contents.push_str(row);
        contents.push_str("\n\n");
    }
    fs::write(dataset_dir.path().join("aircrafts.csv"), contents).expect("write aircrafts");

    let (dataset, summary) =
        load_dataset(dataset_dir.path(), results.path()).expect("load should succeed");
    assert_eq!(dataset.aircraft_count(), 2);
    assert_eq!(summary.aircraft.rejected, 0);
}

#[test]
fn test_traffic_conservation() {
    let dataset_dir = sample_dataset();
    let results = results_dir();

    let (dataset, _) =
        load_dataset(dataset_dir.path(), results.path()).expect("load should succeed");

    let live_pairs: u64 = dataset
        .iter_reservations()
        .flat_map(|r| r.flight_ids.iter())
        .filter(|id| {
            dataset
                .flight(id)
                .is_some_and(|f| f.status != tarmac::flights::FlightStatus::Cancelled)
        })
        .count() as u64;

    let departures: u64 = dataset.iter_traffic().map(|(_, t)| t.departures).sum();
    let arrivals: u64 = dataset.iter_traffic().map(|(_, t)| t.arrivals).sum();
    assert_eq!(departures, live_pairs);
    assert_eq!(arrivals, live_pairs);
}
