//! Shared fixtures for the integration tests: a small but fully
//! cross-referenced dataset written to a temporary directory.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const AIRCRAFTS_HEADER: &str = r#""id","manufacturer","model","year","capacity","range""#;
pub const AIRPORTS_HEADER: &str =
    r#""code","name","city","country","latitude","longitude","icao","type""#;
pub const FLIGHTS_HEADER: &str = r#""id","schedule_departure_date","departure_date","schedule_arrival_date","arrival_date","gate","status","origin","destination","aircraft_id","airline","tracking_url""#;
pub const PASSENGERS_HEADER: &str = r#""document_no","first_name","last_name","date_of_birth","nationality","gender","email","phone","address","photo""#;
pub const RESERVATIONS_HEADER: &str = r#""id","flight_ids","document_no","seat","price","extra_luggage","priority_boarding","qr_code""#;

pub const AIRCRAFT_ROWS: &[&str] = &[
    r#""AR-10001","Airbus","A380","2005","853","15200""#,
    r#""BO-20001","Boeing","747","1998","416","13450""#,
];

pub const AIRPORT_ROWS: &[&str] = &[
    r#""LIS","Lisbon Airport","Lisbon","Portugal","38.7742","-9.1342","LPPT","large_airport""#,
    r#""OPO","Porto Airport","Porto","Portugal","41.2481","-8.6814","LPPR","medium_airport""#,
    r#""JFK","John F Kennedy International","New York","United States","40.6413","-73.7781","KJFK","large_airport""#,
];

pub const FLIGHT_ROWS: &[&str] = &[
    r#""TP00001","2024-06-01 10:00","2024-06-01 10:00","2024-06-01 11:30","2024-06-01 11:30","12","On Time","LIS","OPO","AR-10001","TAP","https://flights.example/TP00001""#,
    r#""TP00002","2024-06-01 14:00","2024-06-01 14:45","2024-06-01 15:30","2024-06-01 16:15","7","Delayed","OPO","LIS","AR-10001","TAP","https://flights.example/TP00002""#,
    r#""AA00001","2024-06-02 08:00","N/A","2024-06-02 20:00","N/A","5","Cancelled","JFK","LIS","BO-20001","American Airlines","https://flights.example/AA00001""#,
];

pub const PASSENGER_ROWS: &[&str] = &[
    r#""100000001","Ana","Silva","1990-05-14","Portuguese","F","ana.silva@mail.pt","+351210000000","Rua das Flores 1, Lisboa","ana.jpg""#,
    r#""100000002","Bob","Jones","1985-11-02","American","M","bob.jones@mail.com","+12125550100","5th Avenue 100, New York","bob.jpg""#,
];

pub const RESERVATION_ROWS: &[&str] = &[
    r#""R000000001","['TP00001', 'TP00002']","100000001","14A","300.00","False","True","qr-r1""#,
    r#""R000000002","['AA00001']","100000002","2B","500.00","False","False","qr-r2""#,
];

pub fn write_table(dir: &Path, name: &str, header: &str, rows: &[&str]) {
    let mut contents = String::from(header);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(dir.join(name), contents).expect("write dataset file");
}

/// Write the complete sample dataset and return the directory.
pub fn sample_dataset() -> TempDir {
    let dir = tempfile::tempdir().expect("create dataset dir");
    write_sample_into(dir.path());
    dir
}

pub fn write_sample_into(dir: &Path) {
    write_table(dir, "aircrafts.csv", AIRCRAFTS_HEADER, AIRCRAFT_ROWS);
    write_table(dir, "airports.csv", AIRPORTS_HEADER, AIRPORT_ROWS);
    write_table(dir, "flights.csv", FLIGHTS_HEADER, FLIGHT_ROWS);
    write_table(dir, "passengers.csv", PASSENGERS_HEADER, PASSENGER_ROWS);
    write_table(dir, "reservations.csv", RESERVATIONS_HEADER, RESERVATION_ROWS);
}

/// Fresh directory for error files / query outputs.
pub fn results_dir() -> TempDir {
    tempfile::tempdir().expect("create results dir")
}
