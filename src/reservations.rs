use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::csv_record::{parse_id_list, split_fields};
use crate::flights::Flight;
use crate::passengers::Passenger;
use crate::validators::{self, RowError};

/// Columns in `reservations.csv`: id, flight list, document_no, seat, price,
/// extra_luggage, priority_boarding, qr_code. Seat and the trailing flags are
/// not kept.
pub const RESERVATION_ARITY: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    /// One direct flight or two connecting legs.
    pub flight_ids: Vec<String>,
    pub document_no: u32,
    pub price: f64,
}

impl Reservation {
    /// Parse one data row of `reservations.csv`.
    ///
    /// `passengers` and `flights` are the already-loaded tables; unknown
    /// references and broken two-leg connections are rejections.
    pub fn from_csv_line(
        line: &str,
        passengers: &HashMap<u32, Passenger>,
        flights: &HashMap<String, Flight>,
    ) -> Result<Self, RowError> {
        let fields = split_fields(line, RESERVATION_ARITY).map_err(|_| RowError::Arity)?;

        if !validators::is_reservation_id(fields[0]) {
            return Err(RowError::Invalid("reservation id"));
        }
        let document_no =
            validators::parse_document_no(fields[2]).ok_or(RowError::Invalid("document number"))?;
        if !passengers.contains_key(&document_no) {
            return Err(RowError::UnknownRef("passenger"));
        }

        let ids = parse_id_list(fields[1]).ok_or(RowError::Invalid("flight list"))?;
        if ids.is_empty() || ids.len() > 2 {
            return Err(RowError::Invalid("flight list"));
        }
        for id in &ids {
            if !flights.contains_key(*id) {
                return Err(RowError::UnknownRef("flight"));
            }
        }
        if let [first, second] = ids.as_slice() {
            let (Some(leg1), Some(leg2)) = (flights.get(*first), flights.get(*second)) else {
                return Err(RowError::UnknownRef("flight"));
            };
            if leg1.destination != leg2.origin {
                return Err(RowError::Disconnected);
            }
        }

        let price = validators::parse_price(fields[4]).ok_or(RowError::Invalid("price"))?;

        Ok(Reservation {
            id: fields[0].to_string(),
            flight_ids: ids.into_iter().map(str::to_string).collect(),
            document_no,
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::Aircraft;

    fn fixture_tables() -> (HashMap<u32, Passenger>, HashMap<String, Flight>) {
        let ana = Passenger::from_csv_line(
            r#""100000001","Ana","Silva","1990-05-14","Portuguese","F","ana.silva@mail.pt","","x","y""#,
        )
        .expect("fixture passenger");
        let passengers = HashMap::from([(ana.document_number, ana)]);

        let aircraft = Aircraft::from_csv_line(
            r#""AR-10001","Airbus","A380","2005","853","15200""#,
        )
        .expect("fixture aircraft");
        let aircraft = HashMap::from([(aircraft.id.clone(), aircraft)]);

        let mut flights = HashMap::new();
        for line in [
            r#""TP00001","2024-06-01 10:00","2024-06-01 10:00","2024-06-01 11:30","2024-06-01 11:30","12","On Time","LIS","OPO","AR-10001","TAP","""#,
            r#""TP00002","2024-06-01 14:00","2024-06-01 14:45","2024-06-01 15:30","2024-06-01 16:15","3","Delayed","OPO","LIS","AR-10001","TAP","""#,
        ] {
            let f = Flight::from_csv_line(line, &aircraft).expect("fixture flight");
            flights.insert(f.id.clone(), f);
        }
        (passengers, flights)
    }

    #[test]
    fn test_parse_connecting_reservation() {
        let (passengers, flights) = fixture_tables();
        let line = r#""R000000001","['TP00001', 'TP00002']","100000001","14A","300.00","False","True","qr1""#;
        let reservation =
            Reservation::from_csv_line(line, &passengers, &flights).expect("row should parse");
        assert_eq!(reservation.id, "R000000001");
        assert_eq!(reservation.flight_ids, vec!["TP00001", "TP00002"]);
        assert_eq!(reservation.document_no, 100_000_001);
        assert_eq!(reservation.price, 300.0);
    }

    #[test]
    fn test_parse_single_leg_reservation() {
        let (passengers, flights) = fixture_tables();
        let line = r#""R000000002","['TP00002']","100000001","2B","120.50","False","False","qr2""#;
        let reservation =
            Reservation::from_csv_line(line, &passengers, &flights).expect("row should parse");
        assert_eq!(reservation.flight_ids, vec!["TP00002"]);
    }

    #[test]
    fn test_rejects_unknown_passenger() {
        let (passengers, flights) = fixture_tables();
        let line = r#""R000000003","['TP00001']","999999999","2B","50.00","False","False","qr""#;
        assert_eq!(
            Reservation::from_csv_line(line, &passengers, &flights),
            Err(RowError::UnknownRef("passenger"))
        );
    }

    #[test]
    fn test_rejects_unknown_flight() {
        let (passengers, flights) = fixture_tables();
        let line = r#""R000000004","['XX00009']","100000001","2B","50.00","False","False","qr""#;
        assert_eq!(
            Reservation::from_csv_line(line, &passengers, &flights),
            Err(RowError::UnknownRef("flight"))
        );
    }

    #[test]
    fn test_rejects_disconnected_legs() {
        let (passengers, flights) = fixture_tables();
        // TP00002 lands in LIS, TP00002 again departs from OPO
        let line = r#""R000000005","['TP00002', 'TP00002']","100000001","2B","50.00","False","False","qr""#;
        assert_eq!(
            Reservation::from_csv_line(line, &passengers, &flights),
            Err(RowError::Disconnected)
        );
    }

    #[test]
    fn test_rejects_malformed_list() {
        let (passengers, flights) = fixture_tables();
        let line = r#""R000000006","[TP00001]","100000001","2B","50.00","False","False","qr""#;
        assert_eq!(
            Reservation::from_csv_line(line, &passengers, &flights),
            Err(RowError::Invalid("flight list"))
        );
    }

    #[test]
    fn test_rejects_negative_price() {
        let (passengers, flights) = fixture_tables();
        let line = r#""R000000007","['TP00001']","100000001","2B","-1.00","False","False","qr""#;
        assert_eq!(
            Reservation::from_csv_line(line, &passengers, &flights),
            Err(RowError::Invalid("price"))
        );
    }
}
