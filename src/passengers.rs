use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::csv_record::split_fields;
use crate::datetime::{self, REFERENCE_EPOCH};
use crate::validators::{self, RowError};

/// Columns in `passengers.csv`: document_no, first_name, last_name, dob,
/// nationality, gender, email, phone, address, photo. The trailing contact
/// fields are not kept.
pub const PASSENGER_ARITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(Gender::Female),
            "M" => Ok(Gender::Male),
            "O" => Ok(Gender::Other),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Female => "F",
            Gender::Male => "M",
            Gender::Other => "O",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub document_number: u32,
    pub first_name: String,
    pub last_name: String,
    /// Midnight UTC of the date of birth.
    pub date_of_birth: i64,
    pub nationality: String,
    pub gender: Gender,
}

impl Passenger {
    /// Parse one data row of `passengers.csv`.
    pub fn from_csv_line(line: &str) -> Result<Self, RowError> {
        let fields = split_fields(line, PASSENGER_ARITY).map_err(|_| RowError::Arity)?;

        let document_number =
            validators::parse_document_no(fields[0]).ok_or(RowError::Invalid("document number"))?;
        if fields[1].is_empty() {
            return Err(RowError::Invalid("first name"));
        }
        if fields[2].is_empty() {
            return Err(RowError::Invalid("last name"));
        }
        let date_of_birth = match datetime::parse_date(fields[3]) {
            Ok(Some(t)) if t <= REFERENCE_EPOCH => t,
            _ => return Err(RowError::Invalid("date of birth")),
        };
        if fields[4].is_empty() {
            return Err(RowError::Invalid("nationality"));
        }
        let gender: Gender = fields[5].parse().map_err(|_| RowError::Invalid("gender"))?;
        if !validators::is_email(fields[6]) {
            return Err(RowError::Invalid("email"));
        }

        Ok(Passenger {
            document_number,
            first_name: fields[1].to_string(),
            last_name: fields[2].to_string(),
            date_of_birth,
            nationality: fields[4].to_string(),
            gender,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANA: &str = r#""100000001","Ana","Silva","1990-05-14","Portuguese","F","ana.silva@mail.pt","+351000000000","Rua A 1, Lisboa","ana.jpg""#;

    #[test]
    fn test_parse_passenger() {
        let passenger = Passenger::from_csv_line(ANA).expect("row should parse");
        assert_eq!(passenger.document_number, 100_000_001);
        assert_eq!(passenger.first_name, "Ana");
        assert_eq!(passenger.last_name, "Silva");
        assert_eq!(passenger.nationality, "Portuguese");
        assert_eq!(passenger.gender, Gender::Female);
        assert_eq!(datetime::format_date(passenger.date_of_birth), "1990-05-14");
    }

    #[test]
    fn test_rejects_short_document() {
        let line = ANA.replace("100000001", "1000001");
        assert_eq!(
            Passenger::from_csv_line(&line),
            Err(RowError::Invalid("document number"))
        );
    }

    #[test]
    fn test_rejects_future_birth_date() {
        let line = ANA.replace("1990-05-14", "2031-05-14");
        assert_eq!(
            Passenger::from_csv_line(&line),
            Err(RowError::Invalid("date of birth"))
        );
    }

    #[test]
    fn test_rejects_impossible_birth_date() {
        let line = ANA.replace("1990-05-14", "1990-02-30");
        assert_eq!(
            Passenger::from_csv_line(&line),
            Err(RowError::Invalid("date of birth"))
        );
    }

    #[test]
    fn test_rejects_bad_gender() {
        let line = ANA.replace(r#""F""#, r#""X""#);
        assert_eq!(Passenger::from_csv_line(&line), Err(RowError::Invalid("gender")));
    }

    #[test]
    fn test_rejects_bad_email() {
        let line = ANA.replace("ana.silva@mail.pt", "Ana.Silva@mail.pt");
        assert_eq!(Passenger::from_csv_line(&line), Err(RowError::Invalid("email")));
    }
}
