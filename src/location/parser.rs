use std::num::ParseFloatError;

use chrono::NaiveDate;

use super::LocationRecord;

pub const PREFIX: &str = "Estimated location inferred from IP: ";
const CREATED: &str = "Created";
const COORDINATE_SEPARATOR: &str = ", ";
const TIME_SEPARATOR: &str = " at ";
const DATE_FORMAT: &str = "%A, %B %d, %Y";

#[derive(Debug, thiserror::Error)]
pub enum EntryParseError {
    #[error("The entry does not start with the estimated-location prefix: {0:?}")]
    MissingPrefix(String),
    #[error("\"Created\" was not found in the entry: {0:?}")]
    MissingCreated(String),
    #[error("\"Created\" appears more than once in the entry: {0:?}")]
    ExtraCreated(String),
    #[error("Expected exactly two comma-separated coordinates, found {0:?}")]
    BadCoordinates(String),
    #[error("Could not parse coordinate {text:?}: {source}")]
    BadCoordinate {
        text: String,
        source: ParseFloatError,
    },
    #[error("Coordinate is not a finite number: {0:?}")]
    NonFiniteCoordinate(String),
    #[error("No date was found after \"Created\": {0:?}")]
    MissingDate(String),
    #[error("Could not parse date {text:?}: {source}")]
    BadDate {
        text: String,
        source: chrono::ParseError,
    },
}

/// Parses the text of one list item, e.g.
/// `Estimated location inferred from IP: 40.7128, -74.0060Created: Monday, March 04, 2019 at 10:00AM`.
pub fn parse_entry(text: &str) -> Result<LocationRecord, EntryParseError> {
    let rest = text
        .strip_prefix(PREFIX)
        .ok_or_else(|| EntryParseError::MissingPrefix(text.to_owned()))?;
    let mut parts = rest.split(CREATED);
    let (coordinates, created) = match (parts.next(), parts.next(), parts.next()) {
        (Some(coordinates), Some(created), None) => (coordinates, created),
        (_, None, _) => return Err(EntryParseError::MissingCreated(text.to_owned())),
        _ => return Err(EntryParseError::ExtraCreated(text.to_owned())),
    };
    let (latitude, longitude) = parse_coordinates(coordinates)?;
    let created_at = parse_created_date(created)?;
    Ok(LocationRecord::builder()
        .latitude(latitude)
        .longitude(longitude)
        .created_at(created_at)
        .build())
}

fn parse_coordinates(text: &str) -> Result<(f64, f64), EntryParseError> {
    let mut parts = text.split(COORDINATE_SEPARATOR).map(parse_coordinate);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(latitude), Some(longitude), None) => Ok((latitude?, longitude?)),
        _ => Err(EntryParseError::BadCoordinates(text.to_owned())),
    }
}

fn parse_coordinate(text: &str) -> Result<f64, EntryParseError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|source| EntryParseError::BadCoordinate {
            text: text.to_owned(),
            source,
        })?;
    // `f64::from_str` also accepts "NaN", infinities and overflowing literals.
    if !value.is_finite() {
        return Err(EntryParseError::NonFiniteCoordinate(text.to_owned()));
    }
    Ok(value)
}

/// Parses the part after "Created" up to the time of day.
fn parse_created_date(text: &str) -> Result<NaiveDate, EntryParseError> {
    let date = text.split(TIME_SEPARATOR).next().unwrap_or_default();
    let date = strip_lead_in(date);
    if date.is_empty() {
        return Err(EntryParseError::MissingDate(text.to_owned()));
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|source| EntryParseError::BadDate {
        text: date.to_owned(),
        source,
    })
}

/// Removes the punctuation between "Created" and the weekday.
fn strip_lead_in(date: &str) -> &str {
    for lead_in in [": ", " on "] {
        if let Some(rest) = date.strip_prefix(lead_in) {
            return rest;
        }
    }
    date.char_indices().nth(2).map_or("", |(i, _)| &date[i..])
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{parse_entry, EntryParseError, PREFIX};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_entry_with_on() {
        let record = parse_entry(
            "Estimated location inferred from IP: 40.7128, -74.0060Created on Monday, March 04, 2019 at 10:00AM",
        )
        .unwrap();
        assert_eq!(record.latitude(), 40.7128);
        assert_eq!(record.longitude(), -74.006);
        assert_eq!(record.created_at(), ymd(2019, 3, 4));
    }

    #[test]
    fn parse_entry_with_colon() {
        let record = parse_entry(
            "Estimated location inferred from IP: 35.6895, 139.6917Created: Friday, November 1, 2019 at 11:04 PM JST",
        )
        .unwrap();
        assert_eq!(record.latitude(), 35.6895);
        assert_eq!(record.longitude(), 139.6917);
        assert_eq!(record.created_at(), ymd(2019, 11, 1));
    }

    #[test]
    fn parse_entry_drops_two_unknown_characters() {
        let record = parse_entry(
            "Estimated location inferred from IP: 1.5, 2.5Created- Tuesday, January 01, 2019 at 9:00",
        )
        .unwrap();
        assert_eq!(record.created_at(), ymd(2019, 1, 1));
    }

    #[test]
    fn prefix_only_is_missing_created() {
        assert!(matches!(
            parse_entry(PREFIX),
            Err(EntryParseError::MissingCreated(_))
        ));
    }

    #[test]
    fn other_text_is_missing_prefix() {
        assert!(matches!(
            parse_entry("Estimated something else"),
            Err(EntryParseError::MissingPrefix(_))
        ));
    }

    #[test]
    fn created_twice_is_rejected() {
        assert!(matches!(
            parse_entry(&format!(
                "{PREFIX}1.0, 2.0Created on Monday, March 04, 2019 Created"
            )),
            Err(EntryParseError::ExtraCreated(_))
        ));
    }

    #[test]
    fn non_numeric_coordinate_is_rejected() {
        assert!(matches!(
            parse_entry(&format!(
                "{PREFIX}north, 2.0Created on Monday, March 04, 2019 at 10:00AM"
            )),
            Err(EntryParseError::BadCoordinate { text, .. }) if text == "north"
        ));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        for coordinates in ["NaN, 1.0", "1.0, inf", "1e999, 2.0", "1.0, -infinity"] {
            assert!(
                matches!(
                    parse_entry(&format!(
                        "{PREFIX}{coordinates}Created: Monday, March 04, 2019 at 1:00"
                    )),
                    Err(EntryParseError::NonFiniteCoordinate(_))
                ),
                "{coordinates:?} was accepted"
            );
        }
    }

    #[test]
    fn three_coordinates_are_rejected() {
        assert!(matches!(
            parse_entry(&format!(
                "{PREFIX}1.0, 2.0, 3.0Created on Monday, March 04, 2019 at 10:00AM"
            )),
            Err(EntryParseError::BadCoordinates(_))
        ));
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert!(matches!(
            parse_entry(&format!("{PREFIX}1.0, 2.0Created on 2019-03-04 at 10:00AM")),
            Err(EntryParseError::BadDate { .. })
        ));
        // 2019-03-04 was a Monday.
        assert!(matches!(
            parse_entry(&format!(
                "{PREFIX}1.0, 2.0Created on Sunday, March 04, 2019 at 10:00AM"
            )),
            Err(EntryParseError::BadDate { .. })
        ));
    }

    #[test]
    fn empty_date_is_rejected() {
        assert!(matches!(
            parse_entry(&format!("{PREFIX}1.0, 2.0Created")),
            Err(EntryParseError::MissingDate(_))
        ));
    }
}
