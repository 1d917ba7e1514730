//! Date/time input fields and the backend's wire formats.
//!
//! The two panels talk to endpoints that expect different formats:
//! surface uses `YYYYMMDDHHmm`, upper air uses `YYYY-MM-DD HH:00:00`.

use crate::error::ValidationError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Wire format for `/api/get_metar` and `/api/process_metar`.
pub const SURFACE_WIRE_FORMAT: &str = "%Y%m%d%H%M";

/// Wire format for `/api/get_upper_air` and `/api/process_upper_air`.
pub const UPPER_AIR_WIRE_FORMAT: &str = "%Y-%m-%d %H:00:00";

/// Format produced by the date picker inputs.
pub const PICKER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats accepted for a combined date and time on the command line.
const CLI_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

pub fn surface_wire(date_time: &NaiveDateTime) -> String {
    date_time.format(SURFACE_WIRE_FORMAT).to_string()
}

pub fn upper_air_wire(date_time: &NaiveDateTime) -> String {
    date_time.format(UPPER_AIR_WIRE_FORMAT).to_string()
}

/// Parse a picker date (`YYYY-MM-DD`).
pub fn parse_picker_date(s: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), PICKER_DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDateTime {
            field,
            value: s.to_string(),
        }
    })
}

/// Parse `YYYY-MM-DD HH:MM` (or with a `T` separator).
pub fn parse_date_time(s: &str) -> Result<NaiveDateTime, ValidationError> {
    CLI_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s.trim(), fmt).ok())
        .ok_or_else(|| ValidationError::InvalidDateTime {
            field: "date/time",
            value: s.to_string(),
        })
}

fn parse_component(
    s: &str,
    max: u32,
    field: &'static str,
) -> Result<u32, ValidationError> {
    s.trim()
        .parse::<u32>()
        .ok()
        .filter(|v| *v <= max)
        .ok_or_else(|| ValidationError::InvalidDateTime {
            field,
            value: s.to_string(),
        })
}

/// Which end of a range a field group belongs to. Only used to name fields in
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl Bound {
    fn field_names(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Bound::Start => ("start date", "start hour", "start minute"),
            Bound::End => ("end date", "end hour", "end minute"),
        }
    }
}

/// One date picker plus hour and minute selects, as raw strings.
/// An empty string means "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimeFields {
    pub date: String,
    pub hour: String,
    pub minute: String,
}

impl DateTimeFields {
    pub fn from_date_time(date_time: &NaiveDateTime) -> Self {
        Self {
            date: date_time.format(PICKER_DATE_FORMAT).to_string(),
            hour: date_time.format("%H").to_string(),
            minute: date_time.format("%M").to_string(),
        }
    }

    pub fn any_set(&self) -> bool {
        !self.date.is_empty() || !self.hour.is_empty() || !self.minute.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.date.is_empty() && !self.hour.is_empty() && !self.minute.is_empty()
    }

    pub fn to_date_time(&self, bound: Bound) -> Result<NaiveDateTime, ValidationError> {
        let (date_field, hour_field, minute_field) = bound.field_names();
        let date = parse_picker_date(&self.date, date_field)?;
        let hour = parse_component(&self.hour, 23, hour_field)?;
        let minute = parse_component(&self.minute, 59, minute_field)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            ValidationError::InvalidDateTime {
                field: minute_field,
                value: self.minute.clone(),
            }
        })?;
        Ok(date.and_time(time))
    }
}

/// The surface panel's start/end range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceRange {
    pub start: DateTimeFields,
    pub end: DateTimeFields,
}

impl SurfaceRange {
    pub fn from_date_times(start: &NaiveDateTime, end: &NaiveDateTime) -> Self {
        Self {
            start: DateTimeFields::from_date_time(start),
            end: DateTimeFields::from_date_time(end),
        }
    }

    pub fn any_set(&self) -> bool {
        self.start.any_set() || self.end.any_set()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_complete() && self.end.is_complete()
    }

    /// Both ends in `YYYYMMDDHHmm`. Fails on unparsable fields or an end
    /// before the start.
    pub fn to_wire(&self) -> Result<(String, String), ValidationError> {
        let start = self.start.to_date_time(Bound::Start)?;
        let end = self.end.to_date_time(Bound::End)?;
        if end < start {
            return Err(ValidationError::RangeOrder);
        }
        Ok((surface_wire(&start), surface_wire(&end)))
    }
}

/// The upper-air panel's sounding time: a date and a whole hour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundingTime {
    pub date: String,
    pub hour: String,
}

impl SoundingTime {
    pub fn any_set(&self) -> bool {
        !self.date.is_empty() || !self.hour.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.date.is_empty() && !self.hour.is_empty()
    }

    /// `YYYY-MM-DD HH:00:00`.
    pub fn to_wire(&self) -> Result<String, ValidationError> {
        let date = parse_picker_date(&self.date, "sounding date")?;
        let hour = parse_component(&self.hour, 23, "sounding hour")?;
        let time = NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| {
            ValidationError::InvalidDateTime {
                field: "sounding hour",
                value: self.hour.clone(),
            }
        })?;
        Ok(upper_air_wire(&date.and_time(time)))
    }
}

/// Options for the hour select: `00`..`23`.
pub fn hour_options() -> Vec<String> {
    (0..24).map(|h| format!("{:02}", h)).collect()
}

/// Options for the minute select: `00`..`59`.
pub fn minute_options() -> Vec<String> {
    (0..60).map(|m| format!("{:02}", m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(date: &str, hour: &str, minute: &str) -> DateTimeFields {
        DateTimeFields {
            date: date.to_string(),
            hour: hour.to_string(),
            minute: minute.to_string(),
        }
    }

    #[test]
    fn test_surface_wire_is_zero_padded() {
        let range = SurfaceRange {
            start: fields("2024-01-05", "0", "5"),
            end: fields("2024-01-06", "23", "59"),
        };
        assert_eq!(
            range.to_wire().unwrap(),
            ("202401050005".to_string(), "202401062359".to_string())
        );
    }

    #[test]
    fn test_surface_range_rejects_reversed_order() {
        let range = SurfaceRange {
            start: fields("2024-01-06", "00", "00"),
            end: fields("2024-01-05", "00", "00"),
        };
        assert_eq!(range.to_wire(), Err(ValidationError::RangeOrder));
    }

    #[test]
    fn test_surface_range_rejects_bad_fields() {
        let range = SurfaceRange {
            start: fields("2024-01-06", "24", "00"),
            end: fields("2024-01-07", "00", "00"),
        };
        assert_eq!(
            range.to_wire(),
            Err(ValidationError::InvalidDateTime {
                field: "start hour",
                value: "24".to_string()
            })
        );
    }

    #[test]
    fn test_range_completeness() {
        let mut range = SurfaceRange::default();
        assert!(!range.any_set());
        range.start.date = "2024-01-01".to_string();
        assert!(range.any_set());
        assert!(!range.is_complete());
        range.start.hour = "0".to_string();
        range.start.minute = "0".to_string();
        range.end = fields("2024-01-02", "0", "0");
        assert!(range.is_complete());
    }

    #[test]
    fn test_upper_air_wire() {
        let time = SoundingTime {
            date: "2024-03-09".to_string(),
            hour: "12".to_string(),
        };
        assert_eq!(time.to_wire().unwrap(), "2024-03-09 12:00:00");
        let time = SoundingTime {
            date: "2024-03-09".to_string(),
            hour: "0".to_string(),
        };
        assert_eq!(time.to_wire().unwrap(), "2024-03-09 00:00:00");
    }

    #[test]
    fn test_parse_date_time_round_trips_through_fields() {
        let dt = parse_date_time("2024-02-29 06:30").unwrap();
        let f = DateTimeFields::from_date_time(&dt);
        assert_eq!(f, fields("2024-02-29", "06", "30"));
        assert_eq!(f.to_date_time(Bound::Start).unwrap(), dt);
        assert!(parse_date_time("2024-02-30 06:30").is_err());
        assert!(parse_date_time("2024-02-29T06:30").is_ok());
    }

    #[test]
    fn test_select_options() {
        let hours = hour_options();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[0], "00");
        assert_eq!(hours[23], "23");
        assert_eq!(minute_options()[59], "59");
    }
}
