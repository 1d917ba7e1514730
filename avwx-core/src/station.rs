//! Station identifier validation.
//!
//! Surface verification is keyed by a 4-letter ICAO code, upper-air
//! verification by a 5-digit sounding station id.

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Maximum number of characters kept in the ICAO input box.
pub const ICAO_LEN: usize = 4;

/// Length of a numeric sounding station id.
pub const STATION_ID_LEN: usize = 5;

/// Quick-pick codes offered under the ICAO input (Mumbai, Delhi, Chennai,
/// Kolkata).
pub const ICAO_EXAMPLES: &[&str] = &["VABB", "VIDP", "VOMM", "VECC"];

/// Quick-pick sounding stations for the same airports.
pub const STATION_ID_EXAMPLES: &[&str] = &["43003", "42182", "43279", "42809"];

/// True for exactly four uppercase ASCII letters.
pub fn is_valid_icao(code: &str) -> bool {
    code.len() == ICAO_LEN && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// True for exactly five ASCII digits.
pub fn is_valid_station_id(id: &str) -> bool {
    id.len() == STATION_ID_LEN && id.bytes().all(|b| b.is_ascii_digit())
}

/// Coerce typed ICAO input: uppercase, then keep at most four characters.
///
/// Applied on every keystroke, before validation.
pub fn normalize_icao_input(raw: &str) -> String {
    raw.to_uppercase().chars().take(ICAO_LEN).collect()
}

/// A validated ICAO code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icao(String);

impl Icao {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Icao {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_icao(s) {
            Ok(Icao(s.to_string()))
        } else {
            Err(ValidationError::InvalidIcao)
        }
    }
}

impl fmt::Display for Icao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated 5-digit sounding station id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_station_id(s) {
            Ok(StationId(s.to_string()))
        } else {
            Err(ValidationError::InvalidStationId)
        }
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
