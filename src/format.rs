//! Clock text formatting for a zone at an instant.
//!
//! Card visuals show `hh:mm:ss AM` plus the full date, map markers show the
//! shorter `hh:mm AM`. All strings are rendered from the zone's own offset,
//! so daylight saving is handled by the tz database.

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;
use thiserror::Error;

const CARD_TIME_FORMAT: &str = "%I:%M:%S %p";
const CARD_DATE_FORMAT: &str = "%A, %B %-d, %Y";
const OVERLAY_TIME_FORMAT: &str = "%I:%M %p";

/// Errors raised while formatting clock text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The identifier is not a zone known to the tz database.
    #[error("unknown time zone identifier '{0}'")]
    UnknownZone(String),
}

/// Formatted clock text for one zone at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneReading {
    /// `hh:mm:ss AM`, shown on cards
    pub card_time: String,
    /// Full weekday, month name, day and year, shown on cards
    pub card_date: String,
    /// `hh:mm AM`, shown on map markers
    pub overlay_time: String,
    /// `UTC+hh:mm`
    pub utc_offset: String,
    /// Offset from UTC in seconds at this instant
    pub offset_seconds: i32,
}

/// Resolves an IANA identifier against the bundled tz database.
pub fn resolve_zone(zone_id: &str) -> Result<Tz, FormatError> {
    zone_id
        .parse::<Tz>()
        .map_err(|_| FormatError::UnknownZone(zone_id.to_string()))
}

/// Formats every clock string for `zone_id` at `instant`.
pub fn format_reading(zone_id: &str, instant: DateTime<Utc>) -> Result<ZoneReading, FormatError> {
    let tz = resolve_zone(zone_id)?;
    let local = instant.with_timezone(&tz);
    let offset_seconds = local.offset().fix().local_minus_utc();

    Ok(ZoneReading {
        card_time: local.format(CARD_TIME_FORMAT).to_string(),
        card_date: local.format(CARD_DATE_FORMAT).to_string(),
        overlay_time: local.format(OVERLAY_TIME_FORMAT).to_string(),
        utc_offset: format_utc_offset(offset_seconds),
        offset_seconds,
    })
}

/// Renders an offset in seconds as `UTC+hh:mm` / `UTC-hh:mm`.
pub fn format_utc_offset(offset_seconds: i32) -> String {
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let minutes = offset_seconds.unsigned_abs() / 60;
    format!("UTC{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 10, 20, 48, 5).unwrap()
    }

    #[test]
    fn test_tokyo_reading() {
        let reading = format_reading("Asia/Tokyo", instant()).unwrap();
        assert_eq!(reading.card_time, "05:48:05 AM");
        assert_eq!(reading.card_date, "Thursday, July 11, 2024");
        assert_eq!(reading.overlay_time, "05:48 AM");
        assert_eq!(reading.utc_offset, "UTC+09:00");
        assert_eq!(reading.offset_seconds, 9 * 3600);
    }

    #[test]
    fn test_new_york_observes_daylight_saving() {
        let summer = format_reading("America/New_York", instant()).unwrap();
        assert_eq!(summer.card_time, "04:48:05 PM");
        assert_eq!(summer.card_date, "Wednesday, July 10, 2024");
        assert_eq!(summer.utc_offset, "UTC-04:00");

        let winter_instant = Utc.with_ymd_and_hms(2024, 1, 10, 20, 48, 5).unwrap();
        let winter = format_reading("America/New_York", winter_instant).unwrap();
        assert_eq!(winter.card_time, "03:48:05 PM");
        assert_eq!(winter.utc_offset, "UTC-05:00");
    }

    #[test]
    fn test_half_hour_offset() {
        let reading = format_reading("Asia/Kolkata", instant()).unwrap();
        assert_eq!(reading.utc_offset, "UTC+05:30");
        assert_eq!(reading.overlay_time, "02:18 AM");
    }

    #[test]
    fn test_unknown_zone() {
        let err = format_reading("Mars/Olympus_Mons", instant()).unwrap_err();
        assert_eq!(err, FormatError::UnknownZone("Mars/Olympus_Mons".to_string()));
        assert!(err.to_string().contains("Mars/Olympus_Mons"));
    }

    #[test]
    fn test_format_utc_offset() {
        assert_eq!(format_utc_offset(0), "UTC+00:00");
        assert_eq!(format_utc_offset(-9 * 3600 - 30 * 60), "UTC-09:30");
        assert_eq!(format_utc_offset(13 * 3600 + 45 * 60), "UTC+13:45");
    }
}
