//! Line formatting for detailed output.

use std::time::SystemTime;

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

use dirlist_core::EntryInfo;

/// RFC 822 style timestamp, e.g. `02 Jan 06 15:04 MST`.
pub const RFC822_FORMAT: &str = "%d %b %y %H:%M %Z";

/// RFC 822 with a numeric zone, e.g. `02 Jan 06 15:04 -0700`.
pub const RFC822Z_FORMAT: &str = "%d %b %y %H:%M %z";

/// Time zone used when rendering modification times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayZone {
    /// The system's local offset, for when no zone name is known.
    /// Rendered as a numeric offset, or `UTC` when the offset is zero.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// A named zone, rendered with its abbreviation (`MST`, `CEST`).
    Named(Tz),
}

impl DisplayZone {
    /// Zone of the running process: `TZ` first, then the system setting.
    pub fn system() -> Self {
        let tz_env = std::env::var("TZ").ok();
        Self::resolve(tz_env.as_deref(), || iana_time_zone::get_timezone().ok())
    }

    /// Resolve a zone from a `TZ` value and a lazily queried system zone name.
    ///
    /// An empty `TZ` means UTC. A `TZ` that names no known zone falls back
    /// to [`DisplayZone::Local`], since the C library interprets it.
    pub fn resolve(tz_env: Option<&str>, system: impl FnOnce() -> Option<String>) -> Self {
        match tz_env {
            Some(value) => {
                let name = value.strip_prefix(':').unwrap_or(value);
                if name.is_empty() {
                    Self::Utc
                } else {
                    name.parse::<Tz>().map(Self::Named).unwrap_or(Self::Local)
                }
            }
            None => system()
                .and_then(|name| name.parse::<Tz>().ok())
                .map(Self::Named)
                .unwrap_or(Self::Local),
        }
    }
}

/// Format a modification time.
pub fn format_timestamp(time: SystemTime, zone: DisplayZone) -> String {
    let utc = DateTime::<Utc>::from(time);
    match zone {
        DisplayZone::Utc => utc.format(RFC822_FORMAT).to_string(),
        DisplayZone::Named(tz) => utc.with_timezone(&tz).format(RFC822_FORMAT).to_string(),
        DisplayZone::Local => {
            let local = DateTime::<Local>::from(time);
            if local.offset().local_minus_utc() == 0 {
                utc.format(RFC822_FORMAT).to_string()
            } else {
                local.format(RFC822Z_FORMAT).to_string()
            }
        }
    }
}

/// Format one detailed line: mode, size, timestamp and name.
pub fn detailed_line(info: &EntryInfo, name: &str, zone: DisplayZone) -> String {
    format!(
        "{:<10} {:>5} {} {}",
        info.mode,
        info.size,
        format_timestamp(info.modified, zone),
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    // 2006-01-02 15:04:05 UTC
    const REFERENCE_SECS: u64 = 1_136_214_245;

    fn reference() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(REFERENCE_SECS)
    }

    #[test]
    fn test_format_timestamp_utc() {
        assert_eq!(format_timestamp(reference(), DisplayZone::Utc), "02 Jan 06 15:04 UTC");
    }

    #[test]
    fn test_format_timestamp_named_zone_uses_abbreviation() {
        let denver = DisplayZone::Named(chrono_tz::America::Denver);
        assert_eq!(format_timestamp(reference(), denver), "02 Jan 06 08:04 MST");

        let berlin = DisplayZone::Named(chrono_tz::Europe::Berlin);
        assert_eq!(format_timestamp(reference(), berlin), "02 Jan 06 16:04 CET");

        let utc = DisplayZone::Named(chrono_tz::UTC);
        assert_eq!(format_timestamp(reference(), utc), "02 Jan 06 15:04 UTC");
    }

    #[test]
    fn test_format_timestamp_local_has_no_colon_offset() {
        let text = format_timestamp(reference(), DisplayZone::Local);
        let zone = text.rsplit(' ').next().unwrap();
        assert!(zone == "UTC" || (zone.len() == 5 && !zone.contains(':')), "{text}");
    }

    #[test]
    fn test_epoch() {
        assert_eq!(format_timestamp(UNIX_EPOCH, DisplayZone::Utc), "01 Jan 70 00:00 UTC");
    }

    #[test]
    fn test_resolve_prefers_tz_variable() {
        let zone = DisplayZone::resolve(Some("America/Denver"), || Some("Europe/Berlin".into()));
        assert_eq!(zone, DisplayZone::Named(chrono_tz::America::Denver));

        let zone = DisplayZone::resolve(Some(":Europe/Berlin"), || None);
        assert_eq!(zone, DisplayZone::Named(chrono_tz::Europe::Berlin));
    }

    #[test]
    fn test_resolve_empty_tz_is_utc() {
        assert_eq!(DisplayZone::resolve(Some(""), || None), DisplayZone::Utc);
    }

    #[test]
    fn test_resolve_unknown_tz_falls_back_to_local() {
        let zone = DisplayZone::resolve(Some("Mars/Olympus"), || Some("Europe/Berlin".into()));
        assert_eq!(zone, DisplayZone::Local);
    }

    #[test]
    fn test_resolve_system_name() {
        let zone = DisplayZone::resolve(None, || Some("Asia/Tokyo".into()));
        assert_eq!(zone, DisplayZone::Named(chrono_tz::Asia::Tokyo));
        assert_eq!(DisplayZone::resolve(None, || None), DisplayZone::Local);
    }

    #[test]
    fn test_detailed_line_padding() {
        let info = EntryInfo {
            mode: "-rw-r--r--".to_string(),
            size: 42,
            modified: reference(),
        };
        assert_eq!(
            detailed_line(&info, "notes.txt", DisplayZone::Utc),
            "-rw-r--r--    42 02 Jan 06 15:04 UTC notes.txt"
        );
    }

    #[test]
    fn test_detailed_line_wide_fields_are_not_truncated() {
        let info = EntryInfo {
            mode: "dtrwxrwxrwx".to_string(),
            size: 1_234_567,
            modified: UNIX_EPOCH,
        };
        assert_eq!(
            detailed_line(&info, "tmp", DisplayZone::Utc),
            "dtrwxrwxrwx 1234567 01 Jan 70 00:00 UTC tmp"
        );
    }
}
