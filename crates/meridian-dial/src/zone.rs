use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

use crate::reading::ZonedTime;

/// Zone used when an identifier cannot be resolved.
pub const FALLBACK_ZONE: Tz = Tz::UTC;

/// Legacy three-letter identifiers still found in older configuration.
///
/// `EST`, `MST` and `HST` are not listed: the tz database carries them as
/// fixed-offset zones of their own, so they resolve directly.
const LEGACY_ALIASES: &[(&str, Tz)] = &[
    ("ACT", Tz::Australia__Darwin),
    ("AET", Tz::Australia__Sydney),
    ("AGT", Tz::America__Argentina__Buenos_Aires),
    ("ART", Tz::Africa__Cairo),
    ("AST", Tz::America__Anchorage),
    ("BET", Tz::America__Sao_Paulo),
    ("BST", Tz::Asia__Dhaka),
    ("CAT", Tz::Africa__Harare),
    ("CNT", Tz::America__St_Johns),
    ("CST", Tz::America__Chicago),
    ("CTT", Tz::Asia__Shanghai),
    ("EAT", Tz::Africa__Addis_Ababa),
    ("ECT", Tz::Europe__Paris),
    ("IET", Tz::America__Indiana__Indianapolis),
    ("IST", Tz::Asia__Kolkata),
    ("JST", Tz::Asia__Tokyo),
    ("MIT", Tz::Pacific__Apia),
    ("NET", Tz::Asia__Yerevan),
    ("NST", Tz::Pacific__Auckland),
    ("PLT", Tz::Asia__Karachi),
    ("PNT", Tz::America__Phoenix),
    ("PRT", Tz::America__Puerto_Rico),
    ("PST", Tz::America__Los_Angeles),
    ("SST", Tz::Pacific__Guadalcanal),
    ("VST", Tz::Asia__Ho_Chi_Minh),
];

// ── UnknownZone ───────────────────────────────────────────────────────────

/// Error returned by [`Zone::parse`] for identifiers that name no zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownZone(pub String);

impl fmt::Display for UnknownZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown time zone '{}'", self.0)
    }
}

impl std::error::Error for UnknownZone {}

// ── Zone ──────────────────────────────────────────────────────────────────

/// A resolved time zone a clock can be synchronized to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Zone {
    /// A tz database zone.
    Named(Tz),
    /// Whatever the host is configured with.
    #[default]
    Local,
}

impl Zone {
    /// Resolves `id` as a tz database name, then as a legacy alias.
    pub fn parse(id: &str) -> Result<Self, UnknownZone> {
        let id = id.trim();
        if let Ok(tz) = Tz::from_str(id) {
            return Ok(Zone::Named(tz));
        }
        LEGACY_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(id))
            .map(|&(_, tz)| Zone::Named(tz))
            .ok_or_else(|| UnknownZone(id.to_string()))
    }

    /// Like [`parse`](Self::parse) but never fails: unknown identifiers fall
    /// back to [`FALLBACK_ZONE`].
    pub fn resolve(id: &str) -> Self {
        match Self::parse(id) {
            Ok(zone) => zone,
            Err(e) => {
                log::warn!("{e}; falling back to {}", FALLBACK_ZONE.name());
                Zone::Named(FALLBACK_ZONE)
            }
        }
    }

    /// Canonical name of the zone (`"local"` for the host zone).
    pub fn name(self) -> &'static str {
        match self {
            Zone::Named(tz) => tz.name(),
            Zone::Local => "local",
        }
    }

    /// Converts an absolute instant into wall-clock time in this zone.
    pub fn localize(self, instant: DateTime<Utc>) -> ZonedTime {
        match self {
            Zone::Named(tz) => ZonedTime::new(instant.with_timezone(&tz)),
            Zone::Local => ZonedTime::new(instant.with_timezone(&Local)),
        }
    }
}

impl FromStr for Zone {
    type Err = UnknownZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse ─────────────────────────────────────────────────────────────

    #[test]
    fn parses_iana_names() {
        assert_eq!(Zone::parse("Asia/Tokyo"), Ok(Zone::Named(Tz::Asia__Tokyo)));
        assert_eq!(Zone::parse("America/New_York"), Ok(Zone::Named(Tz::America__New_York)));
    }

    #[test]
    fn parses_fixed_offset_database_zones() {
        assert!(Zone::parse("EST").is_ok());
        assert!(Zone::parse("UTC").is_ok());
    }

    #[test]
    fn parses_legacy_aliases_case_insensitively() {
        assert_eq!(Zone::parse("JST"), Ok(Zone::Named(Tz::Asia__Tokyo)));
        assert_eq!(Zone::parse("pst"), Ok(Zone::Named(Tz::America__Los_Angeles)));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Zone::parse("  Asia/Tokyo "), Ok(Zone::Named(Tz::Asia__Tokyo)));
    }

    #[test]
    fn rejects_unknown_identifiers() {
        let err = Zone::parse("PDT").unwrap_err();
        assert_eq!(err, UnknownZone("PDT".to_string()));
        assert_eq!(err.to_string(), "unknown time zone 'PDT'");
        assert!(Zone::parse("").is_err());
    }

    // ── resolve ───────────────────────────────────────────────────────────

    #[test]
    fn resolve_falls_back_to_utc() {
        assert_eq!(Zone::resolve("Mars/Olympus_Mons"), Zone::Named(FALLBACK_ZONE));
    }

    #[test]
    fn resolve_keeps_valid_zones() {
        assert_eq!(Zone::resolve("Europe/Paris"), Zone::Named(Tz::Europe__Paris));
    }

    #[test]
    fn names() {
        assert_eq!(Zone::Named(Tz::Asia__Tokyo).name(), "Asia/Tokyo");
        assert_eq!(Zone::Local.to_string(), "local");
    }
}
