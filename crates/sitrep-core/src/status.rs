//! Service status labels and their display attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status label attached to a service record.
///
/// This is display data, not a derived computation: records carry whatever
/// status the catalog asserts. Any unrecognized string maps to `Unknown` so
/// a hand-edited config degrades to a neutral badge instead of refusing to
/// load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Operational,
    Degraded,
    Down,
    Maintenance,
    #[default]
    Unknown,
}

/// UI-agnostic color semantic for a status badge.
///
/// The core crate never names terminal colors; the TUI maps tones to
/// `ratatui` colors at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Warn,
    Crit,
    Info,
    Muted,
}

impl Status {
    /// The four statuses shown as summary tiles, in display order.
    pub fn headline() -> [Status; 4] {
        [
            Status::Operational,
            Status::Degraded,
            Status::Down,
            Status::Maintenance,
        ]
    }

    /// Badge text shown next to the status dot.
    pub fn label(self) -> &'static str {
        match self {
            Status::Operational => "Operational",
            Status::Degraded => "Degraded",
            Status::Down => "Down",
            Status::Maintenance => "Maintenance",
            Status::Unknown => "Unknown",
        }
    }

    /// Color semantic for the badge and summary tile.
    pub fn tone(self) -> Tone {
        match self {
            Status::Operational => Tone::Ok,
            Status::Degraded => Tone::Warn,
            Status::Down => Tone::Crit,
            Status::Maintenance => Tone::Info,
            Status::Unknown => Tone::Muted,
        }
    }

    /// Whether the badge dot blinks on the live dashboard.
    ///
    /// Active states pulse to signal the page is live; maintenance and
    /// unknown hold a steady dot.
    pub fn pulses(self) -> bool {
        match self {
            Status::Operational | Status::Degraded | Status::Down => true,
            Status::Maintenance | Status::Unknown => false,
        }
    }

    /// The lowercase name used in config files and CLI flags.
    pub fn name(self) -> &'static str {
        match self {
            Status::Operational => "operational",
            Status::Degraded => "degraded",
            Status::Down => "down",
            Status::Maintenance => "maintenance",
            Status::Unknown => "unknown",
        }
    }

    /// Parses a status name, falling back to `Unknown` for anything
    /// unrecognized. Never fails.
    pub fn from_name(name: &str) -> Status {
        match name.trim().to_ascii_lowercase().as_str() {
            "operational" => Status::Operational,
            "degraded" => Status::Degraded,
            "down" => Status::Down,
            "maintenance" => Status::Maintenance,
            _ => Status::Unknown,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Status::from_name(&name))
    }
}
