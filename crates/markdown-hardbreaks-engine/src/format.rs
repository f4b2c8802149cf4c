use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

/// The notation used to mark a hard line break at the end of a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HardBreakFormat {
    /// Two trailing spaces: `line  `
    #[default]
    DoubleSpace,
    /// A single trailing backslash: `line\`
    Backslash,
}

impl HardBreakFormat {
    /// The literal appended before the line terminator.
    pub const fn literal(self) -> &'static str {
        match self {
            HardBreakFormat::DoubleSpace => "  ",
            HardBreakFormat::Backslash => "\\",
        }
    }

    /// Human-readable name for settings UIs and CLI output.
    pub const fn label(self) -> &'static str {
        match self {
            HardBreakFormat::DoubleSpace => "Double space",
            HardBreakFormat::Backslash => "Backslash",
        }
    }

    /// Parses a stored setting, falling back to the default for missing or
    /// unknown values.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::parse::<HardBreakFormat>) {
            Some(Ok(format)) => format,
            Some(Err(e)) => {
                log::warn!("{e}; using {}", HardBreakFormat::default().label());
                HardBreakFormat::default()
            }
            None => HardBreakFormat::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hard break format {0:?}")]
pub struct UnknownFormat(pub String);

impl FromStr for HardBreakFormat {
    type Err = UnknownFormat;

    /// Accepts the kebab-case names plus the raw literals older settings
    /// files stored directly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "  " => return Ok(HardBreakFormat::DoubleSpace),
            "\\" => return Ok(HardBreakFormat::Backslash),
            _ => {}
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "double-space" | "doublespace" | "double_space" | "spaces" => {
                Ok(HardBreakFormat::DoubleSpace)
            }
            "backslash" => Ok(HardBreakFormat::Backslash),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for HardBreakFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardBreakFormat::DoubleSpace => f.write_str("double-space"),
            HardBreakFormat::Backslash => f.write_str("backslash"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(HardBreakFormat::DoubleSpace.literal(), "  ");
        assert_eq!(HardBreakFormat::Backslash.literal(), "\\");
    }

    #[test]
    fn parses_names_and_legacy_literals() {
        assert_eq!("double-space".parse(), Ok(HardBreakFormat::DoubleSpace));
        assert_eq!("Backslash".parse(), Ok(HardBreakFormat::Backslash));
        assert_eq!("  ".parse(), Ok(HardBreakFormat::DoubleSpace));
        assert_eq!("\\".parse(), Ok(HardBreakFormat::Backslash));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for format in [HardBreakFormat::DoubleSpace, HardBreakFormat::Backslash] {
            assert_eq!(format.to_string().parse(), Ok(format));
        }
    }

    #[test]
    fn unknown_setting_falls_back_to_double_space() {
        assert_eq!(
            HardBreakFormat::from_setting(Some("<br>")),
            HardBreakFormat::DoubleSpace
        );
        assert_eq!(
            HardBreakFormat::from_setting(None),
            HardBreakFormat::DoubleSpace
        );
        assert_eq!(
            HardBreakFormat::from_setting(Some("backslash")),
            HardBreakFormat::Backslash
        );
    }
}
