//! Checkpoint filename grammar
//!
//! A checkpoint file is named `<prefix>_<marker>_<epoch>_<timestamp>.<extension>`,
//! with both numeric fields made of one or more decimal digits. The whole name
//! has to match; anything else is not a checkpoint.

use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;

use crate::error::{PruneError, Result};

pub const DEFAULT_PREFIX: &str = "net_weights";
pub const DEFAULT_MARKER: &str = "epoch";
pub const DEFAULT_EXTENSION: &str = "pth";

/// The literal parts of the checkpoint naming convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConvention {
    pub prefix: String,
    pub marker: String,
    /// File extension without the leading dot
    pub extension: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// A directory entry name that matched the checkpoint grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointName {
    pub filename: String,
    pub epoch: u64,
    /// Saturates at `u64::MAX` for digit runs that overflow
    pub timestamp: u64,
}

impl NamingConvention {
    pub fn new(
        prefix: impl Into<String>,
        marker: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            marker: marker.into(),
            extension: extension.into(),
        }
    }

    /// Reject conventions that could never match a plain filename
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("prefix", &self.prefix),
            ("marker", &self.marker),
            ("extension", &self.extension),
        ] {
            if value.is_empty() {
                return Err(PruneError::config_invalid(format!(
                    "naming.{field} must not be empty"
                )));
            }
            if value.contains('/') || value.contains('\\') {
                return Err(PruneError::config_invalid(format!(
                    "naming.{field} must not contain a path separator: {value:?}"
                )));
            }
        }
        if self.extension.starts_with('.') {
            return Err(PruneError::config_invalid(format!(
                "naming.extension must be given without the leading dot: {:?}",
                self.extension
            )));
        }
        Ok(())
    }

    /// Render a filename in this convention
    pub fn format(&self, epoch: u64, timestamp: u64) -> String {
        format!(
            "{}_{}_{}_{}.{}",
            self.prefix, self.marker, epoch, timestamp, self.extension
        )
    }

    /// Match `name` against the full grammar
    pub fn parse(&self, name: &str) -> Option<CheckpointName> {
        let rest = name
            .strip_prefix(self.prefix.as_str())?
            .strip_prefix('_')?
            .strip_prefix(self.marker.as_str())?
            .strip_prefix('_')?;
        let numbers = rest
            .strip_suffix(self.extension.as_str())?
            .strip_suffix('.')?;
        let (epoch, timestamp) = numbers.split_once('_')?;

        Some(CheckpointName {
            filename: name.to_string(),
            epoch: parse_digits(epoch)?,
            timestamp: parse_digits(timestamp)?,
        })
    }
}

/// Parse a non-empty run of decimal digits, saturating on overflow
///
/// Any Unicode decimal digit (general category Nd) counts, not just `0-9`.
fn parse_digits(field: &str) -> Option<u64> {
    if field.is_empty() {
        return None;
    }
    field.chars().try_fold(0u64, |acc, c| {
        let digit = decimal_value(c)?;
        Some(acc.saturating_mul(10).saturating_add(u64::from(digit)))
    })
}

/// Numeric value of a decimal digit character
///
/// Nd characters are encoded in contiguous runs of ten, zero first, so the
/// value is the position within the run of preceding Nd code points.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(digit) = c.to_digit(10) {
        return Some(digit);
    }
    if !c.is_number_decimal_digit() {
        return None;
    }
    let mut offset = 0u32;
    let mut code = u32::from(c);
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !prev.is_number_decimal_digit() {
            break;
        }
        offset += 1;
        code -= 1;
    }
    Some(offset % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str) -> Option<CheckpointName> {
        NamingConvention::default().parse(name)
    }

    #[test]
    fn test_parse_valid_name() {
        let parsed = parse("net_weights_epoch_5_150.pth").unwrap();
        assert_eq!(parsed.filename, "net_weights_epoch_5_150.pth");
        assert_eq!(parsed.epoch, 5);
        assert_eq!(parsed.timestamp, 150);
    }

    #[test]
    fn test_leading_zeros_are_digits() {
        let parsed = parse("net_weights_epoch_007_000150.pth").unwrap();
        assert_eq!(parsed.epoch, 7);
        assert_eq!(parsed.timestamp, 150);
    }

    #[test]
    fn test_rejects_malformed_names() {
        for name in [
            "checkpoint_final.pth",
            "net_weights_epoch_5_150.pt",
            "net_weights_epoch_5_150.pth.bak",
            "net_weights_epoch_5_150",
            "net_weights_epoch_150.pth",
            "net_weights_epoch_5_1_150.pth",
            "net_weights_epoch__150.pth",
            "net_weights_epoch_5_.pth",
            "net_weights_epoch_x_150.pth",
            "net_weights_epoch_5_15a.pth",
            "net_weights_epoch_5_-150.pth",
            "net_weights_epoch_5_+150.pth",
            "net_weights_epoch_5_1 50.pth",
            "xnet_weights_epoch_5_150.pth",
            ".net_weights_epoch_5_150.pth",
            "net_weights_epoch_5_150xpth",
            "NET_WEIGHTS_epoch_5_150.pth",
            "net_weights_epoch_5_150.PTH",
            "net_weights_epoch_5_15\u{00B2}.pth",
            "net_weights_epoch_\u{2164}_150.pth",
            "",
        ] {
            assert!(parse(name).is_none(), "{name:?} should not match");
        }
    }

    #[test]
    fn test_non_ascii_decimal_digits() {
        // Arabic-Indic 150
        let parsed = parse("net_weights_epoch_5_\u{0661}\u{0665}\u{0660}.pth").unwrap();
        assert_eq!(parsed.timestamp, 150);

        // fullwidth 5
        let parsed = parse("net_weights_epoch_\u{FF15}_150.pth").unwrap();
        assert_eq!(parsed.epoch, 5);
        assert_eq!(parsed.timestamp, 150);

        // mixed scripts within one field
        let parsed = parse("net_weights_epoch_1_\u{0967}2\u{FF13}.pth").unwrap();
        assert_eq!(parsed.timestamp, 123);
    }

    #[test]
    fn test_decimal_value_in_adjacent_runs() {
        // mathematical digits are five back-to-back runs starting at U+1D7CE
        assert_eq!(decimal_value('\u{1D7CE}'), Some(0));
        assert_eq!(decimal_value('\u{1D7D9}'), Some(1));
        assert_eq!(decimal_value('\u{1D7FF}'), Some(9));
        assert_eq!(decimal_value('\u{0669}'), Some(9));
        assert_eq!(decimal_value('x'), None);
        assert_eq!(decimal_value('\u{00BD}'), None);
    }

    #[test]
    fn test_overflowing_timestamp_saturates() {
        let parsed = parse("net_weights_epoch_1_99999999999999999999999999.pth").unwrap();
        assert_eq!(parsed.timestamp, u64::MAX);
    }

    #[test]
    fn test_custom_convention() {
        let naming = NamingConvention::new("model_ckpt", "step", "safetensors");
        let parsed = naming.parse("model_ckpt_step_12_1700000000.safetensors").unwrap();
        assert_eq!(parsed.epoch, 12);
        assert_eq!(parsed.timestamp, 1_700_000_000);
        assert!(naming.parse("net_weights_epoch_5_150.pth").is_none());
    }

    #[test]
    fn test_format_round_trips_through_parse() {
        let naming = NamingConvention::default();
        let name = naming.format(3, 100);
        assert_eq!(name, "net_weights_epoch_3_100.pth");
        assert_eq!(naming.parse(&name).map(|p| p.timestamp), Some(100));
    }

    #[test]
    fn test_validate() {
        assert!(NamingConvention::default().validate().is_ok());
        assert!(NamingConvention::new("", "epoch", "pth").validate().is_err());
        assert!(NamingConvention::new("a/b", "epoch", "pth").validate().is_err());
        assert!(NamingConvention::new("net", "epoch", ".pth").validate().is_err());
    }
}
