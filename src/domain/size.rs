// SPDX-License-Identifier: MIT OR Apache-2.0

//! Size parsing shared by the byte-size wrappers.
//!
//! A size token is a number optionally followed by a unit suffix, e.g. `"1.5G"` or
//! `"1024"`. The suffix selects a multiplier from one of two fixed tables: the binary
//! (base-2, IEC style) table or the decimal (base-10, SI style) table.

use crate::domain::errors::Result;
use crate::domain::number::parse_float;

/// Binary (base-2) unit multipliers.
const BINARY_UNITS: &[(&str, f64)] = &[
    ("B", 1.0),
    ("K", (1u64 << 10) as f64),
    ("M", (1u64 << 20) as f64),
    ("G", (1u64 << 30) as f64),
    ("T", (1u64 << 40) as f64),
    ("P", (1u64 << 50) as f64),
    ("E", (1u64 << 60) as f64),
];

/// Decimal (base-10) unit multipliers. There is deliberately no `B` entry, so a
/// token such as `"100B"` goes through the bare-number path and fails there.
const DECIMAL_UNITS: &[(&str, f64)] = &[
    ("K", 1e3),
    ("M", 1e6),
    ("G", 1e9),
    ("T", 1e12),
    ("P", 1e15),
    ("E", 1e18),
];

/// Selects the unit table used by [`parse_size`].
///
/// # Examples
///
/// ```
/// use string_encoded::domain::size::SizeTable;
///
/// assert_eq!(SizeTable::Binary.multiplier("K"), Some(1024.0));
/// assert_eq!(SizeTable::Decimal.multiplier("K"), Some(1000.0));
/// assert_eq!(SizeTable::Decimal.multiplier("B"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeTable {
    /// Powers of 1024: `B`, `K`, `M`, `G`, `T`, `P`, `E`.
    Binary,
    /// Powers of 1000: `K`, `M`, `G`, `T`, `P`, `E`.
    Decimal,
}

impl SizeTable {
    /// Returns the `(unit, multiplier)` entries of this table.
    pub fn entries(self) -> &'static [(&'static str, f64)] {
        match self {
            SizeTable::Binary => BINARY_UNITS,
            SizeTable::Decimal => DECIMAL_UNITS,
        }
    }

    /// Looks up the multiplier for an exact unit symbol.
    pub fn multiplier(self, unit: &str) -> Option<f64> {
        self.entries()
            .iter()
            .find(|(key, _)| *key == unit)
            .map(|(_, size)| *size)
    }

    /// Finds the unit whose key is a trailing match of `token`.
    ///
    /// When more than one key matches, the longest one wins, so the result never
    /// depends on table order.
    fn match_suffix(self, token: &str) -> Option<(&'static str, f64)> {
        self.entries()
            .iter()
            .filter(|(key, _)| token.ends_with(key))
            .max_by_key(|(key, _)| key.len())
            .copied()
    }
}

/// Parses a size token into a count of bytes (or decimal units).
///
/// If the token ends with a unit from `table`, the unit is stripped, the remaining
/// prefix is parsed as an `f64` and multiplied by the unit's multiplier. Otherwise the
/// whole token is parsed as a bare `f64` and returned unmultiplied.
///
/// # Errors
///
/// Returns [`ParseError::Float`](crate::domain::ParseError::Float) if the numeric
/// prefix, or the whole token in the bare case, is not a valid float, and
/// [`ParseError::FloatRange`](crate::domain::ParseError::FloatRange) if that number is
/// too large for an `f64`.
///
/// # Examples
///
/// ```
/// use string_encoded::domain::size::{parse_size, SizeTable};
///
/// assert_eq!(parse_size("1.5G", SizeTable::Binary).unwrap(), 1610612736.0);
/// assert_eq!(parse_size("1.5G", SizeTable::Decimal).unwrap(), 1500000000.0);
/// assert_eq!(parse_size("1024", SizeTable::Decimal).unwrap(), 1024.0);
/// assert!(parse_size("lots", SizeTable::Binary).is_err());
/// ```
pub fn parse_size(token: &str, table: SizeTable) -> Result<f64> {
    if let Some((unit, size)) = table.match_suffix(token) {
        let number = &token[..token.len() - unit.len()];
        let value = parse_float(number)?;
        #[cfg(feature = "trace")]
        tracing::trace!(token, unit, multiplier = size, ?table, "matched size unit");
        return Ok(value * size);
    }

    let value = parse_float(token)?;
    #[cfg(feature = "trace")]
    tracing::trace!(token, ?table, "no size unit, using bare value");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParseError;

    fn assert_no_key_is_suffix_of_another(table: SizeTable) {
        let entries = table.entries();
        for (i, (a, _)) in entries.iter().enumerate() {
            for (j, (b, _)) in entries.iter().enumerate() {
                if i != j {
                    assert!(
                        !b.ends_with(a),
                        "{:?} table: key {:?} is a suffix of {:?}",
                        table,
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_binary_table_suffix_invariant() {
        assert_no_key_is_suffix_of_another(SizeTable::Binary);
    }

    #[test]
    fn test_decimal_table_suffix_invariant() {
        assert_no_key_is_suffix_of_another(SizeTable::Decimal);
    }

    #[test]
    fn test_binary_multipliers() {
        let table = SizeTable::Binary;
        assert_eq!(table.multiplier("B"), Some(1.0));
        assert_eq!(table.multiplier("K"), Some(1024.0));
        assert_eq!(table.multiplier("M"), Some(1048576.0));
        assert_eq!(table.multiplier("G"), Some(1073741824.0));
        assert_eq!(table.multiplier("T"), Some(1099511627776.0));
        assert_eq!(table.multiplier("P"), Some(1125899906842624.0));
        assert_eq!(table.multiplier("E"), Some(1152921504606846976.0));
        assert_eq!(table.entries().len(), 7);
    }

    #[test]
    fn test_decimal_multipliers() {
        let table = SizeTable::Decimal;
        assert_eq!(table.multiplier("B"), None);
        assert_eq!(table.multiplier("K"), Some(1000.0));
        assert_eq!(table.multiplier("M"), Some(1000000.0));
        assert_eq!(table.multiplier("G"), Some(1000000000.0));
        assert_eq!(table.multiplier("T"), Some(1000000000000.0));
        assert_eq!(table.multiplier("P"), Some(1000000000000000.0));
        assert_eq!(table.multiplier("E"), Some(1000000000000000000.0));
        assert_eq!(table.entries().len(), 6);
    }

    #[test]
    fn test_parse_size_fractional_units() {
        assert_eq!(parse_size("1.5G", SizeTable::Binary).unwrap(), 1610612736.0);
        assert_eq!(parse_size("1.5G", SizeTable::Decimal).unwrap(), 1500000000.0);
        assert_eq!(parse_size("0.5K", SizeTable::Binary).unwrap(), 512.0);
    }

    #[test]
    fn test_parse_size_bare_fallback() {
        assert_eq!(parse_size("1024", SizeTable::Binary).unwrap(), 1024.0);
        assert_eq!(parse_size("1024", SizeTable::Decimal).unwrap(), 1024.0);
        assert_eq!(parse_size("2.5", SizeTable::Decimal).unwrap(), 2.5);
    }

    #[test]
    fn test_parse_size_binary_bytes_unit() {
        assert_eq!(parse_size("512B", SizeTable::Binary).unwrap(), 512.0);
    }

    #[test]
    fn test_parse_size_decimal_rejects_bytes_unit() {
        let result = parse_size("512B", SizeTable::Decimal);
        assert!(matches!(result, Err(ParseError::Float(_))));
    }

    #[test]
    fn test_parse_size_two_letter_unit_rejected() {
        // Only "B" matches, leaving "1K" which is not a number.
        assert!(parse_size("1KB", SizeTable::Binary).is_err());
    }

    #[test]
    fn test_parse_size_case_sensitive() {
        assert!(parse_size("1g", SizeTable::Binary).is_err());
        assert!(parse_size("1k", SizeTable::Decimal).is_err());
    }

    #[test]
    fn test_parse_size_invalid_prefix() {
        assert!(parse_size("G", SizeTable::Binary).is_err());
        assert!(parse_size("abcM", SizeTable::Decimal).is_err());
        assert!(parse_size(" 1M", SizeTable::Decimal).is_err());
    }

    #[test]
    fn test_parse_size_empty() {
        assert!(parse_size("", SizeTable::Binary).is_err());
        assert!(parse_size("", SizeTable::Decimal).is_err());
    }

    #[test]
    fn test_parse_size_scientific_prefix() {
        assert_eq!(parse_size("1e3K", SizeTable::Decimal).unwrap(), 1e6);
    }

    #[test]
    fn test_parse_size_negative_is_not_validated() {
        assert_eq!(parse_size("-2K", SizeTable::Binary).unwrap(), -2048.0);
    }

    #[test]
    fn test_parse_size_out_of_range() {
        for table in [SizeTable::Binary, SizeTable::Decimal] {
            assert!(matches!(
                parse_size("1e400K", table),
                Err(ParseError::FloatRange { .. })
            ));
            assert!(matches!(
                parse_size("1e400", table),
                Err(ParseError::FloatRange { .. })
            ));
        }
    }

    #[test]
    fn test_parse_size_large_units() {
        assert_eq!(parse_size("1E", SizeTable::Binary).unwrap(), 2f64.powi(60));
        assert_eq!(parse_size("2P", SizeTable::Decimal).unwrap(), 2e15);
        assert_eq!(parse_size("3T", SizeTable::Binary).unwrap(), 3.0 * 2f64.powi(40));
    }
}
