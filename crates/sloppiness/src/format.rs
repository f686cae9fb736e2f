//! Canonical text form of a sloppiness set.

use std::fmt;

use crate::Sloppiness;

/// Format the enabled flags as a config list.
///
/// Names come in bit order, joined by `", "`. Bits that name no flag are
/// left out, so the result parses back to the known part of the set.
///
/// # Examples
/// ```
/// use sloppiness::{format_sloppiness, Sloppiness};
/// assert_eq!(format_sloppiness(Sloppiness::from_bitmask(0b10100)), "time_macros, file_stat_matches");
/// assert_eq!(format_sloppiness(Sloppiness::default()), "");
/// ```
pub fn format_sloppiness(sloppiness: Sloppiness) -> String {
    sloppiness
        .iter()
        .filter_map(|flag| flag.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Sloppiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_sloppiness(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_sloppiness, Sloppy};

    #[test]
    fn format_single() {
        assert_eq!(format_sloppiness(Sloppy::LOCALE.into()), "locale");
    }

    #[test]
    fn format_skips_unknown_bits() {
        let s = Sloppiness::from_bitmask(0x8000_0001);
        assert_eq!(format_sloppiness(s), "include_file_mtime");
    }

    #[test]
    fn display_matches_format() {
        let s = Sloppiness::new(Sloppy::MODULES | Sloppy::GCNO_CWD);
        assert_eq!(s.to_string(), "modules, gcno_cwd");
    }

    #[test]
    fn format_then_parse() {
        let s = Sloppiness::from_bitmask(0x0FFF);
        assert_eq!(parse_sloppiness(&format_sloppiness(s)), s);
    }
}
