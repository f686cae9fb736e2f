//! Sloppiness list parsing.
//!
//! Parses the config syntax `name[, name ...]` into a [`Sloppiness`].

use crate::{Sloppiness, SloppinessError, Sloppy};

fn words(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|w| !w.is_empty())
}

/// Parse a list of sloppiness names.
///
/// Names are separated by commas, whitespace or both, and are case
/// insensitive. Unknown names are skipped so that a config written for a
/// newer version still loads.
///
/// # Examples
/// ```
/// use sloppiness::{parse_sloppiness, Sloppy};
/// let s = parse_sloppiness("locale,modules  gcno_cwd");
/// assert!(s.is_enabled(Sloppy::LOCALE | Sloppy::MODULES | Sloppy::GCNO_CWD));
/// assert!(parse_sloppiness("no_such_thing").is_empty());
/// ```
pub fn parse_sloppiness(input: &str) -> Sloppiness {
    let mut sloppiness = Sloppiness::default();
    for word in words(input) {
        match Sloppy::from_config_name(word) {
            Some(flag) => sloppiness.enable(flag),
            None => tracing::debug!("Ignoring unknown sloppiness: {}", word),
        }
    }
    sloppiness
}

/// Parse a list of sloppiness names, rejecting unknown ones.
///
/// # Examples
/// ```
/// use sloppiness::{parse_sloppiness_strict, SloppinessError};
/// assert_eq!(parse_sloppiness_strict("time_macros").unwrap().to_bitmask(), 4);
/// assert_eq!(
///     parse_sloppiness_strict("time_macros, bogus"),
///     Err(SloppinessError::UnknownFlag("bogus".to_string()))
/// );
/// ```
pub fn parse_sloppiness_strict(input: &str) -> Result<Sloppiness, SloppinessError> {
    let mut sloppiness = Sloppiness::default();
    for word in words(input) {
        let flag = Sloppy::from_config_name(word)
            .ok_or_else(|| SloppinessError::UnknownFlag(word.to_string()))?;
        sloppiness.enable(flag);
    }
    Ok(sloppiness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_name() {
        let s = parse_sloppiness("time_macros");
        assert_eq!(s.to_bitmask(), Sloppy::TIME_MACROS.bits());
    }

    #[test]
    fn parse_mixed_separators() {
        let s = parse_sloppiness(" include_file_mtime,include_file_ctime  pch_defines ,, ");
        assert_eq!(s.to_bitmask(), 0b1011);
    }

    #[test]
    fn parse_case_insensitive() {
        let s = parse_sloppiness("Locale, MODULES");
        assert!(s.is_enabled(Sloppy::LOCALE));
        assert!(s.is_enabled(Sloppy::MODULES));
    }

    #[test]
    fn parse_skips_unknown() {
        let s = parse_sloppiness("random_seed, ivfsoverlay");
        assert_eq!(s.to_bitmask(), Sloppy::IVFSOVERLAY.bits());
    }

    #[test]
    fn parse_empty() {
        assert!(parse_sloppiness("").is_empty());
        assert!(parse_sloppiness(" , ").is_empty());
        assert_eq!(parse_sloppiness_strict(""), Ok(Sloppiness::default()));
    }

    #[test]
    fn parse_legacy_alias() {
        let s = parse_sloppiness("no_system_headers");
        assert!(s.is_enabled(Sloppy::SYSTEM_HEADERS));
    }

    #[test]
    fn strict_rejects_unknown() {
        assert_eq!(
            parse_sloppiness_strict("locale randomness"),
            Err(SloppinessError::UnknownFlag("randomness".to_string()))
        );
    }
}
