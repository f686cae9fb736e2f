//! Sloppiness flag vocabulary.
//!
//! Bit positions are part of the persisted format. New flags take the next
//! unused bit; existing positions are never reused or shifted.

use bitflags::bitflags;

bitflags! {
    /// A single leniency switch, or a union of them.
    ///
    /// Each constant occupies one fixed bit. Values built with
    /// [`Sloppy::from_bits_retain`] may carry bits that name no flag.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Sloppy: u32 {
        /// Accept include files whose mtime is newer than the compilation start
        const INCLUDE_FILE_MTIME = 1 << 0;
        /// Accept include files whose ctime is newer than the compilation start
        const INCLUDE_FILE_CTIME = 1 << 1;
        /// Ignore `__DATE__`, `__TIME__` and `__TIMESTAMP__`
        const TIME_MACROS = 1 << 2;
        /// Ignore defines when a precompiled header is in use
        const PCH_DEFINES = 1 << 3;
        /// Match files by stat (size, mtime, ctime) without reading their contents
        const FILE_STAT_MATCHES = 1 << 4;
        /// Leave system headers out of the manifest, like `-MM` versus `-M`
        const SYSTEM_HEADERS = 1 << 5;
        /// Ignore ctime when comparing file stats
        const FILE_STAT_MATCHES_CTIME = 1 << 6;
        /// Leave `-index-store-path` out of the manifest hash
        const CLANG_INDEX_STORE = 1 << 7;
        /// Ignore locale environment variables
        const LOCALE = 1 << 8;
        /// Allow caching even when `-fmodules` is used
        const MODULES = 1 << 9;
        /// Ignore the virtual file system overlay file
        const IVFSOVERLAY = 1 << 10;
        /// Allow an incorrect working directory in `.gcno` files
        const GCNO_CWD = 1 << 11;
    }
}

/// Name, flag and help text, in bit order.
const VOCABULARY: [(&str, Sloppy, &str); 12] = [
    (
        "include_file_mtime",
        Sloppy::INCLUDE_FILE_MTIME,
        "accept include files with a too new mtime",
    ),
    (
        "include_file_ctime",
        Sloppy::INCLUDE_FILE_CTIME,
        "accept include files with a too new ctime",
    ),
    (
        "time_macros",
        Sloppy::TIME_MACROS,
        "ignore __DATE__, __TIME__ and __TIMESTAMP__",
    ),
    (
        "pch_defines",
        Sloppy::PCH_DEFINES,
        "ignore defines when using precompiled headers",
    ),
    (
        "file_stat_matches",
        Sloppy::FILE_STAT_MATCHES,
        "match files on size, mtime and ctime instead of content",
    ),
    (
        "system_headers",
        Sloppy::SYSTEM_HEADERS,
        "do not track system headers in the manifest",
    ),
    (
        "file_stat_matches_ctime",
        Sloppy::FILE_STAT_MATCHES_CTIME,
        "ignore ctime when matching files on stat",
    ),
    (
        "clang_index_store",
        Sloppy::CLANG_INDEX_STORE,
        "ignore -index-store-path when hashing",
    ),
    ("locale", Sloppy::LOCALE, "ignore locale environment variables"),
    ("modules", Sloppy::MODULES, "allow caching when -fmodules is used"),
    (
        "ivfsoverlay",
        Sloppy::IVFSOVERLAY,
        "ignore the VFS overlay file",
    ),
    (
        "gcno_cwd",
        Sloppy::GCNO_CWD,
        "allow a wrong working directory in .gcno files",
    ),
];

impl Default for Sloppy {
    fn default() -> Self {
        Sloppy::NONE
    }
}

impl Sloppy {
    /// The empty pattern. Enabling it changes nothing.
    pub const NONE: Sloppy = Sloppy::empty();

    /// Every defined flag, in bit order.
    pub const ALL_NAMED: [Sloppy; 12] = [
        Sloppy::INCLUDE_FILE_MTIME,
        Sloppy::INCLUDE_FILE_CTIME,
        Sloppy::TIME_MACROS,
        Sloppy::PCH_DEFINES,
        Sloppy::FILE_STAT_MATCHES,
        Sloppy::SYSTEM_HEADERS,
        Sloppy::FILE_STAT_MATCHES_CTIME,
        Sloppy::CLANG_INDEX_STORE,
        Sloppy::LOCALE,
        Sloppy::MODULES,
        Sloppy::IVFSOVERLAY,
        Sloppy::GCNO_CWD,
    ];

    /// Config name of a single defined flag.
    ///
    /// Returns `None` for the empty pattern, unions and unknown bits.
    pub fn name(self) -> Option<&'static str> {
        VOCABULARY
            .iter()
            .find(|(_, flag, _)| *flag == self)
            .map(|(name, _, _)| *name)
    }

    /// Look up a flag by its config name (case insensitive).
    ///
    /// `no_system_headers` is accepted as an older spelling of
    /// `system_headers`.
    pub fn from_config_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if name == "no_system_headers" {
            return Some(Self::SYSTEM_HEADERS);
        }
        VOCABULARY
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|(_, flag, _)| *flag)
    }

    /// One-line help text for a single defined flag.
    pub fn description(self) -> Option<&'static str> {
        VOCABULARY
            .iter()
            .find(|(_, flag, _)| *flag == self)
            .map(|(_, _, text)| *text)
    }

    /// Zero-based bit position of a single-bit pattern.
    pub fn bit_position(self) -> Option<u32> {
        if self.bits().count_ones() == 1 {
            Some(self.bits().trailing_zeros())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_positions_are_stable() {
        for (i, flag) in Sloppy::ALL_NAMED.iter().enumerate() {
            assert_eq!(flag.bits(), 1u32 << i);
            assert_eq!(flag.bit_position(), Some(i as u32));
        }
        assert_eq!(Sloppy::all().bits(), 0x0FFF);
    }

    #[test]
    fn name_roundtrip() {
        for flag in Sloppy::ALL_NAMED {
            let name = flag.name().unwrap();
            assert_eq!(Sloppy::from_config_name(name), Some(flag));
            assert!(flag.description().is_some());
        }
    }

    #[test]
    fn name_is_none_for_non_flags() {
        assert_eq!(Sloppy::NONE.name(), None);
        assert_eq!((Sloppy::LOCALE | Sloppy::MODULES).name(), None);
        assert_eq!(Sloppy::from_bits_retain(1 << 20).name(), None);
        assert_eq!(Sloppy::NONE.bit_position(), None);
    }

    #[test]
    fn from_config_name_variants() {
        assert_eq!(Sloppy::from_config_name("TIME_MACROS"), Some(Sloppy::TIME_MACROS));
        assert_eq!(Sloppy::from_config_name(" locale "), Some(Sloppy::LOCALE));
        assert_eq!(
            Sloppy::from_config_name("no_system_headers"),
            Some(Sloppy::SYSTEM_HEADERS)
        );
        assert_eq!(Sloppy::from_config_name("timemacros"), None);
        assert_eq!(Sloppy::from_config_name(""), None);
    }

    #[test]
    fn config_names_differ_from_constant_names() {
        // bitflags' own lookup only knows the exact constant names
        assert_eq!(Sloppy::from_name("TIME_MACROS"), Some(Sloppy::TIME_MACROS));
        assert_eq!(Sloppy::from_name("time_macros"), None);
        assert_eq!(Sloppy::from_name("no_system_headers"), None);
        assert_eq!(
            Sloppy::from_config_name("time_macros"),
            Some(Sloppy::TIME_MACROS)
        );
    }
}
