//! The set of enabled sloppiness flags.

use crate::Sloppy;
use serde::{Deserialize, Serialize};

/// The leniency switches a cache run may use.
///
/// Starts empty (or from a single flag, or from a stored bitmask) and only
/// ever gains flags. The raw bits are kept verbatim, including bits that no
/// defined flag names, so a bitmask from a newer version survives a
/// round-trip through an older one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sloppiness {
    value: Sloppy,
}

impl Sloppiness {
    /// Create a set holding `initial`. Pass [`Sloppy::NONE`] for an empty set.
    pub const fn new(initial: Sloppy) -> Self {
        Self { value: initial }
    }

    /// Rebuild a set from a stored bitmask. Unknown bits are preserved.
    pub const fn from_bitmask(bits: u32) -> Self {
        Self {
            value: Sloppy::from_bits_retain(bits),
        }
    }

    /// Turn on every bit of `flag`. Bits already set stay set.
    #[inline]
    pub fn enable(&mut self, flag: Sloppy) {
        self.value.insert(flag);
    }

    /// Turn on each flag in turn.
    pub fn enable_all<I>(&mut self, flags: I)
    where
        I: IntoIterator<Item = Sloppy>,
    {
        for flag in flags {
            self.enable(flag);
        }
    }

    /// True when every bit of `flag` is enabled.
    ///
    /// For a union this is an all-of test; query flags one at a time for
    /// any-of semantics.
    #[inline]
    pub fn is_enabled(&self, flag: Sloppy) -> bool {
        self.value.contains(flag)
    }

    /// The raw bitmask, for storage, hashing and comparison.
    #[inline]
    pub const fn to_bitmask(&self) -> u32 {
        self.value.bits()
    }

    /// The enabled bits as a flag pattern, unknown bits included.
    pub const fn flags(&self) -> Sloppy {
        self.value
    }

    /// True when no bit is set, known or unknown.
    pub fn is_empty(&self) -> bool {
        self.value.bits() == 0
    }

    /// Bits that are set but name no defined flag.
    pub fn unknown_bits(&self) -> u32 {
        self.value.bits() & !Sloppy::all().bits()
    }

    /// Enabled defined flags, in bit order.
    pub fn iter(&self) -> impl Iterator<Item = Sloppy> + '_ {
        Sloppy::ALL_NAMED
            .into_iter()
            .filter(move |flag| self.is_enabled(*flag))
    }
}

impl From<Sloppy> for Sloppiness {
    fn from(flag: Sloppy) -> Self {
        Self::new(flag)
    }
}

impl From<u32> for Sloppiness {
    fn from(bits: u32) -> Self {
        Self::from_bitmask(bits)
    }
}

impl From<Sloppiness> for u32 {
    fn from(sloppiness: Sloppiness) -> Self {
        sloppiness.to_bitmask()
    }
}

impl Extend<Sloppy> for Sloppiness {
    fn extend<I: IntoIterator<Item = Sloppy>>(&mut self, iter: I) {
        self.enable_all(iter);
    }
}

impl FromIterator<Sloppy> for Sloppiness {
    fn from_iter<I: IntoIterator<Item = Sloppy>>(iter: I) -> Self {
        let mut sloppiness = Self::default();
        sloppiness.enable_all(iter);
        sloppiness
    }
}

impl Serialize for Sloppiness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_bitmask().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Sloppiness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Sloppiness::from_bitmask(bits))
    }
}
