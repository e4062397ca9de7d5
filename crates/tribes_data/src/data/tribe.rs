use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the occupant of a grid cell.
///
/// The living variants are declared in their significant order: cluster `i`
/// of the initial population becomes `Tribe::LIVING[i]`, and when a dead cell
/// could be claimed by several tribes the earliest one wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Tribe {
    Vikings,
    Warriors,
    Mages,
    /// Empty cell.
    #[default]
    None,
}

impl Tribe {
    /// Living tribes in enumeration order.
    pub const LIVING: [Tribe; 3] = [Tribe::Vikings, Tribe::Warriors, Tribe::Mages];

    #[inline]
    pub fn is_alive(self) -> bool {
        self != Tribe::None
    }

    /// Position in [`Tribe::LIVING`], `None` for the empty sentinel.
    #[inline]
    pub fn living_index(self) -> Option<usize> {
        match self {
            Tribe::Vikings => Some(0),
            Tribe::Warriors => Some(1),
            Tribe::Mages => Some(2),
            Tribe::None => None,
        }
    }

    /// Stable numeric identity fed into the board hash.
    #[inline]
    pub fn code(self) -> u32 {
        match self {
            Tribe::None => 0,
            Tribe::Vikings => 1,
            Tribe::Warriors => 2,
            Tribe::Mages => 3,
        }
    }

    pub fn sigil(self) -> char {
        match self {
            Tribe::Vikings => 'A',
            Tribe::Warriors => 'B',
            Tribe::Mages => 'C',
            Tribe::None => ' ',
        }
    }

    /// Inverse of [`Tribe::sigil`]. `.` is also read as an empty cell.
    pub fn from_sigil(c: char) -> Option<Self> {
        match c {
            'A' | 'a' => Some(Tribe::Vikings),
            'B' | 'b' => Some(Tribe::Warriors),
            'C' | 'c' => Some(Tribe::Mages),
            ' ' | '.' => Some(Tribe::None),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tribe::Vikings => "VIKINGS",
            Tribe::Warriors => "WARRIORS",
            Tribe::Mages => "MAGES",
            Tribe::None => "NONE",
        }
    }
}

impl fmt::Display for Tribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_living_order_excludes_none() {
        assert!(Tribe::LIVING.iter().all(|t| t.is_alive()));
        assert!(!Tribe::None.is_alive());
        for (i, tribe) in Tribe::LIVING.iter().enumerate() {
            assert_eq!(tribe.living_index(), Some(i));
        }
        assert_eq!(Tribe::None.living_index(), None);
    }

    #[test]
    fn test_codes_are_distinct() {
        let mut codes: Vec<u32> = Tribe::LIVING.iter().map(|t| t.code()).collect();
        codes.push(Tribe::None.code());
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn test_sigil_roundtrip() {
        for tribe in Tribe::LIVING.into_iter().chain([Tribe::None]) {
            assert_eq!(Tribe::from_sigil(tribe.sigil()), Some(tribe));
        }
        assert_eq!(Tribe::from_sigil('.'), Some(Tribe::None));
        assert_eq!(Tribe::from_sigil('x'), None);
    }
}
