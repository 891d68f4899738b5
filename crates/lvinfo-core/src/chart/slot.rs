use strum::{FromRepr, IntoStaticStr};

use crate::config::SLOT_COUNT;

/// Difficulty label written to the level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum Tier {
    #[strum(serialize = "BAS")]
    Bas,
    #[strum(serialize = "ADV")]
    Adv,
    #[strum(serialize = "EXP")]
    Exp,
    #[strum(serialize = "MAS")]
    Mas,
    #[strum(serialize = "REM")]
    Rem,
}

impl Tier {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Position in a song's rating list.
///
/// The two Re:MASTER slots stay distinct here even though both carry the
/// `REM` label, so a song rated in both yields two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FromRepr)]
#[repr(u8)]
pub enum Slot {
    Basic = 0,
    Advanced = 1,
    Expert = 2,
    Master = 3,
    ReMasterA = 4,
    ReMasterB = 5,
}

const SLOT_TIERS: [Tier; SLOT_COUNT] = [
    Tier::Bas,
    Tier::Adv,
    Tier::Exp,
    Tier::Mas,
    Tier::Rem,
    Tier::Rem,
];

impl Slot {
    /// Every slot in index order.
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::Basic,
        Slot::Advanced,
        Slot::Expert,
        Slot::Master,
        Slot::ReMasterA,
        Slot::ReMasterB,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn tier(self) -> Tier {
        SLOT_TIERS[self.index()]
    }
}
