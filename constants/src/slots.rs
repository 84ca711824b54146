use std::fmt;

/// Named position in the arrangement hosting exactly one flower model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BranchSlot {
    Main,
    Guest,
    Middle1,
    Middle2,
    Middle3,
    Middle4,
}

impl BranchSlot {
    pub const ALL: [BranchSlot; 6] = [
        BranchSlot::Main,
        BranchSlot::Guest,
        BranchSlot::Middle1,
        BranchSlot::Middle2,
        BranchSlot::Middle3,
        BranchSlot::Middle4,
    ];

    /// Slots produced by the base optimization phase.
    pub const BASE: [BranchSlot; 4] = [
        BranchSlot::Main,
        BranchSlot::Guest,
        BranchSlot::Middle1,
        BranchSlot::Middle2,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Dense index for per-slot arrays.
    pub fn index(self) -> usize {
        match self {
            Self::Main => 0,
            Self::Guest => 1,
            Self::Middle1 => 2,
            Self::Middle2 => 3,
            Self::Middle3 => 4,
            Self::Middle4 => 5,
        }
    }

    /// Wire key used by the optimizer payloads.
    pub fn key(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Guest => "guest",
            Self::Middle1 => "middle1",
            Self::Middle2 => "middle2",
            Self::Middle3 => "middle3",
            Self::Middle4 => "middle4",
        }
    }

    /// Label shown in the control panel.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Main => "主枝",
            Self::Guest => "客枝",
            Self::Middle1 => "中間1",
            Self::Middle2 => "中間2",
            Self::Middle3 => "中間3",
            Self::Middle4 => "中間4",
        }
    }
}

impl fmt::Display for BranchSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Rotation axis of a branch pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleAxis {
    /// Rotation about the vertical axis.
    Azimuth,
    /// Rotation about the secondary (Z) axis.
    Elevation,
}

impl AngleAxis {
    pub const ALL: [AngleAxis; 2] = [AngleAxis::Azimuth, AngleAxis::Elevation];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Azimuth => "方位",
            Self::Elevation => "高度",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense_and_match_all_order() {
        for (i, slot) in BranchSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = BranchSlot::ALL.iter().map(|slot| slot.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), BranchSlot::COUNT);
    }

    #[test]
    fn base_slots_come_first() {
        assert_eq!(BranchSlot::BASE, BranchSlot::ALL[..4]);
    }
}
