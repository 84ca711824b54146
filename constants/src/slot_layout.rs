use crate::slots::{AngleAxis, BranchSlot};

/// Inclusive slider range in degrees. A zero-width range locks the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    pub min: f32,
    pub max: f32,
}

impl AngleRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn is_locked(&self) -> bool {
        self.max <= self.min
    }

    pub fn clamp(&self, degrees: f32) -> f32 {
        degrees.clamp(self.min, self.max)
    }
}

const LOCKED: AngleRange = AngleRange::new(0.0, 0.0);
const MIDDLE_AZIMUTH: AngleRange = AngleRange::new(-120.0, 120.0);
const MIDDLE_ELEVATION: AngleRange = AngleRange::new(0.0, 45.0);

pub fn angle_range(slot: BranchSlot, axis: AngleAxis) -> AngleRange {
    match (slot, axis) {
        (BranchSlot::Main, AngleAxis::Azimuth) => LOCKED,
        (BranchSlot::Main, AngleAxis::Elevation) => AngleRange::new(-20.0, 20.0),
        (BranchSlot::Guest, _) => LOCKED,
        (
            BranchSlot::Middle1 | BranchSlot::Middle2 | BranchSlot::Middle3 | BranchSlot::Middle4,
            AngleAxis::Azimuth,
        ) => MIDDLE_AZIMUTH,
        (
            BranchSlot::Middle1 | BranchSlot::Middle2 | BranchSlot::Middle3 | BranchSlot::Middle4,
            AngleAxis::Elevation,
        ) => MIDDLE_ELEVATION,
    }
}

/// Horizontal (x, z) nudge applied to a branch model to reduce overlap with
/// its neighbours.
pub fn horizontal_offset(slot: BranchSlot) -> (f32, f32) {
    match slot {
        BranchSlot::Main => (0.1, 0.0),
        BranchSlot::Guest => (0.0, 0.0),
        BranchSlot::Middle1 => (0.1, 0.0),
        BranchSlot::Middle2 => (0.0, 0.1),
        BranchSlot::Middle3 | BranchSlot::Middle4 => (0.0, 0.0),
    }
}

/// Live colour value before any colour control exists for the slot.
pub fn default_color_hex(slot: BranchSlot) -> &'static str {
    match slot {
        BranchSlot::Main => "#ff69b4",
        BranchSlot::Guest => "#ffa500",
        BranchSlot::Middle1 | BranchSlot::Middle3 => "#90ee90",
        BranchSlot::Middle2 | BranchSlot::Middle4 => "#add8e6",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_is_fully_locked() {
        for axis in AngleAxis::ALL {
            assert!(angle_range(BranchSlot::Guest, axis).is_locked());
        }
    }

    #[test]
    fn main_only_tilts() {
        assert!(angle_range(BranchSlot::Main, AngleAxis::Azimuth).is_locked());
        let elevation = angle_range(BranchSlot::Main, AngleAxis::Elevation);
        assert!(!elevation.is_locked());
        assert_eq!(elevation.clamp(35.0), 20.0);
        assert_eq!(elevation.clamp(-35.0), -20.0);
    }

    #[test]
    fn middle_slots_share_ranges() {
        for slot in [BranchSlot::Middle1, BranchSlot::Middle4] {
            assert_eq!(angle_range(slot, AngleAxis::Azimuth), AngleRange::new(-120.0, 120.0));
            assert_eq!(angle_range(slot, AngleAxis::Elevation), AngleRange::new(0.0, 45.0));
        }
    }
}
