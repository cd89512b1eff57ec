use serde::Serialize;

/// One entry per finger, thumb first.
pub const FINGER_COUNT: usize = 5;

/// Upper bound (exclusive) for any angle, in degrees.
pub const FULL_TURN: u16 = 360;

/// Per-finger target and assisted flexion angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleSet {
    pub target_angle: [u16; FINGER_COUNT],
    pub assisted_angle: [u16; FINGER_COUNT],
}

/// Angles served by the glove endpoint. Edit here to retune the device.
pub const ANGLE_SET: AngleSet = AngleSet {
    target_angle: [45, 90, 135, 180, 45],
    assisted_angle: [30, 60, 90, 120, 30],
};

impl AngleSet {
    /// True when every angle lies in `[0, 360)`.
    pub const fn is_within_full_turn(&self) -> bool {
        let mut i = 0;
        while i < FINGER_COUNT {
            if self.target_angle[i] >= FULL_TURN || self.assisted_angle[i] >= FULL_TURN {
                return false;
            }
            i += 1;
        }
        true
    }
}

const _: () = assert!(ANGLE_SET.is_within_full_turn());
