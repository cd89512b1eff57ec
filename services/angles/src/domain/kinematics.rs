//! Maps flex-sensor tilt readings to servo angles.
//!
//! Each finger is modelled as a single link: `angle = asin(tilt / length)` in
//! degrees, shifted by a fixed offset and clamped to the servo's travel.

/// Servo travel, in degrees.
pub const SERVO_MIN_ANGLE: f64 = 0.0;
pub const SERVO_MAX_ANGLE: f64 = 180.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum KinematicsError {
    #[error("finger length must be finite and positive, got {0}")]
    InvalidFingerLength(f64),
    #[error("angle offset must be finite, got {0}")]
    InvalidAngleOffset(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerKinematics {
    finger_length: f64,
    angle_offset: f64,
}

impl Default for FingerKinematics {
    fn default() -> Self {
        Self {
            finger_length: 1.0,
            angle_offset: 0.0,
        }
    }
}

impl FingerKinematics {
    pub fn new(finger_length: f64, angle_offset: f64) -> Result<Self, KinematicsError> {
        if !finger_length.is_finite() || finger_length <= 0.0 {
            return Err(KinematicsError::InvalidFingerLength(finger_length));
        }
        if !angle_offset.is_finite() {
            return Err(KinematicsError::InvalidAngleOffset(angle_offset));
        }
        Ok(Self {
            finger_length,
            angle_offset,
        })
    }

    pub fn finger_length(&self) -> f64 {
        self.finger_length
    }

    pub fn angle_offset(&self) -> f64 {
        self.angle_offset
    }

    /// Servo angle for one tilt reading. A NaN reading parks the servo at
    /// [`SERVO_MIN_ANGLE`].
    pub fn servo_angle(&self, tilt: f64) -> f64 {
        if tilt.is_nan() {
            return SERVO_MIN_ANGLE;
        }
        let ratio = (tilt / self.finger_length).clamp(-1.0, 1.0);
        (ratio.asin().to_degrees() + self.angle_offset).clamp(SERVO_MIN_ANGLE, SERVO_MAX_ANGLE)
    }

    /// Servo angles for a batch of readings, in input order.
    pub fn servo_angles(&self, tilts: &[f64]) -> Vec<f64> {
        tilts.iter().map(|&tilt| self.servo_angle(tilt)).collect()
    }
}
