//! Hand and tick angles.
//!
//! Angles are in radians in screen space: `0` points at 3 o'clock and angles
//! grow clockwise because +Y points down. Every hand uses the same formula
//! `π·(unit − offset) / scale`; the offset rotates the dial by −90° so that
//! the zero position sits at 12 o'clock.

use core::f32::consts::PI;

use crate::reading::ZonedTime;

/// Rotation parameters for one hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandScale {
    pub offset: f32,
    pub scale: f32,
}

/// Twelve positions per turn.
pub const HOUR_SCALE: HandScale = HandScale { offset: 3.0, scale: 6.0 };

/// Sixty positions per turn; shared by the minute and second hands.
pub const SIXTY_SCALE: HandScale = HandScale { offset: 15.0, scale: 30.0 };

#[inline]
pub fn hand_angle(unit: u32, hs: HandScale) -> f32 {
    PI * (unit as f32 - hs.offset) / hs.scale
}

/// `hour` is the 12-hour value; `12` and `0` point the same way.
#[inline]
pub fn hour_angle(hour: u32) -> f32 {
    hand_angle(hour % 12, HOUR_SCALE)
}

#[inline]
pub fn minute_angle(minute: u32) -> f32 {
    hand_angle(minute, SIXTY_SCALE)
}

#[inline]
pub fn second_angle(second: u32) -> f32 {
    hand_angle(second, SIXTY_SCALE)
}

/// The three hand angles for one reading.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    /// Whole-unit angles; the hour hand does not creep between hours.
    pub fn of(time: &ZonedTime) -> Self {
        Self {
            hour: hour_angle(time.hour12()),
            minute: minute_angle(time.minute()),
            second: second_angle(time.second()),
        }
    }
}

/// Label drawn next to tick `index` (`0..12`). Index `0` is the top of the dial.
pub fn hour_label(index: u32) -> String {
    match index % 12 {
        0 => "12".to_string(),
        n => n.to_string(),
    }
}

/// Point at distance `radius` along `angle`, relative to the dial center.
#[inline]
pub fn polar(angle: f32, radius: f32) -> (f32, f32) {
    (angle.cos() * radius, angle.sin() * radius)
}
