use crate::angles::{hour_angle, hour_label, polar, HandAngles};
use crate::reading::ZonedTime;

/// Number of ticks (and labels) around the dial.
pub const TICK_COUNT: u32 = 12;

/// Fixed design constants of the clock face, in logical pixels.
///
/// All positions are relative to the top-left of a `size` box; the dial is
/// a circle of `radius` centered at `(inset + radius, inset + radius)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialGeometry {
    pub radius: f32,
    /// Tick length, label inset step and font size.
    pub unit: f32,
    /// Margin between the box edge and the outline ring.
    pub inset: f32,
    pub thin: f32,
    pub medium: f32,
    pub heavy: f32,
    /// Vertical position of the digital readout's baseline.
    pub digital_baseline: f32,
    /// Preferred widget size `(width, height)`.
    pub size: (f32, f32),
}

impl DialGeometry {
    pub const STANDARD: Self = Self {
        radius: 250.0,
        unit: 30.0,
        inset: 50.0,
        thin: 2.0,
        medium: 5.0,
        heavy: 8.0,
        digital_baseline: 650.0,
        size: (600.0, 700.0),
    };

    #[inline]
    pub fn center(&self) -> (f32, f32) {
        let c = self.inset + self.radius;
        (c, c)
    }

    /// Size of the digital readout font.
    #[inline]
    pub fn font_size(&self) -> f32 {
        self.unit
    }

    /// The twelve tick marks, starting at 12 o'clock and going clockwise.
    pub fn ticks(&self) -> impl Iterator<Item = Tick> + '_ {
        (0..TICK_COUNT).map(move |index| Tick {
            index,
            angle: hour_angle(index),
            inner: self.radius - self.unit,
            outer: self.radius,
            width: self.medium,
            label: hour_label(index),
            label_radius: self.radius - 2.0 * self.unit,
        })
    }

    /// Outline ring around the dial: `(radius, stroke width)`.
    #[inline]
    pub fn outline(&self) -> (f32, f32) {
        (self.radius, self.medium)
    }

    /// Hour, minute and second hands for `time`, in that order.
    pub fn hands(&self, time: &ZonedTime) -> [Hand; 3] {
        let angles = HandAngles::of(time);
        [
            Hand {
                kind: HandKind::Hour,
                angle: angles.hour,
                length: self.radius - 3.0 * self.unit,
                width: self.heavy,
            },
            Hand {
                kind: HandKind::Minute,
                angle: angles.minute,
                length: self.radius - 2.0 * self.unit,
                width: self.medium,
            },
            Hand {
                kind: HandKind::Second,
                angle: angles.second,
                length: self.radius - self.unit,
                width: self.thin,
            },
        ]
    }
}

impl Default for DialGeometry {
    fn default() -> Self {
        Self::STANDARD
    }
}

// ── Tick ──────────────────────────────────────────────────────────────────

/// One hour mark: a radial segment plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub index: u32,
    pub angle: f32,
    pub inner: f32,
    pub outer: f32,
    pub width: f32,
    pub label: String,
    /// Distance from the center to the label's center.
    pub label_radius: f32,
}

impl Tick {
    /// Segment endpoints relative to the dial center.
    #[inline]
    pub fn segment(&self) -> ((f32, f32), (f32, f32)) {
        (polar(self.angle, self.inner), polar(self.angle, self.outer))
    }

    #[inline]
    pub fn label_anchor(&self) -> (f32, f32) {
        polar(self.angle, self.label_radius)
    }
}

// ── Hand ──────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

/// A hand drawn from the dial center outward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hand {
    pub kind: HandKind,
    pub angle: f32,
    pub length: f32,
    pub width: f32,
}

impl Hand {
    /// Tip position relative to the dial center.
    #[inline]
    pub fn tip(&self) -> (f32, f32) {
        polar(self.angle, self.length)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::zone::Zone;

    fn at_utc(h: u32, m: u32, s: u32) -> ZonedTime {
        let instant = Utc.with_ymd_and_hms(2026, 10, 18, h, m, s).unwrap();
        Zone::resolve("UTC").localize(instant)
    }

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
    }

    // ── layout constants ──────────────────────────────────────────────────

    #[test]
    fn standard_dial_is_centered_in_its_box() {
        let g = DialGeometry::STANDARD;
        assert_eq!(g.center(), (300.0, 300.0));
        assert_eq!(g.center().0 * 2.0, g.size.0);
        assert!(g.digital_baseline > g.center().1 + g.radius);
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn twelve_ticks_with_unique_labels() {
        let g = DialGeometry::STANDARD;
        let ticks: Vec<Tick> = g.ticks().collect();
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0].label, "12");

        let mut labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 12);
    }

    #[test]
    fn first_tick_spans_the_top_of_the_rim() {
        let g = DialGeometry::STANDARD;
        let top = g.ticks().next().unwrap();
        let (inner, outer) = top.segment();
        assert!(close(inner, (0.0, -220.0)));
        assert!(close(outer, (0.0, -250.0)));
        assert!(close(top.label_anchor(), (0.0, -190.0)));
    }

    #[test]
    fn three_oclock_tick_is_on_the_right() {
        let g = DialGeometry::STANDARD;
        let three = g.ticks().nth(3).unwrap();
        assert_eq!(three.label, "3");
        assert!(close(three.segment().1, (250.0, 0.0)));
    }

    // ── hands ─────────────────────────────────────────────────────────────

    #[test]
    fn hands_shrink_and_thin_from_hour_to_second() {
        let g = DialGeometry::STANDARD;
        let [hour, minute, second] = g.hands(&at_utc(10, 10, 10));
        assert_eq!((hour.kind, minute.kind, second.kind), (HandKind::Hour, HandKind::Minute, HandKind::Second));
        assert!(hour.length < minute.length && minute.length < second.length);
        assert!(hour.width > minute.width && minute.width > second.width);
        assert_eq!((hour.length, minute.length, second.length), (160.0, 190.0, 220.0));
    }

    #[test]
    fn noon_points_every_hand_up() {
        let g = DialGeometry::STANDARD;
        for hand in g.hands(&at_utc(12, 0, 0)) {
            assert!(close(hand.tip(), (0.0, -hand.length)), "{:?}", hand.kind);
        }
    }

    #[test]
    fn half_past_points_minute_and_second_down() {
        let g = DialGeometry::STANDARD;
        let [hour, minute, second] = g.hands(&at_utc(18, 30, 30));
        assert!(close(hour.tip(), (0.0, hour.length)));
        assert!(close(minute.tip(), (0.0, minute.length)));
        assert!(close(second.tip(), (0.0, second.length)));
    }
}
