use super::geometry::{self, Point, RadarGeometry};
use super::hue::Hue;
use super::{DEFAULT_INSET, DEFAULT_SIZE, DEFAULT_SLOT_COUNT, DEFAULT_SPEED, PI2};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarConfig {
    /// Number of slices making up the sweep ring.
    pub slot_count: usize,
    /// Expected angular velocity in rad/ms.
    pub speed: f64,
    /// Diameter of the surface in pixels.
    pub size: f64,
    pub inset: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            speed: DEFAULT_SPEED,
            size: DEFAULT_SIZE,
            inset: DEFAULT_INSET,
        }
    }
}

impl RadarConfig {
    pub fn full_turn_ms(&self) -> f64 {
        PI2 / self.speed
    }
}

/// One slice of the sweep: pie wedge from `tip` back around to `tail`, closed at the center.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepArc {
    pub tip: Point,
    pub tail: Point,
    pub tip_angle: f64,
    pub tail_angle: f64,
    pub large_arc: bool,
    pub hue: Hue,
}

impl SweepArc {
    pub fn svg_path(&self, geometry: &RadarGeometry) -> String {
        let r = geometry.radius;
        let m = geometry.middle;
        format!(
            "M{} {}A{r} {r} 0 {} 0 {} {}L{m} {m}",
            self.tip.x,
            self.tip.y,
            u8::from(self.large_arc),
            self.tail.x,
            self.tail.y,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand {
    pub tip: Point,
    pub hue: Hue,
}

impl Hand {
    pub fn svg_path(&self, geometry: &RadarGeometry) -> String {
        let m = geometry.middle;
        format!("M{m} {m}L{} {}", self.tip.x, self.tip.y)
    }
}

/// What a single step computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub slot: usize,
    pub rdelta: f64,
    pub rotation: f64,
    pub hue: Hue,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LastFrame {
    now: f64,
    rotation: f64,
    tip: Point,
}

/// Sweep state of one radar. Pure: time comes in through [`Radar::advance`].
#[derive(Debug, Clone)]
pub struct Radar {
    geometry: RadarGeometry,
    speed: f64,
    arcs: Vec<Option<SweepArc>>,
    opacities: Vec<f64>,
    hand: Option<Hand>,
    cursor: usize,
    last: LastFrame,
}

impl Radar {
    pub fn new(config: &RadarConfig, now: f64) -> Self {
        let geometry = RadarGeometry::new(config.size, config.inset);
        let slot_count = config.slot_count.max(1);
        Self {
            geometry,
            speed: config.speed,
            arcs: vec![None; slot_count],
            opacities: vec![0.0; slot_count],
            hand: None,
            cursor: 0,
            last: LastFrame {
                now,
                rotation: 0.0,
                tip: Point::new(geometry.middle + geometry.radius, geometry.middle),
            },
        }
    }

    pub fn advance(&mut self, now: f64) -> Tick {
        let rdelta = geometry::rotation_delta(self.speed, now - self.last.now);
        let rotation = geometry::advance_rotation(self.last.rotation, rdelta);
        let tip = self.geometry.point_at(rotation);
        // rdelta / speed only recovers the real interval when the cap did not kick in
        let hue = Hue::from_elapsed(rdelta / self.speed);

        let slot = self.cursor;
        self.arcs[slot] = Some(SweepArc {
            tip,
            tail: self.last.tip,
            tip_angle: rotation,
            tail_angle: self.last.rotation,
            large_arc: rdelta >= PI,
            hue,
        });
        self.hand = Some(Hand { tip, hue });
        self.fade(slot);

        self.cursor = (slot + 1) % self.slot_count();
        self.last = LastFrame { now, rotation, tip };

        log::trace!(
            "radar tick slot={slot} rdelta={rdelta:.4} hue={:.1}",
            hue.degrees()
        );
        Tick {
            slot,
            rdelta,
            rotation,
            hue,
        }
    }

    fn fade(&mut self, newest: usize) {
        let n = self.slot_count();
        for age in 0..n {
            self.opacities[(n + newest - age) % n] = 1.0 - age as f64 / n as f64;
        }
    }

    pub fn geometry(&self) -> &RadarGeometry {
        &self.geometry
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn slot_count(&self) -> usize {
        self.arcs.len()
    }

    /// Slot the next step will write.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn rotation(&self) -> f64 {
        self.last.rotation
    }

    pub fn last_now(&self) -> f64 {
        self.last.now
    }

    pub fn last_tip(&self) -> Point {
        self.last.tip
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    pub fn opacities(&self) -> &[f64] {
        &self.opacities
    }

    /// Written arcs with their current opacity, oldest first.
    pub fn sweep(&self) -> impl Iterator<Item = (&SweepArc, f64)> {
        let n = self.slot_count();
        (0..n)
            .map(move |i| (self.cursor + i) % n)
            .filter_map(move |i| self.arcs[i].as_ref().map(|arc| (arc, self.opacities[i])))
    }

    pub fn arc(&self, slot: usize) -> Option<&SweepArc> {
        self.arcs.get(slot).and_then(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(slot_count: usize, speed: f64) -> RadarConfig {
        RadarConfig {
            slot_count,
            speed,
            size: 100.0,
            inset: 2.0,
        }
    }

    #[test]
    fn test_initial_state() {
        let radar = Radar::new(&config(4, 0.01), 1000.0);
        assert_eq!(radar.cursor(), 0);
        assert_eq!(radar.rotation(), 0.0);
        assert_eq!(radar.last_now(), 1000.0);
        assert_eq!(radar.last_tip(), Point::new(98.0, 50.0));
        assert!(radar.hand().is_none());
        assert_eq!(radar.sweep().count(), 0);
    }

    #[test]
    fn test_zero_slot_count_is_clamped() {
        let mut radar = Radar::new(&config(0, 0.01), 0.0);
        assert_eq!(radar.slot_count(), 1);
        radar.advance(16.0);
        assert_eq!(radar.cursor(), 0);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut radar = Radar::new(&config(5, 0.0017), 0.0);
        for step in 0..23 {
            let tick = radar.advance(step as f64 * 16.0);
            assert_eq!(tick.slot, step % 5);
            assert!(radar.cursor() < 5);
        }
    }

    #[test]
    fn test_rotation_stays_in_range() {
        let mut radar = Radar::new(&config(8, 0.0017), 0.0);
        let mut now = 0.0;
        for step in 0..5000u32 {
            now += f64::from(step % 97) * 37.0;
            let tick = radar.advance(now);
            assert!((0.0..PI2).contains(&tick.rotation));
            assert!(tick.rdelta >= 0.0 && tick.rdelta <= PI2 - 0.0017);
        }
    }

    #[test]
    fn test_arc_connects_to_previous_tip() {
        let mut radar = Radar::new(&config(4, 0.01), 0.0);
        radar.advance(50.0);
        let first_tip = radar.last_tip();
        radar.advance(100.0);

        let arc = radar.arc(1).unwrap();
        assert_eq!(arc.tail, first_tip);
        assert_eq!(arc.tip, radar.last_tip());
        assert!((arc.tip_angle - 1.0).abs() < 1e-12);
        assert!((arc.tail_angle - 0.5).abs() < 1e-12);
        assert_eq!(radar.hand().unwrap().tip, arc.tip);
    }

    #[test]
    fn test_large_arc_flag() {
        let mut radar = Radar::new(&config(4, 0.01), 0.0);
        radar.advance(100.0);
        assert!(!radar.arc(0).unwrap().large_arc);
        radar.advance(500.0);
        assert!(radar.arc(1).unwrap().large_arc);
    }

    #[test]
    fn test_opacity_fades_linearly() {
        let mut radar = Radar::new(&config(4, 0.01), 0.0);
        for step in 0..3 {
            radar.advance(step as f64 * 16.0);
        }
        // slot 2 was just written
        assert_eq!(radar.opacities(), &[0.5, 0.75, 1.0, 0.25]);
    }

    #[test]
    fn test_opacity_is_periodic() {
        let mut radar = Radar::new(&config(6, 0.0017), 0.0);
        let mut now = 0.0;
        let mut history = Vec::new();
        for _ in 0..18 {
            now += 16.0;
            let tick = radar.advance(now);
            assert_eq!(radar.opacities()[tick.slot], 1.0);
            history.push(radar.opacities().to_vec());
        }
        for i in 6..18 {
            assert_eq!(history[i], history[i - 6]);
        }
    }

    #[test]
    fn test_sweep_is_oldest_first() {
        let mut radar = Radar::new(&config(3, 0.0017), 0.0);
        for step in 1..=5 {
            radar.advance(step as f64 * 16.0);
        }
        let opacities: Vec<f64> = radar.sweep().map(|(_, o)| o).collect();
        assert_eq!(opacities.len(), 3);
        assert!(opacities.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(opacities[2], 1.0);
    }

    #[test]
    fn test_fixed_fifty_ms_frames() {
        let mut radar = Radar::new(&config(4, 0.01), 0.0);
        let hues: Vec<f64> = (0..4)
            .map(|step| radar.advance(step as f64 * 50.0).hue.degrees())
            .collect();

        // first step runs at creation time, so no time has passed yet
        assert_eq!(hues[0], 120.0);
        let expected = *Hue::from_elapsed(50.0);
        for hue in &hues[1..] {
            assert!((hue - expected).abs() < 1e-9);
        }
        assert!(hues.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_hue_uses_capped_rotation() {
        let mut radar = Radar::new(&config(4, 0.01), 0.0);
        let tick = radar.advance(5000.0);
        assert_eq!(tick.rdelta, PI2 - 0.01);
        assert_eq!(tick.hue, Hue::from_elapsed((PI2 - 0.01) / 0.01));
    }

    #[test]
    fn test_svg_paths() {
        let mut radar = Radar::new(&config(4, 0.01), 0.0);
        radar.advance(0.0);
        let geometry = *radar.geometry();
        let arc = radar.arc(0).unwrap();
        assert_eq!(arc.svg_path(&geometry), "M98 50A48 48 0 0 0 98 50L50 50");
        assert_eq!(
            radar.hand().unwrap().svg_path(&geometry),
            "M50 50L98 50"
        );
    }
}
