//! Navigation light component and its visibility gates.

use bevy::prelude::*;
use rand::Rng;

use crate::utils::angles;

/// Seconds of scenario time covered by one character of a blink sequence.
pub const CHAR_TIME: f32 = 0.25;

/// Upper bound for randomized phase offsets, in seconds.
const MAX_RANDOM_PHASE: f32 = 60.0;

/// How a light's blink cycle is phased against the scenario clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlinkPhase {
    /// Start the cycle at the given 1-based character of the sequence.
    AtChar(u32),
    /// Draw a random offset in [0, 60) seconds so grouped lights do not
    /// blink in unison.
    Random,
}

/// A single navigation light on a vessel.
///
/// Holds the static parameters fixed at construction plus the pure gate
/// logic; `systems::nav_light::update_nav_lights` recomputes the billboard's
/// size, visibility and brightness from them every tick. Instances share no
/// state with each other.
#[derive(Component, Debug, Clone)]
pub struct NavLight {
    /// Sector start in degrees relative to the parent's heading.
    /// Non-negative after construction-time normalization.
    pub start_angle: f32,
    /// Sector end in degrees; may exceed 360 after normalization.
    pub end_angle: f32,
    /// Maximum viewing distance in world units.
    pub range: f32,
    /// Blink sequence; `'D'`/`'d'` characters are dark slices, anything
    /// else leaves the light alone. Empty means the blink gate never fires.
    pub sequence: String,
    /// Phase offset added to scenario time before indexing the sequence.
    pub time_offset: f32,
    /// Last brightness value pushed to the material, if any.
    pub(crate) pushed_level: Option<f32>,
}

impl NavLight {
    /// Builds a light from raw sector bounds (start may be negative),
    /// viewing range, blink sequence and phase. The random source is
    /// injected so phased scenarios stay reproducible under test.
    pub fn new(
        start_angle: f32,
        end_angle: f32,
        range: f32,
        sequence: impl Into<String>,
        phase: BlinkPhase,
        rng: &mut impl Rng,
    ) -> Self {
        let (start_angle, end_angle) = angles::normalize_sector(start_angle, end_angle);
        let time_offset = match phase {
            BlinkPhase::AtChar(n) => n.saturating_sub(1) as f32 * CHAR_TIME,
            BlinkPhase::Random => rng.gen_range(0.0..MAX_RANDOM_PHASE),
        };
        Self {
            start_angle,
            end_angle,
            range,
            sequence: sequence.into(),
            time_offset,
            pushed_level: None,
        }
    }

    /// Index of the active sequence character at the given scenario time,
    /// or `None` for an empty sequence. Clamped to the last character: the
    /// float modulo can land exactly on the sequence length at the top of
    /// a cycle.
    pub fn sequence_index(&self, scenario_time: f32) -> Option<usize> {
        let len = self.sequence.len();
        if len == 0 {
            return None;
        }
        let time_in_sequence = ((scenario_time + self.time_offset) / CHAR_TIME) % len as f32;
        Some((time_in_sequence as usize).min(len - 1))
    }

    /// True if the blink sequence forces the light dark at the given time.
    pub fn sequence_dark(&self, scenario_time: f32) -> bool {
        self.sequence_index(scenario_time)
            .and_then(|i| self.sequence.as_bytes().get(i).copied())
            .is_some_and(|c| c == b'D' || c == b'd')
    }

    /// True if a viewer at the given local bearing (degrees, relative to
    /// the parent's heading) lies inside the light's sector.
    pub fn sector_contains(&self, local_bearing_deg: f32) -> bool {
        angles::is_angle_between(local_bearing_deg, self.start_angle, self.end_angle)
    }

    /// Combined result of the range, sector and sequence gates. Later gates
    /// only restrict; none re-enables a light another gate disabled.
    pub fn visible_from(&self, distance: f32, local_bearing_deg: f32, scenario_time: f32) -> bool {
        distance <= self.range
            && self.sector_contains(local_bearing_deg)
            && !self.sequence_dark(scenario_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn fixed_light(sequence: &str) -> NavLight {
        NavLight::new(0.0, 360.0, 1000.0, sequence, BlinkPhase::AtChar(1), &mut rng())
    }

    #[test]
    fn test_negative_sector_normalized() {
        let light = NavLight::new(-112.5, 112.5, 1000.0, "", BlinkPhase::AtChar(1), &mut rng());
        assert!(light.start_angle >= 0.0);
        assert!(light.end_angle >= 0.0);
        assert!((light.start_angle - 247.5).abs() < 1e-3);
        // Arc width unchanged by normalization.
        assert!((light.end_angle - light.start_angle - 225.0).abs() < 1e-3);
    }

    #[test]
    fn test_phase_index_offset() {
        let light = NavLight::new(0.0, 360.0, 1000.0, "DdOO", BlinkPhase::AtChar(3), &mut rng());
        assert_eq!(light.time_offset, 0.5);
    }

    #[test]
    fn test_random_phase_within_bounds() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let light = NavLight::new(0.0, 360.0, 1000.0, "D", BlinkPhase::Random, &mut rng);
            assert!(light.time_offset >= 0.0);
            assert!(light.time_offset < 60.0);
        }
    }

    #[test]
    fn test_empty_sequence_never_dark() {
        let light = fixed_light("");
        for i in 0..200 {
            assert!(!light.sequence_dark(i as f32 * 0.13));
        }
    }

    #[test]
    fn test_plain_sequence_never_dark() {
        let light = fixed_light("OOxFl.O");
        for i in 0..200 {
            assert!(!light.sequence_dark(i as f32 * 0.13));
        }
    }

    #[test]
    fn test_sequence_index_stays_in_bounds() {
        let mut light = fixed_light("DdOO");
        light.time_offset = 17.3;
        for i in 0..5000 {
            let idx = light.sequence_index(i as f32 * 0.0937).unwrap();
            assert!(idx < 4);
        }
    }

    #[test]
    fn test_sequence_example_dark_slice() {
        // (0.3 / 0.25) mod 4 = 1.2 -> index 1 -> 'd' -> dark.
        let light = fixed_light("DdOO");
        assert_eq!(light.sequence_index(0.3), Some(1));
        assert!(light.sequence_dark(0.3));
    }

    #[test]
    fn test_sequence_example_lit_slice() {
        // (0.6 / 0.25) mod 4 = 2.4 -> index 2 -> 'O' -> lit.
        let light = fixed_light("DdOO");
        assert_eq!(light.sequence_index(0.6), Some(2));
        assert!(!light.sequence_dark(0.6));
    }

    #[test]
    fn test_range_gate_monotonic() {
        let light = fixed_light("");
        let mut was_visible = true;
        for step in 0..100 {
            let distance = step as f32 * 20.0;
            let visible = light.visible_from(distance, 10.0, 0.0);
            assert_eq!(visible, distance <= light.range);
            // Once out of range it never comes back while distance grows.
            assert!(!(visible && !was_visible));
            was_visible = visible;
        }
    }

    #[test]
    fn test_sector_gate() {
        let light = NavLight::new(-112.5, 0.0, 800.0, "", BlinkPhase::AtChar(1), &mut rng());
        // Port sidelight: dead ahead and off the port bow are inside.
        assert!(light.sector_contains(0.0));
        assert!(light.sector_contains(300.0));
        // Starboard side and dead astern are not.
        assert!(!light.sector_contains(90.0));
        assert!(!light.sector_contains(180.0));
    }

    #[test]
    fn test_visibility_stable_for_identical_inputs() {
        let light = fixed_light("DdOO");
        let a = light.visible_from(42.0, 12.0, 3.7);
        let b = light.visible_from(42.0, 12.0, 3.7);
        assert_eq!(a, b);
    }
}
