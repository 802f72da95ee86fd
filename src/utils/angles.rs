//! Angle helpers for sector visibility tests.
//!
//! Sectors are measured from the parent's local +Z (forward) axis,
//! increasing towards +X, matching the yaw convention of [`heading_deg`].

use bevy::prelude::*;

/// Normalizes an angular sector so both bounds are non-negative.
/// Adds full turns to both bounds while the start is negative, preserving
/// the sector's width and orientation. Bounds may end up above 360.
pub fn normalize_sector(mut start: f32, mut end: f32) -> (f32, f32) {
    while start < 0.0 {
        start += 360.0;
        end += 360.0;
    }
    (start, end)
}

/// Circular arc containment: is `angle` within the inclusive arc
/// `[start, end]`? Bounds may exceed 360 (a 225 degree masthead sector
/// normalizes to 247.5..472.5), so the angle is wrapped forward until it
/// can be compared against the arc directly.
pub fn is_angle_between(angle: f32, start: f32, end: f32) -> bool {
    let (start, end) = normalize_sector(start, end);
    let mut angle = angle.rem_euclid(360.0);
    while angle < start {
        angle += 360.0;
    }
    angle <= end
}

/// World-space horizontal bearing of `towards` as seen from `from`, in
/// degrees in [0, 360). Zero points along +Z, 90 along +X.
pub fn horizontal_bearing(from: Vec3, towards: Vec3) -> f32 {
    let d = towards - from;
    d.x.atan2(d.z).to_degrees().rem_euclid(360.0)
}

/// Yaw of a world rotation in degrees in [0, 360): the heading that carries
/// local +Z onto the entity's forward direction.
pub fn heading_deg(rotation: Quat) -> f32 {
    rotation.to_euler(EulerRot::YXZ).0.to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{} !~ {}", a, b);
    }

    #[test]
    fn test_normalize_negative_start() {
        let (start, end) = normalize_sector(-112.5, 112.5);
        assert_close(start, 247.5);
        assert_close(end, 472.5);
    }

    #[test]
    fn test_normalize_preserves_width() {
        for (s, e) in [(-112.5, 0.0), (-400.0, -100.0), (-1.0, 359.0), (10.0, 30.0)] {
            let (ns, ne) = normalize_sector(s, e);
            assert!(ns >= 0.0);
            assert!(ne >= 0.0);
            assert_close(ne - ns, e - s);
        }
    }

    #[test]
    fn test_arc_containment_with_wrap() {
        // Masthead sector -112.5..112.5 normalized to 247.5..472.5.
        assert!(is_angle_between(0.0, 247.5, 472.5));
        assert!(is_angle_between(90.0, 247.5, 472.5));
        assert!(is_angle_between(300.0, 247.5, 472.5));
        assert!(!is_angle_between(180.0, 247.5, 472.5));
    }

    #[test]
    fn test_arc_bounds_inclusive() {
        assert!(is_angle_between(0.0, 0.0, 112.5));
        assert!(is_angle_between(112.5, 0.0, 112.5));
        assert!(!is_angle_between(113.0, 0.0, 112.5));
    }

    #[test]
    fn test_arc_wider_than_full_circle() {
        for angle in [0.0, 45.0, 180.0, 359.0, 720.5] {
            assert!(is_angle_between(angle, 0.0, 720.0));
        }
    }

    #[test]
    fn test_arc_with_negative_start() {
        assert!(is_angle_between(355.0, -10.0, 10.0));
        assert!(is_angle_between(5.0, -10.0, 10.0));
        assert!(!is_angle_between(20.0, -10.0, 10.0));
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        assert_close(horizontal_bearing(Vec3::ZERO, Vec3::Z), 0.0);
        assert_close(horizontal_bearing(Vec3::ZERO, Vec3::X), 90.0);
        assert_close(horizontal_bearing(Vec3::ZERO, Vec3::NEG_Z), 180.0);
        assert_close(horizontal_bearing(Vec3::ZERO, Vec3::NEG_X), 270.0);
    }

    #[test]
    fn test_bearing_ignores_height() {
        assert_close(
            horizontal_bearing(Vec3::new(0.0, 5.0, 0.0), Vec3::new(10.0, -3.0, 10.0)),
            45.0,
        );
    }

    #[test]
    fn test_heading_of_yaw_rotation() {
        assert_close(heading_deg(Quat::from_rotation_y(FRAC_PI_2)), 90.0);
        assert_close(heading_deg(Quat::IDENTITY), 0.0);
        assert_close(heading_deg(Quat::from_rotation_y(-FRAC_PI_2)), 270.0);
    }
}
