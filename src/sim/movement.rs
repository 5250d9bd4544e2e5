//! Enemy homing and projectile aiming
//!
//! Both functions are pure; the entity store applies them.

use glam::DVec2;
use thiserror::Error;

use crate::consts::HOMING_STEP;

/// Aim point produced no finite velocity (pointer exactly at the origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pointer is at the firing origin ({origin_x}, {origin_y})")]
pub struct InvalidAimError {
    pub origin_x: i32,
    pub origin_y: i32,
}

/// One tick of fixed-size movement toward `target`.
///
/// Each axis moves by exactly `HOMING_STEP` regardless of distance, so an
/// enemy closer than one step overshoots and oscillates around the target.
/// An enemy exactly on the target coordinate steps in the negative direction.
#[inline]
pub fn homing_step(pos: DVec2, target: DVec2) -> DVec2 {
    let dx = if pos.x < target.x { HOMING_STEP } else { -HOMING_STEP };
    let dy = if pos.y < target.y { HOMING_STEP } else { -HOMING_STEP };
    DVec2::new(pos.x + dx, pos.y + dy)
}

/// Projectile velocity toward `pointer` fired from `origin`.
///
/// Velocity is `d / (|dx| + |dy| / 2)`. This weights the axes unevenly, so
/// speed depends on aim angle.
pub fn projectile_velocity(
    pointer: (i32, i32),
    origin: (i32, i32),
) -> Result<DVec2, InvalidAimError> {
    let dx = (pointer.0 - origin.0) as f64;
    let dy = (pointer.1 - origin.1) as f64;
    let denominator = dx.abs() + dy.abs() / 2.0;
    let velocity = DVec2::new(dx / denominator, dy / denominator);
    if denominator == 0.0 || !velocity.is_finite() {
        return Err(InvalidAimError {
            origin_x: origin.0,
            origin_y: origin.1,
        });
    }
    Ok(velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CENTER_X, CENTER_Y};

    const CENTER: (i32, i32) = (CENTER_X, CENTER_Y);

    #[test]
    fn test_velocity_bottom_right_corner() {
        let v = projectile_velocity((640, 480), CENTER).unwrap();
        assert!((v.x - 320.0 / 440.0).abs() < 1e-4);
        assert!((v.y - 240.0 / 440.0).abs() < 1e-4);
        assert!((v.x - 0.7273).abs() < 1e-4);
        assert!((v.y - 0.5455).abs() < 1e-4);
    }

    #[test]
    fn test_velocity_axis_aligned() {
        // Horizontal aim: unit speed
        let v = projectile_velocity((400, 240), CENTER).unwrap();
        assert!((v.x - 1.0).abs() < 1e-12);
        assert_eq!(v.y, 0.0);

        // Vertical aim: the halved y term doubles the speed
        let v = projectile_velocity((320, 100), CENTER).unwrap();
        assert_eq!(v.x, 0.0);
        assert!((v.y - (-2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_not_normalized() {
        let diagonal = projectile_velocity((420, 440), CENTER).unwrap();
        let horizontal = projectile_velocity((420, 240), CENTER).unwrap();
        assert!((diagonal.x - 0.5).abs() < 1e-12);
        assert!((diagonal.y - 1.0).abs() < 1e-12);
        assert!((diagonal.length() - horizontal.length()).abs() > 0.1);
    }

    #[test]
    fn test_velocity_at_center_is_invalid() {
        let err = projectile_velocity(CENTER, CENTER).unwrap_err();
        assert_eq!(
            err,
            InvalidAimError {
                origin_x: CENTER_X,
                origin_y: CENTER_Y
            }
        );
    }

    #[test]
    fn test_homing_moves_toward_target() {
        let pos = homing_step(DVec2::new(0.0, 480.0), DVec2::new(320.0, 240.0));
        assert!((pos.x - 0.1).abs() < 1e-12);
        assert!((pos.y - 479.9).abs() < 1e-9);
    }

    #[test]
    fn test_homing_oscillates_across_target() {
        let target = DVec2::new(100.05, 100.05);
        let mut pos = DVec2::new(100.0, 100.0);

        pos = homing_step(pos, target);
        assert!((pos.x - 100.1).abs() < 1e-9);
        assert!(pos.x > target.x);

        pos = homing_step(pos, target);
        assert!((pos.x - 100.0).abs() < 1e-9);

        for _ in 0..100 {
            pos = homing_step(pos, target);
            assert_ne!(pos.x, target.x);
        }
    }

    #[test]
    fn test_homing_on_target_steps_negative() {
        let target = DVec2::new(50.0, 50.0);
        let pos = homing_step(target, target);
        assert!((pos.x - 49.9).abs() < 1e-9);
        assert!((pos.y - 49.9).abs() < 1e-9);
    }
}
