//! Non-simulated set dressing: explosive charges at the gate, the
//! detonator box with its plunger handle, and a few blocky clouds.
//!
//! Props render through the same instanced-cube path as the blocks but
//! never enter the simulation.

use glam::Vec3;

use super::tower::TOWER_RADIUS;

/// Warning red used for the charges and the plunger handle.
pub const CHARGE_COLOR: [f32; 4] = [0.75, 0.12, 0.08, 1.0];

const DETONATOR_BASE: [f32; 4] = [0.35, 0.22, 0.12, 1.0];
const CLOUD: [f32; 4] = [0.92, 0.93, 0.95, 1.0];

/// One static scene prop, rendered as an oriented box.
#[derive(Debug, Clone, Copy)]
pub struct Prop {
    pub position: Vec3,
    pub yaw: f32,
    pub half_extents: Vec3,
    pub color: [f32; 4],
}

/// Detonator placement, shared with the app so input hit-testing and the
/// plunger animation agree on where it stands.
pub const DETONATOR_POS: Vec3 = Vec3::new(3.5, 0.0, 9.5);
/// How far the plunger handle travels when pressed.
pub const PLUNGER_TRAVEL: f32 = 0.35;

pub(super) fn build() -> (Vec<Prop>, usize) {
    let mut props = Vec::new();

    // Charges stacked against the gate.
    for i in 0..3 {
        let x = (i as f32 - 1.0) * 0.7;
        props.push(Prop {
            position: Vec3::new(x, 0.25, TOWER_RADIUS + 0.4),
            yaw: 0.0,
            half_extents: Vec3::new(0.25, 0.25, 0.2),
            color: CHARGE_COLOR,
        });
    }

    // Detonator box.
    props.push(Prop {
        position: DETONATOR_POS + Vec3::new(0.0, 0.35, 0.0),
        yaw: 0.4,
        half_extents: Vec3::new(0.4, 0.35, 0.4),
        color: DETONATOR_BASE,
    });

    // Plunger handle, animated down when the castle blows.
    let plunger_handle = props.len();
    props.push(Prop {
        position: DETONATOR_POS + Vec3::new(0.0, 0.9, 0.0),
        yaw: 0.4,
        half_extents: Vec3::new(0.3, 0.07, 0.08),
        color: CHARGE_COLOR,
    });

    // Blocky clouds drifting nowhere.
    let cloud_spots = [
        Vec3::new(-9.0, 16.0, -4.0),
        Vec3::new(6.0, 18.5, -8.0),
        Vec3::new(11.0, 15.0, 5.0),
        Vec3::new(-4.0, 19.5, 7.0),
    ];
    for (i, center) in cloud_spots.iter().enumerate() {
        props.push(Prop {
            position: *center,
            yaw: i as f32 * 0.7,
            half_extents: Vec3::new(2.2, 0.5, 1.3),
            color: CLOUD,
        });
    }

    (props, plunger_handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plunger_is_the_handle_prop() {
        let (props, plunger) = build();
        let handle = props[plunger];
        assert_eq!(handle.color, CHARGE_COLOR);
        assert!(handle.position.y > DETONATOR_POS.y);
        assert!(props.iter().all(|p| p.position.is_finite()));
    }
}
