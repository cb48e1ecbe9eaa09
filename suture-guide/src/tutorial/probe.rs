use bevy::prelude::*;
use constants::tutorial::PLACEMENT_DISTANCE;

/// Read-only view of the scene positions the tutorial needs for its proximity test.
///
/// `None` from either method means the collaborator is missing; callers treat it as "not near".
pub trait SceneProbe {
    /// World position of the tip reference point of `object`, or of the object itself
    /// when it has no tip child.
    fn tip_position(&self, object: Entity) -> Option<Vec3>;

    /// World position of the anchor of the zone at `pass_index`.
    fn zone_anchor(&self, pass_index: usize) -> Option<Vec3>;
}

/// Strict placement test: exactly `PLACEMENT_DISTANCE` is outside.
pub fn within_placement(tip: Vec3, anchor: Vec3) -> bool {
    tip.distance(anchor) < PLACEMENT_DISTANCE
}

/// Whether the tip of `object` is inside the placement distance of zone `pass_index`.
pub fn is_tip_near_zone(probe: &impl SceneProbe, object: Entity, pass_index: usize) -> bool {
    let (Some(tip), Some(anchor)) = (probe.tip_position(object), probe.zone_anchor(pass_index))
    else {
        return false;
    };
    within_placement(tip, anchor)
}

#[cfg(test)]
pub(crate) mod test_probe {
    use super::*;
    use constants::tutorial::PASSES;

    /// Probe with a single movable tip and fixed anchors.
    pub struct FixedProbe {
        pub tip: Option<Vec3>,
        pub anchors: [Option<Vec3>; PASSES],
    }

    impl FixedProbe {
        pub fn new() -> Self {
            Self {
                tip: Some(Vec3::ZERO),
                anchors: [
                    Some(Vec3::new(-0.5, 0.5, -1.15)),
                    Some(Vec3::new(0.0, 0.5, -1.15)),
                    Some(Vec3::new(0.5, 0.5, -1.15)),
                ],
            }
        }

        /// Put the tip `offset` away from the anchor of zone `pass_index` along X.
        pub fn place_near(&mut self, pass_index: usize, offset: f32) {
            let anchor = self.anchors[pass_index].unwrap_or(Vec3::ZERO);
            self.tip = Some(anchor + Vec3::X * offset);
        }
    }

    impl SceneProbe for FixedProbe {
        fn tip_position(&self, _object: Entity) -> Option<Vec3> {
            self.tip
        }

        fn zone_anchor(&self, pass_index: usize) -> Option<Vec3> {
            self.anchors.get(pass_index).copied().flatten()
        }
    }
}
