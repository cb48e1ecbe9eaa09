use bevy::prelude::*;
use constants::render_settings::{DRAG_PLANE_NORMAL, DRAG_PLANE_POINT};
use constants::tutorial::PASSES;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems that make a scene layout unusable.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("expected {expected} zones, found {found}")]
    ZoneCount { expected: usize, found: usize },
    #[error("drag plane normal must be non-zero")]
    DegenerateDragPlane,
    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraLayout {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeedleLayout {
    pub position: [f32; 3],
    /// Tip offset from the needle origin, in needle space.
    pub tip_offset: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneLayout {
    pub anchor: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneLayout {
    pub point: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnatomyLayout {
    pub position: [f32; 3],
    pub size: [f32; 3],
}

/// Static placement of everything in the tutorial scene. Loaded from JSON.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub camera: CameraLayout,
    pub needle: NeedleLayout,
    pub zones: Vec<ZoneLayout>,
    pub drag_plane: PlaneLayout,
    pub anatomy: AnatomyLayout,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            camera: CameraLayout {
                position: [0.0, 0.75, 0.2],
                look_at: [0.0, 0.55, -1.15],
            },
            needle: NeedleLayout {
                position: [-0.45, 0.4, -1.15],
                tip_offset: [0.0, -0.09, 0.0],
            },
            zones: vec![
                ZoneLayout {
                    anchor: [-0.25, 0.6, -1.15],
                },
                ZoneLayout {
                    anchor: [0.0, 0.6, -1.15],
                },
                ZoneLayout {
                    anchor: [0.25, 0.6, -1.15],
                },
            ],
            drag_plane: PlaneLayout {
                point: DRAG_PLANE_POINT.to_array(),
                normal: DRAG_PLANE_NORMAL.to_array(),
            },
            anatomy: AnatomyLayout {
                position: [0.0, 0.55, -1.2],
                size: [0.9, 0.5, 0.05],
            },
        }
    }
}

impl SceneLayout {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.zones.len() != PASSES {
            return Err(LayoutError::ZoneCount {
                expected: PASSES,
                found: self.zones.len(),
            });
        }

        let mut points = vec![
            ("camera", self.camera.position),
            ("camera", self.camera.look_at),
            ("needle", self.needle.position),
            ("needle", self.needle.tip_offset),
            ("drag plane", self.drag_plane.point),
            ("drag plane", self.drag_plane.normal),
            ("anatomy", self.anatomy.position),
            ("anatomy", self.anatomy.size),
        ];
        points.extend(self.zones.iter().map(|zone| ("zone", zone.anchor)));
        if let Some((field, _)) = points
            .iter()
            .find(|(_, point)| !Vec3::from_array(*point).is_finite())
        {
            return Err(LayoutError::NonFinite(*field));
        }

        if Vec3::from_array(self.drag_plane.normal).length_squared() <= f32::EPSILON {
            return Err(LayoutError::DegenerateDragPlane);
        }
        Ok(())
    }

    pub fn zone_anchor(&self, index: usize) -> Option<Vec3> {
        self.zones
            .get(index)
            .map(|zone| Vec3::from_array(zone.anchor))
    }

    pub fn drag_plane(&self) -> (Vec3, Vec3) {
        (
            Vec3::from_array(self.drag_plane.point),
            Vec3::from_array(self.drag_plane.normal).normalize(),
        )
    }
}
