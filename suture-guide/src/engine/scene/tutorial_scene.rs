use crate::engine::assets::scene_layout::SceneLayout;
use crate::tools::desktop_drag::{DragState, Draggable, GrabBounds};
use crate::tutorial::{GuideConfig, Step, ZoneRing};
use bevy::prelude::*;
use constants::render_settings::{
    COUNTER_COLOUR, COUNTER_FONT_SIZE, GRAB_PADDING, NEEDLE_LENGTH, NEEDLE_RADIUS,
    NEEDLE_TIP_RADIUS, PROMPT_COLOUR, PROMPT_FONT_SIZE, RELEASE_BANNER_COLOUR, RING_DIM_COLOUR,
    TIP_NEUTRAL_COLOUR, ZONE_RING_RADIUS, ZONE_RING_THICKNESS,
};
use constants::tutorial::ANATOMY_ID;
use std::f32::consts::FRAC_PI_2;

const RELEASE_BANNER_TEXT: &str = "Release now to place the needle";

/// Spawns the whole tutorial scene and points the drag plane at the layout's plane.
pub fn spawn_tutorial_scene(
    mut commands: Commands,
    layout: Res<SceneLayout>,
    config: Res<GuideConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut drag: ResMut<DragState>,
) {
    let (plane_point, plane_normal) = layout.drag_plane();
    drag.plane_point = plane_point;
    drag.plane_normal = plane_normal;

    spawn_camera(&mut commands, &layout);
    spawn_lighting(&mut commands);
    spawn_anatomy(&mut commands, &layout, &mut meshes, &mut materials);
    spawn_needle(&mut commands, &layout, &config, &mut meshes, &mut materials);
    spawn_zones(&mut commands, &layout, &config, &mut meshes, &mut materials);
    spawn_ui(&mut commands, &config);
}

fn spawn_camera(commands: &mut Commands, layout: &SceneLayout) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(Vec3::from_array(layout.camera.position))
            .looking_at(Vec3::from_array(layout.camera.look_at), Vec3::Y),
    ));
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            0.4,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn spawn_anatomy(
    commands: &mut Commands,
    layout: &SceneLayout,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let size = Vec3::from_array(layout.anatomy.size);
    commands.spawn((
        Name::new(ANATOMY_ID),
        Mesh3d(meshes.add(Cuboid::from_size(size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.87, 0.64, 0.58),
            perceptual_roughness: 0.8,
            ..default()
        })),
        Transform::from_translation(Vec3::from_array(layout.anatomy.position)),
    ));
}

fn spawn_needle(
    commands: &mut Commands,
    layout: &SceneLayout,
    config: &GuideConfig,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let shaft_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.7, 0.72, 0.75),
        metallic: 0.9,
        perceptual_roughness: 0.3,
        ..default()
    });
    // The tip owns its material so its colour can change independently.
    let tip_material = materials.add(StandardMaterial {
        base_color: TIP_NEUTRAL_COLOUR,
        ..default()
    });
    let grab_size = Vec3::new(
        NEEDLE_RADIUS * 2.0,
        NEEDLE_LENGTH,
        NEEDLE_RADIUS * 2.0,
    ) + Vec3::splat(GRAB_PADDING * 2.0);

    commands
        .spawn((
            Name::new(config.needle.clone()),
            Draggable,
            GrabBounds(grab_size),
            Mesh3d(meshes.add(Cylinder::new(NEEDLE_RADIUS, NEEDLE_LENGTH))),
            MeshMaterial3d(shaft_material),
            Transform::from_translation(Vec3::from_array(layout.needle.position)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new(config.needle_tip.clone()),
                Mesh3d(meshes.add(Sphere::new(NEEDLE_TIP_RADIUS))),
                MeshMaterial3d(tip_material),
                Transform::from_translation(Vec3::from_array(layout.needle.tip_offset)),
            ));
        });
}

fn spawn_zones(
    commands: &mut Commands,
    layout: &SceneLayout,
    config: &GuideConfig,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let ring_mesh = meshes.add(Torus::new(
        ZONE_RING_RADIUS - ZONE_RING_THICKNESS,
        ZONE_RING_RADIUS,
    ));

    for (index, zone_name) in config.zones.iter().enumerate() {
        let Some(anchor) = layout.zone_anchor(index) else {
            warn!("No layout anchor for {zone_name}, zone not spawned");
            continue;
        };
        let ring_material = materials.add(StandardMaterial {
            base_color: RING_DIM_COLOUR,
            unlit: true,
            ..default()
        });

        commands
            .spawn((
                Name::new(zone_name.clone()),
                Transform::from_translation(anchor),
                Visibility::Hidden,
            ))
            .with_children(|parent| {
                // Torus lies in XZ; stand it up to face the camera.
                parent.spawn((
                    ZoneRing,
                    Mesh3d(ring_mesh.clone()),
                    MeshMaterial3d(ring_material),
                    Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                ));
            });
    }
}

fn spawn_ui(commands: &mut Commands, config: &GuideConfig) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: UiRect::top(Val::Px(16.0)),
            row_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Name::new(config.prompt.clone()),
                Text::new(Step::PickNeedle.label()),
                TextFont {
                    font_size: PROMPT_FONT_SIZE,
                    ..default()
                },
                TextColor(PROMPT_COLOUR),
            ));
            parent.spawn((
                Name::new(config.counter.clone()),
                Text::new(Step::PickNeedle.ordinal()),
                TextFont {
                    font_size: COUNTER_FONT_SIZE,
                    ..default()
                },
                TextColor(COUNTER_COLOUR),
            ));
            parent.spawn((
                Name::new(config.release_zone.clone()),
                Text::new(RELEASE_BANNER_TEXT),
                TextFont {
                    font_size: COUNTER_FONT_SIZE,
                    ..default()
                },
                TextColor(RELEASE_BANNER_COLOUR),
                Visibility::Hidden,
            ));
        });
}
