use super::ray::{ray_hits_obb, ray_plane_hit};
use super::state::*;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Closest draggable along the ray, if any.
pub fn pick_closest<'a>(
    origin: Vec3,
    dir: Vec3,
    candidates: impl IntoIterator<Item = (Entity, &'a GlobalTransform, &'a GrabBounds)>,
) -> Option<Entity> {
    let mut best_hit: Option<(Entity, f32)> = None;
    for (entity, xf, GrabBounds(size)) in candidates {
        let Some(t) = ray_hits_obb(origin, dir, *xf, *size) else {
            continue;
        };
        if best_hit.is_none_or(|(_, best)| t < best) {
            best_hit = Some((entity, t));
        }
    }
    best_hit.map(|(entity, _)| entity)
}

/// Convert a world point into the local space of `parent` (identity when unparented).
pub fn world_to_parent_local(parent: Option<&GlobalTransform>, point: Vec3) -> Vec3 {
    match parent {
        Some(parent) => parent.affine().inverse().transform_point3(point),
        None => point,
    }
}

// Press on a draggable starts a grab; a press while already holding is ignored
pub fn begin_grab(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    draggables: Query<(Entity, &GlobalTransform, &GrabBounds), With<Draggable>>,
    mut drag: ResMut<DragState>,
    mut events: EventWriter<GrabEvent>,
) {
    if !buttons.just_pressed(MouseButton::Left) || drag.grabbed.is_some() {
        return;
    }

    let Ok(window) = windows.single() else { return };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_xf, cursor_pos) else {
        return;
    };

    let Some(grabbed) = pick_closest(ray.origin, ray.direction.as_vec3(), draggables.iter()) else {
        return;
    };

    drag.grabbed = Some(grabbed);
    debug!("Grab started on {}", grabbed);
    events.write(GrabEvent::Started { grabbed });
}

// Release anywhere ends the grab
pub fn end_grab(
    buttons: Res<ButtonInput<MouseButton>>,
    mut drag: ResMut<DragState>,
    mut events: EventWriter<GrabEvent>,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    let Some(grabbed) = drag.grabbed.take() else {
        return;
    };

    debug!("Grab ended on {}", grabbed);
    events.write(GrabEvent::Ended { grabbed });
}

// Held entity follows the cursor across the drag plane
pub fn follow_cursor(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut held: Query<(&mut Transform, Option<&ChildOf>), With<Draggable>>,
    parents: Query<&GlobalTransform>,
    mut drag: ResMut<DragState>,
    mut events: EventWriter<GrabEvent>,
) {
    let Some(grabbed) = drag.grabbed else {
        return;
    };

    let Ok((mut transform, child_of)) = held.get_mut(grabbed) else {
        // Held entity vanished mid-drag: close the grab so listeners see a matching end.
        drag.grabbed = None;
        events.write(GrabEvent::Ended { grabbed });
        return;
    };

    let Ok(window) = windows.single() else { return };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_xf, cursor_pos) else {
        return;
    };
    let Some(hit) = ray_plane_hit(
        ray.origin,
        ray.direction.as_vec3(),
        drag.plane_point,
        drag.plane_normal,
    ) else {
        return;
    };

    let parent = child_of.and_then(|child_of| parents.get(child_of.parent()).ok());
    transform.translation = world_to_parent_local(parent, hit);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded(app: &App) -> Vec<GrabEvent> {
        app.world()
            .resource::<Events<GrabEvent>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }

    #[test]
    fn pick_closest_prefers_nearest_hit() {
        let near = Entity::from_raw(1);
        let far = Entity::from_raw(2);
        let aside = Entity::from_raw(3);
        let near_xf = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -1.0));
        let far_xf = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -3.0));
        let aside_xf = GlobalTransform::from_translation(Vec3::new(2.0, 0.0, -1.0));
        let bounds = GrabBounds(Vec3::splat(0.2));

        let candidates = [
            (far, &far_xf, &bounds),
            (aside, &aside_xf, &bounds),
            (near, &near_xf, &bounds),
        ];
        assert_eq!(pick_closest(Vec3::ZERO, Vec3::NEG_Z, candidates), Some(near));
        assert_eq!(pick_closest(Vec3::ZERO, Vec3::Y, candidates), None);
    }

    #[test]
    fn world_point_maps_into_parent_space() {
        let parent = GlobalTransform::from(
            Transform::from_xyz(1.0, 0.0, 0.0).with_scale(Vec3::splat(2.0)),
        );
        let local = world_to_parent_local(Some(&parent), Vec3::new(3.0, 2.0, 0.0));
        assert!((local - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-5);
        assert_eq!(world_to_parent_local(None, Vec3::ONE), Vec3::ONE);
    }

    #[test]
    fn release_ends_active_grab_once() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<DragState>()
            .add_event::<GrabEvent>()
            .add_systems(Update, end_grab);

        let needle = app.world_mut().spawn(Draggable).id();
        app.world_mut().resource_mut::<DragState>().grabbed = Some(needle);
        {
            let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
            buttons.press(MouseButton::Left);
            buttons.release(MouseButton::Left);
        }
        app.update();

        assert_eq!(recorded(&app), vec![GrabEvent::Ended { grabbed: needle }]);
        assert_eq!(app.world().resource::<DragState>().grabbed, None);

        // Nothing held: a second frame adds no further events.
        app.update();
        assert_eq!(app.world().resource::<Events<GrabEvent>>().len(), 1);
    }

    #[test]
    fn despawned_grab_is_closed() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<DragState>()
            .add_event::<GrabEvent>()
            .add_systems(Update, follow_cursor);

        let ghost = app.world_mut().spawn(Draggable).id();
        app.world_mut().despawn(ghost);
        app.world_mut().resource_mut::<DragState>().grabbed = Some(ghost);
        app.update();

        assert_eq!(recorded(&app), vec![GrabEvent::Ended { grabbed: ghost }]);
        assert_eq!(app.world().resource::<DragState>().grabbed, None);
    }
}
