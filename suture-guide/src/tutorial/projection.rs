use super::bindings::GuideBindings;
use super::machine::GuideMachine;
use bevy::prelude::*;
use constants::render_settings::{
    RING_DIM_COLOUR, RING_HIGHLIGHT_COLOUR, TIP_NEAR_COLOUR, TIP_NEUTRAL_COLOUR,
};

fn visibility_for(visible: bool) -> Visibility {
    if visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

fn set_text(texts: &mut Query<&mut Text>, target: Option<Entity>, value: &str) {
    let Some(entity) = target else { return };
    let Ok(mut text) = texts.get_mut(entity) else {
        return;
    };
    if text.0 != value {
        text.0 = value.to_string();
    }
}

fn set_visible(visibilities: &mut Query<&mut Visibility>, target: Option<Entity>, visible: bool) {
    let Some(entity) = target else { return };
    if let Ok(mut visibility) = visibilities.get_mut(entity) {
        visibility.set_if_neq(visibility_for(visible));
    }
}

fn set_colour(
    handles: &Query<&MeshMaterial3d<StandardMaterial>>,
    materials: &mut Assets<StandardMaterial>,
    target: Option<Entity>,
    colour: Color,
) {
    let Some(entity) = target else { return };
    let Ok(handle) = handles.get(entity) else {
        return;
    };
    // Only touch the asset when the colour actually differs, to avoid re-uploading every frame.
    let differs = materials
        .get(&handle.0)
        .is_some_and(|material| material.base_color != colour);
    if differs {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.base_color = colour;
        }
    }
}

/// Push the machine's view onto the bound entities. Re-applying an unchanged view changes nothing.
pub fn apply_guide_view(
    machine: Res<GuideMachine>,
    bindings: Res<GuideBindings>,
    mut texts: Query<&mut Text>,
    mut visibilities: Query<&mut Visibility>,
    handles: Query<&MeshMaterial3d<StandardMaterial>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let view = machine.view();

    set_text(&mut texts, bindings.prompt, &view.prompt);
    set_text(&mut texts, bindings.counter, view.counter);

    for (zone, visible) in bindings.zones.iter().zip(view.zones_visible) {
        set_visible(&mut visibilities, zone.anchor, visible);
    }
    set_visible(
        &mut visibilities,
        bindings.release_indicator,
        view.release_indicator_visible,
    );

    let Some(mut materials) = materials else {
        return;
    };
    let tip_colour = if view.tip_near {
        TIP_NEAR_COLOUR
    } else {
        TIP_NEUTRAL_COLOUR
    };
    set_colour(&handles, &mut materials, bindings.tip, tip_colour);

    for (zone, highlighted) in bindings.zones.iter().zip(view.rings_highlighted) {
        let colour = if highlighted {
            RING_HIGHLIGHT_COLOUR
        } else {
            RING_DIM_COLOUR
        };
        set_colour(&handles, &mut materials, zone.ring, colour);
    }
}
