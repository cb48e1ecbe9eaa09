use crate::engine::assets::scene_layout::SceneLayout;
use crate::engine::loading::progress::LoadingProgress;
use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::tutorial::SCENE_LAYOUT_PATH;

#[derive(Resource, Default)]
pub struct LayoutLoader {
    handle: Option<Handle<SceneLayout>>,
}

// Start the loading process
pub fn start_loading(mut layout_loader: ResMut<LayoutLoader>, asset_server: Res<AssetServer>) {
    layout_loader.handle = Some(asset_server.load(SCENE_LAYOUT_PATH));
}

/// Installs the layout as a resource once it is available, or the built-in one on failure.
pub fn load_layout_system(
    mut commands: Commands,
    layout_loader: Res<LayoutLoader>,
    layouts: Res<Assets<SceneLayout>>,
    asset_server: Res<AssetServer>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    if loading_progress.layout_ready {
        return;
    }
    let Some(handle) = &layout_loader.handle else {
        return;
    };

    let layout = if let Some(layout) = layouts.get(handle) {
        layout.clone()
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
        warn!("Scene layout failed to load ({err}), using built-in layout");
        loading_progress.used_fallback = true;
        SceneLayout::default()
    } else {
        return;
    };

    let layout = accept_layout(layout, &mut loading_progress);
    commands.insert_resource(layout);
    loading_progress.layout_ready = true;
}

fn accept_layout(layout: SceneLayout, loading_progress: &mut LoadingProgress) -> SceneLayout {
    match layout.validate() {
        Ok(()) => {
            info!("Scene layout loaded: {} zones", layout.zones.len());
            layout
        }
        Err(err) => {
            warn!("Scene layout rejected: {err}; using built-in layout");
            loading_progress.used_fallback = true;
            SceneLayout::default()
        }
    }
}
