use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
// Crate engine modules
use crate::engine::assets::scene_layout::SceneLayout;
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::layout_loader::{LayoutLoader, load_layout_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::tutorial_scene::spawn_tutorial_scene;
// Interaction and tutorial
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::tools::desktop_drag::{DesktopDragPlugin, DragSet};
use crate::tutorial::bindings::resolve_guide_bindings;
use crate::tutorial::systems::{start_guide, teardown_guide};
use crate::tutorial::{GuideSet, TutorialPlugin};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers SceneLayout as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneLayout>::new(&["json"]))
        .add_plugins(DesktopDragPlugin)
        .add_plugins(TutorialPlugin)
        .add_plugins(WebRpcPlugin)
        .insert_resource(ClearColor(Color::srgb(0.08, 0.09, 0.11)));

    app.init_resource::<LoadingProgress>()
        .init_resource::<LayoutLoader>();

    // Grabs are published before the tutorial reads them, and nothing runs before the scene exists.
    app.configure_sets(Update, GuideSet.after(DragSet))
        .configure_sets(Update, DragSet.run_if(in_state(AppState::Running)))
        .configure_sets(Update, GuideSet.run_if(in_state(AppState::Running)));

    // State-based system scheduling
    app.add_systems(Startup, start_loading)
        .add_systems(
            Update,
            (load_layout_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            OnEnter(AppState::Running),
            (spawn_tutorial_scene, resolve_guide_bindings, start_guide).chain(),
        )
        .add_systems(OnExit(AppState::Running), teardown_guide);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
