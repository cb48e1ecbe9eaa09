use super::probe::SceneProbe;
use bevy::prelude::*;
use constants::tutorial::{
    COUNTER_ID, NEEDLE_ID, NEEDLE_TIP_ID, PASSES, PROMPT_ID, RELEASE_ZONE_ID, ZONE_IDS,
};

/// Names of the scene entities that play each tutorial role.
#[derive(Resource, Debug, Clone)]
pub struct GuideConfig {
    pub needle: String,
    pub needle_tip: String,
    pub prompt: String,
    pub counter: String,
    pub release_zone: String,
    pub zones: [String; PASSES],
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            needle: NEEDLE_ID.to_string(),
            needle_tip: NEEDLE_TIP_ID.to_string(),
            prompt: PROMPT_ID.to_string(),
            counter: COUNTER_ID.to_string(),
            release_zone: RELEASE_ZONE_ID.to_string(),
            zones: ZONE_IDS.map(str::to_string),
        }
    }
}

/// Marks the ring mesh under a zone anchor.
#[derive(Component)]
pub struct ZoneRing;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneBinding {
    pub anchor: Option<Entity>,
    pub ring: Option<Entity>,
}

/// Tutorial roles resolved to entities once, when the tutorial starts.
/// Any role may be missing; the matching visual update is then skipped.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideBindings {
    pub needle: Option<Entity>,
    pub tip: Option<Entity>,
    pub prompt: Option<Entity>,
    pub counter: Option<Entity>,
    pub release_indicator: Option<Entity>,
    pub zones: [ZoneBinding; PASSES],
}

impl GuideBindings {
    /// Names of roles that could not be resolved.
    pub fn missing_roles(&self) -> Vec<String> {
        let mut missing = Vec::new();
        let roles = [
            ("needle", self.needle),
            ("needle tip", self.tip),
            ("prompt", self.prompt),
            ("counter", self.counter),
            ("release indicator", self.release_indicator),
        ];
        for (role, entity) in roles {
            if entity.is_none() {
                missing.push(role.to_string());
            }
        }
        for (index, zone) in self.zones.iter().enumerate() {
            if zone.anchor.is_none() {
                missing.push(format!("zone {} anchor", index + 1));
            } else if zone.ring.is_none() {
                missing.push(format!("zone {} ring", index + 1));
            }
        }
        missing
    }
}

/// Depth-first search below `root` for the first entity accepted by `matches`.
fn find_descendant(
    root: Entity,
    children: &Query<&Children>,
    matches: impl Fn(Entity) -> bool,
) -> Option<Entity> {
    let mut stack = vec![root];
    while let Some(entity) = stack.pop() {
        let Ok(kids) = children.get(entity) else {
            continue;
        };
        for child in kids.iter() {
            if matches(child) {
                return Some(child);
            }
            stack.push(child);
        }
    }
    None
}

pub fn resolve_guide_bindings(
    mut commands: Commands,
    config: Res<GuideConfig>,
    names: Query<(Entity, &Name)>,
    children: Query<&Children>,
    rings: Query<(), With<ZoneRing>>,
) {
    let find = |wanted: &str| {
        names
            .iter()
            .find(|(_, name)| name.as_str() == wanted)
            .map(|(entity, _)| entity)
    };
    let has_name = |entity: Entity, wanted: &str| {
        names
            .get(entity)
            .is_ok_and(|(_, name)| name.as_str() == wanted)
    };

    let needle = find(&config.needle);
    let tip = needle.and_then(|needle| {
        find_descendant(needle, &children, |e| has_name(e, &config.needle_tip))
    });

    let mut zones = [ZoneBinding::default(); PASSES];
    for (zone, zone_name) in zones.iter_mut().zip(config.zones.iter()) {
        zone.anchor = find(zone_name);
        zone.ring = zone
            .anchor
            .and_then(|anchor| find_descendant(anchor, &children, |e| rings.contains(e)));
    }

    let bindings = GuideBindings {
        needle,
        tip,
        prompt: find(&config.prompt),
        counter: find(&config.counter),
        release_indicator: find(&config.release_zone),
        zones,
    };

    let missing = bindings.missing_roles();
    if missing.is_empty() {
        info!("Tutorial bindings resolved");
    } else {
        warn!("Tutorial running without: {}", missing.join(", "));
    }

    commands.insert_resource(bindings);
}

/// [`SceneProbe`] backed by live `GlobalTransform`s.
pub struct WorldProbe<'a, 'w, 's, 't> {
    pub bindings: &'a GuideBindings,
    pub transforms: &'a Query<'w, 's, &'t GlobalTransform>,
}

impl SceneProbe for WorldProbe<'_, '_, '_, '_> {
    fn tip_position(&self, object: Entity) -> Option<Vec3> {
        // Fall back to the object's own origin when the tip child is absent.
        let source = match self.bindings.tip {
            Some(tip) if self.bindings.needle == Some(object) => tip,
            _ => object,
        };
        self.transforms
            .get(source)
            .ok()
            .map(GlobalTransform::translation)
    }

    fn zone_anchor(&self, pass_index: usize) -> Option<Vec3> {
        let anchor = self.bindings.zones.get(pass_index)?.anchor?;
        self.transforms
            .get(anchor)
            .ok()
            .map(GlobalTransform::translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::SystemState;

    fn resolve(app: &mut App) -> GuideBindings {
        app.add_systems(Update, resolve_guide_bindings);
        app.update();
        app.world().resource::<GuideBindings>().clone()
    }

    #[test]
    fn resolves_named_roles_and_children() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<GuideConfig>();

        let world = app.world_mut();
        let needle = world
            .spawn((Name::new("needle"), Transform::default()))
            .id();
        let tip = world
            .spawn((Name::new("needle-point"), ChildOf(needle)))
            .id();
        let prompt = world.spawn(Name::new("step-prompt")).id();
        let counter = world.spawn(Name::new("step-counter")).id();
        let release = world.spawn(Name::new("release-zone")).id();
        let mut anchors = Vec::new();
        let mut rings = Vec::new();
        for zone in ZONE_IDS {
            let anchor = world.spawn(Name::new(zone)).id();
            let ring = world.spawn((ZoneRing, ChildOf(anchor))).id();
            anchors.push(anchor);
            rings.push(ring);
        }

        let bindings = resolve(&mut app);
        assert_eq!(bindings.needle, Some(needle));
        assert_eq!(bindings.tip, Some(tip));
        assert_eq!(bindings.prompt, Some(prompt));
        assert_eq!(bindings.counter, Some(counter));
        assert_eq!(bindings.release_indicator, Some(release));
        for index in 0..PASSES {
            assert_eq!(bindings.zones[index].anchor, Some(anchors[index]));
            assert_eq!(bindings.zones[index].ring, Some(rings[index]));
        }
        assert!(bindings.missing_roles().is_empty());
    }

    #[test]
    fn missing_roles_are_reported_not_fatal() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<GuideConfig>();
        let world = app.world_mut();
        world.spawn(Name::new("needle"));
        world.spawn(Name::new("zone-2"));

        let bindings = resolve(&mut app);
        assert!(bindings.needle.is_some());
        assert_eq!(bindings.tip, None);
        assert_eq!(bindings.prompt, None);
        assert!(bindings.zones[1].anchor.is_some());
        assert_eq!(bindings.zones[1].ring, None);

        let missing = bindings.missing_roles();
        assert!(missing.contains(&"needle tip".to_string()));
        assert!(missing.contains(&"zone 1 anchor".to_string()));
        assert!(missing.contains(&"zone 2 ring".to_string()));
        assert!(!missing.contains(&"needle".to_string()));
    }

    #[derive(Resource, Default)]
    struct TipReading(Option<Vec3>, bool);

    fn read_tip(
        bindings: Res<GuideBindings>,
        transforms: Query<&GlobalTransform>,
        mut reading: ResMut<TipReading>,
    ) {
        let probe = WorldProbe {
            bindings: &bindings,
            transforms: &transforms,
        };
        if let Some(needle) = bindings.needle {
            reading.0 = probe.tip_position(needle);
            reading.1 = crate::tutorial::probe::is_tip_near_zone(&probe, needle, 0);
        }
    }

    #[test]
    fn world_lookup_reads_transforms_inside_a_system() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<TipReading>()
            .add_systems(Update, read_tip);

        let world = app.world_mut();
        let needle = world.spawn(GlobalTransform::IDENTITY).id();
        let tip = world
            .spawn(GlobalTransform::from_translation(Vec3::new(0.0, 0.5, -1.0)))
            .id();
        let anchor = world
            .spawn(GlobalTransform::from_translation(Vec3::new(0.1, 0.5, -1.0)))
            .id();
        let mut bindings = GuideBindings {
            needle: Some(needle),
            tip: Some(tip),
            ..default()
        };
        bindings.zones[0].anchor = Some(anchor);
        world.insert_resource(bindings);

        app.update();
        let reading = app.world().resource::<TipReading>();
        assert_eq!(reading.0, Some(Vec3::new(0.0, 0.5, -1.0)));
        assert!(reading.1);
    }

    #[test]
    fn tip_lookup_falls_back_to_object_origin() {
        let mut world = World::new();
        let needle = world
            .spawn(GlobalTransform::from_translation(Vec3::new(1.0, 0.0, 0.0)))
            .id();
        let tip = world
            .spawn(GlobalTransform::from_translation(Vec3::new(1.0, 0.1, 0.0)))
            .id();
        let anchor = world
            .spawn(GlobalTransform::from_translation(Vec3::new(0.0, 0.5, -1.0)))
            .id();

        let mut bindings = GuideBindings {
            needle: Some(needle),
            tip: Some(tip),
            ..default()
        };
        bindings.zones[0].anchor = Some(anchor);

        let mut system_state = SystemState::<Query<&GlobalTransform>>::new(&mut world);
        let transforms = system_state.get(&world);

        let probe = WorldProbe {
            bindings: &bindings,
            transforms: &transforms,
        };
        assert_eq!(probe.tip_position(needle), Some(Vec3::new(1.0, 0.1, 0.0)));
        assert_eq!(probe.zone_anchor(0), Some(Vec3::new(0.0, 0.5, -1.0)));
        assert_eq!(probe.zone_anchor(1), None);

        let no_tip = GuideBindings {
            tip: None,
            ..bindings.clone()
        };
        let probe = WorldProbe {
            bindings: &no_tip,
            transforms: &transforms,
        };
        assert_eq!(probe.tip_position(needle), Some(Vec3::new(1.0, 0.0, 0.0)));
    }
}
