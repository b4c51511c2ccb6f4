use crate::scroll::{ScrollState, SectionChanged};
use crate::utils::cleanup;
use crate::{ExperienceSet, ExperienceState};
use app::LOG_CAMERA;
use bevy::prelude::*;
use timeline::{LightingProfile, Section, approach};

/// Profile values are unitless; these map them to Bevy light units.
const AMBIENT_BRIGHTNESS: f32 = 1_000.0;
const KEY_ILLUMINANCE: f32 = 4_000.0;
const RIM_INTENSITY: f32 = 2_000_000.0;
const ACCENT_INTENSITY: f32 = 1_000_000.0;

/// Plugin for managing scene lighting
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LightLevels>()
            .add_systems(OnEnter(ExperienceState::Exploring), setup_lighting)
            .add_systems(
                Update,
                (blend_ambient, switch_key_and_rim).in_set(ExperienceSet::Present),
            )
            .add_systems(OnExit(ExperienceState::Exploring), cleanup::<LightingEntity>);
    }
}

/// Marker component for lighting entities
#[derive(Component)]
struct LightingEntity;

#[derive(Component)]
struct KeyLight;

#[derive(Component)]
struct RimLight;

/// Current unitless ambient level, blended toward the section target.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LightLevels {
    pub ambient: f32,
}

impl Default for LightLevels {
    fn default() -> Self {
        Self {
            ambient: LightingProfile::for_section(Section::FIRST).ambient,
        }
    }
}

fn setup_lighting(
    mut commands: Commands,
    mut levels: ResMut<LightLevels>,
    ambient_light: Option<ResMut<AmbientLight>>,
) {
    *levels = LightLevels::default();
    let profile = LightingProfile::for_section(Section::FIRST);

    if let Some(mut ambient_light) = ambient_light {
        ambient_light.brightness = levels.ambient * AMBIENT_BRIGHTNESS;
        ambient_light.color = Color::srgb_u8(0x0a, 0x0a, 0x2e);
    }

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            illuminance: profile.key * KEY_ILLUMINANCE,
            ..default()
        },
        Transform::from_xyz(20.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        KeyLight,
        LightingEntity,
        Name::new("Key Light"),
    ));

    commands.spawn((
        SpotLight {
            intensity: profile.rim * RIM_INTENSITY,
            range: 50.0,
            outer_angle: std::f32::consts::FRAC_PI_3,
            inner_angle: std::f32::consts::FRAC_PI_3 * 0.2,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 30.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
        RimLight,
        LightingEntity,
        Name::new("Rim Light"),
    ));

    for (name, position, color, intensity, range) in [
        ("Cyan Accent", Vec3::new(-15.0, 10.0, -10.0), Color::srgb(0.0, 1.0, 1.0), 0.8, 30.0),
        ("Coral Accent", Vec3::new(15.0, -10.0, 15.0), Color::srgb_u8(0xff, 0x6b, 0x6b), 0.6, 25.0),
    ] {
        commands.spawn((
            PointLight {
                color,
                intensity: intensity * ACCENT_INTENSITY,
                range,
                ..default()
            },
            Transform::from_translation(position),
            LightingEntity,
            Name::new(name),
        ));
    }
}

fn blend_ambient(
    time: Res<Time>,
    state: Res<ScrollState>,
    mut levels: ResMut<LightLevels>,
    ambient_light: Option<ResMut<AmbientLight>>,
) {
    let target = LightingProfile::for_section(state.section()).ambient;
    levels.ambient = approach(levels.ambient, target, time.delta_secs());

    if let Some(mut ambient_light) = ambient_light {
        ambient_light.brightness = levels.ambient * AMBIENT_BRIGHTNESS;
    }
}

fn switch_key_and_rim(
    mut changes: MessageReader<SectionChanged>,
    mut keys: Query<&mut DirectionalLight, With<KeyLight>>,
    mut rims: Query<&mut SpotLight, With<RimLight>>,
) {
    let Some(change) = changes.read().last() else {
        return;
    };
    let profile = LightingProfile::for_section(change.to);
    debug!(target: LOG_CAMERA, section = %change.to, ?profile, "lighting profile");

    for mut key in &mut keys {
        key.illuminance = profile.key * KEY_ILLUMINANCE;
    }
    for mut rim in &mut rims {
        rim.intensity = profile.rim * RIM_INTENSITY;
    }
}
