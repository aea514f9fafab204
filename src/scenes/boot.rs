//! Boot scene - a short pulsing "Starting Game..." screen.

use std::time::Duration;

use bevy::prelude::*;

use crate::core::GameState;

const BOOT_SECONDS: f32 = 1.0;

/// One leg of the text pulse (fade down or back up).
const PULSE_LEG: Duration = Duration::from_millis(500);

/// Lowest alpha of the pulse.
const PULSE_MIN_ALPHA: f32 = 0.5;

/// Marker for boot screen UI entities.
#[derive(Component)]
struct BootUi;

/// Text that pulses its alpha forever.
#[derive(Component, Default)]
struct Pulse {
    elapsed: Duration,
}

#[derive(Resource)]
struct BootTimer(Timer);

/// Alpha of the pulse `elapsed` after it started: 1 → 0.5 → 1, repeating.
pub fn pulse_alpha(elapsed: Duration) -> f32 {
    let leg = PULSE_LEG.as_secs_f32();
    let phase = elapsed.as_secs_f32() % (leg * 2.0);
    let t = if phase <= leg { phase / leg } else { 2.0 - phase / leg };
    1.0 - (1.0 - PULSE_MIN_ALPHA) * t
}

pub fn setup_boot_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::Boot), setup_boot)
        .add_systems(
            Update,
            (pulse_text, boot_countdown).run_if(in_state(GameState::Boot)),
        )
        .add_systems(OnExit(GameState::Boot), cleanup_boot);
}

fn setup_boot(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BootUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Starting Game..."),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Pulse::default(),
            ));
        });

    commands.insert_resource(BootTimer(Timer::from_seconds(BOOT_SECONDS, TimerMode::Once)));
}

fn pulse_text(time: Res<Time>, mut query: Query<(&mut Pulse, &mut TextColor)>) {
    for (mut pulse, mut color) in query.iter_mut() {
        pulse.elapsed += time.delta();
        color.0 = color.0.with_alpha(pulse_alpha(pulse.elapsed));
    }
}

fn boot_countdown(
    time: Res<Time>,
    mut timer: ResMut<BootTimer>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if timer.0.tick(time.delta()).just_finished() {
        next_state.set(GameState::InGame);
    }
}

fn cleanup_boot(mut commands: Commands, query: Query<Entity, With<BootUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<BootTimer>();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn pulse_yoyos_between_full_and_half() {
        assert!((pulse_alpha(ms(0)) - 1.0).abs() < 1e-5);
        assert!((pulse_alpha(ms(250)) - 0.75).abs() < 1e-5);
        assert!((pulse_alpha(ms(500)) - 0.5).abs() < 1e-5);
        assert!((pulse_alpha(ms(750)) - 0.75).abs() < 1e-5);
        assert!((pulse_alpha(ms(1250)) - 0.75).abs() < 1e-5);
    }
}
