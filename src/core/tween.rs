//! Sprite tweens driven by the engine clock: fade-outs and alpha flashes.

use std::time::Duration;

use bevy::prelude::*;

use super::events::{Fade, Flash};

/// Fades and scales a transient effect sprite, then despawns it.
#[derive(Component, Debug, Clone)]
pub struct FadeTween {
    pub from_alpha: f32,
    pub from_scale: f32,
    pub fade: Fade,
    pub elapsed: Duration,
}

impl FadeTween {
    pub fn new(from_alpha: f32, fade: Fade) -> Self {
        Self {
            from_alpha,
            from_scale: 1.0,
            fade,
            elapsed: Duration::ZERO,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.fade.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.fade.duration.as_secs_f32()).min(1.0)
    }

    /// Current `(alpha, scale)`.
    pub fn sample(&self) -> (f32, f32) {
        let t = self.progress();
        (
            self.from_alpha + (self.fade.to_alpha - self.from_alpha) * t,
            self.from_scale + (self.fade.to_scale - self.from_scale) * t,
        )
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.fade.duration
    }
}

/// Runs a yoyo alpha flash on an actor sprite.
#[derive(Component, Debug, Clone)]
pub struct FlashTween {
    pub flash: Flash,
    pub elapsed: Duration,
}

impl FlashTween {
    pub fn new(flash: Flash) -> Self {
        Self {
            flash,
            elapsed: Duration::ZERO,
        }
    }
}

/// System that advances fade tweens and despawns finished effects.
pub fn update_fade_tweens(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut FadeTween, &mut Sprite, &mut Transform)>,
) {
    for (entity, mut tween, mut sprite, mut transform) in query.iter_mut() {
        tween.elapsed += time.delta();

        if tween.finished() {
            commands.entity(entity).despawn_recursive();
            continue;
        }

        let (alpha, scale) = tween.sample();
        sprite.color = sprite.color.with_alpha(alpha);
        transform.scale = Vec3::splat(scale);
    }
}

/// System that advances actor flashes and restores full opacity at the end.
pub fn update_flash_tweens(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut FlashTween, &mut Sprite)>,
) {
    for (entity, mut tween, mut sprite) in query.iter_mut() {
        tween.elapsed += time.delta();

        match tween.flash.alpha_at(tween.elapsed) {
            Some(alpha) => sprite.color = sprite.color.with_alpha(alpha),
            None => {
                sprite.color = sprite.color.with_alpha(1.0);
                commands.entity(entity).remove::<FlashTween>();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_reaches_targets() {
        let mut tween = FadeTween::new(0.7, Fade::out(1.5, 300));
        assert_eq!(tween.sample(), (0.7, 1.0));

        tween.elapsed = Duration::from_millis(150);
        let (alpha, scale) = tween.sample();
        assert!((alpha - 0.35).abs() < 1e-4);
        assert!((scale - 1.25).abs() < 1e-4);
        assert!(!tween.finished());

        tween.elapsed = Duration::from_millis(300);
        assert!(tween.finished());
    }
}
