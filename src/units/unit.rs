//! The movement/body value embedded in every actor.

use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

/// Facing direction in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Down, Direction::Up, Direction::Left, Direction::Right];

    /// Lowercase name used in animation and texture keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Unit vector in screen space.
    pub fn unit_vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Direction of the dominant axis of `v`, `None` for a zero vector.
    /// Horizontal wins ties.
    pub fn from_vector(v: Vec2) -> Option<Direction> {
        if v == Vec2::ZERO {
            return None;
        }
        if v.x.abs() >= v.y.abs() {
            Some(if v.x < 0.0 { Direction::Left } else { Direction::Right })
        } else {
            Some(if v.y < 0.0 { Direction::Up } else { Direction::Down })
        }
    }
}

/// Collision box relative to the sprite's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyBox {
    pub size: Vec2,
    pub offset: Vec2,
}

impl Default for BodyBox {
    fn default() -> Self {
        Self {
            size: Vec2::splat(32.0),
            offset: Vec2::ZERO,
        }
    }
}

/// Position, velocity, facing, speed and body of an actor.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Direction,
    pub move_speed: f32,
    pub body: BodyBox,
}

impl Unit {
    /// Movement speed in units per second unless an actor overrides it.
    pub const DEFAULT_MOVE_SPEED: f32 = 100.0;

    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            facing: Direction::default(),
            move_speed: Self::DEFAULT_MOVE_SPEED,
            body: BodyBox::default(),
        }
    }

    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed;
    }

    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.velocity = Vec2::new(vx, vy);
    }

    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    pub fn set_body_size(&mut self, width: f32, height: f32) {
        self.body.size = Vec2::new(width, height);
    }

    pub fn set_body_offset(&mut self, x: f32, y: f32) {
        self.body.offset = Vec2::new(x, y);
    }

    pub fn face(&mut self, direction: Direction) {
        self.facing = direction;
    }

    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.position.distance(point)
    }

    /// Physics step: move by the current velocity over `dt`.
    pub fn integrate(&mut self, dt: Duration) {
        self.position += self.velocity * dt.as_secs_f32();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrate_moves_by_velocity() {
        let mut unit = Unit::new(Vec2::new(10.0, 10.0));
        unit.set_velocity(100.0, -50.0);
        unit.integrate(Duration::from_millis(500));

        assert!((unit.position - Vec2::new(60.0, -15.0)).length() < 1e-4);
    }

    #[test]
    fn dominant_axis_direction() {
        assert_eq!(Direction::from_vector(Vec2::new(-3.0, 1.0)), Some(Direction::Left));
        assert_eq!(Direction::from_vector(Vec2::new(0.5, -2.0)), Some(Direction::Up));
        assert_eq!(Direction::from_vector(Vec2::ZERO), None);
    }
}
