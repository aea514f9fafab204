//! Procedural fallbacks for every texture the game uses.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::log::debug;
use bevy::math::Vec2;
use image::Rgba;

use super::canvas::{hex, rgba, Canvas};
use super::keys;

const SPRITE_SIZE: u32 = 32;
const EFFECT_SIZE: u32 = 64;
const OUTLINE: u32 = 0x2c3e50;

/// Somewhere generated textures can be stored and looked up by key.
pub trait TextureStore {
    fn contains(&self, key: &str) -> bool;
    fn insert(&mut self, key: &str, canvas: Canvas);
}

/// Draw and store every key in `keys` that the store does not have yet.
/// Returns the keys that were generated.
pub fn generate_missing<S: TextureStore + ?Sized>(store: &mut S, keys: &[&str]) -> Vec<String> {
    let mut generated = Vec::new();

    for &key in keys {
        if store.contains(key) {
            continue;
        }
        store.insert(key, draw(key));
        generated.push(key.to_string());
    }

    if !generated.is_empty() {
        debug!("Generated {} procedural textures", generated.len());
    }
    generated
}

/// Render the procedural design for `key`.
pub fn draw(key: &str) -> Canvas {
    match key {
        keys::ENEMY => enemy(),
        keys::GRASS_TILE => tile(0x2ecc71),
        keys::STONE_TILE => tile(0x7f8c8d),
        keys::WALL_TILE => tile(0x34495e),
        keys::ITEM_GLOW => item_glow(),
        keys::PICKUP_EFFECT => pickup_effect(),
        keys::DROP_EFFECT => drop_effect(),
        keys::HIT_EFFECT => hit_effect(),
        keys::ATTACK_EFFECT => attack_effect(),
        keys::HEALTH_POTION => potion(0xe74c3c),
        keys::MANA_POTION => potion(0x3498db),
        keys::GOLD_COIN => gold_coin(),
        keys::WEAPON => weapon(),
        keys::ARMOR => armor(),
        keys::ITEM_DEFAULT => generic_item(hex(0x9b59b6)),
        keys::ITEM_PLACEHOLDER => generic_item(hex(0x95a5a6)),
        _ if key.starts_with("player-") => player(key),
        _ => generic_item(color_for_key(key)),
    }
}

fn player(key: &str) -> Canvas {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);

    canvas.fill_rect(8, 8, 16, 16, hex(0x3498db));
    canvas.fill_rect(10, 4, 12, 8, hex(0xf1c40f));

    let marker = if key.contains("down") {
        Some((14, 24))
    } else if key.contains("up") {
        Some((14, 4))
    } else if key.contains("left") {
        Some((4, 14))
    } else if key.contains("right") {
        Some((24, 14))
    } else {
        None
    };
    if let Some((x, y)) = marker {
        canvas.fill_rect(x, y, 4, 4, hex(0xe74c3c));
    }

    if key.ends_with("-2") {
        canvas.fill_rect(24, 24, 4, 4, hex(0x2ecc71));
    }

    canvas.stroke_rect(8, 8, 16, 16, hex(OUTLINE));
    canvas.stroke_rect(10, 4, 12, 8, hex(OUTLINE));
    canvas
}

fn enemy() -> Canvas {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);

    canvas.fill_rect(8, 8, 16, 16, hex(0xe74c3c));
    canvas.fill_rect(10, 4, 12, 8, hex(0x7f8c8d));
    // Eyes
    canvas.fill_rect(12, 6, 3, 3, hex(0xffffff));
    canvas.fill_rect(17, 6, 3, 3, hex(0xffffff));

    canvas.stroke_rect(8, 8, 16, 16, hex(OUTLINE));
    canvas.stroke_rect(10, 4, 12, 8, hex(OUTLINE));
    canvas
}

fn tile(base: u32) -> Canvas {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);
    canvas.fill_rect(0, 0, 32, 32, hex(base));

    let checker = rgba(255, 255, 255, 0.1);
    for i in 0..4 {
        for j in 0..4 {
            if (i + j) % 2 == 0 {
                canvas.fill_rect(i * 8, j * 8, 8, 8, checker);
            }
        }
    }

    canvas.stroke_rect(0, 0, 32, 32, rgba(0, 0, 0, 0.2));
    canvas
}

fn glow(r: u8, g: u8, b: u8, stops: &[(f32, f32)]) -> Canvas {
    let mut canvas = Canvas::new(EFFECT_SIZE, EFFECT_SIZE);
    let stops: Vec<(f32, Rgba<u8>)> = stops
        .iter()
        .map(|&(offset, alpha)| (offset, rgba(r, g, b, alpha)))
        .collect();
    canvas.fill_radial_gradient(Vec2::splat(32.0), 32.0, &stops);
    canvas
}

fn item_glow() -> Canvas {
    glow(255, 255, 255, &[(0.0, 0.7), (1.0, 0.0)])
}

fn pickup_effect() -> Canvas {
    let mut canvas = glow(255, 255, 255, &[(0.0, 0.8), (0.5, 0.3), (1.0, 0.0)]);

    let sparkle = rgba(255, 255, 255, 0.9);
    for i in 0..8 {
        let angle = i as f32 / 8.0 * TAU;
        let centre = Vec2::splat(32.0) + Vec2::from_angle(angle) * 20.0;
        canvas.fill_circle(centre, 2.0, sparkle);
    }
    canvas
}

fn drop_effect() -> Canvas {
    let mut canvas = glow(255, 215, 0, &[(0.0, 0.8), (0.5, 0.3), (1.0, 0.0)]);

    let sparkle = rgba(255, 255, 255, 0.9);
    for i in 0..5 {
        let angle = i as f32 / 5.0 * TAU;
        let centre = Vec2::splat(32.0) + Vec2::from_angle(angle) * 15.0;
        canvas.fill_polygon(&star(centre, 5.0, 2.0, 5), sparkle);
    }
    canvas
}

fn hit_effect() -> Canvas {
    let mut canvas = glow(255, 0, 0, &[(0.0, 0.8), (0.5, 0.3), (1.0, 0.0)]);

    let cross = rgba(255, 255, 255, 0.8);
    canvas.stroke_line(Vec2::new(22.0, 22.0), Vec2::new(42.0, 42.0), 3.0, cross);
    canvas.stroke_line(Vec2::new(42.0, 22.0), Vec2::new(22.0, 42.0), 3.0, cross);
    canvas
}

fn attack_effect() -> Canvas {
    let mut canvas = glow(255, 165, 0, &[(0.0, 0.8), (0.5, 0.3), (1.0, 0.0)]);

    let slash = rgba(255, 255, 255, 0.8);
    canvas.stroke_line(Vec2::new(16.0, 48.0), Vec2::new(48.0, 16.0), 4.0, slash);
    canvas.stroke_line(Vec2::new(20.0, 44.0), Vec2::new(44.0, 20.0), 4.0, slash);
    canvas
}

fn potion(color: u32) -> Canvas {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);
    canvas.fill_rect(12, 8, 8, 16, hex(color));
    canvas.fill_rect(10, 18, 12, 6, hex(color));
    canvas.fill_rect(14, 10, 4, 4, hex(0xffffff));
    canvas.stroke_rect(8, 8, 16, 16, hex(OUTLINE));
    canvas
}

fn gold_coin() -> Canvas {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);
    canvas.fill_circle(Vec2::splat(16.0), 8.0, hex(0xf1c40f));
    canvas.fill_circle(Vec2::splat(16.0), 4.0, hex(0xffffff));
    canvas.stroke_rect(8, 8, 16, 16, hex(OUTLINE));
    canvas
}

fn weapon() -> Canvas {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);
    // Blade, then crossguard
    canvas.fill_rect(14, 8, 4, 20, hex(0xe67e22));
    canvas.fill_rect(10, 12, 12, 4, hex(0xe67e22));
    canvas.stroke_rect(8, 8, 16, 16, hex(OUTLINE));
    canvas
}

fn armor() -> Canvas {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);
    canvas.fill_rect(10, 8, 12, 16, hex(0x2ecc71));
    canvas.fill_rect(8, 12, 16, 8, hex(0x2ecc71));
    canvas.stroke_rect(8, 8, 16, 16, hex(OUTLINE));
    canvas
}

fn generic_item(color: Rgba<u8>) -> Canvas {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);
    canvas.fill_rect(8, 8, 16, 16, color);
    canvas.stroke_rect(8, 8, 16, 16, hex(OUTLINE));
    canvas
}

/// Outline of a star with `spikes` points, the first pointing up.
fn star(centre: Vec2, outer: f32, inner: f32, spikes: usize) -> Vec<Vec2> {
    let step = PI / spikes as f32;
    let mut rotation = 3.0 * FRAC_PI_2;

    (0..spikes * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let point = centre + Vec2::from_angle(rotation) * radius;
            rotation += step;
            point
        })
        .collect()
}

/// Stable color for a key with no dedicated design (FNV-1a).
fn color_for_key(key: &str) -> Rgba<u8> {
    let hash = key
        .bytes()
        .fold(0x811c_9dc5_u32, |h, b| (h ^ b as u32).wrapping_mul(0x0100_0193));
    hex(hash & 0x00ff_ffff)
}
