//! Preload scene - register texture files and generate whatever is missing.

use std::path::Path;

use bevy::prelude::*;

use crate::core::GameState;
use crate::textures::{generate_missing, keys, ImageStore, TextureCache};

/// Directory the asset server reads from.
pub const ASSET_ROOT: &str = "assets";

/// Keys whose image file does not exist under `root`.
pub fn missing_asset_files<'a>(root: &Path, expected: &[&'a str]) -> Vec<&'a str> {
    expected
        .iter()
        .copied()
        .filter(|key| !root.join(keys::asset_path(key)).is_file())
        .collect()
}

/// Load every texture file that exists, fill the gaps procedurally, then
/// move on to the boot screen.
pub fn preload_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let mut cache = TextureCache::default();
    let missing = missing_asset_files(Path::new(ASSET_ROOT), keys::EXPECTED);

    for key in keys::EXPECTED {
        if missing.contains(key) {
            warn!("Error loading asset: {}", key);
        } else {
            cache.insert(key, asset_server.load(keys::asset_path(key)));
        }
    }

    let generated = generate_missing(
        &mut ImageStore {
            cache: &mut cache,
            images: &mut images,
        },
        keys::EXPECTED,
    );

    info!(
        "Textures ready: {} from files, {} generated",
        keys::EXPECTED.len() - generated.len(),
        generated.len()
    );

    commands.insert_resource(cache);
    next_state.set(GameState::Boot);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_is_missing_without_an_asset_folder() {
        let missing = missing_asset_files(Path::new("no-such-asset-root"), keys::EXPECTED);
        assert_eq!(missing, keys::EXPECTED.to_vec());
    }
}
