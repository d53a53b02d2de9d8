//! Asset generation
//!
//! Procedural PNG assets written into assets/generated/:
//! - Basketball texture (leather orange with seam lines) for the ball mesh
//! - Scoreboard face plate for the stadium boards

pub mod textures;

use bevy::log::{info, warn};
use std::path::Path;

pub const BALL_TEXTURE_FILE: &str = "assets/generated/basketball.png";
pub const BALL_TEXTURE_ASSET: &str = "generated/basketball.png";
pub const SCOREBOARD_FACE_FILE: &str = "assets/generated/scoreboard_face.png";
pub const SCOREBOARD_FACE_ASSET: &str = "generated/scoreboard_face.png";

/// Generate every asset, overwriting existing files
pub fn generate_all() -> Result<(), String> {
    write_png(BALL_TEXTURE_FILE, textures::basketball_texture(512))?;
    write_png(SCOREBOARD_FACE_FILE, textures::scoreboard_face(1024, 256))?;
    Ok(())
}

fn write_png(path: &str, img: image::RgbaImage) -> Result<(), String> {
    if let Some(parent) = Path::new(path).parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    img.save(path)
        .map_err(|e| format!("Failed to save {}: {}", path, e))
}

/// Startup system: write any missing generated asset before the scene
/// loads it
pub fn ensure_generated_assets() {
    let missing = [BALL_TEXTURE_FILE, SCOREBOARD_FACE_FILE]
        .iter()
        .any(|path| !Path::new(path).exists());
    if !missing {
        return;
    }

    info!("Generating missing textures into assets/generated");
    if let Err(err) = generate_all() {
        warn!("Asset generation failed: {}", err);
    }
}
