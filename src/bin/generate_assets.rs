//! Texture generator
//!
//! Writes the basketball skin and the scoreboard face plate into
//! assets/generated/. The game regenerates missing files on startup,
//! so running this by hand is only needed after changing the drawing
//! code.
//!
//! Run with: `cargo run --bin generate_assets`

use hoopcourt::generate;

fn main() {
    println!("Generating textures into assets/generated ...");

    match generate::generate_all() {
        Ok(()) => {
            println!("  {}", generate::BALL_TEXTURE_FILE);
            println!("  {}", generate::SCOREBOARD_FACE_FILE);
            println!("Done.");
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
    }
}
