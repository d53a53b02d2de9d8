//! Procedural texture drawing

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use std::f32::consts::PI;

// Colors
const LEATHER: [u8; 4] = [238, 103, 48, 255]; // Basketball orange
const SEAM: [u8; 4] = [25, 20, 18, 255];
const FRAME_OUTER: Rgba<u8> = Rgba([51, 51, 51, 255]);
const FRAME_INNER: Rgba<u8> = Rgba([85, 85, 85, 255]);
const BOARD_TEXT: Rgba<u8> = Rgba([0, 255, 70, 255]);

/// Shortest wrapped distance between two values in [0, 1)
fn wrap_dist(a: f32, b: f32) -> f32 {
    let d = (a - b).abs();
    d.min(1.0 - d)
}

/// Basketball texture for a UV-mapped sphere: shaded leather with an
/// equator seam and four meridian seams, matching the classic
/// great-circle look.
pub fn basketball_texture(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let w = size as f32;
    let h = size as f32;
    let seam_half = (w * 0.006).max(1.5);

    for y in 0..size {
        for x in 0..size {
            let u = x as f32 / (w - 1.0);
            let v = y as f32 / (h - 1.0);

            let mut on_seam = (y as f32 - h * 0.5).abs() <= seam_half;
            for meridian in [0.0_f32, 0.25, 0.5, 0.75] {
                if wrap_dist(u, meridian) * w <= seam_half {
                    on_seam = true;
                }
            }

            if on_seam {
                img.put_pixel(x, y, Rgba(SEAM));
                continue;
            }

            // Leather shading: dimmer toward the poles, light pebble grain
            let polar = (v * PI).sin().clamp(0.35, 1.0);
            let grain = 1.0 + 0.035 * ((u * 140.0 * PI).sin() * (v * 90.0 * PI).sin());
            let shade = polar * grain;

            let r = (LEATHER[0] as f32 * shade).min(255.0) as u8;
            let g = (LEATHER[1] as f32 * shade).min(255.0) as u8;
            let b = (LEATHER[2] as f32 * shade).min(255.0) as u8;
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }

    img
}

/// Scoreboard face plate: dark gradient, double frame, and HOME/GUEST
/// block lettering. Live numbers render on the HUD, not here.
pub fn scoreboard_face(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);

    // Vertical gradient, darkest across the center band
    for y in 0..height {
        let t = y as f32 / (height - 1) as f32;
        let lum = (10.0 + 16.0 * (2.0 * t - 1.0).abs()) as u8;
        for x in 0..width {
            img.put_pixel(x, y, Rgba([lum, lum, lum, 255]));
        }
    }

    draw_frame(&mut img, 4, 8, FRAME_OUTER);
    draw_frame(&mut img, 12, 2, FRAME_INNER);

    let text = "HOME - GUEST";
    let scale = 8;
    let text_width = block_text_width(text, scale);
    let left = (width as i32 - text_width) / 2;
    let top = (height as i32 - GLYPH_H as i32 * scale) / 2;
    draw_block_text(&mut img, text, left, top, scale, BOARD_TEXT);

    img
}

/// Draw a rectangular frame as four filled bars
fn draw_frame(img: &mut RgbaImage, inset: i32, thickness: i32, color: Rgba<u8>) {
    let w = img.width() as i32;
    let h = img.height() as i32;
    let span_w = (w - 2 * inset) as u32;
    let span_h = (h - 2 * inset) as u32;
    let t = thickness as u32;

    draw_filled_rect_mut(img, Rect::at(inset, inset).of_size(span_w, t), color);
    draw_filled_rect_mut(
        img,
        Rect::at(inset, h - inset - thickness).of_size(span_w, t),
        color,
    );
    draw_filled_rect_mut(img, Rect::at(inset, inset).of_size(t, span_h), color);
    draw_filled_rect_mut(
        img,
        Rect::at(w - inset - thickness, inset).of_size(t, span_h),
        color,
    );
}

// =============================================================================
// BLOCK LETTERING (5x7 pixel glyphs)
// =============================================================================

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;

/// Row bitmasks for the characters the scoreboard needs
fn glyph_rows(c: char) -> [u8; 7] {
    match c {
        'H' => [
            0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001,
        ],
        'O' => [
            0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110,
        ],
        'M' => [
            0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001,
        ],
        'E' => [
            0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111,
        ],
        'G' => [
            0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111,
        ],
        'U' => [
            0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110,
        ],
        'S' => [
            0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110,
        ],
        'T' => [
            0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100,
        ],
        '-' => [0b00000, 0b00000, 0b00000, 0b01110, 0b00000, 0b00000, 0b00000],
        _ => [0b00000; 7],
    }
}

/// Width of a run of block text, including inter-glyph gaps
pub fn block_text_width(text: &str, scale: i32) -> i32 {
    let count = text.chars().count() as i32;
    if count == 0 {
        return 0;
    }
    count * (GLYPH_W as i32 + 1) * scale - scale
}

/// Draw block lettering with each glyph pixel as a scale x scale square
pub fn draw_block_text(
    img: &mut RgbaImage,
    text: &str,
    left: i32,
    top: i32,
    scale: i32,
    color: Rgba<u8>,
) {
    let mut cursor = left;
    for c in text.chars() {
        let rows = glyph_rows(c);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (1 << (GLYPH_W - 1 - col)) != 0 {
                    draw_filled_rect_mut(
                        img,
                        Rect::at(cursor + col as i32 * scale, top + row as i32 * scale)
                            .of_size(scale as u32, scale as u32),
                        color,
                    );
                }
            }
        }
        cursor += (GLYPH_W as i32 + 1) * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basketball_texture_has_seams_and_leather() {
        let img = basketball_texture(128);
        assert_eq!(img.dimensions(), (128, 128));

        let equator = img.get_pixel(40, 64);
        assert_eq!(equator.0, SEAM, "equator row should be seam colored");

        let leather = img.get_pixel(20, 64 + 16);
        assert!(
            leather.0[0] > 150 && leather.0[0] > leather.0[2],
            "off-seam pixels should be orange leather, got {:?}",
            leather
        );
    }

    #[test]
    fn scoreboard_face_has_frame() {
        let img = scoreboard_face(256, 64);
        assert_eq!(img.dimensions(), (256, 64));
        assert_eq!(
            *img.get_pixel(128, 6),
            FRAME_OUTER,
            "outer frame band should sit 4px in from the edge"
        );
    }

    #[test]
    fn block_text_width_counts_gaps() {
        assert_eq!(block_text_width("", 8), 0);
        assert_eq!(block_text_width("H", 8), 40);
        assert_eq!(block_text_width("HO", 8), 88);
    }
}
