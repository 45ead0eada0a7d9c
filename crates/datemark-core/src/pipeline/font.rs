//! Font resolution and text rasterization.
//!
//! A single resolution interface walks the configured candidate list and
//! returns the first font that loads. When nothing loads, rendering falls
//! back to a built-in fixed-size bitmap font so the run can still complete;
//! the requested font size is ignored in that mode and glyphs outside the
//! built-in table draw as tofu boxes.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::types::TextMetrics;

/// Cell dimensions of the built-in bitmap font.
const BUILTIN_GLYPH_WIDTH: u32 = 8;
const BUILTIN_GLYPH_HEIGHT: u32 = 16;

/// A font usable for measuring and drawing the watermark text.
pub enum ResolvedFont {
    /// A TrueType/OpenType font loaded from disk, scaled to the request.
    TrueType(FontVec),
    /// Built-in fixed-size bitmap font.
    Builtin,
}

impl ResolvedFont {
    /// Try each candidate path in order and return the first font that
    /// loads; fall back to the built-in font when none does.
    ///
    /// Called once per run. Total failure is non-fatal and logged as a
    /// single warning.
    pub fn resolve(candidates: &[PathBuf]) -> ResolvedFont {
        for candidate in candidates {
            match Self::load_truetype(candidate) {
                Ok(font) => {
                    tracing::debug!("Loaded font {:?}", candidate);
                    return ResolvedFont::TrueType(font);
                }
                Err(e) => {
                    tracing::debug!("Font candidate {:?} unavailable: {}", candidate, e);
                }
            }
        }
        tracing::warn!(
            "No usable font among {} candidate path(s); using the built-in \
             fixed-size font (requested size will not apply)",
            candidates.len()
        );
        ResolvedFont::Builtin
    }

    fn load_truetype(path: &Path) -> Result<FontVec, String> {
        if !path.is_file() {
            return Err("no such file".to_string());
        }
        let data = std::fs::read(path).map_err(|e| e.to_string())?;
        FontVec::try_from_vec(data).map_err(|e| e.to_string())
    }

    /// Measure the bounding box of `text` at the requested size.
    pub fn measure(&self, text: &str, font_size: u32) -> TextMetrics {
        match self {
            ResolvedFont::TrueType(font) => {
                let scale = PxScale::from(font_size as f32);
                let scaled = font.as_scaled(scale);

                let mut width = 0.0f32;
                let mut prev_glyph: Option<ab_glyph::GlyphId> = None;
                for c in text.chars() {
                    let glyph_id = scaled.glyph_id(c);
                    if let Some(prev) = prev_glyph {
                        width += scaled.kern(prev, glyph_id);
                    }
                    width += scaled.h_advance(glyph_id);
                    prev_glyph = Some(glyph_id);
                }

                TextMetrics {
                    width: width.ceil() as u32,
                    height: scaled.height().ceil() as u32,
                }
            }
            ResolvedFont::Builtin => TextMetrics {
                width: text.chars().count() as u32 * BUILTIN_GLYPH_WIDTH,
                height: BUILTIN_GLYPH_HEIGHT,
            },
        }
    }

    /// Draw `text` onto `img` with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside the image are dropped, so out-of-bounds
    /// placements from oversized text are safe.
    pub fn draw(
        &self,
        img: &mut RgbImage,
        text: &str,
        x: i32,
        y: i32,
        font_size: u32,
        color: Color,
    ) {
        match self {
            ResolvedFont::TrueType(font) => {
                Self::draw_truetype(font, img, text, x, y, font_size, color)
            }
            ResolvedFont::Builtin => Self::draw_builtin(img, text, x, y, color),
        }
    }

    fn draw_truetype(
        font: &FontVec,
        img: &mut RgbImage,
        text: &str,
        x: i32,
        y: i32,
        font_size: u32,
        color: Color,
    ) {
        let scale = PxScale::from(font_size as f32);
        let scaled = font.as_scaled(scale);
        let (img_w, img_h) = (img.width() as i32, img.height() as i32);

        let baseline_y = y as f32 + scaled.ascent();
        let mut cursor_x = x as f32;
        let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

        for c in text.chars() {
            let glyph_id = scaled.glyph_id(c);
            if let Some(prev) = prev_glyph {
                cursor_x += scaled.kern(prev, glyph_id);
            }

            let glyph =
                glyph_id.with_scale_and_position(scale, ab_glyph::point(cursor_x, baseline_y));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let ix = px as i32 + bounds.min.x as i32;
                    let iy = py as i32 + bounds.min.y as i32;
                    if ix >= 0 && iy >= 0 && ix < img_w && iy < img_h {
                        let pixel = img.get_pixel_mut(ix as u32, iy as u32);
                        *pixel = blend(*pixel, color, coverage);
                    }
                });
            }

            cursor_x += scaled.h_advance(glyph_id);
            prev_glyph = Some(glyph_id);
        }
    }

    fn draw_builtin(img: &mut RgbImage, text: &str, x: i32, y: i32, color: Color) {
        let (img_w, img_h) = (img.width() as i32, img.height() as i32);
        let mut cursor_x = x;

        for c in text.chars() {
            let rows = builtin_glyph(c).unwrap_or(&GLYPH_TOFU);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..BUILTIN_GLYPH_WIDTH {
                    if bits & (0x80 >> col) == 0 {
                        continue;
                    }
                    let ix = cursor_x + col as i32;
                    let iy = y + row as i32;
                    if ix >= 0 && iy >= 0 && ix < img_w && iy < img_h {
                        img.put_pixel(ix as u32, iy as u32, Rgb([color.r, color.g, color.b]));
                    }
                }
            }
            cursor_x += BUILTIN_GLYPH_WIDTH as i32;
        }
    }
}

/// Blend `color` over an opaque background pixel by coverage.
fn blend(bg: Rgb<u8>, color: Color, coverage: f32) -> Rgb<u8> {
    let c = coverage.clamp(0.0, 1.0);
    let mix = |b: u8, f: u8| -> u8 { (b as f32 * (1.0 - c) + f as f32 * c).round() as u8 };
    Rgb([
        mix(bg[0], color.r),
        mix(bg[1], color.g),
        mix(bg[2], color.b),
    ])
}

/// 8x16 bitmap rows for the built-in font, bit 0x80 = leftmost column.
///
/// The table covers the characters a date stamp is made of; anything else
/// renders as the tofu box.
fn builtin_glyph(c: char) -> Option<&'static [u8; 16]> {
    match c {
        '0' => Some(&GLYPH_D0),
        '1' => Some(&GLYPH_D1),
        '2' => Some(&GLYPH_D2),
        '3' => Some(&GLYPH_D3),
        '4' => Some(&GLYPH_D4),
        '5' => Some(&GLYPH_D5),
        '6' => Some(&GLYPH_D6),
        '7' => Some(&GLYPH_D7),
        '8' => Some(&GLYPH_D8),
        '9' => Some(&GLYPH_D9),
        ':' => Some(&GLYPH_COLON),
        '-' => Some(&GLYPH_HYPHEN),
        '.' => Some(&GLYPH_PERIOD),
        ' ' => Some(&GLYPH_SPACE),
        _ => None,
    }
}

const GLYPH_D0: [u8; 16] = [
    0x00, 0x00, 0x3C, 0x66, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0x66, 0x3C, 0x00, 0x00, 0x00,
];
const GLYPH_D1: [u8; 16] = [
    0x00, 0x00, 0x18, 0x38, 0x78, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, 0x00,
];
const GLYPH_D2: [u8; 16] = [
    0x00, 0x00, 0x3C, 0x66, 0xC3, 0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0xFF, 0x00, 0x00, 0x00,
];
const GLYPH_D3: [u8; 16] = [
    0x00, 0x00, 0x3C, 0x66, 0xC3, 0x03, 0x03, 0x1E, 0x03, 0x03, 0xC3, 0x66, 0x3C, 0x00, 0x00, 0x00,
];
const GLYPH_D4: [u8; 16] = [
    0x00, 0x00, 0x06, 0x0E, 0x1E, 0x36, 0x66, 0xC6, 0xFF, 0x06, 0x06, 0x06, 0x06, 0x00, 0x00, 0x00,
];
const GLYPH_D5: [u8; 16] = [
    0x00, 0x00, 0xFF, 0xC0, 0xC0, 0xC0, 0xFC, 0x06, 0x03, 0x03, 0xC3, 0x66, 0x3C, 0x00, 0x00, 0x00,
];
const GLYPH_D6: [u8; 16] = [
    0x00, 0x00, 0x3C, 0x66, 0xC0, 0xC0, 0xFC, 0xC6, 0xC3, 0xC3, 0xC3, 0x66, 0x3C, 0x00, 0x00, 0x00,
];
const GLYPH_D7: [u8; 16] = [
    0x00, 0x00, 0xFF, 0x03, 0x06, 0x0C, 0x0C, 0x18, 0x18, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00, 0x00,
];
const GLYPH_D8: [u8; 16] = [
    0x00, 0x00, 0x3C, 0x66, 0xC3, 0xC3, 0x66, 0x3C, 0x66, 0xC3, 0xC3, 0x66, 0x3C, 0x00, 0x00, 0x00,
];
const GLYPH_D9: [u8; 16] = [
    0x00, 0x00, 0x3C, 0x66, 0xC3, 0xC3, 0xC3, 0x63, 0x3F, 0x03, 0x03, 0x66, 0x3C, 0x00, 0x00, 0x00,
];
const GLYPH_COLON: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
];
const GLYPH_HYPHEN: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
const GLYPH_PERIOD: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
];
const GLYPH_SPACE: [u8; 16] = [0x00; 16];
const GLYPH_TOFU: [u8; 16] = [
    0x00, 0x00, 0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF, 0x00, 0x00, 0x00,
];
