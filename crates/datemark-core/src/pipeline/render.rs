//! Watermark rendering: shadow and main text composited onto an image.

use image::RgbImage;

use crate::color::Color;
use crate::pipeline::font::ResolvedFont;
use crate::pipeline::layout;
use crate::types::{TextMetrics, WatermarkSpec};

/// Shadow displacement in pixels, applied on both axes.
const SHADOW_OFFSET: i32 = 2;

/// Draws the date text onto decoded images.
///
/// Holds the font resolved once per run and the immutable spec shared by
/// every task.
pub struct WatermarkRenderer {
    font: ResolvedFont,
    spec: WatermarkSpec,
}

impl WatermarkRenderer {
    /// Create a renderer from an already-resolved font and run spec.
    pub fn new(font: ResolvedFont, spec: WatermarkSpec) -> Self {
        Self { font, spec }
    }

    /// Draw `text` with a drop shadow at the spec's anchor.
    ///
    /// The image must already be in 3-channel RGB. The shadow is drawn
    /// first, offset (+2, +2), always in solid black, even when the main
    /// color is black and the shadow ends up invisible. The main text lands
    /// on top in the requested color.
    pub fn render(&self, img: &mut RgbImage, text: &str) -> TextMetrics {
        let metrics = self.font.measure(text, self.spec.font_size);
        let (x, y) = layout::position(img.width(), img.height(), metrics, self.spec.anchor);

        self.font.draw(
            img,
            text,
            x + SHADOW_OFFSET,
            y + SHADOW_OFFSET,
            self.spec.font_size,
            Color::black(),
        );
        self.font
            .draw(img, text, x, y, self.spec.font_size, self.spec.color);

        metrics
    }

    /// The immutable run spec this renderer draws with.
    pub fn spec(&self) -> &WatermarkSpec {
        &self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::layout::Anchor;
    use image::Rgb;

    fn renderer(color: Color, anchor: Anchor) -> WatermarkRenderer {
        WatermarkRenderer::new(
            ResolvedFont::Builtin,
            WatermarkSpec {
                font_size: 36,
                color,
                anchor,
            },
        )
    }

    #[test]
    fn test_render_draws_text_and_shadow() {
        let r = renderer(Color::white(), Anchor::Center);
        let mut img = RgbImage::from_pixel(200, 100, Rgb([120, 120, 120]));
        r.render(&mut img, "2023");

        let white = img.pixels().filter(|p| p.0 == [255, 255, 255]).count();
        let black = img.pixels().filter(|p| p.0 == [0, 0, 0]).count();
        assert!(white > 0, "main text should be drawn");
        assert!(black > 0, "shadow pixels not covered by the text remain");
    }

    #[test]
    fn test_render_is_deterministic() {
        let r = renderer(Color::white(), Anchor::BottomRight);
        let mut a = RgbImage::from_pixel(200, 100, Rgb([50, 80, 110]));
        let mut b = a.clone();
        r.render(&mut a, "2023年05月17日");
        r.render(&mut b, "2023年05月17日");
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_render_black_on_black_shadow_is_invisible() {
        // The shadow stays black even for black text; on a white canvas
        // the only dark pixels are text + shadow, all pure black.
        let r = renderer(Color::black(), Anchor::TopLeft);
        let mut img = RgbImage::from_pixel(200, 100, Rgb([255, 255, 255]));
        r.render(&mut img, "17");

        let non_white: Vec<_> = img.pixels().filter(|p| p.0 != [255, 255, 255]).collect();
        assert!(!non_white.is_empty());
        assert!(non_white.iter().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_render_oversized_text_does_not_panic() {
        let r = renderer(Color::white(), Anchor::BottomRight);
        // Image far smaller than the text box; placement goes negative
        let mut img = RgbImage::from_pixel(16, 16, Rgb([0, 0, 0]));
        r.render(&mut img, "2023年05月17日");
    }

    #[test]
    fn test_render_returns_metrics() {
        let r = renderer(Color::white(), Anchor::Center);
        let mut img = RgbImage::from_pixel(100, 100, Rgb([0, 0, 0]));
        let metrics = r.render(&mut img, "1234");
        assert_eq!(metrics, ResolvedFont::Builtin.measure("1234", 36));
    }
}
