//! Anchor positions and pixel placement for the watermark text box.

use crate::types::TextMetrics;

/// Fixed margin from every image edge, in pixels.
pub const EDGE_MARGIN: i32 = 20;

/// Named watermark position on the 9-grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

impl Anchor {
    /// Look up an anchor by name.
    ///
    /// Lenient by design: an unrecognized name maps to bottom-right rather
    /// than failing, so programmatic callers always get a placement. The
    /// CLI rejects bad values at argument parsing before reaching here.
    pub fn from_name(name: &str) -> Anchor {
        match name {
            "top-left" => Anchor::TopLeft,
            "top-center" => Anchor::TopCenter,
            "top-right" => Anchor::TopRight,
            "center-left" => Anchor::CenterLeft,
            "center" => Anchor::Center,
            "center-right" => Anchor::CenterRight,
            "bottom-left" => Anchor::BottomLeft,
            "bottom-center" => Anchor::BottomCenter,
            "bottom-right" => Anchor::BottomRight,
            _ => Anchor::BottomRight,
        }
    }

    /// The canonical kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopCenter => "top-center",
            Anchor::TopRight => "top-right",
            Anchor::CenterLeft => "center-left",
            Anchor::Center => "center",
            Anchor::CenterRight => "center-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomCenter => "bottom-center",
            Anchor::BottomRight => "bottom-right",
        }
    }
}

/// Compute the top-left pixel coordinates for the text box.
///
/// Origin is the image's top-left corner, x growing right, y growing down.
/// Integer division throughout. Coordinates are not clamped: when the text
/// box is larger than the image minus margins, results go negative and the
/// text extends past the edge. Callers draw anyway; out-of-bounds pixels
/// are dropped at raster time.
pub fn position(img_w: u32, img_h: u32, metrics: TextMetrics, anchor: Anchor) -> (i32, i32) {
    let img_w = img_w as i32;
    let img_h = img_h as i32;
    let text_w = metrics.width as i32;
    let text_h = metrics.height as i32;
    let m = EDGE_MARGIN;

    match anchor {
        Anchor::TopLeft => (m, m),
        Anchor::TopCenter => ((img_w - text_w) / 2, m),
        Anchor::TopRight => (img_w - text_w - m, m),
        Anchor::CenterLeft => (m, (img_h - text_h) / 2),
        Anchor::Center => ((img_w - text_w) / 2, (img_h - text_h) / 2),
        Anchor::CenterRight => (img_w - text_w - m, (img_h - text_h) / 2),
        Anchor::BottomLeft => (m, img_h - text_h - m),
        Anchor::BottomCenter => ((img_w - text_w) / 2, img_h - text_h - m),
        Anchor::BottomRight => (img_w - text_w - m, img_h - text_h - m),
    }
}
