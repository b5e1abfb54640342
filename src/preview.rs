//! Standalone SVG and raster previews of serialized path data.
//!
//! Presentation helpers only: the path data is embedded as given, scaled from the fixed
//! `0 0 200 200` synthesis canvas to the requested pixel size.

use std::fmt::Write as _;

use crate::foundation::core::{BezPath, VIEW_BOX_SIZE};
use crate::foundation::error::{SigilError, SigilResult};

const MAX_PREVIEW_PX: u32 = 4096;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Styling for [`svg_document`] and [`rasterize`].
pub struct PreviewOpts {
    /// Output width and height in pixels.
    pub size_px: u32,
    /// Stroke color as straight-alpha RGBA8.
    pub stroke_rgba8: [u8; 4],
    /// Stroke width in canvas units.
    pub stroke_width: f64,
    /// Optional background fill as straight-alpha RGBA8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_rgba8: Option<[u8; 4]>,
}

impl Default for PreviewOpts {
    fn default() -> Self {
        Self {
            size_px: 200,
            stroke_rgba8: [0x06, 0xb6, 0xd4, 0xff],
            stroke_width: 2.0,
            background_rgba8: None,
        }
    }
}

#[derive(Clone, Debug)]
/// Rasterized preview in straight-alpha RGBA8, row-major.
pub struct RasterFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes.
    pub data: Vec<u8>,
}

/// Build a standalone SVG document around `path_data`.
///
/// The path data is embedded verbatim, so it must be plain move/line/close syntax: any
/// character outside that alphabet is rejected before parsing.
pub fn svg_document(path_data: &str, opts: &PreviewOpts) -> SigilResult<String> {
    validate_opts(opts)?;
    validate_path_data(path_data)?;

    let size = opts.size_px;
    let mut doc = String::with_capacity(path_data.len() + 320);
    // Writing into a String cannot fail.
    let _ = write!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {VIEW_BOX_SIZE} {VIEW_BOX_SIZE}">"#
    );
    if let Some(bg) = opts.background_rgba8 {
        let _ = write!(
            doc,
            r#"<rect width="{VIEW_BOX_SIZE}" height="{VIEW_BOX_SIZE}" fill="{}" fill-opacity="{}"/>"#,
            hex_rgb(bg),
            opacity(bg[3])
        );
    }
    let _ = write!(
        doc,
        r#"<path d="{path_data}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/></svg>"#,
        hex_rgb(opts.stroke_rgba8),
        opacity(opts.stroke_rgba8[3]),
        opts.stroke_width
    );
    Ok(doc)
}

/// Render `path_data` to pixels with `resvg`.
pub fn rasterize(path_data: &str, opts: &PreviewOpts) -> SigilResult<RasterFrame> {
    let doc = svg_document(path_data, opts)?;
    let tree = usvg::Tree::from_str(&doc, &usvg::Options::default())
        .map_err(|e| SigilError::render(format!("parse preview svg: {e}")))?;

    let size = opts.size_px;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| SigilError::render("failed to allocate preview pixmap"))?;

    let sx = (size as f32) / tree.size().width();
    let sy = (size as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut data = pixmap.data().to_vec();
    unpremultiply_rgba8_in_place(&mut data);
    Ok(RasterFrame {
        width: size,
        height: size,
        data,
    })
}

fn validate_path_data(path_data: &str) -> SigilResult<()> {
    if let Some(bad) = path_data.chars().find(|&c| !is_path_char(c)) {
        return Err(SigilError::validation(format!(
            "invalid path data: unexpected character {bad:?}"
        )));
    }
    BezPath::from_svg(path_data)
        .map_err(|e| SigilError::validation(format!("invalid path data: {e}")))?;
    Ok(())
}

fn is_path_char(c: char) -> bool {
    matches!(c, 'M' | 'm' | 'L' | 'l' | 'Z' | 'z' | 'e' | 'E' | '+' | '-' | '.' | ',')
        || c.is_ascii_digit()
        || c.is_ascii_whitespace()
}

fn validate_opts(opts: &PreviewOpts) -> SigilResult<()> {
    if opts.size_px == 0 || opts.size_px > MAX_PREVIEW_PX {
        return Err(SigilError::validation(format!(
            "preview size must be within 1..={MAX_PREVIEW_PX}, got {}",
            opts.size_px
        )));
    }
    if !opts.stroke_width.is_finite() || opts.stroke_width <= 0.0 {
        return Err(SigilError::validation("preview stroke width must be > 0"));
    }
    Ok(())
}

fn hex_rgb(c: [u8; 4]) -> String {
    format!("#{:02x}{:02x}{:02x}", c[0], c[1], c[2])
}

fn opacity(a: u8) -> f64 {
    (f64::from(a) / 255.0 * 1000.0).round() / 1000.0
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/preview.rs"]
mod tests;
