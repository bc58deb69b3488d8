/// Maximum vertical drift of the hero banner, in pixels.
pub const MAX_PARALLAX_PX: f64 = 12.0;

/// Vertical offset for the hero banner given the viewport height and the
/// banner's bounding box. The banner sits `MAX_PARALLAX_PX` low when just
/// below the fold and settles to 0 as it scrolls through the viewport.
pub fn parallax_offset(viewport_height: f64, rect_top: f64, rect_height: f64) -> f64 {
    let span = viewport_height + rect_height;
    if !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    let progress = ((viewport_height - rect_top) / span).clamp(0.0, 1.0);
    (1.0 - progress) * MAX_PARALLAX_PX
}
