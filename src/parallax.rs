/// Scroll offsets (pixels from page top) between which the hero fades out.
pub const FADE_RANGE: (f64, f64) = (0.0, 600.0);
pub const OPACITY_RANGE: (f64, f64) = (1.0, 0.0);
/// Pixels the hero drifts down over [`FADE_RANGE`].
pub const OFFSET_RANGE: (f64, f64) = (0.0, 100.0);

/// Linearly maps `value` from `input` onto `output`, never extrapolating past
/// either end of `output`. Works for descending output ranges.
pub fn interpolate_clamped(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    let span = in_end - in_start;
    if span == 0.0 || value.is_nan() {
        return out_start;
    }
    let progress = ((value - in_start) / span).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * progress
}

pub fn hero_opacity(scroll_y: f64) -> f64 {
    interpolate_clamped(scroll_y, FADE_RANGE, OPACITY_RANGE)
}

pub fn hero_offset_y(scroll_y: f64) -> f64 {
    interpolate_clamped(scroll_y, FADE_RANGE, OFFSET_RANGE)
}

/// Visual state of the hero for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxValue {
    pub opacity: f64,
    pub offset_y: f64,
}

impl ParallaxValue {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            opacity: hero_opacity(scroll_y),
            offset_y: hero_offset_y(scroll_y),
        }
    }

    /// Inline CSS for the hero content block.
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px)",
            self.opacity, self.offset_y
        )
    }
}

impl Default for ParallaxValue {
    fn default() -> Self {
        Self::at(0.0)
    }
}
