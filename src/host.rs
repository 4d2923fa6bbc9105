use crate::layout::Size;

/// Rendered sizes of the generated elements, as measured by the host.
pub trait Metrics {
    fn arrow_size(&self) -> Size;
    fn dot_strip_height(&self) -> f32;
    /// Horizontal distance between the centers of two adjacent dots.
    fn dot_pitch(&self) -> f32;
}

/// Environment services a widget can request.
pub trait Environment {
    /// Shows `url` in a new browsing context (tab, window or viewer).
    fn open_in_new_context(&mut self, url: &str);
}
