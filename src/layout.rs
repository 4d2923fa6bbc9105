//! Geometry of a widget inside its container.
//!
//! Coordinates are relative to the container's top-left corner.

use crate::config::AspectSize;
use crate::host::Metrics;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub image: Rect,
    pub left_arrow: Rect,
    pub right_arrow: Rect,
    pub dots: Option<Rect>,
    /// One hit cell per marker, left to right.
    pub markers: Vec<Rect>,
    /// Total container height, rounded up.
    pub height: f32,
}

impl Layout {
    /// Lays out a widget in a container `width` wide.
    ///
    /// `markers` is the number of page dots, or `None` when the widget has no
    /// dot strip. With `overlay_dots` the strip is drawn over the bottom of the
    /// image and takes no vertical space of its own.
    pub fn compute(
        width: f32,
        size: AspectSize,
        markers: Option<usize>,
        overlay_dots: bool,
        metrics: &impl Metrics,
    ) -> Self {
        let arrow = metrics.arrow_size();
        let dots_height = markers.map_or(0.0, |_| metrics.dot_strip_height());
        let reserved = if overlay_dots { 0.0 } else { dots_height };

        let content_width = (width - 2.0 * arrow.width).max(1.0);
        let content_height = size.height_for(content_width);
        let height = arrow.height.max(content_height + reserved).ceil();

        let image = Rect::new(
            (width - content_width) / 2.0,
            (height - reserved - content_height) / 2.0,
            content_width,
            content_height,
        );

        let arrow_y = ((height - reserved - arrow.height) / 2.0).max(0.0);
        let left_arrow = Rect::new(image.x - arrow.width, arrow_y, arrow.width, arrow.height);
        let right_arrow = Rect::new(image.right(), arrow_y, arrow.width, arrow.height);

        let dots = markers.map(|_| {
            let y = if overlay_dots {
                image.bottom() - dots_height
            } else {
                image.bottom()
            };
            Rect::new(image.x, y, content_width, dots_height)
        });

        let markers = match (dots, markers) {
            (Some(strip), Some(n)) => marker_cells(strip, n, metrics.dot_pitch()),
            _ => Vec::new(),
        };

        Layout { image, left_arrow, right_arrow, dots, markers, height }
    }
}

// Cells of `pitch` width, centered as a row inside the strip.
fn marker_cells(strip: Rect, n: usize, pitch: f32) -> Vec<Rect> {
    let row = pitch * n as f32;
    let x0 = strip.x + (strip.width - row) / 2.0;
    (0..n)
        .map(|i| Rect::new(x0 + pitch * i as f32, strip.y, pitch, strip.height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl Metrics for Fixed {
        fn arrow_size(&self) -> Size {
            Size { width: 24.0, height: 48.0 }
        }
        fn dot_strip_height(&self) -> f32 {
            20.0
        }
        fn dot_pitch(&self) -> f32 {
            16.0
        }
    }

    const SIZE: AspectSize = AspectSize { width: 800, height: 600 };

    #[test]
    fn content_fills_between_arrows() {
        let layout = Layout::compute(848.0, SIZE, None, false, &Fixed);
        assert_eq!(layout.image, Rect::new(24.0, 0.0, 800.0, 600.0));
        assert_eq!(layout.left_arrow, Rect::new(0.0, 276.0, 24.0, 48.0));
        assert_eq!(layout.right_arrow, Rect::new(824.0, 276.0, 24.0, 48.0));
        assert_eq!(layout.height, 600.0);
        assert!(layout.dots.is_none());
        assert!(layout.markers.is_empty());
    }

    #[test]
    fn reserved_strip_adds_height() {
        let layout = Layout::compute(848.0, SIZE, Some(3), false, &Fixed);
        assert_eq!(layout.height, 620.0);
        assert_eq!(layout.image.y, 0.0);
        assert_eq!(layout.dots, Some(Rect::new(24.0, 600.0, 800.0, 20.0)));
    }

    #[test]
    fn overlaid_strip_takes_no_height() {
        let layout = Layout::compute(848.0, SIZE, Some(3), true, &Fixed);
        assert_eq!(layout.height, 600.0);
        assert_eq!(layout.dots, Some(Rect::new(24.0, 580.0, 800.0, 20.0)));
    }

    #[test]
    fn markers_are_centered_in_strip() {
        let layout = Layout::compute(848.0, SIZE, Some(3), false, &Fixed);
        let xs: Vec<f32> = layout.markers.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![400.0, 416.0, 432.0]);
        assert!(layout.markers.iter().all(|r| r.y == 600.0 && r.height == 20.0));
    }

    #[test]
    fn narrow_container_floors_content_width() {
        let layout = Layout::compute(30.0, SIZE, None, false, &Fixed);
        assert_eq!(layout.image.width, 1.0);
        // Arrow height dominates a 0.75px tall image.
        assert_eq!(layout.height, 48.0);
        assert_eq!(layout.image.y, (48.0 - 0.75) / 2.0);
    }

    #[test]
    fn height_is_rounded_up() {
        let size = AspectSize { width: 3, height: 1 };
        let layout = Layout::compute(148.0, size, None, false, &Fixed);
        // 100 / 3 = 33.33.. below the arrow, then 48.
        assert_eq!(layout.height, 48.0);

        let layout = Layout::compute(448.0, size, None, false, &Fixed);
        assert_eq!(layout.height, 134.0);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(!r.contains(Point::new(15.0, 12.0)));
        assert!(!r.contains(Point::new(12.0, 15.0)));
    }
}
