//! raylib host: stacks the mounted slideshows vertically in a window, feeds
//! them frame times and clicks, and loads their images as textures.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use raylib::prelude::*;

use crate::constants::*;
use crate::host::{Environment, Metrics};
use crate::layout::{Point, Rect, Size};
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::widget::{ImageOutcome, Signal, Slideshow};

/// Fixed element sizes drawn by this host.
pub struct WindowMetrics;

impl Metrics for WindowMetrics {
    fn arrow_size(&self) -> Size {
        Size { width: ARROW_WIDTH, height: ARROW_HEIGHT }
    }

    fn dot_strip_height(&self) -> f32 {
        DOT_STRIP_HEIGHT
    }

    fn dot_pitch(&self) -> f32 {
        DOT_SPACING
    }
}

/// Full-window viewer standing in for a new browsing context.
#[derive(Debug, Default)]
pub struct Viewer {
    url: Option<String>,
}

impl Viewer {
    pub fn is_open(&self) -> bool {
        self.url.is_some()
    }

    pub fn close(&mut self) {
        self.url = None;
    }
}

impl Environment for Viewer {
    fn open_in_new_context(&mut self, url: &str) {
        log::info!("opening {url} in viewer");
        self.url = Some(url.to_string());
    }
}

// `None` marks a source that failed to load.
type TextureCache = HashMap<String, Option<Texture2D>>;

fn ensure_texture(
    cache: &mut TextureCache,
    root: &Path,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    url: &str,
) -> ImageOutcome {
    let entry = cache.entry(url.to_string()).or_insert_with(|| {
        match load_texture_with_exif_rotation(rl, thread, &root.join(url)) {
            Ok(texture) => Some(texture),
            Err(e) => {
                log::warn!("{e:#}");
                None
            }
        }
    });
    if entry.is_some() {
        ImageOutcome::Loaded
    } else {
        ImageOutcome::Failed
    }
}

pub struct CarouselEngine {
    root: PathBuf,
    widgets: Vec<Slideshow>,
    textures: TextureCache,
    viewer: Viewer,
}

impl CarouselEngine {
    pub fn new(root: PathBuf, widgets: Vec<Slideshow>) -> Self {
        Self {
            root,
            widgets,
            textures: HashMap::new(),
            viewer: Viewer::default(),
        }
    }

    /// Loads the first image of every widget.
    pub fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        for widget in &self.widgets {
            ensure_texture(&mut self.textures, &self.root, rl, thread, widget.src());
        }
    }

    // Top-left corner of each widget's container in window coordinates.
    fn origins(&self) -> Vec<Vector2> {
        let mut y = PAGE_MARGIN;
        self.widgets
            .iter()
            .map(|w| {
                let origin = Vector2::new(PAGE_MARGIN, y);
                y += w.container().height + PAGE_MARGIN;
                origin
            })
            .collect()
    }

    pub fn resize(&mut self, screen_width: i32) {
        let available = (screen_width as f32 - 2.0 * PAGE_MARGIN).max(1.0);
        log::debug!("relayout for {available}px");
        for widget in &mut self.widgets {
            widget.layout(available, &WindowMetrics);
        }
    }

    pub fn handle_click(&mut self, position: Vector2) {
        if self.viewer.is_open() {
            self.viewer.close();
            return;
        }
        let origins = self.origins();
        for (widget, origin) in self.widgets.iter_mut().zip(origins) {
            let local = Point::new(position.x - origin.x, position.y - origin.y);
            if widget.click(local, &mut self.viewer).is_some() {
                break;
            }
        }
    }

    pub fn close_viewer(&mut self) {
        self.viewer.close();
    }

    /// Drives every widget to frame time `now` (milliseconds).
    pub fn update(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, now: f64) {
        for widget in &mut self.widgets {
            match widget.tick(now) {
                Some(Signal::SourceChanged(url)) => {
                    let outcome = ensure_texture(&mut self.textures, &self.root, rl, thread, &url);
                    widget.image_settled(outcome);
                }
                Some(Signal::SwapTimedOut) | Some(Signal::Settled) | None => {}
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::BLACK);

        for (widget, origin) in self.widgets.iter().zip(self.origins()) {
            self.draw_widget(d, widget, origin);
        }

        if let Some(url) = &self.viewer.url {
            self.draw_viewer(d, url);
        }
    }

    fn draw_widget(&self, d: &mut RaylibDrawHandle, widget: &Slideshow, origin: Vector2) {
        let layout = widget.layout_rects();
        let place = |r: Rect| r.offset(origin.x, origin.y);

        let image = place(layout.image);
        let alpha = (widget.opacity().clamp(0.0, 1.0) * 255.0) as u8;
        match self.textures.get(widget.src()) {
            Some(Some(texture)) => d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                Rectangle::new(image.x, image.y, image.width, image.height),
                Vector2::zero(),
                0.0,
                Color::new(255, 255, 255, alpha),
            ),
            _ => {
                let color = Color::new(130, 130, 130, alpha);
                d.draw_rectangle_lines_ex(
                    Rectangle::new(image.x, image.y, image.width, image.height),
                    2.0,
                    color,
                );
                d.draw_text("image unavailable", image.x as i32 + 8, image.y as i32 + 8, 20, color);
            }
        }

        draw_arrow(d, place(layout.left_arrow), true);
        draw_arrow(d, place(layout.right_arrow), false);

        if let Some(markers) = widget.markers() {
            for (cell, &current) in layout.markers.iter().zip(markers) {
                let cell = place(*cell);
                let center = Vector2::new(cell.x + cell.width / 2.0, cell.y + cell.height / 2.0);
                let color = if current { Color::WHITE } else { Color::DARKGRAY };
                d.draw_circle_v(center, DOT_RADIUS, color);
            }
        }
    }

    fn draw_viewer(&self, d: &mut RaylibDrawHandle, url: &str) {
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.draw_rectangle(0, 0, sw as i32, sh as i32, Color::new(0, 0, 0, 230));

        match self.textures.get(url) {
            Some(Some(texture)) => {
                let (tw, th) = (texture.width() as f32, texture.height() as f32);
                let scale = (sw * 0.9 / tw).min(sh * 0.9 / th);
                let (w, h) = (tw * scale, th * scale);
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tw, th),
                    Rectangle::new((sw - w) / 2.0, (sh - h) / 2.0, w, h),
                    Vector2::zero(),
                    0.0,
                    Color::WHITE,
                );
            }
            _ => d.draw_text("image unavailable", 20, 20, 20, Color::GRAY),
        }
        d.draw_text(url, 10, sh as i32 - 24, 16, Color::GRAY);
    }
}

fn draw_arrow(d: &mut RaylibDrawHandle, r: Rect, left: bool) {
    let (x0, x1) = (r.x + r.width * 0.3, r.x + r.width * 0.7);
    let (top, mid, bottom) = (r.y + r.height * 0.3, r.y + r.height * 0.5, r.y + r.height * 0.7);

    // Vertices in counter-clockwise order
    if left {
        d.draw_triangle(
            Vector2::new(x0, mid),
            Vector2::new(x1, bottom),
            Vector2::new(x1, top),
            Color::LIGHTGRAY,
        );
    } else {
        d.draw_triangle(
            Vector2::new(x1, mid),
            Vector2::new(x0, top),
            Vector2::new(x0, bottom),
            Color::LIGHTGRAY,
        );
    }
}
