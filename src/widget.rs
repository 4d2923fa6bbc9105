//! The slideshow widget: navigation, crossfade transitions and input.

use crate::config::{Variant, WidgetConfig};
use crate::constants::*;
use crate::error::WidgetError;
use crate::host::{Environment, Metrics};
use crate::layout::{Layout, Point};
use crate::page::{Container, Element};
use crate::state::Phase;
use crate::tween::Fade;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Options {
    /// Give up waiting for an image after this many milliseconds and continue
    /// as if it failed. `None` waits forever.
    pub swap_timeout: Option<f64>,
}

/// Outcome of loading the image source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    Loaded,
    Failed,
}

/// Progress reported by [`Slideshow::tick`].
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// The image source changed; the host must load it and report back.
    SourceChanged(String),
    /// The swap timed out and the widget moved on without the image.
    SwapTimedOut,
    /// The transition finished and the widget accepts navigation again.
    Settled,
}

/// Element hit by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    LeftArrow,
    RightArrow,
    Dot(usize),
    Image,
}

#[derive(Debug)]
pub struct Slideshow {
    variant: Variant,
    config: WidgetConfig,
    urls: Vec<String>,
    container: Container,

    index: usize,
    phase: Phase,
    opacity: f32,
    src: String,
    /// Current flag per marker; `None` for the plain variant.
    markers: Option<Vec<bool>>,

    layout: Layout,
    options: Options,
}

impl Slideshow {
    /// Builds a widget inside `container`, which is cleared first.
    pub fn mount(
        mut container: Container,
        available_width: f32,
        metrics: &impl Metrics,
        options: Options,
    ) -> Result<Self, WidgetError> {
        let variant = Variant::of(&container).unwrap_or(Variant::Plain);
        let config = WidgetConfig::take_from(&mut container)?;
        let urls = config.image_urls();

        container.append(Element::Image);
        container.append(Element::LeftArrow);
        container.append(Element::RightArrow);
        let markers = variant.has_dots().then(|| {
            container.append(Element::Dots { markers: config.count });
            let mut markers = vec![false; config.count];
            markers[0] = true;
            markers
        });

        let mut widget = Self {
            variant,
            src: urls[0].clone(),
            urls,
            config,
            container,
            index: 0,
            phase: Phase::Idle,
            opacity: 1.0,
            markers,
            layout: Layout::default(),
            options,
        };
        widget.layout(available_width, metrics);

        log::info!(
            "mounted {:?} slideshow {:?} ({} images, {})",
            widget.variant,
            widget.config.name,
            widget.config.count,
            widget.config.size
        );
        Ok(widget)
    }

    /// Recomputes geometry for the width the host offers; call on resize.
    pub fn layout(&mut self, available_width: f32, metrics: &impl Metrics) {
        let width = self
            .container
            .width
            .map_or(available_width, |w| w.min(available_width));
        self.layout = Layout::compute(
            width,
            self.config.size,
            self.markers.as_ref().map(Vec::len),
            self.config.overlay_dots,
            metrics,
        );
        self.container.height = self.layout.height;
    }

    /// Starts a transition `delta` slides away, wrapping in both directions.
    /// Returns false when a transition is already running.
    pub fn move_by(&mut self, delta: isize) -> bool {
        if self.phase.is_loading() {
            return false;
        }

        let count = self.urls.len() as isize;
        let next = (self.index as isize + delta % count).rem_euclid(count) as usize;

        if let Some(markers) = self.markers.as_mut() {
            markers[self.index] = false;
            markers[next] = true;
        }
        log::debug!("{}: slide {} -> {}", self.config.name, self.index, next);
        self.index = next;
        self.phase = Phase::FadingOut(Fade::fade_out(FADE_OUT_DURATION));
        true
    }

    /// Jumps to `index`; a no-op when it is already current or out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index == self.index || index >= self.urls.len() {
            return false;
        }
        self.move_by(index as isize - self.index as isize)
    }

    /// Advances the running transition to frame time `now` (milliseconds).
    pub fn tick(&mut self, now: f64) -> Option<Signal> {
        match &mut self.phase {
            Phase::Idle => None,
            Phase::FadingOut(fade) => {
                let step = fade.step(now);
                self.opacity = step.opacity;
                if !step.done {
                    return None;
                }
                self.src = self.urls[self.index].clone();
                self.phase = Phase::Swapping { since: now };
                Some(Signal::SourceChanged(self.src.clone()))
            }
            Phase::Swapping { since } => {
                let timeout = self.options.swap_timeout?;
                if now - *since < timeout {
                    return None;
                }
                log::warn!(
                    "{}: no load or error for {} after {} ms, continuing",
                    self.config.name,
                    self.src,
                    timeout
                );
                self.image_settled(ImageOutcome::Failed);
                Some(Signal::SwapTimedOut)
            }
            Phase::FadingIn(fade) => {
                let step = fade.step(now);
                self.opacity = step.opacity;
                if !step.done {
                    return None;
                }
                self.phase = Phase::Idle;
                Some(Signal::Settled)
            }
        }
    }

    /// Load or error notification for the current source. Either one
    /// completes a pending swap; outside a swap the notification is ignored.
    pub fn image_settled(&mut self, outcome: ImageOutcome) -> bool {
        if !matches!(self.phase, Phase::Swapping { .. }) {
            return false;
        }
        if outcome == ImageOutcome::Failed {
            log::warn!("{}: failed to load {}", self.config.name, self.src);
        }
        self.opacity = 0.0;
        self.phase = Phase::FadingIn(Fade::fade_in(FADE_IN_DURATION));
        true
    }

    /// Element under `p` (container coordinates) that reacts to clicks.
    pub fn hit_test(&self, p: Point) -> Option<Target> {
        if self.layout.left_arrow.contains(p) {
            return Some(Target::LeftArrow);
        }
        if self.layout.right_arrow.contains(p) {
            return Some(Target::RightArrow);
        }
        if let Some(i) = self.layout.markers.iter().position(|cell| cell.contains(p)) {
            return Some(Target::Dot(i));
        }
        if self.variant.opens_on_click() && self.layout.image.contains(p) {
            return Some(Target::Image);
        }
        None
    }

    /// Dispatches a click at `p` (container coordinates).
    pub fn click(&mut self, p: Point, env: &mut impl Environment) -> Option<Target> {
        let target = self.hit_test(p)?;
        match target {
            Target::LeftArrow => {
                self.move_by(-1);
            }
            Target::RightArrow => {
                self.move_by(1);
            }
            Target::Dot(i) => {
                self.go_to(i);
            }
            Target::Image => env.open_in_new_context(&self.src),
        }
        Some(target)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Source currently assigned to the image element.
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn markers(&self) -> Option<&[bool]> {
        self.markers.as_deref()
    }

    /// CSS-style classes of each marker, in order.
    pub fn marker_classes(&self) -> Vec<Vec<&'static str>> {
        self.markers()
            .unwrap_or_default()
            .iter()
            .map(|&current| {
                if current {
                    vec![DOT_CLASS, DOT_CURRENT_CLASS]
                } else {
                    vec![DOT_CLASS]
                }
            })
            .collect()
    }

    pub fn layout_rects(&self) -> &Layout {
        &self.layout
    }
}
