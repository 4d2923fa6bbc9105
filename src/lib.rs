//! Image carousel widget: cycles through a fixed set of screenshots with
//! crossfade transitions, arrows, optional page dots and responsive layout.
//!
//! The widget logic is host-agnostic. A host supplies [`host::Metrics`] and
//! [`host::Environment`], calls [`widget::Slideshow::tick`] once per frame,
//! and reports image load results back with
//! [`widget::Slideshow::image_settled`]. With the `window` feature a raylib
//! host is provided in [`engine`].

pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod layout;
pub mod mount;
pub mod page;
pub mod state;
pub mod tween;
pub mod widget;

#[cfg(feature = "window")]
pub mod engine;
#[cfg(feature = "window")]
pub mod texture_loader;

pub use config::{AspectSize, Variant, WidgetConfig};
pub use error::{PageError, WidgetError};
pub use mount::{Mounted, mount_all};
pub use page::{Container, Page};
pub use widget::{ImageOutcome, Options, Signal, Slideshow, Target};
