use crate::error::WidgetError;
use crate::host::Metrics;
use crate::page::Container;
use crate::widget::{Options, Slideshow};

/// Result of mounting a page's containers.
#[derive(Debug, Default)]
pub struct Mounted {
    pub widgets: Vec<Slideshow>,
    /// Position among the given containers, and why it could not be mounted.
    pub failures: Vec<(usize, WidgetError)>,
}

/// Mounts one independent widget per container. A container that fails
/// to mount is reported and skipped; its siblings are unaffected.
pub fn mount_all(
    containers: impl IntoIterator<Item = Container>,
    available_width: f32,
    metrics: &impl Metrics,
    options: Options,
) -> Mounted {
    let mut mounted = Mounted::default();
    for (position, container) in containers.into_iter().enumerate() {
        match Slideshow::mount(container, available_width, metrics, options) {
            Ok(widget) => mounted.widgets.push(widget),
            Err(e) => {
                log::error!("slideshow #{position} not mounted: {e}");
                mounted.failures.push((position, e));
            }
        }
    }
    mounted
}
