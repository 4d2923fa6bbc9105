pub const IMAGE_ROOT: &str = "images/screenshots"; // Prefix of every slide URL
pub const IMAGE_EXTENSION: &str = "png";

pub const FADE_OUT_DURATION: f64 = 200.0;     // Fade-out of the current image (ms)
pub const FADE_IN_DURATION: f64 = 300.0;      // Fade-in of the next image (ms)

// Container marker classes
pub const PLAIN_CLASS: &str = "slideshow";
pub const GALLERY_CLASS: &str = "slideshow-gallery";

// Field suffixes read from the container
pub const FIELD_NAME: &str = "name";
pub const FIELD_COUNT: &str = "count";
pub const FIELD_SIZE: &str = "size";
pub const FIELD_OVERLAY_DOTS: &str = "overlay-dots";

// Classes of the generated elements
pub const IMAGE_CLASS: &str = "slideshow-image";
pub const LEFT_ARROW_CLASS: &str = "slideshow-arrow-left";
pub const RIGHT_ARROW_CLASS: &str = "slideshow-arrow-right";
pub const DOTS_CLASS: &str = "slideshow-dots";
pub const DOT_CLASS: &str = "slideshow-dot";
pub const DOT_CURRENT_CLASS: &str = "slideshow-dot-current";

// Window host defaults
pub const WINDOW_WIDTH: i32 = 960;
pub const WINDOW_HEIGHT: i32 = 720;
pub const FPS: u32 = 60;
pub const PAGE_MARGIN: f32 = 16.0;            // Space around and between containers (px)

// Window host metrics
pub const ARROW_WIDTH: f32 = 40.0;
pub const ARROW_HEIGHT: f32 = 64.0;
pub const DOT_STRIP_HEIGHT: f32 = 24.0;
pub const DOT_RADIUS: f32 = 5.0;
pub const DOT_SPACING: f32 = 18.0;            // Distance between dot centers (px)
