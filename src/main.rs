use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use raylib::prelude::*;

use carousel::constants::*;
use carousel::engine::{CarouselEngine, WindowMetrics};
use carousel::{Container, Options, Page, mount_all};

/// Screenshot carousel: crossfading slideshows with arrows and page dots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Page description (JSON) listing the slideshow containers
    #[arg(short, long, conflicts_with = "name")]
    page: Option<PathBuf>,

    /// Image set of a single inline slideshow (images/screenshots/<NAME>/)
    #[arg(long, required_unless_present = "page")]
    name: Option<String>,

    /// Number of images in the inline slideshow
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Aspect size of the inline slideshow, <width>x<height>
    #[arg(long, default_value = "16x9")]
    size: String,

    /// Draw the page dots over the image instead of below it
    #[arg(long)]
    overlay_dots: bool,

    /// Use the gallery variant (page dots, click to enlarge)
    #[arg(long)]
    gallery: bool,

    /// Directory that contains images/screenshots
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Initial window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Initial window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    /// Stop waiting for an image after this many milliseconds
    #[arg(long)]
    swap_timeout_ms: Option<f64>,
}

fn containers(args: &Args) -> Result<Vec<Container>> {
    if let Some(path) = &args.page {
        let page = Page::load(path).context("cannot load page")?;
        return Ok(page.slideshow_hosts());
    }

    let Some(name) = &args.name else {
        bail!("either --page or --name is required");
    };
    let class = if args.gallery { GALLERY_CLASS } else { PLAIN_CLASS };
    let mut fields = vec![
        ("slideshow-name", name.clone()),
        ("slideshow-count", args.count.to_string()),
        ("slideshow-size", args.size.clone()),
    ];
    if args.overlay_dots {
        fields.push(("slideshow-overlay-dots", "true".to_string()));
    }
    Ok(vec![Container::new(class, fields)])
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let containers = containers(&args)?;
    let available = (args.width as f32 - 2.0 * PAGE_MARGIN).max(1.0);
    let options = Options { swap_timeout: args.swap_timeout_ms };
    let mounted = mount_all(containers, available, &WindowMetrics, options);
    if mounted.widgets.is_empty() {
        bail!("no slideshow could be mounted ({} failed)", mounted.failures.len());
    }
    log::info!("{} slideshow(s) mounted", mounted.widgets.len());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_exit_key(None);

    let mut engine = CarouselEngine::new(args.root.clone(), mounted.widgets);
    engine.initialize(&mut rl, &thread);
    engine.resize(rl.get_screen_width());

    while !rl.window_should_close() {
        if rl.is_window_resized() {
            engine.resize(rl.get_screen_width());
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            engine.handle_click(rl.get_mouse_position());
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            engine.close_viewer();
        }

        let now = rl.get_time() * 1000.0;
        engine.update(&mut rl, &thread, now);

        let mut d = rl.begin_drawing(&thread);
        engine.draw(&mut d);
    }

    Ok(())
}
