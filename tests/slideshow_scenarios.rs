use carousel::host::Metrics;
use carousel::layout::Size;
use carousel::state::Phase;
use carousel::{Container, ImageOutcome, Options, Page, Signal, Slideshow, WidgetError, mount_all};

struct Measured {
    strip: f32,
}

impl Metrics for Measured {
    fn arrow_size(&self) -> Size {
        Size { width: 40.0, height: 64.0 }
    }
    fn dot_strip_height(&self) -> f32 {
        self.strip
    }
    fn dot_pitch(&self) -> f32 {
        18.0
    }
}

const METRICS: Measured = Measured { strip: 24.0 };

fn demo(class: &str, overlay: bool) -> Container {
    let mut fields = vec![
        ("slideshow-name", "demo"),
        ("slideshow-count", "3"),
        ("slideshow-size", "800x600"),
    ];
    if overlay {
        fields.push(("slideshow-overlay-dots", "true"));
    }
    Container::new(class, fields)
}

/// Clicks the right arrow and drives frames until the transition settles.
fn click_right(w: &mut Slideshow, clock: &mut f64) {
    let arrow = w.layout_rects().right_arrow;
    let mut env = NoViewer;
    w.click(
        carousel::layout::Point::new(arrow.x + 1.0, arrow.y + 1.0),
        &mut env,
    );
    loop {
        *clock += 16.7;
        match w.tick(*clock) {
            Some(Signal::SourceChanged(_)) => {
                w.image_settled(ImageOutcome::Loaded);
            }
            Some(Signal::Settled) => break,
            _ => {}
        }
    }
}

struct NoViewer;

impl carousel::host::Environment for NoViewer {
    fn open_in_new_context(&mut self, _url: &str) {}
}

#[test]
fn right_arrow_cycles_and_wraps() {
    let mut w = Slideshow::mount(demo("slideshow", false), 880.0, &METRICS, Options::default())
        .expect("mount");
    let mut clock = 0.0;
    assert_eq!(w.src(), "images/screenshots/demo/1.png");

    click_right(&mut w, &mut clock);
    assert_eq!(w.src(), "images/screenshots/demo/2.png");

    click_right(&mut w, &mut clock);
    click_right(&mut w, &mut clock);
    assert_eq!(w.src(), "images/screenshots/demo/1.png");
    assert_eq!(w.phase(), Phase::Idle);
    assert_eq!(w.opacity(), 1.0);
}

#[test]
fn strip_height_counts_only_when_not_overlaid() {
    let reserved = Slideshow::mount(demo("slideshow-gallery", false), 880.0, &METRICS, Options::default())
        .expect("mount");
    let overlaid = Slideshow::mount(demo("slideshow-gallery", true), 880.0, &METRICS, Options::default())
        .expect("mount");

    assert_eq!(reserved.container().height, 624.0);
    assert_eq!(overlaid.container().height, 600.0);
}

#[test]
fn malformed_size_only_clears_container() {
    for bad in ["400x", "abc"] {
        let container = Container::new(
            "slideshow-gallery",
            [("name", "demo"), ("count", "3"), ("size", bad)],
        );
        let err = Slideshow::mount(container, 880.0, &METRICS, Options::default()).unwrap_err();
        assert_eq!(err, WidgetError::MalformedSize(bad.to_string()));
    }
}

#[test]
fn page_file_mounts_every_host() {
    let page = Page::from_json(
        r#"{
            "containers": [
                { "classes": ["slideshow"],
                  "fields": { "slideshow-name": "cli", "slideshow-count": "4", "slideshow-size": "16x9" } },
                { "classes": ["note"] },
                { "classes": ["slideshow-gallery"], "width": 480,
                  "fields": { "slideshow-name": "editor", "slideshow-count": "2", "slideshow-size": "4x3",
                              "slideshow-overlay-dots": "true" } }
            ]
        }"#,
    )
    .expect("page");

    let mounted = mount_all(page.slideshow_hosts(), 880.0, &METRICS, Options::default());
    assert!(mounted.failures.is_empty());
    assert_eq!(mounted.widgets.len(), 2);

    let editor = &mounted.widgets[1];
    assert_eq!(editor.src(), "images/screenshots/editor/1.png");
    assert_eq!(editor.layout_rects().image.width, 400.0);
    assert_eq!(editor.container().height, 300.0);
}
