use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::WidgetError;
use crate::page::Container;

/// Feature set selected by the container's marker class.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Variant {
    Plain,   // Arrows only
    Gallery, // Arrows, page dots, click-to-enlarge
}

impl Variant {
    pub fn of(container: &Container) -> Option<Self> {
        if container.has_class(GALLERY_CLASS) {
            Some(Variant::Gallery)
        } else if container.has_class(PLAIN_CLASS) {
            Some(Variant::Plain)
        } else {
            None
        }
    }

    pub fn has_dots(self) -> bool {
        self == Variant::Gallery
    }

    pub fn opens_on_click(self) -> bool {
        self == Variant::Gallery
    }
}

/// Target aspect ratio, written `<width>x<height>`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct AspectSize {
    pub width: u32,
    pub height: u32,
}

impl AspectSize {
    /// Height matching `width` at this ratio.
    pub fn height_for(&self, width: f32) -> f32 {
        width * self.height as f32 / self.width as f32
    }
}

impl FromStr for AspectSize {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || WidgetError::MalformedSize(s.to_string());
        let digits = |part: &str| -> Result<u32, WidgetError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse().map_err(|_| malformed())
        };

        let (w, h) = s.split_once('x').ok_or_else(malformed)?;
        let size = AspectSize { width: digits(w)?, height: digits(h)? };
        if size.width == 0 {
            return Err(malformed());
        }
        Ok(size)
    }
}

impl fmt::Display for AspectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub name: String,
    pub count: usize,
    pub size: AspectSize,
    pub overlay_dots: bool,
}

impl WidgetConfig {
    /// Reads the configuration fields, clears the container, then validates
    /// the size. A malformed size leaves the container empty.
    pub fn take_from(container: &mut Container) -> Result<Self, WidgetError> {
        let name = container
            .field(FIELD_NAME)
            .ok_or(WidgetError::MissingField(FIELD_NAME))?
            .to_string();
        let count_field = container
            .field(FIELD_COUNT)
            .ok_or(WidgetError::MissingField(FIELD_COUNT))?;
        let count = match count_field.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return Err(WidgetError::InvalidCount(count_field.to_string())),
        };
        let size = container
            .field(FIELD_SIZE)
            .ok_or(WidgetError::MissingField(FIELD_SIZE))?
            .to_string();
        let overlay_dots = container.field(FIELD_OVERLAY_DOTS) == Some("true");

        container.clear();

        Ok(Self {
            name,
            count,
            size: size.parse()?,
            overlay_dots,
        })
    }

    /// URL of the image at `index` (0-based); files are numbered from 1.
    pub fn image_url(&self, index: usize) -> String {
        format!("{}/{}/{}.{}", IMAGE_ROOT, self.name, index + 1, IMAGE_EXTENSION)
    }

    pub fn image_urls(&self) -> Vec<String> {
        (0..self.count).map(|i| self.image_url(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(size: &str) -> Container {
        Container::new(
            PLAIN_CLASS,
            [("slideshow-name", "demo"), ("slideshow-count", "3"), ("slideshow-size", size)],
        )
    }

    #[test]
    fn parses_size() {
        assert_eq!("800x600".parse::<AspectSize>(), Ok(AspectSize { width: 800, height: 600 }));
        assert_eq!("16x9".parse::<AspectSize>().map(|s| s.to_string()), Ok("16x9".into()));
    }

    #[test]
    fn rejects_malformed_sizes() {
        for bad in ["400x", "abc", "x300", "800 x 600", "800x600x2", "-8x6", "8x+6", "0x10", ""] {
            assert_eq!(
                bad.parse::<AspectSize>(),
                Err(WidgetError::MalformedSize(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn height_follows_ratio() {
        let size = AspectSize { width: 800, height: 600 };
        assert_eq!(size.height_for(400.0), 300.0);
    }

    #[test]
    fn reads_config_and_clears_container() {
        let mut c = container("800x600");
        let config = WidgetConfig::take_from(&mut c).expect("valid config");
        assert_eq!(config.name, "demo");
        assert_eq!(config.count, 3);
        assert!(!config.overlay_dots);
        assert!(c.fields.is_empty());
    }

    #[test]
    fn malformed_size_fails_after_clear() {
        let mut c = container("400x");
        let err = WidgetConfig::take_from(&mut c).unwrap_err();
        assert_eq!(err, WidgetError::MalformedSize("400x".into()));
        assert!(c.fields.is_empty());
        assert!(c.children.is_empty());
    }

    #[test]
    fn missing_field_leaves_container_untouched() {
        let mut c = Container::new(PLAIN_CLASS, [("slideshow-name", "demo")]);
        let before = c.clone();
        assert_eq!(
            WidgetConfig::take_from(&mut c),
            Err(WidgetError::MissingField(FIELD_COUNT))
        );
        assert_eq!(c, before);
    }

    #[test]
    fn count_must_be_positive() {
        for bad in ["0", "-1", "three"] {
            let mut c = Container::new(
                PLAIN_CLASS,
                [("name", "demo"), ("count", bad), ("size", "4x3")],
            );
            assert_eq!(
                WidgetConfig::take_from(&mut c),
                Err(WidgetError::InvalidCount(bad.to_string()))
            );
        }
    }

    #[test]
    fn overlay_only_for_literal_true() {
        for (value, expected) in [("true", true), ("TRUE", false), ("1", false), ("yes", false)] {
            let mut c = container("4x3");
            c.fields.insert("slideshow-overlay-dots".into(), value.into());
            let config = WidgetConfig::take_from(&mut c).expect("valid config");
            assert_eq!(config.overlay_dots, expected, "{value:?}");
        }
    }

    #[test]
    fn urls_are_one_based() {
        let config = WidgetConfig::take_from(&mut container("4x3")).expect("valid config");
        assert_eq!(
            config.image_urls(),
            vec![
                "images/screenshots/demo/1.png",
                "images/screenshots/demo/2.png",
                "images/screenshots/demo/3.png",
            ]
        );
    }

    #[test]
    fn variant_from_marker_class() {
        assert_eq!(Variant::of(&Container::new(PLAIN_CLASS, [("a", "b")])), Some(Variant::Plain));
        assert_eq!(
            Variant::of(&Container::new(GALLERY_CLASS, [("a", "b")])),
            Some(Variant::Gallery)
        );
        assert_eq!(Variant::of(&Container::new("other", [("a", "b")])), None);
    }
}
