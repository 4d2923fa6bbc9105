//! Host page model: containers carrying configuration fields, plus the
//! elements a widget appends to them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Variant;
use crate::constants::*;
use crate::error::PageError;

/// Element appended to a container by a mounted widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Image,
    LeftArrow,
    RightArrow,
    Dots { markers: usize },
}

impl Element {
    pub fn class(&self) -> &'static str {
        match self {
            Element::Image => IMAGE_CLASS,
            Element::LeftArrow => LEFT_ARROW_CLASS,
            Element::RightArrow => RIGHT_ARROW_CLASS,
            Element::Dots { .. } => DOTS_CLASS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub classes: Vec<String>,

    /// Value-bearing fields, keyed by name (e.g. `slideshow-count`).
    #[serde(default)]
    pub fields: BTreeMap<String, String>,

    /// Fixed width; when absent the container takes the width the host offers.
    #[serde(default)]
    pub width: Option<f32>,

    #[serde(skip)]
    pub height: f32,

    #[serde(skip)]
    pub children: Vec<Element>,
}

impl Container {
    pub fn new<I, K, V>(class: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            classes: vec![class.to_string()],
            fields: fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Looks up a field whose key is `suffix` or ends with `-suffix`.
    pub fn field(&self, suffix: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| {
                key.as_str() == suffix
                    || key
                        .strip_suffix(suffix)
                        .is_some_and(|head| head.ends_with('-'))
            })
            .map(|(_, value)| value.as_str())
    }

    /// Drops the configuration fields and any previously generated elements.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.children.clear();
    }

    pub fn append(&mut self, element: Element) {
        self.children.push(element);
    }
}

/// A set of containers, as described by a page file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub containers: Vec<Container>,
}

impl Page {
    pub fn from_json(text: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, PageError> {
        let text = fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Containers tagged as slideshow hosts, in page order.
    pub fn slideshow_hosts(self) -> Vec<Container> {
        self.containers
            .into_iter()
            .filter(|c| Variant::of(c).is_some())
            .collect()
    }
}
