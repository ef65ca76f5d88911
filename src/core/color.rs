use std::collections::HashMap;

use crate::utils::validation::{validate_rgb_triplet, InvalidColorFormat};

/// Prefix of generated color names
pub const COLOR_NAME_PREFIX: &str = "gx-karyotype-";

/// Outcome of resolving a color against the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorResolution<'a> {
    /// First time this color was seen; it was added under this name
    New(&'a str),
    /// Color was already in the table
    Existing(&'a str),
}

impl<'a> ColorResolution<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            ColorResolution::New(name) | ColorResolution::Existing(name) => name,
        }
    }

    #[must_use]
    pub fn is_new(&self) -> bool {
        matches!(self, ColorResolution::New(_))
    }
}

/// Maps raw `R,G,B` strings to generated `gx-karyotype-<k>` names.
///
/// `k` is the zero-based insertion index, so names follow first-seen order.
/// Entries are never removed.
#[derive(Debug, Default)]
pub struct ColorTable {
    names: HashMap<String, String>,
    order: Vec<String>,
}

impl ColorTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a color, validating and inserting it if unseen.
    ///
    /// Colors are matched by exact string, so `255,0,0` and `255,00,0` get
    /// separate names.
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorFormat` if an unseen color is not an `R,G,B` triplet.
    /// Rejected colors are not recorded.
    pub fn resolve(&mut self, color: &str) -> Result<ColorResolution<'_>, InvalidColorFormat> {
        if self.names.contains_key(color) {
            return Ok(ColorResolution::Existing(&self.names[color]));
        }

        validate_rgb_triplet(color)?;

        let name = format!("{COLOR_NAME_PREFIX}{}", self.order.len());
        self.order.push(color.to_string());
        let name = self.names.entry(color.to_string()).or_insert(name);
        Ok(ColorResolution::New(name.as_str()))
    }

    /// Symbolic name for a previously accepted color
    #[must_use]
    pub fn get(&self, color: &str) -> Option<&str> {
        self.names.get(color).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(color, name)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|color| (color.as_str(), self.names[color].as_str()))
    }
}
