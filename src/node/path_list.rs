//! Path list option node

use std::any::Any;

use crate::error::Result;
use crate::node::ConfigNode;

/// The host platform's conventional path-list separator, with `!` as the
/// fallback where the platform defines none.
#[must_use]
pub fn default_path_list_separator() -> char {
    if cfg!(windows) {
        ';'
    } else if cfg!(unix) {
        ':'
    } else {
        '!'
    }
}

/// An ordered list of path elements, delimited by a single separator
/// character.
///
/// Whitespace is valid within elements: leading and trailing whitespace is
/// discarded from the whole input, not from individual elements. Splitting
/// is unconditional, so an empty input yields a single empty element rather
/// than an empty list. An element that itself contains the separator cannot
/// survive a format/parse round trip; that ambiguity is inherent to the
/// format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathListOption {
    default: Vec<String>,
    values: Vec<String>,
    set: bool,
    separator: char,
}

impl PathListOption {
    /// Create a path list option using the platform separator
    pub fn new(default: Vec<String>) -> Self {
        Self::with_separator(default, default_path_list_separator())
    }

    /// Create a path list option with an explicit separator character
    pub fn with_separator(default: Vec<String>, separator: char) -> Self {
        Self {
            values: default.clone(),
            default,
            set: false,
            separator,
        }
    }

    /// The current elements, in input order
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The separator this option splits and joins on
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }
}

impl ConfigNode for PathListOption {
    fn format(&self) -> String {
        self.values.join(&self.separator.to_string())
    }

    fn parse(&mut self, new_value: &str) -> Result<()> {
        self.values = new_value
            .trim()
            .split(self.separator)
            .map(str::to_owned)
            .collect();
        self.set = true;
        Ok(())
    }

    fn is_default(&self) -> bool {
        !self.set
    }

    fn reset(&mut self) {
        self.values = self.default.clone();
        self.set = false;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
