//! String option node

use std::any::Any;

use crate::error::Result;
use crate::node::ConfigNode;

/// A free-form text value. No validation, no trimming; the raw right-hand
/// side of the config line is stored as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringOption {
    default: String,
    value: String,
    set: bool,
}

impl StringOption {
    /// Create a string option with the given default value
    pub fn new(default: impl Into<String>) -> Self {
        let default = default.into();
        Self {
            value: default.clone(),
            default,
            set: false,
        }
    }

    /// The current value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl ConfigNode for StringOption {
    fn format(&self) -> String {
        self.value.clone()
    }

    fn parse(&mut self, new_value: &str) -> Result<()> {
        self.value = new_value.to_string();
        self.set = true;
        Ok(())
    }

    fn is_default(&self) -> bool {
        !self.set
    }

    fn reset(&mut self) {
        self.value = self.default.clone();
        self.set = false;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
