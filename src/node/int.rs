//! Integer option node

use std::any::Any;

use crate::error::Result;
use crate::node::ConfigNode;

/// A base-10 signed integer value. Input is whitespace-trimmed before
/// parsing; the standard parser's error is surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntOption {
    default: i64,
    value: i64,
    set: bool,
}

impl IntOption {
    /// Create an integer option with the given default value
    pub fn new(default: i64) -> Self {
        Self {
            default,
            value: default,
            set: false,
        }
    }

    /// The current value
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl ConfigNode for IntOption {
    fn format(&self) -> String {
        self.value.to_string()
    }

    fn parse(&mut self, new_value: &str) -> Result<()> {
        let parsed = new_value.trim().parse::<i64>()?;
        self.value = parsed;
        self.set = true;
        Ok(())
    }

    fn is_default(&self) -> bool {
        !self.set
    }

    fn reset(&mut self) {
        self.value = self.default;
        self.set = false;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
