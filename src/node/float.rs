//! Float option node

use std::any::Any;

use crate::error::Result;
use crate::node::ConfigNode;

/// An IEEE double value. Input is whitespace-trimmed before parsing;
/// formatting uses the shortest representation that round-trips.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatOption {
    default: f64,
    value: f64,
    set: bool,
}

impl FloatOption {
    /// Create a float option with the given default value
    pub fn new(default: f64) -> Self {
        Self {
            default,
            value: default,
            set: false,
        }
    }

    /// The current value
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl ConfigNode for FloatOption {
    fn format(&self) -> String {
        // f64's Display is the shortest string that parses back exactly.
        self.value.to_string()
    }

    fn parse(&mut self, new_value: &str) -> Result<()> {
        let parsed = new_value.trim().parse::<f64>()?;
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
