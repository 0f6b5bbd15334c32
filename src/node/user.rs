//! User option node

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::node::ConfigNode;
use crate::users::{UserDirectory, UserIdentity};

/// A user specification: either a decimal numeric id or a symbolic name.
///
/// The raw text is stored verbatim; identity resolution happens at
/// [`resolve`](UserOption::resolve) time. An empty value is a distinguished
/// "unset" state, not uid 0.
#[derive(Clone)]
pub struct UserOption {
    default: String,
    value: String,
    set: bool,
    directory: Arc<dyn UserDirectory>,
}

impl UserOption {
    /// Create a user option backed by the host user database
    #[cfg(unix)]
    pub fn new(default: impl Into<String>) -> Self {
        Self::with_directory(default, Arc::new(crate::users::SystemUsers))
    }

    /// Create a user option backed by an explicit directory service
    pub fn with_directory(
        default: impl Into<String>,
        directory: Arc<dyn UserDirectory>,
    ) -> Self {
        let default = default.into();
        Self {
            value: default.clone(),
            default,
            set: false,
            directory,
        }
    }

    /// The raw stored text, exactly as parsed
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Resolve the stored value against the user directory.
    ///
    /// A trimmed-empty value yields [`Error::UserUnset`]. Numeric text is
    /// looked up as a uid; anything else as a login name. A name that is
    /// also numeric text is deliberately treated as numeric.
    pub fn resolve(&self) -> Result<UserIdentity> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return Err(Error::UserUnset);
        }
        match trimmed.parse::<u32>() {
            Ok(uid) => self.directory.lookup_uid(uid),
            Err(_) => self.directory.lookup_name(trimmed),
        }
    }
}

impl fmt::Debug for UserOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserOption")
            .field("default", &self.default)
            .field("value", &self.value)
            .field("set", &self.set)
            .finish_non_exhaustive()
    }
}

impl ConfigNode for UserOption {
    fn format(&self) -> String {
        self.value.clone()
    }

    fn parse(&mut self, new_value: &str) -> Result<()> {
        let trimmed = new_value.trim();
        if !trimmed.is_empty() && trimmed.parse::<u32>().is_err() {
            // Not numeric: the name must exist now. Numeric ids are
            // accepted without a directory call and checked at resolve
            // time instead.
            self.directory.lookup_name(trimmed)?;
        }
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
