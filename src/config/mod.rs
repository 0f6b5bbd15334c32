//! Configuration registry
//!
//! A [`Config`] maps lowercase key names to typed option nodes. Reading
//! (`src/config/read.rs`) and writing (`src/config/write.rs`) are
//! implemented in sibling files; this module owns registration and lookup.

mod read;
mod write;

use std::collections::HashMap;

use crate::node::ConfigNode;

/// A case-insensitive registry of typed option nodes.
///
/// Each `Config` owns its own mapping; there is no process-wide state.
/// Nodes are registered once with a fixed default and never removed.
///
/// # Example
/// ```
/// use kvconf::{Config, IntOption, StringOption};
///
/// let mut config = Config::new();
/// config.add("listen_port", IntOption::new(8080));
/// config.add("greeting", StringOption::new("hello"));
///
/// config.read("Greeting = good morning\n".as_bytes(), 1)?;
/// assert_eq!(
///     config.get_as::<StringOption>("greeting").unwrap().value(),
///     " good morning",
/// );
/// # Ok::<(), kvconf::Error>(())
/// ```
#[derive(Default)]
pub struct Config {
    nodes: HashMap<String, Box<dyn ConfigNode>>,
}

impl Config {
    /// Create an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under `key`.
    ///
    /// Keys are matched case-insensitively; the lowercase form is what
    /// `write` emits. Registering the same key again silently replaces the
    /// previous node.
    pub fn add<N: ConfigNode + 'static>(&mut self, key: impl Into<String>, node: N) {
        self.nodes.insert(key.into().to_lowercase(), Box::new(node));
    }

    /// Look up the node registered under `key`, case-insensitively
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&dyn ConfigNode> {
        self.nodes.get(&key.to_lowercase()).map(|n| n.as_ref())
    }

    /// Mutable variant of [`get`](Config::get)
    pub fn get_mut(&mut self, key: &str) -> Option<&mut dyn ConfigNode> {
        Some(self.nodes.get_mut(&key.to_lowercase())?.as_mut())
    }

    /// Look up a node and downcast it to its concrete option type
    #[must_use]
    pub fn get_as<N: ConfigNode + 'static>(&self, key: &str) -> Option<&N> {
        self.get(key)?.as_any().downcast_ref()
    }

    /// Mutable variant of [`get_as`](Config::get_as)
    pub fn get_as_mut<N: ConfigNode + 'static>(&mut self, key: &str) -> Option<&mut N> {
        self.get_mut(key)?.as_any_mut().downcast_mut()
    }

    /// Restore every registered node to its default
    pub fn reset(&mut self) {
        for node in self.nodes.values_mut() {
            node.reset();
        }
    }

    /// Number of registered nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item = (&str, &dyn ConfigNode)> {
        self.nodes.iter().map(|(k, n)| (k.as_str(), n.as_ref()))
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("keys", &self.nodes.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{IntOption, StringOption};

    #[test]
    fn lookup_is_case_insensitive() {
        let mut config = Config::new();
        config.add("Key_A", StringOption::new("v"));

        assert!(config.get("key_a").is_some());
        assert!(config.get("KEY_A").is_some());
        assert!(config.get("key_b").is_none());
    }

    #[test]
    fn duplicate_add_replaces() {
        let mut config = Config::new();
        config.add("port", IntOption::new(1));
        config.add("PORT", IntOption::new(2));

        assert_eq!(config.len(), 1);
        assert_eq!(config.get_as::<IntOption>("port").unwrap().value(), 2);
    }

    #[test]
    fn reset_restores_all_defaults() {
        let mut config = Config::new();
        config.add("port", IntOption::new(1));
        config
            .get_mut("port")
            .unwrap()
            .parse("99")
            .unwrap();
        assert!(!config.get("port").unwrap().is_default());

        config.reset();
        let port = config.get_as::<IntOption>("port").unwrap();
        assert!(port.is_default());
        assert_eq!(port.value(), 1);
    }
}
