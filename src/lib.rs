//! # kvconf - typed key=value configuration
//!
//! A small library for parsing and serializing line-oriented `key=value`
//! configuration text into strongly-typed, validated in-memory values.
//!
//! ## Features
//!
//! - **Typed option nodes**: string, integer, float, path-list, and user
//!   values behind one parse/format/default-tracking contract
//! - **Case-insensitive registry**: one [`Config`] per configuration, no
//!   global state
//! - **Precise error attribution**: every read failure carries the 1-based
//!   source line, and unknown keys carry the offending key text
//! - **Default tracking**: `write` can skip entries still at their default,
//!   so emitted files only contain customizations
//! - **Resumable reads**: the caller supplies the first line number, so a
//!   partial re-read reports true file lines
//!
//! ## Quick Start
//!
//! ```
//! use kvconf::{Config, ConfigNode, IntOption, StringOption};
//!
//! let mut config = Config::new();
//! config.add("key_a", StringOption::new("default 1"));
//! config.add("key_b", IntOption::new(2));
//!
//! let text = "\
//! ## application settings
//! key_a = Alternate Value
//! key_b=27
//! ";
//! config.read(text.as_bytes(), 1)?;
//!
//! let key_a = config.get_as::<StringOption>("key_a").unwrap();
//! assert_eq!(key_a.value(), " Alternate Value");
//! assert!(!key_a.is_default());
//! assert_eq!(config.get_as::<IntOption>("key_b").unwrap().value(), 27);
//! # Ok::<(), kvconf::Error>(())
//! ```
//!
//! ## Format
//!
//! One `key=value` pair per line, split on the first `=`. Keys are matched
//! case-insensitively with surrounding whitespace ignored. The value is the
//! raw text right of the `=`; each node kind decides its own trimming, so a
//! [`StringOption`] keeps leading spaces while an [`IntOption`] does not.
//! Lines whose first non-whitespace character is `#` or `;` are comments;
//! those characters are ordinary value text anywhere else on a line.
//!
//! ## User values
//!
//! [`UserOption`] accepts either a numeric id or a symbolic name and
//! resolves it against a [`users::UserDirectory`] - the host passwd
//! database by default, or any injected implementation:
//!
//! ```
//! use std::sync::Arc;
//! use kvconf::{Config, UserOption};
//! use kvconf::users::{StaticUsers, UserIdentity};
//!
//! let directory = Arc::new(StaticUsers::new().with_user(UserIdentity {
//!     uid: 1000,
//!     gid: 1000,
//!     name: "alice".into(),
//!     display_name: "Alice".into(),
//!     home_dir: "/home/alice".into(),
//! }));
//!
//! let mut config = Config::new();
//! config.add("run_as", UserOption::with_directory("", directory));
//! config.read("run_as=alice\n".as_bytes(), 1)?;
//!
//! let run_as = config.get_as::<UserOption>("run_as").unwrap();
//! assert_eq!(run_as.resolve()?.uid, 1000);
//! # Ok::<(), kvconf::Error>(())
//! ```

// Core modules
mod config;
mod error;

// Grouped modules
pub mod node;
pub mod users;

pub use config::Config;
pub use error::{Error, Result};

// Re-exports from node
pub use node::{
    ConfigNode, FloatOption, IntOption, PathListOption, StringOption, UserOption,
    default_path_list_separator,
};

// Re-exports from users
#[cfg(unix)]
pub use users::SystemUsers;
pub use users::{StaticUsers, UserDirectory, UserIdentity};
