//! Typed option nodes
//!
//! A configuration is made up of many nodes. Each node kind owns its own
//! parse/format rules and tracks whether it still holds its registered
//! default:
//! - `StringOption` - raw text, no validation
//! - `IntOption` - base-10 signed integer
//! - `FloatOption` - IEEE double
//! - `PathListOption` - separator-delimited list of path elements
//! - `UserOption` - numeric uid or symbolic user name

mod float;
mod int;
mod path_list;
mod string;
mod user;

pub use float::FloatOption;
pub use int::IntOption;
pub use path_list::{PathListOption, default_path_list_separator};
pub use string::StringOption;
pub use user::UserOption;

use std::any::Any;

use crate::error::Result;

/// Capability contract shared by every option node kind.
///
/// Implementations keep three pieces of state: the default chosen at
/// registration time, the current value, and a dirty flag set by the first
/// successful [`parse`](ConfigNode::parse) since the last
/// [`reset`](ConfigNode::reset).
pub trait ConfigNode {
    /// Render the current value as text.
    ///
    /// The result must parse back to an equal value with
    /// [`parse`](ConfigNode::parse). The one documented exception is
    /// `PathListOption` when an element itself contains the separator
    /// character.
    fn format(&self) -> String;

    /// Validate `new_value` and assign it, marking the node non-default.
    ///
    /// On failure the node's prior state is left untouched.
    fn parse(&mut self, new_value: &str) -> Result<()>;

    /// True iff no successful parse has occurred since the last reset.
    fn is_default(&self) -> bool;

    /// Restore the registered default and clear the dirty flag.
    fn reset(&mut self);

    /// Downcast support back to the concrete option type.
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
