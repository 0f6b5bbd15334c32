//! Config serialization

use std::io::Write;

use log::debug;

use crate::config::Config;
use crate::error::Result;

impl Config {
    /// Emit the configuration as `key=value` lines.
    ///
    /// Nodes still at their default are skipped unless `emit_defaults` is
    /// set. Keys are written in their registered (lowercase) form; no
    /// ordering is guaranteed. Output written by this method reads back
    /// into an equivalent configuration with [`read`](Config::read).
    pub fn write<W: Write>(&self, mut out: W, emit_defaults: bool) -> Result<()> {
        let mut emitted = 0usize;
        for (key, node) in self.nodes() {
            if !node.is_default() || emit_defaults {
                writeln!(out, "{}={}", key, node.format())?;
                emitted += 1;
            }
        }
        debug!("wrote {emitted} of {} entries", self.len());
        Ok(())
    }
}
