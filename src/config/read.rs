//! Line-oriented config reading

use std::io::BufRead;

use log::{debug, trace};

use crate::config::Config;
use crate::error::{Error, Result};

impl Config {
    /// Read `key=value` lines from `reader`, updating registered nodes in
    /// place.
    ///
    /// Per line: leading whitespace is ignored; empty lines and lines whose
    /// first character is `#` or `;` are skipped; everything else must
    /// contain an `=`. The key (left of the first `=`) is right-trimmed and
    /// matched case-insensitively; the raw value (right of it) is handed to
    /// the node unmodified, so each node kind decides its own trimming.
    /// `#` and `;` are only comment markers in the first column - they are
    /// ordinary value text anywhere else.
    ///
    /// The first error aborts the whole call: a line without `=` or a node
    /// parse failure becomes [`Error::Parse`] at that line, an unregistered
    /// key becomes [`Error::UnknownKey`], and reader failures propagate as
    /// [`Error::Io`]. Nodes parsed before the failing line keep their new
    /// values, which callers can use with `first_line_number` to resume a
    /// partial read at the true file line.
    pub fn read<R: BufRead>(&mut self, mut reader: R, first_line_number: usize) -> Result<()> {
        let mut line_number = first_line_number;
        let mut raw = String::new();

        loop {
            raw.clear();
            if reader.read_line(&mut raw)? == 0 {
                break;
            }
            let current = line_number;
            line_number += 1;

            // Strip the terminator but keep any other trailing whitespace:
            // it belongs to the value side.
            if raw.ends_with('\n') {
                raw.pop();
                if raw.ends_with('\r') {
                    raw.pop();
                }
            }

            let line = raw.trim_start();
            if line.is_empty() {
                trace!("line {current}: blank, skipped");
                continue;
            }
            if line.starts_with('#') || line.starts_with(';') {
                trace!("line {current}: comment, skipped");
                continue;
            }

            let Some(eq) = line.find('=') else {
                return Err(Error::MissingEquals.at_line(current));
            };
            let key = line[..eq].trim_end().to_lowercase();
            let raw_value = &line[eq + 1..];

            let Some(node) = self.get_mut(&key) else {
                return Err(Error::UnknownKey { line: current, key });
            };
            node.parse(raw_value).map_err(|e| e.at_line(current))?;
            debug!("line {current}: parsed {key}");
        }
        Ok(())
    }
}
