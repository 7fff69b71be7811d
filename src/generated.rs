//! The asset config written into the fixture in place of the production one.
//!
//! The file is JSON5 read by the web application, but it's written as plain JSON laid out with
//! a space after each `,` and `:` so it reads like a hand-written config:
//!
//! ```text
//! {"base_url": "http://localhost:8000", "border_px": 1.0}
//! ```

use crate::prelude::*;
use serde::Serialize as _;
use serde_json::ser::Formatter;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedConfig {
    pub base_url: String,
    pub border_px: f64,
}

impl GeneratedConfig {
    pub fn render(&self) -> Fallible<String> {
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedFormatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Writes a regular file at `path`, replacing whatever is there.
    pub fn write(&self, path: &Path) -> Fallible<()> {
        let rendered = self.render()?;
        fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

/// serde_json's compact layout plus one space after separators.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}
