use crate::prelude::*;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Get,
    Link,
    Config,
}

impl Action {
    pub fn to_str(self) -> &'static str {
        match self {
            Action::Get => "GET",
            Action::Link => "LNK",
            Action::Config => "CFG",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Prints one line per network or filesystem action, e.g. `GET game/foo.html`.
pub struct Progress<W: Write> {
    out: W,
}

impl<W: Write> Progress<W> {
    pub fn new(out: W) -> Self {
        Progress { out }
    }

    pub fn record(&mut self, action: Action, what: &str) -> Fallible<()> {
        writeln!(self.out, "{} {}", action, what)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
