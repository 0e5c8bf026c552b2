use std::io::{self, Write};

use crate::ops::notify::{Cue, Notifier};

/// Which stream the bell is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BellTarget {
    Stdout,
    Stderr,
}

/// Rings the terminal bell for every cue. Deletes ring twice.
#[derive(Debug)]
pub struct TerminalBell {
    target: BellTarget,
}

impl TerminalBell {
    pub fn new(target: BellTarget) -> Self {
        TerminalBell { target }
    }
}

/// Bytes written for a cue
pub fn bell_bytes(cue: Cue) -> &'static [u8] {
    match cue {
        Cue::Added | Cue::Completed => b"\x07",
        Cue::Deleted => b"\x07\x07",
    }
}

impl Notifier for TerminalBell {
    fn cue(&mut self, cue: Cue) {
        let bytes = bell_bytes(cue);
        let result = match self.target {
            BellTarget::Stdout => {
                let mut out = io::stdout();
                out.write_all(bytes).and_then(|_| out.flush())
            }
            BellTarget::Stderr => {
                let mut err = io::stderr();
                err.write_all(bytes).and_then(|_| err.flush())
            }
        };
        if let Err(e) = result {
            tracing::debug!(error = %e, cue = cue.as_str(), "could not ring bell");
        }
    }
}
