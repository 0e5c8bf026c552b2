use std::cell::RefCell;
use std::rc::Rc;

/// Short audible signal played after a successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Added,
    Completed,
    Deleted,
}

impl Cue {
    pub fn as_str(self) -> &'static str {
        match self {
            Cue::Added => "added",
            Cue::Completed => "completed",
            Cue::Deleted => "deleted",
        }
    }
}

/// Receiver of cues. Implemented outside the store (terminal bell, tests).
pub trait Notifier {
    fn cue(&mut self, cue: Cue);
}

/// Plays nothing
#[derive(Debug, Default)]
pub struct Silent;

impl Notifier for Silent {
    fn cue(&mut self, _cue: Cue) {}
}

/// Records every cue into a shared list; handy for asserting on cues.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub cues: Rc<RefCell<Vec<Cue>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Cue> {
        std::mem::take(&mut *self.cues.borrow_mut())
    }
}

impl Notifier for Recorder {
    fn cue(&mut self, cue: Cue) {
        self.cues.borrow_mut().push(cue);
    }
}
