//! Chooser disambiguation flow.

mod state_machine;

pub use state_machine::{ChooserAction, ChooserEvent, ChooserState, ChooserStateMachine};
