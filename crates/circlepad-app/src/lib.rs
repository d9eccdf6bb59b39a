//! Circlepad Application
//!
//! Native shell around the core surface: loads configuration, replays
//! scripted input and reports the resulting state.

mod script;
mod shortcuts;

pub use script::{Command, ScriptError, ScriptResult, load_script, run_script};
pub use shortcuts::{Shortcut, ShortcutRegistry};
