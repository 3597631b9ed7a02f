pub mod scripted_input;
pub mod stdin_helpers;

pub use scripted_input::ScriptedInputHelper;
pub use stdin_helpers::ScriptedStdinHelper;
