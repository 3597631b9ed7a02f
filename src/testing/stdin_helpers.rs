use crate::read_interactive_input::StdinHelper;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Test implementation that replays predefined responses, one per prompt.
/// Once the script runs out every read behaves like Ctrl-D.
pub struct ScriptedStdinHelper {
    responses: RefCell<VecDeque<String>>,
}

impl ScriptedStdinHelper {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: RefCell::new(responses.into_iter().map(Into::into).collect()),
        }
    }

    /// Responses not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.responses.borrow().len()
    }
}

impl StdinHelper for ScriptedStdinHelper {
    fn read_line(&self) -> Option<String> {
        self.responses.borrow_mut().pop_front()
    }
}
