use crate::interfaces::ReadInteractiveInputHelper;
use crate::read_interactive_input::{
    GrammarFragment, ReadValResult, StdinHelperWrapper, read_val_from_cmd_line_and_proceed_with_deps,
};
use crate::testing::stdin_helpers::ScriptedStdinHelper;
use std::cell::RefCell;

/// Width used when a test doesn't pick one, so output doesn't depend on the terminal running the tests
pub const DEFAULT_TEST_WIDTH: usize = 120;

/// `ReadInteractiveInputHelper` driven by a script of responses.
///
/// Runs the real prompt formatting and choice matching, and records every prompt it printed
/// so tests can assert on which suspension points were reached.
pub struct ScriptedInputHelper {
    stdin: StdinHelperWrapper,
    prompts: RefCell<Vec<String>>,
    width: usize,
}

impl ScriptedInputHelper {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stdin: StdinHelperWrapper::Test(ScriptedStdinHelper::new(responses)),
            prompts: RefCell::new(Vec::new()),
            width: DEFAULT_TEST_WIDTH,
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Every prompt shown so far, in order
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Scripted responses not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        match &self.stdin {
            StdinHelperWrapper::Test(helper) => helper.remaining(),
            StdinHelperWrapper::Default(_) => 0,
        }
    }
}

impl ReadInteractiveInputHelper for ScriptedInputHelper {
    fn read_val_from_cmd_line_and_proceed(
        &self,
        grammars: &mut [GrammarFragment],
        size: Option<usize>,
    ) -> ReadValResult {
        read_val_from_cmd_line_and_proceed_with_deps(
            grammars,
            size.unwrap_or(self.width),
            Box::new(|s| self.prompts.borrow_mut().push(s.to_string())),
            Some(&self.stdin),
        )
    }
}
