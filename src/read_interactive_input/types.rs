use reedline::{DefaultPrompt, Reedline, Signal};
use std::io::{BufRead, IsTerminal, Write};

/// Type for reading and processing user input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadValResult {
    pub user_entered_val: Option<String>,
    pub was_interrupted: bool,
}

impl ReadValResult {
    /// Answer to a prompt offering `y`
    #[must_use]
    pub fn is_yes(&self) -> bool {
        !self.was_interrupted && self.user_entered_val.as_deref() == Some("y")
    }
}

/// For dependency injection in tests - PrintFunction type alias
/// Using trait object allows both regular functions and closures that capture environment
pub type PrintFunction<'a> = Box<dyn Fn(&str) + 'a>;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GrammarType {
    Verbiage,
    UserChoice,
    BucketName,
    FileName,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GrammarFragment {
    pub original_val_for_prompt: Option<String>,
    pub shortened_val_for_prompt: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub grammar_type: GrammarType,
    pub display_at_all: bool,
    pub can_shorten: bool,
}

impl Default for GrammarFragment {
    fn default() -> Self {
        GrammarFragment {
            original_val_for_prompt: None,
            shortened_val_for_prompt: None,
            prefix: None,
            suffix: Some(" ".to_string()),
            grammar_type: GrammarType::Verbiage,
            can_shorten: false,
            display_at_all: true,
        }
    }
}

impl GrammarFragment {
    #[must_use]
    pub fn verbiage(text: &str) -> Self {
        GrammarFragment {
            original_val_for_prompt: Some(text.to_string()),
            ..Default::default()
        }
    }

    /// A choice the user can type, rendered quoted
    #[must_use]
    pub fn user_choice(choice: &str) -> Self {
        GrammarFragment {
            original_val_for_prompt: Some(choice.to_string()),
            prefix: Some("'".to_string()),
            suffix: Some("' ".to_string()),
            grammar_type: GrammarType::UserChoice,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn file_name(path: &str) -> Self {
        GrammarFragment {
            original_val_for_prompt: Some(path.to_string()),
            prefix: Some("'".to_string()),
            suffix: Some("' ".to_string()),
            grammar_type: GrammarType::FileName,
            can_shorten: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket_name(name: &str) -> Self {
        GrammarFragment {
            original_val_for_prompt: Some(name.to_string()),
            prefix: Some("'".to_string()),
            suffix: Some("' ".to_string()),
            grammar_type: GrammarType::BucketName,
            can_shorten: true,
            ..Default::default()
        }
    }
}

/// Trait for handling stdin operations, makes testing easier
pub trait StdinHelper {
    /// Read a line of input; `None` on Ctrl-C, Ctrl-D or end of input
    fn read_line(&self) -> Option<String>;
}

/// Default implementation that reads from actual stdin
pub struct DefaultStdinHelper;

impl StdinHelper for DefaultStdinHelper {
    fn read_line(&self) -> Option<String> {
        // flush stdout so prompt for sure displays
        let _ = std::io::stdout().flush();

        // reedline needs raw mode, which piped stdin can't provide
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            return read_piped_line(&mut stdin.lock());
        }

        let mut editor = Reedline::create();

        match editor.read_line(&DefaultPrompt::default()) {
            Ok(Signal::Success(buffer)) => Some(buffer),
            Ok(Signal::CtrlC | Signal::CtrlD) => None,
            Err(err) => {
                eprintln!("Error reading line: {err}");
                None
            }
        }
    }
}

/// One line from a non-interactive reader, `None` at end of input
pub fn read_piped_line<B: BufRead>(reader: &mut B) -> Option<String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(err) => {
            eprintln!("Error reading line: {err}");
            None
        }
    }
}

/// Wrapper type for StdinHelper with static dispatch
pub enum StdinHelperWrapper {
    Default(DefaultStdinHelper),
    Test(crate::testing::stdin_helpers::ScriptedStdinHelper),
}

impl StdinHelperWrapper {
    #[must_use]
    pub fn read_line(&self) -> Option<String> {
        match self {
            StdinHelperWrapper::Default(helper) => helper.read_line(),
            StdinHelperWrapper::Test(helper) => helper.read_line(),
        }
    }
}

impl Default for StdinHelperWrapper {
    fn default() -> Self {
        StdinHelperWrapper::Default(DefaultStdinHelper)
    }
}
