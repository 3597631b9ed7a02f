pub mod format;
mod helpers;
mod types;

pub use self::types::{
    DefaultStdinHelper, GrammarFragment, GrammarType, PrintFunction, ReadValResult, StdinHelper,
    StdinHelperWrapper,
};

pub use self::helpers::{
    default_print, match_user_choice, read_val_from_cmd_line_and_proceed_default,
    read_val_from_cmd_line_and_proceed_with_deps,
};

pub use self::format::{do_prompt_formatting, unroll_grammar_into_string};

pub use crate::testing::stdin_helpers::ScriptedStdinHelper;
