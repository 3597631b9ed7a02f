use crate::read_interactive_input::format::do_prompt_formatting;
use crate::read_interactive_input::types::{
    GrammarFragment, GrammarType, PrintFunction, ReadValResult, StdinHelperWrapper,
};
use crate::utils::terminal::get_terminal_display_width;

/// Default print function that writes to stdout
pub fn default_print(s: &str) {
    print!("{s}");
}

/// Compatibility wrapper that reads from the real terminal
pub fn read_val_from_cmd_line_and_proceed_default(
    grammars: &mut [GrammarFragment],
    size: Option<usize>,
) -> ReadValResult {
    read_val_from_cmd_line_and_proceed_with_deps(
        grammars,
        get_terminal_display_width(size),
        Box::new(default_print),
        None,
    )
}

/// Resolve what the user typed against the prompt's choices.
///
/// Prompts without any `UserChoice` fragment are free text and return the input as typed,
/// minus the line ending. Otherwise the input, with surrounding whitespace ignored, must equal
/// one of the choices ignoring ASCII case, and the choice itself is returned; anything else
/// is `None`.
#[must_use]
pub fn match_user_choice(grammars: &[GrammarFragment], input: &str) -> Option<String> {
    let input = input.trim_end_matches(['\r', '\n']);
    let mut choices = grammars
        .iter()
        .filter(|g| g.grammar_type == GrammarType::UserChoice)
        .filter_map(|g| g.original_val_for_prompt.as_ref())
        .peekable();

    if choices.peek().is_none() {
        return Some(input.to_string());
    }
    let input = input.trim();
    choices.find(|c| c.eq_ignore_ascii_case(input)).cloned()
}

/// Implementation with dependency injection for printing and stdin.
#[allow(clippy::needless_pass_by_value)] // PrintFunction needs to be owned for trait object
pub fn read_val_from_cmd_line_and_proceed_with_deps(
    grammars: &mut [GrammarFragment],
    term_width: usize,
    print_fn: PrintFunction<'_>,
    stdin_helper: Option<&StdinHelperWrapper>,
) -> ReadValResult {
    let prompt_string = do_prompt_formatting(grammars, term_width);
    print_fn(&prompt_string);

    let default_stdin_wrapper = StdinHelperWrapper::default();
    let stdin_wrapper = stdin_helper.unwrap_or(&default_stdin_wrapper);

    match stdin_wrapper.read_line() {
        Some(input) => ReadValResult {
            user_entered_val: match_user_choice(grammars, &input),
            was_interrupted: false,
        },
        None => ReadValResult {
            user_entered_val: None,
            was_interrupted: true,
        },
    }
}
