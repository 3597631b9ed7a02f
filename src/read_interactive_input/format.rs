use crate::read_interactive_input::types::{GrammarFragment, GrammarType};

const ELLIPSIS: &str = "...";

/// Build a string to display to the user. Generally use `read_val_from_cmd_line_and_proceed_with_deps` instead.
/// Made public to allow usage in tests.
#[must_use]
pub fn unroll_grammar_into_string(
    grammars: &[GrammarFragment],
    excl_if_not_in_base_prompt: bool,
    use_shortened_val: bool,
) -> String {
    let mut return_result = String::new();
    for grammar in grammars.iter().filter(|g| g.display_at_all) {
        if excl_if_not_in_base_prompt && grammar.can_shorten {
            return_result.push(' ');
            continue;
        }
        if let Some(prefix) = &grammar.prefix {
            return_result.push_str(prefix);
        }

        let value = if use_shortened_val {
            grammar
                .shortened_val_for_prompt
                .as_ref()
                .or(grammar.original_val_for_prompt.as_ref())
        } else {
            grammar.original_val_for_prompt.as_ref()
        };
        if let Some(value) = value {
            return_result.push_str(value);
        }

        if let Some(suffix) = &grammar.suffix {
            return_result.push_str(suffix);
        }
    }
    return_result
}

fn fragment_len(g: &GrammarFragment) -> usize {
    let prefix = g.prefix.as_deref().unwrap_or_default().chars().count();
    let suffix = g.suffix.as_deref().unwrap_or_default().chars().count();
    let value = g
        .original_val_for_prompt
        .as_deref()
        .unwrap_or_default()
        .chars()
        .count();
    prefix + value + suffix
}

/// Calculate the fixed length of non-shortenable grammar fragments
fn calculate_fixed_length(grammars: &[GrammarFragment]) -> usize {
    grammars
        .iter()
        .filter(|g| g.display_at_all && !g.can_shorten)
        .map(fragment_len)
        .sum()
}

/// Collect fragments that can be shortened
fn collect_shortenable_fragments(grammars: &mut [GrammarFragment]) -> Vec<&mut GrammarFragment> {
    grammars
        .iter_mut()
        .filter(|g| g.can_shorten && g.display_at_all)
        .collect()
}

/// Shorten a grammar fragment based on its type
fn shorten_fragment(grammar: &mut GrammarFragment, allowed_len: usize) {
    let Some(orig) = grammar.original_val_for_prompt.as_ref() else {
        return;
    };
    let chars: Vec<char> = orig.chars().collect();

    if chars.len() > allowed_len {
        if grammar.grammar_type == GrammarType::BucketName {
            // Bucket names read best from the front
            let keep: String = chars[..allowed_len].iter().collect();
            grammar.shortened_val_for_prompt = Some(format!("{keep}{ELLIPSIS}"));
        } else {
            // File paths keep the end, that's where the file name is
            let keep: String = chars[chars.len() - allowed_len..].iter().collect();
            grammar.shortened_val_for_prompt = Some(format!("{ELLIPSIS}{keep}"));
        }
    } else {
        grammar.shortened_val_for_prompt = Some(orig.clone());
    }
}

/// Format the prompt to fit within the terminal width
pub fn do_prompt_formatting(grammars: &mut [GrammarFragment], term_width: usize) -> String {
    let initial_prompt = unroll_grammar_into_string(grammars, false, false);

    if initial_prompt.chars().count() > term_width.saturating_sub(1) {
        let fixed_len_grammars = calculate_fixed_length(grammars);

        let mut shortenable_grammars = collect_shortenable_fragments(grammars);
        let n = shortenable_grammars.len();

        if n > 0 {
            // Prefix, suffix and ellipsis of every shortened fragment, plus a little buffer
            let reserved: usize = shortenable_grammars
                .iter()
                .map(|g| {
                    g.prefix.as_deref().unwrap_or_default().len()
                        + g.suffix.as_deref().unwrap_or_default().len()
                        + ELLIPSIS.len()
                })
                .sum::<usize>()
                + 1;
            let remaining = term_width
                .saturating_sub(fixed_len_grammars)
                .saturating_sub(reserved);
            let allowed_len = remaining / n;

            if allowed_len > 0 {
                for grammar in &mut shortenable_grammars {
                    shorten_fragment(grammar, allowed_len);
                }
            }
        }
    }

    // Ensure all display fragments have a shortened value
    for grammar in grammars.iter_mut() {
        if grammar.display_at_all && grammar.shortened_val_for_prompt.is_none() {
            grammar
                .shortened_val_for_prompt
                .clone_from(&grammar.original_val_for_prompt);
        }
    }

    unroll_grammar_into_string(grammars, false, true)
}
