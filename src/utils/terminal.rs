use terminal_size::Width;

/// Width of the attached terminal, or `specify_size` when given. Falls back to 80 columns.
#[must_use]
pub fn get_terminal_display_width(specify_size: Option<usize>) -> usize {
    if let Some(size) = specify_size {
        return size;
    }
    let size = terminal_size::terminal_size();
    if let Some((Width(w), _)) = size {
        w as usize
    } else {
        80
    }
}
