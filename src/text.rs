//! Word wrapping for provider messages shown to users

/// Wrap `text` greedily at `width` characters and keep at most `max_lines`.
///
/// When lines were dropped, the last kept line gets a trailing `"..."`.
/// Words longer than `width` are placed on their own line unbroken.
/// Empty lines are removed from the result.
pub fn wrap_text_multiline(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut wrapped: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if !current.is_empty() && needed > width {
            wrapped.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        wrapped.push(current);
    }

    let truncated = wrapped.len() > max_lines;
    let mut lines: Vec<String> = wrapped.into_iter().take(max_lines).collect();
    if truncated {
        if let Some(last) = lines.last_mut() {
            last.push_str("...");
        }
    }
    lines.retain(|l| !l.is_empty());
    lines
}

/// First wrapped line of a provider message, as shown in error output
pub fn first_line(text: &str, width: usize) -> Option<String> {
    wrap_text_multiline(text, width, 1).into_iter().next()
}
