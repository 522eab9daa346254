//! String case and shape helpers

/// Uppercase the first character, leave the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character of every space-separated word and lowercase
/// the rest
pub fn to_title_case(text: &str) -> String {
    text.split(' ').map(|word| capitalize_first(&word.to_lowercase())).collect::<Vec<_>>().join(" ")
}

/// Lowercase, collapse every run of non-alphanumeric characters into a single
/// `-` and strip leading/trailing dashes
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use primkit_common::transform::to_slug;
///
/// assert_eq!(to_slug("This Should work!!@"), "this-should-work");
/// assert_eq!(to_slug("hello - world"), "hello-world");
/// # }
/// ```
pub fn to_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Cut `text` to `max_chars` characters and append `...` when it was longer
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Replace the middle of `text` with `mask`, keeping `visible` characters on
/// each side
///
/// Text too short to hide anything is returned unchanged.
pub fn mask_middle(text: &str, visible: usize, mask: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= visible * 2 {
        return text.to_string();
    }

    let hidden = chars.len() - visible * 2;
    chars[..visible]
        .iter()
        .copied()
        .chain(std::iter::repeat(mask).take(hidden))
        .chain(chars[chars.len() - visible..].iter().copied())
        .collect()
}
