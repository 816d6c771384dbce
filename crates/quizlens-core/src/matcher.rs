//! Answer matching against a fixed option list.
//!
//! Reconciles a free-text model reply with the options it was shown.
//! Resolution is deterministic: the first rule that produces a match
//! wins, and within a rule the first option in original order wins.
//! The matcher only ever returns one of the options it was given.

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;

/// Collapse whitespace runs to single spaces, trim, lowercase.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Resolve a free-text candidate answer to one of `options`.
///
/// Rules, in order:
/// 1. exact normalized equality;
/// 2. a bare letter (`A`, `b)`) taken as a zero-based option index;
/// 3. substring containment in either direction;
/// 4. the candidate contains an option's first word.
///
/// Returns `None` when no rule applies.
pub fn match_option<'a>(candidate: &str, options: &'a [String]) -> Option<&'a str> {
    let candidate = normalize(candidate);
    if candidate.is_empty() {
        return None;
    }
    let normalized: Vec<String> = options.iter().map(|o| normalize(o)).collect();

    // exact match
    for (i, option) in normalized.iter().enumerate() {
        if candidate == *option {
            return Some(&options[i]);
        }
    }

    // single letter like "a" or "b)"
    if let Some(index) = letter_index(&candidate) {
        if index < options.len() {
            return Some(&options[index]);
        }
    }

    // contains an option as substring, or vice versa
    for (i, option) in normalized.iter().enumerate() {
        if option.is_empty() {
            continue;
        }
        if candidate.contains(option.as_str()) || option.contains(candidate.as_str()) {
            return Some(&options[i]);
        }
    }

    // the candidate mentions an option's first word
    for (i, option) in normalized.iter().enumerate() {
        if let Some(first_word) = option.split(' ').next() {
            if !first_word.is_empty() && candidate.contains(first_word) {
                return Some(&options[i]);
            }
        }
    }

    None
}

/// Zero-based index for a normalized candidate of the form `x` or `x)`
/// where `x` is a single ASCII letter.
fn letter_index(candidate: &str) -> Option<usize> {
    match candidate.as_bytes() {
        &[letter] | &[letter, b')'] if letter.is_ascii_lowercase() => {
            Some((letter - b'a') as usize)
        }
        _ => None,
    }
}
