//! Canonical identifier synthesis.

/// Convert a display name into a canonical code identifier.
///
/// Pure function of the name; uniqueness is the symbol table's concern, not
/// this one's. Rules:
/// - the first character is upper-cased; a leading digit is kept but prefixed
///   with `_`, and the character after it starts a new word
/// - every other character is lower-cased, except that `_` is dropped and the
///   character following it is upper-cased
/// - a trailing `_` is dropped
///
/// Examples: `max_health` becomes `MaxHealth`, `9lives` becomes `_9Lives`.
pub fn canonical(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    let mut upper_next = true;
    for (index, ch) in name.chars().enumerate() {
        if index == 0 && ch.is_ascii_digit() {
            out.push('_');
            out.push(ch);
            continue;
        }
        if ch == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
