//! Pure functions for `@name` mention scanning and stripping.
//!
//! A mention token is `@` followed by name characters (alphanumerics and `_`), where the `@` starts
//! the text or follows a non-name character. `/reset@bot` is therefore a command suffix, not a mention.

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Leading name characters of `s`.
fn leading_name(s: &str) -> &str {
    let end = s.find(|c: char| !is_name_char(c)).unwrap_or(s.len());
    &s[..end]
}

/// Returns the lowercased, de-duplicated names of every mention token in `text`, in order of appearance.
pub fn extract_mentions(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut prev: Option<char> = None;
    for (i, c) in text.char_indices() {
        if c == '@' && !prev.is_some_and(is_name_char) {
            let name = leading_name(&text[i + 1..]);
            if !name.is_empty() {
                let name = name.to_lowercase();
                if !found.contains(&name) {
                    found.push(name);
                }
            }
        }
        prev = Some(c);
    }
    found
}

/// Removes every mention token for `username` from `text` and trims the result.
pub fn strip_mention(text: &str, username: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut prev: Option<char> = None;
    while let Some(c) = rest.chars().next() {
        if c == '@' && !prev.is_some_and(is_name_char) {
            let name = leading_name(&rest[1..]);
            if !name.is_empty() && name.eq_ignore_ascii_case(username) {
                prev = name.chars().last();
                rest = &rest[1 + name.len()..];
                continue;
            }
        }
        out.push(c);
        prev = Some(c);
        rest = &rest[c.len_utf8()..];
    }
    out.trim().to_string()
}
