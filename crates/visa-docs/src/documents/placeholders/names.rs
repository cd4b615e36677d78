/// Splits a full name into `(first, last)`.
///
/// The last whitespace-separated token is the surname and everything before it,
/// joined by single spaces, is the given name. A single token is used for both.
/// Blank input yields two empty strings.
pub fn split_name(full_name: &str) -> (String, String) {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    match tokens.as_slice() {
        [] => (String::new(), String::new()),
        [only] => (only.to_string(), only.to_string()),
        [given @ .., last] => (given.join(" "), last.to_string()),
    }
}
