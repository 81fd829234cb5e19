//! Text normalization applied before the pattern analyzer.

/// Replace everything outside `A-Z`, `a-z` and whitespace with a space, then
/// collapse whitespace runs to a single space and trim.
pub fn normalize(text: &str) -> String {
  let replaced: String = text
    .chars()
    .map(|c| {
      if c.is_ascii_alphabetic() || c.is_whitespace() { c } else { ' ' }
    })
    .collect();

  replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
