use std::sync::LazyLock;

use regex::Regex;

// Compile the static regex only once for sanitization.
static NON_ALPHANUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// Converts an arbitrary schema key into a C# identifier (`PascalCase`).
///
/// # Rules:
/// 1. Empty or all-whitespace input returns an empty string.
/// 2. Every character outside `[A-Za-z0-9]` becomes a single space.
/// 3. The string is lower-cased and split on whitespace; each surviving word
///    is capitalized and the words are joined with no separator.
/// 4. Leading digits are dropped, not escaped (`123abc` -> `Abc`).
/// 5. A lower-case first letter surviving the digit strip is upper-cased.
///
/// Total function: never fails, but the result is empty when the input holds
/// no letters or digits. Consumers decide whether an empty identifier is
/// acceptable.
pub(crate) fn to_pascal_identifier(raw: &str) -> String {
  if raw.trim().is_empty() {
    return String::new();
  }

  let spaced = NON_ALPHANUMERIC_RE.replace_all(raw, " ");
  let lowered = spaced.to_lowercase();

  let mut ident: String = lowered.split_whitespace().map(capitalize_first).collect();

  ident = ident
    .trim_start_matches(|c: char| c.is_ascii_digit() || c.is_whitespace())
    .to_string();

  // A word that led with digits now leads with a lower-case letter.
  if ident.starts_with(|c: char| c.is_ascii_lowercase()) {
    ident = capitalize_first(&ident);
  }

  ident
}

fn capitalize_first(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
  }
}
