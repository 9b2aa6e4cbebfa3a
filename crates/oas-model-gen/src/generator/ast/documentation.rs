/// Short member documentation derived from a schema description.
///
/// Descriptions are reduced to their first sentence: control characters are
/// stripped, the text is cut before the first `.`, and the result is trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  summary: String,
}

impl Documentation {
  #[must_use]
  pub fn from_raw(input: &str) -> Self {
    let cleaned: String = input.chars().filter(|c| !matches!(c, '\n' | '\r' | '\t')).collect();
    let summary = cleaned.split('.').next().unwrap_or("").trim().to_string();
    Self { summary }
  }

  #[must_use]
  pub fn from_optional(desc: Option<&String>) -> Self {
    desc.map_or_else(Self::default, |d| Self::from_raw(d))
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.summary.is_empty()
  }

  #[must_use]
  pub fn summary(&self) -> &str {
    &self.summary
  }
}

impl From<&str> for Documentation {
  fn from(s: &str) -> Self {
    Self::from_raw(s)
  }
}
