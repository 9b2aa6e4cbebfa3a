use std::{collections::HashSet, sync::LazyLock};

use crate::generator::ast::{Attribute, AttributeArgument};

/// Attribute names whose missing value is filled with the property's
/// original wire-format key.
static SERIALIZATION_NAME_ATTRIBUTES: LazyLock<HashSet<&str>> =
  LazyLock::new(|| ["JsonProperty", "JsonPropertyName"].into_iter().collect());

/// Caller-supplied attribute configuration applied to every generated
/// property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSpec {
  entries: Vec<AttributeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeEntry {
  name: String,
  value: Option<String>,
}

impl AttributeSpec {
  /// Parses `Name` or `Name=Value` entries, skipping blanks.
  pub fn parse<I, S>(entries: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let entries = entries
      .into_iter()
      .map(|entry| entry.as_ref().trim().to_string())
      .filter(|entry| !entry.is_empty())
      .map(|entry| match entry.split_once('=') {
        Some((name, value)) => AttributeEntry {
          name: name.trim().to_string(),
          value: Some(value.trim().to_string()),
        },
        None => AttributeEntry { name: entry, value: None },
      })
      .collect();
    Self { entries }
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Produces the attribute list for one property.
  ///
  /// The spec itself is never mutated, so the same spec can be reused across
  /// every property of every class. A serialization-name attribute with no
  /// explicit value receives `wire_name` as a string literal; other
  /// value-less attributes stay bare.
  pub(crate) fn for_field(&self, wire_name: &str) -> Vec<Attribute> {
    self
      .entries
      .iter()
      .map(|entry| {
        let argument = match &entry.value {
          Some(value) => Some(AttributeArgument::Expression(value.clone())),
          None if SERIALIZATION_NAME_ATTRIBUTES.contains(entry.name.as_str()) => {
            Some(AttributeArgument::StringLiteral(wire_name.to_string()))
          }
          None => None,
        };
        Attribute {
          name: entry.name.clone(),
          argument,
        }
      })
      .collect()
  }
}
