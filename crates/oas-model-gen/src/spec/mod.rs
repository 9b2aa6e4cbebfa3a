//! Parsed OpenAPI schema tree consumed by the generator core.
//!
//! The reader flattens the parts of an OpenAPI document the generator cares
//! about into [`SchemaNode`] values: `$ref` pointers become plain schema
//! names, 3.1-style `type` arrays become composite strings (`"integer|null"`)
//! with the `nullable` flag set, and everything else is carried verbatim.
//! Structural problems are collected as [`SpecDiagnostic`] values rather than
//! aborting the parse.

pub(crate) mod loader;

use indexmap::IndexMap;
use serde_json::Value;
use strum::Display;

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// One OpenAPI schema node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
  /// Declared `type`, possibly composite (`"integer|null"`).
  pub schema_type: Option<String>,
  /// Declared `format`, e.g. `int32` or `date-time`.
  pub format: Option<String>,
  pub nullable: bool,
  /// Name of another schema in the same document when this node is a `$ref`.
  pub reference: Option<String>,
  /// Element schema when `schema_type` is `array`.
  pub items: Option<Box<SchemaNode>>,
  /// Field name to child schema, in document order.
  pub properties: IndexMap<String, SchemaNode>,
  pub description: Option<String>,
}

impl SchemaNode {
  pub(crate) fn from_value(value: &Value) -> Self {
    let reference = value
      .get("$ref")
      .and_then(Value::as_str)
      .and_then(|ref_path| ref_path.strip_prefix(SCHEMA_REF_PREFIX))
      .map(String::from);

    let (declared_type, type_set_nullable) = parse_type(value.get("type"));

    // A bare `$ref` node carries no `type`; treat it as an object reference.
    let schema_type = declared_type.or_else(|| reference.as_ref().map(|_| "object".to_string()));

    let nullable = value.get("nullable").and_then(Value::as_bool).unwrap_or(false) || type_set_nullable;

    let items = value.get("items").map(|items| Box::new(Self::from_value(items)));

    let properties = value
      .get("properties")
      .and_then(Value::as_object)
      .map(|props| {
        props
          .iter()
          .map(|(name, prop)| (name.clone(), Self::from_value(prop)))
          .collect()
      })
      .unwrap_or_default();

    Self {
      schema_type,
      format: value.get("format").and_then(Value::as_str).map(String::from),
      nullable,
      reference,
      items,
      properties,
      description: value.get("description").and_then(Value::as_str).map(String::from),
    }
  }
}

/// Joins a `type` keyword into a single string. A 3.1 type array collapses to
/// a `|`-separated composite; a `"null"` entry additionally marks the node
/// nullable.
fn parse_type(value: Option<&Value>) -> (Option<String>, bool) {
  match value {
    Some(Value::String(single)) => (Some(single.clone()), false),
    Some(Value::Array(entries)) => {
      let names: Vec<&str> = entries.iter().filter_map(Value::as_str).collect();
      if names.is_empty() {
        return (None, false);
      }
      let nullable = names.contains(&"null");
      (Some(names.join("|")), nullable)
    }
    _ => (None, false),
  }
}

/// The named schemas of one OpenAPI document, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
  schemas: IndexMap<String, SchemaNode>,
}

impl SchemaDocument {
  #[must_use]
  pub fn new(schemas: IndexMap<String, SchemaNode>) -> Self {
    Self { schemas }
  }

  pub fn schemas(&self) -> impl Iterator<Item = (&String, &SchemaNode)> {
    self.schemas.iter()
  }

  #[must_use]
  pub fn get(&self, name: &str) -> Option<&SchemaNode> {
    self.schemas.get(name)
  }

  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.schemas.contains_key(name)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.schemas.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.schemas.is_empty()
  }
}

/// Non-fatal findings from the reader.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SpecDiagnostic {
  #[strum(to_string = "Document declares no component schemas")]
  NoSchemas,
  #[strum(to_string = "Schema '{schema_name}' is not an object and was skipped")]
  SkippedSchema { schema_name: String },
  #[strum(to_string = "Schema '{schema_name}' uses unsupported composition keyword '{keyword}'")]
  UnsupportedComposition { schema_name: String, keyword: String },
}

impl SpecDiagnostic {
  /// Skipped schemas disrupt generation; the rest are informational.
  #[must_use]
  pub fn is_error(&self) -> bool {
    matches!(self, Self::SkippedSchema { .. })
  }
}

/// A fully read document: version header, schema tree, reader diagnostics.
#[derive(Debug, Clone)]
pub struct ParsedSpec {
  pub version: Option<String>,
  pub document: SchemaDocument,
  pub diagnostics: Vec<SpecDiagnostic>,
}

impl ParsedSpec {
  #[must_use]
  pub fn from_value(root: &Value) -> Self {
    let version = root.get("openapi").and_then(Value::as_str).map(String::from);

    let mut diagnostics = Vec::new();
    let mut schemas = IndexMap::new();

    match root.pointer("/components/schemas").and_then(Value::as_object) {
      None => diagnostics.push(SpecDiagnostic::NoSchemas),
      Some(named) => {
        for (name, value) in named {
          if !value.is_object() {
            diagnostics.push(SpecDiagnostic::SkippedSchema {
              schema_name: name.clone(),
            });
            continue;
          }
          for keyword in ["oneOf", "anyOf", "allOf"] {
            if value.get(keyword).is_some() {
              diagnostics.push(SpecDiagnostic::UnsupportedComposition {
                schema_name: name.clone(),
                keyword: keyword.to_string(),
              });
            }
          }
          schemas.insert(name.clone(), SchemaNode::from_value(value));
        }
      }
    }

    Self {
      version,
      document: SchemaDocument::new(schemas),
      diagnostics,
    }
  }
}
