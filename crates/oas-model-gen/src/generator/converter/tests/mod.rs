mod type_resolver;

use indexmap::IndexMap;

use crate::spec::{SchemaDocument, SchemaNode};

/// Builds a node with just a declared type.
pub(super) fn typed(schema_type: &str) -> SchemaNode {
  SchemaNode {
    schema_type: Some(schema_type.to_string()),
    ..Default::default()
  }
}

/// Builds a node with a declared type and format.
pub(super) fn formatted(schema_type: &str, format: &str) -> SchemaNode {
  SchemaNode {
    format: Some(format.to_string()),
    ..typed(schema_type)
  }
}

/// Builds an object node referencing another named schema.
pub(super) fn reference(target: &str) -> SchemaNode {
  SchemaNode {
    reference: Some(target.to_string()),
    ..typed("object")
  }
}

/// Builds an array node over the given element schema.
pub(super) fn array_of(items: SchemaNode) -> SchemaNode {
  SchemaNode {
    items: Some(Box::new(items)),
    ..typed("array")
  }
}

/// Builds a document from `(name, node)` pairs, preserving order.
pub(super) fn document<const N: usize>(schemas: [(&str, SchemaNode); N]) -> SchemaDocument {
  let map: IndexMap<String, SchemaNode> = schemas
    .into_iter()
    .map(|(name, node)| (name.to_string(), node))
    .collect();
  SchemaDocument::new(map)
}
