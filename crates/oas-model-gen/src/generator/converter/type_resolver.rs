use crate::{
  generator::{
    ast::{CsharpType, NumericKind, TypeExpr},
    naming::identifiers::to_pascal_identifier,
  },
  spec::{SchemaDocument, SchemaNode},
};

/// Raised when a `$ref` names a schema absent from the document. The caller
/// attaches the schema/field context before surfacing it.
#[derive(Debug, Clone, thiserror::Error)]
#[error("$ref points to unknown schema `{reference}`")]
pub(crate) struct UnknownReference {
  pub(crate) reference: String,
}

/// Canonical numeric format table, matched case-insensitively.
///
/// Unrecognized and absent formats resolve to `decimal`.
pub(crate) fn resolve_numeric_format(format: Option<&str>) -> NumericKind {
  let Some(format) = format else {
    return NumericKind::Decimal;
  };

  match format.trim().to_ascii_lowercase().as_str() {
    "int32" => NumericKind::Int32,
    "float" => NumericKind::Single,
    "double" => NumericKind::Double,
    "decimal" => NumericKind::Decimal,
    "long" | "int" | "int64" => NumericKind::Int64,
    _ => NumericKind::Decimal,
  }
}

/// Resolves schema nodes into C# type expressions (`TypeExpr`).
///
/// Only the existence of `$ref` targets is checked against the document;
/// cyclic and self-referential schemas need no special treatment because the
/// emitted types are C# reference types.
pub(crate) struct TypeResolver<'a> {
  document: &'a SchemaDocument,
}

impl<'a> TypeResolver<'a> {
  pub(crate) fn new(document: &'a SchemaDocument) -> Self {
    Self { document }
  }

  /// Resolves one schema node to a C# type expression.
  ///
  /// Branches are tried in order, first match wins, and the winning branch is
  /// wrapped in `?` when the node is nullable:
  /// 1. `type` contains `integer` or `number` -> numeric kind from `format`.
  /// 2. `type` contains `boolean` -> `bool`.
  /// 3. `type` is exactly `object` -> referenced class name, or `object`.
  /// 4. `type` is exactly `array` -> element type from `items`.
  /// 5. Everything else (including `string`) -> `string`.
  ///
  /// Composite type strings (`"integer|null"`) match the substring branches
  /// but not the exact-match ones.
  pub(crate) fn resolve_type(&self, node: &SchemaNode) -> Result<TypeExpr, UnknownReference> {
    let type_expr = self.resolve_base_type(node)?;
    Ok(if node.nullable { type_expr.with_nullable() } else { type_expr })
  }

  fn resolve_base_type(&self, node: &SchemaNode) -> Result<TypeExpr, UnknownReference> {
    let schema_type = node.schema_type.as_deref().unwrap_or_default();

    if schema_type.contains("integer") || schema_type.contains("number") {
      return Ok(TypeExpr::new(resolve_numeric_format(node.format.as_deref())));
    }

    if schema_type.contains("boolean") {
      return Ok(TypeExpr::new(CsharpType::Bool));
    }

    if schema_type == "object" {
      return match node.reference {
        Some(ref reference) => Ok(TypeExpr::new(self.class_reference(reference)?)),
        None => Ok(TypeExpr::new(CsharpType::Object)),
      };
    }

    if schema_type == "array" {
      return self.resolve_array(node);
    }

    // String and anything unrecognized degrade to `string`.
    Ok(TypeExpr::new(CsharpType::String))
  }

  /// Element resolution for array nodes. An `items` schema with neither a
  /// reference nor a type degrades to an untyped `object` element, as does a
  /// missing `items` altogether.
  fn resolve_array(&self, node: &SchemaNode) -> Result<TypeExpr, UnknownReference> {
    let Some(items) = node.items.as_deref() else {
      return Ok(TypeExpr::new(CsharpType::Object).with_array());
    };

    let element = match (items.reference.as_deref(), items.schema_type.as_deref()) {
      (None, None) => CsharpType::Object,
      (Some(reference), Some("object")) => self.class_reference(reference)?,
      (None, Some("object")) => CsharpType::Object,
      (Some(reference), None) => self.class_reference(reference)?,
      (_, Some(token)) => CsharpType::Raw(token.to_string()),
    };

    Ok(TypeExpr::new(element).with_array())
  }

  /// Checks that `reference` names a schema in the document.
  pub(crate) fn ensure_known(&self, reference: &str) -> Result<(), UnknownReference> {
    if self.document.contains(reference) {
      Ok(())
    } else {
      Err(UnknownReference {
        reference: reference.to_string(),
      })
    }
  }

  /// Referenced class names are sanitized the same way class names are, so a
  /// property's type always matches the generated class it points at.
  fn class_reference(&self, reference: &str) -> Result<CsharpType, UnknownReference> {
    self.ensure_known(reference)?;
    Ok(CsharpType::Class(to_pascal_identifier(reference)))
  }
}
