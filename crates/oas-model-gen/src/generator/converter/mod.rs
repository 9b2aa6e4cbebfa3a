pub(crate) mod attributes;
pub(crate) mod type_resolver;

#[cfg(test)]
mod tests;

pub use attributes::AttributeSpec;
use type_resolver::{TypeResolver, UnknownReference};

use super::{
  ast::{ClassDecl, Documentation, PropertyDecl},
  errors::GeneratorError,
};
use crate::{
  generator::naming::identifiers::to_pascal_identifier,
  spec::{SchemaDocument, SchemaNode},
};

/// Builds one C# class declaration per schema.
pub(crate) struct ClassConverter<'a> {
  type_resolver: TypeResolver<'a>,
}

impl<'a> ClassConverter<'a> {
  pub(crate) fn new(document: &'a SchemaDocument) -> Self {
    Self {
      type_resolver: TypeResolver::new(document),
    }
  }

  /// Converts a named schema into a class declaration.
  ///
  /// Member order follows the schema's property insertion order, which is
  /// observable in the emitted source. A schema with no properties yields a
  /// class with no members.
  pub(crate) fn convert_class(
    &self,
    name: &str,
    node: &SchemaNode,
    attributes: Option<&AttributeSpec>,
    include_docs: bool,
  ) -> Result<ClassDecl, GeneratorError> {
    if let Some(reference) = node.reference.as_deref() {
      self
        .type_resolver
        .ensure_known(reference)
        .map_err(|error| broken_reference(name, "$ref", &error))?;
    }

    let mut properties = Vec::with_capacity(node.properties.len());

    for (field_key, field_schema) in &node.properties {
      let type_expr = self
        .type_resolver
        .resolve_type(field_schema)
        .map_err(|error| broken_reference(name, field_key, &error))?;

      let documentation = if include_docs {
        Documentation::from_optional(field_schema.description.as_ref())
      } else {
        Documentation::default()
      };

      properties.push(
        PropertyDecl::builder()
          .name(to_pascal_identifier(field_key))
          .type_expr(type_expr)
          .attributes(attributes.map(|spec| spec.for_field(field_key)).unwrap_or_default())
          .documentation(documentation)
          .build(),
      );
    }

    Ok(
      ClassDecl::builder()
        .name(to_pascal_identifier(name))
        .properties(properties)
        .build(),
    )
  }
}

fn broken_reference(schema: &str, field: &str, error: &UnknownReference) -> GeneratorError {
  GeneratorError::MalformedSchemaReference {
    schema: schema.to_string(),
    field: field.to_string(),
    reference: error.reference.clone(),
  }
}
