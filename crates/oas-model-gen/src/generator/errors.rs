use thiserror::Error;

/// Fatal generation failures. Everything else the pipeline can hit is
/// recorded as a warning instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
  /// A `$ref` names a schema absent from the document. Aborts the whole run;
  /// no partial output is committed.
  #[error("schema `{schema}`, field `{field}`: $ref points to unknown schema `{reference}`")]
  MalformedSchemaReference {
    schema: String,
    field: String,
    reference: String,
  },
}
