//! Orchestration for the schema-to-class generation pipeline.
//!
//! The orchestrator walks every named schema of a parsed document in
//! declaration order and hands each one to the class converter. The result is
//! the ordered sequence of class declarations a writer turns into source
//! files, together with generation statistics.

use crate::{
  generator::{
    ast::ClassDecl,
    converter::{AttributeSpec, ClassConverter},
    errors::GeneratorError,
    metrics::{GenerationStats, GenerationWarning},
    schema_graph::ReferenceGraph,
  },
  spec::SchemaDocument,
};

/// High-level pipeline over every named schema in a document.
pub struct Orchestrator {
  document: SchemaDocument,
  attributes: Option<AttributeSpec>,
  include_docs: bool,
}

/// Everything one generation run produces.
#[derive(Debug)]
pub struct GeneratedOutput {
  pub classes: Vec<ClassDecl>,
  pub stats: GenerationStats,
}

impl Orchestrator {
  #[must_use]
  pub fn new(document: SchemaDocument, attributes: Option<AttributeSpec>, include_docs: bool) -> Self {
    Self {
      document,
      attributes,
      include_docs,
    }
  }

  /// Generates one class declaration per schema, in document order.
  ///
  /// Fail-fast: the first broken reference aborts the run and no partial
  /// output is returned for the document. A document with no schemas yields
  /// an empty sequence.
  pub fn generate(&self) -> Result<GeneratedOutput, GeneratorError> {
    let mut stats = GenerationStats::default();

    let graph = ReferenceGraph::new(&self.document);
    stats.record_cycles(graph.detect_cycles());

    let converter = ClassConverter::new(&self.document);
    let mut classes = Vec::with_capacity(self.document.len());

    for (schema_name, node) in self.document.schemas() {
      let class = converter.convert_class(schema_name, node, self.attributes.as_ref(), self.include_docs)?;

      if class.name.is_empty() {
        stats.record_warning(GenerationWarning::EmptyClassName {
          schema_name: schema_name.clone(),
        });
      }
      for (field_key, property) in node.properties.keys().zip(&class.properties) {
        if property.name.is_empty() {
          stats.record_warning(GenerationWarning::EmptyPropertyName {
            schema_name: schema_name.clone(),
            field: field_key.clone(),
          });
        }
      }

      stats.record_class(&class);
      classes.push(class);
    }

    Ok(GeneratedOutput { classes, stats })
  }
}
