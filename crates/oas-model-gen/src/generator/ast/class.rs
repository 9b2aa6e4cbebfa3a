use super::{documentation::Documentation, types::TypeExpr};

/// One generated C# class declaration, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ClassDecl {
  /// Sanitized class identifier. May be empty when the schema key held no
  /// letters or digits; the emitter decides what to do with it.
  #[builder(into)]
  pub name: String,
  /// Members in schema property insertion order.
  #[builder(default)]
  pub properties: Vec<PropertyDecl>,
}

impl ClassDecl {
  /// Output file name for this class (one file per class).
  #[must_use]
  pub fn file_name(&self) -> String {
    format!("{}.cs", self.name)
  }
}

/// One auto-property of a generated class.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct PropertyDecl {
  #[builder(into)]
  pub name: String,
  pub type_expr: TypeExpr,
  #[builder(default)]
  pub attributes: Vec<Attribute>,
  #[builder(default)]
  pub documentation: Documentation,
}

/// A serialization attribute attached to a generated property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
  pub name: String,
  pub argument: Option<AttributeArgument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeArgument {
  /// Rendered as a quoted C# string literal.
  StringLiteral(String),
  /// Rendered verbatim; the caller supplies the exact C# expression.
  Expression(String),
}
