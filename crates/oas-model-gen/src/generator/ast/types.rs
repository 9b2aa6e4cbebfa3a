/// Type expression with wrapper support (array, nullable)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeExpr {
  pub base_type: CsharpType,
  pub is_array: bool,
  pub nullable: bool,
}

impl TypeExpr {
  pub fn new(base_type: impl Into<CsharpType>) -> Self {
    Self {
      base_type: base_type.into(),
      is_array: false,
      nullable: false,
    }
  }

  pub fn with_array(mut self) -> Self {
    self.is_array = true;
    self
  }

  pub fn with_nullable(mut self) -> Self {
    self.nullable = true;
    self
  }

  /// Get the full C# type string, e.g. `int?` or `Order[]`.
  pub fn to_csharp_type(&self) -> String {
    let mut result = self.base_type.to_string();

    if self.is_array {
      result = format!("{result}[]");
    }

    if self.nullable {
      result = format!("{result}?");
    }

    result
  }
}

impl From<CsharpType> for TypeExpr {
  fn from(base_type: CsharpType) -> Self {
    TypeExpr::new(base_type)
  }
}

/// C# keywords and identifiers a resolved schema type can map onto.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CsharpType {
  Int,
  Long,
  Float,
  Double,
  Decimal,
  Bool,
  #[default]
  String,
  Object,
  /// Sanitized name of another generated class.
  Class(String),
  /// Schema-supplied token carried through verbatim.
  Raw(String),
}

impl std::fmt::Display for CsharpType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = match self {
      CsharpType::Int => "int",
      CsharpType::Long => "long",
      CsharpType::Float => "float",
      CsharpType::Double => "double",
      CsharpType::Decimal => "decimal",
      CsharpType::Bool => "bool",
      CsharpType::String => "string",
      CsharpType::Object => "object",
      CsharpType::Class(name) | CsharpType::Raw(name) => name,
    };
    write!(f, "{s}")
  }
}

/// Numeric kinds a schema `format` string can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
  Int32,
  Int64,
  Single,
  Double,
  Decimal,
}

impl From<NumericKind> for CsharpType {
  fn from(kind: NumericKind) -> Self {
    match kind {
      NumericKind::Int32 => CsharpType::Int,
      NumericKind::Int64 => CsharpType::Long,
      NumericKind::Single => CsharpType::Float,
      NumericKind::Double => CsharpType::Double,
      NumericKind::Decimal => CsharpType::Decimal,
    }
  }
}
