use itertools::Itertools;

use super::SyntaxFactory;
use crate::generator::ast::{Attribute, AttributeArgument, PropertyDecl};

// Generated units use four-space indentation.
const INDENT: &str = "    ";

/// Emits C# compilation units: `using` directives, a namespace block, and one
/// public class with `{ get; set; }` auto-properties.
pub(crate) struct CsharpFactory {
  namespace: String,
  usings: Vec<String>,
}

/// A class under construction; members are rendered as they are declared.
pub(crate) struct CsharpClass {
  name: String,
  members: Vec<String>,
}

impl CsharpFactory {
  pub(crate) fn new(namespace: impl Into<String>, usings: Vec<String>) -> Self {
    Self {
      namespace: namespace.into(),
      usings,
    }
  }

  fn render_property(property: &PropertyDecl) -> String {
    let indent = INDENT.repeat(2);
    let mut lines = Vec::new();

    if !property.documentation.is_empty() {
      lines.push(format!("{indent}/// <summary>"));
      lines.push(format!("{indent}/// {}", property.documentation.summary()));
      lines.push(format!("{indent}/// </summary>"));
    }

    for attribute in &property.attributes {
      lines.push(format!("{indent}{}", render_attribute(attribute)));
    }

    lines.push(format!(
      "{indent}public {} {} {{ get; set; }}",
      property.type_expr.to_csharp_type(),
      property.name
    ));

    lines.join("\n")
  }
}

fn render_attribute(attribute: &Attribute) -> String {
  match &attribute.argument {
    None => format!("[{}]", attribute.name),
    Some(AttributeArgument::StringLiteral(value)) => {
      format!("[{}({})]", attribute.name, quote_string(value))
    }
    Some(AttributeArgument::Expression(value)) => format!("[{}({value})]", attribute.name),
  }
}

fn quote_string(value: &str) -> String {
  format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

impl SyntaxFactory for CsharpFactory {
  type Class = CsharpClass;

  fn declare_class(&self, name: &str) -> CsharpClass {
    CsharpClass {
      name: name.to_string(),
      members: Vec::new(),
    }
  }

  fn declare_property(&self, class: &mut CsharpClass, property: &PropertyDecl) {
    class.members.push(Self::render_property(property));
  }

  fn emit(&self, class: &CsharpClass) -> String {
    let mut unit = String::new();

    for using in &self.usings {
      unit.push_str("using ");
      unit.push_str(using);
      unit.push_str(";\n");
    }
    if !self.usings.is_empty() {
      unit.push('\n');
    }

    unit.push_str(&format!("namespace {}\n{{\n", self.namespace));
    unit.push_str(&format!("{INDENT}public class {}\n{INDENT}{{\n", class.name));
    unit.push_str(&class.members.iter().join("\n\n"));
    if !class.members.is_empty() {
      unit.push('\n');
    }
    unit.push_str(&format!("{INDENT}}}\n}}\n"));

    unit
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::{
    ast::{ClassDecl, CsharpType, Documentation, TypeExpr},
    codegen::emit_class,
  };

  fn factory() -> CsharpFactory {
    CsharpFactory::new("CodeGen", vec!["Newtonsoft.Json".to_string()])
  }

  #[test]
  fn empty_class_unit() {
    let class = ClassDecl::builder().name("Marker").build();
    let unit = emit_class(&factory(), &class);
    let expected = "\
using Newtonsoft.Json;

namespace CodeGen
{
    public class Marker
    {
    }
}
";
    assert_eq!(unit, expected);
  }

  #[test]
  fn full_class_unit() {
    let class = ClassDecl::builder()
      .name("Order")
      .properties(vec![
        PropertyDecl::builder()
          .name("ClientId")
          .type_expr(TypeExpr::new(CsharpType::Int))
          .attributes(vec![Attribute {
            name: "JsonProperty".to_string(),
            argument: Some(AttributeArgument::StringLiteral("client_id".to_string())),
          }])
          .documentation(Documentation::from_raw("The client identifier."))
          .build(),
        PropertyDecl::builder()
          .name("Note")
          .type_expr(TypeExpr::new(CsharpType::String).with_nullable())
          .build(),
      ])
      .build();

    let unit = emit_class(&factory(), &class);
    let expected = "\
using Newtonsoft.Json;

namespace CodeGen
{
    public class Order
    {
        /// <summary>
        /// The client identifier
        /// </summary>
        [JsonProperty(\"client_id\")]
        public int ClientId { get; set; }

        public string? Note { get; set; }
    }
}
";
    assert_eq!(unit, expected);
  }

  #[test]
  fn no_usings_means_no_blank_header() {
    let factory = CsharpFactory::new("Models", Vec::new());
    let class = ClassDecl::builder().name("Empty").build();
    let unit = emit_class(&factory, &class);
    assert!(unit.starts_with("namespace Models\n{"));
  }

  #[test]
  fn bare_and_expression_attributes() {
    let rendered = render_attribute(&Attribute {
      name: "Obsolete".to_string(),
      argument: None,
    });
    assert_eq!(rendered, "[Obsolete]");

    let rendered = render_attribute(&Attribute {
      name: "Obsolete".to_string(),
      argument: Some(AttributeArgument::Expression("true".to_string())),
    });
    assert_eq!(rendered, "[Obsolete(true)]");
  }

  #[test]
  fn string_literals_are_escaped() {
    let rendered = render_attribute(&Attribute {
      name: "JsonProperty".to_string(),
      argument: Some(AttributeArgument::StringLiteral("quo\"te".to_string())),
    });
    assert_eq!(rendered, "[JsonProperty(\"quo\\\"te\")]");
  }
}
