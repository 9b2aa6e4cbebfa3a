use super::{array_of, document, formatted, reference, typed};
use crate::{
  generator::{
    ast::NumericKind,
    converter::type_resolver::{TypeResolver, resolve_numeric_format},
  },
  spec::SchemaNode,
};

#[test]
fn test_numeric_format_table() {
  let cases = [
    (Some("int32"), NumericKind::Int32),
    (Some("Int32"), NumericKind::Int32),
    (Some("float"), NumericKind::Single),
    (Some("double"), NumericKind::Double),
    (Some("decimal"), NumericKind::Decimal),
    (Some("long"), NumericKind::Int64),
    (Some("int"), NumericKind::Int64),
    (Some("int64"), NumericKind::Int64),
    (Some("INT64"), NumericKind::Int64),
    // Unrecognized and absent formats fall back to decimal
    (Some("uint8"), NumericKind::Decimal),
    (Some(""), NumericKind::Decimal),
    (None, NumericKind::Decimal),
  ];
  for (format, expected) in cases {
    assert_eq!(resolve_numeric_format(format), expected, "failed for format {format:?}");
  }
}

#[test]
fn test_primitive_resolution() {
  let doc = document([]);
  let resolver = TypeResolver::new(&doc);

  let cases = [
    (formatted("integer", "int32"), "int"),
    (formatted("integer", "int64"), "long"),
    (typed("integer"), "decimal"),
    (formatted("number", "double"), "double"),
    (formatted("number", "float"), "float"),
    (typed("boolean"), "bool"),
    (typed("string"), "string"),
    // Unrecognized types degrade to string
    (typed("file"), "string"),
    (SchemaNode::default(), "string"),
  ];
  for (node, expected) in cases {
    let expr = resolver.resolve_type(&node).unwrap();
    assert_eq!(expr.to_csharp_type(), expected, "failed for node {node:?}");
  }
}

#[test]
fn test_nullable_wraps_every_branch_once() {
  let doc = document([("Customer", typed("object"))]);
  let resolver = TypeResolver::new(&doc);

  let cases = [
    (formatted("integer", "int32"), "int?"),
    // No format: the conservative default, wrapped
    (typed("integer"), "decimal?"),
    (typed("boolean"), "bool?"),
    (reference("Customer"), "Customer?"),
    (array_of(typed("string")), "string[]?"),
    // The historical double wrap on the string fallback is corrected: a
    // nullable string is `string?`, not `string??`.
    (typed("string"), "string?"),
  ];
  for (node, expected) in cases {
    let node = SchemaNode { nullable: true, ..node };
    let expr = resolver.resolve_type(&node).unwrap();
    assert_eq!(expr.to_csharp_type(), expected, "failed for node {node:?}");
  }
}

#[test]
fn test_composite_type_strings_hit_substring_branches() {
  let doc = document([]);
  let resolver = TypeResolver::new(&doc);

  let node = SchemaNode {
    nullable: true,
    ..formatted("integer|null", "int32")
  };
  assert_eq!(resolver.resolve_type(&node).unwrap().to_csharp_type(), "int?");

  // `object|null` is not exactly `object`, so it degrades to string.
  let node = typed("object|null");
  assert_eq!(resolver.resolve_type(&node).unwrap().to_csharp_type(), "string");
}

#[test]
fn test_object_reference_uses_sanitized_class_name() {
  let doc = document([("order_item", typed("object"))]);
  let resolver = TypeResolver::new(&doc);

  let expr = resolver.resolve_type(&reference("order_item")).unwrap();
  assert_eq!(expr.to_csharp_type(), "OrderItem");
}

#[test]
fn test_object_without_reference_is_untyped() {
  let doc = document([]);
  let resolver = TypeResolver::new(&doc);

  let expr = resolver.resolve_type(&typed("object")).unwrap();
  assert_eq!(expr.to_csharp_type(), "object");
}

#[test]
fn test_array_items() {
  let doc = document([("Customer", typed("object"))]);
  let resolver = TypeResolver::new(&doc);

  let cases = [
    // No reference and no type: untyped element
    (array_of(SchemaNode::default()), "object[]"),
    // Missing items degrades the same way
    (typed("array"), "object[]"),
    // Referenced object items resolve to the class name
    (array_of(reference("Customer")), "Customer[]"),
    // Object items without a reference stay untyped
    (array_of(typed("object")), "object[]"),
    // Primitive items carry the schema token through verbatim
    (array_of(typed("string")), "string[]"),
    (array_of(typed("integer")), "integer[]"),
  ];
  for (node, expected) in cases {
    let expr = resolver.resolve_type(&node).unwrap();
    assert_eq!(expr.to_csharp_type(), expected, "failed for node {node:?}");
  }
}

#[test]
fn test_array_items_reference_without_type() {
  let doc = document([("Customer", typed("object"))]);
  let resolver = TypeResolver::new(&doc);

  let items = SchemaNode {
    reference: Some("Customer".to_string()),
    schema_type: None,
    ..Default::default()
  };
  let expr = resolver.resolve_type(&array_of(items)).unwrap();
  assert_eq!(expr.to_csharp_type(), "Customer[]");
}

#[test]
fn test_broken_reference_is_an_error() {
  let doc = document([]);
  let resolver = TypeResolver::new(&doc);

  let error = resolver.resolve_type(&reference("Ghost")).unwrap_err();
  assert_eq!(error.reference, "Ghost");

  let error = resolver.resolve_type(&array_of(reference("Ghost"))).unwrap_err();
  assert_eq!(error.reference, "Ghost");
}

#[test]
fn test_self_reference_resolves() {
  let mut node = typed("object");
  node.properties.insert("parent".to_string(), reference("TreeNode"));
  let doc = document([("TreeNode", node)]);
  let resolver = TypeResolver::new(&doc);

  let expr = resolver.resolve_type(&reference("TreeNode")).unwrap();
  assert_eq!(expr.to_csharp_type(), "TreeNode");
}
