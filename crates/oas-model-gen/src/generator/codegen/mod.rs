//! Source emission for generated class declarations.
//!
//! The generator core only produces [`ClassDecl`] values; turning them into
//! text is a capability an emission backend provides through
//! [`SyntaxFactory`].

pub(crate) mod csharp;

pub(crate) use csharp::CsharpFactory;

use crate::generator::ast::{ClassDecl, PropertyDecl};

/// Capability interface over a target-language syntax backend.
pub(crate) trait SyntaxFactory {
  type Class;

  /// Starts a class declaration.
  fn declare_class(&self, name: &str) -> Self::Class;

  /// Appends one property to a class under construction.
  fn declare_property(&self, class: &mut Self::Class, property: &PropertyDecl);

  /// Serializes the finished class into one compilation unit.
  fn emit(&self, class: &Self::Class) -> String;
}

/// Runs a full declaration through a syntax factory.
pub(crate) fn emit_class<F: SyntaxFactory>(factory: &F, declaration: &ClassDecl) -> String {
  let mut class = factory.declare_class(&declaration.name);
  for property in &declaration.properties {
    factory.declare_property(&mut class, property);
  }
  factory.emit(&class)
}
