pub(crate) mod class;
pub(crate) mod documentation;
pub(crate) mod types;

pub(crate) use class::{Attribute, AttributeArgument, ClassDecl, PropertyDecl};
pub(crate) use documentation::Documentation;
pub(crate) use types::{CsharpType, NumericKind, TypeExpr};
