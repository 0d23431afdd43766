pub mod nodes;
pub mod predications;
pub mod values;

pub use self::nodes::{Attribute, AttributeName, InfixOperation, Node, SqlLiteral};
pub use self::predications::Predications;
pub use self::values::Value;
