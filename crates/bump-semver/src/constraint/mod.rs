//! Range constraints evaluated against parsed versions

mod constraint;
mod constraint_set;
mod operator;

pub use constraint::Constraint;
pub use constraint_set::ConstraintSet;
pub use operator::Operator;
