pub mod board;
pub mod project;
pub mod validation;

pub use board::{BoardConfig, Column, FormRules, IdStrategy};
pub use project::{Project, ProjectId, ProjectStatus};
pub use validation::{validate, Constraints, FieldValue, Validatable};
