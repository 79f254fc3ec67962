pub mod card;
pub mod form;
pub mod list;

pub use card::ProjectCard;
pub use form::{ProjectDraft, ProjectForm};
pub use list::{ProjectList, Renderer};
