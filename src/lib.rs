//! # Project Board Core
//!
//! State store and drag-and-drop protocol for a two-column project board.
//!
//! Projects are added through a validated form, kept in a single store in
//! insertion order, and shown in one list per status. Dragging a card onto
//! another list moves the project to that list's status. Views subscribe to
//! the store and re-render from the snapshots it hands out, without any
//! dependency on a specific UI toolkit.

pub mod app;
pub mod dnd;
pub mod domain;
pub mod error;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use app::ProjectBoard;
pub use dnd::{DataTransfer, DragPayload, DragResponse, DropState, DropTarget, PayloadKind};
pub use domain::{
    board::{BoardConfig, Column, FormRules, IdStrategy},
    project::{Project, ProjectId, ProjectStatus},
    validation::{validate, Validatable},
};
pub use error::{BoardError, Result};
pub use store::{MoveOutcome, ProjectStore};
pub use view::{ProjectCard, ProjectForm, ProjectList, Renderer};
