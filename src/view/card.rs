use crate::dnd::{DataTransfer, DragEffect, DragPayload, Draggable};
use crate::domain::{Project, ProjectId};

/// Render model of a single project card
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    project: Project,
}

impl ProjectCard {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn id(&self) -> &ProjectId {
        &self.project.id
    }

    /// Element id of the card, the project id itself
    pub fn element_id(&self) -> &str {
        self.project.id.as_str()
    }

    pub fn title(&self) -> &str {
        &self.project.title
    }

    pub fn assigned_text(&self) -> String {
        format!("{} assigned", self.project.persons_text())
    }

    pub fn description(&self) -> &str {
        &self.project.description
    }
}

impl Draggable for ProjectCard {
    fn on_drag_start(&self, transfer: &mut DataTransfer) {
        match DragPayload::project(&self.project.id) {
            Ok(payload) => {
                transfer.set_payload(&payload);
                transfer.effect_allowed = DragEffect::Move;
            }
            Err(e) => {
                tracing::warn!(error = %e, "refusing to start drag without a project id");
            }
        }
    }

    fn on_drag_end(&self, transfer: &DataTransfer) {
        tracing::trace!(
            project_id = %self.project.id,
            effect = ?transfer.effect_allowed,
            "drag ended"
        );
    }
}
