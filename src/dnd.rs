//! Drag-and-drop status transitions.
//!
//! A [`Draggable`] source puts a project id on a [`DataTransfer`] when a drag
//! starts. A [`DropTarget`] bound to one [`ProjectStatus`] accepts gestures
//! carrying a plain-text payload and, on drop, asks the store to move the
//! project to its status. All state changes go through the store.

use crate::domain::{ProjectId, ProjectStatus};
use crate::error::{BoardError, Result};
use crate::store::{MoveOutcome, ProjectStore};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// CSS class applied to a list while a drag hovers over it
pub const DROPPABLE_CLASS: &str = "droppable";

/// Kind tag of a carried payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadKind {
    #[serde(rename = "text/plain")]
    PlainText,
}

impl PayloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayloadKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text/plain" => Ok(Self::PlainText),
            _ => Err(BoardError::UnsupportedPayloadKind(s.to_string())),
        }
    }
}

/// Typed envelope for the data carried by a drag gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub kind: PayloadKind,
    pub value: String,
}

impl DragPayload {
    /// Wraps a project id, rejecting empty ids
    pub fn project(id: &ProjectId) -> Result<Self> {
        Self::parse(PayloadKind::PlainText.as_str(), id.as_str())
    }

    /// Builds a payload from raw transfer data, checking kind and value
    pub fn parse(kind: &str, value: &str) -> Result<Self> {
        let kind = PayloadKind::from_str(kind)?;
        if value.trim().is_empty() {
            return Err(BoardError::EmptyPayload);
        }
        Ok(Self {
            kind,
            value: value.to_string(),
        })
    }

    pub fn project_id(&self) -> ProjectId {
        ProjectId::new(self.value.clone())
    }
}

/// Operations a drag source allows. Advisory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

/// Data carried between a drag source and a drop target
#[derive(Debug, Clone, Default)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub effect_allowed: DragEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `kind`, replacing any earlier value for that kind
    pub fn set_data(&mut self, kind: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == kind) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((kind.to_string(), value.to_string())),
        }
    }

    pub fn set_payload(&mut self, payload: &DragPayload) {
        self.set_data(payload.kind.as_str(), &payload.value);
    }

    /// Kinds present on the transfer, in the order they were set
    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn get_data(&self, kind: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, v)| v.as_str())
    }

    /// Extracts and validates the plain-text payload
    pub fn payload(&self) -> Result<DragPayload> {
        let kind = PayloadKind::PlainText.as_str();
        match self.get_data(kind) {
            Some(value) => DragPayload::parse(kind, value),
            None => Err(BoardError::EmptyPayload),
        }
    }

    /// True when the leading carried kind is `kind`
    pub fn carries(&self, kind: PayloadKind) -> bool {
        self.types().first() == Some(&kind.as_str())
    }
}

/// Visual change a drop target asks its view to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Add,
    Remove,
}

/// What a drop target did with a drag event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragResponse {
    /// Whether default browser handling should be prevented
    pub accepted: bool,
    pub affordance: Option<Affordance>,
}

impl DragResponse {
    fn ignored() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropState {
    #[default]
    Idle,
    DragOver,
}

/// Something that can be picked up and dragged
pub trait Draggable {
    fn on_drag_start(&self, transfer: &mut DataTransfer);
    fn on_drag_end(&self, transfer: &DataTransfer);
}

/// Something a draggable can be dropped on
pub trait DropTarget {
    fn on_drag_over(&mut self, transfer: &DataTransfer) -> DragResponse;
    fn on_drag_leave(&mut self) -> DragResponse;
    fn on_drop(&mut self, transfer: &DataTransfer, store: &mut ProjectStore) -> DragResponse;

    /// Drag-enter behaves the same as drag-over
    fn on_drag_enter(&mut self, transfer: &DataTransfer) -> DragResponse {
        self.on_drag_over(transfer)
    }
}

/// Drop zone of one status column
#[derive(Debug, Clone)]
pub struct ProjectDropZone {
    status: ProjectStatus,
    state: DropState,
    last_outcome: Option<MoveOutcome>,
}

impl ProjectDropZone {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            state: DropState::Idle,
            last_outcome: None,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn state(&self) -> DropState {
        self.state
    }

    /// Outcome of the last drop that carried a usable payload
    pub fn last_outcome(&self) -> Option<&MoveOutcome> {
        self.last_outcome.as_ref()
    }
}

impl DropTarget for ProjectDropZone {
    fn on_drag_over(&mut self, transfer: &DataTransfer) -> DragResponse {
        if !transfer.carries(PayloadKind::PlainText) {
            return DragResponse::ignored();
        }
        self.state = DropState::DragOver;
        DragResponse {
            accepted: true,
            affordance: Some(Affordance::Add),
        }
    }

    fn on_drag_leave(&mut self) -> DragResponse {
        self.state = DropState::Idle;
        DragResponse {
            accepted: false,
            affordance: Some(Affordance::Remove),
        }
    }

    fn on_drop(&mut self, transfer: &DataTransfer, store: &mut ProjectStore) -> DragResponse {
        match transfer.payload() {
            Ok(payload) => {
                let outcome = store.move_project(&payload.project_id(), self.status);
                self.last_outcome = Some(outcome);
            }
            Err(e) => {
                tracing::debug!(error = %e, status = %self.status, "drop ignored");
            }
        }

        self.state = DropState::Idle;
        DragResponse {
            accepted: true,
            affordance: Some(Affordance::Remove),
        }
    }
}
