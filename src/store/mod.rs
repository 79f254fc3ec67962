//! The project store: the single mutable source of truth for the board.
//!
//! The store keeps projects in insertion order and fans every completed
//! mutation out to registered listeners. Each listener receives its own
//! owned snapshot, so nothing handed to a listener can reach back into the
//! store.

use crate::domain::{Project, ProjectId, ProjectStatus};

pub mod ids;

pub use ids::{generator_for, IdGenerator, RandomIds, SequentialIds};

/// Callback invoked with a snapshot of every project after a mutation
pub type Listener = Box<dyn FnMut(Vec<Project>)>;

/// Handle returned by [`ProjectStore::add_listener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// Diagnostic result of [`ProjectStore::move_project`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        from: ProjectStatus,
        to: ProjectStatus,
    },
    Unchanged,
    NotFound,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
    ids: Box<dyn IdGenerator>,
}

impl ProjectStore {
    /// Creates an empty store with random ids
    pub fn new() -> Self {
        Self::with_id_generator(RandomIds)
    }

    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self::with_boxed_id_generator(Box::new(ids))
    }

    pub fn with_boxed_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            projects: Vec::new(),
            listeners: Vec::new(),
            ids,
        }
    }

    /// Registers a listener, invoked after every mutation in registration order
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Vec<Project>) + 'static,
    {
        let id = ListenerId(self.listeners.len());
        self.listeners.push(Box::new(listener));
        tracing::debug!(listener = id.0, "listener registered");
        id
    }

    /// Appends a new active project and notifies listeners
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let id = self.fresh_id();
        let project = Project::new(id.clone(), title.into(), description.into(), people);
        tracing::debug!(project_id = %id, title = %project.title, "project added");

        self.projects.push(project);
        self.notify();
        id
    }

    /// Moves a project to `new_status`.
    ///
    /// Unknown ids and moves to the current status are silent no-ops and do
    /// not notify listeners. The returned outcome exists for diagnostics;
    /// callers are free to ignore it.
    pub fn move_project(&mut self, id: &ProjectId, new_status: ProjectStatus) -> MoveOutcome {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == id) else {
            tracing::trace!(project_id = %id, "move ignored: unknown project");
            return MoveOutcome::NotFound;
        };

        let from = project.status;
        if !project.set_status(new_status) {
            tracing::trace!(project_id = %id, status = %new_status, "move skipped: status unchanged");
            return MoveOutcome::Unchanged;
        }

        tracing::debug!(project_id = %id, %from, to = %new_status, "project moved");
        self.notify();
        MoveOutcome::Moved {
            from,
            to: new_status,
        }
    }

    /// All projects in insertion order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Projects with the given status, in insertion order
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.status == status).collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn fresh_id(&mut self) -> ProjectId {
        loop {
            let id = self.ids.next_id();
            if self.get(&id).is_none() {
                return id;
            }
            tracing::debug!(project_id = %id, "generated id already in use, drawing again");
        }
    }

    fn notify(&mut self) {
        tracing::trace!(
            listeners = self.listeners.len(),
            projects = self.projects.len(),
            "notifying listeners"
        );
        for listener in self.listeners.iter_mut() {
            listener(self.projects.clone());
        }
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}
