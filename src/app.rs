//! Composition root wiring the store, the input form and the status lists.

use crate::dnd::{DataTransfer, DragResponse, Draggable, DropTarget};
use crate::domain::{BoardConfig, Column, ProjectId, ProjectStatus};
use crate::error::Result;
use crate::store::{generator_for, ProjectStore};
use crate::view::{ProjectForm, ProjectList, Renderer};

pub struct ProjectBoard {
    config: BoardConfig,
    store: ProjectStore,
    form: ProjectForm,
    lists: Vec<ProjectList>,
}

impl ProjectBoard {
    /// Builds a board with one list per configured column.
    ///
    /// `make_renderer` is called once per column, in column order.
    pub fn new<R, F>(config: BoardConfig, mut make_renderer: F) -> Result<Self>
    where
        R: Renderer + 'static,
        F: FnMut(&Column) -> R,
    {
        config.validate()?;

        let mut store = ProjectStore::with_boxed_id_generator(generator_for(&config.ids));
        let lists = config
            .columns
            .iter()
            .map(|column| {
                let renderer = make_renderer(column);
                ProjectList::new(column.clone(), &mut store, renderer)
            })
            .collect();

        tracing::debug!(board = %config.name, columns = config.columns.len(), "board created");
        Ok(Self {
            config,
            store,
            form: ProjectForm::new(),
            lists,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    pub fn lists(&self) -> &[ProjectList] {
        &self.lists
    }

    pub fn list(&self, status: ProjectStatus) -> Option<&ProjectList> {
        self.lists.iter().find(|l| l.status() == status)
    }

    /// Submits the input form against the configured rules
    pub fn submit_form(&mut self) -> Result<ProjectId> {
        self.form.submit(&mut self.store, &self.config.form)
    }

    /// Starts dragging the card of project `id`, if any list shows it
    pub fn drag_start(&self, id: &ProjectId) -> Option<DataTransfer> {
        let card = self
            .lists
            .iter()
            .flat_map(|l| l.cards())
            .find(|c| c.id() == id)?;

        let mut transfer = DataTransfer::new();
        card.on_drag_start(&mut transfer);
        Some(transfer)
    }

    pub fn drag_over(&mut self, status: ProjectStatus, transfer: &DataTransfer) -> DragResponse {
        match self.list_mut(status) {
            Some(list) => list.on_drag_over(transfer),
            None => DragResponse::default(),
        }
    }

    pub fn drag_leave(&mut self, status: ProjectStatus) -> DragResponse {
        match self.list_mut(status) {
            Some(list) => list.on_drag_leave(),
            None => DragResponse::default(),
        }
    }

    pub fn drop_on(&mut self, status: ProjectStatus, transfer: &DataTransfer) -> DragResponse {
        let Some(list) = self.lists.iter_mut().find(|l| l.status() == status) else {
            return DragResponse::default();
        };
        list.on_drop(transfer, &mut self.store)
    }

    fn list_mut(&mut self, status: ProjectStatus) -> Option<&mut ProjectList> {
        self.lists.iter_mut().find(|l| l.status() == status)
    }
}
