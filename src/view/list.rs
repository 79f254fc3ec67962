use crate::dnd::{Affordance, DataTransfer, DragResponse, DropState, DropTarget, ProjectDropZone};
use crate::domain::{Column, Project, ProjectStatus};
use crate::store::{ListenerId, ProjectStore};
use crate::view::card::ProjectCard;
use std::cell::RefCell;
use std::rc::Rc;

/// Draws the projects of one list
pub trait Renderer {
    fn render(&mut self, projects: &[Project]);
}

impl<F> Renderer for F
where
    F: FnMut(&[Project]),
{
    fn render(&mut self, projects: &[Project]) {
        self(projects)
    }
}

/// One status column of the board
pub struct ProjectList {
    column: Column,
    projects: Rc<RefCell<Vec<Project>>>,
    drop_zone: ProjectDropZone,
    droppable: bool,
    listener: ListenerId,
}

impl ProjectList {
    /// Creates the list and subscribes it to `store`
    pub fn new(column: Column, store: &mut ProjectStore, renderer: impl Renderer + 'static) -> Self {
        let projects = Rc::new(RefCell::new(Vec::new()));
        let status = column.status;
        let listener = {
            let projects = Rc::clone(&projects);
            let mut renderer = renderer;
            store.add_listener(move |snapshot: Vec<Project>| {
                let relevant: Vec<Project> = snapshot
                    .into_iter()
                    .filter(|p| p.status == status)
                    .collect();
                renderer.render(&relevant);
                *projects.borrow_mut() = relevant;
            })
        };

        Self {
            drop_zone: ProjectDropZone::new(status),
            column,
            projects,
            droppable: false,
            listener,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.column.status
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    /// Heading text, e.g. "ACTIVE PROJECTS"
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.column.name.to_uppercase())
    }

    pub fn element_id(&self) -> String {
        format!("{}-projects", self.column.name)
    }

    pub fn list_element_id(&self) -> String {
        format!("{}-projects-list", self.column.name)
    }

    /// Projects from the last notification that belong to this list
    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    pub fn cards(&self) -> Vec<ProjectCard> {
        self.projects
            .borrow()
            .iter()
            .cloned()
            .map(ProjectCard::new)
            .collect()
    }

    /// Whether the "droppable" class is currently applied
    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    pub fn drop_state(&self) -> DropState {
        self.drop_zone.state()
    }

    pub fn drop_zone(&self) -> &ProjectDropZone {
        &self.drop_zone
    }

    fn apply(&mut self, response: DragResponse) -> DragResponse {
        match response.affordance {
            Some(Affordance::Add) => self.droppable = true,
            Some(Affordance::Remove) => self.droppable = false,
            None => {}
        }
        response
    }
}

impl DropTarget for ProjectList {
    fn on_drag_over(&mut self, transfer: &DataTransfer) -> DragResponse {
        let response = self.drop_zone.on_drag_over(transfer);
        self.apply(response)
    }

    fn on_drag_leave(&mut self) -> DragResponse {
        let response = self.drop_zone.on_drag_leave();
        self.apply(response)
    }

    fn on_drop(&mut self, transfer: &DataTransfer, store: &mut ProjectStore) -> DragResponse {
        let response = self.drop_zone.on_drop(transfer, store);
        self.apply(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnd::Draggable;
    use crate::store::SequentialIds;

    fn column(status: ProjectStatus) -> Column {
        Column::new(status.as_str().to_string(), status)
    }

    type Renders = Rc<RefCell<Vec<Vec<String>>>>;

    /// Renderer that records the titles of every render
    fn recording_list(store: &mut ProjectStore, status: ProjectStatus) -> (ProjectList, Renders) {
        let renders: Renders = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&renders);
        let list = ProjectList::new(column(status), store, move |projects: &[Project]| {
            sink.borrow_mut()
                .push(projects.iter().map(|p| p.title.clone()).collect());
        });
        (list, renders)
    }

    #[test]
    fn test_list_labels() {
        let mut store = ProjectStore::new();
        let (list, _) = recording_list(&mut store, ProjectStatus::Active);

        assert_eq!(list.heading(), "ACTIVE PROJECTS");
        assert_eq!(list.element_id(), "active-projects");
        assert_eq!(list.list_element_id(), "active-projects-list");
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn test_lists_filter_by_status_in_store_order() {
        let mut store = ProjectStore::with_id_generator(SequentialIds::new("P"));
        let (active, active_renders) = recording_list(&mut store, ProjectStatus::Active);
        let (finished, finished_renders) = recording_list(&mut store, ProjectStatus::Finished);

        let a = store.add_project("A", "first", 1);
        store.add_project("B", "second", 1);
        let c = store.add_project("C", "third", 1);
        store.move_project(&c, ProjectStatus::Finished);
        store.move_project(&a, ProjectStatus::Finished);

        assert_eq!(active_renders.borrow().len(), 5);
        assert_eq!(active_renders.borrow().last().unwrap(), &vec!["B".to_string()]);
        assert_eq!(
            finished_renders.borrow().last().unwrap(),
            &vec!["A".to_string(), "C".to_string()]
        );

        let titles: Vec<_> = finished.cards().iter().map(|c| c.title().to_string()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(active.projects().len(), 1);
    }

    #[test]
    fn test_drag_affordance_cycle() {
        let mut store = ProjectStore::with_id_generator(SequentialIds::new("P"));
        let (active, _) = recording_list(&mut store, ProjectStatus::Active);
        let (mut finished, _) = recording_list(&mut store, ProjectStatus::Finished);
        store.add_project("Build API", "Backend work", 3);

        let cards = active.cards();
        let card = &cards[0];
        let mut transfer = DataTransfer::new();
        card.on_drag_start(&mut transfer);

        let response = finished.on_drag_over(&transfer);
        assert!(response.accepted);
        assert!(finished.is_droppable());
        assert_eq!(finished.drop_state(), DropState::DragOver);

        finished.on_drag_leave();
        assert!(!finished.is_droppable());
        assert_eq!(finished.drop_state(), DropState::Idle);

        finished.on_drag_over(&transfer);
        finished.on_drop(&transfer, &mut store);
        assert!(!finished.is_droppable());
        assert_eq!(finished.drop_state(), DropState::Idle);

        assert!(active.projects().is_empty());
        assert_eq!(finished.projects()[0].id, *card.id());
    }
}
