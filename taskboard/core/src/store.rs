//! The authoritative, observable collection of projects.
use crate::form::NewProject;
use crate::project::{Project, ProjectId, ProjectStatus};
use std::fmt;
use tracing::debug;

/// Callback invoked with a copy of every project after each mutation.
pub type Listener = Box<dyn FnMut(Vec<Project>)>;

/// Owns every project on the board and notifies listeners when they change.
///
/// Projects keep their insertion order. Listeners are called in the order they
/// subscribed, each with its own copy of the post-mutation state, so nothing a
/// listener does to its snapshot can reach the store.
///
/// Listeners must not call back into the store.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    /// Creates an empty store with no listeners
    pub fn new() -> Self {
        ProjectStore::default()
    }

    /// Registers a listener for every future mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Appends a new active project and notifies listeners
    pub fn add_project(&mut self, title: String, description: String, people: u32) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id().clone();
        debug!(project_id = %id, title = project.title(), people, "Adding project");
        self.projects.push(project);
        self.notify();
        id
    }

    /// Appends a project from a validated creation request
    pub fn add(&mut self, project: NewProject) -> ProjectId {
        self.add_project(project.title, project.description, project.people)
    }

    /// Changes the status of the project with `id`.
    ///
    /// Returns `false` without notifying anyone when the project is unknown or
    /// already has `status`.
    pub fn move_project(&mut self, id: &ProjectId, status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| p.id() == id) else {
            debug!(project_id = %id, "Ignoring move of unknown project");
            return false;
        };

        if project.status() == status {
            debug!(project_id = %id, %status, "Project already has requested status");
            return false;
        }

        project.set_status(status);
        debug!(project_id = %id, %status, "Moved project");
        self.notify();
        true
    }

    /// All projects in insertion order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// An owned copy of all projects
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == id)
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

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(self.projects.clone());
        }
    }
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every snapshot a listener receives.
    fn recorder(store: &mut ProjectStore) -> Rc<RefCell<Vec<Vec<Project>>>> {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot));
        calls
    }

    #[test]
    fn can_create_new_store() {
        let store = ProjectStore::new();

        assert!(store.is_empty());
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn can_add_project_and_notify() {
        let mut store = ProjectStore::new();
        let calls = recorder(&mut store);

        let id = store.add_project("Build roof".to_string(), "Construct the roof".to_string(), 3);

        let project = store.get(&id).unwrap();
        assert_eq!(project.status(), ProjectStatus::Active);
        assert_eq!(project.people(), 3);
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0], store.snapshot());
    }

    #[test]
    fn can_add_validated_project() {
        let mut store = ProjectStore::new();

        let id = store.add(NewProject {
            title: "Paint".to_string(),
            description: "Paint the walls".to_string(),
            people: 2,
        });

        assert_eq!(store.get(&id).unwrap().title(), "Paint");
    }

    #[test]
    fn projects_keep_insertion_order_across_moves() {
        let mut store = ProjectStore::new();
        let first = store.add_project("one".to_string(), "first one".to_string(), 1);
        let second = store.add_project("two".to_string(), "second one".to_string(), 1);
        let third = store.add_project("three".to_string(), "third one".to_string(), 1);

        store.move_project(&first, ProjectStatus::Finished);

        let ids: Vec<&ProjectId> = store.projects().iter().map(Project::id).collect();
        assert_eq!(ids, vec![&first, &second, &third]);
    }

    #[test]
    fn can_move_project_and_notify() {
        let mut store = ProjectStore::new();
        let id = store.add_project("Build roof".to_string(), "Construct the roof".to_string(), 3);
        let calls = recorder(&mut store);

        let moved = store.move_project(&id, ProjectStatus::Finished);

        assert!(moved);
        assert_eq!(store.get(&id).unwrap().status(), ProjectStatus::Finished);
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0][0].status(), ProjectStatus::Finished);
    }

    #[test]
    fn moving_to_current_status_does_not_notify() {
        let mut store = ProjectStore::new();
        let id = store.add_project("Build roof".to_string(), "Construct the roof".to_string(), 3);
        let calls = recorder(&mut store);

        let moved = store.move_project(&id, ProjectStatus::Active);

        assert!(!moved);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn moving_unknown_project_changes_nothing() {
        let mut store = ProjectStore::new();
        store.add_project("Build roof".to_string(), "Construct the roof".to_string(), 3);
        let before = store.snapshot();
        let calls = recorder(&mut store);

        let moved = store.move_project(&ProjectId::from("nonexistent"), ProjectStatus::Finished);

        assert!(!moved);
        assert_eq!(store.snapshot(), before);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn listeners_are_called_in_subscription_order() {
        let mut store = ProjectStore::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            store.subscribe(move |_| order.borrow_mut().push(name));
        }

        store.add_project("Build roof".to_string(), "Construct the roof".to_string(), 3);

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn every_listener_sees_the_same_state() {
        let mut store = ProjectStore::new();
        let first = recorder(&mut store);
        let second = recorder(&mut store);

        store.add_project("Build roof".to_string(), "Construct the roof".to_string(), 3);

        assert_eq!(first.borrow()[0], second.borrow()[0]);
    }

    #[test]
    fn mutating_a_snapshot_does_not_touch_the_store() {
        let mut store = ProjectStore::new();
        store.subscribe(|mut snapshot| {
            snapshot.clear();
        });
        let id = store.add_project("Build roof".to_string(), "Construct the roof".to_string(), 3);
        let calls = recorder(&mut store);

        store.move_project(&id, ProjectStatus::Finished);
        calls.borrow_mut()[0][0].set_status(ProjectStatus::Active);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().status(), ProjectStatus::Finished);
    }
}
