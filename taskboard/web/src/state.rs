//! The board's single project store, shared between components.
//!
//! Created once when the app mounts and handed to every view that reads or
//! changes projects. The two list views are created and subscribed alongside
//! it, so remounting the board never adds listeners.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use taskboard_core::{
    MoveRequest, NewProject, Project, ProjectId, ProjectListView, ProjectStatus, ProjectStore,
};

/// Cheaply cloneable handle to the board's [`ProjectStore`].
///
/// Two handles are equal when they point at the same store.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Rc<RefCell<ProjectStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        SharedStore::default()
    }

    /// Registers a listener for every future change.
    pub fn subscribe(&self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.inner.borrow_mut().subscribe(listener);
    }

    pub fn add(&self, project: NewProject) -> ProjectId {
        self.inner.borrow_mut().add(project)
    }

    /// Applies a move produced by a drop, returning whether anything changed
    pub fn apply(&self, request: &MoveRequest) -> bool {
        request.apply(&mut self.inner.borrow_mut())
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.inner.borrow().snapshot()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listener_count()
    }
}

impl PartialEq for SharedStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Somewhere a list view lives and can be redrawn from a store snapshot.
pub trait ListHandle: Clone + 'static {
    fn create(view: ProjectListView) -> Self;

    fn render(&mut self, snapshot: Vec<Project>);
}

impl ListHandle for Signal<ProjectListView> {
    fn create(view: ProjectListView) -> Self {
        Signal::new(view)
    }

    fn render(&mut self, snapshot: Vec<Project>) {
        if let Ok(mut view) = self.try_write() {
            view.render(snapshot);
        }
    }
}

impl ListHandle for Rc<RefCell<ProjectListView>> {
    fn create(view: ProjectListView) -> Self {
        Rc::new(RefCell::new(view))
    }

    fn render(&mut self, snapshot: Vec<Project>) {
        self.borrow_mut().render(snapshot);
    }
}

/// The active and finished list views of one board.
#[derive(Clone)]
pub struct BoardLists<H> {
    active: H,
    finished: H,
}

/// The list views the app renders from.
pub type ListSignals = BoardLists<Signal<ProjectListView>>;

impl<H: ListHandle> BoardLists<H> {
    /// Creates both views from the current snapshot and subscribes each to
    /// `store` exactly once. Call once per store.
    pub fn attach(store: &SharedStore) -> Self {
        let snapshot = store.snapshot();
        let lists = BoardLists {
            active: Self::create(ProjectStatus::Active, snapshot.clone()),
            finished: Self::create(ProjectStatus::Finished, snapshot),
        };
        for mut handle in [lists.active.clone(), lists.finished.clone()] {
            store.subscribe(move |snapshot| handle.render(snapshot));
        }
        lists
    }

    fn create(status: ProjectStatus, snapshot: Vec<Project>) -> H {
        let mut view = ProjectListView::new(status);
        view.render(snapshot);
        H::create(view)
    }

    pub fn get(&self, status: ProjectStatus) -> H {
        match status {
            ProjectStatus::Active => self.active.clone(),
            ProjectStatus::Finished => self.finished.clone(),
        }
    }
}
