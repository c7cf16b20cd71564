//! Headless list and item views.
//!
//! These hold everything a front-end needs to draw the board and to take part
//! in the drag protocol, without knowing how it is drawn.
use crate::drag::{self, DataTransfer, Draggable, MoveRequest};
use crate::project::{Project, ProjectId, ProjectStatus};
use tracing::debug;

/// Summary of one project as shown inside a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        ProjectItem { project }
    }

    pub fn id(&self) -> &ProjectId {
        self.project.id()
    }

    pub fn title(&self) -> &str {
        self.project.title()
    }

    pub fn description(&self) -> &str {
        self.project.description()
    }

    /// "1 person assigned", "3 persons assigned"
    pub fn assignees(&self) -> String {
        match self.project.people() {
            1 => "1 person assigned".to_string(),
            people => format!("{people} persons assigned"),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }
}

impl Draggable for ProjectItem {
    fn drag_start(&self, transfer: &mut impl DataTransfer) {
        drag::write_payload(transfer, self.id());
    }

    fn drag_end(&self) {
        debug!(project_id = %self.id(), "Drag ended");
    }
}

/// One column of the board, showing the projects with a single status.
///
/// The view never owns project data: every [`render`](Self::render) rebuilds
/// its items from the snapshot it is handed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectListView {
    status: ProjectStatus,
    items: Vec<ProjectItem>,
    droppable: bool,
}

impl ProjectListView {
    pub fn new(status: ProjectStatus) -> Self {
        ProjectListView {
            status,
            items: Vec::new(),
            droppable: false,
        }
    }

    /// Replaces the displayed items with the matching projects of `snapshot`
    pub fn render(&mut self, snapshot: Vec<Project>) {
        self.items = snapshot
            .into_iter()
            .filter(|project| project.status() == self.status)
            .map(ProjectItem::new)
            .collect();
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn items(&self) -> &[ProjectItem] {
        &self.items
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_uppercase())
    }

    /// Element id of the rendered list
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    /// Whether the drop affordance is showing
    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// Whether this list can take what is being dragged.
    pub fn accepts(&self, transfer: &impl DataTransfer) -> bool {
        drag::carries_payload(transfer)
    }

    /// Handles the pointer moving over the list.
    ///
    /// Returns `true` when the host has to suppress its default action so that
    /// a drop is allowed.
    pub fn drag_over(&mut self, transfer: &impl DataTransfer) -> bool {
        if !self.accepts(transfer) {
            return false;
        }
        self.droppable = true;
        true
    }

    pub fn drag_leave(&mut self) {
        self.droppable = false;
    }

    /// Handles a drop, returning the move it asks for.
    ///
    /// The target status is always this list's own. Release any borrow of the
    /// view before applying the request, since the store re-renders every list.
    pub fn receive_drop(&mut self, transfer: &impl DataTransfer) -> Option<MoveRequest> {
        self.droppable = false;
        let Some(id) = drag::read_payload(transfer) else {
            debug!(list = %self.status, "Drop without a project id");
            return None;
        };
        Some(MoveRequest {
            id,
            status: self.status,
        })
    }
}
