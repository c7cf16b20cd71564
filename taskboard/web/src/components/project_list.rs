use super::ProjectItemCard;
use crate::browser::BrowserTransfer;
use crate::state::SharedStore;
use dioxus::prelude::*;
use taskboard_core::{DragState, Project, ProjectListView, ProjectStatus};
use tracing::debug;

/// One column of the board, showing every project with the view's status.
///
/// The view is owned and kept current by the app, so mounting a list never
/// subscribes to the store. Projects dropped here are moved to its status.
#[component]
pub fn ProjectList(store: SharedStore, view: Signal<ProjectListView>) -> Element {
    let mut session = use_context::<Signal<DragState>>();
    let mut view = view;
    let status = view.peek().status();

    let handle_drag_over = move |evt: DragEvent| {
        let transfer = BrowserTransfer::from_event(&evt);
        if !view.peek().accepts(&transfer) {
            return;
        }
        evt.prevent_default();
        if !view.peek().is_droppable() {
            view.write().drag_over(&transfer);
            session.write().enter(status);
        }
    };

    let handle_drag_leave = move |_: DragEvent| {
        if view.peek().is_droppable() {
            view.write().drag_leave();
            session.write().leave();
        }
    };

    let drop_store = store.clone();
    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        let transfer = BrowserTransfer::from_event(&evt);
        let request = view.write().receive_drop(&transfer);
        if let Some((id, target)) = session.write().complete() {
            debug!(project_id = %id, %target, "Drag session completed");
        }
        if let Some(request) = request {
            let moved = drop_store.apply(&request);
            debug!(project_id = %request.id, %status, moved, "Handled drop");
        }
    };

    let current = view.read();
    let heading = current.heading();
    let list_id = current.list_id();
    let header_class = header_class(status);
    let list_class = list_class(status, current.is_droppable());
    let rows: Vec<(String, Project)> = current
        .items()
        .iter()
        .map(|item| (item.id().to_string(), item.project().clone()))
        .collect();
    drop(current);

    rsx! {
        section {
            id: "{status}-projects",
            class: "bg-white rounded-lg shadow-md",
            ondragover: handle_drag_over,
            ondragleave: handle_drag_leave,
            ondrop: handle_drop,
            header { class: "{header_class}",
                h2 { class: "text-xl font-semibold", "{heading}" }
            }
            ul { id: "{list_id}", class: "{list_class}",
                {rows.into_iter().map(|(key, project)| rsx! {
                    ProjectItemCard { key: "{key}", project: project }
                })}
            }
        }
    }
}

fn header_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "bg-purple-600 text-white rounded-t-lg px-6 py-4",
        ProjectStatus::Finished => "bg-teal-600 text-white rounded-t-lg px-6 py-4",
    }
}

/// Tints the list while a project is dragged over it.
fn list_class(status: ProjectStatus, droppable: bool) -> &'static str {
    match (status, droppable) {
        (_, false) => "p-6 space-y-3 min-h-24 rounded-b-lg",
        (ProjectStatus::Active, true) => "p-6 space-y-3 min-h-24 rounded-b-lg bg-purple-50",
        (ProjectStatus::Finished, true) => "p-6 space-y-3 min-h-24 rounded-b-lg bg-teal-50",
    }
}
