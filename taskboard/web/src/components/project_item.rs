use crate::browser::BrowserTransfer;
use dioxus::prelude::*;
use taskboard_core::{DragState, Draggable, Project, ProjectItem};

/// A single draggable project summary
#[component]
pub fn ProjectItemCard(project: Project) -> Element {
    let mut session = use_context::<Signal<DragState>>();
    let item = ProjectItem::new(project);
    let id = item.id().to_string();
    let title = item.title().to_string();
    let assignees = item.assignees();
    let description = item.description().to_string();

    let start_item = item.clone();
    let handle_drag_start = move |evt: DragEvent| {
        let mut transfer = BrowserTransfer::from_event(&evt);
        start_item.drag_start(&mut transfer);
        session.write().start(start_item.id().clone());
    };

    let handle_drag_end = move |_: DragEvent| {
        item.drag_end();
        // Already idle when the drag ended in a drop.
        session.write().cancel();
    };

    rsx! {
        li {
            id: "{id}",
            class: "bg-gray-50 rounded-lg shadow p-4 cursor-move hover:shadow-lg transition-shadow",
            draggable: "true",
            ondragstart: handle_drag_start,
            ondragend: handle_drag_end,
            h2 { class: "text-lg font-semibold text-gray-900", "{title}" }
            h3 { class: "text-sm text-gray-600 mb-2", "{assignees}" }
            p { class: "text-gray-700", "{description}" }
        }
    }
}
