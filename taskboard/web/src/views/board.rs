use crate::components::{Header, ProjectInput, ProjectList};
use crate::config::BoardConfig;
use crate::state::{ListSignals, SharedStore};
use dioxus::prelude::*;
use taskboard_core::ProjectStatus;

/// The project form above the active and finished lists
#[component]
pub fn Board() -> Element {
    let config = use_context::<BoardConfig>();
    let store = use_context::<SharedStore>();
    let lists = use_context::<ListSignals>();

    rsx! {
        div { class: "min-h-screen bg-gray-50 pb-8",
            Header { title: config.title.clone() }
            main { class: "max-w-6xl mx-auto px-6 space-y-8",
                ProjectInput { store: store.clone(), rules: config.rules.clone() }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    ProjectList {
                        store: store.clone(),
                        view: lists.get(ProjectStatus::Active),
                    }
                    ProjectList {
                        store: store,
                        view: lists.get(ProjectStatus::Finished),
                    }
                }
            }
        }
    }
}
