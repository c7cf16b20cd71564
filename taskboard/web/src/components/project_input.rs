use super::ErrorMessage;
use crate::browser;
use crate::state::SharedStore;
use dioxus::prelude::*;
use taskboard_core::{FormRules, ProjectDraft};
use tracing::{info, warn};

const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700";
const FIELD_CLASS: &str = "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-purple-600";

/// Form for submitting new projects to the board.
///
/// Invalid input is rejected with an alert and never reaches the store; the
/// fields are cleared after a successful submit.
#[component]
pub fn ProjectInput(store: SharedStore, rules: FormRules) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut people = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let title_max_length = rules.title_max_length;
    let people_min = rules.people_min.max(1);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = ProjectDraft::new(title(), description(), people());

        match draft.validate(&rules) {
            Ok(project) => {
                let id = store.add(project);
                info!(project_id = %id, "Project created");
                title.set(String::new());
                description.set(String::new());
                people.set(String::new());
                error.set(None);
            }
            Err(err) => {
                warn!(%err, "Rejected project submission");
                browser::alert(&format!("Invalid input, please try again! {err}"));
                error.set(Some(err.to_string()));
            }
        }
    };

    rsx! {
        form {
            id: "user-input",
            class: "bg-white rounded-lg shadow-md p-6 max-w-md mx-auto space-y-3",
            onsubmit: handle_submit,
            label { r#for: "title", class: LABEL_CLASS, "Title" }
            input {
                r#type: "text",
                id: "title",
                class: FIELD_CLASS,
                value: "{title}",
                maxlength: "{title_max_length}",
                oninput: move |evt| title.set(evt.value()),
            }

            label { r#for: "description", class: LABEL_CLASS, "Description" }
            textarea {
                id: "description",
                class: FIELD_CLASS,
                rows: "3",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }

            label { r#for: "people", class: LABEL_CLASS, "People" }
            input {
                r#type: "number",
                id: "people",
                class: FIELD_CLASS,
                step: "1",
                min: "{people_min}",
                value: "{people}",
                oninput: move |evt| people.set(evt.value()),
            }

            if let Some(error_msg) = error() {
                ErrorMessage { message: error_msg }
            }

            button {
                r#type: "submit",
                class: "w-full bg-purple-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-purple-700 transition-colors",
                "ADD PROJECT"
            }
        }
    }
}
