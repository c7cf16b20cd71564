use dioxus::prelude::*;

/// Inline message shown under a form that failed validation
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "bg-red-50 border border-red-200 rounded-lg p-4 text-center",
            role: "alert",
            p { class: "text-red-600", "{message}" }
        }
    }
}
