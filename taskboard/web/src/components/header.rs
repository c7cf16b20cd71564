use dioxus::prelude::*;

#[component]
pub fn Header(title: String) -> Element {
    rsx! {
        header { id: "title", class: "text-center py-6",
            h1 { class: "text-3xl font-bold text-gray-800", "{title}" }
        }
    }
}
