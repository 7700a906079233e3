use dioxus::prelude::*;

/// Document title and description tags for the current page.
#[component]
pub fn Seo(title: String, description: Option<String>) -> Element {
    let description = description.unwrap_or_default();

    rsx! {
        document::Title { "{title}" }
        if !description.is_empty() {
            document::Meta { name: "description", content: description.clone() }
        }
    }
}
