use dioxus::prelude::*;

#[component]
pub fn NotFound() -> Element {
    rsx! {
        div {
            h1 { "Not Found" }
            p { "You just hit a route that doesn't exist... the sadness." }
        }
    }
}
