use dioxus::prelude::*;

use crate::views::{Home, PageShell, PostPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(PageShell)]
    #[route("/")]
    Home,
    #[route("/:..segments")] PostPage {
        segments: Vec<String>,
    },
}
