use dioxus::prelude::*;

use crate::content::ContentIndex;
use crate::utils::rhythm;

/// Short author blurb shown above the post list.
#[component]
pub fn Bio() -> Element {
    let site = use_context::<ContentIndex>().site;
    let author = site.author.unwrap_or_default();
    let description = site.description.unwrap_or_default();

    rsx! {
        div {
            class: "bio",
            style: format!("display:flex;margin-bottom:{};", rhythm(2.5)),
            p {
                "Personal blog by "
                strong { {author} }
                ". {description}"
            }
        }
    }
}
