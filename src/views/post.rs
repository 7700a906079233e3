use dioxus::prelude::*;

use crate::components::Seo;
use crate::content::ContentIndex;
use crate::utils::rhythm;
use crate::views::NotFound;

/// Renders whichever record owns the current slug path, or the 404 block.
#[component]
pub fn PostPage(segments: Vec<String>) -> Element {
    let content = use_context::<ContentIndex>();
    let path = format!("/{}", segments.join("/"));

    match content.find_post(&path) {
        Some(post) => {
            let title = post.display_title();
            rsx! {
                Seo {
                    title: title.clone(),
                    description: post.description.clone().unwrap_or_default(),
                }
                article {
                    header {
                        h1 { style: "margin-top:0;", {title.clone()} }
                        p {
                            style: format!("display:block;margin-bottom:{};", rhythm(1.0)),
                            {post.display_date()}
                        }
                    }
                    section { dangerous_inner_html: post.body().to_string() }
                }
            }
        }
        None => rsx! {
            NotFound {}
        },
    }
}
