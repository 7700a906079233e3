use dioxus::prelude::*;

use crate::components::{Bio, Seo};
use crate::content::{ContentIndex, Post};
use crate::utils::{rhythm, slugify};

/// One row of the index: everything the article block needs, with the
/// documented fallbacks already applied.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexEntry {
    pub key: String,
    pub href: Option<String>,
    pub title: String,
    pub date: String,
    pub summary_html: String,
}

/// Map the ordered post records to index rows. Records without a routable
/// path get a key derived from their date or position and render unlinked.
pub fn index_entries(posts: &[Post]) -> Vec<IndexEntry> {
    posts
        .iter()
        .enumerate()
        .map(|(idx, post)| {
            let href = post.route_path();
            let key = href
                .clone()
                .or_else(|| Some(slugify(&post.date)).filter(|key| !key.is_empty()))
                .unwrap_or_else(|| format!("entry-{}", idx));
            IndexEntry {
                key,
                href,
                title: post.display_title(),
                date: post.date.clone(),
                summary_html: post.summary_html(),
            }
        })
        .collect()
}

#[component]
pub fn Home() -> Element {
    let content = use_context::<ContentIndex>();
    let site_title = content.site.title.clone().unwrap_or_default();

    let articles = index_entries(&content.posts).into_iter().map(|entry| {
        let title = match entry.href.clone() {
            Some(href) => rsx!(
                Link { to: href, {entry.title.clone()} }
            ),
            None => rsx!(
                {entry.title.clone()}
            ),
        };
        rsx!(
            article {
                key: "{entry.key}",
                header {
                    h3 {
                        style: format!("margin-bottom:{};", rhythm(0.25)),
                        {title}
                    }
                    small { {entry.date.clone()} }
                }
                section {
                    p { dangerous_inner_html: entry.summary_html.clone() }
                }
            }
        )
    });

    rsx! {
        Seo { title: site_title }
        Bio {}
        {articles}
    }
}
