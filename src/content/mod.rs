//! Content records for the site. The markdown pipeline runs ahead of the
//! build and lands here as pre-rendered HTML fragments plus frontmatter,
//! embedded as JSON.

use serde::Deserialize;

use crate::error::ContentError;
use crate::utils::{normalize_path, slugify};

const CONTENT_JSON: &str = include_str!("../../content/posts.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub excerpt_html: String,
    #[serde(default)]
    pub body_html: Option<String>,
}

impl Post {
    /// Listing title; a record without a frontmatter title shows its slug.
    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| self.slug.clone())
    }

    /// Routable path for this record. A missing slug derives one from the
    /// title; a record with neither stays unrouted.
    pub fn route_path(&self) -> Option<String> {
        if !self.slug.trim().is_empty() {
            return Some(self.slug.clone());
        }
        let derived = slugify(self.title.as_deref().unwrap_or(""));
        if derived.is_empty() {
            None
        } else {
            Some(format!("/{}/", derived))
        }
    }

    /// Summary paragraph for the index: explicit description, else excerpt.
    pub fn summary_html(&self) -> String {
        self.description
            .clone()
            .filter(|description| !description.is_empty())
            .unwrap_or_else(|| self.excerpt_html.clone())
    }

    /// Full body for the post page, falling back to the excerpt when no body
    /// was rendered.
    pub fn body(&self) -> &str {
        self.body_html
            .as_deref()
            .filter(|body| !body.is_empty())
            .unwrap_or(&self.excerpt_html)
    }

    /// Long-form date for the post page; unparseable frontmatter dates show
    /// verbatim.
    pub fn display_date(&self) -> String {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }
}

/// Everything the views read: site metadata plus the ordered post sequence,
/// newest first as supplied.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContentIndex {
    #[serde(default)]
    pub site: SiteMetadata,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl ContentIndex {
    pub fn find_post(&self, path: &str) -> Option<&Post> {
        self.posts.iter().find(|post| {
            post.route_path()
                .map(|route| normalize_path(&route) == normalize_path(path))
                .unwrap_or(false)
        })
    }
}

pub fn load() -> Result<ContentIndex, ContentError> {
    serde_json::from_str(CONTENT_JSON).map_err(ContentError::from)
}

/// A malformed content file leaves the page usable with an empty index.
pub fn load_or_default() -> ContentIndex {
    load().unwrap_or_else(|err| {
        log::error!("failed to parse embedded content: {}", err);
        ContentIndex::default()
    })
}
