use crate::content::{ContentIndex, SiteMetadata};
use crate::tests::common::mocks::post;
use crate::utils::{normalize_path, slugify};
use crate::views::{index_entries, HeadingVariant};

#[test]
fn embedded_content_parses() {
    let content = crate::content::load().expect("embedded content");
    assert!(!content.posts.is_empty());
    assert!(content.site.title.is_some());
}

#[test]
fn title_falls_back_to_slug() {
    let record = post("/untitled/", "", "2020-01-01", "<p>hi</p>");
    assert_eq!(record.display_title(), "/untitled/");
}

#[test]
fn description_falls_back_to_excerpt() {
    let mut record = post("/a/", "A", "2020-01-01", "<p>short</p>");
    assert_eq!(record.summary_html(), "<p>short</p>");
    record.description = Some("expanded".to_string());
    assert_eq!(record.summary_html(), "expanded");
}

#[test]
fn missing_slug_derives_route_from_title() {
    let record = post("", "Hello World!", "2020-01-01", "<p>hi</p>");
    assert_eq!(record.route_path().as_deref(), Some("/hello-world/"));
}

#[test]
fn missing_slug_and_title_renders_unlinked() {
    let record = post("", "", "2020-01-01", "<p>hi</p>");
    assert!(record.route_path().is_none());

    let entries = index_entries(&[record]);
    assert!(entries[0].href.is_none());
    assert_eq!(entries[0].key, "2020-01-01");
}

#[test]
fn post_lookup_ignores_trailing_slash() {
    let content = ContentIndex {
        site: SiteMetadata::default(),
        posts: vec![post("/a/", "A", "2020-01-01", "<p>hi</p>")],
    };
    assert!(content.find_post("/a").is_some());
    assert!(content.find_post("/a/").is_some());
    assert!(content.find_post("/b/").is_none());
}

#[test]
fn slugify_collapses_punctuation_runs() {
    assert_eq!(slugify("Hello,   World!"), "hello-world");
    assert_eq!(slugify("--Rust & WASM--"), "rust-wasm");
    assert_eq!(slugify("!!!"), "");
}

#[test]
fn normalize_path_keeps_the_root() {
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("/a/"), "/a");
    assert_eq!(normalize_path("/a"), "/a");
}

#[test]
fn display_date_formats_frontmatter_dates() {
    let record = post("/a/", "A", "2020-01-01", "<p>hi</p>");
    assert_eq!(record.display_date(), "January 1, 2020");

    let odd = post("/b/", "B", "yesterday", "<p>hi</p>");
    assert_eq!(odd.display_date(), "yesterday");
}

#[test]
fn index_renders_the_documented_scenario() {
    let content = ContentIndex {
        site: SiteMetadata {
            title: Some("Blog".to_string()),
            ..Default::default()
        },
        posts: vec![post("/a/", "A", "2020-01-01", "<p>hi</p>")],
    };

    assert_eq!(HeadingVariant::select("/", "/"), HeadingVariant::Primary);
    assert_eq!(content.site.title.as_deref(), Some("Blog"));

    let entries = index_entries(&content.posts);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].href.as_deref(), Some("/a/"));
    assert_eq!(entries[0].title, "A");
    assert_eq!(entries[0].date, "2020-01-01");
    assert_eq!(entries[0].summary_html, "<p>hi</p>");
}
