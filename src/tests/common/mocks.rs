use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::content::Post;
use crate::utils::{StorageBackend, ThemeStore};

pub const TEST_KEY: &str = "ganes.dev-theme";

/// Store pair sharing one in-memory map; the second store stands in for the
/// page after a reload.
pub fn shared_memory_stores(key: &str) -> (ThemeStore, ThemeStore) {
    let map = Rc::new(RefCell::new(HashMap::new()));
    let first = ThemeStore::with_backend(key, StorageBackend::Memory(map.clone()));
    let second = ThemeStore::with_backend(key, StorageBackend::Memory(map));
    (first, second)
}

/// Backend pre-seeded with a raw string, for exercising unparseable values.
pub fn seeded_store(key: &str, raw: &str) -> ThemeStore {
    let map = Rc::new(RefCell::new(HashMap::new()));
    map.borrow_mut().insert(key.to_string(), raw.to_string());
    ThemeStore::with_backend(key, StorageBackend::Memory(map))
}

pub fn post(slug: &str, title: &str, date: &str, excerpt: &str) -> Post {
    Post {
        slug: slug.to_string(),
        title: Some(title.to_string()).filter(|t| !t.is_empty()),
        date: date.to_string(),
        description: None,
        excerpt_html: excerpt.to_string(),
        body_html: None,
    }
}
