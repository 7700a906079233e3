mod slug;
mod theme_state;
mod typography;

pub use slug::{normalize_path, slugify};
pub use theme_state::{StorageBackend, ThemeState, ThemeStore};
pub use typography::{rhythm, scale, TypeStyle};
