mod bio;
mod seo;
mod toggle;

pub use bio::Bio;
pub use seo::Seo;
pub use toggle::{icon_for, IconPair, ThemeToggle, MOON_ICON, SUN_ICON};
