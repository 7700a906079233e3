mod content;

pub use content::ContentError;
