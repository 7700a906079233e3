use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ContentError {
    Parse(String),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Parse(msg) => write!(f, "Content Parse Error: {}", msg),
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(error: serde_json::Error) -> Self {
        ContentError::Parse(error.to_string())
    }
}
