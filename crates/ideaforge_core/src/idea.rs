//! Idea inputs for the prompt wrappers.

use serde::{Deserialize, Serialize};

/// The part of an idea the prompt wrappers read: a title and a description.
///
/// # Examples
///
/// ```
/// use ideaforge_core::IdeaDraft;
///
/// let idea = IdeaDraft::new("Solar kettle", "A kettle that boils water with sunlight");
/// assert_eq!(idea.title(), "Solar kettle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdeaDraft {
    /// Short name of the idea
    title: String,
    /// Longer free-form description
    description: String,
}

impl IdeaDraft {
    /// Creates a new idea draft.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Title of the idea.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description of the idea.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Parses the `"title: description"` shorthand used on the command line.
    ///
    /// Text without a colon becomes a title with an empty description.
    pub fn parse_shorthand(input: &str) -> Self {
        match input.split_once(':') {
            Some((title, description)) => Self::new(title.trim(), description.trim()),
            None => Self::new(input.trim(), ""),
        }
    }
}
