use super::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search categories exposed by the AJAX Search API
///
/// Each variant maps to one endpoint path segment under the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Web,
    Local,
    Video,
    Blogs,
    News,
    Books,
    Images,
    Patent,
}

impl Operation {
    /// Every supported operation, in endpoint documentation order
    pub const ALL: [Operation; 8] = [
        Operation::Web,
        Operation::Local,
        Operation::Video,
        Operation::Blogs,
        Operation::News,
        Operation::Books,
        Operation::Images,
        Operation::Patent,
    ];

    /// Path segment used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Web => "web",
            Operation::Local => "local",
            Operation::Video => "video",
            Operation::Blogs => "blogs",
            Operation::News => "news",
            Operation::Books => "books",
            Operation::Images => "images",
            Operation::Patent => "patent",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = SearchError;

    // Exact match only: "Web" is not an operation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| SearchError::InvalidOperation(s.to_string()))
    }
}
