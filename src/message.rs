//! Resolution of inbound path categories to fixed announcement texts.

use crate::notification::DispatchError;
use std::fmt;
use std::str::FromStr;

/// The closed set of closing announcements the button can trigger.
///
/// The variants map one-to-one onto the API Gateway proxy paths; anything
/// outside this set is rejected before any dispatch happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ClosingSoon,
    ClosingNow,
    ClosingEarly,
}

impl Category {
    /// The announcement text sent to both sinks for this category.
    pub fn message(&self) -> &'static str {
        match self {
            Category::ClosingSoon => "Hey guys, just to let you know, we'll be closing soon.",
            Category::ClosingNow => "We're closing! Get down here *now* if you want coffee!",
            Category::ClosingEarly => {
                "Hey guys, we'll be closing early today.. maybe 2, or 3 or something. I dunno. \
                 This thing doesn't let me put in a number."
            }
        }
    }
}

impl FromStr for Category {
    type Err = DispatchError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match path {
            "closing/soon" => Ok(Category::ClosingSoon),
            "closing/now" => Ok(Category::ClosingNow),
            "closing/early" => Ok(Category::ClosingEarly),
            other => Err(DispatchError::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = match self {
            Category::ClosingSoon => "closing/soon",
            Category::ClosingNow => "closing/now",
            Category::ClosingEarly => "closing/early",
        };
        write!(f, "{}", path)
    }
}
