use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The kind of a user-visible geometric object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Point,
    Line,
    Ray,
    Segment,
    Circle,
}

/// The registry collection an object is stored in.
///
/// Lines, rays and segments share one collection because they share a payload
/// shape; points and circles each have their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Point,
    Line,
    Circle,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 5] = [
        ObjectKind::Point,
        ObjectKind::Line,
        ObjectKind::Ray,
        ObjectKind::Segment,
        ObjectKind::Circle,
    ];

    /// The collection this kind is registered in.
    pub fn category(self) -> Category {
        match self {
            Self::Point => Category::Point,
            Self::Line | Self::Ray | Self::Segment => Category::Line,
            Self::Circle => Category::Circle,
        }
    }

    /// The command-line token for this kind.
    pub fn token(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Ray => "ray",
            Self::Segment => "seg",
            Self::Circle => "circle",
        }
    }
}

impl FromStr for ObjectKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| TypeError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point => write!(f, "point"),
            Self::Line => write!(f, "line"),
            Self::Circle => write!(f, "circle"),
        }
    }
}
