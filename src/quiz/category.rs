use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::text::sanitize;

/// Open Trivia DB category identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CategoryId(pub u32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(CategoryId)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
}

pub const BOOKS: CategoryId = CategoryId(10);

pub const CATEGORIES: [Category; 4] = [
    Category {
        id: BOOKS,
        name: "Books",
    },
    Category {
        id: CategoryId(11),
        name: "Film",
    },
    Category {
        id: CategoryId(12),
        name: "Music",
    },
    Category {
        id: CategoryId(15),
        name: "Video Games",
    },
];

impl Category {
    /// Looks up a category by numeric id or by name. Numeric ids outside of the
    /// catalogue are passed through untouched since the question bank knows more
    /// categories than we list.
    pub fn find(query: &str) -> Option<CategoryId> {
        if let Ok(id) = query.parse::<CategoryId>() {
            return Some(id);
        }
        let query = sanitize(query);
        if query.is_empty() {
            return None;
        }
        CATEGORIES
            .iter()
            .find(|c| sanitize(c.name) == query)
            .map(|c| c.id)
    }

    pub fn display_name(id: CategoryId) -> String {
        match CATEGORIES.iter().find(|c| c.id == id) {
            Some(category) => category.name.to_owned(),
            None => format!("Category #{}", id),
        }
    }
}
