//! The four parts a meal is made of.
use std::fmt;

/// Names one of the optional fields of a [`Meal`](crate::Meal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Course {
    Burger,
    Fries,
    Drink,
    Dessert,
}

impl Course {
    /// All courses in the order they are served and printed.
    pub const ALL: [Course; 4] = [Course::Burger, Course::Fries, Course::Drink, Course::Dessert];

    /// Human readable name used in meal summaries.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Course::Burger => "Burger",
            Course::Fries => "Fries",
            Course::Drink => "Drink",
            Course::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
