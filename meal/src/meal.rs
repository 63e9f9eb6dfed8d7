use crate::{Course, MealBuilder, MealError};
use std::{fmt, io};

/// A finished meal.
///
/// Every course is optional. Fields are private and there are no mutators, so a meal never changes once
/// [`MealBuilder::build`] has produced it:
///
/// ```compile_fail
/// use meal::Meal;
///
/// let mut meal = Meal::builder().with_burger("Cheeseburger").build();
/// meal.burger = Some("Veggie burger".to_string());
/// ```
///
/// Reading it back:
///
/// ```
/// use meal::Meal;
///
/// let meal = Meal::builder().with_burger("Cheeseburger").with_drink("Coke").build();
/// assert_eq!(meal.burger(), Some("Cheeseburger"));
/// assert_eq!(meal.drink(), Some("Coke"));
/// assert!(meal.fries().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Meal {
    pub(crate) burger:  Option<String>,
    pub(crate) fries:   Option<String>,
    pub(crate) drink:   Option<String>,
    pub(crate) dessert: Option<String>,
}

impl Meal {
    /// Shortcut for [`MealBuilder::new`].
    #[inline]
    pub fn builder() -> MealBuilder {
        MealBuilder::new()
    }

    #[inline]
    pub fn burger(&self) -> Option<&str> {
        self.burger.as_deref()
    }

    #[inline]
    pub fn fries(&self) -> Option<&str> {
        self.fries.as_deref()
    }

    #[inline]
    pub fn drink(&self) -> Option<&str> {
        self.drink.as_deref()
    }

    #[inline]
    pub fn dessert(&self) -> Option<&str> {
        self.dessert.as_deref()
    }

    /// Value of the given course, `None` if it was never set.
    pub fn course(&self, course: Course) -> Option<&str> {
        match course {
            Course::Burger => self.burger(),
            Course::Fries => self.fries(),
            Course::Drink => self.drink(),
            Course::Dessert => self.dessert(),
        }
    }

    #[inline]
    pub fn has_burger(&self) -> bool {
        self.burger.is_some()
    }

    #[inline]
    pub fn has_fries(&self) -> bool {
        self.fries.is_some()
    }

    #[inline]
    pub fn has_drink(&self) -> bool {
        self.drink.is_some()
    }

    #[inline]
    pub fn has_dessert(&self) -> bool {
        self.dessert.is_some()
    }

    /// Set courses with their values, in serving order.
    pub fn courses(&self) -> impl Iterator<Item = (Course, &str)> + '_ {
        Course::ALL
            .into_iter()
            .filter_map(move |course| self.course(course).map(|value| (course, value)))
    }

    /// `true` if no course has been set.
    pub fn is_empty(&self) -> bool {
        self.courses().next().is_none()
    }

    /// Write one `Label: value` line per set course.
    pub fn write_summary<W: io::Write + ?Sized>(&self, out: &mut W) -> Result<(), MealError> {
        for (course, value) in self.courses() {
            writeln!(out, "{}: {}", course.label(), value)?;
        }
        Ok(())
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (course, value)) in self.courses().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: {}", course.label(), value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let meal = Meal::default();
        assert!(meal.is_empty());
        assert_eq!(meal.courses().count(), 0);
        assert_eq!(meal.to_string(), "");
    }

    #[test]
    fn generic_accessor_matches_named() {
        let meal = Meal {
            burger:  Some("Double".into()),
            fries:   None,
            drink:   Some(String::new()),
            dessert: Some("Sundae".into()),
        };
        assert_eq!(meal.course(Course::Burger), meal.burger());
        assert_eq!(meal.course(Course::Fries), meal.fries());
        assert_eq!(meal.course(Course::Drink), Some(""), "empty string is a set value");
        assert_eq!(meal.course(Course::Dessert), meal.dessert());
        assert!(!meal.has_fries());
        assert!(meal.has_drink());
    }
}
