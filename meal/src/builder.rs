use crate::{Course, Meal};
use tracing::trace;

/// Fluent constructor of [`Meal`].
///
/// Every setter takes the builder by value and hands it back, so calls chain. Setting a course twice keeps the
/// last value. Nothing is required and nothing is validated; an empty string is as good as any other.
///
/// ```
/// use meal::MealBuilder;
///
/// let meal = MealBuilder::new()
///     .with_burger("Cheeseburger")
///     .with_fries("Large fries")
///     .with_drink("Coke")
///     .build();
///
/// assert_eq!(meal.fries(), Some("Large fries"));
/// assert_eq!(meal.dessert(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealBuilder {
    burger:  Option<String>,
    fries:   Option<String>,
    drink:   Option<String>,
    dessert: Option<String>,
}

impl MealBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_burger(self, burger: impl Into<String>) -> Self {
        self.with_course(Course::Burger, burger)
    }

    #[inline]
    pub fn with_fries(self, fries: impl Into<String>) -> Self {
        self.with_course(Course::Fries, fries)
    }

    #[inline]
    pub fn with_drink(self, drink: impl Into<String>) -> Self {
        self.with_course(Course::Drink, drink)
    }

    #[inline]
    pub fn with_dessert(self, dessert: impl Into<String>) -> Self {
        self.with_course(Course::Dessert, dessert)
    }

    pub fn with_course(mut self, course: Course, value: impl Into<String>) -> Self {
        *self.slot_mut(course) = Some(value.into());
        self
    }

    /// Drop a previously set course.
    pub fn without_course(mut self, course: Course) -> Self {
        *self.slot_mut(course) = None;
        self
    }

    pub fn is_set(&self, course: Course) -> bool {
        match course {
            Course::Burger => self.burger.is_some(),
            Course::Fries => self.fries.is_some(),
            Course::Drink => self.drink.is_some(),
            Course::Dessert => self.dessert.is_some(),
        }
    }

    /// Snapshot the current values into a new [`Meal`].
    ///
    /// The builder is left intact and can be used again.
    pub fn build(&self) -> Meal {
        let meal = Meal {
            burger:  self.burger.clone(),
            fries:   self.fries.clone(),
            drink:   self.drink.clone(),
            dessert: self.dessert.clone(),
        };
        trace!(courses = meal.courses().count(), "meal built");
        meal
    }

    fn slot_mut(&mut self, course: Course) -> &mut Option<String> {
        match course {
            Course::Burger => &mut self.burger,
            Course::Fries => &mut self.fries,
            Course::Drink => &mut self.drink,
            Course::Dessert => &mut self.dessert,
        }
    }
}
