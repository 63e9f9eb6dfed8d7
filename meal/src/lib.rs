//! An immutable [`Meal`] and the fluent [`MealBuilder`] that assembles it.
//!
//! ```
//! use meal::{Course, Meal};
//!
//! let meal = Meal::builder()
//!     .with_burger("Cheeseburger")
//!     .with_fries("Large fries")
//!     .with_drink("Coke")
//!     .build();
//!
//! let served: Vec<_> = meal.courses().map(|(course, _)| course).collect();
//! assert_eq!(served, [Course::Burger, Course::Fries, Course::Drink]);
//! ```
mod builder;
mod course;
pub mod demo;
mod error;
mod meal;

pub use builder::MealBuilder;
pub use course::Course;
pub use error::MealError;
pub use meal::Meal;
