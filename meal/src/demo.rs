//! The demonstration shipped with the `meal` binary.
use crate::{Meal, MealError};
use std::io;
use tracing::debug;

/// Build the house combo: cheeseburger, large fries and a coke. No dessert.
pub fn combo() -> Meal {
    Meal::builder()
        .with_burger("Cheeseburger")
        .with_fries("Large fries")
        .with_drink("Coke")
        .build()
}

/// Build the combo and print its summary into `out`.
pub fn serve<W: io::Write + ?Sized>(out: &mut W) -> Result<Meal, MealError> {
    let meal = combo();
    debug!(meal = %meal, "serving");
    meal.write_summary(out)?;
    out.flush()?;
    Ok(meal)
}
