use meal::{Meal, MealBuilder};

fn order(builder: MealBuilder, hungry: bool) -> MealBuilder {
    if hungry {
        builder.with_burger("Double cheeseburger").with_fries("Large fries")
    }
    else {
        builder.with_drink("Water")
    }
}

fn main() {
    let meal: Meal = order(Meal::builder(), true).with_drink(String::from("Coke")).build();
    assert_eq!(meal.burger(), Some("Double cheeseburger"));
}
