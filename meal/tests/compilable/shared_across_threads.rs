use meal::Meal;
use std::thread;

fn main() {
    let meal = Meal::builder().with_dessert("Sundae").build();
    let handle = thread::spawn(move || meal.dessert().map(str::to_owned));
    assert_eq!(handle.join().unwrap().as_deref(), Some("Sundae"));
}
