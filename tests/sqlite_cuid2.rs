#![cfg(feature = "sqlite")]

use drizzle_cuid2::sqlite::{SQLiteCuid2, cuid2};
use drizzle_cuid2::{SQLColumnInfo, SQLTableInfo};

struct Users;
impl SQLTableInfo for Users {
    fn name(&self) -> &str {
        "users"
    }
}
static USERS: Users = Users;

#[test]
fn default_configuration() {
    let column: SQLiteCuid2 = cuid2("id").default_random().build(&USERS);

    assert_eq!(column.name(), "id");
    assert_eq!(column.data_type(), "string");
    assert_eq!(column.column_type(), "SQLiteCuid2");
    assert_eq!(column.sql_type(), "text(24)");
    assert!(column.has_default());

    let id = column.default_fn().expect("generator attached")().unwrap();
    assert_eq!(id.chars().count(), 24);
}

#[test]
fn custom_length_and_prefix() {
    let column = cuid2("id")
        .prefix("post_")
        .length(16)
        .default_random()
        .build(&USERS);

    assert_eq!(column.sql_type(), "text(21)");

    let id = column.default_fn().unwrap()().unwrap();
    assert!(id.starts_with("post_"));
    assert_eq!(id.chars().count(), 21);
}

#[test]
fn no_generator_unless_requested() {
    let column = cuid2("id").build(&USERS);

    assert!(!column.has_default());
    assert!(column.default_fn().is_none());
}

#[test]
fn chaining_order_does_not_matter() {
    let a = cuid2("id").length(8).prefix("x_").build(&USERS);
    let b = cuid2("id").prefix("x_").length(8).build(&USERS);

    assert_eq!(a.sql_type(), b.sql_type());
    assert_eq!(a.sql_type(), "text(10)");
}
