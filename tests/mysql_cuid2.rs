#![cfg(feature = "mysql")]

use drizzle_cuid2::mysql::{MySqlCuid2, cuid2};
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
    let column: MySqlCuid2 = cuid2("id").default_random().build(&USERS);

    assert_eq!(column.name(), "id");
    assert_eq!(column.data_type(), "string");
    assert_eq!(column.column_type(), "MySqlCuid2");
    assert_eq!(column.sql_type(), "varchar(24)");
    assert!(column.has_default());

    let id = column.default_fn().expect("generator attached")().unwrap();
    assert_eq!(id.chars().count(), 24);
}

#[test]
fn prefixed_values_match_declared_width() {
    let column = cuid2("id").prefix("usr_").default_random().build(&USERS);

    assert_eq!(column.sql_type(), "varchar(28)");

    let id = column.default_fn().unwrap()().unwrap();
    assert!(id.starts_with("usr_"));
    assert_eq!(id.chars().count(), 28);
}

#[test]
fn custom_length_and_prefix() {
    let column = cuid2("id")
        .prefix("post_")
        .length(16)
        .default_random()
        .build(&USERS);

    assert_eq!(column.sql_type(), "varchar(21)");

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
fn sql_type_is_stable() {
    let column = cuid2("id").length(8).build(&USERS);
    let first = column.sql_type();
    assert_eq!(first, "varchar(8)");
    assert_eq!(column.sql_type(), first);
}
