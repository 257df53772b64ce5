//! Extract a typed struct from a form's nested output.
//!
//! Run with: cargo run --example typed_form

use form_serialize::{from_form, Control, Form, Options};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Roster {
    team: String,
    people: Vec<Person>,
    #[serde(default)]
    archived: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let form = Form::new(vec![
        Control::text("team", "Platform"),
        Control::text("people[1][name]", "Bob Smith"),
        Control::text("people[1][age]", "35"),
        Control::text("people[0][name]", "Alice Johnson"),
        Control::text("people[0][age]", "29"),
        Control::checkbox("archived", Some("on"), false),
    ]);

    let roster: Roster = from_form(Some(&form), &Options::new())?;
    println!("{:#?}", roster);

    assert_eq!(roster.people[0].name, "Alice Johnson");
    assert_eq!(roster.people[1].age, 35);
    assert!(!roster.archived);
    println!("✓ Typed extraction successful");

    // A bad number surfaces as an error instead of a panic
    let bad = form
        .with(Control::text("people[2][name]", "Eve"))
        .with(Control::text("people[2][age]", "old"));
    match from_form::<Roster, _>(Some(&bad), &Options::new()) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("✓ Rejected: {}", e),
    }

    Ok(())
}
