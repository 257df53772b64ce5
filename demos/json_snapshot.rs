//! Load a form snapshot from JSON and print its nested output as JSON.
//!
//! Run with: cargo run --example json_snapshot

use form_serialize::{serialize, Form, Options, Serialized};
use std::error::Error;

const SNAPSHOT: &str = r#"{
    "controls": [
        {"name": "user[name]", "type": "text", "value": "Foo Dude"},
        {"name": "user[tags][]", "type": "text", "value": "cow"},
        {"name": "user[tags][]", "type": "text", "value": "milk"},
        {"name": "user[admin]", "type": "checkbox", "checked": true},
        {"name": "user[color]", "type": "select", "options": [
            {"value": "red", "text": "Red"},
            {"value": "blue", "text": "Blue", "selected": true}
        ]},
        {"name": "user[token]", "type": "hidden", "value": "abc", "disabled": true},
        {"name": "go", "type": "submit", "value": "Go"}
    ]
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let form: Form = serde_json::from_str(SNAPSHOT)?;
    println!("Loaded {} controls\n", form.controls.len());

    if let Serialized::Hash(value) = serialize(Some(&form), &Options::hash()) {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }

    if let Serialized::Query(query) = serialize(Some(&form), &Options::new()) {
        println!("\n{}", query);
    }

    Ok(())
}
