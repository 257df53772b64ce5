//! Serialize a small signup form both ways.
//!
//! Run with: cargo run --example simple

use form_serialize::{to_string, to_value, Control, Form, Options, SelectOption};

fn main() {
    let form = Form::new(vec![
        Control::text("account[name]", "Foo Dude"),
        Control::text("account[email]", "foobar@example.org"),
        Control::checkbox("account[newsletter]", None, true),
        Control::radio("account[plan]", "free", false),
        Control::radio("account[plan]", "pro", true),
        Control::select_multiple(
            "account[roles]",
            vec![
                SelectOption::new("dev").selected(),
                SelectOption::new("ops"),
                SelectOption::new("qa").selected(),
            ],
        ),
        Control::textarea("account[bio]", "line one\nline two"),
        Control::submit("save", "Save"),
    ]);

    // Query string
    let query = to_string(Some(&form), &Options::new());
    println!("Query string:\n{}\n", query);

    // Nested structure
    let nested = to_value(Some(&form), &Options::hash());
    println!("Nested:\n{}\n", nested);

    // Keep empty and disabled controls
    let form = form
        .with(Control::text("account[nickname]", ""))
        .with(Control::text("account[id]", "42").with_disabled(true));
    let options = Options::hash().with_empty(true).with_disabled(true);
    println!("Nested with empty + disabled:\n{}", to_value(Some(&form), &options));
}
