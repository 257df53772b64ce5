//! Bracket-notation edge cases driven through full forms.

use form_serialize::{
    form_value, from_form, to_string, to_value, Control, Form, Options, SelectOption, VALUES_KEY,
};
use serde::Deserialize;

fn texts(pairs: &[(&str, &str)]) -> Form {
    pairs
        .iter()
        .map(|(name, value)| Control::text(*name, *value))
        .collect()
}

#[test]
fn test_stray_brackets_are_literal_names() {
    let form = texts(&[("a[b", "1"), ("c]d", "2")]);
    assert_eq!(
        to_value(Some(&form), &Options::new()),
        form_value!({"a[b": "1", "c]d": "2"})
    );
    assert_eq!(to_string(Some(&form), &Options::new()), "a%5Bb=1&c%5Dd=2");
}

#[test]
fn test_repeated_plain_name_accumulates() {
    let form = texts(&[("tag", "a"), ("tag", "b"), ("tag", "c")]);
    assert_eq!(
        to_value(Some(&form), &Options::new()),
        form_value!({"tag": ["a", "b", "c"]})
    );
    assert_eq!(to_string(Some(&form), &Options::new()), "tag=a&tag=b&tag=c");
}

#[test]
fn test_repeated_bracket_leaf_accumulates() {
    let form = texts(&[("user[email]", "a@x"), ("user[email]", "b@x")]);
    assert_eq!(
        to_value(Some(&form), &Options::new()),
        form_value!({"user": {"email": ["a@x", "b@x"]}})
    );
}

#[test]
fn test_append_after_highest_index() {
    let form = texts(&[("list[4]", "e"), ("list[]", "f"), ("list[0]", "a")]);
    assert_eq!(
        to_value(Some(&form), &Options::new()),
        form_value!({"list": ["a", "e", "f"]})
    );
}

#[test]
fn test_nested_arrays_of_arrays() {
    let form = texts(&[("grid[0][]", "a"), ("grid[0][]", "b"), ("grid[1][]", "c")]);
    assert_eq!(
        to_value(Some(&form), &Options::new()),
        form_value!({"grid": [["a", "b"], ["c"]]})
    );
}

#[test]
fn test_multiple_bad_root_names_collect_in_values() {
    let form = texts(&[("[][a]", "1"), ("[][b]", "2"), ("[]", "3")]);
    let value = to_value(Some(&form), &Options::new());
    assert_eq!(
        value.get(VALUES_KEY),
        Some(&form_value!([{"a": "1"}, {"b": "2"}, "3"]))
    );
}

#[test]
fn test_multi_select_under_append_name_is_not_double_suffixed() {
    let form = Form::new(vec![Control::select_multiple(
        "user[roles][]",
        vec![SelectOption::new("admin").selected()],
    )]);
    assert_eq!(
        to_value(Some(&form), &Options::new()),
        form_value!({"user": {"roles": ["admin"]}})
    );
}

#[test]
fn test_typed_extraction_of_nested_form() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Address {
        city: String,
        state: String,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Account {
        name: String,
        address: Address,
        tags: Vec<String>,
    }

    let form = texts(&[
        ("account[name]", "Foo Dude"),
        ("account[address][city]", "Qux"),
        ("account[address][state]", "CA"),
        ("account[tags][]", "cow"),
        ("account[tags][]", "milk"),
    ]);

    #[derive(Deserialize)]
    struct Wrapper {
        account: Account,
    }

    let wrapper: Wrapper = from_form(Some(&form), &Options::new()).unwrap();
    assert_eq!(
        wrapper.account,
        Account {
            name: "Foo Dude".to_string(),
            address: Address {
                city: "Qux".to_string(),
                state: "CA".to_string(),
            },
            tags: vec!["cow".to_string(), "milk".to_string()],
        }
    );
}

#[test]
fn test_scalar_then_nested_name_keeps_both_values() {
    let form = texts(&[("a", "1"), ("a[b]", "2")]);
    assert_eq!(
        to_value(Some(&form), &Options::new()),
        form_value!({"a": ["1", {"b": "2"}]})
    );

    let form = texts(&[("a[b]", "2"), ("a", "1")]);
    assert_eq!(
        to_value(Some(&form), &Options::new()),
        form_value!({"a": [{"b": "2"}, "1"]})
    );
}

#[test]
fn test_scalar_then_append_name_keeps_both_values() {
    let form = texts(&[("tags", "x"), ("tags[]", "y")]);
    assert_eq!(
        to_value(Some(&form), &Options::new()),
        form_value!({"tags": ["x", "y"]})
    );

    let form = texts(&[("tags[]", "y"), ("tags", "x")]);
    assert_eq!(
        to_value(Some(&form), &Options::new()),
        form_value!({"tags": ["y", "x"]})
    );
}

#[test]
fn test_append_past_largest_index_is_kept() {
    let form = texts(&[("l[18446744073709551615]", "x"), ("l[]", "y")]);
    let value = to_value(Some(&form), &Options::new());
    let list = value.get("l").expect("l is present");
    assert_eq!(list.get("18446744073709551615"), Some(&form_value!("x")));
    assert_eq!(list.get(VALUES_KEY), Some(&form_value!(["y"])));
}
