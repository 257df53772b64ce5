use form_serialize::{form_value, Map, Value};

#[test]
fn test_form_value_macro_booleans() {
    assert_eq!(form_value!(true), Value::Bool(true));
    assert_eq!(form_value!(false), Value::Bool(false));
}

#[test]
fn test_form_value_macro_strings() {
    assert_eq!(form_value!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(form_value!(""), Value::String(String::new()));
}

#[test]
fn test_form_value_macro_arrays() {
    assert_eq!(form_value!([]), Value::Array(vec![]));
    assert_eq!(
        form_value!(["bar", "baz", false]),
        Value::Array(vec![
            Value::from("bar"),
            Value::from("baz"),
            Value::Bool(false),
        ])
    );
}

#[test]
fn test_form_value_macro_nested() {
    let value = form_value!({
        "account": {
            "address": {"city": "Qux"},
            "tags": ["a", {"b": "c"}]
        },
    });

    let mut address = Map::new();
    address.insert("city".to_string(), Value::from("Qux"));
    let mut inner = Map::new();
    inner.insert("b".to_string(), Value::from("c"));
    let mut account = Map::new();
    account.insert("address".to_string(), Value::Object(address));
    account.insert(
        "tags".to_string(),
        Value::Array(vec![Value::from("a"), Value::Object(inner)]),
    );
    let mut root = Map::new();
    root.insert("account".to_string(), Value::Object(account));

    assert_eq!(value, Value::Object(root));
}

#[test]
fn test_form_value_macro_expressions() {
    let city = String::from("Qux");
    assert_eq!(form_value!(city), Value::from("Qux"));
}
