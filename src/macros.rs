/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Strings and anything else convertible with `Value::from` are accepted as
/// leaves; `true`/`false` become booleans.
///
/// ```rust
/// use form_serialize::{form_value, Value};
///
/// let value = form_value!({
///     "foo": ["bar", "baz", false],
///     "account": {"city": "Qux"}
/// });
/// assert_eq!(value.get("account").and_then(|a| a.get("city")), Some(&Value::from("Qux")));
/// ```
#[macro_export]
macro_rules! form_value {
    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::form_value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::form_value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($s:expr) => {
        $crate::Value::from($s)
    };
}
