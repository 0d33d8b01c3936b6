/// Build a [`Value`](crate::Value) from a JSON-like literal.
///
/// `null`, `true`, `false`, arrays and string-keyed objects are recognised
/// directly; any other expression goes through [`to_value`](crate::to_value).
///
/// # Panics
///
/// Panics if an expression cannot be represented as a `Value`, such as a
/// data-carrying enum variant.
///
/// # Examples
///
/// ```rust
/// use semantic_bool::{is_blank, to_env_bool, value};
///
/// let form = value!({
///     "name": "  ",
///     "subscribe": "yes",
///     "tags": []
/// });
///
/// let form = form.as_object().unwrap();
/// assert!(is_blank(form.get("name").unwrap()).unwrap());
/// assert!(to_env_bool(form.get("subscribe").unwrap()));
/// assert!(is_blank(form.get("tags").unwrap()).unwrap());
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

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
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        match $crate::to_value(&$other) {
            Ok(value) => value,
            Err(err) => panic!("value! cannot represent `{}`: {}", stringify!($other), err),
        }
    };
}
