//! Nested assignment of bracket-path values.
//!
//! [`Tree`] folds `(name, value)` pairs into the nested [`Value`] produced by
//! hash-mode serialization. Containers are created on demand along each
//! [`Path`]; colliding names degrade deterministically instead of failing:
//!
//! - A terminal slot that already holds a value becomes an array of the old
//!   and new values (checkboxes sharing a name accumulate this way).
//! - A scalar standing where a container is needed is kept: the slot becomes an
//!   array of the scalar and the new container, or the scalar and the pushed
//!   value for `[]`.
//! - Numeric keys index arrays. Arrays are sparse while building: explicit
//!   indices are authoritative, `[]` takes the slot after the highest one in
//!   use, and holes left unfilled are dropped from the final array.
//! - A non-numeric key on an array turns it into an object keyed by index.
//! - `[]` applied to an object appends to that object's [`VALUES_KEY`] array,
//!   which is where names like `[][foo]` end up. An array with no index left
//!   after its highest one is turned into an object and appends there too.
//!
//! ```rust
//! use form_serialize::{assign::Tree, form_value};
//!
//! let mut tree = Tree::new();
//! tree.insert("people[1][name]", "bob".into());
//! tree.insert("people[0][name]", "fred".into());
//! tree.insert("people[][name]", "frank".into());
//!
//! assert_eq!(
//!     tree.into_value(),
//!     form_value!({
//!         "people": [{"name": "fred"}, {"name": "bob"}, {"name": "frank"}]
//!     })
//! );
//! ```

use crate::path::{Path, Segment};
use crate::{Map, Value};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::mem;

/// Object key collecting `[]` pushes that have no array to land in.
pub const VALUES_KEY: &str = "_values";

type Fields = IndexMap<String, Node>;
type Slots = BTreeMap<usize, Node>;

#[derive(Debug)]
enum Node {
    Scalar(Value),
    Seq(Slots),
    Map(Fields),
}

impl Default for Node {
    fn default() -> Self {
        Node::Map(Fields::new())
    }
}

impl Node {
    fn into_value(self) -> Value {
        match self {
            Node::Scalar(value) => value,
            Node::Seq(slots) => Value::Array(slots.into_values().map(Node::into_value).collect()),
            Node::Map(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(key, node)| (key, node.into_value()))
                    .collect::<Map>(),
            ),
        }
    }
}

/// Builder for the nested result of hash-mode serialization.
#[derive(Debug, Default)]
pub struct Tree {
    root: Fields,
}

impl Tree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `name` and assigns `value` at the resulting path.
    pub fn insert(&mut self, name: &str, value: Value) {
        self.insert_path(&Path::parse(name), value);
    }

    /// Assigns `value` at `path`, creating containers as needed.
    pub fn insert_path(&mut self, path: &Path, value: Value) {
        assign_map(&mut self.root, path.segments(), value);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Finishes the tree, compacting sparse arrays.
    #[must_use]
    pub fn into_value(self) -> Value {
        Node::Map(self.root).into_value()
    }
}

/// Assigns inside an object. An empty path is ignored.
fn assign_map(fields: &mut Fields, segments: &[Segment], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };
    let (key, path) = match head {
        Segment::Append => (VALUES_KEY, segments),
        Segment::Key(key) => (key.as_str(), rest),
    };

    let child = fields.get_mut(key).map(mem::take);
    let node = assign(child, path, value);
    match fields.get_mut(key) {
        Some(slot) => *slot = node,
        None => {
            fields.insert(key.to_string(), node);
        }
    }
}

fn assign(existing: Option<Node>, segments: &[Segment], value: Value) -> Node {
    let Some((head, rest)) = segments.split_first() else {
        return settle(existing, value);
    };

    match existing {
        Some(Node::Map(mut fields)) => {
            assign_map(&mut fields, segments, value);
            Node::Map(fields)
        }
        Some(Node::Seq(mut slots)) => match (head, head.index()) {
            (Segment::Append, _) => match next_index(&slots) {
                Some(index) => {
                    slots.insert(index, assign(None, rest, value));
                    Node::Seq(slots)
                }
                None => {
                    log::debug!("array has no index left; appending under {:?}", VALUES_KEY);
                    let mut fields = promote(slots);
                    assign_map(&mut fields, segments, value);
                    Node::Map(fields)
                }
            },
            (Segment::Key(_), Some(index)) => {
                let child = slots.remove(&index);
                slots.insert(index, assign(child, rest, value));
                Node::Seq(slots)
            }
            (Segment::Key(key), None) => {
                log::debug!("key {:?} addresses an array; converting it to an object", key);
                let mut fields = promote(slots);
                assign_map(&mut fields, segments, value);
                Node::Map(fields)
            }
        },
        Some(Node::Scalar(old)) => {
            log::debug!("{} needs a container; wrapping scalar {} in an array", head, old);
            let mut slots = Slots::from([(0, Node::Scalar(old))]);
            match head {
                Segment::Append => assign(Some(Node::Seq(slots)), segments, value),
                Segment::Key(_) => {
                    slots.insert(1, fresh(head, segments, rest, value));
                    Node::Seq(slots)
                }
            }
        }
        None => fresh(head, segments, rest, value),
    }
}

/// Builds the container `head` implies: an array for `[]` and numeric keys, else an object.
fn fresh(head: &Segment, segments: &[Segment], rest: &[Segment], value: Value) -> Node {
    let index = match head {
        Segment::Append => Some(0),
        Segment::Key(_) => head.index(),
    };
    match index {
        Some(index) => {
            let mut slots = Slots::new();
            slots.insert(index, assign(None, rest, value));
            Node::Seq(slots)
        }
        None => {
            let mut fields = Fields::new();
            assign_map(&mut fields, segments, value);
            Node::Map(fields)
        }
    }
}

/// Stores `value` at a terminal slot, accumulating into an array on collision.
fn settle(existing: Option<Node>, value: Value) -> Node {
    match existing {
        None => Node::Scalar(value),
        Some(Node::Seq(mut slots)) => match next_index(&slots) {
            Some(index) => {
                slots.insert(index, Node::Scalar(value));
                Node::Seq(slots)
            }
            None => {
                log::debug!("array has no index left; appending under {:?}", VALUES_KEY);
                let mut fields = promote(slots);
                assign_map(&mut fields, &[Segment::Append], value);
                Node::Map(fields)
            }
        },
        Some(other) => Node::Seq(Slots::from([(0, other), (1, Node::Scalar(value))])),
    }
}

/// The slot after the highest one in use, or `None` past `usize::MAX`.
fn next_index(slots: &Slots) -> Option<usize> {
    slots
        .keys()
        .next_back()
        .map_or(Some(0), |last| last.checked_add(1))
}

/// Turns an array into an object keyed by decimal index.
fn promote(slots: Slots) -> Fields {
    slots
        .into_iter()
        .map(|(index, node)| (index.to_string(), node))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_value;

    fn build(pairs: &[(&str, Value)]) -> Value {
        let mut tree = Tree::new();
        for (name, value) in pairs {
            tree.insert(name, value.clone());
        }
        tree.into_value()
    }

    #[test]
    fn test_plain_keys() {
        let value = build(&[("foo", "bar".into()), ("foo.bar", "baz".into())]);
        assert_eq!(value, form_value!({"foo": "bar", "foo.bar": "baz"}));
    }

    #[test]
    fn test_repeated_key_accumulates() {
        let value = build(&[
            ("foo", "a".into()),
            ("foo", "b".into()),
            ("foo", false.into()),
        ]);
        assert_eq!(value, form_value!({"foo": ["a", "b", false]}));
    }

    #[test]
    fn test_nested_objects() {
        let value = build(&[
            ("account[name]", "Foo".into()),
            ("account[address][city]", "Qux".into()),
            ("account[address][state]", "CA".into()),
        ]);
        assert_eq!(
            value,
            form_value!({"account": {"name": "Foo", "address": {"city": "Qux", "state": "CA"}}})
        );
    }

    #[test]
    fn test_append_to_nested_array() {
        let value = build(&[("user[tags][]", "cow".into()), ("user[tags][]", "milk".into())]);
        assert_eq!(value, form_value!({"user": {"tags": ["cow", "milk"]}}));
    }

    #[test]
    fn test_indexed_and_appended_entries_merge() {
        let value = build(&[
            ("people[2][name]", "bubba".into()),
            ("people[2][age]", "15".into()),
            ("people[0][name]", "fred".into()),
            ("people[0][age]", "12".into()),
            ("people[1][name]", "bob".into()),
            ("people[1][age]", "14".into()),
            ("people[][name]", "frank".into()),
            ("people[3][age]", "2".into()),
        ]);
        assert_eq!(
            value,
            form_value!({
                "people": [
                    {"name": "fred", "age": "12"},
                    {"name": "bob", "age": "14"},
                    {"name": "bubba", "age": "15"},
                    {"name": "frank", "age": "2"}
                ]
            })
        );
    }

    #[test]
    fn test_unfilled_indices_are_dropped() {
        let value = build(&[("list[5]", "late".into()), ("list[1]", "early".into())]);
        assert_eq!(value, form_value!({"list": ["early", "late"]}));
    }

    #[test]
    fn test_huge_index_does_not_allocate_slots() {
        let value = build(&[("list[18446744073709551615]", "x".into())]);
        assert_eq!(value, form_value!({"list": ["x"]}));
    }

    #[test]
    fn test_bad_root_notation() {
        let value = build(&[("[][foo]", "bar".into()), ("[baz][qux]", "norf".into())]);
        assert_eq!(
            value,
            form_value!({"_values": [{"foo": "bar"}], "baz": {"qux": "norf"}})
        );
    }

    #[test]
    fn test_scalar_then_container_wraps() {
        let value = build(&[("a", "1".into()), ("a[b]", "2".into())]);
        assert_eq!(value, form_value!({"a": ["1", {"b": "2"}]}));
    }

    #[test]
    fn test_scalar_then_append_pushes() {
        let value = build(&[
            ("tags", "x".into()),
            ("tags[]", "y".into()),
            ("tags[]", "z".into()),
        ]);
        assert_eq!(value, form_value!({"tags": ["x", "y", "z"]}));
    }

    #[test]
    fn test_nested_scalar_then_append_object_keeps_scalar() {
        let value = build(&[("a[b]", "1".into()), ("a[b][][c]", "2".into())]);
        assert_eq!(value, form_value!({"a": {"b": ["1", {"c": "2"}]}}));
    }

    #[test]
    fn test_append_after_max_index_goes_to_values_key() {
        let value = build(&[
            ("l[18446744073709551615]", "x".into()),
            ("l[]", "y".into()),
        ]);
        assert_eq!(
            value,
            form_value!({"l": {"18446744073709551615": "x", "_values": ["y"]}})
        );
    }

    #[test]
    fn test_repeat_after_max_index_goes_to_values_key() {
        let value = build(&[("l[18446744073709551615]", "x".into()), ("l", "y".into())]);
        assert_eq!(
            value,
            form_value!({"l": {"18446744073709551615": "x", "_values": ["y"]}})
        );
    }

    #[test]
    fn test_container_then_scalar_wraps() {
        let value = build(&[("a[b]", "2".into()), ("a", "1".into())]);
        assert_eq!(value, form_value!({"a": [{"b": "2"}, "1"]}));
    }

    #[test]
    fn test_numeric_key_on_object_is_a_string_key() {
        let value = build(&[("a[x]", "1".into()), ("a[0]", "2".into())]);
        assert_eq!(value, form_value!({"a": {"x": "1", "0": "2"}}));
    }

    #[test]
    fn test_named_key_on_array_converts_to_object() {
        let value = build(&[("a[0]", "1".into()), ("a[x]", "2".into())]);
        assert_eq!(value, form_value!({"a": {"0": "1", "x": "2"}}));
    }

    #[test]
    fn test_append_on_nested_object_uses_values_key() {
        let value = build(&[("a[x]", "1".into()), ("a[][y]", "2".into())]);
        assert_eq!(value, form_value!({"a": {"x": "1", "_values": [{"y": "2"}]}}));
    }

    #[test]
    fn test_empty_tree() {
        let tree = Tree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.into_value(), form_value!({}));
    }
}
