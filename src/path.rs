//! Bracket-notation control names.
//!
//! A control name such as `account[address][city]` or `user[tags][]` is a
//! path into the nested result:
//!
//! ```text
//! name     := prefix group*
//! prefix   := any characters up to the first '[' or ']'   (may be empty)
//! group    := '[' token ']'                                (token has no brackets)
//! ```
//!
//! An empty group `[]` is an [`Segment::Append`]; any other group is a
//! [`Segment::Key`]. A name with no complete group is a single key, stray
//! brackets included. Characters outside the prefix and the groups are
//! ignored. Parsing never fails.
//!
//! ```rust
//! use form_serialize::path::{Path, Segment};
//!
//! let path = Path::parse("people[][name]");
//! assert_eq!(
//!     path.segments(),
//!     &[
//!         Segment::Key("people".to_string()),
//!         Segment::Append,
//!         Segment::Key("name".to_string()),
//!     ]
//! );
//! ```

use std::fmt;

/// One step of a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A named slot: an object key, or an array index when it is all digits.
    Key(String),
    /// `[]`: the next free slot of an array.
    Append,
}

impl Segment {
    /// Returns the array index this key denotes, if it is made only of ASCII digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_serialize::path::Segment;
    ///
    /// assert_eq!(Segment::Key("2".to_string()).index(), Some(2));
    /// assert_eq!(Segment::Key("123abc".to_string()).index(), None);
    /// assert_eq!(Segment::Append.index(), None);
    /// ```
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Segment::Key(key) if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) => {
                key.parse().ok()
            }
            _ => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "[{}]", key),
            Segment::Append => f.write_str("[]"),
        }
    }
}

/// A parsed control name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    /// Parses a control name into its segments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_serialize::path::{Path, Segment};
    ///
    /// assert_eq!(Path::parse("foo.bar").segments(), &[Segment::Key("foo.bar".to_string())]);
    /// assert_eq!(Path::parse("[baz][qux]").len(), 2);
    /// assert_eq!(Path::parse("foo[]").segments()[1], Segment::Append);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let groups = bracket_groups(name);
        if groups.is_empty() {
            return Path(vec![Segment::Key(name.to_string())]);
        }

        let mut segments = Vec::with_capacity(groups.len() + 1);
        let prefix_end = name
            .find(|c: char| c == '[' || c == ']')
            .unwrap_or(name.len());
        if prefix_end > 0 {
            segments.push(Segment::Key(name[..prefix_end].to_string()));
        }
        segments.extend(groups.into_iter().map(|token| {
            if token.is_empty() {
                Segment::Append
            } else {
                Segment::Key(token.to_string())
            }
        }));
        Path(segments)
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the path ends in `[]`.
    #[must_use]
    pub fn ends_with_append(&self) -> bool {
        matches!(self.0.last(), Some(Segment::Append))
    }
}

/// Returns the token of every `[token]` group whose token contains no brackets.
fn bracket_groups(name: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut open = None;
    for (i, ch) in name.char_indices() {
        match ch {
            '[' => open = Some(i + 1),
            ']' => {
                if let Some(start) = open.take() {
                    groups.push(&name[start..i]);
                }
            }
            _ => {}
        }
    }
    groups
}
