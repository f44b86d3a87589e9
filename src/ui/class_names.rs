// SPDX-License-Identifier: MPL-2.0
//! Conditional class-list resolution.
//!
//! Merges class-name fragments into a single space-separated string. Tokens
//! keep the order of their first occurrence and duplicates are dropped.
//!
//! ```
//! use iced_swatch::classes;
//!
//! let disabled = true;
//! let resolved = classes!["btn btn-md", ("opacity-50", disabled), ("ring", false), "btn"];
//! assert_eq!(resolved, "btn btn-md opacity-50");
//! ```

/// One input to [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassFragment {
    /// Whitespace-separated class names, all included.
    Names(String),
    /// Names included only when their flag is `true`.
    Conditional(Vec<(String, bool)>),
    /// Nested fragments, flattened in order.
    List(Vec<ClassFragment>),
    /// Contributes nothing.
    Empty,
}

impl From<&str> for ClassFragment {
    fn from(names: &str) -> Self {
        ClassFragment::Names(names.to_string())
    }
}

impl From<String> for ClassFragment {
    fn from(names: String) -> Self {
        ClassFragment::Names(names)
    }
}

impl From<&String> for ClassFragment {
    fn from(names: &String) -> Self {
        ClassFragment::Names(names.clone())
    }
}

impl<T: Into<ClassFragment>> From<Option<T>> for ClassFragment {
    fn from(names: Option<T>) -> Self {
        names.map_or(ClassFragment::Empty, Into::into)
    }
}

impl From<(&str, bool)> for ClassFragment {
    fn from((name, enabled): (&str, bool)) -> Self {
        ClassFragment::Conditional(vec![(name.to_string(), enabled)])
    }
}

impl From<Vec<(&str, bool)>> for ClassFragment {
    fn from(pairs: Vec<(&str, bool)>) -> Self {
        ClassFragment::Conditional(
            pairs
                .into_iter()
                .map(|(name, enabled)| (name.to_string(), enabled))
                .collect(),
        )
    }
}

impl From<Vec<ClassFragment>> for ClassFragment {
    fn from(fragments: Vec<ClassFragment>) -> Self {
        ClassFragment::List(fragments)
    }
}

/// Resolves fragments into a deduplicated, order-stable, space-joined class string.
#[must_use]
pub fn resolve(fragments: &[ClassFragment]) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for fragment in fragments {
        collect(fragment, &mut tokens);
    }
    tokens.join(" ")
}

fn collect<'a>(fragment: &'a ClassFragment, tokens: &mut Vec<&'a str>) {
    match fragment {
        ClassFragment::Names(names) => push_names(names, tokens),
        ClassFragment::Conditional(pairs) => {
            for (names, enabled) in pairs {
                if *enabled {
                    push_names(names, tokens);
                }
            }
        }
        ClassFragment::List(nested) => {
            for fragment in nested {
                collect(fragment, tokens);
            }
        }
        ClassFragment::Empty => {}
    }
}

fn push_names<'a>(names: &'a str, tokens: &mut Vec<&'a str>) {
    for name in names.split_whitespace() {
        if !tokens.contains(&name) {
            tokens.push(name);
        }
    }
}

/// Builds a class string from heterogeneous fragments.
///
/// Each argument goes through `ClassFragment::from`.
#[macro_export]
macro_rules! classes {
    ($($fragment:expr),* $(,)?) => {
        $crate::ui::class_names::resolve(&[
            $($crate::ui::class_names::ClassFragment::from($fragment)),*
        ])
    };
}
