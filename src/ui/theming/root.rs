// SPDX-License-Identifier: MPL-2.0
//! Document root class list.
//!
//! The only presentation state with global scope: after the theme store
//! applies an appearance, exactly one of `light` / `dark` is present.

use super::Appearance;
use crate::classes;
use crate::ui::class_names::ClassFragment;

const APPEARANCE_TOKENS: [&str; 2] = ["light", "dark"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    classes: Vec<String>,
}

impl DocumentRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root carrying extra, appearance-independent class names.
    #[must_use]
    pub fn with_classes(names: &str) -> Self {
        Self {
            classes: names.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Replaces any appearance token with the one for `appearance`.
    pub fn apply(&mut self, appearance: Appearance) {
        self.classes
            .retain(|class| !APPEARANCE_TOKENS.contains(&class.as_str()));
        self.classes.push(appearance.class_token().to_string());
    }

    /// Appearance currently marked on the root, if any.
    #[must_use]
    pub fn appearance(&self) -> Option<Appearance> {
        self.classes.iter().find_map(|class| match class.as_str() {
            "light" => Some(Appearance::Light),
            "dark" => Some(Appearance::Dark),
            _ => None,
        })
    }

    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|class| class == name)
    }

    /// Resolved `class` attribute value.
    #[must_use]
    pub fn class_attribute(&self) -> String {
        let fragments: Vec<ClassFragment> = self.classes.iter().map(ClassFragment::from).collect();
        classes![fragments]
    }
}
