//! Locator-code rules for the GPO dump format.

use std::collections::HashMap;

/// Declarative description of the locator codes that need special placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatorRules {
    /// Code → code of the structural line it continues.
    continuations: HashMap<String, String>,

    /// Code → code it attaches beside; dropped until that code is seen.
    redirects: HashMap<String, String>,

    /// Code of footnote definition lines, which are never placed.
    footnote_definition: Option<String>,
}

impl LocatorRules {
    /// Create an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines with `code` are tail text of the latest `predecessor` line.
    #[must_use]
    pub fn with_continuation(
        mut self,
        code: impl Into<String>,
        predecessor: impl Into<String>,
    ) -> Self {
        self.continuations.insert(code.into(), predecessor.into());
        self
    }

    /// Lines with `code` sit beside the latest `prerequisite` line, and are
    /// dropped while no such line has been placed.
    #[must_use]
    pub fn with_redirect(
        mut self,
        code: impl Into<String>,
        prerequisite: impl Into<String>,
    ) -> Self {
        self.redirects.insert(code.into(), prerequisite.into());
        self
    }

    /// Lines with `code` define footnotes.
    #[must_use]
    pub fn with_footnote_definition(mut self, code: impl Into<String>) -> Self {
        self.footnote_definition = Some(code.into());
        self
    }

    /// Predecessor code if `code` is a continuation.
    #[must_use]
    pub fn continuation_of(&self, code: &str) -> Option<&str> {
        self.continuations.get(code).map(String::as_str)
    }

    /// Prerequisite code if `code` is redirected.
    #[must_use]
    pub fn redirect_of(&self, code: &str) -> Option<&str> {
        self.redirects.get(code).map(String::as_str)
    }

    #[must_use]
    pub fn is_footnote_definition(&self, code: &str) -> bool {
        self.footnote_definition.as_deref() == Some(code)
    }
}

/// Rules for the GPO locator-coded USC dump.
///
/// ```text
/// I32  tail text of an I13 paragraph, emitted under its own code
/// I17  attaches beside the latest I12 line; dropped before any I12
/// I28  footnote definition, bound to the line carrying its marker
/// ```
#[must_use]
pub fn create_gpo_locator_rules() -> LocatorRules {
    LocatorRules::new()
        .with_continuation("I32", "I13")
        .with_redirect("I17", "I12")
        .with_footnote_definition("I28")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_gpo_locator_rules() {
        let rules = create_gpo_locator_rules();

        assert_eq!(rules.continuation_of("I32"), Some("I13"));
        assert_eq!(rules.continuation_of("I13"), None);
        assert_eq!(rules.redirect_of("I17"), Some("I12"));
        assert!(rules.is_footnote_definition("I28"));
        assert!(!rules.is_footnote_definition("I11"));
    }

    #[test]
    fn test_empty_rules() {
        let rules = LocatorRules::new();
        assert_eq!(rules.continuation_of("I32"), None);
        assert_eq!(rules.redirect_of("I17"), None);
        assert!(!rules.is_footnote_definition("I28"));
    }
}
