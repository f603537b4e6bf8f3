//! Hidden native checkbox backing the switch.
//!
//! The switch itself never talks to a form. Form value transport is
//! delegated to this mirror of a native checkbox input: the element keeps
//! it in sync with its own state, and submission reads from here alone.

use serde::{Deserialize, Serialize};

/// Submission value a checkbox carries when no `value` attribute is set.
pub const DEFAULT_VALUE: &str = "on";

/// Mirror of the hidden `<input type="checkbox">` a switch delegates to.
///
/// `readonly` deliberately does not exist here: a readonly switch still
/// submits its value, so the proxy only needs `disabled` to decide
/// participation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenCheckbox {
    checked: bool,
    disabled: bool,
    name: String,
    value: String,
}

impl Default for HiddenCheckbox {
    fn default() -> Self {
        Self {
            checked: false,
            disabled: false,
            name: String::new(),
            value: DEFAULT_VALUE.to_string(),
        }
    }
}

impl HiddenCheckbox {
    /// Create an unchecked, enabled checkbox with no name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the checked state.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Get the disabled state.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Set the disabled state.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Get the form field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the form field name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the submission value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the submission value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Reset the submission value to the checkbox default.
    pub fn reset_value(&mut self) {
        self.value = DEFAULT_VALUE.to_string();
    }

    /// The `(name, value)` pair this control contributes on submission.
    ///
    /// `None` when the control would not submit: unchecked, disabled, or
    /// unnamed.
    #[must_use]
    pub fn form_entry(&self) -> Option<(&str, &str)> {
        if self.checked && !self.disabled && !self.name.is_empty() {
            Some((self.name.as_str(), self.value.as_str()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let cb = HiddenCheckbox::new();
        assert!(!cb.is_checked());
        assert!(!cb.is_disabled());
        assert_eq!(cb.name(), "");
        assert_eq!(cb.value(), "on");
    }

    #[test]
    fn test_unchecked_never_submits() {
        let mut cb = HiddenCheckbox::new();
        cb.set_name("notifications");
        assert_eq!(cb.form_entry(), None);
    }

    #[test]
    fn test_checked_named_submits() {
        let mut cb = HiddenCheckbox::new();
        cb.set_name("notifications");
        cb.set_checked(true);
        assert_eq!(cb.form_entry(), Some(("notifications", "on")));
    }

    #[test]
    fn test_custom_value_submitted() {
        let mut cb = HiddenCheckbox::new();
        cb.set_name("plan");
        cb.set_value("premium");
        cb.set_checked(true);
        assert_eq!(cb.form_entry(), Some(("plan", "premium")));
    }

    #[test]
    fn test_disabled_never_submits() {
        let mut cb = HiddenCheckbox::new();
        cb.set_name("notifications");
        cb.set_checked(true);
        cb.set_disabled(true);
        assert_eq!(cb.form_entry(), None);
    }

    #[test]
    fn test_unnamed_never_submits() {
        let mut cb = HiddenCheckbox::new();
        cb.set_checked(true);
        assert_eq!(cb.form_entry(), None);
    }

    #[test]
    fn test_reset_value_restores_default() {
        let mut cb = HiddenCheckbox::new();
        cb.set_value("yes");
        cb.reset_value();
        assert_eq!(cb.value(), DEFAULT_VALUE);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut cb = HiddenCheckbox::new();
        cb.set_name("a");
        cb.set_checked(true);

        let json = serde_json::to_string(&cb).expect("serialize");
        let back: HiddenCheckbox = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cb);
    }
}
