//! Conmutar: a form-style toggle switch widget.
//!
//! A single reusable control: a toggle switch with checkbox form semantics.
//! Markup attributes, typed properties, and a hidden native-checkbox mirror
//! stay in two-way sync; form submission reads from the checkbox alone.
//!
//! # Example
//!
//! ```
//! use conmutar::widgets::SwitchElement;
//!
//! let mut switch = SwitchElement::new();
//! switch.set_attribute("name", "dark-mode");
//! switch.set_attribute("color", "green");
//! switch.set_attribute("checked", "");
//!
//! assert!(switch.checked());
//! assert_eq!(switch.form_entry(), Some(("dark-mode", "on")));
//! ```

pub use conmutar_core::*;
pub use conmutar_widgets as widgets;
