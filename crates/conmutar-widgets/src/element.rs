//! Attribute-reflecting element wrapper around [`Switch`].
//!
//! [`SwitchElement`] is the form-control surface: a string attribute map in
//! the style of markup attributes, kept in two-way sync with the typed
//! widget properties and with the hidden checkbox that carries the form
//! value. Whatever path mutates state (attribute write, property write,
//! user interaction), all three views agree afterwards; [`in_sync`]
//! checks exactly that.
//!
//! [`in_sync`]: SwitchElement::in_sync

use crate::form::{HiddenCheckbox, DEFAULT_VALUE};
use crate::palette::SwitchColor;
use crate::switch::{Switch, SwitchChanged, DEFAULT_TRACK_HEIGHT, DEFAULT_TRACK_WIDTH};
use conmutar_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::BTreeMap;

const ATTR_CHECKED: &str = "checked";
const ATTR_DISABLED: &str = "disabled";
const ATTR_READONLY: &str = "readonly";
const ATTR_NAME: &str = "name";
const ATTR_VALUE: &str = "value";
const ATTR_WIDTH: &str = "width";
const ATTR_HEIGHT: &str = "height";
const ATTR_COLOR: &str = "color";
const ATTR_ON_TEXT: &str = "on-text";
const ATTR_OFF_TEXT: &str = "off-text";

/// A switch exposed as a form-control element with reflected attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchElement {
    switch: Switch,
    checkbox: HiddenCheckbox,
    attributes: BTreeMap<String, String>,
    #[serde(skip)]
    connected: bool,
}

impl Default for SwitchElement {
    fn default() -> Self {
        Self::new()
    }
}

impl SwitchElement {
    /// The attributes the element reacts to. Anything else is stored
    /// verbatim and otherwise inert.
    pub const OBSERVED_ATTRIBUTES: [&'static str; 10] = [
        ATTR_CHECKED,
        ATTR_DISABLED,
        ATTR_READONLY,
        ATTR_NAME,
        ATTR_VALUE,
        ATTR_WIDTH,
        ATTR_HEIGHT,
        ATTR_COLOR,
        ATTR_ON_TEXT,
        ATTR_OFF_TEXT,
    ];

    /// Create a detached element with default state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            switch: Switch::new(),
            checkbox: HiddenCheckbox::new(),
            attributes: BTreeMap::new(),
            connected: false,
        }
    }

    /// Create an element from a pre-built switch, deriving the reflected
    /// attributes and checkbox state from it.
    #[must_use]
    pub fn from_switch(switch: Switch) -> Self {
        let mut element = Self {
            switch,
            checkbox: HiddenCheckbox::new(),
            attributes: BTreeMap::new(),
            connected: false,
        };

        element.checkbox.set_checked(element.switch.is_on());
        element.checkbox.set_disabled(element.switch.is_disabled());
        element.reflect_bool(ATTR_CHECKED, element.switch.is_on());
        element.reflect_bool(ATTR_DISABLED, element.switch.is_disabled());
        element.reflect_bool(ATTR_READONLY, element.switch.is_read_only());

        if element.switch.get_track_width() != DEFAULT_TRACK_WIDTH {
            let text = fmt_px(element.switch.get_track_width());
            element.attributes.insert(ATTR_WIDTH.to_string(), text);
        }
        if element.switch.get_track_height() != DEFAULT_TRACK_HEIGHT {
            let text = fmt_px(element.switch.get_track_height());
            element.attributes.insert(ATTR_HEIGHT.to_string(), text);
        }
        if element.switch.get_palette() != SwitchColor::default() {
            element.attributes.insert(
                ATTR_COLOR.to_string(),
                element.switch.get_palette().as_str().to_string(),
            );
        }
        if !element.switch.get_on_text().is_empty() {
            element.attributes.insert(
                ATTR_ON_TEXT.to_string(),
                element.switch.get_on_text().to_string(),
            );
        }
        if !element.switch.get_off_text().is_empty() {
            element.attributes.insert(
                ATTR_OFF_TEXT.to_string(),
                element.switch.get_off_text().to_string(),
            );
        }

        element
    }

    // ----- lifecycle -----

    /// Attach the element; events are only delivered while connected.
    pub fn connect(&mut self) {
        self.connected = true;
    }

    /// Detach the element; subsequent events are ignored.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Whether the element is attached.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    // ----- attribute surface -----

    /// Write an attribute and sync the matching property.
    ///
    /// Boolean attributes follow presence semantics: any value, including
    /// the empty string, means true. Invalid `color` and unparseable
    /// `width`/`height` values are stored but leave the property at its
    /// previous value.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_lowercase();
        self.attributes.insert(name.clone(), value.into());
        self.apply_attribute(&name);
    }

    /// Remove an attribute and reset the matching property to its default.
    pub fn remove_attribute(&mut self, name: &str) {
        let name = name.to_ascii_lowercase();
        if self.attributes.remove(&name).is_some() {
            self.apply_attribute(&name);
        }
    }

    /// Read an attribute's stored text.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Check attribute presence.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(&name.to_ascii_lowercase())
    }

    /// Sync one observed attribute into the typed properties.
    fn apply_attribute(&mut self, name: &str) {
        let value = self.attributes.get(name).cloned();
        let present = value.is_some();

        match name {
            ATTR_CHECKED => {
                self.switch.set_on(present);
                self.checkbox.set_checked(present);
            }
            ATTR_DISABLED => {
                self.switch.set_disabled(present);
                self.checkbox.set_disabled(present);
            }
            ATTR_READONLY => self.switch.set_read_only(present),
            ATTR_NAME => self.checkbox.set_name(value.unwrap_or_default()),
            ATTR_VALUE => match value {
                Some(v) => self.checkbox.set_value(v),
                None => self.checkbox.reset_value(),
            },
            ATTR_WIDTH => match value {
                Some(v) => {
                    if let Ok(width) = v.trim().parse::<f32>() {
                        self.switch.set_track_width(width);
                    }
                }
                None => self.switch.set_track_width(DEFAULT_TRACK_WIDTH),
            },
            ATTR_HEIGHT => match value {
                Some(v) => {
                    if let Ok(height) = v.trim().parse::<f32>() {
                        self.switch.set_track_height(height);
                    }
                }
                None => self.switch.set_track_height(DEFAULT_TRACK_HEIGHT),
            },
            ATTR_COLOR => match value {
                Some(v) => {
                    if let Ok(color) = v.parse::<SwitchColor>() {
                        self.switch.set_palette(color);
                    }
                }
                None => self.switch.set_palette(SwitchColor::default()),
            },
            ATTR_ON_TEXT => self.switch.set_on_text(value.unwrap_or_default()),
            ATTR_OFF_TEXT => self.switch.set_off_text(value.unwrap_or_default()),
            _ => {}
        }
    }

    /// Add or remove a boolean attribute to mirror a property value.
    fn reflect_bool(&mut self, name: &str, value: bool) {
        if value {
            self.attributes.insert(name.to_string(), String::new());
        } else {
            self.attributes.remove(name);
        }
    }

    // ----- property surface -----

    /// Get the checked state.
    #[must_use]
    pub const fn checked(&self) -> bool {
        self.switch.is_on()
    }

    /// Set the checked state, reflecting the `checked` attribute.
    pub fn set_checked(&mut self, checked: bool) {
        self.switch.set_on(checked);
        self.checkbox.set_checked(checked);
        self.reflect_bool(ATTR_CHECKED, checked);
    }

    /// Get the disabled state.
    #[must_use]
    pub const fn disabled(&self) -> bool {
        self.switch.is_disabled()
    }

    /// Set the disabled state, reflecting the `disabled` attribute.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.switch.set_disabled(disabled);
        self.checkbox.set_disabled(disabled);
        self.reflect_bool(ATTR_DISABLED, disabled);
    }

    /// Get the read-only state.
    #[must_use]
    pub const fn read_only(&self) -> bool {
        self.switch.is_read_only()
    }

    /// Set the read-only state, reflecting the `readonly` attribute.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.switch.set_read_only(read_only);
        self.reflect_bool(ATTR_READONLY, read_only);
    }

    /// Get the form field name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.checkbox.name()
    }

    /// Set the form field name, reflecting the `name` attribute.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.attributes.insert(ATTR_NAME.to_string(), name.clone());
        self.checkbox.set_name(name);
    }

    /// Get the submission value.
    #[must_use]
    pub fn value(&self) -> &str {
        self.checkbox.value()
    }

    /// Set the submission value, reflecting the `value` attribute.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.attributes
            .insert(ATTR_VALUE.to_string(), value.clone());
        self.checkbox.set_value(value);
    }

    /// Get the track width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.switch.get_track_width()
    }

    /// Set the track width, reflecting the `width` attribute.
    ///
    /// The reflected text is the applied (clamped) value.
    pub fn set_width(&mut self, width: f32) {
        self.switch.set_track_width(width);
        self.attributes
            .insert(ATTR_WIDTH.to_string(), fmt_px(self.switch.get_track_width()));
    }

    /// Get the track height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.switch.get_track_height()
    }

    /// Set the track height, reflecting the `height` attribute.
    pub fn set_height(&mut self, height: f32) {
        self.switch.set_track_height(height);
        self.attributes.insert(
            ATTR_HEIGHT.to_string(),
            fmt_px(self.switch.get_track_height()),
        );
    }

    /// Get the color theme.
    #[must_use]
    pub const fn color(&self) -> SwitchColor {
        self.switch.get_palette()
    }

    /// Set the color theme, reflecting the `color` attribute.
    pub fn set_color(&mut self, color: SwitchColor) {
        self.switch.set_palette(color);
        self.attributes
            .insert(ATTR_COLOR.to_string(), color.as_str().to_string());
    }

    /// Get the on-state text.
    #[must_use]
    pub fn on_text(&self) -> &str {
        self.switch.get_on_text()
    }

    /// Set the on-state text, reflecting the `on-text` attribute.
    pub fn set_on_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.attributes
            .insert(ATTR_ON_TEXT.to_string(), text.clone());
        self.switch.set_on_text(text);
    }

    /// Get the off-state text.
    #[must_use]
    pub fn off_text(&self) -> &str {
        self.switch.get_off_text()
    }

    /// Set the off-state text, reflecting the `off-text` attribute.
    pub fn set_off_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.attributes
            .insert(ATTR_OFF_TEXT.to_string(), text.clone());
        self.switch.set_off_text(text);
    }

    // ----- interaction -----

    /// Attempt a user toggle through the element.
    ///
    /// Honors the disabled/read-only guards; on success the new state is
    /// reflected everywhere and returned.
    pub fn toggle(&mut self) -> Option<SwitchChanged> {
        if self.switch.try_toggle() {
            let on = self.switch.is_on();
            self.checkbox.set_checked(on);
            self.reflect_bool(ATTR_CHECKED, on);
            Some(SwitchChanged { on })
        } else {
            None
        }
    }

    /// Deliver an input event.
    ///
    /// A detached element ignores events entirely. A state change is
    /// reflected into the attribute map and checkbox before the message
    /// is returned.
    pub fn handle_event(&mut self, event: &Event) -> Option<SwitchChanged> {
        if !self.connected {
            return None;
        }

        let message = self.switch.event(event)?;
        let changed = message.downcast::<SwitchChanged>().ok()?;
        self.checkbox.set_checked(changed.on);
        self.reflect_bool(ATTR_CHECKED, changed.on);
        Some(*changed)
    }

    /// The `(name, value)` pair contributed on form submission, if any.
    ///
    /// Read-only elements still submit; disabled ones never do.
    #[must_use]
    pub fn form_entry(&self) -> Option<(&str, &str)> {
        self.checkbox.form_entry()
    }

    /// Borrow the underlying switch widget.
    #[must_use]
    pub const fn switch(&self) -> &Switch {
        &self.switch
    }

    /// Check the element invariant: attribute map, widget properties, and
    /// hidden checkbox all agree.
    #[must_use]
    pub fn in_sync(&self) -> bool {
        let attr = |name: &str| self.attributes.contains_key(name);

        attr(ATTR_CHECKED) == self.switch.is_on()
            && self.switch.is_on() == self.checkbox.is_checked()
            && attr(ATTR_DISABLED) == self.switch.is_disabled()
            && self.switch.is_disabled() == self.checkbox.is_disabled()
            && attr(ATTR_READONLY) == self.switch.is_read_only()
            && self.checkbox.name()
                == self.attributes.get(ATTR_NAME).map_or("", String::as_str)
            && self.checkbox.value()
                == self
                    .attributes
                    .get(ATTR_VALUE)
                    .map_or(DEFAULT_VALUE, String::as_str)
    }
}

impl Widget for SwitchElement {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        self.switch.measure(constraints)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.switch.layout(bounds)
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.switch.paint(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        self.handle_event(event)
            .map(|changed| Box::new(changed) as Box<dyn Any + Send>)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        self.connected && self.switch.is_interactive()
    }

    fn is_focusable(&self) -> bool {
        self.connected && self.switch.is_focusable()
    }

    fn accessible_name(&self) -> Option<&str> {
        Widget::accessible_name(&self.switch)
    }

    fn accessible_role(&self) -> AccessibleRole {
        self.switch.accessible_role()
    }

    fn test_id(&self) -> Option<&str> {
        Widget::test_id(&self.switch)
    }

    fn bounds(&self) -> Rect {
        self.switch.bounds()
    }
}

/// Attribute text for a pixel dimension.
fn fmt_px(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
