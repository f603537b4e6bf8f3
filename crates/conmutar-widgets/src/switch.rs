//! Toggle switch widget.

use crate::palette::SwitchColor;
use conmutar_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, Key, MouseButton, Point, Rect, Size, TextStyle, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Message emitted when the switch state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The new state
    pub on: bool,
}

/// Default track width in pixels.
pub const DEFAULT_TRACK_WIDTH: f32 = 44.0;
/// Default track height in pixels.
pub const DEFAULT_TRACK_HEIGHT: f32 = 24.0;

const MIN_TRACK_WIDTH: f32 = 20.0;
const MIN_TRACK_HEIGHT: f32 = 12.0;
const THUMB_INSET: f32 = 2.0;
const FOCUS_RING_WIDTH: f32 = 2.0;
const DISABLED_DESATURATION: f32 = 0.65;

/// Toggle switch widget (on/off).
///
/// The switch renders a rounded track with a circular thumb that sits left
/// (off) or right (on). Optional state text is drawn inside the track on
/// the side the thumb is not occupying. Thumb size derives from the track
/// height, so resizing the track resizes the handle with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Switch {
    /// Current state
    on: bool,
    /// Whether the switch is disabled
    disabled: bool,
    /// Whether the switch rejects user toggling but stays live otherwise
    read_only: bool,
    /// Track width
    track_width: f32,
    /// Track height
    track_height: f32,
    /// Color theme
    palette: SwitchColor,
    /// Text shown inside the track when on
    on_text: String,
    /// Text shown inside the track when off
    off_text: String,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Whether focused
    #[serde(skip)]
    focused: bool,
    /// Whether hovered
    #[serde(skip)]
    hovered: bool,
}

impl Default for Switch {
    fn default() -> Self {
        Self {
            on: false,
            disabled: false,
            read_only: false,
            track_width: DEFAULT_TRACK_WIDTH,
            track_height: DEFAULT_TRACK_HEIGHT,
            palette: SwitchColor::default(),
            on_text: String::new(),
            off_text: String::new(),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
            focused: false,
            hovered: false,
        }
    }
}

impl Switch {
    /// Create a new switch in the off state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch with an initial state.
    #[must_use]
    pub fn with_state(on: bool) -> Self {
        Self::default().on(on)
    }

    /// Set the state.
    #[must_use]
    pub const fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Set whether the switch is disabled.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the switch is read-only.
    #[must_use]
    pub const fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Set the track width.
    #[must_use]
    pub fn track_width(mut self, width: f32) -> Self {
        self.track_width = width.max(MIN_TRACK_WIDTH);
        self
    }

    /// Set the track height.
    #[must_use]
    pub fn track_height(mut self, height: f32) -> Self {
        self.track_height = height.max(MIN_TRACK_HEIGHT);
        self
    }

    /// Set the color theme.
    #[must_use]
    pub const fn palette(mut self, palette: SwitchColor) -> Self {
        self.palette = palette;
        self
    }

    /// Set the text shown when on.
    #[must_use]
    pub fn on_text(mut self, text: impl Into<String>) -> Self {
        self.on_text = text.into();
        self
    }

    /// Set the text shown when off.
    #[must_use]
    pub fn off_text(mut self, text: impl Into<String>) -> Self {
        self.off_text = text.into();
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get current state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Get disabled state.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Get read-only state.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Get the track width.
    #[must_use]
    pub const fn get_track_width(&self) -> f32 {
        self.track_width
    }

    /// Get the track height.
    #[must_use]
    pub const fn get_track_height(&self) -> f32 {
        self.track_height
    }

    /// Get the color theme.
    #[must_use]
    pub const fn get_palette(&self) -> SwitchColor {
        self.palette
    }

    /// Get the on-state text.
    #[must_use]
    pub fn get_on_text(&self) -> &str {
        &self.on_text
    }

    /// Get the off-state text.
    #[must_use]
    pub fn get_off_text(&self) -> &str {
        &self.off_text
    }

    /// Whether the switch currently has keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the pointer is currently over the switch.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Set the state directly.
    ///
    /// Programmatic writes are never rejected; only user toggling honors
    /// the disabled/read-only guards.
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    /// Set the disabled state.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.focused = false;
        }
    }

    /// Set the read-only state.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Set the track width.
    pub fn set_track_width(&mut self, width: f32) {
        self.track_width = width.max(MIN_TRACK_WIDTH);
    }

    /// Set the track height.
    pub fn set_track_height(&mut self, height: f32) {
        self.track_height = height.max(MIN_TRACK_HEIGHT);
    }

    /// Set the color theme.
    pub fn set_palette(&mut self, palette: SwitchColor) {
        self.palette = palette;
    }

    /// Set the on-state text.
    pub fn set_on_text(&mut self, text: impl Into<String>) {
        self.on_text = text.into();
    }

    /// Set the off-state text.
    pub fn set_off_text(&mut self, text: impl Into<String>) {
        self.off_text = text.into();
    }

    /// Attempt a user toggle.
    ///
    /// Returns `true` when the state flipped; a disabled or read-only
    /// switch refuses and returns `false`.
    pub fn try_toggle(&mut self) -> bool {
        if self.disabled || self.read_only {
            return false;
        }
        self.on = !self.on;
        true
    }

    /// The track rectangle within the current bounds.
    fn track_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.track_width,
            self.track_height,
        )
    }

    /// Thumb radius, derived from the track height.
    fn thumb_radius(&self) -> f32 {
        (self.track_height / 2.0 - THUMB_INSET).max(2.0)
    }

    /// Thumb center for the current state.
    ///
    /// The thumb occupies a square slot at the left (off) or right (on)
    /// end of the track.
    fn thumb_center(&self) -> Point {
        let track = self.track_rect();
        let half = self.track_height / 2.0;
        let x = if self.on {
            track.right() - half
        } else {
            track.x + half
        };
        Point::new(x, track.y + half)
    }

    /// Font size for state text.
    fn text_size(&self) -> f32 {
        (self.track_height * 0.5).clamp(8.0, 16.0)
    }

    /// State text for the current state, if any.
    fn state_text(&self) -> Option<&str> {
        let text = if self.on { &self.on_text } else { &self.off_text };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Check if a point is within the track.
    fn hit_test(&self, point: Point) -> bool {
        self.track_rect().contains_point(&point)
    }
}

impl Widget for Switch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.track_width, self.track_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let colors = self.palette.colors();
        let track = self.track_rect();
        let radius = self.track_height / 2.0;

        let track_color = if self.disabled {
            colors.track(self.on).desaturate(DISABLED_DESATURATION)
        } else {
            colors.track(self.on)
        };
        canvas.fill_rounded_rect(track, radius, track_color);

        if let Some(text) = self.state_text() {
            let size = self.text_size();
            let slot = self.track_height;
            // Text sits in the track region the thumb is not occupying.
            let (region_start, region_end) = if self.on {
                (track.x, track.right() - slot)
            } else {
                (track.x + slot, track.right())
            };
            let approx_width = text.chars().count() as f32 * size * 0.6;
            let x = (region_start + region_end) / 2.0 - approx_width / 2.0;
            let baseline = track.center().y + size * 0.35;

            let color = if self.disabled {
                colors.state_text(self.on).desaturate(DISABLED_DESATURATION)
            } else {
                colors.state_text(self.on)
            };
            canvas.draw_text(
                text,
                Point::new(x, baseline),
                &TextStyle {
                    size,
                    color,
                    ..TextStyle::default()
                },
            );
        }

        let thumb_color = if self.disabled {
            colors.thumb.desaturate(DISABLED_DESATURATION)
        } else {
            colors.thumb
        };
        canvas.fill_circle(self.thumb_center(), self.thumb_radius(), thumb_color);

        if self.focused && !self.disabled {
            canvas.stroke_rounded_rect(
                track.outset(FOCUS_RING_WIDTH),
                radius + FOCUS_RING_WIDTH,
                colors.track_on,
                FOCUS_RING_WIDTH,
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.hit_test(*position) && self.try_toggle() {
                    return Some(Box::new(SwitchChanged { on: self.on }));
                }
            }
            Event::KeyDown {
                key: Key::Space | Key::Enter,
            } => {
                if self.focused && self.try_toggle() {
                    return Some(Box::new(SwitchChanged { on: self.on }));
                }
            }
            Event::FocusIn => self.focused = true,
            Event::FocusOut => self.focused = false,
            Event::MouseEnter => self.hovered = true,
            Event::MouseLeave => self.hovered = false,
            _ => {}
        }

        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        !self.disabled && !self.read_only
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref().or_else(|| {
            let label = if self.on { &self.on_text } else { &self.off_text };
            if label.is_empty() {
                None
            } else {
                Some(label)
            }
        })
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conmutar_core::draw::DrawCommand;
    use conmutar_core::{Color, RecordingCanvas};

    fn laid_out(switch: Switch) -> Switch {
        let mut switch = switch;
        let size = Size::new(switch.get_track_width(), switch.get_track_height());
        switch.layout(Rect::from_size(size));
        switch
    }

    fn left_click(x: f32, y: f32) -> Event {
        Event::MouseDown {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    // ===== Construction Tests =====

    #[test]
    fn test_switch_new() {
        let switch = Switch::new();
        assert!(!switch.is_on());
        assert!(!switch.is_disabled());
        assert!(!switch.is_read_only());
        assert_eq!(switch.get_track_width(), DEFAULT_TRACK_WIDTH);
        assert_eq!(switch.get_track_height(), DEFAULT_TRACK_HEIGHT);
        assert_eq!(switch.get_palette(), SwitchColor::Blue);
    }

    #[test]
    fn test_switch_with_state() {
        assert!(Switch::with_state(true).is_on());
        assert!(!Switch::with_state(false).is_on());
    }

    #[test]
    fn test_switch_builder() {
        let switch = Switch::new()
            .on(true)
            .read_only(true)
            .track_width(60.0)
            .track_height(30.0)
            .palette(SwitchColor::Green)
            .on_text("ON")
            .off_text("OFF")
            .accessible_name("Enable sync")
            .test_id("sync-switch");

        assert!(switch.is_on());
        assert!(switch.is_read_only());
        assert_eq!(switch.get_track_width(), 60.0);
        assert_eq!(switch.get_track_height(), 30.0);
        assert_eq!(switch.get_palette(), SwitchColor::Green);
        assert_eq!(switch.get_on_text(), "ON");
        assert_eq!(switch.get_off_text(), "OFF");
        assert_eq!(Widget::accessible_name(&switch), Some("Enable sync"));
        assert_eq!(Widget::test_id(&switch), Some("sync-switch"));
    }

    #[test]
    fn test_track_dimensions_clamped_to_minimum() {
        let switch = Switch::new().track_width(5.0).track_height(3.0);
        assert_eq!(switch.get_track_width(), 20.0);
        assert_eq!(switch.get_track_height(), 12.0);
    }

    // ===== Toggle Tests =====

    #[test]
    fn test_try_toggle_flips_state() {
        let mut switch = Switch::new();
        assert!(switch.try_toggle());
        assert!(switch.is_on());
        assert!(switch.try_toggle());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_toggle_twice_returns_to_original() {
        for initial in [false, true] {
            let mut switch = Switch::with_state(initial);
            switch.try_toggle();
            switch.try_toggle();
            assert_eq!(switch.is_on(), initial);
        }
    }

    #[test]
    fn test_disabled_rejects_toggle() {
        let mut switch = Switch::new().disabled(true);
        assert!(!switch.try_toggle());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_read_only_rejects_toggle() {
        let mut switch = Switch::new().read_only(true);
        assert!(!switch.try_toggle());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_set_on_ignores_guards() {
        let mut switch = Switch::new().disabled(true).read_only(true);
        switch.set_on(true);
        assert!(switch.is_on());
    }

    // ===== Measure / Layout Tests =====

    #[test]
    fn test_measure_returns_track_size() {
        let switch = Switch::new().track_width(60.0).track_height(28.0);
        let size = switch.measure(Constraints::loose(Size::new(200.0, 100.0)));
        assert_eq!(size, Size::new(60.0, 28.0));
    }

    #[test]
    fn test_measure_respects_constraints() {
        let switch = Switch::new().track_width(60.0).track_height(28.0);
        let size = switch.measure(Constraints::loose(Size::new(50.0, 20.0)));
        assert_eq!(size, Size::new(50.0, 20.0));
    }

    #[test]
    fn test_layout_caches_bounds() {
        let mut switch = Switch::new();
        let bounds = Rect::new(10.0, 20.0, 44.0, 24.0);
        let result = switch.layout(bounds);
        assert_eq!(result.size, Size::new(44.0, 24.0));
        assert_eq!(Widget::bounds(&switch), bounds);
    }

    // ===== Thumb Geometry Tests =====

    #[test]
    fn test_thumb_radius_derives_from_height() {
        let switch = laid_out(Switch::new().track_height(24.0));
        assert_eq!(switch.thumb_radius(), 10.0); // 24/2 - 2

        let tall = laid_out(Switch::new().track_height(48.0));
        assert_eq!(tall.thumb_radius(), 22.0); // 48/2 - 2
    }

    #[test]
    fn test_thumb_center_off_is_left() {
        let switch = laid_out(Switch::new().track_width(44.0).track_height(24.0));
        assert_eq!(switch.thumb_center(), Point::new(12.0, 12.0));
    }

    #[test]
    fn test_thumb_center_on_is_right() {
        let switch = laid_out(
            Switch::new()
                .on(true)
                .track_width(44.0)
                .track_height(24.0),
        );
        assert_eq!(switch.thumb_center(), Point::new(32.0, 12.0));
    }

    #[test]
    fn test_wider_track_moves_on_thumb_further_right() {
        let narrow = laid_out(Switch::new().on(true).track_width(44.0));
        let wide = laid_out(Switch::new().on(true).track_width(80.0));
        assert!(wide.thumb_center().x > narrow.thumb_center().x);
    }

    // ===== Paint Tests =====

    #[test]
    fn test_paint_track_then_thumb() {
        let switch = laid_out(Switch::new());
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        assert_eq!(canvas.command_count(), 2);
        assert!(matches!(canvas.commands()[0], DrawCommand::Rect { .. }));
        assert!(matches!(canvas.commands()[1], DrawCommand::Circle { .. }));
    }

    #[test]
    fn test_paint_track_off_color() {
        let switch = laid_out(Switch::new());
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        match &canvas.commands()[0] {
            DrawCommand::Rect { style, .. } => {
                assert_eq!(style.fill, Some(SwitchColor::Blue.colors().track_off));
            }
            _ => panic!("Expected Rect command for track"),
        }
    }

    #[test]
    fn test_paint_track_on_color_follows_palette() {
        let switch = laid_out(Switch::new().on(true).palette(SwitchColor::Red));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        match &canvas.commands()[0] {
            DrawCommand::Rect { style, .. } => {
                assert_eq!(style.fill, Some(SwitchColor::Red.colors().track_on));
            }
            _ => panic!("Expected Rect command for track"),
        }
    }

    #[test]
    fn test_paint_disabled_track_is_desaturated() {
        let switch = laid_out(Switch::new().on(true).disabled(true));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        let expected = SwitchColor::Blue
            .colors()
            .track_on
            .desaturate(DISABLED_DESATURATION);
        match &canvas.commands()[0] {
            DrawCommand::Rect { style, .. } => assert_eq!(style.fill, Some(expected)),
            _ => panic!("Expected Rect command for track"),
        }
    }

    #[test]
    fn test_paint_track_radius_is_half_height() {
        let switch = laid_out(Switch::new().track_height(30.0));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        match &canvas.commands()[0] {
            DrawCommand::Rect { radius, .. } => assert_eq!(radius.top_left, 15.0),
            _ => panic!("Expected Rect command for track"),
        }
    }

    #[test]
    fn test_paint_thumb_scales_with_height() {
        let small = laid_out(Switch::new().track_height(24.0));
        let large = laid_out(Switch::new().track_height(48.0));

        let radius_of = |switch: &Switch| {
            let mut canvas = RecordingCanvas::new();
            switch.paint(&mut canvas);
            match &canvas.commands()[1] {
                DrawCommand::Circle { radius, .. } => *radius,
                _ => panic!("Expected Circle command for thumb"),
            }
        };

        assert_eq!(radius_of(&small), 10.0);
        assert_eq!(radius_of(&large), 22.0);
    }

    #[test]
    fn test_paint_state_text_when_on() {
        let switch = laid_out(Switch::new().on(true).on_text("ON").off_text("OFF"));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        // track, text, thumb
        assert_eq!(canvas.command_count(), 3);
        match &canvas.commands()[1] {
            DrawCommand::Text { content, .. } => assert_eq!(content, "ON"),
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_paint_state_text_when_off() {
        let switch = laid_out(Switch::new().on_text("ON").off_text("OFF"));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        match &canvas.commands()[1] {
            DrawCommand::Text { content, .. } => assert_eq!(content, "OFF"),
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_paint_no_text_commands_without_labels() {
        let switch = laid_out(Switch::new());
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        assert!(!canvas
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { .. })));
    }

    #[test]
    fn test_paint_on_text_sits_left_of_thumb() {
        let switch = laid_out(
            Switch::new()
                .on(true)
                .on_text("ON")
                .track_width(44.0)
                .track_height(24.0),
        );
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        match &canvas.commands()[1] {
            DrawCommand::Text { position, .. } => {
                assert!(position.x < switch.thumb_center().x);
            }
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_paint_yellow_state_text_is_black() {
        let switch = laid_out(Switch::new().on(true).on_text("ON").palette(SwitchColor::Yellow));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        match &canvas.commands()[1] {
            DrawCommand::Text { style, .. } => assert_eq!(style.color, Color::BLACK),
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_paint_focused_adds_focus_ring() {
        let mut switch = laid_out(Switch::new());
        switch.event(&Event::FocusIn);

        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        // track, thumb, ring
        assert_eq!(canvas.command_count(), 3);
        match &canvas.commands()[2] {
            DrawCommand::Rect { style, .. } => {
                assert!(style.fill.is_none());
                assert!(style.stroke.is_some());
            }
            _ => panic!("Expected Rect command for focus ring"),
        }
    }

    #[test]
    fn test_paint_position_follows_layout() {
        let mut switch = Switch::new();
        switch.layout(Rect::new(100.0, 50.0, 44.0, 24.0));

        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        match &canvas.commands()[0] {
            DrawCommand::Rect { bounds, .. } => {
                assert_eq!(bounds.x, 100.0);
                assert_eq!(bounds.y, 50.0);
            }
            _ => panic!("Expected Rect command for track"),
        }
    }

    // ===== Event Tests =====

    #[test]
    fn test_click_toggles() {
        let mut switch = laid_out(Switch::new());

        let result = switch.event(&left_click(22.0, 12.0));
        assert!(switch.is_on());
        let msg = result.unwrap().downcast::<SwitchChanged>().unwrap();
        assert!(msg.on);

        let result = switch.event(&left_click(22.0, 12.0));
        assert!(!switch.is_on());
        let msg = result.unwrap().downcast::<SwitchChanged>().unwrap();
        assert!(!msg.on);
    }

    #[test]
    fn test_click_outside_track_no_effect() {
        let mut switch = laid_out(Switch::new());
        let result = switch.event(&left_click(100.0, 100.0));
        assert!(result.is_none());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_right_click_no_effect() {
        let mut switch = laid_out(Switch::new());
        let result = switch.event(&Event::MouseDown {
            position: Point::new(22.0, 12.0),
            button: MouseButton::Right,
        });
        assert!(result.is_none());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_disabled_click_no_effect() {
        let mut switch = laid_out(Switch::new().disabled(true));
        let result = switch.event(&left_click(22.0, 12.0));
        assert!(result.is_none());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_read_only_click_no_effect() {
        let mut switch = laid_out(Switch::new().read_only(true));
        let result = switch.event(&left_click(22.0, 12.0));
        assert!(result.is_none());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_click_with_offset_bounds() {
        let mut switch = Switch::new();
        switch.layout(Rect::new(100.0, 50.0, 44.0, 24.0));

        let result = switch.event(&left_click(122.0, 62.0));
        assert!(result.is_some());
        assert!(switch.is_on());
    }

    #[test]
    fn test_space_toggles_when_focused() {
        let mut switch = laid_out(Switch::new());
        switch.event(&Event::FocusIn);

        let result = switch.event(&Event::KeyDown { key: Key::Space });
        assert!(result.is_some());
        assert!(switch.is_on());
    }

    #[test]
    fn test_enter_toggles_when_focused() {
        let mut switch = laid_out(Switch::new());
        switch.event(&Event::FocusIn);

        let result = switch.event(&Event::KeyDown { key: Key::Enter });
        assert!(result.is_some());
        assert!(switch.is_on());
    }

    #[test]
    fn test_space_without_focus_no_effect() {
        let mut switch = laid_out(Switch::new());
        let result = switch.event(&Event::KeyDown { key: Key::Space });
        assert!(result.is_none());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_other_keys_no_effect() {
        let mut switch = laid_out(Switch::new());
        switch.event(&Event::FocusIn);

        let result = switch.event(&Event::KeyDown { key: Key::Tab });
        assert!(result.is_none());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_disabled_space_no_effect() {
        let mut switch = laid_out(Switch::new().disabled(true));
        switch.event(&Event::FocusIn);
        let result = switch.event(&Event::KeyDown { key: Key::Space });
        assert!(result.is_none());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_read_only_space_no_effect() {
        let mut switch = laid_out(Switch::new().read_only(true));
        switch.event(&Event::FocusIn);
        let result = switch.event(&Event::KeyDown { key: Key::Space });
        assert!(result.is_none());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_focus_tracking() {
        let mut switch = laid_out(Switch::new());
        assert!(!switch.is_focused());

        switch.event(&Event::FocusIn);
        assert!(switch.is_focused());

        switch.event(&Event::FocusOut);
        assert!(!switch.is_focused());
    }

    #[test]
    fn test_hover_tracking() {
        let mut switch = laid_out(Switch::new());
        assert!(!switch.is_hovered());

        switch.event(&Event::MouseEnter);
        assert!(switch.is_hovered());

        switch.event(&Event::MouseLeave);
        assert!(!switch.is_hovered());
    }

    #[test]
    fn test_disabling_drops_focus() {
        let mut switch = laid_out(Switch::new());
        switch.event(&Event::FocusIn);
        switch.set_disabled(true);
        assert!(!switch.is_focused());
    }

    #[test]
    fn test_read_only_still_focusable() {
        let mut switch = laid_out(Switch::new().read_only(true));
        switch.event(&Event::FocusIn);
        assert!(switch.is_focused());
        assert!(switch.is_focusable());
    }

    // ===== Widget Trait Tests =====

    #[test]
    fn test_type_id() {
        let switch = Switch::new();
        assert_eq!(Widget::type_id(&switch), TypeId::of::<Switch>());
    }

    #[test]
    fn test_is_interactive() {
        assert!(Switch::new().is_interactive());
        assert!(!Switch::new().disabled(true).is_interactive());
        assert!(!Switch::new().read_only(true).is_interactive());
    }

    #[test]
    fn test_is_focusable() {
        assert!(Switch::new().is_focusable());
        assert!(!Switch::new().disabled(true).is_focusable());
    }

    #[test]
    fn test_accessible_role_is_switch() {
        assert_eq!(Switch::new().accessible_role(), AccessibleRole::Switch);
    }

    #[test]
    fn test_accessible_name_falls_back_to_state_text() {
        let switch = Switch::new().off_text("Off");
        assert_eq!(Widget::accessible_name(&switch), Some("Off"));

        let switch = Switch::new().on(true).on_text("Active").off_text("Off");
        assert_eq!(Widget::accessible_name(&switch), Some("Active"));
    }

    #[test]
    fn test_accessible_name_none_without_labels() {
        assert_eq!(Widget::accessible_name(&Switch::new()), None);
    }

    #[test]
    fn test_children_empty() {
        assert!(Switch::new().children().is_empty());
    }

    // ===== Serde Tests =====

    #[test]
    fn test_serde_round_trip_preserves_state() {
        let switch = Switch::new()
            .on(true)
            .read_only(true)
            .palette(SwitchColor::Purple)
            .on_text("yes");

        let json = serde_json::to_string(&switch).expect("serialize");
        let back: Switch = serde_json::from_str(&json).expect("deserialize");

        assert!(back.is_on());
        assert!(back.is_read_only());
        assert_eq!(back.get_palette(), SwitchColor::Purple);
        assert_eq!(back.get_on_text(), "yes");
    }

    #[test]
    fn test_serde_skips_transient_state() {
        let mut switch = laid_out(Switch::new());
        switch.event(&Event::FocusIn);

        let json = serde_json::to_string(&switch).expect("serialize");
        let back: Switch = serde_json::from_str(&json).expect("deserialize");

        assert!(!back.is_focused());
        assert_eq!(Widget::bounds(&back), Rect::default());
    }
}
