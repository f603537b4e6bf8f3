//! Widget implementations for the Conmutar switch.
//!
//! The crate splits the form control into three layers:
//! - [`Switch`]: the visual widget (track, thumb, state text, interaction)
//! - [`HiddenCheckbox`]: the native-checkbox mirror that carries the form value
//! - [`SwitchElement`]: the element surface keeping markup attributes, typed
//!   properties, and the checkbox in two-way sync

pub mod element;
pub mod form;
pub mod palette;
pub mod switch;

pub use element::SwitchElement;
pub use form::{HiddenCheckbox, DEFAULT_VALUE};
pub use palette::{PaletteColors, PaletteParseError, SwitchColor};
pub use switch::{Switch, SwitchChanged, DEFAULT_TRACK_HEIGHT, DEFAULT_TRACK_WIDTH};
