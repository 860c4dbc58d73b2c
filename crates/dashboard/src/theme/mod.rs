//! Visual mode state
//!
//! Two independent flags (dark/light, glass/flat), persisted in the
//! key-value store, plus the palette each combination renders with and the
//! document-level marker that styling outside the view tree keys off.

mod marker;
mod palette;
mod state;

pub use marker::{DocumentAttributes, DocumentMarker, DocumentTheme};
pub use palette::Palette;
pub use state::ThemeState;
