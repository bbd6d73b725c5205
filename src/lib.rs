//! Tilopolis UI - declarative widget layer for the Tilopolis city builder
//!
//! Reads a JSON layout document once at startup, materializes it into a
//! registry of typed widgets, and manages visibility groups, tooltips, and
//! action dispatch inside the host's frame loop. Rendering itself is the
//! host's job, behind the [`render::Renderer`] trait.

pub mod actions;
pub mod config;
pub mod factory;
pub mod layout;
pub mod manager;
pub mod render;
pub mod widgets;

pub use actions::{EditState, TerrainEdit};
pub use config::Settings;
pub use layout::{ElementRecord, UiLayout};
pub use manager::{PointerEvent, UiManager};
pub use render::{Renderer, UiRect};
pub use widgets::Widget;
