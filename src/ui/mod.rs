//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Draw functions for each view mode
//! - `theme.rs` - Color themes and presets
//! - `layout.rs` - 3x3 grid geometry
//! - `cell.rs` - Grid cell widget
//! - `viewport.rs` - Orientation guard

mod draw;
pub mod cell;
pub mod layout;
pub mod theme;
pub mod viewport;

// Re-export main draw function
pub use draw::draw;
