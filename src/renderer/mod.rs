//! Rendering geometry
//!
//! Produces device-space shapes; painting them is left to the host canvas.

pub mod shapes;

pub use shapes::{Arrow, Circle, DrawList, Rect, arrow, ring_draw_list};
