pub mod render;

pub use render::{display_summary, render_summary};
