pub mod integrate;
pub mod spawn;

pub use integrate::{RenderTransform, normalize_delta, render_transform, step};
pub use spawn::spawn_burst;
