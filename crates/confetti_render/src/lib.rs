pub mod particles;
pub mod plugin;

pub use plugin::ConfettiRenderPlugin;
