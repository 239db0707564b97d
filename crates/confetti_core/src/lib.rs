pub mod config;
pub mod constants;
pub mod error;
pub mod presets;
pub mod types;

pub use config::{ConfettiConfig, Origin, OriginConfig, ResolvedConfig};
pub use constants::*;
pub use error::ConfettiError;
pub use types::*;
