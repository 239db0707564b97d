pub mod completion;
pub mod pipeline;
pub mod stage;

pub use completion::{Completion, CompletionState};
pub use pipeline::ConfettiSimPlugin;
pub use stage::ConfettiStage;
