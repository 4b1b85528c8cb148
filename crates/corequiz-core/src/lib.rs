//! corequiz-core: quiz store, play loop and session controller.
//!
//! This crate holds everything the quiz program does. Terminal rendering
//! and line editing live behind the [`traits::Terminal`] trait and are
//! provided by `corequiz-cli`.

pub mod command;
pub mod error;
pub mod model;
pub mod play;
pub mod scripted;
pub mod session;
pub mod store;
pub mod traits;

pub use error::QuizError;
pub use model::{Quiz, QuizId, QuizSeed};
pub use session::{Flow, Session};
pub use store::QuizStore;
pub use traits::{Terminal, Tone};
