//! Scan orchestration: single passes and the scheduler that drives them.

pub mod runtime;
pub mod scheduler;

pub use runtime::*;
pub use scheduler::*;
