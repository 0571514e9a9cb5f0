//! Game states and the stack that runs them.
pub mod guistate;
pub mod stack;
