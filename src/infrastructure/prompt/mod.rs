//! Prompt Implementations
//!
//! Concrete implementation of the Prompter port.

mod terminal;

pub use terminal::DialoguerPrompter;
