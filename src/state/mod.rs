//! Shared client-side state.
//!
//! DESIGN
//! ======
//! Each domain keeps a plain state struct with pure transition methods,
//! provided to the component tree as an `RwSignal` context. The async
//! functions alongside them are the only writers that talk to the backend;
//! failures propagate to the calling page, which presents them.

pub mod jobs;
pub mod session;
pub mod toast;
