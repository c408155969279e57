//! In-memory storage for the application's tasks.
//!
//! A store lives exactly as long as the process (or interactive session)
//! that created it. Each instance owns its own collection and id counter,
//! so two stores never see each other's tasks.

pub mod tasks;

pub use tasks::TaskStore;
