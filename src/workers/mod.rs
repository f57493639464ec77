//! Worker resource — model, store, and REST routes.

pub mod model;
pub mod routes;
pub mod store;

pub use store::WorkerStore;
