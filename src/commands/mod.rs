// ABOUTME: Command module aggregator for the srcd CLI.
// ABOUTME: Re-exports component, prune and runtime connection handlers.

mod components;
mod prune;
mod runtime_connection;

pub use components::{install, list, status};
pub use prune::prune;
pub use runtime_connection::connect_to_runtime;
