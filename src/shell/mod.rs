// Composition root of the consultations service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Expose them over HTTP and GraphQL.

pub mod config;
pub mod error;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
