//! Change computer implementations.
//!
//! This module provides concrete implementations of the `ChangeComputer` trait
//! for each area of an endpoint: the endpoint itself, its parameters, its
//! request body and its responses.

mod endpoints;
mod parameters;
mod request_body;
mod responses;

pub use endpoints::EndpointChangeComputer;
pub use parameters::ParameterChangeComputer;
pub use request_body::RequestBodyChangeComputer;
pub use responses::ResponseChangeComputer;
