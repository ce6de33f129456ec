//! HTTP Implementations
//!
//! Concrete implementation of the DeploymentApi port.

mod client;

pub use client::HttpDeploymentApi;
