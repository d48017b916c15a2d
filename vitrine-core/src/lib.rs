#![warn(missing_docs)]
//! # vitrine-core
//!
//! Core types and traits for the Vitrine offline caching agent.
//!
//! This crate provides the foundational abstractions that keep the agent
//! **host-agnostic** and **testable**. It defines the types the dispatcher
//! operates on and the traits that host-service adapters (network fetch,
//! background execution) must implement.
//!
//! ## Architecture
//!
//! The agent reacts to host-dispatched events with short async routines
//! over a key-value snapshot store. This crate provides:
//!
//! - **Identify** cached resources ([`ResourceKey`])
//! - **Describe** intercepted requests ([`ResourceRequest`], [`Destination`])
//! - **Store** response copies ([`ResponseSnapshot`])
//! - **Name** cache generations ([`CacheName`])
//! - **Reach** the live network ([`Fetch`])
//! - **Detach** background refreshes ([`Offload`])

pub mod fetch;
pub mod key;
pub mod name;
pub mod offload;
pub mod request;
pub mod response;

pub use fetch::{Fetch, FetchError};
pub use key::ResourceKey;
pub use name::CacheName;
pub use offload::{DisabledOffload, Offload};
pub use request::{Destination, ResourceRequest};
pub use response::ResponseSnapshot;
