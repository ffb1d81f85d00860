//! Brain-view visualization graph
//!
//! Projects a [`crate::notes::BrainView`] neighborhood into the node/edge
//! shape a force-layout renderer consumes. The projection is pure: no I/O,
//! no errors, same output for the same input.

pub mod models;
pub mod projection;

pub use models::{BrainGraph, EndpointRef, GraphLink, GraphNode, LinkKind, NodeGroup};
pub use projection::project;
