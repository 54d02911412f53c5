//! Client-side state management for the student roster screen.
//!
//! [`store::RosterStore`] is the reactive model: roster snapshot, reference
//! state list, the in-progress draft, and the edit session, publishing
//! change events to any subscriber. [`table::TableController`] bridges the
//! store to a pluggable tabular-display widget and routes row actions back
//! into store operations. The only path to the server is the
//! [`gateway::StudentGateway`] seam, implemented over HTTP by
//! [`http::HttpGateway`].

pub mod draft;
pub mod gateway;
pub mod http;
pub mod store;
pub mod table;
