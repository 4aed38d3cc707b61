//! API Lambda handlers and request processing

pub mod create_group;
pub mod get_groups;
pub mod helpers;
pub mod pagination;
pub mod parsing;

// Re-export the handlers for the thin bins
pub use create_group::handler as create_group_handler;
pub use get_groups::handler as get_groups_handler;
