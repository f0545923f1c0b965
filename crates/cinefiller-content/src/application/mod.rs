//! Application services that combine repository access with domain lookups.

pub mod query_handlers;
