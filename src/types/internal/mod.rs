// Internal types - never serialized to API clients
pub mod auth;
