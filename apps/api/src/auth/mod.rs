//! Authentication and role-based authorization.
//!
//! Every protected handler takes a [`Principal`] extractor argument and calls
//! [`authz::require`] before touching the store. Nothing is cached between
//! requests: the account is reloaded from the bearer token each time.

pub mod authz;
pub mod handlers;
pub mod password;
pub mod principal;
pub mod token;

pub use authz::{require, Operation};
pub use principal::Principal;
pub use token::TokenKeys;
