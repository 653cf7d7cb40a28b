//! Data models for the contact registry.

pub mod contact;

pub use contact::{Contact, ContactRef, NewContact};
