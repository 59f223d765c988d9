//! Quire Core Types
//!
//! This crate provides the document object model targeted by the Quire
//! markup reader. It includes:
//!
//! - **Units**: lengths with their original measure ([`unit::Unit`])
//! - **Colors**: packed ARGB colors with CSS name support ([`color::Color`])
//! - **Meta**: per-type field registries and the generic
//!   [`meta::DocumentObject`] access contract
//! - **DOM**: documents, styles, sections, paragraphs, tables, shapes and
//!   charts ([`dom`] module)

pub mod color;
pub mod dom;
pub mod meta;
pub mod unit;
