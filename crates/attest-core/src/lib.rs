//! # attest-core
//!
//! Core types and error types for Attest.
//!
//! This crate provides the foundational types shared across all Attest crates:
//! - Entity structs for checklists and checklist items
//! - The checklist item status enum and the "counts as complete" predicate
//! - Strongly typed checklist and item identifiers
//! - Cross-cutting error types
//! - Request and response payloads exchanged with the HTTP API

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod requests;
pub mod responses;
