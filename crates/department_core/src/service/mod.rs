//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into record-level APIs.
//! - Keep CLI callers decoupled from storage details.

pub mod department_service;
