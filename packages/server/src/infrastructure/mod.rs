//! Infrastructure layer: repository implementations, wire DTOs and the hint catalog.

pub mod dto;
pub mod hint_catalog;
pub mod repository;
