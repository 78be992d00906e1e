// src/handlers/mod.rs

pub mod comment;
pub mod user;
pub mod video;
