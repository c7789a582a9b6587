//! HTTP request handlers

pub mod checkpoints;
pub mod health;
pub mod search;
