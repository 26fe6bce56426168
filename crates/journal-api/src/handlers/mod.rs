//! Route handlers, grouped by surface.

pub mod admin;
pub mod articles;
pub mod health;
pub mod pages;
pub mod submissions;
