// src/matching/mod.rs

pub mod name;
pub mod reconcile;
