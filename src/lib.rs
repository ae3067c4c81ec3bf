// src/lib.rs

//! wikilake library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod utils;
