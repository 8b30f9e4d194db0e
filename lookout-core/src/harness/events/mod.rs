//! Event models for supported agent harnesses

pub mod cursor;
