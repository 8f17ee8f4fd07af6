//! Concrete game definitions built on the engine.

pub mod standard;
