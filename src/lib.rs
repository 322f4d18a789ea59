pub use client::{LcuClient, LiveClient};
pub use error::{CasterError, Result};

pub mod client;
pub mod commentator;
pub mod config;
pub mod context;
pub mod driver;
pub mod error;
pub mod format;
pub mod model;
pub mod speech;
pub mod summary;
