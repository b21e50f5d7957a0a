//! Application-level configuration.
//!
//! - [`ModelParams`]: model name and sampling settings for every request

pub mod model_params;

pub use model_params::ModelParams;
