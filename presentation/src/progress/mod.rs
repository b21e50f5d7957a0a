//! Progress display while the model is thinking

pub mod reporter;
