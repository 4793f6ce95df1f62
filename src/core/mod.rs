//! Core domain: data model, mock generators, normalization, storage,
//! validation, and the external Kolosal client.

pub mod generator;
pub mod kolosal;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod stats;
pub mod store;
pub mod validation;
