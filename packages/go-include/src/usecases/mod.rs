//! Usecase layer

pub mod transform;

pub use transform::{transform, transform_file, Assembly, IncludeTransformer, GENERATED_HEADER};
