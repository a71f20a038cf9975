pub mod generator;
pub mod model;
pub mod use_case;

pub use generator::{InputGenerator, generate};
pub use model::InputSample;
pub use use_case::UseCase;
