pub mod entity;

pub use entity::{Movie, MovieDraft};
