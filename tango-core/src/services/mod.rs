pub mod cards;
pub mod deck;
pub mod encoding;
pub mod frequency;
pub mod input;
pub mod pipeline;
pub mod ranking;
pub mod segmenter;
pub mod summary;
