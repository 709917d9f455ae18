pub mod sentences;
pub mod srt;
