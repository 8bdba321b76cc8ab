pub mod bot;
pub mod chunking;
pub mod config;
pub mod error;
pub mod fetchlyrics;
pub mod lyrics;

pub use bot::run;
