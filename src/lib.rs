// Comment Compass: comment annotation and content-idea ranking.
//
// This is the library root. Each module corresponds to a stage of the
// annotation pipeline or one of the capabilities it consumes.

pub mod comments;
pub mod config;
pub mod keywords;
pub mod language;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod sentiment;
pub mod stats;
pub mod tags;

#[cfg(feature = "web")]
pub mod web;
