//! Rule-based sentiment classification over short texts.
//!
//! A [`Lexicon`](engine::Lexicon) is compiled once into single-token and
//! phrase patterns; a [`Pipeline`](pipeline::Pipeline) then normalizes,
//! tokenizes, matches and aggregates each input into a
//! [`Classification`](engine::Classification).

pub mod app;
pub mod engine;
pub mod input;
pub mod pipeline;
pub mod reading;
pub mod repl;

pub use engine::{Classification, EngineConfig, Label, Lexicon, Registration};
pub use pipeline::{Pipeline, Report};
