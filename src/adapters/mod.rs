// Adapters layer: concrete report sinks.

pub mod sink;

pub use sink::{JsonSink, TextSink};
