#[cfg(feature = "tracing")]
pub mod tracing;
