//! Line-delimited transport.
//!
//! Framing codec, reader pipeline, and the request/response server loop.

pub mod codec;
pub mod pipeline;
pub mod server;
