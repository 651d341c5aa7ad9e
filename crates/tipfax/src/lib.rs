//! Top-level facade crate for tipfax.
//!
//! Re-exports core types and the client library so users can depend on a single crate.

pub mod core {
    pub use tipfax_core::*;
}

pub mod client {
    pub use tipfax_client::*;
}
