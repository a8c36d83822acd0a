#[cfg(feature = "client")]
mod client;
mod error;
mod form;
mod submission;

#[cfg(feature = "client")]
pub use client::*;
pub use error::*;
pub use form::*;
pub use submission::*;
