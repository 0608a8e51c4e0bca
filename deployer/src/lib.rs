pub mod artifacts;
pub mod contracts;
pub mod deployments;
pub mod errors;
pub mod events;
pub mod funding;
pub mod oracle;
pub mod scripts;
pub mod signer;
pub mod verify;

mod builder;
pub use crate::builder::*;

mod env;
pub use crate::env::*;
