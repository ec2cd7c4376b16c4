//! Typed wrappers around the rental contracts.
//!
//! - [`Azrael`] - collateralised rentals
//! - [`Whoopi`] - collateral-free rentals with revenue share
//!
//! Every wrapper method returns a [`ContractCall`] that submits exactly one
//! transaction when awaited.

mod azrael;
mod call;
mod whoopi;

pub use azrael::Azrael;
pub use call::{CallOptions, ContractCall};
pub use whoopi::Whoopi;
