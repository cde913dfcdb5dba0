//! Weighted selection store for Tagweave.

pub mod store;

pub use store::{Placement, SelectionStore, WEIGHT_STEP};
