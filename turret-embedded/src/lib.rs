#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod stepper;
pub mod vision;

pub use error::*;
pub use stepper::*;
