//! Crate error type.

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[error("Difficulty registry has no profiles to choose from")]
    EmptyRegistry,
}

pub type Result<T> = core::result::Result<T, Error>;
