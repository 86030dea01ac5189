#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod converter;
mod error;
mod launch;
mod probe;
mod types;

pub use crate::converter::{ConverterCache, NoopConverterCache, PlatformConverterCache};
#[cfg(target_os = "aix")]
pub use crate::converter::PaseConverterCache;
pub use crate::error::{LaunchError, LaunchResult};
pub use crate::launch::Launcher;
pub use crate::probe::ComponentProbe;
pub use crate::types::*;
