#![warn(missing_docs)]
//! Precipitable water vapor and zenith tropospheric delays from radiosonde soundings.
//!
//! A sounding is the text listing of one balloon launch, a header row followed by one line per
//! level with pressure, height, temperature, humidity, wind, and potential temperatures. Each
//! sounding is parsed, quality controlled, turned into refractivity level by level, and then
//! integrated over height or pressure.
//!
//! The batch driver visits every sounding of a station over a range of years and months, skips
//! the ones that are missing or unusable, and writes one table row per processed sounding.

//
// API
//
pub use crate::{
    analysis::{analyze_profile, process_sounding, ProcessedSounding, SoundingResult},
    batch::{run_batch, BatchReport, ResultSink, SoundingSource, StationProvider},
    config::RunConfig,
    constants::PhysicalConstants,
    error::{DelayError, Result},
    integration::{integrate, TroposphericDelay},
    keys::{LevelField, TableColumn},
    met_formulas::{derive_levels, DerivedLevel},
    parse::parse_profile,
    quality::filter_profile,
    sounding::{LevelRecord, Profile, SoundingId, StationInfo},
    storage::{DirectorySink, DirectoryStore, MemorySink, MemoryStore, StationCsv},
};

#[doc(hidden)]
pub use crate::sounding::doctest;

pub mod config;
pub mod constants;
pub mod integration;
pub mod met_formulas;
pub mod quality;
pub mod storage;

//
// Internal use only
//
mod analysis;
mod batch;
mod error;
mod keys;
mod parse;
mod sounding;

#[cfg(test)]
mod utility;
