//! Process every sounding of a station over a calendar range.
//!
//! Where the soundings and station metadata come from, and where the results go, is up to the
//! implementations of `SoundingSource`, `StationProvider`, and `ResultSink`. See the `storage`
//! module for the file based ones.

use crate::{
    analysis::{process_sounding, ProcessedSounding, SoundingResult},
    config::RunConfig,
    error::{DelayError, Result},
    sounding::{SoundingId, StationInfo},
};
use log::{info, warn};

/// Looks up station metadata.
pub trait StationProvider {
    /// The station with this identifier, or `DelayError::UnknownStation`.
    fn station(&self, id: &str) -> Result<StationInfo>;
}

/// Looks up the raw text of soundings.
pub trait SoundingSource {
    /// The raw text of the sounding, `Ok(None)` if there is no such sounding.
    fn fetch(&self, station: &str, id: SoundingId) -> Result<Option<String>>;
}

/// Receives the output of a run.
pub trait ResultSink {
    /// Store the wet refractivity profile of one sounding.
    fn write_wet_refractivity(&mut self, station: &str, id: SoundingId, values: &[f64])
        -> Result<()>;

    /// Store the result table of the run.
    fn write_table(&mut self, rows: &[SoundingResult]) -> Result<()>;
}

/// What happened during a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Rows in the order they were produced.
    pub rows: Vec<SoundingResult>,
    /// Soundings not available from the source.
    pub missing: usize,
    /// Soundings with too little usable data.
    pub rejected: usize,
    /// Soundings that failed for any other reason.
    pub failed: usize,
}

impl BatchReport {
    /// Number of soundings that made it into the table.
    #[inline]
    pub fn processed(&self) -> usize {
        self.rows.len()
    }

    /// Number of soundings looked for.
    #[inline]
    pub fn attempted(&self) -> usize {
        self.processed() + self.missing + self.rejected + self.failed
    }

    fn record(&mut self, station: &str, id: SoundingId, outcome: Result<SoundingResult>) {
        match outcome {
            Ok(row) => self.rows.push(row),
            Err(err) if err.is_data_gap() => {
                if let DelayError::MissingInput(_) = err {
                    self.missing += 1;
                } else {
                    self.rejected += 1;
                }
                info!("Skipping {} {}: {}", station, id, err);
            }
            Err(err) => {
                self.failed += 1;
                warn!("Error processing {} {}: {}", station, id, err);
            }
        }
    }
}

fn fetch_and_process<S>(
    source: &S,
    station: &StationInfo,
    id: SoundingId,
    cfg: &RunConfig,
) -> Result<ProcessedSounding>
where
    S: SoundingSource + ?Sized,
{
    let text = source
        .fetch(station.id(), id)?
        .ok_or(DelayError::MissingInput(id))?;

    process_sounding(&text, id, station, &cfg.constants)
}

/// Run the pipeline over every sounding of the configured grid.
///
/// A sounding that is missing or fails is logged and counted, it never stops the run. The run
/// fails only for a bad configuration, an unknown station, or when the table can't be written.
/// If no sounding made it through, no table is written.
pub fn run_batch<P, S, K>(
    cfg: &RunConfig,
    stations: &P,
    source: &S,
    sink: &mut K,
) -> Result<BatchReport>
where
    P: StationProvider + ?Sized,
    S: SoundingSource + ?Sized,
    K: ResultSink + ?Sized,
{
    cfg.validate()?;
    let station = stations.station(&cfg.station_id)?;

    let mut report = BatchReport::default();

    for id in cfg.sounding_ids() {
        let outcome = fetch_and_process(source, &station, id, cfg).map(|snd| {
            // The row stands even if the auxiliary output can't be stored.
            if let Err(err) = sink.write_wet_refractivity(station.id(), id, &snd.wet_refractivity)
            {
                warn!("Could not store wet refractivity of {} {}: {}", station.id(), id, err);
            }
            snd.result
        });

        report.record(station.id(), id, outcome);
    }

    if report.rows.is_empty() {
        info!("No data processed.");
    } else {
        sink.write_table(&report.rows)?;
        info!(
            "Processed {} of {} soundings ({} missing, {} rejected, {} failed).",
            report.processed(),
            report.attempted(),
            report.missing,
            report.rejected,
            report.failed
        );
    }

    Ok(report)
}
