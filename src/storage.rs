//! File and in-memory implementations of the batch collaborators.
//!
//! The directory layout follows the one used by the sounding download scripts:
//!
//! ```text
//! <root>/RS<station>.csv                                  station coordinates
//! <root>/RS<station>/<YYYY>/<MM>/RS<station><yyddd><hh>.txt  one sounding
//! ```
//!
//! where `yy` is the two digit year, `ddd` the day of the year and `hh` the hour.

use crate::{
    analysis::SoundingResult,
    batch::{ResultSink, SoundingSource, StationProvider},
    error::{DelayError, Result},
    keys::TableColumn,
    sounding::{SoundingId, StationInfo},
};
use log::debug;
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};
use strum::IntoEnumIterator;

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(DelayError::io(path, err)),
    }
}

/// Soundings stored as text files in a directory tree.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store rooted at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        DirectoryStore { root: root.into() }
    }

    /// Where the sounding is expected to be.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::path::Path;
    /// use sounding_tropo::{DirectoryStore, SoundingId};
    ///
    /// let store = DirectoryStore::new("data");
    /// let id = SoundingId::new(2024, 7, 1, 12).unwrap();
    /// assert_eq!(
    ///     store.sounding_path("11035", id),
    ///     Path::new("data/RS11035/2024/07/RS110352418312.txt")
    /// );
    /// ```
    pub fn sounding_path(&self, station: &str, id: SoundingId) -> PathBuf {
        self.root
            .join(format!("RS{}", station))
            .join(format!("{}", id.year()))
            .join(format!("{:02}", id.month()))
            .join(format!("RS{}{}.txt", station, id.file_key()))
    }
}

impl SoundingSource for DirectoryStore {
    fn fetch(&self, station: &str, id: SoundingId) -> Result<Option<String>> {
        let path = self.sounding_path(station, id);
        let text = read_optional(&path)?;
        if text.is_none() {
            debug!("no file {}", path.display());
        }
        Ok(text)
    }
}

/// Soundings kept in memory, keyed by station and id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    soundings: HashMap<(String, SoundingId), String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Add or replace a sounding.
    pub fn insert<S: Into<String>, T: Into<String>>(&mut self, station: S, id: SoundingId, text: T) {
        self.soundings.insert((station.into(), id), text.into());
    }
}

impl SoundingSource for MemoryStore {
    fn fetch(&self, station: &str, id: SoundingId) -> Result<Option<String>> {
        Ok(self.soundings.get(&(station.to_owned(), id)).cloned())
    }
}

/// Station coordinates from `RS<station>.csv` files with a `Station_ID,Latitude,Longitude` header.
#[derive(Debug, Clone)]
pub struct StationCsv {
    root: PathBuf,
}

impl StationCsv {
    /// Look for station files in `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        StationCsv { root: root.into() }
    }

    /// Path of the station file.
    pub fn station_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("RS{}.csv", id))
    }
}

impl StationProvider for StationCsv {
    fn station(&self, id: &str) -> Result<StationInfo> {
        let path = self.station_path(id);
        let text = read_optional(&path)?.ok_or_else(|| DelayError::UnknownStation(id.to_owned()))?;
        parse_station_csv(&text, id)
    }
}

/// Parse the station coordinates from the text of a station csv. The first data row is used.
///
/// # Examples
///
/// ```rust
/// use sounding_tropo::storage::parse_station_csv;
///
/// let text = "Station_ID,Latitude,Longitude\n11035,48.25,16.36\n";
/// let stn = parse_station_csv(text, "11035").unwrap();
/// assert_eq!(stn.location(), (48.25, 16.36));
/// ```
pub fn parse_station_csv(text: &str, id: &str) -> Result<StationInfo> {
    let bad = |msg: &str| DelayError::InvalidConfig(format!("station file for {}: {}", id, msg));

    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let header: Vec<&str> = lines
        .next()
        .ok_or_else(|| bad("empty file"))?
        .split(',')
        .map(str::trim)
        .collect();
    let column = |name: &str| {
        header
            .iter()
            .position(|&col| col == name)
            .ok_or_else(|| bad(&format!("no {} column", name)))
    };
    let lat_col = column("Latitude")?;
    let lon_col = column("Longitude")?;

    let row: Vec<&str> = lines
        .next()
        .ok_or_else(|| DelayError::UnknownStation(id.to_owned()))?
        .split(',')
        .map(str::trim)
        .collect();
    let value = |col: usize, name: &str| {
        row.get(col)
            .and_then(|val| f64::from_str(val).ok())
            .ok_or_else(|| bad(&format!("bad {}", name)))
    };

    Ok(StationInfo::new(
        id,
        (value(lat_col, "latitude")?, value(lon_col, "longitude")?),
    ))
}

impl StationProvider for HashMap<String, StationInfo> {
    fn station(&self, id: &str) -> Result<StationInfo> {
        self.get(id)
            .cloned()
            .ok_or_else(|| DelayError::UnknownStation(id.to_owned()))
    }
}

fn format_value(col: TableColumn, val: f64) -> String {
    use TableColumn::*;

    match col {
        Year | DayOfYear | Hour => format!("{:.0}", val),
        Latitude | Longitude => format!("{:.4}", val),
        SurfaceHeight => format!("{:.1}", val),
        PrecipitableWater => format!("{:.3}", val),
        ZenithWetDelay | ZenithTotalDelay => format!("{:.5}", val),
    }
}

/// Format the result rows as a whitespace aligned text table with a header row.
///
/// # Examples
///
/// ```rust
/// use sounding_tropo::storage::format_table;
///
/// let table = format_table(&[]);
/// assert_eq!(
///     table.trim_end(),
///     "Year DayOfYear Hour Latitude Longitude SurfaceHeight PWV ZWD ZTD"
/// );
/// ```
pub fn format_table(rows: &[SoundingResult]) -> String {
    let cols: Vec<TableColumn> = TableColumn::iter().collect();

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    cells.push(cols.iter().map(|col| col.name().to_owned()).collect());
    for row in rows {
        cells.push(cols.iter().map(|&col| format_value(col, row.get(col))).collect());
    }

    let widths: Vec<usize> = (0..cols.len())
        .map(|i| cells.iter().map(|line| line[i].len()).max().unwrap_or(0))
        .collect();

    let mut table = String::new();
    for line in cells {
        let line: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
            .collect();
        table.push_str(&line.join(" "));
        table.push('\n');
    }

    table
}

/// Writes the table and the wet refractivity profiles to files.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    aux_dir: PathBuf,
    table_path: PathBuf,
}

impl DirectorySink {
    /// Wet refractivity files go into `aux_dir`, the table to `table_path`.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(aux_dir: P, table_path: Q) -> Self {
        DirectorySink {
            aux_dir: aux_dir.into(),
            table_path: table_path.into(),
        }
    }

    /// Path of the wet refractivity file of a sounding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::path::Path;
    /// use sounding_tropo::{DirectorySink, SoundingId};
    ///
    /// let sink = DirectorySink::new("out", "out/RS_TRP.txt");
    /// let id = SoundingId::new(2024, 7, 1, 0).unwrap();
    /// assert_eq!(
    ///     sink.wet_refractivity_path("11035", id),
    ///     Path::new("out/NW110352418300.txt")
    /// );
    /// ```
    pub fn wet_refractivity_path(&self, station: &str, id: SoundingId) -> PathBuf {
        self.aux_dir
            .join(format!("NW{}{}.txt", station, id.file_key()))
    }

    /// Path of the result table.
    pub fn table_path(&self) -> &Path {
        &self.table_path
    }
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|err| DelayError::io(dir, err))
        }
        _ => Ok(()),
    }
}

impl ResultSink for DirectorySink {
    fn write_wet_refractivity(
        &mut self,
        station: &str,
        id: SoundingId,
        values: &[f64],
    ) -> Result<()> {
        let path = self.wet_refractivity_path(station, id);
        create_parent(&path)?;

        let text: String = values.iter().map(|val| format!("{}\n", val)).collect();
        fs::write(&path, text).map_err(|err| DelayError::io(&path, err))
    }

    fn write_table(&mut self, rows: &[SoundingResult]) -> Result<()> {
        create_parent(&self.table_path)?;
        fs::write(&self.table_path, format_table(rows))
            .map_err(|err| DelayError::io(&self.table_path, err))
    }
}

/// Keeps the output in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Wet refractivity profiles by station and sounding.
    pub wet_refractivity: BTreeMap<(String, SoundingId), Vec<f64>>,
    /// The last table written.
    pub table: Option<Vec<SoundingResult>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        MemorySink::default()
    }
}

impl ResultSink for MemorySink {
    fn write_wet_refractivity(
        &mut self,
        station: &str,
        id: SoundingId,
        values: &[f64],
    ) -> Result<()> {
        self.wet_refractivity
            .insert((station.to_owned(), id), values.to_vec());
        Ok(())
    }

    fn write_table(&mut self, rows: &[SoundingResult]) -> Result<()> {
        self.table = Some(rows.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use metfor::{Meters, Mm};

    fn row() -> SoundingResult {
        SoundingResult {
            year: 2024,
            day_of_year: 183,
            hour: 12,
            latitude: 48.25,
            longitude: 16.36,
            surface_height: Meters(200.0),
            precipitable_water: Mm(9.4321),
            zwd: Meters(0.061234),
            ztd: Meters(2.374567),
        }
    }

    #[test]
    fn test_format_table() {
        let table = format_table(&[row(), row()]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].trim_start().starts_with("Year"));
        assert_eq!(lines[1], lines[2]);

        let vals: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(
            vals,
            vec!["2024", "183", "12", "48.2500", "16.3600", "200.0", "9.432", "0.06123", "2.37457"]
        );

        // Right aligned under the header.
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_parse_station_csv() {
        let stn = parse_station_csv("Station_ID,Latitude,Longitude\n11035,48.25,16.36\n", "11035")
            .unwrap();
        assert_eq!(stn.id(), "11035");
        assert_eq!(stn.latitude(), 48.25);

        // Columns found by name.
        let stn = parse_station_csv("Longitude, Latitude\n-116.2, 43.57\n", "72681").unwrap();
        assert_eq!(stn.location(), (43.57, -116.2));

        match parse_station_csv("Station_ID,Latitude,Longitude\n", "11035") {
            Err(DelayError::UnknownStation(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        match parse_station_csv("Station_ID,Lat,Lon\n11035,48.25,16.36\n", "11035") {
            Err(DelayError::InvalidConfig(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        match parse_station_csv("Station_ID,Latitude,Longitude\n11035,north,16.36\n", "11035") {
            Err(DelayError::InvalidConfig(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_memory_sink_keyed() {
        let mut sink = MemorySink::new();
        let a = SoundingId::new(2024, 7, 1, 0).unwrap();
        let b = SoundingId::new(2024, 7, 1, 12).unwrap();

        sink.write_wet_refractivity("11035", a, &[1.0, 2.0]).unwrap();
        sink.write_wet_refractivity("11035", b, &[3.0]).unwrap();
        sink.write_wet_refractivity("10868", a, &[4.0]).unwrap();

        assert_eq!(sink.wet_refractivity.len(), 3);
        assert_eq!(sink.wet_refractivity[&("11035".to_owned(), a)], vec![1.0, 2.0]);
    }
}
