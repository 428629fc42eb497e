//! Parse the text listing of a sounding into a `Profile`.
//!
//! The listing is the plain text table served by upper air archives: some free form lines, a
//! header row naming the columns, and then one line per level. Lines that don't parse as a level
//! are common (units rows, separators, levels with blank columns) and are skipped.

use crate::{
    keys::LevelField,
    sounding::{LevelRecord, Profile},
};
use log::debug;

/// Does this line name the columns of the level table?
#[inline]
pub fn is_header_line(line: &str) -> bool {
    line.contains(LevelField::Pressure.name()) && line.contains(LevelField::Height.name())
}

/// Parse the raw text of one sounding.
///
/// Everything up to and including the first header row is ignored. Every non-empty line after it
/// that parses into a `LevelRecord` becomes a level, in order. If no header row is found the
/// profile is empty.
///
/// # Examples
///
/// ```rust
/// use sounding_tropo::parse_profile;
///
/// let text = "\
/// 11035 Wien Observations at 12Z 01 Jul 2024
/// -----------------------------------------------------------------------------
///    PRES   HGHT   TEMP   DWPT   RELH   MIXR   DRCT   SKNT   THTA   THTE   THTV
///     hPa     m      C      C      %    g/kg    deg   knot     K      K      K
/// -----------------------------------------------------------------------------
///  1000.0    110   21.6   17.6     78  12.81    235      6  294.0  331.3  296.3
///   993.0    200   24.2   15.2     57  10.95    240      9  297.3  329.4  299.3
///   925.0    834   NaN    NaN     NaN   NaN     265     18  NaN    NaN    NaN
/// ";
///
/// let prof = parse_profile(text);
/// assert_eq!(prof.len(), 3);
///
/// assert!(parse_profile("no table here").is_empty());
/// ```
pub fn parse_profile(text: &str) -> Profile {
    let mut lines = text.lines();

    // Skip past the header, if there is no header the iterator is exhausted.
    if lines.by_ref().find(|line| is_header_line(line)).is_none() {
        debug!("no PRES/HGHT header row found");
        return Profile::new();
    }

    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match line.parse::<LevelRecord>() {
            Ok(level) => Some(level),
            Err(err) => {
                debug!("dropped line: {}", err);
                None
            }
        })
        .collect()
}
