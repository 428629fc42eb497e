//! Enums used as keys for the columns of the input and output tables.
use strum_macros::{EnumIter, IntoStaticStr};

/// The columns of a level line, in the order they appear in the raw sounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum LevelField {
    /// Pressure (hPa)
    #[strum(serialize = "PRES")]
    Pressure,
    /// Geopotential height (m)
    #[strum(serialize = "HGHT")]
    Height,
    /// Temperature (C)
    #[strum(serialize = "TEMP")]
    Temperature,
    /// Dew point (C)
    #[strum(serialize = "DWPT")]
    DewPoint,
    /// Relative humidity (%)
    #[strum(serialize = "RELH")]
    RelativeHumidity,
    /// Mixing ratio (g/kg)
    #[strum(serialize = "MIXR")]
    MixingRatio,
    /// Wind direction (deg)
    #[strum(serialize = "DRCT")]
    WindDirection,
    /// Wind speed (knots)
    #[strum(serialize = "SPED")]
    WindSpeed,
    /// Potential temperature (K)
    #[strum(serialize = "THTA")]
    Theta,
    /// Equivalent potential temperature (K)
    #[strum(serialize = "THTE")]
    ThetaE,
    /// Virtual potential temperature (K)
    #[strum(serialize = "THTV")]
    ThetaV,
}

/// The columns of the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum TableColumn {
    /// Calendar year
    Year,
    /// Day of the year
    DayOfYear,
    /// Synoptic hour (UTC)
    Hour,
    /// Station latitude (deg)
    Latitude,
    /// Station longitude (deg)
    Longitude,
    /// Height of the lowest usable level (m)
    SurfaceHeight,
    /// Precipitable water vapor (mm)
    #[strum(serialize = "PWV")]
    PrecipitableWater,
    /// Zenith wet delay (m)
    #[strum(serialize = "ZWD")]
    ZenithWetDelay,
    /// Zenith total delay (m)
    #[strum(serialize = "ZTD")]
    ZenithTotalDelay,
}

impl LevelField {
    /// Column marker as it appears in the header row.
    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl TableColumn {
    /// Column name in the header row of the result table.
    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_level_field_order() {
        let names: Vec<&str> = LevelField::iter().map(LevelField::name).collect();
        assert_eq!(
            names,
            vec!["PRES", "HGHT", "TEMP", "DWPT", "RELH", "MIXR", "DRCT", "SPED", "THTA", "THTE", "THTV"]
        );
    }

    #[test]
    fn test_table_column_names() {
        let names: Vec<&str> = TableColumn::iter().map(TableColumn::name).collect();
        assert_eq!(
            names,
            vec![
                "Year",
                "DayOfYear",
                "Hour",
                "Latitude",
                "Longitude",
                "SurfaceHeight",
                "PWV",
                "ZWD",
                "ZTD"
            ]
        );
    }
}
