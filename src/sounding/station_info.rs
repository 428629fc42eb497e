/// Station identification and location.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StationInfo {
    /// WMO station identifier, eg "11035"
    id: String,
    /// Latitude and longitude in degrees.
    location: (f64, f64),
}

impl StationInfo {
    /// Create a new `StationInfo` object.
    ///
    /// # Arguments
    /// id: The station identifier as used by the data source.
    ///
    /// location: The latitude and longitude as a tuple, in degrees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_tropo::StationInfo;
    ///
    /// let stn = StationInfo::new("11035", (48.25, 16.36));
    /// assert_eq!(stn.id(), "11035");
    /// assert_eq!(stn.latitude(), 48.25);
    /// assert_eq!(stn.longitude(), 16.36);
    /// ```
    #[inline]
    pub fn new<S: Into<String>>(id: S, location: (f64, f64)) -> Self {
        StationInfo {
            id: id.into(),
            location,
        }
    }

    /// Station identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latitude and longitude.
    #[inline]
    pub fn location(&self) -> (f64, f64) {
        self.location
    }

    /// Latitude in degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.location.0
    }

    /// Longitude in degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.location.1
    }
}
