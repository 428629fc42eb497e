use sounding_tropo::{SoundingId, StationInfo};
use std::{fs, path::PathBuf};

pub fn test_data_dir() -> PathBuf {
    PathBuf::from("test_data")
}

pub fn vienna() -> StationInfo {
    StationInfo::new("11035", (48.25, 16.36))
}

pub fn id(day: u32, hour: u32) -> SoundingId {
    SoundingId::new(2024, 7, day, hour).unwrap()
}

pub fn load_test_file(id: SoundingId) -> String {
    let path = test_data_dir()
        .join("RS11035")
        .join("2024")
        .join("07")
        .join(format!("RS11035{}.txt", id.file_key()));

    fs::read_to_string(&path).unwrap_or_else(|err| panic!("Error reading {:#?}: {}", path, err))
}

#[allow(unused_macros)] // False alarm
macro_rules! test_file {
    ($test_name:ident, $day:expr, $hour:expr, $levels:expr) => {
        #[test]
        fn $test_name() {
            let id = utils::id($day, $hour);
            let text = utils::load_test_file(id);

            let prof = sounding_tropo::parse_profile(&text);
            let filtered = sounding_tropo::filter_profile(&prof);
            assert_eq!(filtered.len(), $levels);

            let consts = sounding_tropo::PhysicalConstants::default();
            let snd = sounding_tropo::process_sounding(&text, id, &utils::vienna(), &consts)
                .expect("processing failed");

            let row = snd.result;
            assert_eq!(row.day_of_year, id.day_of_year());
            assert_eq!(row.hour, $hour);
            assert_eq!(row.surface_height.0, 200.0);
            assert!(row.precipitable_water.0 > 5.0 && row.precipitable_water.0 < 60.0);
            assert!(row.zwd.0 > 0.03 && row.zwd.0 < 0.5);
            assert!(row.ztd.0 > 2.0 && row.ztd.0 < 2.7);
            assert_eq!(snd.wet_refractivity.len(), $levels);

            // Wet refractivity falls off with height.
            assert!(snd.wet_refractivity[0] > snd.wet_refractivity[$levels - 1]);
        }
    };
}
