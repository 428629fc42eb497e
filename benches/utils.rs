use sounding_tropo::{SoundingId, StationInfo};
use std::{fs, path::PathBuf};

pub fn load_all_test_files() -> Vec<(SoundingId, String)> {
    [(1, 0), (1, 12), (2, 0)]
        .iter()
        .map(|&(day, hour)| {
            let id = SoundingId::new(2024, 7, day, hour).expect("bad date");
            (id, load_test_file(id))
        })
        .collect()
}

pub fn station() -> StationInfo {
    StationInfo::new("11035", (48.25, 16.36))
}

fn load_test_file(id: SoundingId) -> String {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push("RS11035");
    test_path.push("2024");
    test_path.push("07");
    test_path.push(format!("RS11035{}.txt", id.file_key()));

    fs::read_to_string(&test_path).expect(&format!("Error reading file: {:#?}", test_path))
}
