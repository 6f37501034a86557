//! Test helpers for writing point-of-interest lists into temporary data
//! directories.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;
use waystop_data::{GAS_STATIONS_FILE, HOTELS_FILE, REST_STOPS_FILE};

use crate::recommend::RecommendArgs;

pub(super) const CSV_HEADER: &str = "name,@lat,@lon,type\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write test file");
}

/// A temporary data directory holding the three default lists.
///
/// Gas stations sit one and two degrees of longitude east of the origin, a
/// rest stop half a degree north, and a hotel and motel three and four
/// degrees east.
pub(super) struct DataDir {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl DataDir {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let data = Self { _tmp: tmp, root };
        data.write_list(
            GAS_STATIONS_FILE,
            &["Chevron,0.0,1.0,fuel", ",0.0,2.0,fuel"],
        );
        data.write_list(REST_STOPS_FILE, &["Vista Point,0.5,0.0,rest"]);
        data.write_list(
            HOTELS_FILE,
            &["Roadside Inn,0.0,3.0,hotel", ",0.0,4.0,motel"],
        );
        data
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write_list(&self, file_name: &str, rows: &[&str]) {
        let mut contents = String::from(CSV_HEADER);
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        write_utf8(&self.root.join(file_name), contents.as_bytes());
    }

    pub(super) fn remove(&self, file_name: &str) {
        fs::remove_file(self.root.join(file_name)).expect("remove test file");
    }
}

/// Arguments for a traveller at the origin with a 300 mile range.
pub(super) fn args_at_origin(data: &DataDir) -> RecommendArgs {
    RecommendArgs {
        lat: Some(0.0),
        lon: Some(0.0),
        fuel_range: Some(300.0),
        hours_driven: Some(1.0),
        night: Some("no".to_owned()),
        data_dir: Some(data.root().to_path_buf()),
        ..RecommendArgs::default()
    }
}
