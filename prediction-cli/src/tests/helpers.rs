//! Test helpers for writing spot catalogs to temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Three land spots and one boat spot with distinct conditions.
pub(super) const COASTAL_CATALOG: &str = r#"{
  "spots": [
    {"id": "bondi", "name": "Bondi", "lat": -33.89, "lon": 151.27, "mode": "land",
     "distance_km": 3.0, "access": "beach", "base_score": 0.8,
     "mock_wind_kph": 18.0, "mock_temp_c": 21.0, "mock_wave_m": 1.2},
    {"id": "clovelly", "name": "Clovelly", "lat": -33.91, "lon": 151.26, "mode": "land",
     "distance_km": 5.0, "access": "rocks", "base_score": 0.9,
     "mock_wind_kph": 8.0, "mock_temp_c": 20.0, "mock_wave_m": 0.3},
    {"id": "harbour", "name": "Harbour", "lat": -33.85, "lon": 151.22, "mode": "boat",
     "distance_km": 2.0, "access": "ramp", "base_score": 0.6},
    {"id": "cronulla", "name": "Cronulla", "lat": -34.05, "lon": 151.15, "mode": "land",
     "distance_km": 26.0, "access": "beach", "base_score": 1.0,
     "mock_wind_kph": 4.0, "mock_temp_c": 20.0, "mock_wave_m": 0.2}
  ]
}"#;

/// A catalog holding only land spots.
pub(super) const LAND_ONLY_CATALOG: &str = r#"{"spots": [
    {"id": "bare", "name": "Bare Island", "lat": -33.99, "lon": 151.23, "mode": "land",
     "distance_km": 12.4, "access": "shore"}
]}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// A temporary directory holding a catalog file.
#[derive(Debug)]
pub(super) struct CatalogDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl CatalogDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}
