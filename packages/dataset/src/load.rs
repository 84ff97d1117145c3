//! CSV decoding for the Global Terrorism Database export.
//!
//! Only the columns the dashboard uses are decoded; everything else in the
//! export is ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use terror_insights_incident_models::Incident;

use crate::DataLoadError;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "iyear",
    "imonth",
    "iday",
    "region_txt",
    "country_txt",
    "provstate",
    "city",
    "attacktype1_txt",
    "natlty1_txt",
    "targtype1_txt",
    "weaptype1_txt",
    "gname",
    "nkill",
    "latitude",
    "longitude",
];

/// Raw CSV row as it appears in the export.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "iyear")]
    year: i32,
    #[serde(rename = "imonth")]
    month: Option<u8>,
    #[serde(rename = "iday")]
    day: Option<u8>,
    #[serde(rename = "region_txt")]
    region: String,
    #[serde(rename = "country_txt")]
    country: String,
    #[serde(rename = "provstate")]
    subregion: String,
    #[serde(rename = "city")]
    locality: String,
    #[serde(rename = "attacktype1_txt")]
    attack_type: String,
    #[serde(rename = "natlty1_txt")]
    target_nationality: String,
    #[serde(rename = "targtype1_txt")]
    target_type: String,
    #[serde(rename = "weaptype1_txt")]
    weapon_type: String,
    #[serde(rename = "gname")]
    organization: String,
    #[serde(rename = "nkill")]
    fatalities: Option<f64>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl From<CsvRow> for Incident {
    fn from(row: CsvRow) -> Self {
        Self {
            year: row.year,
            // The export uses 0 for an unknown month or day.
            month: row.month.filter(|m| (1..=12).contains(m)),
            day: row.day.filter(|d| (1..=31).contains(d)),
            region: row.region,
            country: row.country,
            subregion: row.subregion,
            locality: row.locality,
            attack_type: row.attack_type,
            target_nationality: row.target_nationality,
            target_type: row.target_type,
            weapon_type: row.weapon_type,
            organization: row.organization,
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fatalities: row
                .fatalities
                .filter(|n| n.is_finite() && *n >= 0.0)
                .map(|n| n.round() as u32),
            latitude: row.latitude.filter(|v| v.is_finite()),
            longitude: row.longitude.filter(|v| v.is_finite()),
        }
    }
}

/// Reads every incident from the CSV file at `path`.
///
/// # Errors
///
/// * [`DataLoadError::Io`] if the file cannot be opened
/// * [`DataLoadError::MissingColumn`] if a required column is absent
/// * [`DataLoadError::Csv`] if the file is not valid CSV or a row fails to decode
pub fn read_incidents(path: &Path) -> Result<Vec<Incident>, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_incidents_from(file)
}

/// Reads every incident from an arbitrary CSV source.
///
/// # Errors
///
/// * [`DataLoadError::MissingColumn`] if a required column is absent
/// * [`DataLoadError::Csv`] if the input is not valid CSV or a row fails to decode
pub fn read_incidents_from(input: impl Read) -> Result<Vec<Incident>, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataLoadError::MissingColumn {
                column: (*column).to_owned(),
            });
        }
    }

    let mut incidents = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        incidents.push(Incident::from(result?));
    }

    log::debug!("Decoded {} incident rows", incidents.len());

    Ok(incidents)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "eventid,iyear,imonth,iday,region_txt,country_txt,provstate,city,\
        attacktype1_txt,natlty1_txt,targtype1_txt,weaptype1_txt,gname,nkill,latitude,longitude";

    #[test]
    fn decodes_rows_and_normalizes_unknowns() {
        let csv = format!(
            "{HEADER}\n\
             1,1990,0,0,South Asia,India,Punjab,Amritsar,Bombing/Explosion,India,Police,Explosives,Unknown,2.0,31.63,74.87\n\
             2,1991,4,12,Western Europe,France,,,Assassination,,Government (General),Firearms,ETA,,,\n"
        );

        let incidents = read_incidents_from(csv.as_bytes()).unwrap();
        assert_eq!(incidents.len(), 2);

        let first = &incidents[0];
        assert_eq!(first.year, 1990);
        assert_eq!(first.month, None);
        assert_eq!(first.day, None);
        assert_eq!(first.subregion, "Punjab");
        assert_eq!(first.fatalities, Some(2));
        assert_eq!(first.latitude, Some(31.63));

        let second = &incidents[1];
        assert_eq!(second.month, Some(4));
        assert_eq!(second.day, Some(12));
        assert_eq!(second.subregion, "");
        assert_eq!(second.locality, "");
        assert_eq!(second.target_nationality, "");
        assert_eq!(second.fatalities, None);
        assert_eq!(second.longitude, None);
    }

    #[test]
    fn rejects_missing_column() {
        let csv = "iyear,imonth,iday\n1990,1,1\n";
        let err = read_incidents_from(csv.as_bytes()).unwrap_err();
        assert!(
            matches!(err, DataLoadError::MissingColumn { ref column } if column == "region_txt"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn rejects_undecodable_row() {
        let csv = format!(
            "{HEADER}\n1,nineteen,1,1,Asia,India,,,Armed Assault,,,,X,,,\n"
        );
        let err = read_incidents_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::Csv(_)), "unexpected error: {err}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("terror_insights_does_not_exist.csv");
        let err = read_incidents(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }), "unexpected error: {err}");
    }
}
