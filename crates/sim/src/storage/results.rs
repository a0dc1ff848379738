use crate::errors::StorageError;
use crate::simulation::{SimulationConfig, Statistics};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// A finished job: the configuration it ran with and its count block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsFile {
    pub config: SimulationConfig,
    pub statistics: Statistics,
}

impl ResultsFile {
    pub fn new(config: SimulationConfig, statistics: Statistics) -> Self {
        Self { config, statistics }
    }

    /// Write as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let file = File::create(path)?;
        self.to_writer(BufWriter::new(file))
    }

    pub fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), StorageError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a results file and check that the block matches its
    /// configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StorageError> {
        let results: Self = serde_json::from_reader(reader)?;
        results.check_shape()?;
        Ok(results)
    }

    fn check_shape(&self) -> Result<(), StorageError> {
        let expected = (
            self.config.runs,
            self.config.years,
            self.config.num_classes(),
        );
        let found = self.statistics.shape();
        if found != expected || self.statistics.as_slice().len() != self.config.statistics_len() {
            return Err(StorageError::ShapeMismatch { expected, found });
        }
        Ok(())
    }
}

/// Write `statistics` as CSV with one `run,year,class,count` line per cell.
pub fn write_csv<W: Write>(statistics: &Statistics, mut writer: W) -> io::Result<()> {
    writeln!(writer, "run,year,class,count")?;
    let (runs, years, classes) = statistics.shape();
    for run in 0..runs {
        for year in 0..=years {
            let row = statistics.row(run, year);
            for class in 0..classes {
                writeln!(writer, "{run},{year},{class},{}", row[class])?;
            }
        }
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demography::VitalRate;
    use crate::simulation::Simulation;

    fn finished() -> ResultsFile {
        let config = SimulationConfig::new(
            vec![3, 1],
            vec![VitalRate::fixed(1.0); 2],
            vec![VitalRate::fixed(0.0); 2],
            2,
            1,
        )
        .with_seed(5);
        let mut sim = Simulation::new(config.clone()).unwrap();
        sim.run();
        ResultsFile::new(config, sim.into_statistics())
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let results = finished();

        results.save(&path).unwrap();
        let loaded = ResultsFile::load(&path).unwrap();
        assert_eq!(loaded, results);
    }

    #[test]
    fn test_load_rejects_mismatched_shape() {
        let mut results = finished();
        results.config.years = 7;
        let mut buf = Vec::new();
        results.to_writer(&mut buf).unwrap();

        let err = ResultsFile::from_reader(buf.as_slice()).unwrap_err();
        assert!(matches!(err, StorageError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_write_csv() {
        let results = finished();
        let mut buf = Vec::new();
        write_csv(&results.statistics, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "run,year,class,count");
        // 1 run x 3 year slots x 2 classes
        assert_eq!(lines.len(), 1 + 6);
        assert_eq!(lines[1], "0,0,0,3");
        assert_eq!(lines[2], "0,0,1,1");
        // Class 1 is the last class: those individuals age out in year 1.
        assert_eq!(lines[3], "0,1,0,0");
        assert_eq!(lines[4], "0,1,1,3");
    }
}
