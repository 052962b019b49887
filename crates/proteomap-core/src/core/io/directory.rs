use super::svg::figures;
use super::tables::{write_category_table, write_protein_properties};
use super::traits::ReportSink;
use crate::core::composition::table::CategoryTable;
use crate::core::models::protein::ComputedProtein;
use crate::core::projection::Projection;
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

pub const FREQUENCY_TABLE_FILE: &str = "aa_frequencies_per_category.csv";
pub const ENRICHMENT_TABLE_FILE: &str = "aa_enrichment_per_category.csv";
pub const PROPERTIES_TABLE_FILE: &str = "protein_properties.csv";
pub const ENRICHMENT_HEATMAP_FILE: &str = "aa_enrichment_heatmap.svg";
pub const PROPERTY_MAP_FILE: &str = "2D_proteome_map.svg";
pub const PROJECTION_FILE: &str = "PCA_aa_frequencies.svg";

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to create output directory '{path}': {source}")]
    CreateDirectory { path: String, source: io::Error },
    #[error("File I/O error for '{path}': {source}")]
    Io { path: String, source: io::Error },
    #[error("CSV writing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Failed to render figure '{path}': {source}")]
    Render { path: String, source: fmt::Error },
}

enum ContentError {
    Io(io::Error),
    Csv(csv::Error),
    Render(fmt::Error),
}

impl From<io::Error> for ContentError {
    fn from(e: io::Error) -> Self {
        ContentError::Io(e)
    }
}

impl From<csv::Error> for ContentError {
    fn from(e: csv::Error) -> Self {
        ContentError::Csv(e)
    }
}

impl From<fmt::Error> for ContentError {
    fn from(e: fmt::Error) -> Self {
        ContentError::Render(e)
    }
}

/// Writes every report artifact as a file in one output directory.
///
/// Each file is written to a temporary file in the same directory and renamed into
/// place once complete, so a failed write leaves either the previous file or nothing.
#[derive(Debug)]
pub struct DirectorySink {
    directory: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    /// Opens `directory` as a sink, creating it and any missing parents.
    pub fn create<P: AsRef<Path>>(directory: P) -> Result<Self, SinkError> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory).map_err(|e| SinkError::CreateDirectory {
            path: directory.display().to_string(),
            source: e,
        })?;
        Ok(Self {
            directory,
            written: Vec::new(),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Paths of the files written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn persist<F>(&mut self, file_name: &str, write: F) -> Result<(), SinkError>
    where
        F: FnOnce(&mut dyn Write) -> Result<(), ContentError>,
    {
        let path = self.directory.join(file_name);
        let to_sink_error = |e: ContentError| match e {
            ContentError::Io(source) => SinkError::Io {
                path: path.display().to_string(),
                source,
            },
            ContentError::Csv(source) => SinkError::Csv {
                path: path.display().to_string(),
                source,
            },
            ContentError::Render(source) => SinkError::Render {
                path: path.display().to_string(),
                source,
            },
        };

        let mut temp =
            NamedTempFile::new_in(&self.directory).map_err(|e| to_sink_error(e.into()))?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            write(&mut writer).map_err(to_sink_error)?;
            writer.flush().map_err(|e| to_sink_error(e.into()))?;
        }
        temp.persist(&path)
            .map_err(|e| to_sink_error(e.error.into()))?;

        debug!("Wrote {:?}", &path);
        self.written.push(path);
        Ok(())
    }
}

impl ReportSink for DirectorySink {
    type Error = SinkError;

    fn write_frequencies(&mut self, table: &CategoryTable) -> Result<(), Self::Error> {
        self.persist(FREQUENCY_TABLE_FILE, |w| {
            Ok(write_category_table(table, w)?)
        })
    }

    fn write_enrichment(&mut self, table: &CategoryTable) -> Result<(), Self::Error> {
        self.persist(ENRICHMENT_TABLE_FILE, |w| {
            Ok(write_category_table(table, w)?)
        })
    }

    fn write_properties(&mut self, proteins: &[ComputedProtein]) -> Result<(), Self::Error> {
        self.persist(PROPERTIES_TABLE_FILE, |w| {
            Ok(write_protein_properties(proteins, w)?)
        })
    }

    fn render_enrichment_heatmap(&mut self, table: &CategoryTable) -> Result<(), Self::Error> {
        self.persist(ENRICHMENT_HEATMAP_FILE, |w| {
            let svg = figures::enrichment_heatmap(table)?;
            Ok(w.write_all(svg.as_bytes())?)
        })
    }

    fn render_property_map(&mut self, proteins: &[ComputedProtein]) -> Result<(), Self::Error> {
        self.persist(PROPERTY_MAP_FILE, |w| {
            let svg = figures::property_map(proteins).render()?;
            Ok(w.write_all(svg.as_bytes())?)
        })
    }

    fn render_projection(&mut self, projection: &Projection) -> Result<(), Self::Error> {
        self.persist(PROJECTION_FILE, |w| {
            let svg = figures::projection_plot(projection).render()?;
            Ok(w.write_all(svg.as_bytes())?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::composition::counts::AminoAcidCounts;
    use crate::core::composition::frequency::{FrequencyTable, normalize};
    use crate::core::models::category::Category;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn table() -> CategoryTable {
        let mut columns: BTreeMap<Category, FrequencyTable> = BTreeMap::new();
        columns.insert(
            Category::Capsid,
            normalize(&["MKV"].into_iter().collect::<AminoAcidCounts>()),
        );
        CategoryTable::assemble(&columns)
    }

    #[test]
    fn create_makes_missing_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("results/run-1");
        let sink = DirectorySink::create(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(sink.directory(), nested.as_path());
        assert!(sink.written().is_empty());
    }

    #[test]
    fn create_fails_when_path_is_a_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("occupied");
        fs::write(&file, "x").unwrap();
        let result = DirectorySink::create(file.join("sub"));
        assert!(matches!(result, Err(SinkError::CreateDirectory { .. })));
    }

    #[test]
    fn tables_are_written_under_their_fixed_names() {
        let dir = tempdir().unwrap();
        let mut sink = DirectorySink::create(dir.path()).unwrap();
        sink.write_frequencies(&table()).unwrap();
        sink.write_enrichment(&table()).unwrap();

        let content = fs::read_to_string(dir.path().join(FREQUENCY_TABLE_FILE)).unwrap();
        assert!(content.starts_with("amino_acid,envelope,membrane,capsid,other\n"));
        assert!(dir.path().join(ENRICHMENT_TABLE_FILE).is_file());
        assert_eq!(sink.written().len(), 2);
    }

    #[test]
    fn no_temporary_files_are_left_behind() {
        let dir = tempdir().unwrap();
        let mut sink = DirectorySink::create(dir.path()).unwrap();
        sink.write_frequencies(&table()).unwrap();
        sink.render_enrichment_heatmap(&table()).unwrap();

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec![ENRICHMENT_HEATMAP_FILE, FREQUENCY_TABLE_FILE]);
    }

    #[test]
    fn existing_file_is_replaced() {
        let dir = tempdir().unwrap();
        let target = dir.path().join(FREQUENCY_TABLE_FILE);
        fs::write(&target, "stale").unwrap();
        let mut sink = DirectorySink::create(dir.path()).unwrap();
        sink.write_frequencies(&table()).unwrap();
        assert!(!fs::read_to_string(&target).unwrap().contains("stale"));
    }
}
