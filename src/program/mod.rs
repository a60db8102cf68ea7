//! This module contains the pipeline that runs the chain importer over every chain file of a
//! directory, one file after the other.
//!
//! # Example
//!
//! ```no_run
//! use chain_importer::{AccountGroup, ChainFilePipeline, MemoryDataStore, Pipeline};
//!
//! let store = MemoryDataStore::new();
//! let mut pipeline = ChainFilePipeline::new(&store, ".", AccountGroup::Default);
//! for report in pipeline.run()? {
//!     println!("{} -> {}", report.file.display(), report.chain_id);
//! }
//! # Ok::<(), chain_importer::ImportError>(())
//! ```
mod importer;

pub use importer::alias_variants;
pub use importer::ChainImporter;
pub use importer::ImportOutcome;
pub use importer::SkipReason;

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::{discover_chain_files, AccountGroup, ChainId, DataStore, ImportError};

/// A file that produced a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub file: PathBuf,
    pub chain_id: ChainId,
    pub inserted: usize,
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.file.file_name().map(Path::new).unwrap_or(self.file.as_path());
        write!(
            f,
            "File {}: Created chain {} with {} accounts",
            name.display(),
            self.chain_id,
            self.inserted
        )
    }
}

/// Trait for defining a pipeline.
pub trait Pipeline {
    /// Runs the pipeline.
    ///
    /// # Returns
    ///
    /// The chains created, in processing order, or the first error that stopped the run.
    fn run(&mut self) -> Result<Vec<ImportReport>, ImportError>;
}

/// Imports every `chain-*.txt` file of a directory into one group.
#[derive(Debug)]
pub struct ChainFilePipeline<'a, S> {
    dir: PathBuf,
    group: AccountGroup,
    importer: ChainImporter<'a, S>,
}

impl<'a, S: DataStore> ChainFilePipeline<'a, S> {
    pub fn new(store: &'a S, dir: impl Into<PathBuf>, group: AccountGroup) -> Self {
        ChainFilePipeline {
            dir: dir.into(),
            group,
            importer: ChainImporter::new(store),
        }
    }
}

impl<S: DataStore> Pipeline for ChainFilePipeline<'_, S> {
    fn run(&mut self) -> Result<Vec<ImportReport>, ImportError> {
        let files = discover_chain_files(&self.dir).map_err(|source| ImportError::Discovery {
            path: self.dir.display().to_string(),
            source,
        })?;
        debug!("Found {} chain files in {}", files.len(), self.dir.display());

        let mut reports = vec![];
        for file in files {
            if let ImportOutcome::Created { chain_id, inserted } =
                self.importer.import_file(&file, self.group)?
            {
                reports.push(ImportReport {
                    file,
                    chain_id,
                    inserted,
                });
            }
        }
        Ok(reports)
    }
}
