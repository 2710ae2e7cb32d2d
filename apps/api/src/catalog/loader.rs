//! CSV catalog loader.
//!
//! Reads the internship table once, maps source headers onto the canonical
//! posting attributes and derives `id`, `type`, `sector` and `tags`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::posting::{parse_tags, Posting, PostingType, DEFAULT_SECTOR};
use crate::catalog::Catalog;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: id '{value}' is not an integer")]
    InvalidId { row: usize, value: String },
}

const CANONICAL_COLUMNS: &[&str] = &[
    "id", "title", "company", "location", "stipend", "duration", "tags", "sector",
];

/// Names that are derived or produced downstream and never passed through
/// from the source as extra columns.
const RESERVED_COLUMNS: &[&str] = &["type", "score", "missing_skills_with_resources"];

/// Loads the catalog from a CSV file on disk.
pub fn load(path: &Path) -> Result<Catalog, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let catalog = from_reader(file, path.display().to_string())?;

    info!(
        "Catalog loaded: {} postings from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Parses a catalog from any CSV byte stream. `source` labels the catalog
/// in health output and logs.
pub fn from_reader<R: Read>(reader: R, source: impl Into<String>) -> Result<Catalog, LoadError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnMap::resolve(&headers)?;

    let mut postings = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        postings.push(columns.build_posting(row, &record)?);
    }

    debug!("Parsed {} catalog rows", postings.len());
    Ok(Catalog::new(postings, source))
}

/// Maps a source header onto its canonical attribute name.
fn canonical_column(header: &str) -> String {
    let header = header.trim().to_lowercase();
    match header.as_str() {
        "internship" => "title".to_string(),
        "company_name" => "company".to_string(),
        "skills" => "tags".to_string(),
        _ => header,
    }
}

/// Column positions of the canonical attributes within a source record.
#[derive(Debug)]
struct ColumnMap {
    id: Option<usize>,
    title: usize,
    company: usize,
    location: usize,
    stipend: usize,
    duration: usize,
    tags: Option<usize>,
    sector: Option<usize>,
    extra: Vec<(usize, String)>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let mut positions: BTreeMap<String, usize> = BTreeMap::new();
        let mut extra = Vec::new();

        for (idx, header) in headers.iter().enumerate() {
            let name = canonical_column(header);
            if name.is_empty() || positions.contains_key(&name) {
                continue;
            }
            if CANONICAL_COLUMNS.contains(&name.as_str()) {
                positions.insert(name, idx);
            } else if !RESERVED_COLUMNS.contains(&name.as_str()) {
                positions.insert(name.clone(), idx);
                extra.push((idx, name));
            }
        }

        let require = |name: &'static str| {
            positions
                .get(name)
                .copied()
                .ok_or(LoadError::MissingColumn(name))
        };

        Ok(ColumnMap {
            id: positions.get("id").copied(),
            title: require("title")?,
            company: require("company")?,
            location: require("location")?,
            stipend: require("stipend")?,
            duration: require("duration")?,
            tags: positions.get("tags").copied(),
            sector: positions.get("sector").copied(),
            extra,
        })
    }

    fn build_posting(&self, row: usize, record: &StringRecord) -> Result<Posting, LoadError> {
        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();

        let id = match self.id {
            Some(idx) => {
                let value = field(idx);
                value
                    .parse::<i64>()
                    .map_err(|_| LoadError::InvalidId { row, value })?
            }
            None => row as i64,
        };

        let stipend = field(self.stipend);
        let posting_type = PostingType::from_stipend(&stipend);

        let sector = self
            .sector
            .map(field)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SECTOR.to_string());

        let tags = self
            .tags
            .map(|idx| parse_tags(&field(idx)))
            .unwrap_or_default();

        let extra = self
            .extra
            .iter()
            .map(|(idx, name)| (name.clone(), field(*idx)))
            .collect();

        Ok(Posting {
            id,
            title: field(self.title),
            company: field(self.company),
            location: field(self.location),
            stipend,
            duration: field(self.duration),
            tags,
            posting_type,
            sector,
            extra,
        })
    }
}
