//! Loading the four static datasets from disk or over HTTP.

use super::types::{Civilization, Era, Leader};
use serde::de::DeserializeOwned;
use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default per-request timeout for HTTP dataset loads
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Relative path of the leader dataset
pub const LEADERS_PATH: &str = "leaders/leaders.json";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("{path} is not a valid dataset: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the JSON datasets live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A local directory laid out as `leaders/leaders.json`, `antiquity/antiquity.json`, ...
    Directory(PathBuf),
    /// A base URL serving the same layout
    Url(String),
}

impl DataSource {
    /// Human-readable location of one dataset inside this source.
    pub fn location(&self, relative: &str) -> String {
        match self {
            DataSource::Directory(dir) => dir.join(relative).display().to_string(),
            DataSource::Url(base) => format!("{}/{}", base.trim_end_matches('/'), relative),
        }
    }
}

/// Relative path of an era's dataset
pub fn era_path(era: Era) -> String {
    format!("{0}/{0}.json", era.key())
}

/// Everything loaded at startup. Lists that failed to load stay empty.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub leaders: Vec<Leader>,
    pub antiquity: Vec<Civilization>,
    pub exploration: Vec<Civilization>,
    pub modern: Vec<Civilization>,
}

impl Datasets {
    pub fn civilizations(&self, era: Era) -> &[Civilization] {
        match era {
            Era::Antiquity => &self.antiquity,
            Era::Exploration => &self.exploration,
            Era::Modern => &self.modern,
        }
    }

    pub fn find_leader(&self, id: &str) -> Option<&Leader> {
        self.leaders.iter().find(|l| l.id == id)
    }

    pub fn find_civilization(&self, era: Era, id: &str) -> Option<&Civilization> {
        self.civilizations(era).iter().find(|c| c.id == id)
    }
}

/// Something with a display name the lists are sorted by.
pub trait Named {
    fn display_name(&self) -> &str;
}

impl Named for Leader {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Named for Civilization {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Reads and parses datasets from a [`DataSource`].
pub struct DatasetLoader {
    source: DataSource,
    agent: ureq::Agent,
}

impl DatasetLoader {
    pub fn new(source: DataSource) -> Self {
        Self::with_timeout(source, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    pub fn with_timeout(source: DataSource, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("civpath/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { source, agent }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Load and sort a single dataset.
    pub fn load_dataset<T>(&self, relative: &str) -> Result<Vec<T>, DataError>
    where
        T: DeserializeOwned + Named,
    {
        let location = self.source.location(relative);
        let body = match &self.source {
            DataSource::Directory(_) => fs::read_to_string(&location).map_err(|source| {
                DataError::Io {
                    path: location.clone(),
                    source,
                }
            })?,
            DataSource::Url(_) => self
                .agent
                .get(&location)
                .call()
                .map_err(|e| DataError::Http {
                    url: location.clone(),
                    source: Box::new(e),
                })?
                .into_string()
                .map_err(|source| DataError::Io {
                    path: location.clone(),
                    source,
                })?,
        };

        let mut items: Vec<T> = serde_json::from_str(&body).map_err(|source| DataError::Json {
            path: location.clone(),
            source,
        })?;
        sort_by_name(&mut items);
        Ok(items)
    }

    /// Load all four datasets. Each load is independent: a failure is logged
    /// and leaves that list empty without affecting the others.
    pub fn load_all(&self) -> Datasets {
        let mut datasets = Datasets {
            leaders: self.load_or_empty("leaders", LEADERS_PATH),
            ..Default::default()
        };
        for era in Era::ALL {
            let civs = self.load_or_empty(era.key(), &era_path(era));
            match era {
                Era::Antiquity => datasets.antiquity = civs,
                Era::Exploration => datasets.exploration = civs,
                Era::Modern => datasets.modern = civs,
            }
        }
        datasets
    }

    fn load_or_empty<T>(&self, label: &str, relative: &str) -> Vec<T>
    where
        T: DeserializeOwned + Named,
    {
        match self.load_dataset(relative) {
            Ok(items) => {
                tracing::info!(dataset = label, count = items.len(), "Loaded dataset");
                items
            }
            Err(err) => {
                tracing::error!(dataset = label, error = %err, "Failed to load {} dataset", label);
                Vec::new()
            }
        }
    }
}

/// Convenience wrapper for [`DatasetLoader::load_all`].
pub fn load_datasets(source: &DataSource) -> Datasets {
    DatasetLoader::new(source.clone()).load_all()
}

/// Sort by display name: case- and accent-insensitive first, raw text as tiebreaker.
pub fn sort_by_name<T: Named>(items: &mut [T]) {
    items.sort_by(|a, b| compare_names(a.display_name(), b.display_name()));
}

/// Locale-friendly name comparison.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.chars().flat_map(fold_char).collect()
}

/// Fold a character to a lowercase base letter for ordering purposes.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' => 'a',
        'ç' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'È' | 'É' | 'Ê' | 'Ë' | 'Ē' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' => 'i',
        'ñ' | 'Ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' => 'u',
        'ý' | 'ÿ' | 'Ý' => 'y',
        other => other,
    };
    base.to_lowercase()
}
