use std::path::PathBuf;

use almanac_domain::Almanac;
use almanac_ports::AlmanacLoader;
use almanac_shared_kernel::Result;

use crate::{parser::parse_almanac, persistence::FileReader};

#[derive(Debug, Clone)]
enum Origin {
    Path(PathBuf),
    Text { name: String, text: String },
}

/// Loads an almanac written in the plain-text format, from a file or from
/// text already in memory (e.g. read from stdin).
#[derive(Debug, Clone)]
pub struct TextAlmanacLoader {
    origin: Origin,
}

impl TextAlmanacLoader {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { origin: Origin::Path(path.into()) }
    }

    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { origin: Origin::Text { name: name.into(), text: text.into() } }
    }
}

impl AlmanacLoader for TextAlmanacLoader {
    fn load(&self) -> Result<Almanac> {
        match &self.origin {
            Origin::Path(path) => {
                log::debug!("reading {}", path.display());
                let text = FileReader::read_to_string(path)?;
                parse_almanac(&text)
            }
            Origin::Text { text, .. } => parse_almanac(text),
        }
    }

    fn describe(&self) -> String {
        match &self.origin {
            Origin::Path(path) => path.display().to_string(),
            Origin::Text { name, .. } => name.clone(),
        }
    }
}
