use std::path::PathBuf;

/// Default location of the task file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "./data/nether.txt";

/// Command words understood by the parser. Matching is case-insensitive, so
/// these are stored lowercase.
#[derive(Debug, Clone)]
pub struct Keywords {
    pub list: String,
    pub todo: String,
    pub deadline: String,
    pub event: String,
    pub mark: String,
    pub unmark: String,
    pub delete: String,
    /// Every word that ends the session.
    pub exit: Vec<String>,
}

impl Default for Keywords {
    fn default() -> Self {
        Keywords {
            list: "list".into(),
            todo: "todo".into(),
            deadline: "deadline".into(),
            event: "event".into(),
            mark: "mark".into(),
            unmark: "unmark".into(),
            delete: "delete".into(),
            exit: vec!["bye".into(), "exit".into()],
        }
    }
}

/// Immutable settings shared by the parser and the storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub keywords: Keywords,
}

impl Config {
    /// Builds a config with the default keywords.
    ///
    /// `data_file` falls back to [`DEFAULT_DATA_FILE`] when `None`.
    pub fn new(data_file: Option<PathBuf>) -> Config {
        Config {
            data_file: data_file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            keywords: Keywords::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(None)
    }
}
