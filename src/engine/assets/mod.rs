// Asset loading
//
// Resolves data files relative to a base directory and reports failures
// through `AssetError`. Callers decide whether a failure is fatal; the game
// treats every asset as optional and degrades to built-in defaults.

mod loader;

pub use loader::AssetLoader;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
