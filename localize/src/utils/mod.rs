pub mod error;
pub mod language;

pub use error::LocalizeError;
pub use language::{
    Resolution, browser_languages, resolve_and_rewrite, resolve_language, rewrite_path,
    url_language,
};
