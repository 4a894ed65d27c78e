pub mod locale;

pub use locale::{RequestLanguage, locale_middleware};
