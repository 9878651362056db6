#![forbid(unsafe_code)]

mod config;
mod dictionary;
mod error;
mod replace;
mod scanner;

pub use crate::config::DictionaryConfig;
pub use crate::dictionary::Dictionary;
pub use crate::error::{DictionaryError, DictionaryResult};
pub use crate::replace::Replacer;
pub use crate::scanner::{RawSection, SectionScanner};
