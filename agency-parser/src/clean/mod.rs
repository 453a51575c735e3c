mod clean_words;
mod generic_clean;
mod label_cleaner;

pub use clean_words::clean_words;
pub use generic_clean::GenericClean;
pub use label_cleaner::LabelCleaner;
