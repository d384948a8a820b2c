mod dominant;
mod resolver;
mod table;

pub use dominant::dominant;
pub use resolver::resolve;
pub use table::{Language, LanguageFilter, Share};

#[cfg(test)]
pub use table::lookup;
