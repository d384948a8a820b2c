mod document;
mod legend;
mod popup;
mod style;
mod view;

pub use document::LanguageMap;
pub use view::MapView;
