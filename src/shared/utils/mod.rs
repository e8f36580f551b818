pub mod dates;
pub mod images;
pub mod matching;

pub use dates::{format_date, parse_date};
pub use images::{select_image, HasImages, ImageKind};
pub use matching::{best_match, normalize_title};
