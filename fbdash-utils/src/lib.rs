pub mod fs_util;
pub mod macros;

#[doc(hidden)]
pub use once_cell;
pub use scraper;
