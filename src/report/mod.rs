pub mod csv;
pub mod svg;

pub use self::csv::{write_comparison, write_comparison_file, write_summary, write_summary_file, SUMMARY_COLUMNS, SUMMARY_HEADER};
pub use self::svg::PathOverlay;
