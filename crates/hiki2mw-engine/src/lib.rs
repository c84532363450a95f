pub mod analyze;
pub mod convert;
pub mod io;
pub mod patterns;

// Re-export key types for easier usage
pub use analyze::{
    AnalyzeError, LinkAnalyzer, LinkEntry, LinkReport, Mode, analyze, analyze_links_hiki,
    analyze_links_mediawiki,
};
pub use convert::{ConvertOptions, Converter, convert};
pub use io::*;
