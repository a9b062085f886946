//! HR Pillar Common Library
//!
//! 職務記述を標準HR職務カタログに照合し、COE/BP/SSC の分布を求める。
//! UIに依存しない中核ロジックで、CLIから利用される。

pub mod aggregate;
pub mod analyzer;
pub mod catalog;
pub mod error;
pub mod export;
pub mod matcher;
pub mod pillar;
pub mod similarity;
pub mod stop_words;
pub mod tfidf;
pub mod tokenizer;
pub mod translate;

pub use aggregate::{dominant_pillar, tally, PillarTally};
pub use analyzer::{analyze, analyze_with, parse_input_lines, AnalysisReport, AnalyzeOptions};
pub use catalog::{Catalog, CatalogEntry};
pub use error::{Error, Result};
pub use matcher::{match_responsibilities, MatchOptions, MatchResult};
pub use pillar::{Pillar, PillarScores};
pub use tokenizer::StopWords;
pub use translate::{Locale, PassthroughTranslator, Translator};
