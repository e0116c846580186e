//! # study-source
//!
//! Turns raw syllabus and question bank files into clean topic and question
//! lists. Input files are plain text as students actually keep them:
//! syllabus lines with "Module 1:" style headers and comma-run topic lists,
//! question papers with numbered questions that wrap across lines.

pub mod error;
pub mod loader;
pub mod parser;

pub use error::SourceError;
pub use loader::{load_questions, load_topics, read_lines};
pub use parser::{QuestionParser, SyllabusParser};
