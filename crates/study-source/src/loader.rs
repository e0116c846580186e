//! File loading helpers.

use std::fs;
use std::path::Path;

use tracing::info;

use study_types::Topic;

use crate::error::SourceError;
use crate::parser::{QuestionParser, SyllabusParser};

/// Read a text file into trimmed, non-empty lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Load and parse a syllabus file into topic labels.
///
/// # Errors
///
/// [`SourceError::NoEntries`] when parsing yields no topics; a syllabus with
/// nothing in it is always a user mistake worth surfacing.
pub fn load_topics(path: &Path) -> Result<Vec<Topic>, SourceError> {
    let text = read_file(path)?;
    let topics = SyllabusParser::new().parse(&text);
    if topics.is_empty() {
        return Err(SourceError::NoEntries(path.to_path_buf()));
    }
    info!(path = %path.display(), topics = topics.len(), "Loaded syllabus");
    Ok(topics)
}

/// Load and parse a question paper file into question texts.
///
/// # Errors
///
/// [`SourceError::NoEntries`] when the file parses to nothing; callers that
/// want to run without a question bank should not pass a file at all.
pub fn load_questions(path: &Path) -> Result<Vec<String>, SourceError> {
    let text = read_file(path)?;
    let questions = QuestionParser::new().parse(&text);
    if questions.is_empty() {
        return Err(SourceError::NoEntries(path.to_path_buf()));
    }
    info!(path = %path.display(), questions = questions.len(), "Loaded question bank");
    Ok(questions)
}

fn read_file(path: &Path) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
