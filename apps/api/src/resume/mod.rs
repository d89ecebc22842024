//! Resume ingestion — pulls plain text out of an uploaded resume and picks
//! out known skill terms to prefill the user's profile.

pub mod handlers;

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

use crate::recommender::synonyms::vocabulary;
use crate::recommender::Catalog;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Main body part inside a .docx archive.
const DOCX_BODY_PART: &str = "word/document.xml";

/// Cap on skills prefilled from a resume.
pub const MAX_EXTRACTED_SKILLS: usize = 10;
/// Terms this short are too ambiguous to pick out of free text.
const MIN_TERM_LEN: usize = 3;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("unsupported resume type '{0}', expected a PDF or DOCX file")]
    UnsupportedType(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read DOCX: {0}")]
    Docx(String),

    #[error("resume contains no extractable text")]
    NoText,
}

/// Extracts trimmed text from resume bytes of the given content type.
pub fn extract_text(content_type: &str, bytes: &[u8]) -> Result<String, ResumeError> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let text = match mime.as_str() {
        PDF_CONTENT_TYPE => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ResumeError::Pdf(e.to_string()))?,
        DOCX_CONTENT_TYPE => extract_docx_text(bytes)?,
        _ => return Err(ResumeError::UnsupportedType(content_type.to_string())),
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ResumeError::NoText);
    }
    Ok(text.to_string())
}

/// Reads the paragraphs of a .docx body, one per line. Only `w:t` runs
/// contribute text; tabs and line breaks inside a paragraph are kept.
fn extract_docx_text(bytes: &[u8]) -> Result<String, ResumeError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(docx_err)?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .map_err(docx_err)?
        .read_to_string(&mut xml)
        .map_err(docx_err)?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(docx_err)? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_text = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => current.push('\t'),
                b"br" => current.push('\n'),
                b"p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) if in_text => {
                current.push_str(&t.unescape().map_err(docx_err)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

fn docx_err(e: impl std::fmt::Display) -> ResumeError {
    ResumeError::Docx(e.to_string())
}

/// Finds known skill terms in `resume_text`, in order of first appearance,
/// capped at [`MAX_EXTRACTED_SKILLS`].
///
/// Known terms are the synonym vocabulary plus every comma-separated term in
/// the catalog's skill columns. Matching is on whole words, case-insensitive.
pub fn extract_skills(resume_text: &str, catalog: &Catalog) -> Vec<String> {
    let haystack = format!(" {} ", words(resume_text));

    let mut found: Vec<(usize, String)> = skill_vocabulary(catalog)
        .into_iter()
        .filter_map(|term| {
            haystack
                .find(&format!(" {term} "))
                .map(|position| (position, term))
        })
        .collect();

    found.sort();
    found
        .into_iter()
        .map(|(_, term)| term)
        .take(MAX_EXTRACTED_SKILLS)
        .collect()
}

fn skill_vocabulary(catalog: &Catalog) -> Vec<String> {
    let catalog_terms = catalog
        .entries()
        .iter()
        .flat_map(|e| e.skills_text.split(','))
        .map(words);

    let mut terms: Vec<String> = vocabulary()
        .map(words)
        .chain(catalog_terms)
        .filter(|t| t.len() >= MIN_TERM_LEN)
        .collect();
    terms.sort();
    terms.dedup();
    terms
}

/// Lower-cases `text` and collapses it to single-space-separated words.
/// `+` and `#` count as word characters so "c++" and "c#" survive.
fn words(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
