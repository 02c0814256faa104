//! Listing page parser: `#papers .paper` markers into [`PaperRecord`]s.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::selector::compile_static_selector;

use super::PaperRecord;

static PAPER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_static_selector("#papers .paper"));
static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("a"));
static DATETIME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector(".dt"));
static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector(".title"));
static JOURNAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_static_selector(".journal"));
static AUTHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector(".author"));
static YEAR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector(".year"));

/// Parses a listing page into one record per marker, in document order.
///
/// Nothing is filtered: a marker with no link or no text fields still yields a
/// record with empty strings, so output index `i` always matches marker `i`.
#[must_use]
pub fn parse_listing(html: &str, base_origin: &str) -> Vec<PaperRecord> {
    let document = Html::parse_document(html);
    document
        .select(&PAPER_SELECTOR)
        .map(|paper| parse_paper(paper, base_origin))
        .collect()
}

fn parse_paper(paper: ElementRef<'_>, base_origin: &str) -> PaperRecord {
    let href = paper
        .select(&LINK_SELECTOR)
        .next()
        .and_then(|link| link.value().attr("href"));

    let (doi, detail_url) = match href {
        Some(href) => (
            strip_leading_char(href).to_string(),
            format!("{base_origin}{href}"),
        ),
        None => (String::new(), String::new()),
    };

    PaperRecord {
        doi,
        datetime: field_text(paper, &DATETIME_SELECTOR),
        title: field_text(paper, &TITLE_SELECTOR),
        journal: field_text(paper, &JOURNAL_SELECTOR),
        author: field_text(paper, &AUTHOR_SELECTOR),
        year: field_text(paper, &YEAR_SELECTOR),
        detail_url,
        resolved_link: None,
    }
}

/// Concatenated, trimmed text of every match inside `paper`; empty when none match.
fn field_text(paper: ElementRef<'_>, selector: &Selector) -> String {
    paper
        .select(selector)
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}

// The listing links are origin-relative ("/10.1000/xyz"); the identifier is
// the href minus its first character.
fn strip_leading_char(href: &str) -> &str {
    let mut chars = href.chars();
    chars.next();
    chars.as_str()
}
