use crate::domain::model::{
    PaperRecord, ProfileRecord, H_INDEX_NOT_FOUND, I10_INDEX_NOT_FOUND, NAME_NOT_FOUND,
    NO_CITATIONS, NO_LINK, NO_TITLE, UNKNOWN_YEAR,
};
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const DEFAULT_LINK_BASE: &str = "https://scholar.google.com";

/// 只保留這個區間內的年度引用數（含頭尾）。
pub const YEAR_WINDOW: RangeInclusive<i32> = 2020..=2024;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

static NAME: LazyLock<Selector> = LazyLock::new(|| selector("div#gsc_prf_in"));
static SUMMARY_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td.gsc_rsb_std"));
static GRAPH: LazyLock<Selector> = LazyLock::new(|| selector("div#gsc_rsb_cit"));
static GRAPH_YEAR: LazyLock<Selector> = LazyLock::new(|| selector("span.gsc_g_t"));
static GRAPH_COUNT: LazyLock<Selector> = LazyLock::new(|| selector("span.gsc_g_al"));
static PAPER_ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr.gsc_a_tr"));
static PAPER_TITLE: LazyLock<Selector> = LazyLock::new(|| selector("a.gsc_a_at"));
static PAPER_CITATIONS: LazyLock<Selector> = LazyLock::new(|| selector("a.gsc_a_ac"));
static PAPER_YEAR: LazyLock<Selector> = LazyLock::new(|| selector("span.gsc_a_h"));

/// Decodes a fetched profile page into a [`ProfileRecord`].
///
/// Extraction never fails. Each field is looked up on its own and falls back
/// to its documented default when the element is missing or its text does not
/// decode, so a layout change degrades single fields instead of the record.
#[derive(Debug, Clone)]
pub struct ProfileExtractor {
    link_base: String,
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_BASE)
    }
}

impl ProfileExtractor {
    pub fn new(link_base: impl Into<String>) -> Self {
        Self {
            link_base: link_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn extract(&self, content: &[u8]) -> ProfileRecord {
        self.extract_str(&String::from_utf8_lossy(content))
    }

    pub fn extract_str(&self, content: &str) -> ProfileRecord {
        let document = Html::parse_document(content);
        let root = document.root_element();

        let name = field_or(root, &NAME, "name", NAME_NOT_FOUND.to_string(), |el| {
            Some(text_of(el).trim().to_string())
        });
        let (total_citations, h_index, i10_index) = citation_summary(root);

        ProfileRecord {
            name,
            total_citations,
            h_index,
            i10_index,
            yearly_citations: yearly_citations(root),
            papers: root
                .select(&PAPER_ROW)
                .map(|row| self.paper_from_row(row))
                .collect(),
        }
    }

    fn paper_from_row(&self, row: ElementRef<'_>) -> PaperRecord {
        let title_element = row.select(&PAPER_TITLE).next();

        // 標題與連結綁在一起：沒有標題元素就沒有連結
        let title = decode_or(title_element, "title", NO_TITLE.to_string(), |el| {
            Some(text_of(el))
        });
        let link = decode_or(title_element, "link", NO_LINK.to_string(), |el| {
            el.value()
                .attr("href")
                .map(|href| format!("{}{}", self.link_base, href))
        });

        PaperRecord {
            title,
            link,
            citations: field_or(
                row,
                &PAPER_CITATIONS,
                "paper citations",
                NO_CITATIONS.to_string(),
                trimmed_unless_empty,
            ),
            year: field_or(row, &PAPER_YEAR, "paper year", UNKNOWN_YEAR.to_string(), |el| {
                Some(text_of(el).trim().to_string())
            }),
        }
    }
}

/// Decode-or-default for an optional element.
fn decode_or<'a, T>(
    element: Option<ElementRef<'a>>,
    field: &str,
    default: T,
    decode: impl FnOnce(ElementRef<'a>) -> Option<T>,
) -> T {
    match element.and_then(decode) {
        Some(value) => value,
        None => {
            tracing::debug!(field, "element missing or undecodable, using default");
            default
        }
    }
}

/// Decode-or-default for the first element under `scope` matching `selector`.
fn field_or<'a, T>(
    scope: ElementRef<'a>,
    selector: &Selector,
    field: &str,
    default: T,
    decode: impl FnOnce(ElementRef<'a>) -> Option<T>,
) -> T {
    decode_or(scope.select(selector).next(), field, default, decode)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Empty raw text counts as missing; otherwise the trimmed text is kept
/// (whitespace-only text therefore yields an empty string).
fn trimmed_unless_empty(element: ElementRef<'_>) -> Option<String> {
    let raw = text_of(element);
    if raw.is_empty() {
        None
    } else {
        Some(raw.trim().to_string())
    }
}

fn parse_trimmed<T: std::str::FromStr>(element: ElementRef<'_>) -> Option<T> {
    text_of(element).trim().parse().ok()
}

/// 引用摘要區塊是全有或全無：少於三格時三個欄位都用預設值。
fn citation_summary(root: ElementRef<'_>) -> (u64, String, String) {
    let cells: Vec<ElementRef<'_>> = root.select(&SUMMARY_CELL).collect();
    if cells.len() < 3 {
        tracing::debug!(
            cells = cells.len(),
            "citation summary incomplete, using defaults"
        );
        return (
            0,
            H_INDEX_NOT_FOUND.to_string(),
            I10_INDEX_NOT_FOUND.to_string(),
        );
    }

    (
        decode_or(Some(cells[0]), "citations", 0, parse_trimmed::<u64>),
        decode_or(
            Some(cells[1]),
            "h_index",
            H_INDEX_NOT_FOUND.to_string(),
            trimmed_unless_empty,
        ),
        decode_or(
            Some(cells[2]),
            "i10_index",
            I10_INDEX_NOT_FOUND.to_string(),
            trimmed_unless_empty,
        ),
    )
}

/// Pairs year labels with bar counts by position.
///
/// The two collections are zipped, so when their lengths differ the trailing
/// elements of the longer one are ignored. Pairs that do not parse, or whose
/// year falls outside [`YEAR_WINDOW`], are dropped.
fn yearly_citations(root: ElementRef<'_>) -> BTreeMap<String, u64> {
    let Some(graph) = root.select(&GRAPH).next() else {
        tracing::debug!("citation graph missing");
        return BTreeMap::new();
    };

    let years: Vec<ElementRef<'_>> = graph.select(&GRAPH_YEAR).collect();
    let counts: Vec<ElementRef<'_>> = graph.select(&GRAPH_COUNT).collect();
    if years.len() != counts.len() {
        tracing::debug!(
            years = years.len(),
            counts = counts.len(),
            "citation graph collections differ in length, truncating to the shorter"
        );
    }

    years
        .into_iter()
        .zip(counts)
        .filter_map(|(year, count)| {
            let year = parse_trimmed::<i32>(year)?;
            let count = parse_trimmed::<u64>(count)?;
            YEAR_WINDOW
                .contains(&year)
                .then(|| (year.to_string(), count))
        })
        .collect()
}
