//! CSV ingestion and column canonicalization.
//!
//! The analytics core only understands canonical records; this module
//! performs the schema-mapping step once at load time. Source exports
//! name the same logical columns inconsistently, so each logical field
//! is resolved through a priority list of candidate names.

use anyhow::{Context, bail};
use camino::Utf8Path;
use storelens_core::records::{OptionRecord, ReviewRecord, SalesPeriod, SalesRecord, SalesTable};

/// Candidate names for the review text column, in priority order.
pub const REVIEW_TEXT_COLUMNS: &[&str] = &[
    "REVIEW_CONTENT",
    "review_content",
    "리뷰내용",
    "내용",
    "CONTENT",
];

/// Candidate names for the option label column, in priority order.
pub const OPTION_LABEL_COLUMNS: &[&str] =
    &["OPTION_INFO", "option_info", "옵션정보", "옵션명", "상품옵션"];

/// Candidate names for the option count column, in priority order.
pub const OPTION_COUNT_COLUMNS: &[&str] = &["COUNT", "count", "수량", "판매량", "판매수량"];

/// Candidate names for the per-product sale count column, in priority
/// order.
pub const SALE_COUNT_COLUMNS: &[&str] = &["판매건수", "주문건수", "구매건수"];

/// Product identity column of the sales export.
const PRODUCT_NAME_COLUMN: &str = "상품명";

/// Base price column of the sales export.
const BASE_PRICE_COLUMN: &str = "기본판매가격";

/// Review score column of the sales export.
const REVIEW_SCORE_COLUMN: &str = "리뷰점수";

/// Review count column of the sales export.
const REVIEW_COUNT_COLUMN: &str = "리뷰수";

/// What a set of headers looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Has a review text column.
    Review,
    /// Has an option label and a count column.
    OptionTable,
    /// Has a product name column and at least one revenue column.
    Sales,
}

/// Classify headers by the same heuristics the upstream dashboard used.
pub fn detect_kind(headers: &[String]) -> Option<TableKind> {
    if find_column(headers, REVIEW_TEXT_COLUMNS).is_some() {
        return Some(TableKind::Review);
    }
    if find_column(headers, OPTION_LABEL_COLUMNS).is_some()
        && find_column(headers, OPTION_COUNT_COLUMNS).is_some()
    {
        return Some(TableKind::OptionTable);
    }
    if headers.iter().any(|h| h == PRODUCT_NAME_COLUMN) && headers.iter().any(|h| h.contains("매출"))
    {
        return Some(TableKind::Sales);
    }
    None
}

/// Read a file and validate its size against the configured limit.
///
/// Combines the file-read and size-validation steps every loader needs.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Load a review table.
///
/// Fails with the candidate list when no review text column exists.
/// Empty cells become `text: None` and still classify (as neutral).
pub fn load_reviews(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Vec<ReviewRecord>> {
    let content = read_input_file(path, max_bytes)?;
    let (headers, records) = parse_csv(&content)?;

    let Some(text_col) = find_column(&headers, REVIEW_TEXT_COLUMNS) else {
        bail!(
            "{path} has no review text column (expected one of: {})",
            REVIEW_TEXT_COLUMNS.join(", ")
        );
    };

    Ok(records
        .iter()
        .map(|record| {
            let text = record.get(text_col).map(str::trim).filter(|t| !t.is_empty());
            ReviewRecord {
                text: text.map(ToString::to_string),
            }
        })
        .collect())
}

/// Load an option table.
///
/// Rows without a parseable count are skipped — they cannot rank.
pub fn load_options(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Vec<OptionRecord>> {
    let content = read_input_file(path, max_bytes)?;
    let (headers, records) = parse_csv(&content)?;

    let Some(label_col) = find_column(&headers, OPTION_LABEL_COLUMNS) else {
        bail!(
            "{path} has no option label column (expected one of: {})",
            OPTION_LABEL_COLUMNS.join(", ")
        );
    };
    let Some(count_col) = find_column(&headers, OPTION_COUNT_COLUMNS) else {
        bail!(
            "{path} has no option count column (expected one of: {})",
            OPTION_COUNT_COLUMNS.join(", ")
        );
    };

    Ok(records
        .iter()
        .filter_map(|record| {
            let label = record.get(label_col).map(str::trim).filter(|l| !l.is_empty())?;
            let count = parse_number(record.get(count_col)?)?;
            Some(OptionRecord {
                label: label.to_string(),
                count,
            })
        })
        .collect())
}

/// Load the sales table.
///
/// Period columns are matched by their exact export names
/// (`"<stem> 매출"`); unparseable revenue cells are treated as absent.
pub fn load_sales(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<SalesTable> {
    let content = read_input_file(path, max_bytes)?;
    let (headers, records) = parse_csv(&content)?;

    let Some(name_col) = headers.iter().position(|h| h == PRODUCT_NAME_COLUMN) else {
        bail!("{path} has no {PRODUCT_NAME_COLUMN} column — not a sales export");
    };

    let period_cols: Vec<(SalesPeriod, usize)> = SalesPeriod::ALL
        .iter()
        .filter_map(|&period| {
            let column = period.revenue_column();
            headers.iter().position(|h| *h == column).map(|i| (period, i))
        })
        .collect();
    if period_cols.is_empty() {
        bail!(
            "{path} has no revenue columns (expected e.g. {:?})",
            SalesPeriod::OneYear.revenue_column()
        );
    }

    let price_col = headers.iter().position(|h| h == BASE_PRICE_COLUMN);
    let score_col = headers.iter().position(|h| h == REVIEW_SCORE_COLUMN);
    let review_count_col = headers.iter().position(|h| h == REVIEW_COUNT_COLUMN);
    let sale_count_col = find_column(&headers, SALE_COUNT_COLUMNS);

    let rows = records
        .iter()
        .filter_map(|record| {
            let name = record.get(name_col).map(str::trim).filter(|n| !n.is_empty())?;
            let mut row = SalesRecord {
                product_name: name.to_string(),
                ..Default::default()
            };
            for &(period, col) in &period_cols {
                if let Some(value) = record.get(col).and_then(parse_number) {
                    row.revenue.insert(period, value);
                }
            }
            row.base_price = price_col.and_then(|c| record.get(c)).and_then(parse_number);
            row.review_score = score_col.and_then(|c| record.get(c)).and_then(parse_number);
            row.review_count = review_count_col
                .and_then(|c| record.get(c))
                .and_then(parse_number);
            row.sale_count = sale_count_col
                .and_then(|c| record.get(c))
                .and_then(parse_number);
            Some(row)
        })
        .collect();

    Ok(SalesTable {
        periods: period_cols.iter().map(|&(p, _)| p).collect(),
        rows,
    })
}

/// Parse CSV content into trimmed headers plus data records.
fn parse_csv(content: &str) -> anyhow::Result<(Vec<String>, Vec<csv::StringRecord>)> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .context("failed to parse CSV header row")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .context("failed to parse CSV rows")?;
    Ok((headers, records))
}

/// First header matching any candidate, in candidate priority order.
fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|candidate| headers.iter().position(|h| h == candidate))
}

/// Parse a spreadsheet number leniently.
///
/// Strips thousands separators, currency/percent suffixes, and
/// whitespace. Empty or unparseable cells yield `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_end_matches('원')
        .trim_end_matches('%')
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}
