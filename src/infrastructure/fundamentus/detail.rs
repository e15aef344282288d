//! Detail-page extraction.
//!
//! The page has no stable ids, only `td.label` / `td.data` pairs, so
//! every field is located by its visible label text and pulled from
//! the following sibling cell. Each extraction is independently
//! optional: whatever is missing stays at its default and the rest of
//! the record is still returned.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::domain::entities::fund::FundDetail;
use crate::domain::values::br_number::parse_br_percent;

static LABEL_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.label").expect("valid selector"));
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("valid selector"));
static IMAGE: Lazy<Selector> = Lazy::new(|| Selector::parse("img").expect("valid selector"));
static VALUE_SPAN: Lazy<Selector> = Lazy::new(|| Selector::parse("span").expect("valid selector"));

static REPORT_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2}/\d{2}/\d{4}").expect("valid regex"));

const REPORT_LABEL_FRAGMENT: &str = "relatório";
const DOCUMENTS_LINK_TEXT: &str = "Pesquisar Documentos";
const OSC_DAY_LABEL: &str = "Dia";
const OSC_MONTH_LABEL: &str = "Mês";
const OSC_12M_LABEL: &str = "12 meses";

/// Best-effort scrape of one fund's detail page. Never fails: fields
/// that cannot be located keep their defaults.
pub fn parse_detail_page(html: &str, base: &Url, detail_url: String) -> FundDetail {
    let document = Html::parse_document(html);
    let mut detail = FundDetail::unavailable(detail_url);

    if let Some(cell) = report_value_cell(&document) {
        detail.report_download_link =
            download_link(cell).map(|href| resolve_link(&href, base));

        let cell_text = cell.text().collect::<Vec<_>>().join(" ");
        if let Some(m) = REPORT_DATE.find(&cell_text) {
            detail.last_report_date = m.as_str().to_string();
        }
    }

    detail.documents_link = documents_link(&document).map(|href| resolve_link(&href, base));

    detail.osc_day = oscillation(&document, OSC_DAY_LABEL);
    detail.osc_month = oscillation(&document, OSC_MONTH_LABEL);
    detail.osc_12m = oscillation(&document, OSC_12M_LABEL);

    detail
}

/// The value cell next to the first label mentioning the report.
fn report_value_cell(document: &Html) -> Option<ElementRef<'_>> {
    document
        .select(&LABEL_CELL)
        .find(|label| {
            cell_text(*label)
                .to_lowercase()
                .contains(REPORT_LABEL_FRAGMENT)
        })
        .and_then(next_sibling_cell)
}

/// Inside the report value cell, the download URL is the href of the
/// anchor wrapping the download icon.
fn download_link(cell: ElementRef<'_>) -> Option<String> {
    cell.select(&ANCHOR)
        .filter(|a| a.value().attr("href").is_some())
        .find(|a| {
            a.select(&IMAGE).any(|img| {
                img.value().attr("alt") == Some("Download")
                    || img
                        .value()
                        .attr("src")
                        .map_or(false, |src| src.to_lowercase().contains("download"))
            })
        })
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}

/// The anchor whose visible text is exactly the documents-search label.
fn documents_link(document: &Html) -> Option<String> {
    document
        .select(&ANCHOR)
        .find(|a| cell_text(*a).eq_ignore_ascii_case(DOCUMENTS_LINK_TEXT))
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}

/// Percentage next to an exact oscillation label, stored fractional.
fn oscillation(document: &Html, label_text: &str) -> Option<f64> {
    let label = document
        .select(&LABEL_CELL)
        .find(|label| cell_text(*label) == label_text)?;
    let value_cell = label
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "td" && has_class(*el, "data"))?;
    let span = value_cell.select(&VALUE_SPAN).next()?;
    parse_br_percent(&cell_text(span))
}

fn next_sibling_cell(label: ElementRef<'_>) -> Option<ElementRef<'_>> {
    label
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "td")
}

fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value()
        .attr("class")
        .map_or(false, |classes| classes.split_whitespace().any(|c| c == class))
}

fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Absolute links pass through; anything else is joined to the base.
fn resolve_link(href: &str, base: &Url) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }
    base.join(href).map(String::from).unwrap_or_else(|_| {
        format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            href.trim_start_matches('/')
        )
    })
}
