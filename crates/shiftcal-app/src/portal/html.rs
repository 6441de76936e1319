//! Day cells from the portal's schedule page markup.

use scraper::{ElementRef, Html, Node, Selector};
use shiftcal_service::schedule::{CalendarCell, CellMarkers};

use crate::error::{AppError, AppResult};

const DAY_SELECTOR: &str = ".day";
const TITLE_SELECTOR: &str = ".title";
const CONTENT_SELECTOR: &str = ".content";
const LOCATION_SELECTOR: &str = "strong";
const SIGN_IN_SELECTOR: &str = "#Password, .btn-signin";

/// Elements that start a new rendered line.
const BLOCK_ELEMENTS: &[&str] = &["div", "p", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6"];

struct GridSelectors {
    day: Selector,
    title: Selector,
    content: Selector,
    location: Selector,
}

impl GridSelectors {
    fn new() -> AppResult<Self> {
        Ok(Self {
            day: parse_selector(DAY_SELECTOR)?,
            title: parse_selector(TITLE_SELECTOR)?,
            content: parse_selector(CONTENT_SELECTOR)?,
            location: parse_selector(LOCATION_SELECTOR)?,
        })
    }
}

fn parse_selector(selector: &'static str) -> AppResult<Selector> {
    Selector::parse(selector).map_err(|_e| AppError::InvalidSelector(selector))
}

/// A schedule page parsed once and queried for its day cells or the
/// sign-in form.
pub struct SchedulePage {
    document: Html,
}

impl SchedulePage {
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        Self {
            document: Html::parse_document(markup),
        }
    }

    /// ## Summary
    /// Reads the day cells in document order.
    ///
    /// Each `.day` element becomes one cell: the `.title` text is the label,
    /// the element's classes are the markers, and the rendered lines of
    /// `.content` (with its `strong` element as the emphasized location) the
    /// shift content.
    ///
    /// ## Errors
    /// Returns `AppError::InvalidSelector` if a built-in selector fails to parse.
    pub fn cells(&self) -> AppResult<Vec<CalendarCell>> {
        let selectors = GridSelectors::new()?;

        let cells: Vec<CalendarCell> = self
            .document
            .select(&selectors.day)
            .map(|day| parse_day(day, &selectors))
            .collect();

        tracing::trace!(cells = cells.len(), "Parsed schedule grid");

        Ok(cells)
    }

    /// ## Summary
    /// Whether the page is the portal's sign-in form instead of a schedule.
    ///
    /// ## Errors
    /// Returns `AppError::InvalidSelector` if the built-in selector fails to parse.
    pub fn is_sign_in(&self) -> AppResult<bool> {
        let selector = parse_selector(SIGN_IN_SELECTOR)?;
        Ok(self.document.select(&selector).next().is_some())
    }
}

/// ## Summary
/// Reads the day cells of a schedule page; see `SchedulePage::cells`.
///
/// ## Errors
/// Returns `AppError::InvalidSelector` if a built-in selector fails to parse.
pub fn parse_grid(markup: &str) -> AppResult<Vec<CalendarCell>> {
    SchedulePage::parse(markup).cells()
}

/// ## Summary
/// Whether the markup is the portal's sign-in form instead of a schedule.
///
/// ## Errors
/// Returns `AppError::InvalidSelector` if the built-in selector fails to parse.
pub fn is_sign_in_page(markup: &str) -> AppResult<bool> {
    SchedulePage::parse(markup).is_sign_in()
}

fn parse_day(day: ElementRef<'_>, selectors: &GridSelectors) -> CalendarCell {
    let label = day
        .select(&selectors.title)
        .next()
        .map(|title| collapse_whitespace(&title.text().collect::<String>()));
    let content = day.select(&selectors.content).next();

    CalendarCell {
        label,
        markers: CellMarkers::from_classes(day.value().classes()),
        content: content.map(rendered_lines),
        location_emphasis: content
            .and_then(|content| content.select(&selectors.location).next())
            .map(|strong| collapse_whitespace(&strong.text().collect::<String>())),
    }
}

/// Text of `element` as a browser lays it out: whitespace collapses, `br`
/// and block elements break lines, blank lines are dropped.
fn rendered_lines(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    push_rendered(element, &mut text);

    text.lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_rendered(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.extend(text.chars().map(|c| if c.is_whitespace() { ' ' } else { c }));
            }
            Node::Element(node) if node.name() == "br" => out.push('\n'),
            Node::Element(node) => {
                let Some(child_element) = ElementRef::wrap(child) else {
                    continue;
                };
                let is_block = BLOCK_ELEMENTS.contains(&node.name());
                if is_block {
                    out.push('\n');
                }
                push_rendered(child_element, out);
                if is_block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
