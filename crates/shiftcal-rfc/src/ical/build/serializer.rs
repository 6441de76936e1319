//! Content-line serialization of calendars (RFC 5545 §3.1).

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::ical::core::{Component, ComponentKind, ICalendar, Parameter, Property, Value};

/// Serializes an iCalendar document to a string.
#[must_use]
pub fn serialize(ical: &ICalendar) -> String {
    serialize_component(&ical.root)
}

/// Serializes a component to a string.
#[must_use]
pub fn serialize_component(component: &Component) -> String {
    let mut result = String::new();

    result.push_str(&fold_line(&format!("BEGIN:{}", component.kind.name())));

    for prop in canonical_property_order(&component.properties, component.kind) {
        result.push_str(&serialize_property(prop));
    }

    // Children keep insertion order; the export already sorts events
    for child in &component.children {
        result.push_str(&serialize_component(child));
    }

    result.push_str(&fold_line(&format!("END:{}", component.kind.name())));

    result
}

/// Serializes a property to a folded content line.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();

    for param in &prop.params {
        line.push(';');
        line.push_str(&serialize_parameter(param));
    }

    line.push(':');
    line.push_str(&serialize_value(&prop.value, &prop.raw_value));

    fold_line(&line)
}

fn serialize_parameter(param: &Parameter) -> String {
    format!("{}={}", param.name, escape_param_value(&param.value))
}

fn serialize_value(value: &Value, raw_value: &str) -> String {
    match value {
        Value::Text(s) => escape_text(s),
        Value::Date(_) | Value::DateTime(_) => raw_value.to_string(),
    }
}

/// Returns properties in canonical order for deterministic output.
fn canonical_property_order(props: &[Property], kind: ComponentKind) -> Vec<&Property> {
    let order: &[&str] = match kind {
        ComponentKind::Calendar => &[
            "VERSION",
            "PRODID",
            "CALSCALE",
            "METHOD",
            "X-WR-CALNAME",
            "X-WR-TIMEZONE",
        ],
        ComponentKind::Event => &[
            "UID",
            "DTSTAMP",
            "DTSTART",
            "DTEND",
            "SUMMARY",
            "LOCATION",
            "TRANSP",
        ],
    };

    let mut ordered: Vec<&Property> = Vec::with_capacity(props.len());

    for &name in order {
        ordered.extend(props.iter().filter(|p| p.name.eq_ignore_ascii_case(name)));
    }

    // Anything else, X-properties included, keeps insertion order
    ordered.extend(
        props
            .iter()
            .filter(|p| !order.iter().any(|&n| p.name.eq_ignore_ascii_case(n))),
    );

    ordered
}
