//! Calendar and event components (RFC 5545 §3.4, §3.6.1).

use super::{Property, names};

/// Components the export writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Calendar,
    Event,
}

impl ComponentKind {
    /// Name used on the `BEGIN` / `END` lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
        }
    }
}

/// A component with its properties and nested components.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    /// Properties in insertion order; the serializer applies canonical order.
    pub properties: Vec<Property>,
    pub children: Vec<Component>,
}

impl Component {
    #[must_use]
    pub const fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an empty VEVENT.
    #[must_use]
    pub const fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Returns the first property named `name` (case-insensitive).
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|prop| prop.name.eq_ignore_ascii_case(name))
    }

    /// Returns the TEXT value of the property named `name`.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get_property(name)?.as_text()
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.text(names::UID)
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.text(names::SUMMARY)
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.text(names::LOCATION)
    }
}

/// A calendar document: the VCALENDAR component and its events.
#[derive(Debug, Clone, PartialEq)]
pub struct ICalendar {
    pub root: Component,
}

impl ICalendar {
    /// Creates a calendar carrying the required `VERSION` and `PRODID`.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut root = Component::new(ComponentKind::Calendar);
        root.add_property(Property::text(names::VERSION, "2.0"));
        root.add_property(Property::text(names::PRODID, prodid));
        Self { root }
    }

    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.root.text(names::PRODID)
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root.text(names::VERSION)
    }

    /// Returns the `X-WR-CALNAME` display name, if set.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.root.text(names::X_WR_CALNAME)
    }

    /// Adds a calendar-level property such as `X-WR-CALNAME`.
    pub fn add_property(&mut self, prop: Property) {
        self.root.add_property(prop);
    }

    pub fn add_event(&mut self, event: Component) {
        self.root.children.push(event);
    }

    /// Returns the VEVENTs in insertion order.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.root
            .children
            .iter()
            .filter(|child| child.kind == ComponentKind::Event)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_calendar_has_required_properties() {
        let ical = ICalendar::new("-//Test//Test//EN");
        assert_eq!(ical.version(), Some("2.0"));
        assert_eq!(ical.prodid(), Some("-//Test//Test//EN"));
        assert_eq!(ical.display_name(), None);
        assert!(ical.events().is_empty());
    }

    #[test]
    fn event_text_accessors() {
        let mut event = Component::event();
        event.add_property(Property::text(names::UID, "shift-1"));
        event.add_property(Property::text(names::SUMMARY, "Work"));
        event.add_property(Property::text(names::LOCATION, "Kaiser Oakland"));

        assert_eq!(event.uid(), Some("shift-1"));
        assert_eq!(event.summary(), Some("Work"));
        assert_eq!(event.location(), Some("Kaiser Oakland"));
        assert_eq!(event.text("location"), Some("Kaiser Oakland"));
        assert_eq!(event.text(names::TRANSP), None);
    }

    #[test]
    fn events_keep_insertion_order() {
        let mut ical = ICalendar::new("-//Test//Test//EN");
        ical.add_property(Property::text(names::X_WR_CALNAME, "Kaiser"));

        for uid in ["first", "second"] {
            let mut event = Component::event();
            event.add_property(Property::text(names::UID, uid));
            ical.add_event(event);
        }

        let uids: Vec<_> = ical.events().iter().filter_map(|e| e.uid()).collect();
        assert_eq!(uids, vec!["first", "second"]);
        assert_eq!(ical.display_name(), Some("Kaiser"));
    }
}
