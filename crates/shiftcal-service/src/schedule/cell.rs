//! Calendar cells as handed over by the rendering side.

/// Category markers carried by a day cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellMarkers {
    /// Day is off (paid time off).
    pub off: bool,
    /// Day belongs to an adjacent month and is rendered only for layout.
    pub non_month: bool,
    /// Day carries a shift.
    pub has_shift: bool,
    /// Day is the current day.
    pub today: bool,
}

impl CellMarkers {
    pub const OFF_CLASS: &'static str = "is-off";
    pub const NON_MONTH_CLASS: &'static str = "non-month";
    pub const HAS_SHIFT_CLASS: &'static str = "has-actions";
    pub const TODAY_CLASS: &'static str = "today";

    /// ## Summary
    /// Builds markers from the CSS classes of a portal day element.
    ///
    /// Unknown classes are ignored.
    #[must_use]
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut markers = Self::default();
        for class in classes {
            match class {
                Self::OFF_CLASS => markers.off = true,
                Self::NON_MONTH_CLASS => markers.non_month = true,
                Self::HAS_SHIFT_CLASS => markers.has_shift = true,
                Self::TODAY_CLASS => markers.today = true,
                _ => {}
            }
        }
        markers
    }
}

/// One day cell of a rendered month grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarCell {
    /// Title text of the cell: `"May 3"`, `"3"`, or whatever the portal
    /// shows for today.
    pub label: Option<String>,
    pub markers: CellMarkers,
    /// Shift content text, one rendered line per `\n`: the time range first,
    /// the location last.
    pub content: Option<String>,
    /// Text of the emphasized location element used by newer markup.
    pub location_emphasis: Option<String>,
}

impl CalendarCell {
    /// Creates a cell with the given label and no markers.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Marks the cell as an off day.
    #[must_use]
    pub fn off(mut self) -> Self {
        self.markers.off = true;
        self
    }

    /// Marks the cell as belonging to an adjacent month.
    #[must_use]
    pub fn non_month(mut self) -> Self {
        self.markers.non_month = true;
        self
    }

    /// Marks the cell as the current day.
    #[must_use]
    pub fn today(mut self) -> Self {
        self.markers.today = true;
        self
    }

    /// Attaches shift content and sets the has-shift marker.
    #[must_use]
    pub fn with_shift(mut self, content: impl Into<String>) -> Self {
        self.markers.has_shift = true;
        self.content = Some(content.into());
        self
    }

    /// Attaches an emphasized location element.
    #[must_use]
    pub fn with_location_emphasis(mut self, location: impl Into<String>) -> Self {
        self.location_emphasis = Some(location.into());
        self
    }

    /// Returns the trimmed label, or `None` when the cell has no label text.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        non_blank(self.label.as_deref())
    }

    /// Returns the first content line, the raw time range.
    #[must_use]
    pub fn time_range(&self) -> Option<&str> {
        self.content_lines().next()
    }

    /// ## Summary
    /// Returns the shift location.
    ///
    /// The emphasized element wins; otherwise the last content line is used,
    /// provided it is not also the time range line.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        if let Some(location) = non_blank(self.location_emphasis.as_deref()) {
            return Some(location);
        }

        let mut lines = self.content_lines();
        lines.next()?;
        lines.last()
    }

    fn content_lines(&self) -> impl Iterator<Item = &str> {
        self.content
            .as_deref()
            .unwrap_or_default()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}
