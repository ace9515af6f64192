//! Column sort state of a table: desc → asc → unsorted → desc

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Desc,
    Asc,
    /// Rows keep their natural order
    Unsorted,
}

impl SortDirection {
    pub fn next(self) -> Self {
        match self {
            Self::Desc => Self::Asc,
            Self::Asc => Self::Unsorted,
            Self::Unsorted => Self::Desc,
        }
    }
}

/// Sort column plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCycle<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C: Copy + PartialEq> SortCycle<C> {
    /// Starts descending on `column`
    pub fn new(column: C) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }

    /// State after a click on the header of `column`
    pub fn toggle(self, column: C) -> Self {
        if self.column == column {
            Self {
                column,
                direction: self.direction.next(),
            }
        } else {
            Self::new(column)
        }
    }

    /// Whether rows are currently ordered by `column`
    pub fn is_active(&self, column: C) -> bool {
        self.column == column && self.direction != SortDirection::Unsorted
    }

    /// Header glyph for `column`
    pub fn indicator(&self, column: C) -> &'static str {
        if self.column != column {
            return " ⇅";
        }
        match self.direction {
            SortDirection::Desc => " ▼",
            SortDirection::Asc => " ▲",
            SortDirection::Unsorted => " ⇅",
        }
    }

    /// Returns `rows` ordered by `value(row, column)`, or unchanged when unsorted.
    ///
    /// The sort is stable, so equal values keep their natural order.
    pub fn apply<T, F>(&self, rows: &[T], value: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, C) -> f64,
    {
        let mut sorted = rows.to_vec();
        let ascending = match self.direction {
            SortDirection::Unsorted => return sorted,
            SortDirection::Asc => true,
            SortDirection::Desc => false,
        };

        sorted.sort_by(|a, b| {
            let cmp = value(a, self.column).total_cmp(&value(b, self.column));
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
        sorted
    }
}
