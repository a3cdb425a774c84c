// Group module
// Derived appointment blocks; never stored

use chrono::NaiveDate;

use crate::models::slot::ItemRef;

/// Maximal run of touching same-item slots on one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub day: NaiveDate,
    pub start: u8,
    pub end: u8,
    pub item: ItemRef,
}

impl Group {
    pub fn contains(&self, hour: u8) -> bool {
        self.start <= hour && hour < self.end
    }

    pub fn last_hour(&self) -> u8 {
        self.end - 1
    }

    pub fn len_hours(&self) -> u8 {
        self.end - self.start
    }

    /// Position of `hour` inside this group, `None` if it falls outside
    pub fn edge_of(&self, hour: u8) -> Option<EdgeKind> {
        if !self.contains(hour) {
            return None;
        }
        let at_start = hour == self.start;
        let at_end = hour == self.last_hour();
        Some(match (at_start, at_end) {
            (true, true) => EdgeKind::Both,
            (true, false) => EdgeKind::Start,
            (false, true) => EdgeKind::End,
            (false, false) => EdgeKind::Middle,
        })
    }
}

/// Where a cell sits in its group; drives resize handles and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Start,
    End,
    /// Single-hour group
    Both,
    Middle,
}

impl EdgeKind {
    /// Cells that carry the top resize handle (and the block label)
    pub fn is_top(&self) -> bool {
        matches!(self, EdgeKind::Start | EdgeKind::Both)
    }

    /// Cells that carry the bottom resize handle
    pub fn is_bottom(&self) -> bool {
        matches!(self, EdgeKind::End | EdgeKind::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(start: u8, end: u8) -> Group {
        Group {
            day: NaiveDate::from_ymd_opt(2024, 10, 7).unwrap(),
            start,
            end,
            item: ItemRef::new(1, "A"),
        }
    }

    #[test]
    fn test_edge_of_multi_hour_group() {
        let g = group(9, 12);
        assert_eq!(g.edge_of(9), Some(EdgeKind::Start));
        assert_eq!(g.edge_of(10), Some(EdgeKind::Middle));
        assert_eq!(g.edge_of(11), Some(EdgeKind::End));
        assert_eq!(g.edge_of(12), None);
    }

    #[test]
    fn test_edge_of_single_hour_group() {
        let g = group(14, 15);
        assert_eq!(g.edge_of(14), Some(EdgeKind::Both));
        assert!(EdgeKind::Both.is_top());
        assert!(EdgeKind::Both.is_bottom());
    }

    #[test]
    fn test_two_hour_group_has_no_middle() {
        let g = group(8, 10);
        assert_eq!(g.edge_of(8), Some(EdgeKind::Start));
        assert_eq!(g.edge_of(9), Some(EdgeKind::End));
        assert_eq!(g.len_hours(), 2);
    }
}
