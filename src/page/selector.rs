//! Page-to-range arithmetic
//!
//! Pages are 1-based and fixed-size. A request past the available data is
//! an empty range, never an error; a non-positive page number means "no
//! pagination requested" and selects everything.

/// Page size applied when the caller passes zero or a negative size.
/// A deliberate fixed policy, not an incidental constant.
pub const DEFAULT_PAGE_SIZE: u64 = 15;

/// Inclusive 1-based index range over the document sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u64,
    pub end: u64,
}

impl PageRange {
    /// Whether the range selects nothing (`start > end`)
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of indices selected
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }
}

/// Map `(page_number, page_size_raw, total_count)` to an index range.
///
/// - `page_number <= 0`: the full range `(1, total_count)`; empty when the
///   sequence is empty.
/// - Otherwise `page_size_raw` is used when positive, else
///   `DEFAULT_PAGE_SIZE`. The range end is clamped to `total_count`, and a
///   start past `total_count` yields an empty range ("page beyond
///   available data").
///
/// Assumes already-parsed integers; non-integer input is rejected at the
/// request boundary before reaching this function.
pub fn select(page_number: i64, page_size_raw: i64, total_count: u64) -> PageRange {
    if page_number <= 0 {
        return PageRange {
            start: 1,
            end: total_count,
        };
    }

    let page_size = if page_size_raw > 0 {
        page_size_raw as u64
    } else {
        DEFAULT_PAGE_SIZE
    };

    // Checked arithmetic: huge page arguments are valid input and must
    // land on the empty range, never panic or wrap.
    let start = match (page_number as u64 - 1)
        .checked_mul(page_size)
        .and_then(|n| n.checked_add(1))
    {
        Some(start) if start <= total_count => start,
        _ => {
            return PageRange {
                start: total_count + 1,
                end: total_count,
            }
        }
    };

    let end = start
        .checked_add(page_size - 1)
        .map_or(total_count, |e| e.min(total_count));

    PageRange { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_page() {
        assert_eq!(select(2, 3, 10), PageRange { start: 4, end: 6 });
    }

    #[test]
    fn test_last_page_clamped() {
        assert_eq!(select(4, 3, 10), PageRange { start: 10, end: 10 });
    }

    #[test]
    fn test_page_beyond_data_is_empty() {
        let range = select(5, 3, 10);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn test_non_positive_page_selects_everything() {
        assert_eq!(select(0, 0, 10), PageRange { start: 1, end: 10 });
        assert_eq!(select(-3, 7, 10), PageRange { start: 1, end: 10 });
    }

    #[test]
    fn test_full_range_of_empty_sequence_is_empty() {
        assert!(select(0, 0, 0).is_empty());
    }

    #[test]
    fn test_default_page_size_applies() {
        assert_eq!(select(1, 0, 100), PageRange { start: 1, end: 15 });
        assert_eq!(select(1, -4, 100), PageRange { start: 1, end: 15 });
    }

    #[test]
    fn test_first_page() {
        assert_eq!(select(1, 2, 3), PageRange { start: 1, end: 2 });
    }

    #[test]
    fn test_exact_final_page() {
        // 10 documents, pages of 5: page 2 is exactly 6..=10
        assert_eq!(select(2, 5, 10), PageRange { start: 6, end: 10 });
    }

    #[test]
    fn test_first_page_of_empty_sequence() {
        assert!(select(1, 15, 0).is_empty());
    }

    #[test]
    fn test_huge_page_arguments_yield_empty_range() {
        // Would overflow u64 if computed naively
        assert!(select(i64::MAX, i64::MAX, 10).is_empty());
        assert!(select(i64::MAX, 1, 10).is_empty());
        assert!(select(2, i64::MAX, 10).is_empty());
    }

    #[test]
    fn test_huge_page_size_on_first_page_clamps() {
        // Only the end computation overflows here; start is still 1
        assert_eq!(select(1, i64::MAX, 10), PageRange { start: 1, end: 10 });
    }

    #[test]
    fn test_len_counts_inclusive() {
        assert_eq!(PageRange { start: 4, end: 6 }.len(), 3);
        assert_eq!(PageRange { start: 10, end: 10 }.len(), 1);
    }
}
