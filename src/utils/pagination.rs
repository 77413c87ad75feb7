use icu_collator::{Collator, CollatorError, CollatorOptions, Strength};
use std::cmp::Ordering;
use std::fmt;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub has_more: bool,
}

#[derive(Debug)]
pub struct TagCollationError(CollatorError);

impl fmt::Display for TagCollationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load tag collation: {}", self.0)
    }
}

/// Root-locale collation, the order `localeCompare` gives in a browser.
pub struct TagOrder {
    collator: Collator,
}

impl TagOrder {
    pub fn new() -> Result<Self, TagCollationError> {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(&Default::default(), options).map_err(TagCollationError)?;
        Ok(TagOrder { collator })
    }

    // Code-point tie-break keeps distinct tags from comparing equal.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b).then_with(|| a.cmp(b))
    }

    pub fn sort<T, F>(&self, items: &mut [T], key: F)
    where
        F: Fn(&T) -> &str,
    {
        items.sort_by(|a, b| self.compare(key(a), key(b)));
    }
}

pub fn window_and_page<T, F>(
    sorted: Vec<T>,
    key: F,
    after_id: Option<&str>,
    before_id: Option<&str>,
    limit: usize,
) -> Page<T>
where
    F: Fn(&T) -> &str,
{
    let mut start = 0;
    let mut end = sorted.len();

    if let Some(after_id) = after_id {
        if let Some(index) = sorted.iter().position(|item| key(item) == after_id) {
            start = index + 1;
        }
    }

    if let Some(before_id) = before_id {
        if let Some(index) = sorted.iter().position(|item| key(item) == before_id) {
            end = index;
        }
    }

    if start >= end {
        return Page { data: Vec::new(), has_more: false };
    }

    let window_len = end - start;
    let data = sorted.into_iter().skip(start).take(window_len.min(limit)).collect();

    Page {
        data,
        has_more: window_len > limit,
    }
}
