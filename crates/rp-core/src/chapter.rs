//! `ChapterRef` — the unit of reading that schedules distribute.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::BookId;

/// One chapter of one book.  Chapters are numbered from 1 within their book.
///
/// Schedules treat chapters as opaque: placement depends only on position in
/// the selected sequence, never on which book a chapter belongs to.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[derive(Serialize, Deserialize)]
pub struct ChapterRef {
    pub book:    BookId,
    pub chapter: u16,
}

impl ChapterRef {
    #[inline]
    pub fn new(book: BookId, chapter: u16) -> Self {
        Self { book, chapter }
    }
}

impl fmt::Display for ChapterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.book.0, self.chapter)
    }
}
