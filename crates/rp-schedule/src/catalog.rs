//! Book catalog: chapter counts per book, and CSV loading.
//!
//! # CSV format
//!
//! One row per book.  Row order is the catalog's canonical order, but plans
//! follow the reader's selection order, not this one.
//!
//! ```csv
//! book_id,name,chapters
//! 0,Genesis,50
//! 1,Exodus,40
//! 18,Psalms,150
//! ```
//!
//! Book IDs and names must be unique (names compared case-insensitively) and
//! every book must have at least one chapter.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use rp_core::{BookId, ChapterRef};

use crate::{ScheduleError, ScheduleResult};

// ── Book ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Book {
    #[serde(rename = "book_id")]
    pub id:       BookId,
    pub name:     String,
    pub chapters: u16,
}

// ── BookCatalog ───────────────────────────────────────────────────────────────

/// Chapter counts for every book a plan may draw from.
#[derive(Clone, Debug, Default)]
pub struct BookCatalog {
    books:   Vec<Book>,
    by_id:   FxHashMap<BookId, usize>,
    by_name: FxHashMap<String, usize>,
}

impl BookCatalog {
    /// Build a catalog, rejecting duplicate IDs, duplicate names, and books
    /// with no chapters.
    pub fn from_books(books: Vec<Book>) -> ScheduleResult<Self> {
        let mut by_id = FxHashMap::default();
        let mut by_name = FxHashMap::default();

        for (i, book) in books.iter().enumerate() {
            if book.chapters == 0 {
                return Err(ScheduleError::Parse(format!("book {:?} has no chapters", book.name)));
            }
            let name = book.name.trim();
            if name.is_empty() {
                return Err(ScheduleError::Parse(format!("{} has an empty name", book.id)));
            }
            if by_id.insert(book.id, i).is_some() {
                return Err(ScheduleError::Parse(format!("duplicate {}", book.id)));
            }
            if by_name.insert(name.to_lowercase(), i).is_some() {
                return Err(ScheduleError::Parse(format!("duplicate book name {name:?}")));
            }
        }

        Ok(Self { books, by_id, by_name })
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.by_id.get(&id).map(|&i| &self.books[i])
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn find_by_name(&self, name: &str) -> Option<&Book> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.books[i])
    }

    /// Map book names to IDs, preserving the given order.
    pub fn resolve_names<S: AsRef<str>>(&self, names: &[S]) -> ScheduleResult<Vec<BookId>> {
        names
            .iter()
            .map(|n| {
                let n = n.as_ref();
                self.find_by_name(n)
                    .map(|b| b.id)
                    .ok_or_else(|| ScheduleError::UnknownBookName(n.trim().to_owned()))
            })
            .collect()
    }

    /// Every chapter of every selected book, in selection order.
    ///
    /// Selecting a book twice repeats its chapters.
    pub fn expand(&self, selection: &[BookId]) -> ScheduleResult<Vec<ChapterRef>> {
        let mut total = 0usize;
        for &id in selection {
            total += self.get(id).ok_or(ScheduleError::UnknownBook(id))?.chapters as usize;
        }

        let mut sequence = Vec::with_capacity(total);
        for &id in selection {
            // Presence checked above.
            if let Some(book) = self.get(id) {
                sequence.extend((1..=book.chapters).map(|ch| ChapterRef::new(id, ch)));
            }
        }
        Ok(sequence)
    }

    /// Total chapters across `selection`.
    pub fn chapter_count(&self, selection: &[BookId]) -> ScheduleResult<usize> {
        selection.iter().try_fold(0usize, |acc, &id| {
            let book = self.get(id).ok_or(ScheduleError::UnknownBook(id))?;
            Ok(acc + book.chapters as usize)
        })
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load a [`BookCatalog`] from a CSV file.
pub fn load_catalog_csv(path: &Path) -> ScheduleResult<BookCatalog> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for catalogs embedded
/// with `include_str!`.
pub fn load_catalog_reader<R: Read>(reader: R) -> ScheduleResult<BookCatalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let books = csv_reader
        .deserialize::<Book>()
        .map(|row| row.map_err(|e| ScheduleError::Parse(e.to_string())))
        .collect::<ScheduleResult<Vec<_>>>()?;

    BookCatalog::from_books(books)
}
