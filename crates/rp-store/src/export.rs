//! CSV export of a plan's schedule.
//!
//! One row per chapter, in reading order:
//!
//! ```csv
//! day,book,chapter
//! 1,Genesis,1
//! 1,Genesis,2
//! 2,Genesis,3
//! ```
//!
//! Books missing from the catalog are written as their numeric ID.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use rp_core::ChapterRef;
use rp_schedule::{BookCatalog, Schedule};

use crate::StoreResult;

/// Write `schedule` as CSV rows to any `Write` sink.
pub fn write_schedule_csv<W: Write>(
    sink:     W,
    schedule: &Schedule<ChapterRef>,
    catalog:  &BookCatalog,
) -> StoreResult<()> {
    let mut w = Writer::from_writer(sink);
    w.write_record(["day", "book", "chapter"])?;

    for (day, chapters) in schedule.iter() {
        let day = day.get().to_string();
        for ch in chapters {
            let book = catalog
                .get(ch.book)
                .map_or_else(|| ch.book.0.to_string(), |b| b.name.clone());
            w.write_record([day.as_str(), book.as_str(), ch.chapter.to_string().as_str()])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Write `schedule` to a CSV file at `path`, replacing any existing file.
pub fn export_schedule_csv(
    path:     &Path,
    schedule: &Schedule<ChapterRef>,
    catalog:  &BookCatalog,
) -> StoreResult<()> {
    let file = std::fs::File::create(path)?;
    write_schedule_csv(file, schedule, catalog)
}
