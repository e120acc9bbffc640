//! Unit tests for rp-schedule.

use std::io::Cursor;

use rp_core::{BookId, ChapterRef, DayNumber, PlannerConfig};

use crate::{BookCatalog, PlanRequest, ReadingPlan, build_plan, load_catalog_reader};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn day(n: u32) -> DayNumber {
    DayNumber::new(n).unwrap()
}

const CATALOG_CSV: &[u8] = b"\
book_id,name,chapters\n\
0,Genesis,50\n\
1,Exodus,40\n\
39,Matthew,28\n\
42,John,21\n\
56,Philemon,1\n\
";

fn catalog() -> BookCatalog {
    load_catalog_reader(Cursor::new(CATALOG_CSV)).unwrap()
}

fn request(books: &[u16], duration_days: i64) -> PlanRequest {
    PlanRequest {
        name: "Test plan".into(),
        books: books.iter().map(|&b| BookId(b)).collect(),
        duration_days,
    }
}

fn plan(books: &[u16], duration_days: i64) -> ReadingPlan {
    build_plan(&catalog(), &request(books, duration_days), &PlannerConfig::default()).unwrap()
}

// ── Distributor ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod distributor {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{ScheduleError, bucket_sizes, distribute, validate_duration};

    use super::*;

    #[test]
    fn empty_sequence_yields_no_days() {
        let s = distribute(Vec::<u32>::new(), 7).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.item_count(), 0);
        assert!(s.last_day().is_none());
    }

    #[test]
    fn more_days_than_items() {
        let s = distribute(vec!['a', 'b'], 5).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.day(day(1)), Some(&['a'][..]));
        assert_eq!(s.day(day(2)), Some(&['b'][..]));
        for n in 3..=5 {
            assert!(s.day(day(n)).is_none(), "day {n} should be absent");
        }
    }

    #[test]
    fn exact_division() {
        let s = distribute(vec!['a', 'b', 'c', 'd', 'e', 'f'], 3).unwrap();
        assert_eq!(s.day(day(1)), Some(&['a', 'b'][..]));
        assert_eq!(s.day(day(2)), Some(&['c', 'd'][..]));
        assert_eq!(s.day(day(3)), Some(&['e', 'f'][..]));
    }

    #[test]
    fn uneven_division_follows_ceil_at_each_step() {
        // day 1: ceil(7/3) = 3, day 2: ceil(4/2) = 2, day 3: ceil(2/1) = 2
        let s = distribute((1..=7).collect::<Vec<u32>>(), 3).unwrap();
        assert_eq!(s.day(day(1)), Some(&[1, 2, 3][..]));
        assert_eq!(s.day(day(2)), Some(&[4, 5][..]));
        assert_eq!(s.day(day(3)), Some(&[6, 7][..]));
    }

    #[test]
    fn recomputing_each_day_avoids_front_heavy_drift() {
        // A single up-front ceil(10/4) = 3 would give 3,3,3,1.  Per-day
        // recomputation gives 3,3,2,2.
        assert_eq!(bucket_sizes(10, 4).unwrap(), vec![3, 3, 2, 2]);
        // 5 over 4: ceil(5/4)=2, then ceil(3/3)=1, 1, 1.
        assert_eq!(bucket_sizes(5, 4).unwrap(), vec![2, 1, 1, 1]);
    }

    #[test]
    fn zero_duration_is_invalid_argument() {
        let err = distribute(vec![1, 2, 3], 0).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidArgument(_)));
        assert!(matches!(bucket_sizes(0, 0), Err(ScheduleError::InvalidArgument(_))));
    }

    #[test]
    fn single_day_takes_everything() {
        let s = distribute((0..1189).collect::<Vec<u32>>(), 1).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.day(day(1)).unwrap().len(), 1189);
    }

    #[test]
    fn whole_bible_in_a_year() {
        // 1189 chapters / 365 days: 94 days of 4, then 271 days of 3.
        let sizes = bucket_sizes(1189, 365).unwrap();
        assert_eq!(sizes.len(), 365);
        assert_eq!(sizes.iter().filter(|&&k| k == 4).count(), 94);
        assert_eq!(sizes.iter().filter(|&&k| k == 3).count(), 271);
        assert_eq!(sizes.iter().sum::<usize>(), 1189);
    }

    #[test]
    fn huge_duration_terminates_quickly() {
        let sizes = bucket_sizes(3, u32::MAX).unwrap();
        assert_eq!(sizes, vec![1, 1, 1]);
    }

    #[test]
    fn deterministic() {
        let a = distribute((0..97).collect::<Vec<u32>>(), 13).unwrap();
        let b = distribute((0..97).collect::<Vec<u32>>(), 13).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn randomized_invariants() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let n: usize = rng.gen_range(0..400);
            let d: u32 = rng.gen_range(1..120);
            let seq: Vec<usize> = (0..n).collect();
            let s = distribute(seq.clone(), d).unwrap();

            // Coverage: concatenation reproduces the input exactly.
            let flat: Vec<usize> = s.items().copied().collect();
            assert_eq!(flat, seq, "n={n} d={d}");

            // No day past the duration; days are 1..=len.
            if let Some(last) = s.last_day() {
                assert!(last.get() <= d, "n={n} d={d}");
                assert_eq!(last.get() as usize, s.len());
            }
            assert_eq!(s.len(), n.min(d as usize), "n={n} d={d}");

            // Sizes never increase and differ by at most one.
            let sizes = s.sizes();
            assert!(sizes.windows(2).all(|w| w[0] >= w[1]), "n={n} d={d}: {sizes:?}");
            if let (Some(max), Some(min)) = (sizes.iter().max(), sizes.iter().min()) {
                assert!(max - min <= 1, "n={n} d={d}: {sizes:?}");
                assert_eq!(*max, n.div_ceil(d as usize), "n={n} d={d}");
            }

            // Exact division gives uniform days.
            if n > 0 && n % d as usize == 0 {
                assert!(sizes.iter().all(|&k| k == n / d as usize));
            }

            assert_eq!(sizes, bucket_sizes(n, d).unwrap());
        }
    }

    #[test]
    fn validate_duration_bounds() {
        assert_eq!(validate_duration(1).unwrap(), 1);
        assert_eq!(validate_duration(365).unwrap(), 365);
        assert_eq!(validate_duration(u32::MAX as i64).unwrap(), u32::MAX);
        for bad in [0, -1, i64::MIN, u32::MAX as i64 + 1] {
            assert!(
                matches!(validate_duration(bad), Err(ScheduleError::InvalidArgument(_))),
                "accepted {bad}"
            );
        }
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule {
    use std::collections::BTreeMap;

    use crate::{Schedule, distribute};

    use super::*;

    #[test]
    fn serializes_with_day_keys_in_order() {
        let s = distribute((1..=12).collect::<Vec<u32>>(), 10).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.starts_with(r#"{"day_1":[1,2],"day_2":[3,4],"day_3":[5]"#), "{json}");
        assert!(json.ends_with(r#""day_10":[12]}"#), "{json}");
    }

    #[test]
    fn document_round_trip() {
        let s = distribute((1..=23).collect::<Vec<u32>>(), 10).unwrap();
        let back: Schedule<u32> = serde_json::from_str(&serde_json::to_string(&s).unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn empty_schedule_is_empty_object() {
        let s: Schedule<u32> = Schedule::empty();
        assert_eq!(serde_json::to_string(&s).unwrap(), "{}");
        let back: Schedule<u32> = serde_json::from_str("{}").unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn deserialize_rejects_gaps() {
        let r = serde_json::from_str::<Schedule<u32>>(r#"{"day_1":[1],"day_3":[2]}"#);
        assert!(r.is_err());
        let r = serde_json::from_str::<Schedule<u32>>(r#"{"day_2":[1]}"#);
        assert!(r.is_err());
    }

    #[test]
    fn deserialize_rejects_empty_day() {
        let r = serde_json::from_str::<Schedule<u32>>(r#"{"day_1":[1],"day_2":[]}"#);
        assert!(r.is_err());
    }

    #[test]
    fn deserialize_rejects_bad_keys() {
        for doc in [r#"{"bucket_1":[1]}"#, r#"{"day_0":[1]}"#, r#"{"day_1":[1],"day_01":[2]}"#] {
            assert!(serde_json::from_str::<Schedule<u32>>(doc).is_err(), "accepted {doc}");
        }
    }

    #[test]
    fn deserialize_accepts_unordered_keys() {
        let s: Schedule<u32> = serde_json::from_str(r#"{"day_2":[2],"day_1":[1]}"#).unwrap();
        assert_eq!(s.into_sequence(), vec![1, 2]);
    }

    #[test]
    fn from_days_checks_invariants() {
        let mut days = BTreeMap::new();
        days.insert(day(1), vec![1]);
        days.insert(day(2), vec![2, 3]);
        let s = Schedule::from_days(days.clone()).unwrap();
        assert_eq!(s.sizes(), vec![1, 2]);

        days.insert(day(4), vec![4]);
        assert!(Schedule::from_days(days).is_err());
    }

    #[test]
    fn ordered_buckets_are_numbered_from_day_one() {
        let s = Schedule::from_ordered_buckets(vec![vec![1, 2], vec![3], vec![4]]);
        let days: Vec<u32> = s.days().map(DayNumber::get).collect();
        assert_eq!(days, vec![1, 2, 3]);
        assert_eq!(s.day(day(3)), Some(&[4][..]));
        assert!(Schedule::<u32>::from_ordered_buckets(Vec::new()).is_empty());
    }

    #[test]
    fn accessors() {
        let s = distribute(vec!["a", "b", "c"], 2).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.item_count(), 3);
        assert!(s.contains_day(day(2)));
        assert!(!s.contains_day(day(3)));
        assert_eq!(s.last_day(), Some(day(2)));
        let days: Vec<u32> = s.days().map(DayNumber::get).collect();
        assert_eq!(days, vec![1, 2]);
        let pairs: Vec<(u32, usize)> = s.iter().map(|(d, v)| (d.get(), v.len())).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 1)]);
        assert_eq!(s.into_sequence(), vec!["a", "b", "c"]);
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog {
    use crate::{Book, ScheduleError};

    use super::*;

    #[test]
    fn loads_books() {
        let c = catalog();
        assert_eq!(c.len(), 5);
        assert_eq!(c.get(BookId(42)).unwrap().name, "John");
        assert_eq!(c.get(BookId(1)).unwrap().chapters, 40);
        assert!(c.get(BookId(2)).is_none());
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        let c = catalog();
        assert_eq!(c.find_by_name("genesis").unwrap().id, BookId(0));
        assert_eq!(c.find_by_name("  JOHN ").unwrap().id, BookId(42));
        assert!(c.find_by_name("Jude").is_none());
    }

    #[test]
    fn resolve_names_preserves_order() {
        let c = catalog();
        let ids = c.resolve_names(&["John", "Genesis"]).unwrap();
        assert_eq!(ids, vec![BookId(42), BookId(0)]);
        let err = c.resolve_names(&["John", "Hezekiah"]).unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownBookName(ref n) if n == "Hezekiah"));
    }

    #[test]
    fn expand_follows_selection_order() {
        let c = catalog();
        let seq = c.expand(&[BookId(56), BookId(42)]).unwrap();
        assert_eq!(seq.len(), 22);
        assert_eq!(seq[0], ChapterRef::new(BookId(56), 1));
        assert_eq!(seq[1], ChapterRef::new(BookId(42), 1));
        assert_eq!(seq[21], ChapterRef::new(BookId(42), 21));
        assert_eq!(c.chapter_count(&[BookId(56), BookId(42)]).unwrap(), 22);
    }

    #[test]
    fn expand_repeats_duplicates() {
        let seq = catalog().expand(&[BookId(56), BookId(56)]).unwrap();
        assert_eq!(seq, vec![ChapterRef::new(BookId(56), 1); 2]);
    }

    #[test]
    fn expand_unknown_book_errors() {
        let err = catalog().expand(&[BookId(0), BookId(99)]).unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownBook(BookId(99))));
    }

    #[test]
    fn expand_empty_selection() {
        assert!(catalog().expand(&[]).unwrap().is_empty());
    }

    #[test]
    fn rejects_duplicates_and_empty_books() {
        let book = |id: u16, name: &str, chapters: u16| Book { id: BookId(id), name: name.into(), chapters };
        assert!(BookCatalog::from_books(vec![book(0, "A", 1), book(0, "B", 1)]).is_err());
        assert!(BookCatalog::from_books(vec![book(0, "A", 1), book(1, "a", 1)]).is_err());
        assert!(BookCatalog::from_books(vec![book(0, "A", 0)]).is_err());
        assert!(BookCatalog::from_books(vec![book(0, " ", 3)]).is_err());
    }

    #[test]
    fn malformed_csv_errors() {
        let bad = b"book_id,name,chapters\n0,Genesis,fifty\n";
        let err = load_catalog_reader(Cursor::new(bad.as_slice())).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(_)));
    }

    #[test]
    fn whitespace_is_trimmed() {
        let csv = b"book_id, name, chapters\n 7 , Judges , 21 \n";
        let c = load_catalog_reader(Cursor::new(csv.as_slice())).unwrap();
        assert_eq!(c.get(BookId(7)).unwrap().name, "Judges");
    }
}

// ── Plan builder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod plan {
    use crate::ScheduleError;

    use super::*;

    #[test]
    fn builds_gospel_plan() {
        // Matthew (28) + John (21) = 49 chapters over 14 days.
        let p = plan(&[39, 42], 14);
        assert_eq!(p.name, "Test plan");
        assert_eq!(p.duration_days, 14);
        assert_eq!(p.chapter_count(), 49);
        assert_eq!(p.schedule.len(), 14);
        assert_eq!(p.reading_for(day(1)).len(), 4);
        assert_eq!(p.reading_for(day(14)).len(), 3);
        assert_eq!(p.reading_for(day(1))[0], ChapterRef::new(BookId(39), 1));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rest_days_read_nothing() {
        let p = plan(&[56], 30);
        assert_eq!(p.schedule.len(), 1);
        assert!(p.reading_for(day(2)).is_empty());
        assert!(p.reading_for(day(30)).is_empty());
    }

    #[test]
    fn name_is_trimmed_and_required() {
        let mut req = request(&[0], 10);
        req.name = "  Torah  ".into();
        let p = build_plan(&catalog(), &req, &PlannerConfig::default()).unwrap();
        assert_eq!(p.name, "Torah");

        req.name = "   ".into();
        let err = build_plan(&catalog(), &req, &PlannerConfig::default()).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_bad_durations() {
        let cfg = PlannerConfig { max_duration_days: 100, ..PlannerConfig::default() };
        for d in [0, -5, 101] {
            let err = build_plan(&catalog(), &request(&[0], d), &cfg).unwrap_err();
            assert!(matches!(err, ScheduleError::InvalidArgument(_)), "duration {d}");
        }
        assert!(build_plan(&catalog(), &request(&[0], 100), &cfg).is_ok());
    }

    #[test]
    fn rejects_unknown_book() {
        let err = build_plan(&catalog(), &request(&[0, 3], 10), &PlannerConfig::default()).unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownBook(BookId(3))));
    }

    #[test]
    fn empty_selection_gives_empty_plan() {
        let p = plan(&[], 7);
        assert!(p.schedule.is_empty());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn validate_catches_overlong_schedule() {
        let mut p = plan(&[42], 21);
        p.duration_days = 10;
        assert!(p.validate().is_err());
        p.duration_days = 0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn json_document_shape() {
        let p = plan(&[56], 3);
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["duration_days"], 3);
        assert_eq!(v["books"], serde_json::json!([56]));
        assert_eq!(v["schedule"]["day_1"], serde_json::json!([{"book": 56, "chapter": 1}]));
        let back: ReadingPlan = serde_json::from_value(v).unwrap();
        assert_eq!(back, p);
    }
}

// ── Progress ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod progress {
    use crate::{PlanProgress, ScheduleError};

    use super::*;

    #[test]
    fn tracks_completion() {
        let p = plan(&[42], 7); // 21 chapters, 7 reading days
        let mut prog = PlanProgress::new(&p);
        assert_eq!(prog.percent_complete(), 0.0);
        assert_eq!(prog.next_unread_day(), Some(day(1)));

        prog.mark_complete(day(1)).unwrap();
        prog.mark_complete(day(3)).unwrap();
        prog.mark_complete(day(3)).unwrap();
        assert_eq!(prog.completed_count(), 2);
        assert!(prog.is_complete(day(3)));
        assert!(!prog.is_complete(day(2)));
        assert_eq!(prog.next_unread_day(), Some(day(2)));
        let done: Vec<u32> = prog.completed_days().map(DayNumber::get).collect();
        assert_eq!(done, vec![1, 3]);
    }

    #[test]
    fn finishing_every_day() {
        let p = plan(&[56, 42], 4);
        let mut prog = PlanProgress::new(&p);
        for (d, _) in p.schedule.iter() {
            prog.mark_complete(d).unwrap();
        }
        assert!(prog.is_finished());
        assert_eq!(prog.percent_complete(), 100.0);
        assert!(prog.next_unread_day().is_none());
    }

    #[test]
    fn rest_days_cannot_be_marked() {
        let p = plan(&[56], 5);
        let mut prog = PlanProgress::new(&p);
        let err = prog.mark_complete(day(2)).unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownDay { day: d } if d == day(2)));
    }

    #[test]
    fn unmark() {
        let p = plan(&[42], 3);
        let mut prog = PlanProgress::new(&p);
        prog.mark_complete(day(2)).unwrap();
        assert!(prog.unmark(day(2)).unwrap());
        assert!(!prog.unmark(day(2)).unwrap());
        assert!(prog.unmark(day(9)).is_err());
    }

    #[test]
    fn empty_plan_is_finished() {
        let prog = PlanProgress::new(&plan(&[], 3));
        assert!(prog.is_finished());
        assert_eq!(prog.percent_complete(), 100.0);
        assert!(prog.next_unread_day().is_none());
    }

    #[test]
    fn stored_progress_round_trip() {
        let p = plan(&[42], 7);
        let mut prog = PlanProgress::new(&p);
        prog.mark_complete(day(2)).unwrap();
        let back: PlanProgress = serde_json::from_str(&serde_json::to_string(&prog).unwrap()).unwrap();
        assert_eq!(back, prog);
    }

    #[test]
    fn stored_progress_past_last_day_rejected() {
        // Day 5 does not exist in a two-day plan; accepting it would make the
        // plan look finished while day 2 is unread.
        let r = serde_json::from_str::<PlanProgress>(r#"{"reading_days":2,"completed":[1,5]}"#);
        assert!(r.is_err());

        // More completed days than the plan has would push past 100%.
        let r = serde_json::from_str::<PlanProgress>(r#"{"reading_days":1,"completed":[1,2,3]}"#);
        assert!(r.is_err());

        let r = serde_json::from_str::<PlanProgress>(r#"{"reading_days":0,"completed":[1]}"#);
        assert!(r.is_err());
    }

    #[test]
    fn stored_progress_with_day_zero_rejected() {
        let r = serde_json::from_str::<PlanProgress>(r#"{"reading_days":3,"completed":[0]}"#);
        assert!(r.is_err());
    }

    #[test]
    fn stored_progress_within_bounds_accepted() {
        let prog: PlanProgress =
            serde_json::from_str(r#"{"reading_days":2,"completed":[2]}"#).unwrap();
        assert!(!prog.is_finished());
        assert_eq!(prog.next_unread_day(), Some(day(1)));
        assert_eq!(prog.percent_complete(), 50.0);
    }

    #[test]
    fn partial_percent() {
        let p = plan(&[42], 4);
        let mut prog = PlanProgress::new(&p);
        prog.mark_complete(day(1)).unwrap();
        assert!((prog.percent_complete() - 25.0).abs() < 1e-9);
    }
}
