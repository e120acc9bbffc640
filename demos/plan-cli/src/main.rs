//! plan-cli — create and inspect reading plans from the command line.
//!
//! ```text
//! plan-cli --store-dir plans create --name "Gospels" --days 30 Matthew Mark Luke John
//! plan-cli --store-dir plans show 1 --day 3
//! plan-cli --store-dir plans list
//! ```
//!
//! Without `--store-dir` or `--sqlite` plans live in memory and vanish when
//! the process exits, which is still useful with `create --json`.

mod cli;

use std::io::Cursor;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rp_core::{DayNumber, PlanId, PlannerConfig};
use rp_schedule::{BookCatalog, PlanRequest, ReadingPlan, build_plan, load_catalog_csv, load_catalog_reader};
use rp_store::{JsonDirStore, MemoryStore, PlanStore, SqliteStore, export_schedule_csv};

use cli::{Cli, Command};

// ── Bundled catalog ───────────────────────────────────────────────────────────

// Protestant canon, 66 books, 1189 chapters.
const BUNDLED_CATALOG: &str = include_str!("../data/books.csv");

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlannerConfig::default(),
    };
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog.clone();
    }
    if cli.store_dir.is_some() {
        config.store_dir = cli.store_dir.clone();
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let catalog = load_catalog(&config)?;
    tracing::debug!(books = catalog.len(), "loaded catalog");
    let mut store = open_store(&cli, &config)?;

    run(cli.command, &catalog, store.as_mut(), &config)
}

fn run(
    command: Command,
    catalog: &BookCatalog,
    store:   &mut dyn PlanStore,
    config:  &PlannerConfig,
) -> Result<()> {
    match command {
        Command::Create { name, days, books, csv, json } => {
            let request = PlanRequest {
                name,
                books: catalog.resolve_names(books.as_slice())?,
                duration_days: days,
            };
            let plan = build_plan(catalog, &request, config)?;

            // Export before storing so a failed export leaves no plan behind.
            if let Some(path) = csv {
                export_schedule_csv(&path, &plan.schedule, catalog)
                    .with_context(|| format!("exporting {}", path.display()))?;
            }
            let id = store.insert(&plan)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!(
                    "created {id}: {:?}, {} chapters over {} days",
                    plan.name,
                    plan.chapter_count(),
                    plan.duration_days
                );
            }
        }

        Command::Show { id, day } => {
            let plan = store
                .get(PlanId(id))?
                .with_context(|| format!("no plan with id {id}"))?;
            match day {
                Some(n) => {
                    let Some(day) = DayNumber::new(n) else { bail!("days start at 1") };
                    if n > plan.duration_days {
                        bail!("plan {id} lasts {} days", plan.duration_days);
                    }
                    println!("{}", describe_day(&plan, day, catalog));
                }
                None => {
                    println!("{} ({} days)", plan.name, plan.duration_days);
                    for day in plan.schedule.days() {
                        println!("  {}", describe_day(&plan, day, catalog));
                    }
                }
            }
        }

        Command::List => {
            for summary in store.list()? {
                println!("{:>6}  {:>5} days  {}", summary.id.0, summary.duration_days, summary.name);
            }
        }

        Command::Delete { id } => {
            if !store.delete(PlanId(id))? {
                bail!("no plan with id {id}");
            }
        }

        Command::Books => {
            for book in catalog.books() {
                println!("{:>3}  {:<18} {:>3}", book.id.0, book.name, book.chapters);
            }
        }
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_catalog(config: &PlannerConfig) -> Result<BookCatalog> {
    match &config.catalog_path {
        Some(path) => load_catalog_csv(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Ok(load_catalog_reader(Cursor::new(BUNDLED_CATALOG))?),
    }
}

fn open_store(cli: &Cli, config: &PlannerConfig) -> Result<Box<dyn PlanStore>> {
    if let Some(path) = &cli.sqlite {
        return Ok(Box::new(SqliteStore::open(path)?));
    }
    match &config.store_dir {
        Some(dir) => Ok(Box::new(JsonDirStore::new(dir)?)),
        None => Ok(Box::new(MemoryStore::new())),
    }
}

/// `day 3: Genesis 7, Genesis 8, Genesis 9`
fn describe_day(plan: &ReadingPlan, day: DayNumber, catalog: &BookCatalog) -> String {
    let chapters = plan.reading_for(day);
    if chapters.is_empty() {
        return format!("{day}: rest");
    }
    let list: Vec<String> = chapters
        .iter()
        .map(|ch| match catalog.get(ch.book) {
            Some(book) => format!("{} {}", book.name, ch.chapter),
            None => ch.to_string(),
        })
        .collect();
    format!("{day}: {}", list.join(", "))
}
