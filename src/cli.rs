// src/cli.rs
use std::{env, io::Write, path::PathBuf};

use crate::{
    config::{options::{RunOptions, SourceKind}, reference::ReferenceData},
    data::League,
    error::{Error, Result},
    log,
    progress::Progress,
    records::{Longest1000PointStreaks, LongestLosingStreaks, LongestWinningStreaks, StreakRecordProvider},
    scrape::LeagueParser,
    source::{OnlinePageSource, PageSource},
    store::CachedPageSource,
    teams::TeamResolver,
};

const HELP: &str = include_str!("cli_help.txt");

pub fn run() -> Result<()> {
    let Some(opts) = parse_cli(env::args().skip(1))? else {
        eprintln!("{HELP}");
        return Ok(());
    };
    log::init(log::parse_level(&opts.log_level));

    let reference = match &opts.reference {
        Some(path) => ReferenceData::load(path)?,
        None => ReferenceData::bundled()?,
    };

    let cache = CachedPageSource::new(&opts.cache_dir);
    let online = OnlinePageSource::new();
    if opts.refresh_cache {
        let n = cache.refresh(&online, opts.years())?;
        logf!("Refreshed {n} pages in {}", cache.dir().display());
    }
    let source: &dyn PageSource = match opts.source {
        SourceKind::Online => &online,
        SourceKind::Cached => &cache,
    };

    let mut league = League::new();
    let mut parser = LeagueParser::new(reference);
    let mut progress = TermProgress::default();
    parser.parse(source, &mut league, opts.years(), Some(&mut progress))?;

    print_seasons(&league);
    if opts.show_spellings {
        print_spellings(parser.resolver());
    }
    print_records(&league, opts.record_count)
}

/// `Ok(None)` means help was asked for.
pub fn parse_cli(args: impl IntoIterator<Item = String>) -> Result<Option<RunOptions>> {
    let mut opts = RunOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--from" => opts.first_year = parse_num(&a, args.next())?,
            "--to" => opts.last_year = parse_num(&a, args.next())?,
            "--cache-dir" => opts.cache_dir = PathBuf::from(value(&a, args.next())?),
            "--online" => opts.source = SourceKind::Online,
            "--refresh" => opts.refresh_cache = true,
            "--reference" => opts.reference = Some(PathBuf::from(value(&a, args.next())?)),
            "--spellings" => opts.show_spellings = true,
            "--records" => opts.record_count = parse_num(&a, args.next())?,
            "--log" => opts.log_level = value(&a, args.next())?,
            "-h" | "--help" => return Ok(None),
            _ => return Err(Error::Usage(format!("Unknown arg: {a}"))),
        }
    }

    if opts.first_year > opts.last_year {
        return Err(Error::Usage(format!(
            "--from {} is after --to {}",
            opts.first_year, opts.last_year
        )));
    }
    Ok(Some(opts))
}

fn value(flag: &str, v: Option<String>) -> Result<String> {
    v.ok_or_else(|| Error::Usage(format!("Missing value for {flag}")))
}

fn parse_num<T: std::str::FromStr>(flag: &str, v: Option<String>) -> Result<T> {
    let v = value(flag, v)?;
    v.parse()
        .map_err(|_| Error::Usage(format!("Not a number for {flag}: {v}")))
}

/// Prints "Parsing" followed by the years, ten to a line.
#[derive(Default)]
struct TermProgress {
    done: usize,
}

impl Progress for TermProgress {
    fn begin(&mut self, total: usize) {
        eprint!("Parsing {total} seasons:");
    }

    fn year_done(&mut self, year: i32) {
        if self.done % 10 == 0 {
            eprint!("\n ");
        }
        eprint!(" {year}");
        let _ = std::io::stderr().flush();
        self.done += 1;
    }

    fn finish(&mut self) {
        eprintln!();
    }
}

fn print_seasons(league: &League) {
    for (_, season) in league.seasons() {
        let games: usize = season
            .weeks
            .iter()
            .chain(&season.playoffs)
            .map(|w| league.week(*w).games.len())
            .sum();
        let champion = season
            .playoffs
            .last()
            .map(|w| league.week(*w))
            .and_then(|w| w.games.first())
            .and_then(|g| league.game(*g).winner(league).ok())
            .map(|ts| league.team(ts.team).name.as_str())
            .unwrap_or("-");
        println!(
            "{}  {:>2} weeks  {:>2} playoff rounds  {:>3} games  champion: {champion}",
            season.year,
            season.weeks.len(),
            season.playoffs.len(),
            games,
        );
    }
}

fn print_spellings(resolver: &TeamResolver) {
    println!("\nTeam spellings");
    for (spelling, n) in resolver.spellings() {
        println!("  {n:>4}  {spelling}");
    }
}

fn print_records(league: &League, count: usize) -> Result<()> {
    let providers: [Box<dyn StreakRecordProvider>; 3] = [
        Box::new(LongestWinningStreaks::new(count)),
        Box::new(LongestLosingStreaks::new(count)),
        Box::new(Longest1000PointStreaks::new(count)),
    ];

    for provider in &providers {
        let d = provider.descriptor();
        println!("\n{}\n{}", d.title, d.summary);
        for (i, r) in provider.records(league)?.iter().enumerate() {
            println!(
                "  {:>2}. {:<28} {:>2} games  {} → {}",
                i + 1,
                league.team(r.team).name,
                r.value,
                league.week_display_name(r.from),
                league.week_display_name(r.to),
            );
        }
    }
    Ok(())
}
