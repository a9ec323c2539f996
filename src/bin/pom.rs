// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use chrono::{DateTime, Local, TimeZone};
use clap::{ArgGroup, Parser};
use pom::{format_minute, parse_date, MoonClock, Render, SearchConfig, Target};

#[derive(Parser)]
#[command(name = "pom", about = "Phase of the Moon", version)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["now", "week", "month", "days", "full", "new", "date"]),
))]
struct Cli {
    /// Moon status right now
    #[arg(long)]
    now: bool,
    /// Moon status for the next seven days, four times a day
    #[arg(long)]
    week: bool,
    /// Moon status for the next 28 days, twice a day
    #[arg(long)]
    month: bool,
    /// Moon status for the next N days
    #[arg(long, value_name = "N")]
    days: Option<u32>,
    /// Samples per day with --days
    #[arg(long, value_name = "K", default_value = "4", requires = "days")]
    per_day: u32,
    /// Give next full moon date
    #[arg(long)]
    full: bool,
    /// Give next new moon date
    #[arg(long)]
    new: bool,
    /// Moon status at the given UTC date (YYYY-MM[-DD[:HH]])
    #[arg(long, value_name = "DATE")]
    date: Option<String>,
    /// Print moon status with pounds instead (listing modes)
    #[arg(long)]
    pound: bool,
    /// Print listing lines without the phase label
    #[arg(long)]
    unlabelled: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let clock = MoonClock::new().context("building the reference epoch")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.now {
        writeln!(out, "{}", clock.classify(&Local::now()))?;
    } else if let Some((days, per_day)) = plan(&cli) {
        let render = render_style(&cli);
        list(&mut out, &clock, &Local::now(), days, per_day, render, !cli.unlabelled)?;
    } else if cli.full {
        search(&mut out, &clock, Target::Full)?;
    } else if cli.new {
        search(&mut out, &clock, Target::New)?;
    } else if let Some(date) = cli.date.as_deref() {
        let instant = parse_date(date)?;
        writeln!(out, "{}", clock.classify(&instant))?;
    }

    out.flush()?;
    Ok(())
}

/// Listing grid of the selected mode as `(days, records per day)`.
fn plan(cli: &Cli) -> Option<(u32, u32)> {
    if cli.week {
        Some((7, 4))
    } else if cli.month {
        Some((28, 2))
    } else {
        cli.days.map(|days| (days, cli.per_day))
    }
}

fn render_style(cli: &Cli) -> Render {
    if cli.pound {
        Render::Bar
    } else {
        Render::Label
    }
}

fn list<W: Write, Tz: TimeZone>(
    out: &mut W,
    clock: &MoonClock,
    start: &DateTime<Tz>,
    days: u32,
    per_day: u32,
    render: Render,
    labelled: bool,
) -> anyhow::Result<()> {
    let samples = clock.sample(start, days, per_day)?.labelled(labelled);
    for record in &samples {
        writeln!(out, "{}", record.render(render))?;
    }
    Ok(())
}

fn search<W: Write>(out: &mut W, clock: &MoonClock, target: Target) -> anyhow::Result<()> {
    let found = clock
        .next_phase(target, &Local::now(), &SearchConfig::default())
        .with_context(|| format!("searching for the next {target} moon"))?;
    writeln!(out, "{}", format_minute(&found))?;
    Ok(())
}
