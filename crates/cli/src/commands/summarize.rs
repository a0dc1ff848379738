use anyhow::{Context, Result};
use agepop_analysis::{summarize, Summary};
use agepop_sim::storage::ResultsFile;
use std::fmt::Write;

use crate::args::SummarizeArgs;

pub fn summarize_results(args: &SummarizeArgs) -> Result<()> {
    let results = ResultsFile::load(&args.input)
        .with_context(|| format!("Failed to load results {}", args.input.display()))?;
    let summary = summarize(&results.statistics, args.quasi_extinction)
        .context("Failed to summarize results")?;

    let content = match args.format.as_str() {
        "pretty" => format_pretty(&summary, args.every.max(1))?,
        "json" => serde_json::to_string_pretty(&summary)?,
        other => anyhow::bail!("Unknown format '{other}'. Use: pretty or json"),
    };

    if let Some(path) = &args.output {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    } else {
        println!("{content}");
    }

    Ok(())
}

fn format_pretty(summary: &Summary, every: usize) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "\n📊 Projection Summary")?;
    writeln!(out, "================================")?;
    writeln!(
        out,
        "Runs: {}  Years: {}  Age classes: {}\n",
        summary.runs, summary.years, summary.classes
    )?;

    writeln!(out, "Total population:")?;
    write!(
        out,
        "{:>6} {:>10} {:>9} {:>8} {:>8} {:>8} {:>8} {:>8} {:>7}",
        "year", "mean", "sd", "min", "q2.5", "median", "q97.5", "max", "P(ext)"
    )?;
    if let Some(quasi) = &summary.quasi_extinction {
        write!(out, " {:>9}", format!("P(≤{})", quasi.threshold))?;
    }
    writeln!(out, " {:>7}", "growth")?;

    for row in &summary.trajectory {
        let year = row.year;
        if year % every != 0 && year != summary.years {
            continue;
        }

        write!(
            out,
            "{:>6} {:>10.2} {:>9.2} {:>8} {:>8.1} {:>8.1} {:>8.1} {:>8} {:>7.3}",
            year,
            row.mean,
            row.sd,
            row.min,
            row.q025,
            row.median,
            row.q975,
            row.max,
            summary.extinction[year]
        )?;
        if let Some(quasi) = &summary.quasi_extinction {
            write!(out, " {:>9.3}", quasi.probability[year])?;
        }
        // Growth into this year from the previous one.
        let growth = year
            .checked_sub(1)
            .and_then(|prev| summary.growth_rates[prev]);
        match growth {
            Some(g) => writeln!(out, " {g:>7.3}")?,
            None => writeln!(out, " {:>7}", "-")?,
        }
    }

    if let Some(last) = summary.class_means.last() {
        writeln!(out, "\nMean individuals per age class in year {}:", summary.years)?;
        for (class, mean) in last.iter().enumerate() {
            writeln!(out, "  • class {class}: {mean:.2}")?;
        }
    }

    Ok(out)
}
