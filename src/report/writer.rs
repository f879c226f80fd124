//! Plain-text statistics report

use crate::model::{format_rounded, Addition, Metric};
use crate::stats::{
    average_metric, average_metric_per_person, extremal, top_artists, top_artists_per_person,
    top_genres, top_genres_per_person, ContributorTop, ItemCount,
};
use anyhow::{Context, Result};
use std::fmt::Write;
use std::path::Path;

/// Width of the `#` banner around section titles
const BANNER_WIDTH: usize = 30;

/// Render the report for a playlist
///
/// `collaborative` adds the per-person section and names the contributor
/// next to each song statistic.
pub fn render_report(additions: &[Addition], top_k: usize, collaborative: bool) -> Result<String> {
    let mut out = String::new();

    write_header(&mut out, "Playlist Statistics")?;

    writeln!(out, "Top {} artists:", top_k)?;
    write_counts(&mut out, &top_artists(additions, top_k))?;
    writeln!(out)?;

    writeln!(out, "Top {} genres:", top_k)?;
    write_counts(&mut out, &top_genres(additions, top_k))?;
    writeln!(out)?;

    for metric in Metric::AVERAGED {
        let value = average_metric(additions, metric)
            .with_context(|| format!("Failed to average {}", metric))?;
        writeln!(out, "{}: {}", metric, format_rounded(value))?;
    }
    writeln!(out)?;

    if collaborative {
        write_header(&mut out, "Statistics Per Person")?;

        writeln!(out, "Top artist:")?;
        write_person_tops(&mut out, &top_artists_per_person(additions))?;
        writeln!(out)?;

        writeln!(out, "Top genre:")?;
        write_person_tops(&mut out, &top_genres_per_person(additions))?;
        writeln!(out)?;

        for metric in Metric::AVERAGED {
            writeln!(out, "{}:", metric)?;
            for average in average_metric_per_person(additions, metric)? {
                writeln!(out, "{}: {}", average.contributor, format_rounded(average.value))?;
            }
            writeln!(out)?;
        }
    }

    write_header(&mut out, "Song Statistics")?;
    for metric in Metric::RANKED {
        let highest = extremal(additions, metric, false)?;
        write_song(&mut out, "Highest", metric, highest, collaborative)?;

        let lowest = extremal(additions, metric, true)?;
        write_song(&mut out, "Lowest", metric, lowest, collaborative)?;
        writeln!(out)?;
    }

    Ok(out)
}

/// Render the report and write it to `path`
pub fn write_report(
    path: &Path,
    additions: &[Addition],
    top_k: usize,
    collaborative: bool,
) -> Result<()> {
    let report = render_report(additions, top_k, collaborative)?;
    std::fs::write(path, report)
        .with_context(|| format!("Failed to write report: {:?}", path))?;

    log::info!("Report written to: {:?}", path);
    Ok(())
}

fn write_header(out: &mut String, title: &str) -> Result<()> {
    let banner = "#".repeat(BANNER_WIDTH);
    writeln!(out, "{}", banner)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", banner)?;
    Ok(())
}

fn write_counts(out: &mut String, counts: &[ItemCount]) -> Result<()> {
    for item in counts {
        writeln!(out, "{}: {}", item.name, item.count)?;
    }
    Ok(())
}

fn write_person_tops(out: &mut String, tops: &[ContributorTop]) -> Result<()> {
    for entry in tops {
        match &entry.top {
            Some(top) => writeln!(out, "{}: {} ({})", entry.contributor, top.name, top.count)?,
            None => writeln!(out, "{}: -", entry.contributor)?,
        }
    }
    Ok(())
}

fn write_song(
    out: &mut String,
    label: &str,
    metric: Metric,
    addition: &Addition,
    collaborative: bool,
) -> Result<()> {
    write!(
        out,
        "{} {}: {}, {}",
        label,
        metric,
        addition.name,
        metric.display_value(addition)
    )?;
    if collaborative {
        write!(out, ", {}", addition.contributor)?;
    }
    writeln!(out)?;
    Ok(())
}
