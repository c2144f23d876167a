//! `regiontime` — command-line front end for the region-engine date
//! library. Every subcommand takes RFC 3339 instants and an optional
//! region (IANA timezone + locale name) and prints JSON or plain text.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;

use region_engine::{AbsoluteTime, ComponentDelta, Region, TimeUnit};

#[derive(Parser)]
#[command(name = "regiontime", version, about = "Region-aware date computations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decompose an instant into calendar components for a region.
    Project {
        /// An RFC 3339 datetime (e.g. "2021-06-15T12:00:00Z").
        datetime: String,
        /// IANA timezone name.
        #[arg(long, default_value = "UTC")]
        tz: String,
        /// Locale name (e.g. "en_US").
        #[arg(long, default_value = "en_US")]
        locale: String,
    },
    /// Add a signed component delta to an instant.
    Add {
        datetime: String,
        /// Delta string: sign then unit components, e.g. "+1y2mo3d",
        /// "-90m". Units: y, mo, w, d, h, m, s, ns.
        #[arg(long)]
        delta: String,
        #[arg(long, default_value = "UTC")]
        tz: String,
        #[arg(long, default_value = "en_US")]
        locale: String,
    },
    /// Component-wise difference between two instants.
    Diff {
        start: String,
        end: String,
        #[arg(long, default_value = "UTC")]
        tz: String,
        #[arg(long, default_value = "en_US")]
        locale: String,
    },
    /// Render an instant with a strftime pattern.
    Fmt {
        datetime: String,
        #[arg(long)]
        pattern: String,
        #[arg(long, default_value = "UTC")]
        tz: String,
        #[arg(long, default_value = "en_US")]
        locale: String,
    },
    /// Phrase an instant relative to a reference instant.
    Relative {
        datetime: String,
        /// The reference instant.
        #[arg(long)]
        to: String,
        #[arg(long, default_value = "UTC")]
        tz: String,
        #[arg(long, default_value = "en_US")]
        locale: String,
        /// Maximum number of units to mention.
        #[arg(long, default_value_t = 2)]
        max_units: usize,
        /// Use compact unit symbols ("1h 30m ago").
        #[arg(long)]
        short: bool,
    },
}

#[derive(Serialize)]
struct Adjusted {
    original: String,
    adjusted: String,
    delta: ComponentDelta,
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Command::Project {
            datetime,
            tz,
            locale,
        } => {
            let region = Region::from_names(&tz, &locale)?;
            let t = AbsoluteTime::from_rfc3339(&datetime)?;
            let components = t.components(&region);
            println!("{}", serde_json::to_string_pretty(&components)?);
        }
        Command::Add {
            datetime,
            delta,
            tz,
            locale,
        } => {
            let region = Region::from_names(&tz, &locale)?;
            let t = AbsoluteTime::from_rfc3339(&datetime)?;
            let parsed = parse_delta(&delta)?;
            let adjusted = t
                .add(parsed, &region)
                .with_context(|| format!("cannot apply '{delta}'"))?;
            let out = Adjusted {
                original: t.to_rfc3339(),
                adjusted: adjusted.to_rfc3339(),
                delta: parsed,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Diff {
            start,
            end,
            tz,
            locale,
        } => {
            let region = Region::from_names(&tz, &locale)?;
            let a = AbsoluteTime::from_rfc3339(&start)?;
            let b = AbsoluteTime::from_rfc3339(&end)?;
            let units = [
                TimeUnit::Year,
                TimeUnit::Month,
                TimeUnit::Day,
                TimeUnit::Hour,
                TimeUnit::Minute,
                TimeUnit::Second,
            ];
            let delta = a.difference(b, &units, &region)?;
            println!("{}", serde_json::to_string_pretty(&delta)?);
        }
        Command::Fmt {
            datetime,
            pattern,
            tz,
            locale,
        } => {
            let region = Region::from_names(&tz, &locale)?;
            let t = AbsoluteTime::from_rfc3339(&datetime)?;
            println!("{}", t.format(&pattern, &region)?);
        }
        Command::Relative {
            datetime,
            to,
            tz,
            locale,
            max_units,
            short,
        } => {
            let region = Region::from_names(&tz, &locale)?;
            let t = AbsoluteTime::from_rfc3339(&datetime)?;
            let reference = AbsoluteTime::from_rfc3339(&to)?;
            match t.to_relative_string(reference, &region, max_units, short) {
                Some(phrase) => println!("{phrase}"),
                None => bail!("no relative phrase for '{datetime}' against '{to}'"),
            }
        }
    }
    Ok(())
}

/// Parse a delta string: a sign, then number/unit components
/// ("+1y2mo3d", "-90m"). Units: y, mo, w, d, h, m, s, ns.
fn parse_delta(s: &str) -> anyhow::Result<ComponentDelta> {
    let s = s.trim();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1i64, &s[1..]),
        Some(b'-') => (-1i64, &s[1..]),
        _ => bail!("delta must start with '+' or '-': '{s}'"),
    };
    if rest.is_empty() {
        bail!("delta has no components: '{s}'");
    }

    let mut delta = ComponentDelta::new();
    let mut chars = rest.chars().peekable();
    let mut found_any = false;
    while chars.peek().is_some() {
        let mut num = String::new();
        while let Some(&ch) = chars.peek() {
            if ch.is_ascii_digit() {
                num.push(ch);
                chars.next();
            } else {
                break;
            }
        }
        let mut unit = String::new();
        while let Some(&ch) = chars.peek() {
            if ch.is_ascii_alphabetic() {
                unit.push(ch);
                chars.next();
            } else {
                break;
            }
        }
        if num.is_empty() {
            bail!("expected number before '{unit}' in '{s}'");
        }
        if unit.is_empty() {
            bail!("number without unit at end of '{s}'");
        }
        let n: i64 = num
            .parse()
            .with_context(|| format!("invalid number in '{s}'"))?;
        let n = sign * n;
        match unit.as_str() {
            "y" => delta.years += n,
            "mo" => delta.months += n,
            "w" => delta.weeks += n,
            "d" => delta.days += n,
            "h" => delta.hours += n,
            "m" => delta.minutes += n,
            "s" => delta.seconds += n,
            "ns" => delta.nanoseconds += n,
            other => bail!("unknown unit '{other}' in '{s}'"),
        }
        found_any = true;
    }
    if !found_any {
        bail!("no valid components in '{s}'");
    }
    Ok(delta)
}
