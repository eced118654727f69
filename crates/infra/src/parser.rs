//! Plain-text almanac format.
//!
//! ```text
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//! ```
//!
//! Every error carries the 1-based line number it was found on.

use std::{fmt::Write as _, iter::Peekable, sync::OnceLock};

use almanac_domain::{Almanac, Mapping, MappingChain, MappingRange};
use almanac_shared_kernel::{InfraResult, InfrastructureError, Result, Unit};
use regex::Regex;

fn header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([\w]+)-to-([\w]+) map:$").unwrap())
}

const SEEDS_PREFIX: &str = "seeds:";

/// Parses the `seeds:` line into its raw numbers.
pub fn parse_seed_list(line_no: usize, line: &str) -> InfraResult<Vec<u64>> {
    let Some(rest) = line.trim().strip_prefix(SEEDS_PREFIX) else {
        return Err(InfrastructureError::InvalidSeedList { line: line_no, content: line.to_string() });
    };
    rest.split_whitespace()
        .map(|field| parse_number(line_no, "seed", field))
        .collect()
}

/// Parses `"<source>-to-<destination> map:"` into its two units.
pub fn parse_header(line_no: usize, line: &str) -> InfraResult<(Unit, Unit)> {
    header_re()
        .captures(line.trim())
        .map(|caps| (Unit::new(&caps[1]), Unit::new(&caps[2])))
        .ok_or_else(|| InfrastructureError::InvalidHeader { line: line_no, content: line.to_string() })
}

/// Parses `"<destinationStart> <sourceStart> <length>"`.
pub fn parse_range_line(line_no: usize, line: &str) -> Result<MappingRange> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [destination, source, length] = fields[..] else {
        return Err(InfrastructureError::InvalidRangeLine {
            line: line_no,
            fields: fields.len(),
            content: line.to_string(),
        }
        .into());
    };
    let destination = parse_number(line_no, "destination start", destination)?;
    let source = parse_number(line_no, "source start", source)?;
    let length = parse_number(line_no, "range length", length)?;
    Ok(MappingRange::new(destination, source, length)?)
}

fn parse_number(line_no: usize, field: &'static str, value: &str) -> InfraResult<u64> {
    value.parse().map_err(|source| InfrastructureError::NumberParse {
        line: line_no,
        field,
        value: value.to_string(),
        source,
    })
}

fn skip_blank<'a, I>(lines: &mut Peekable<I>)
where
    I: Iterator<Item = (usize, &'a str)>,
{
    while lines.next_if(|(_, line)| line.trim().is_empty()).is_some() {}
}

fn numbered<'a>(text: &'a str) -> Peekable<impl Iterator<Item = (usize, &'a str)>> {
    text.lines().enumerate().map(|(i, line)| (i + 1, line)).peekable()
}

/// Reads one block: a header and the data lines up to the next blank line,
/// the next header or the end of input.
pub fn deserialize_mapping<'a, I>(lines: &mut Peekable<I>) -> Result<Mapping>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    skip_blank(lines);
    let Some((line_no, header)) = lines.next() else {
        return Err(InfrastructureError::InvalidHeader { line: 0, content: String::new() }.into());
    };
    let (source, destination) = parse_header(line_no, header)?;

    let mut ranges = Vec::new();
    while let Some((line_no, line)) =
        lines.next_if(|(_, line)| !line.trim().is_empty() && !header_re().is_match(line.trim()))
    {
        ranges.push(parse_range_line(line_no, line)?);
    }
    log::debug!("{source}-to-{destination}: {} rule(s)", ranges.len());
    Ok(Mapping::new(source, destination, ranges))
}

/// Parses a single block.
pub fn parse_mapping(text: &str) -> Result<Mapping> {
    deserialize_mapping(&mut numbered(text))
}

/// Parses a whole almanac and links its blocks into a chain.
///
/// Blocks may appear in any order; the chain starts at the one unit no
/// other block produces.
pub fn parse_almanac(text: &str) -> Result<Almanac> {
    let mut lines = numbered(text);
    skip_blank(&mut lines);
    let seeds = match lines.next() {
        Some((line_no, line)) => parse_seed_list(line_no, line)?,
        None => {
            return Err(InfrastructureError::InvalidSeedList { line: 1, content: String::new() }.into());
        }
    };

    let mut mappings = Vec::new();
    loop {
        skip_blank(&mut lines);
        if lines.peek().is_none() {
            break;
        }
        mappings.push(deserialize_mapping(&mut lines)?);
    }

    let start = mappings
        .iter()
        .find(|m| !mappings.iter().any(|other| other.destination() == m.source()))
        .or_else(|| mappings.first())
        .map_or_else(|| Unit::new("seed"), |m| m.source().clone());
    let chain = MappingChain::link(mappings, start)?;
    Ok(Almanac::new(seeds, chain))
}

/// Renders a block in the format [`parse_mapping`] reads, rules in order.
pub fn serialize_mapping(mapping: &Mapping) -> String {
    let mut out = format!("{}-to-{} map:\n", mapping.source(), mapping.destination());
    for rule in mapping.ranges() {
        let _ = writeln!(out, "{} {} {}", rule.destination_start(), rule.source_start(), rule.length());
    }
    out
}

/// Renders a whole almanac, blocks separated by blank lines.
pub fn serialize_almanac(almanac: &Almanac) -> String {
    let seeds: Vec<String> = almanac.seeds().iter().map(u64::to_string).collect();
    let mut out = format!("{SEEDS_PREFIX} {}\n", seeds.join(" "));
    for stage in almanac.chain().stages() {
        out.push('\n');
        out.push_str(&serialize_mapping(stage));
    }
    out
}
