//! State-table loading and validation.
//!
//! Reads the per-state input CSV (the reference `state_info.csv` format) into
//! validated [`StateRecord`]s. Percent-valued columns are supplied in
//! [0,100] and divided by 100 here; everything downstream works in
//! fractional shares.
//!
//! Parsing is simple comma-splitting with header-based column discovery.
//! Quoted fields are not supported; state names must not contain commas.
//!
//! All malformed input is rejected here, before any trial runs. Once a table
//! loads successfully the simulation itself cannot fail.

use std::collections::HashSet;
use std::fs;

use crate::types::StateRecord;

/// Required CSV column headers, matched exactly after trimming.
pub const COL_STATE: &str = "State";
pub const COL_REGISTERED: &str = "Total Registered Voters";
pub const COL_TURNOUT: &str = "Voter Turnout Percent (2020)";
pub const COL_HARRIS: &str = "Poll Numbers for Harris";
pub const COL_TRUMP: &str = "Poll Numbers for Trump";
pub const COL_MARGIN: &str = "Margin of Error";
pub const COL_ELECTORAL: &str = "Electoral Votes";

/// Column indices discovered from the header row.
struct ColumnMap {
    state: usize,
    registered: usize,
    turnout: usize,
    harris: usize,
    trump: usize,
    margin: usize,
    electoral: usize,
}

impl ColumnMap {
    fn from_header(header: &str) -> Result<Self, String> {
        let cols: Vec<&str> = header.split(',').map(str::trim).collect();
        let find = |name: &str| -> Result<usize, String> {
            cols.iter()
                .position(|&c| c == name)
                .ok_or_else(|| format!("missing column '{}' in header", name))
        };
        Ok(Self {
            state: find(COL_STATE)?,
            registered: find(COL_REGISTERED)?,
            turnout: find(COL_TURNOUT)?,
            harris: find(COL_HARRIS)?,
            trump: find(COL_TRUMP)?,
            margin: find(COL_MARGIN)?,
            electoral: find(COL_ELECTORAL)?,
        })
    }
}

/// Load and validate a state table from a CSV file.
///
/// Fails fast with a descriptive message on the first malformed record;
/// no partial table is returned.
pub fn load_state_table(path: &str) -> Result<Vec<StateRecord>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("cannot read state table {}: {}", path, e))?;
    parse_state_table(&content)
}

/// Parse a state table from CSV text. See [`load_state_table`].
pub fn parse_state_table(content: &str) -> Result<Vec<StateRecord>, String> {
    let mut lines = content.lines().enumerate();
    let (_, header) = lines
        .next()
        .ok_or_else(|| "state table is empty".to_string())?;
    let map = ColumnMap::from_header(header)?;

    let mut records: Vec<StateRecord> = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for (line_no, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_record(line, &map).map_err(|e| format!("line {}: {}", line_no + 1, e))?;
        if !seen_names.insert(record.name.clone()) {
            return Err(format!(
                "line {}: duplicate state name '{}'",
                line_no + 1,
                record.name
            ));
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err("state table contains no records".to_string());
    }
    Ok(records)
}

fn parse_record(line: &str, map: &ColumnMap) -> Result<StateRecord, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let field = |idx: usize, name: &str| -> Result<&str, String> {
        fields
            .get(idx)
            .copied()
            .ok_or_else(|| format!("row too short, missing '{}'", name))
    };

    let name = field(map.state, COL_STATE)?;
    if name.is_empty() {
        return Err("empty state name".to_string());
    }

    let registered_voters = parse_u64(field(map.registered, COL_REGISTERED)?, COL_REGISTERED)?;
    let turnout_rate = parse_percent(field(map.turnout, COL_TURNOUT)?, COL_TURNOUT)?;
    let harris_share = parse_percent(field(map.harris, COL_HARRIS)?, COL_HARRIS)?;
    let trump_share = parse_percent(field(map.trump, COL_TRUMP)?, COL_TRUMP)?;
    let margin_of_error = parse_margin(field(map.margin, COL_MARGIN)?)?;
    let electoral_votes = parse_u64(field(map.electoral, COL_ELECTORAL)?, COL_ELECTORAL)?;
    if electoral_votes == 0 {
        return Err(format!("'{}' must be positive", COL_ELECTORAL));
    }
    if electoral_votes > u32::MAX as u64 {
        return Err(format!("'{}' out of range", COL_ELECTORAL));
    }

    Ok(StateRecord {
        name: name.to_string(),
        registered_voters,
        turnout_rate,
        harris_share,
        trump_share,
        margin_of_error,
        electoral_votes: electoral_votes as u32,
    })
}

/// Parse a non-negative integer. A leading '-' fails the u64 parse, which is
/// how negative counts are rejected.
fn parse_u64(s: &str, col: &str) -> Result<u64, String> {
    s.parse::<u64>()
        .map_err(|_| format!("invalid '{}' value: '{}'", col, s))
}

/// Parse a percent in [0,100] and convert to a fraction in [0,1].
fn parse_percent(s: &str, col: &str) -> Result<f64, String> {
    let v: f64 = s
        .parse()
        .map_err(|_| format!("invalid '{}' value: '{}'", col, s))?;
    if !v.is_finite() || !(0.0..=100.0).contains(&v) {
        return Err(format!("'{}' must be in [0,100], got {}", col, s));
    }
    Ok(v / 100.0)
}

/// Parse a non-negative margin of error (percent), converted to a fraction.
fn parse_margin(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .parse()
        .map_err(|_| format!("invalid '{}' value: '{}'", COL_MARGIN, s))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("'{}' must be non-negative, got {}", COL_MARGIN, s));
    }
    Ok(v / 100.0)
}
