use std::fs::File;
use std::io::Read;
use std::path::Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::info;

use crate::errors::MapError;
use crate::graph::{EdgeRecord, RoadGraph};


const FIELDS: usize = 5;


/// Parse a road-segment map into edge records, keeping file order
/// One segment per line as `id,startX,startY,endX,endY`, the id is not used.
/// Blank lines are skipped, anything else that does not parse is an error
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<EdgeRecord>, MapError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        // whitespace-only lines trim down to a single empty field
        if row.len() == 1 && row[0].is_empty() {
            continue;
        }
        records.push(parse_row(&row)?);
    }
    Ok(records)
}

fn parse_row(row: &StringRecord) -> Result<EdgeRecord, MapError> {
    let line = row.position().map_or(0, |p| p.line() as usize);
    if row.len() != FIELDS {
        return Err(MapError::Malformed {
            line,
            reason: format!("expected {FIELDS} fields, found {}", row.len()),
        });
    }

    let mut coords = [0i64; 4];
    for (slot, field) in coords.iter_mut().zip(row.iter().skip(1)) {
        *slot = field.parse().map_err(|e| MapError::Malformed {
            line,
            reason: format!("bad coordinate {field:?}: {e}"),
        })?;
    }
    let [start_x, start_y, end_x, end_y] = coords;
    Ok(EdgeRecord::new(start_x, start_y, end_x, end_y))
}

pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<EdgeRecord>, MapError> {
    let path = path.as_ref();
    let records = parse_records(File::open(path)?)?;
    info!(records = records.len(), "loaded map {}", path.display());
    Ok(records)
}

/// Load a map file straight into a road graph
pub fn load_graph<P: AsRef<Path>>(path: P, mirror: bool) -> Result<RoadGraph, MapError> {
    let graph = RoadGraph::from_records(load_records(path)?, mirror);
    if graph.is_empty() {
        return Err(MapError::Empty);
    }
    Ok(graph)
}
