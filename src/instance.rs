/*!
# Instance I/O

Parses the contest's plain-text instance format from any `BufRead` and
writes a solved [`Tour`] back out in the matching format (§4.6). Mirrors the
line-oriented, allocation-light parsing style used for the crate's other
text formats: read a line, split on whitespace, validate each field with a
named error rather than an `unwrap`.

## Instance format

```text
<start-code>
<src> <dst> <day> <price>
...
```

There is no node/day/edge count header: the first non-empty line is the
start city's code, and every line after it is an edge, read until EOF. `D`
is set to the number of distinct node codes seen across all edges; if the
highest day index seen plus one does not match that count, this module logs
a warning rather than failing outright (§9 Open Questions).
*/

use crate::error::{Result, TourError};
use crate::graph::{Graph, GraphBuilder, MAX_PRICE, NodeId};
use std::io::{BufRead, Write};
use tracing::warn;

/// A parsed instance: the graph plus the fixed start node, taken from the
/// format's header line rather than guessed from the first edge.
pub struct Instance {
    pub graph: Graph,
    pub start: NodeId,
}

/// Reads an instance from `reader` in the format described above.
pub fn parse_from(reader: &mut impl BufRead) -> Result<Instance> {
    let mut lines = reader.lines();

    let start_code = next_line(&mut lines)?
        .ok_or_else(|| TourError::parse("missing start node line"))?
        .trim()
        .to_string();
    if start_code.is_empty() {
        return Err(TourError::parse("start node line is empty"));
    }

    let mut builder = GraphBuilder::new();
    let start = builder.node_id(&start_code);
    let mut max_day_seen: Option<u32> = None;
    let mut idx = 0usize;

    while let Some(line) = next_line(&mut lines)? {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let src_code = fields
            .next()
            .ok_or_else(|| TourError::parse(format!("edge line {idx}: missing src")))?;
        let dst_code = fields
            .next()
            .ok_or_else(|| TourError::parse(format!("edge line {idx}: missing dst")))?;
        let day: u32 = fields
            .next()
            .ok_or_else(|| TourError::parse(format!("edge line {idx}: missing day")))?
            .parse()
            .map_err(|_| TourError::parse(format!("edge line {idx}: bad day value")))?;
        let price: u32 = fields
            .next()
            .ok_or_else(|| TourError::parse(format!("edge line {idx}: missing price")))?
            .parse()
            .map_err(|_| TourError::parse(format!("edge line {idx}: bad price value")))?;
        if price > MAX_PRICE {
            return Err(TourError::parse(format!(
                "edge line {idx}: price {price} exceeds the maximum of {MAX_PRICE}"
            )));
        }

        let src = builder.node_id(src_code);
        let dst = builder.node_id(dst_code);
        builder.insert_edge(src, dst, day, price);
        max_day_seen = Some(max_day_seen.map_or(day, |m| m.max(day)));
        idx += 1;
    }

    let graph = builder.build();
    let node_count = graph.node_count();
    if max_day_seen.map(|d| d as usize + 1) != Some(node_count) {
        warn!(
            node_count,
            max_day_seen = ?max_day_seen,
            "highest day index plus one does not match the node count"
        );
    }

    Ok(Instance { graph, start })
}

fn next_line(lines: &mut std::io::Lines<&mut impl BufRead>) -> Result<Option<String>> {
    match lines.next() {
        Some(Ok(line)) => Ok(Some(line)),
        Some(Err(e)) => Err(e.into()),
        None => Ok(None),
    }
}

/// Writes a solved tour as the total cost on the first line, followed by one
/// `SRC DST DAY PRICE` line per edge.
pub fn write_tour(writer: &mut impl Write, graph: &Graph, tour: &crate::tour::Tour) -> Result<()> {
    writeln!(writer, "{}", tour.cost())?;
    for edge in &tour.path {
        writeln!(
            writer,
            "{} {} {} {}",
            graph.code(edge.src),
            graph.code(edge.dst),
            edge.day,
            edge.price
        )?;
    }
    Ok(())
}
