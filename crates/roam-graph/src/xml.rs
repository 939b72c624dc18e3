//! OSM XML adapter — enabled with the `xml` Cargo feature.
//!
//! Drives [`GraphBuilder`] from an OSM XML document via `quick-xml`.  Only
//! `node`, `way`, `nd`, and `tag` elements become events; relations,
//! `bounds`, and any other elements are skipped here and never reach the
//! builder.  A missing or unparsable `id`/`lat`/`lon`/`ref`/`k`/`v`
//! attribute is ingestion-fatal.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use roam_graph::xml::load_from_path;
//!
//! let graph = load_from_path(Path::new("berkeley.osm"))?;
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use roam_core::{NodeId, WayId};

use crate::builder::GraphBuilder;
use crate::error::{GraphError, GraphResult};
use crate::event::OsmEvent;
use crate::graph::RoadGraph;

// ── Public entry points ───────────────────────────────────────────────────────

/// Load a road graph from an OSM XML file on disk.
pub fn load_from_path(path: &Path) -> GraphResult<RoadGraph> {
    log::info!("loading OSM extract from {}", path.display());
    load_from_reader(BufReader::new(File::open(path)?))
}

/// Load a road graph from any buffered OSM XML source.
pub fn load_from_reader<R: BufRead>(source: R) -> GraphResult<RoadGraph> {
    let mut reader = Reader::from_reader(source);
    let mut builder = GraphBuilder::new();
    let mut buf = Vec::new();
    // Nesting depth inside a skipped subtree (`relation`, …).  While > 0,
    // nothing is forwarded — a relation's `tag` children must not be
    // mistaken for node or way tags.
    let mut skip_depth: u32 = 0;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| GraphError::Xml(e.to_string()))?;
        match event {
            Event::Eof => break,
            Event::Start(e) => {
                if skip_depth > 0 {
                    skip_depth += 1;
                } else {
                    match e.name().as_ref() {
                        // The document root is transparent.
                        b"osm" => {}
                        b"node" => builder.handle(node_open(&e)?)?,
                        b"way" => builder.handle(way_open(&e)?)?,
                        b"nd" => builder.handle(node_ref(&e)?)?,
                        b"tag" => builder.handle(tag(&e)?)?,
                        _ => skip_depth = 1,
                    }
                }
            }
            Event::Empty(e) => {
                if skip_depth == 0 {
                    match e.name().as_ref() {
                        b"node" => {
                            builder.handle(node_open(&e)?)?;
                            builder.handle(OsmEvent::NodeClose)?;
                        }
                        b"way" => {
                            builder.handle(way_open(&e)?)?;
                            builder.handle(OsmEvent::WayClose)?;
                        }
                        b"nd" => builder.handle(node_ref(&e)?)?,
                        b"tag" => builder.handle(tag(&e)?)?,
                        _ => {}
                    }
                }
            }
            Event::End(e) => {
                if skip_depth > 0 {
                    skip_depth -= 1;
                } else {
                    match e.name().as_ref() {
                        b"node" => builder.handle(OsmEvent::NodeClose)?,
                        b"way" => builder.handle(OsmEvent::WayClose)?,
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        buf.clear();
    }

    builder.finish()
}

// ── Element → event conversion ────────────────────────────────────────────────

fn node_open(e: &BytesStart<'_>) -> GraphResult<OsmEvent> {
    Ok(OsmEvent::NodeOpen {
        id: NodeId(parse_i64(&required(e, "id")?, "node id")?),
        lon: parse_f64(&required(e, "lon")?, "longitude")?,
        lat: parse_f64(&required(e, "lat")?, "latitude")?,
    })
}

fn way_open(e: &BytesStart<'_>) -> GraphResult<OsmEvent> {
    Ok(OsmEvent::WayOpen {
        id: WayId(parse_i64(&required(e, "id")?, "way id")?),
    })
}

fn node_ref(e: &BytesStart<'_>) -> GraphResult<OsmEvent> {
    Ok(OsmEvent::NodeRef(NodeId(parse_i64(
        &required(e, "ref")?,
        "node ref",
    )?)))
}

fn tag(e: &BytesStart<'_>) -> GraphResult<OsmEvent> {
    Ok(OsmEvent::Tag {
        key: required(e, "k")?,
        value: required(e, "v")?,
    })
}

// ── Attribute helpers ─────────────────────────────────────────────────────────

fn attr(e: &BytesStart<'_>, key: &[u8]) -> GraphResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| GraphError::Xml(err.to_string()))?;
        if attr.key.as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|err| GraphError::Xml(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn required(e: &BytesStart<'_>, key: &str) -> GraphResult<String> {
    attr(e, key.as_bytes())?.ok_or_else(|| {
        GraphError::Malformed(format!(
            "<{}> missing required attribute '{key}'",
            String::from_utf8_lossy(e.name().as_ref())
        ))
    })
}

fn parse_i64(raw: &str, what: &str) -> GraphResult<i64> {
    raw.parse()
        .map_err(|_| GraphError::Malformed(format!("unparsable {what}: '{raw}'")))
}

fn parse_f64(raw: &str, what: &str) -> GraphResult<f64> {
    raw.parse()
        .map_err(|_| GraphError::Malformed(format!("unparsable {what}: '{raw}'")))
}
