//! Interactive HTML export.
//!
//! Renders the nomination graph into a single self-contained vis-network
//! document: nodes colored by role, directed edges labeled by relation, a
//! physics configuration panel, and an injected search banner with
//! double-click web search. The document is written via a temporary file and
//! patched before the final write, so a failure part-way leaves no partial
//! output in place.

use std::fs;
use std::io::Write;
use std::path::Path;

use convert_case::{Case, Casing};
use regex::Regex;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::NominationError;
use crate::graph::NominationGraph;

/// Sizing for the rendered network container
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub height: String,
    pub width: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            height: "750px".to_string(),
            width: "100%".to_string(),
        }
    }
}

/// Fill/border pair for a node group. Unrecognized groups render grey.
pub fn role_palette(group: &str) -> (&'static str, &'static str) {
    match group {
        "candidate" => ("#f28b82", "#a50e0e"),
        "proposer" => ("#fdd663", "#b58800"),
        "seconder" => ("#8ab4f8", "#1a5fb4"),
        _ => ("#d5d8dc", "#717d8a"),
    }
}

#[derive(Serialize)]
struct HighlightColor {
    background: &'static str,
    border: &'static str,
}

#[derive(Serialize)]
struct NodeColor {
    background: &'static str,
    border: &'static str,
    highlight: HighlightColor,
}

impl NodeColor {
    /// Light fill, dark border; the highlighted state inverts the pair
    fn for_group(group: &str) -> Self {
        let (fill, border) = role_palette(group);
        NodeColor {
            background: fill,
            border,
            highlight: HighlightColor {
                background: border,
                border: fill,
            },
        }
    }
}

#[derive(Serialize)]
struct VisNode {
    id: String,
    label: String,
    title: String,
    group: String,
    color: NodeColor,
}

#[derive(Serialize)]
struct VisEdge {
    from: String,
    to: String,
    title: String,
    arrows: &'static str,
    #[serde(rename = "arrowStrikethrough")]
    arrow_strikethrough: bool,
}

const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Nomination network</title>
    <script src="https://unpkg.com/vis-network/standalone/umd/vis-network.min.js"></script>
    <style type="text/css">
        #network {
            width: __WIDTH__;
            height: __HEIGHT__;
            border: 1px solid #e0e0e0;
        }
    </style>
</head>
<body>
    <div id="network"></div>
    <script type="text/javascript">
        var nodes = new vis.DataSet(__NODES__);
        var edges = new vis.DataSet(__EDGES__);
        var container = document.getElementById("network");
        var data = { nodes: nodes, edges: edges };
        var options = {
            configure: { enabled: true, filter: ["physics"] },
            edges: { arrows: { to: { enabled: true } } },
            physics: { enabled: true, stabilization: { iterations: 200 } }
        };
        var network = new vis.Network(container, data, options);
    </script>
</body>
</html>
"#;

const CONTROLS_MARKUP: &str = r#"
<div id="search-banner" style="position: fixed; top: 0; left: 0; right: 0; z-index: 1000; padding: 8px 16px; background: #f8f9fa; border-bottom: 1px solid #dee2e6; font-family: sans-serif;">
    <input type="text" id="node-search" placeholder="Search for a person..." style="width: 240px; padding: 4px 8px;">
    <button id="node-search-button" onclick="searchNodes()">Search</button>
</div>
<script type="text/javascript">
    function searchNodes() {
        var query = document.getElementById("node-search").value.toLowerCase();
        if (!query) { return; }
        var matches = nodes.get().filter(function (node) {
            return node.label.toLowerCase().indexOf(query) !== -1;
        }).map(function (node) { return node.id; });
        if (matches.length === 0) { return; }
        network.selectNodes(matches);
        network.focus(matches[0], { scale: 1.5, animation: true });
    }
    document.addEventListener("DOMContentLoaded", function () {
        network.on("doubleClick", function (params) {
            if (params.nodes.length > 0) {
                var label = nodes.get(params.nodes[0]).label;
                window.open("https://www.google.com/search?q=" + encodeURIComponent(label), "_blank");
            }
        });
    });
</script>
"#;

/// Render the default network document, before interactivity injection.
fn render_document(graph: &NominationGraph, options: &ExportOptions) -> String {
    let nodes: Vec<VisNode> = graph
        .people()
        .map(|person| {
            let group = person.role.as_str();
            VisNode {
                id: person.name.clone(),
                label: person.name.clone(),
                title: group.to_case(Case::Title),
                group: group.to_string(),
                color: NodeColor::for_group(group),
            }
        })
        .collect();

    let edges: Vec<VisEdge> = graph
        .nominations()
        .map(|(nominator, candidate, relation)| VisEdge {
            from: nominator.to_string(),
            to: candidate.to_string(),
            title: relation.as_str().to_string(),
            arrows: "to",
            arrow_strikethrough: false,
        })
        .collect();

    let nodes_json = serde_json::to_string(&nodes).expect("Failed to serialize nodes");
    let edges_json = serde_json::to_string(&edges).expect("Failed to serialize edges");

    DOCUMENT_TEMPLATE
        .replace("__WIDTH__", &options.width)
        .replace("__HEIGHT__", &options.height)
        .replace("__NODES__", &nodes_json)
        .replace("__EDGES__", &edges_json)
}

/// Insert the search banner and interaction script immediately after the
/// opening body tag. Only the first body tag is patched, attributes or not.
pub fn inject_controls(document: &str) -> String {
    let body_tag = Regex::new(r"<body[^>]*>").unwrap();
    match body_tag.find(document) {
        Some(m) => {
            let mut patched = String::with_capacity(document.len() + CONTROLS_MARKUP.len());
            patched.push_str(&document[..m.end()]);
            patched.push_str(CONTROLS_MARKUP);
            patched.push_str(&document[m.end()..]);
            patched
        }
        None => document.to_string(),
    }
}

/// Export the graph to an interactive HTML document at `output_path`.
///
/// The default document is written to a temporary file, read back, patched
/// with the search controls, and written to the final path; the temporary
/// file is removed before returning. Prints a confirmation line naming the
/// output path.
pub fn export_html<P: AsRef<Path>>(
    graph: &NominationGraph,
    output_path: P,
    options: &ExportOptions,
) -> Result<(), NominationError> {
    let output_path = output_path.as_ref();

    let mut temp = NamedTempFile::new()?;
    temp.write_all(render_document(graph, options).as_bytes())?;
    temp.flush()?;

    let rendered = fs::read_to_string(temp.path())?;
    let patched = inject_controls(&rendered);
    fs::write(output_path, patched)?;
    temp.close()?;

    println!("✨ Interactive HTML saved to: {}", output_path.display());

    Ok(())
}
