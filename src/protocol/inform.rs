//! `/inform` response parsing.
//!
//! ```text
//! name\tlabel\tdoc_num\tword_num\tsize
//!
//! admin1
//! admin2
//!
//! user1
//!
//! http://peer/node/a\tPeer A\t100
//! ```

use crate::error::{NodeError, Result};
use crate::types::{NodeInfo, NodeLink};

/// Parse an `/inform` body.
///
/// # Errors
///
/// Fails only when the first line does not carry exactly five tab-separated
/// fields. Malformed link lines are skipped.
pub fn parse_node_info(body: &str) -> Result<NodeInfo> {
    let lines: Vec<&str> = body.split('\n').collect();

    let elems: Vec<&str> = lines[0].split('\t').collect();
    if elems.len() != 5 {
        return Err(NodeError::MalformedResponse(format!(
            "node info expects 5 fields, got {}",
            elems.len()
        )));
    }

    let mut info = NodeInfo {
        name: elems[0].to_string(),
        label: elems[1].to_string(),
        doc_num: elems[2].trim().parse().unwrap_or(0),
        word_num: elems[3].trim().parse().unwrap_or(0),
        size: elems[4].trim().parse().unwrap_or(0.0),
        admins: None,
        users: None,
        links: None,
    };

    if lines.len() < 2 {
        return Ok(info);
    }

    let mut cursor = Sections::new(&lines, 1);
    info.admins = Some(cursor.section().iter().map(|s| s.to_string()).collect());
    info.users = Some(cursor.section().iter().map(|s| s.to_string()).collect());
    info.links = Some(cursor.section().iter().filter_map(|line| parse_link(line)).collect());

    Ok(info)
}

fn parse_link(line: &str) -> Option<NodeLink> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 3 {
        return None;
    }
    Some(NodeLink {
        url: fields[0].to_string(),
        label: fields[1].to_string(),
        credit: fields[2].trim().parse().ok()?,
    })
}

/// Walks blank-line separated sections.
struct Sections<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> Sections<'a> {
    fn new(lines: &'a [&'a str], pos: usize) -> Self {
        Sections { lines, pos }
    }

    /// Skip one separating blank line, then take lines up to the next blank.
    fn section(&mut self) -> &'a [&'a str] {
        if self.pos < self.lines.len() && self.lines[self.pos].is_empty() {
            self.pos += 1;
        }
        let start = self.pos;
        while self.pos < self.lines.len() && !self.lines[self.pos].is_empty() {
            self.pos += 1;
        }
        &self.lines[start..self.pos]
    }
}
