//! Line parser for `\tikzstyle{NAME}=[PROPERTY LIST]` files

use log::warn;

use super::StyleSheet;
use crate::error::{Result, StyleError};
use crate::style::{EdgeStyle, NodeStyle, Property, is_edge_style};

const STYLE_PREFIX: &str = "\\tikzstyle{";

/// Parse the text of a style file
///
/// Blank lines and `%` comments are skipped; every other line must define
/// one style. Errors carry the 1-based line number.
pub fn parse_str(text: &str) -> Result<StyleSheet> {
    let mut sheet = StyleSheet::default();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        let (name, properties) = parse_line(line).map_err(|msg| StyleError::parse(line_no, msg))?;

        if sheet.node_style(&name).is_some() || sheet.edge_style(&name).is_some() {
            warn!("Style '{}' defined more than once (line {})", name, line_no);
        }

        if is_edge_style(&properties) {
            let style = EdgeStyle::from_properties(name, &properties)
                .map_err(|msg| StyleError::parse(line_no, msg))?;
            sheet.edge_styles.push(style);
        } else {
            sheet
                .node_styles
                .push(NodeStyle::from_properties(name, &properties));
        }
    }

    Ok(sheet)
}

/// Split one definition line into its name and property list
fn parse_line(line: &str) -> std::result::Result<(String, Vec<Property>), String> {
    let rest = line
        .strip_prefix(STYLE_PREFIX)
        .ok_or_else(|| format!("expected '{STYLE_PREFIX}NAME}}=[...]'"))?;

    let close = rest.find('}').ok_or("unclosed style name")?;
    let name = rest[..close].trim();
    if name.is_empty() {
        return Err("empty style name".to_string());
    }

    let rest = rest[close + 1..].trim_start();
    let rest = rest
        .strip_prefix('=')
        .map(str::trim_start)
        .and_then(|r| r.strip_prefix('['))
        .ok_or_else(|| format!("expected '=[' after style name '{name}'"))?;

    let end = find_list_end(rest).ok_or("unclosed property list")?;
    let trailing = rest[end + 1..].trim();
    let trailing = trailing.strip_prefix(';').unwrap_or(trailing).trim_start();
    if !trailing.is_empty() && !trailing.starts_with('%') {
        return Err(format!("unexpected text after property list: '{trailing}'"));
    }

    let properties = split_properties(&rest[..end])?;
    Ok((name.to_string(), properties))
}

/// Index of the `]` closing the property list, skipping braced text
fn find_list_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.checked_sub(1)?,
            ']' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Split `a, b=c, d={e, f}` at top-level commas
pub(crate) fn split_properties(list: &str) -> std::result::Result<Vec<Property>, String> {
    let mut props = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in list.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| "unbalanced '}' in property list".to_string())?;
            }
            ',' if depth == 0 => {
                push_property(&mut props, &list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err("unbalanced '{' in property list".to_string());
    }
    push_property(&mut props, &list[start..]);

    Ok(props)
}

fn push_property(props: &mut Vec<Property>, item: &str) {
    let item = item.trim();
    if item.is_empty() {
        return;
    }
    match split_key_value(item) {
        Some((key, value)) => props.push(Property::pair(key.trim(), value.trim())),
        None => props.push(Property::atom(item)),
    }
}

/// Split at the first `=` outside braces
fn split_key_value(item: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (i, c) in item.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '=' if depth == 0 => return Some((&item[..i], &item[i + 1..])),
            _ => {}
        }
    }
    None
}
