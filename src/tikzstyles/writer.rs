//! Writes a [`StyleSheet`] back to `.tikzstyles` text

use std::fmt::Write;

use super::StyleSheet;
use crate::style::Property;

const HEADER: &str = "\
% TiKZ style file generated by TikZiT. You may edit this file manually,
% but some things (e.g. comments) may be overwritten. To be readable in
% TikZiT, the only non-comment lines must be of the form:
% \\tikzstyle{NAME}=[PROPERTY LIST]
";

pub fn to_tikzstyles(sheet: &StyleSheet) -> String {
    let mut out = String::from(HEADER);

    out.push_str("\n% Node styles\n");
    for style in &sheet.node_styles {
        write_style(&mut out, &style.name, &style.to_properties());
    }

    out.push_str("\n% Edge styles\n");
    for style in &sheet.edge_styles {
        write_style(&mut out, &style.name, &style.to_properties());
    }

    out
}

fn write_style(out: &mut String, name: &str, properties: &[Property]) {
    let list = properties
        .iter()
        .map(Property::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    // Writing into a String can't fail
    let _ = writeln!(out, "\\tikzstyle{{{name}}}=[{list}]");
}
