//! `.tikzstyles` style files
//!
//! A style file is a list of `\tikzstyle{NAME}=[PROPERTY LIST]` lines. Styles
//! carrying an arrow spec are edge styles, everything else is a node style.

mod parser;
mod writer;

pub use parser::parse_str;
pub use writer::to_tikzstyles;

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StyleError};
use crate::style::{EdgeStyle, NodeStyle};

/// All styles of one style file, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    pub node_styles: Vec<NodeStyle>,
    pub edge_styles: Vec<EdgeStyle>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> Result<Self> {
        parse_str(text)
    }

    /// Read and parse a style file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| StyleError::io(path, e))?;
        let sheet = parse_str(&text)?;
        info!(
            "Loaded {} node styles and {} edge styles from {}",
            sheet.node_styles.len(),
            sheet.edge_styles.len(),
            path.display()
        );
        Ok(sheet)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_tikzstyles()).map_err(|e| StyleError::io(path, e))?;
        info!("Style file saved to {}", path.display());
        Ok(())
    }

    pub fn to_tikzstyles(&self) -> String {
        to_tikzstyles(self)
    }

    pub fn node_style(&self, name: &str) -> Option<&NodeStyle> {
        self.node_styles.iter().find(|s| s.name == name)
    }

    pub fn edge_style(&self, name: &str) -> Option<&EdgeStyle> {
        self.edge_styles.iter().find(|s| s.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.node_styles.is_empty() && self.edge_styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r"
\tikzstyle{white dot}=[fill=white, draw=black, shape=circle]
\tikzstyle{red box}=[fill=red, draw=black, shape=rectangle, tikzit category={boxes, red}, minimum size=4mm]
\tikzstyle{arrow}=[->, draw=blue]
\tikzstyle{wire}=[<-|, tikzit decoration=arrow, line width=0.8pt, dashed]
";

    #[test]
    fn test_write_then_parse_is_identity() {
        let sheet = StyleSheet::parse(SAMPLE).unwrap();
        let again = StyleSheet::parse(&sheet.to_tikzstyles()).unwrap();
        assert_eq!(again, sheet);
    }

    #[test]
    fn test_load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.tikzstyles");
        let sheet = StyleSheet::parse(SAMPLE).unwrap();
        sheet.save(&path).unwrap();

        let loaded = StyleSheet::load(&path).unwrap();
        assert_eq!(loaded, sheet);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = StyleSheet::load(dir.path().join("nope.tikzstyles")).unwrap_err();
        assert!(matches!(err, StyleError::Io { .. }));
    }

    #[test]
    fn test_lookup() {
        let sheet = StyleSheet::parse(SAMPLE).unwrap();
        assert!(sheet.node_style("red box").is_some());
        assert!(sheet.node_style("arrow").is_none());
        assert!(sheet.edge_style("arrow").is_some());
        assert!(!sheet.is_empty());
        assert!(StyleSheet::new().is_empty());
    }
}
