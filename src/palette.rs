//! Style palette controller
//!
//! The palette shows a reserved `none` row followed by every node style of
//! the current style file. User actions (double-click, open, refresh, close)
//! are plain method calls; anything the rest of the editor has to act on is
//! returned as a [`PaletteEvent`].

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::consts::NONE_STYLE_NAME;
use crate::error::{Result, StyleError};
use crate::settings::{DockGeometry, PaletteSettings};
use crate::tikzstyles::StyleSheet;

/// One row of the palette list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: String,
    pub category: Option<String>,
}

impl PaletteEntry {
    fn none() -> Self {
        Self {
            name: NONE_STYLE_NAME.to_string(),
            category: None,
        }
    }

    pub fn is_none_entry(&self) -> bool {
        self.name == NONE_STYLE_NAME && self.category.is_none()
    }
}

/// Result of a palette command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
    /// Apply the named node style to the selected nodes
    ApplyStyle { name: String },
    /// The style list was rebuilt
    StylesReloaded { count: usize },
}

/// Palette controller over an explicit list of entries
#[derive(Debug, Clone)]
pub struct StylePalette {
    entries: Vec<PaletteEntry>,
    selected: Option<usize>,
    sheet: StyleSheet,
    settings: PaletteSettings,
}

impl StylePalette {
    pub fn new(settings: PaletteSettings) -> Self {
        Self {
            entries: vec![PaletteEntry::none()],
            selected: None,
            sheet: StyleSheet::default(),
            settings,
        }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    pub fn settings(&self) -> &PaletteSettings {
        &self.settings
    }

    /// Rebuild the list from `sheet`: `none` first, then node styles in file order
    ///
    /// A selection follows its style by name and is cleared when the style is gone.
    pub fn reload_styles(&mut self, sheet: StyleSheet) -> PaletteEvent {
        let selected_name = self
            .selected
            .and_then(|i| self.entries.get(i))
            .map(|entry| entry.name.clone());

        self.entries.clear();
        self.entries.push(PaletteEntry::none());
        self.entries
            .extend(sheet.node_styles.iter().map(|style| PaletteEntry {
                name: style.name.clone(),
                category: style.category.clone(),
            }));
        self.sheet = sheet;

        self.selected = selected_name
            .and_then(|name| self.entries.iter().position(|entry| entry.name == name));

        let count = self.entries.len() - 1;
        info!("Palette reloaded with {} node styles", count);
        PaletteEvent::StylesReloaded { count }
    }

    /// Name of the selected style, `none` when nothing is selected
    pub fn active_node_style_name(&self) -> &str {
        self.selected
            .and_then(|i| self.entries.get(i))
            .map(|entry| entry.name.as_str())
            .unwrap_or(NONE_STYLE_NAME)
    }

    /// Select a row. Out-of-range indexes leave the selection alone.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Double-click on a row: select it and ask for the style to be applied
    pub fn item_activated(&mut self, index: usize) -> Option<PaletteEvent> {
        if !self.select(index) {
            return None;
        }
        let name = self.active_node_style_name().to_string();
        debug!("Applying node style '{}'", name);
        Some(PaletteEvent::ApplyStyle { name })
    }

    /// Load a style file, remember it, and rebuild the list
    pub fn open_style_file(&mut self, path: impl AsRef<Path>) -> Result<PaletteEvent> {
        let path = path.as_ref();
        let sheet = StyleSheet::load(path)?;
        self.settings.style_file = Some(path.to_path_buf());
        Ok(self.reload_styles(sheet))
    }

    /// Reload the remembered style file from disk
    pub fn refresh_style_file(&mut self) -> Result<PaletteEvent> {
        let path = self
            .settings
            .style_file
            .clone()
            .ok_or(StyleError::NoStyleFile)?;
        let sheet = StyleSheet::load(&path)?;
        Ok(self.reload_styles(sheet))
    }

    /// Label shown above the list: the style file name
    pub fn source_label(&self) -> String {
        self.settings
            .style_file
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "[no styles]".to_string())
    }

    pub fn is_visible(&self) -> bool {
        self.settings.visible
    }

    /// Palette is shown again after a `close`
    pub fn show(&mut self) {
        debug!("Showing style palette");
        self.settings.visible = true;
    }

    /// Palette is closing: keep its geometry and persist the settings
    pub fn close(&mut self, geometry: Option<DockGeometry>, settings_path: &Path) -> Result<()> {
        if geometry.is_some() {
            self.settings.dock = geometry;
        }
        self.settings.visible = false;
        self.settings.save_to(settings_path)
    }

    /// Style file the palette will refresh from
    pub fn style_file(&self) -> Option<&PathBuf> {
        self.settings.style_file.as_ref()
    }
}

impl Default for StylePalette {
    fn default() -> Self {
        Self::new(PaletteSettings::default())
    }
}
