//! User interface chrome for the board game finder
//!
//! This crate provides the egui-based filter panel, theme and shell
//! helpers around the core discovery engine.

pub mod filter_panel;
pub mod shell;
pub mod theme;

pub use filter_panel::FilterPanel;
pub use shell::{menu_bar, ShellAction};
pub use theme::{apply_theme, Theme};
