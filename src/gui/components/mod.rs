// src/gui/components/mod.rs
pub mod data_table;
pub mod export_bar;
pub mod heatmap_view;
pub mod input_bar;
pub mod tabs;
