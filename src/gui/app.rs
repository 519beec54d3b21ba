// src/gui/app.rs
use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    analysis::{Analysis, CountMatrix},
    config::{AppState, PageKind},
    runner,
    table::Table,
};

use super::{
    components,
    pages::Page,
    progress::GuiProgress,
    router,
};

pub fn run(state: AppState, options: eframe::NativeOptions) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Skillmap",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful analysis
    pub analysis: Option<Analysis>,

    // in-memory display for CURRENT page
    pub table: Table,

    // overall heatmap, rebuilt per analysis
    pub chart: Option<CountMatrix>,

    // status line (progress sinks write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            analysis: None,
            table: Table::default(),
            chart: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };
        app.rebuild_view();
        tracing::info!(page = ?app.current_page_kind(), "GUI started");
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut status) = self.status.lock() {
            *status = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Rebuild the current page's table from the analysis.
    pub fn rebuild_view(&mut self) {
        let page = self.current_page();
        self.table = match &self.analysis {
            Some(analysis) => page.table(analysis),
            None => Table::new(page.default_headers()),
        };
    }

    /* ---------- actions ---------- */

    pub fn analyze(&mut self) {
        let input = self.state.gui.input_path.trim().to_string();
        if input.is_empty() {
            self.status("Enter the path of a postings CSV first");
            return;
        }

        match runner::load_and_analyze(&self.state.options, Path::new(&input)) {
            Ok(analysis) => {
                self.status(format!(
                    "Loaded {} postings: {} skill rows, {} skills, {} cities",
                    analysis.postings,
                    analysis.tidy.len(),
                    analysis.aggregates.skill_count(),
                    analysis.cities.len(),
                ));
                let chart = analysis.overall_chart();
                self.chart = (!chart.is_empty()).then_some(chart);
                self.analysis = Some(analysis);
                self.rebuild_view();
            }
            Err(e) => {
                tracing::error!(input = %input, error = %e, "analyze failed");
                self.status(format!("Error: {e}"));
            }
        }
    }

    pub fn export(&mut self) {
        let Some(analysis) = &self.analysis else {
            self.status("Nothing to export yet");
            return;
        };

        let out_dir = self.state.gui.out_dir.clone();
        self.state.options.export.set_out_dir(&out_dir);

        let mut progress = GuiProgress::new(self.status.clone());
        match runner::export(analysis, &self.state.options, Some(&mut progress)) {
            Ok(summary) => {
                tracing::info!(files = summary.files_written.len(), "GUI export done");
                self.status(format!(
                    "Exported {} files to {}",
                    summary.files_written.len(),
                    summary.out_dir.display()
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.status(format!("Export failed: {e}"));
            }
        }
    }

    /// Current table to the clipboard in the selected format.
    pub fn copy(&self, ctx: &egui::Context) {
        let delim = self.state.options.export.format.delim();
        match crate::csv::table_to_string(&self.table, delim) {
            Ok(text) => {
                ctx.copy_text(text);
                self.status(format!("Copied {} rows", self.table.len()));
            }
            Err(e) => self.status(format!("Copy failed: {e}")),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("input").show(ctx, |ui| {
            components::input_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
