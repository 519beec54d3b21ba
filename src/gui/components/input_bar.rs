// src/gui/components/input_bar.rs

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Postings CSV:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.input_path)
                .hint_text("jobs.csv")
                .desired_width(420.0),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Analyze").clicked() || submitted {
            app.analyze();
        }
    });
}
