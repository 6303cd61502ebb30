use egui::{Context, TopBottomPanel};

/// Actions requested through the menu bar, handled by the application
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellAction {
    pub reset_filters: bool,
    pub reset_zoom: bool,
}

/// Render the main menu bar
pub fn menu_bar(ctx: &Context, is_zoomed: bool) -> ShellAction {
    let mut action = ShellAction::default();

    TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Filters").clicked() {
                    action.reset_filters = true;
                    ui.close_menu();
                }

                if ui
                    .add_enabled(is_zoomed, egui::Button::new("Reset Zoom"))
                    .clicked()
                {
                    action.reset_zoom = true;
                    ui.close_menu();
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("Board Game Finder");
            });
        });
    });

    action
}
