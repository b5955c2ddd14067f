use crate::{theme, UiState};
use deck_core::{NavigationMode, PresenterContext};
use egui::{Context, TopBottomPanel};

/// How long an error banner stays visible
pub const ERROR_MESSAGE_SECS: u64 = 10;

/// Keyboard bindings shown in the status bar
pub const KEY_HINTS: &str = "→ / Space next · ← previous · Home / End first / last · Esc map";

/// Menu actions the application has to carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    OpenDeck,
    ReloadBuiltin,
}

/// Render the main menu bar
pub fn menu_bar(ctx: &Context, context: Option<&PresenterContext>) -> Option<ShellAction> {
    let mut action = None;

    TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                if ui.button("Open deck...").clicked() {
                    action = Some(ShellAction::OpenDeck);
                    ui.close_menu();
                }

                if ui.button("Reload built-in deck").clicked() {
                    action = Some(ShellAction::ReloadBuiltin);
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // Right-aligned status
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(context) = context {
                    let snapshot = context.navigation.get_context();
                    let mode_text = match snapshot.mode {
                        NavigationMode::Overview => "🗺 Map".to_string(),
                        NavigationMode::Transitioning => "⏳ Opening".to_string(),
                        NavigationMode::Presenting => match snapshot.active_index {
                            Some(index) => format!("▶ {} / {}", index + 1, snapshot.slide_count),
                            None => "▶".to_string(),
                        },
                    };
                    ui.label(mode_text);
                    ui.separator();
                    ui.label(
                        egui::RichText::new(KEY_HINTS)
                            .small()
                            .color(theme::text_muted_color()),
                    );
                }
            });
        });
    });

    action
}

/// Show error messages
pub fn show_error_messages(ui: &mut egui::Ui, ui_state: &mut UiState) {
    let now = std::time::Instant::now();

    // Remove old messages
    ui_state.error_messages.retain(|msg| {
        now.duration_since(msg.timestamp).as_secs() < ERROR_MESSAGE_SECS
    });

    // Display current messages
    for msg in &ui_state.error_messages {
        egui::Frame::none()
            .fill(theme::error_color().linear_multiply(0.2))
            .stroke(egui::Stroke::new(1.0, theme::error_color()))
            .rounding(4.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("⚠").color(theme::error_color()));
                    ui.label(&msg.title);
                    ui.separator();
                    ui.label(&msg.message);
                });
            });
    }
}
