// Top navigation bar and bottom status bar
//
// Purely presentational: reads the location and history flags, emits
// messages. It never touches the active collection directly.

use crate::app::DocuChat;
use crate::message::Message;
use crate::route::{Route, View};
use crate::style;
use eframe::egui;

impl DocuChat {
    pub(crate) fn render_navbar(&mut self, ctx: &egui::Context, outbox: &mut Vec<Message>) {
        let current_view = self.navigation.current().view();

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.navigation.can_go_back(), egui::Button::new("⬅"))
                    .on_hover_text("Back (Alt+Left)")
                    .clicked()
                {
                    outbox.push(Message::NavigateBack);
                }
                if ui
                    .add_enabled(self.navigation.can_go_forward(), egui::Button::new("➡"))
                    .on_hover_text("Forward (Alt+Right)")
                    .clicked()
                {
                    outbox.push(Message::NavigateForward);
                }
                ui.separator();

                for (view, route) in [
                    (View::Home, Route::Home),
                    (View::Collections, Route::Collections),
                    (View::Chat, Route::Chat(None)),
                ] {
                    if ui
                        .selectable_label(current_view == view, view.label())
                        .clicked()
                    {
                        outbox.push(Message::Navigate(route));
                    }
                }
                ui.separator();

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.ui.address_buffer)
                        .desired_width(style::ADDRESS_BAR_WIDTH)
                        .font(egui::TextStyle::Monospace),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    outbox.push(Message::AddressSubmitted(self.ui.address_buffer.clone()));
                } else if !response.has_focus() {
                    self.ui.address_buffer = self.navigation.current().to_path();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = match self.ui.theme {
                        style::Theme::Dark => "☀",
                        style::Theme::Light => "🌙",
                    };
                    if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                        outbox.push(Message::ToggleTheme);
                    }
                    if ui
                        .button("New session")
                        .on_hover_text("Forget the selected collection and chats")
                        .clicked()
                    {
                        outbox.push(Message::ResetSession);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    pub(crate) fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = match self.active.current() {
                    Some(id) => match self.catalog.find(id) {
                        Some(collection) => format!("Selected: {}", collection.name),
                        None => format!("Selected: {}", id),
                    },
                    None => "No collection selected".to_string(),
                };
                ui.label(label);

                if let Some((err, _)) = &self.ui.error_message {
                    ui.colored_label(egui::Color32::RED, format!(" | {}", err));
                } else if let Some((info, _)) = &self.ui.info_message {
                    ui.colored_label(style::ACCENT, format!(" | {}", info));
                }
            });
        });
    }
}
