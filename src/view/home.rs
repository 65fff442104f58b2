// Landing page

use crate::message::Message;
use crate::model::CollectionId;
use crate::route::Route;
use eframe::egui;

pub fn show(ui: &mut egui::Ui, selected: Option<&CollectionId>, outbox: &mut Vec<Message>) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading(egui::RichText::new("DocuChat").size(32.0));
        ui.add_space(8.0);
        ui.label("Ask questions about your document collections.");
        ui.add_space(24.0);

        if ui.button("Browse collections").clicked() {
            outbox.push(Message::Navigate(Route::Collections));
        }

        // /chat without an id picks up the remembered selection
        if let Some(id) = selected {
            ui.add_space(8.0);
            if ui
                .button(format!("Resume chat with collection {}", id))
                .clicked()
            {
                outbox.push(Message::Navigate(Route::Chat(None)));
            }
        }
    });
}
