// Chat screen
//
// Receives the effective collection already resolved by the app. `None` is a
// normal input: the screen asks the user to pick a collection.

use crate::message::Message;
use crate::model::{ChatMessage, CollectionId, Role};
use crate::route::Route;
use crate::state::{CatalogState, CatalogStatus, ChatState};
use crate::style;
use crate::view::markdown::render_markdown;
use eframe::egui;

pub fn show(
    ui: &mut egui::Ui,
    effective: Option<&CollectionId>,
    catalog: &CatalogState,
    chat: &mut ChatState,
    outbox: &mut Vec<Message>,
) {
    let Some(collection) = effective else {
        show_no_selection(ui, outbox);
        return;
    };

    render_header(ui, collection, catalog);
    ui.separator();

    let pending = chat.is_pending(collection);
    let input_height = ui.spacing().interact_size.y * (style::CHAT_INPUT_ROWS as f32 + 1.5);

    egui::ScrollArea::vertical()
        .id_salt("chat_transcript")
        .auto_shrink([false, false])
        .max_height((ui.available_height() - input_height).max(0.0))
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.set_max_width(style::CONTENT_MAX_WIDTH.min(ui.available_width()));
            let transcript = chat.transcript(collection);
            if transcript.is_empty() {
                ui.label(egui::RichText::new("No messages yet. Ask something below.").weak());
            }
            for message in transcript {
                render_message(ui, message);
            }
            if pending {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Thinking…");
                });
            }
            if chat.scroll_to_bottom {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
    chat.scroll_to_bottom = false;

    ui.separator();
    render_input(ui, collection, pending, chat, outbox);
}

fn show_no_selection(ui: &mut egui::Ui, outbox: &mut Vec<Message>) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading("No collection selected");
        ui.add_space(8.0);
        ui.label("Pick a collection to start chatting.");
        ui.add_space(16.0);
        if ui.button("Go to collections").clicked() {
            outbox.push(Message::Navigate(Route::Collections));
        }
    });
}

fn render_header(ui: &mut egui::Ui, collection: &CollectionId, catalog: &CatalogState) {
    match catalog.find(collection) {
        Some(found) => {
            ui.heading(found.name.as_str());
            if !found.description.is_empty() {
                ui.label(egui::RichText::new(&found.description).weak());
            }
        }
        // Only claim the id is unknown once the listing has arrived
        None if catalog.status == CatalogStatus::Loaded => {
            ui.heading(format!("Collection {}", collection));
            ui.colored_label(
                egui::Color32::YELLOW,
                "This collection is not in the current listing.",
            );
        }
        None => {
            ui.heading(format!("Collection {}", collection));
        }
    }
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let color = match message.role {
        Role::User => style::ACCENT,
        Role::Assistant => ui.visuals().strong_text_color(),
        Role::System => egui::Color32::YELLOW,
    };

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(message.role.label()).color(color).strong());
        ui.label(egui::RichText::new(message.time_label()).small().weak());
        if let Some(sources) = message.sources_count {
            ui.label(egui::RichText::new(format!("{} sources", sources)).small().weak());
        }
    });

    match message.role {
        Role::Assistant => render_markdown(ui, &message.content),
        _ => {
            ui.label(message.content.as_str());
        }
    }
}

fn render_input(
    ui: &mut egui::Ui,
    collection: &CollectionId,
    pending: bool,
    chat: &mut ChatState,
    outbox: &mut Vec<Message>,
) {
    ui.horizontal(|ui| {
        let width = ui.available_width() - 80.0;
        let response = ui.add(
            egui::TextEdit::multiline(chat.draft_mut(collection))
                .desired_rows(style::CHAT_INPUT_ROWS)
                .desired_width(width)
                .hint_text("Ask a question (Ctrl+Enter to send)"),
        );
        let shortcut = response.has_focus()
            && ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));

        let can_send = !pending && !chat.draft(collection).trim().is_empty();
        let clicked = ui.add_enabled(can_send, egui::Button::new("Send")).clicked();

        if can_send && (clicked || shortcut) {
            let prompt = chat.take_draft(collection);
            outbox.push(Message::SendPrompt {
                collection: collection.clone(),
                prompt: prompt.trim().to_string(),
            });
        }
    });
}
