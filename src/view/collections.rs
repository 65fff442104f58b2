// Collections listing
//
// Picking a collection writes the selection first and only then asks for the
// chat location, so the chat screen's first frame already sees the new value.

use crate::message::Message;
use crate::model::CollectionId;
use crate::route::Route;
use crate::state::{CatalogState, CatalogStatus, CollectionSelector};
use crate::style;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

pub fn open_collection(
    selector: &mut CollectionSelector<'_>,
    id: CollectionId,
    outbox: &mut Vec<Message>,
) {
    selector.select(Some(id.clone()));
    // An id that cannot be written as a segment is reached through the selection
    let route_id = id.is_path_segment().then_some(id);
    outbox.push(Message::Navigate(Route::Chat(route_id)));
}

pub fn show(
    ui: &mut egui::Ui,
    catalog: &CatalogState,
    mut selector: CollectionSelector<'_>,
    outbox: &mut Vec<Message>,
) {
    ui.horizontal(|ui| {
        ui.heading("Collections");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(!catalog.is_loading(), egui::Button::new("⟳ Refresh"))
                .clicked()
            {
                outbox.push(Message::RefreshCollections);
            }
            if ui
                .add_enabled(selector.selected().is_some(), egui::Button::new("Clear selection"))
                .clicked()
            {
                selector.select(None);
            }
        });
    });
    ui.separator();

    match &catalog.status {
        CatalogStatus::Idle | CatalogStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading collections…");
            });
            return;
        }
        CatalogStatus::Failed(message) => {
            ui.colored_label(egui::Color32::RED, format!("Could not load collections: {}", message));
            if catalog.collections().is_empty() {
                return;
            }
        }
        CatalogStatus::Loaded => {}
    }

    if catalog.collections().is_empty() {
        ui.label("No collections yet. Add some to the configuration file.");
        return;
    }

    let accent = style::ACCENT;
    let collections = catalog.collections();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(200.0).at_least(120.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder().clip(true))
        .column(Column::auto())
        .header(style::HEADER_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Documents");
            });
            header.col(|ui| {
                ui.strong("Description");
            });
            header.col(|_ui| {});
        })
        .body(|body| {
            body.rows(style::ROW_HEIGHT, collections.len(), |mut row| {
                let collection = &collections[row.index()];
                let is_selected = selector.selected() == Some(&collection.id);
                row.set_selected(is_selected);

                row.col(|ui| {
                    let text = egui::RichText::new(&collection.name);
                    let text = if is_selected { text.color(accent).strong() } else { text };
                    style::truncated_label(ui, text);
                });
                row.col(|ui| {
                    ui.label(collection.documents_label());
                });
                row.col(|ui| {
                    style::truncated_label(ui, collection.description.as_str());
                });
                row.col(|ui| {
                    if ui.button("Open chat").clicked() {
                        open_collection(&mut selector, collection.id.clone(), outbox);
                    }
                });
            });
        });
}
