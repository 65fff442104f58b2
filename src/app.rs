use crate::config::Config;
use crate::error::BackendError;
use crate::io::{spawn_worker, Backend, IoCommand, IoResult};
use crate::message::Message;
use crate::model::{ChatMessage, CollectionId};
use crate::route::{Route, View};
use crate::state::{ActiveCollection, CatalogState, ChatState, NavigationState, UIState};
use crate::style;
use crate::view;
use eframe::egui;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use tracing::{debug, info, warn};

/// Composition root. Owns the active collection and the location history and
/// hands each screen only the part it is allowed to see.
pub struct DocuChat {
    pub(crate) navigation: NavigationState,
    pub(crate) active: ActiveCollection,
    pub(crate) catalog: CatalogState,
    pub(crate) chat: ChatState,
    pub(crate) ui: UIState,
    top_k: usize,
    io_tx: Sender<IoCommand>,
    io_rx: Receiver<IoResult>,
}

impl DocuChat {
    pub fn new(
        ctx: &egui::Context,
        config: &Config,
        start: Route,
        backend: Box<dyn Backend>,
    ) -> Self {
        let (io_tx, io_rx) = spawn_worker(ctx.clone(), backend);
        let theme = config.theme.theme();
        ctx.set_visuals(theme.visuals());

        info!(start = %start, "Starting session");
        let mut app = Self {
            navigation: NavigationState::new(start, config.navigation.history_limit),
            active: ActiveCollection::new(),
            catalog: CatalogState::new(),
            chat: ChatState::new(),
            ui: UIState::new(theme),
            top_k: config.chat.top_k,
            io_tx,
            io_rx,
        };
        app.ui.address_buffer = app.navigation.current().to_path();
        app.load_collections();
        app
    }

    /// Collection the chat screen should show for the current location.
    pub fn effective_collection(&self) -> Option<CollectionId> {
        self.active
            .resolve_active_collection(self.navigation.current().chat_id())
    }

    pub fn apply(&mut self, message: Message) {
        match message {
            Message::Navigate(route) => self.navigate(route),
            Message::NavigateBack => {
                if self.navigation.go_back().is_some() {
                    self.sync_address();
                }
            }
            Message::NavigateForward => {
                if self.navigation.go_forward().is_some() {
                    self.sync_address();
                }
            }
            Message::AddressSubmitted(location) => match Route::parse(&location) {
                Ok(route) => self.navigate(route),
                Err(err) => {
                    debug!(error = %err, "Address rejected");
                    self.ui.set_error(err.to_string());
                    self.sync_address();
                }
            },
            Message::RefreshCollections => self.load_collections(),
            Message::SendPrompt { collection, prompt } => self.send_prompt(collection, prompt),
            Message::ResetSession => self.reset_session(),
            Message::ToggleTheme => self.ui.theme = self.ui.theme.toggle(),
        }
    }

    fn navigate(&mut self, route: Route) {
        self.navigation.push(route);
        self.sync_address();
        if self.navigation.current().view() == View::Collections && self.catalog.needs_load() {
            self.load_collections();
        }
    }

    fn sync_address(&mut self) {
        self.ui.address_buffer = self.navigation.current().to_path();
    }

    fn load_collections(&mut self) {
        if self.catalog.is_loading() {
            return;
        }
        self.catalog.begin_loading();
        if let Err(err) = self.dispatch(IoCommand::LoadCollections) {
            self.catalog.set_failed(err.to_string());
        }
    }

    fn send_prompt(&mut self, collection: CollectionId, prompt: String) {
        if prompt.trim().is_empty() || self.chat.is_pending(&collection) {
            return;
        }
        self.chat.push(&collection, ChatMessage::user(prompt.clone()));
        self.chat.begin_request(&collection);
        let command = IoCommand::Ask {
            collection: collection.clone(),
            prompt,
            top_k: self.top_k,
            session: self.chat.session(),
        };
        if let Err(err) = self.dispatch(command) {
            self.chat.finish_request(&collection);
            self.chat.push(&collection, ChatMessage::system(err.to_string()));
        }
    }

    /// Fresh session: forget the selection and transcripts, keep the location.
    fn reset_session(&mut self) {
        self.active.reset();
        self.chat.clear();
        self.ui.set_info("Started a new session".to_string());
    }

    fn dispatch(&mut self, command: IoCommand) -> Result<(), BackendError> {
        self.io_tx.send(command).map_err(|_| {
            warn!("I/O worker is gone, request dropped");
            let err = BackendError::Unavailable("background worker stopped".to_string());
            self.ui.set_error(err.to_string());
            err
        })
    }

    fn drain_io(&mut self) {
        loop {
            match self.io_rx.try_recv() {
                Ok(result) => self.handle_io_result(result),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("I/O result channel disconnected");
                    break;
                }
            }
        }
    }

    pub(crate) fn handle_io_result(&mut self, result: IoResult) {
        match result {
            IoResult::CollectionsLoaded(Ok(collections)) => {
                debug!(count = collections.len(), "Collections loaded");
                self.catalog.set_collections(collections);
            }
            IoResult::CollectionsLoaded(Err(err)) => {
                warn!(error = %err, "Loading collections failed");
                self.ui.set_error(err.to_string());
                self.catalog.set_failed(err.to_string());
            }
            IoResult::Answered {
                collection,
                session,
                result,
            } => {
                if session != self.chat.session() {
                    debug!(collection = %collection, session, "Dropping answer from a previous session");
                    return;
                }
                self.chat.finish_request(&collection);
                let message = match result {
                    Ok(answer) => ChatMessage::assistant(answer.response, answer.sources_count),
                    Err(err) => {
                        warn!(collection = %collection, error = %err, "Question failed");
                        ChatMessage::system(err.to_string())
                    }
                };
                self.chat.push(&collection, message);
            }
        }
    }

    fn handle_input(&self, ctx: &egui::Context, outbox: &mut Vec<Message>) {
        ctx.input(|i| {
            if i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft) {
                outbox.push(Message::NavigateBack);
            }
            if i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight) {
                outbox.push(Message::NavigateForward);
            }
        });
    }

    fn render_view(&mut self, ui: &mut egui::Ui, outbox: &mut Vec<Message>) {
        match self.navigation.current().view() {
            View::Home => view::home::show(ui, self.active.current(), outbox),
            View::Collections => {
                view::collections::show(ui, &self.catalog, self.active.selector(), outbox)
            }
            View::Chat => {
                let effective = self.effective_collection();
                view::chat::show(ui, effective.as_ref(), &self.catalog, &mut self.chat, outbox)
            }
        }
    }
}

impl eframe::App for DocuChat {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_io();
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);
        ctx.set_visuals(self.ui.theme.visuals());

        let mut outbox = Vec::new();
        self.handle_input(ctx, &mut outbox);

        self.render_navbar(ctx, &mut outbox);
        self.render_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_view(ui, &mut outbox);
        });

        // Views have finished; selections made this frame are already stored
        if !outbox.is_empty() {
            for message in outbox {
                self.apply(message);
            }
            ctx.request_repaint();
        }

        if self.ui.error_message.is_some() || self.ui.info_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
