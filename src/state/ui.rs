// UI state - presentation settings and transient status messages
use crate::style::Theme;
use std::time::Instant;

pub struct UIState {
    pub theme: Theme,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
    /// Text of the address bar while the user edits it
    pub address_buffer: String,
}

impl UIState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            error_message: None,
            info_message: None,
            address_buffer: String::new(),
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_expire() {
        let mut ui = UIState::new(Theme::Dark);
        ui.set_error("boom".to_string());
        ui.set_info("saved".to_string());

        ui.clear_expired_messages(60);
        assert!(ui.error_message.is_some());
        assert!(ui.info_message.is_some());

        ui.clear_expired_messages(0);
        assert!(ui.error_message.is_none());
        assert!(ui.info_message.is_none());
    }
}
