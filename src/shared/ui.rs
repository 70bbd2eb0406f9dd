/// Blocking user-visible notification surface (the browser `alert` slot).
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Page-level navigation effects: full reload after an update, and
/// opening a generated report in a new tab.
pub trait PageHandle: Send + Sync {
    fn reload(&self);
    fn open_tab(&self, url: &str);
}

/// Notifier that writes alerts to the log.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!("ALERT: {}", message);
    }
}

/// PageHandle that records navigation intents in the log.
pub struct ConsolePage;

impl PageHandle for ConsolePage {
    fn reload(&self) {
        tracing::info!("Page reload requested");
    }

    fn open_tab(&self, url: &str) {
        tracing::info!("Opening new tab: {}", url);
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Recording notifier for asserting on surfaced alerts.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub alerts: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<String> {
            self.alerts.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.alerts.lock().unwrap().push(message.to_string());
        }
    }

    /// Recording page handle for asserting on reloads and opened tabs.
    #[derive(Default)]
    pub struct RecordingPage {
        pub reloads: Mutex<usize>,
        pub opened: Mutex<Vec<String>>,
    }

    impl RecordingPage {
        pub fn reload_count(&self) -> usize {
            *self.reloads.lock().unwrap()
        }

        pub fn opened_urls(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl PageHandle for RecordingPage {
        fn reload(&self) {
            *self.reloads.lock().unwrap() += 1;
        }

        fn open_tab(&self, url: &str) {
            self.opened.lock().unwrap().push(url.to_string());
        }
    }
}
