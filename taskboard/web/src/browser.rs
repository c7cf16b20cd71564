//! Bridges between browser APIs and the board's host-agnostic core.
use dioxus::prelude::*;
use taskboard_core::{DataTransfer, DropEffect};
use tracing::warn;

#[cfg(not(feature = "web"))]
use taskboard_core::MemoryTransfer;

/// The data transfer of a single browser drag event.
pub struct BrowserTransfer {
    #[cfg(feature = "web")]
    inner: Option<web_sys::DataTransfer>,
    #[cfg(not(feature = "web"))]
    inner: MemoryTransfer,
}

impl BrowserTransfer {
    #[cfg(feature = "web")]
    pub fn from_event(event: &DragEvent) -> Self {
        use dioxus::web::WebEventExt;

        let inner = event
            .data()
            .try_as_web_event()
            .and_then(|event| event.data_transfer());
        if inner.is_none() {
            warn!("Drag event without a data transfer");
        }
        BrowserTransfer { inner }
    }

    #[cfg(not(feature = "web"))]
    pub fn from_event(_event: &DragEvent) -> Self {
        BrowserTransfer {
            inner: MemoryTransfer::new(),
        }
    }
}

#[cfg(feature = "web")]
impl DataTransfer for BrowserTransfer {
    fn set_data(&mut self, format: &str, data: &str) {
        if let Some(transfer) = &self.inner {
            if let Err(err) = transfer.set_data(format, data) {
                warn!(?err, format, "Failed to attach drag data");
            }
        }
    }

    fn get_data(&self, format: &str) -> Option<String> {
        self.inner.as_ref()?.get_data(format).ok()
    }

    fn has_type(&self, format: &str) -> bool {
        self.inner.as_ref().is_some_and(|transfer| {
            transfer
                .types()
                .iter()
                .any(|ty| ty.as_string().as_deref() == Some(format))
        })
    }

    fn set_drop_effect(&mut self, effect: DropEffect) {
        if let Some(transfer) = &self.inner {
            transfer.set_drop_effect(effect.as_str());
        }
    }
}

#[cfg(not(feature = "web"))]
impl DataTransfer for BrowserTransfer {
    fn set_data(&mut self, format: &str, data: &str) {
        self.inner.set_data(format, data);
    }

    fn get_data(&self, format: &str) -> Option<String> {
        self.inner.get_data(format)
    }

    fn has_type(&self, format: &str) -> bool {
        self.inner.has_type(format)
    }

    fn set_drop_effect(&mut self, effect: DropEffect) {
        self.inner.set_drop_effect(effect);
    }
}

/// Shows a blocking alert, or logs the message where there is no window.
pub fn alert(message: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                warn!(?err, "Failed to show alert");
            }
            return;
        }
    }

    warn!(message, "Alert");
}
