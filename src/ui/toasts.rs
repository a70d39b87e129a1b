//! Toast notification overlay
//!
//! Each toast is backed by an entry in the core notification center and
//! owns a one-shot timer that removes both the widget and the entry
//! when the TTL elapses. Toasts stack bottom-right and expire
//! independently.

use std::sync::Arc;

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Label, Orientation};
use log::debug;

use cloud_insights_core::NotificationCenter;

/// Bottom-right stack of transient toasts
pub struct ToastStack {
    container: GtkBox,
    center: Arc<NotificationCenter>,
}

impl ToastStack {
    pub fn new(center: Arc<NotificationCenter>) -> Self {
        let container = GtkBox::new(Orientation::Vertical, 4);
        container.set_halign(Align::End);
        container.set_valign(Align::End);
        container.set_margin_end(16);
        container.set_margin_bottom(16);
        Self { container, center }
    }

    /// The widget to install as an overlay child
    pub fn widget(&self) -> &GtkBox {
        &self.container
    }

    /// Post a message and show its toast until the TTL elapses
    pub fn show(&self, message: &str) {
        let notification = self.center.post(message);

        let toast = Label::new(Some(message));
        toast.add_css_class("toast");
        toast.set_halign(Align::End);
        self.container.append(&toast);

        let container = self.container.clone();
        let center = self.center.clone();
        glib::timeout_add_local_once(self.center.ttl(), move || {
            center.dismiss(notification.id);
            container.remove(&toast);
            debug!("Toast {} expired", notification.id);
        });
    }
}
