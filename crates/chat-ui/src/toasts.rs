//! Toast notifications — the UI side of the notifier port.
//!
//! The session pushes notifications; the overlay stamps each toast with the
//! frame time it first appeared and drops it once `ttl` seconds have passed.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use egui::{self, Align2, RichText};
use chat_core::ports::NotifierPort;
use chat_types::notification::{Notification, Severity};
use crate::theme::*;

const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    shown_at: Option<f64>,
}

/// Shared toast queue — clone-cheap via Rc.
#[derive(Clone, Default)]
pub struct Toasts {
    inner: Rc<RefCell<VecDeque<Toast>>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Notifications currently on screen, oldest first
    pub fn active(&self) -> Vec<Notification> {
        self.inner
            .borrow()
            .iter()
            .map(|t| t.notification.clone())
            .collect()
    }

    /// Stamp new toasts with `now` and drop those older than `ttl` seconds.
    pub fn expire(&self, now: f64, ttl: f64) {
        let mut toasts = self.inner.borrow_mut();
        for toast in toasts.iter_mut() {
            toast.shown_at.get_or_insert(now);
        }
        toasts.retain(|t| t.shown_at.is_some_and(|at| now - at < ttl));
    }

    pub fn dismiss(&self, index: usize) {
        self.inner.borrow_mut().remove(index);
    }
}

impl NotifierPort for Toasts {
    fn notify(&self, notification: Notification) {
        log::debug!("Toast: {} - {}", notification.title, notification.description);
        let mut toasts = self.inner.borrow_mut();
        toasts.push_back(Toast {
            notification,
            shown_at: None,
        });
        while toasts.len() > MAX_TOASTS {
            toasts.pop_front();
        }
    }
}

/// Render active toasts in the top-right corner.
pub fn toasts_overlay(ctx: &egui::Context, toasts: &Toasts, ttl_seconds: f32) {
    let now = ctx.input(|i| i.time);
    toasts.expire(now, f64::from(ttl_seconds));
    if toasts.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(Align2::RIGHT_TOP, egui::vec2(-12.0, 40.0))
        .show(ctx, |ui| {
            for (index, notification) in toasts.active().iter().enumerate() {
                egui::Frame::default()
                    .fill(TOAST_BG)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(&notification.title)
                                    .color(severity_color(notification.severity))
                                    .strong(),
                            );
                            if ui.small_button("✕").clicked() {
                                dismissed = Some(index);
                            }
                        });
                        ui.label(RichText::new(&notification.description).color(TEXT_PRIMARY));
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(index) = dismissed {
        toasts.dismiss(index);
    }
    ctx.request_repaint();
}

pub fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Info => INFO,
        Severity::Success => SUCCESS,
        Severity::Warning => WARNING,
        Severity::Error => ERROR,
    }
}
