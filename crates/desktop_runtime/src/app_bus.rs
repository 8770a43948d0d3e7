//! Typed desktop pub/sub bus shared by the shell and its collaborators.
//!
//! The bus is single-threaded and cloneable; clones share one subscriber table. Delivery is
//! synchronous, and a handler may publish again while it runs: every publish delivers to the
//! subscribers registered when that publish began.

use std::{cell::RefCell, rc::Rc};

use desktop_app_contract::{DesktopSignal, SignalPublisher};
use leptos::logging;

use crate::{model::OpenWindowRequest, reducer::DesktopAction};

type SignalHandler = Rc<dyn Fn(&DesktopSignal)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Handle returned by [`DesktopBus::subscribe`].
pub struct SubscriptionId(u64);

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, SignalHandler)>,
}

#[derive(Clone, Default)]
/// Explicit desktop event bus.
pub struct DesktopBus {
    inner: Rc<RefCell<BusInner>>,
}

impl DesktopBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every future publish.
    pub fn subscribe(&self, handler: impl Fn(&DesktopSignal) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id = inner.next_id.saturating_add(1);
        let id = SubscriptionId(inner.next_id);
        inner.subscribers.push((id, Rc::new(handler)));
        id
    }

    /// Removes a subscription. Returns `false` when it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        inner.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Delivers `signal` to every current subscriber and returns how many received it.
    pub fn publish(&self, signal: DesktopSignal) -> usize {
        let handlers: Vec<SignalHandler> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        if handlers.is_empty() {
            logging::warn!("desktop bus: `{}` published with no subscribers", signal.token());
            return 0;
        }

        for handler in &handlers {
            handler(&signal);
        }
        handlers.len()
    }

    /// Publish handle for app collaborators.
    pub fn publisher(&self) -> SignalPublisher {
        let bus = self.clone();
        SignalPublisher::new(move |signal| {
            bus.publish(signal);
        })
    }
}

/// Maps a bus signal onto the reducer action that fulfils it.
pub fn signal_to_action(signal: &DesktopSignal) -> DesktopAction {
    match signal {
        DesktopSignal::OpenApp { app_id, title } => {
            let title = if title.trim().is_empty() {
                app_id.to_string()
            } else {
                title.clone()
            };
            DesktopAction::OpenWindow(OpenWindowRequest::new(app_id.clone(), title))
        }
        DesktopSignal::ChangeBackground { value, kind } => DesktopAction::SetBackground {
            value: value.clone(),
            kind: *kind,
        },
        DesktopSignal::AppInstalled(app) => DesktopAction::InstallApp { app: app.clone() },
        DesktopSignal::AppRemoved { app_id } => DesktopAction::RemoveApp {
            app_id: app_id.clone(),
        },
    }
}

/// Subscribes the desktop reducer to `bus`.
pub fn connect_bus(
    bus: &DesktopBus,
    dispatch: impl Fn(DesktopAction) + 'static,
) -> SubscriptionId {
    bus.subscribe(move |signal| dispatch(signal_to_action(signal)))
}
