use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config;
use crate::scheduler::{BrowserScheduler, Scheduler};
use crate::strings;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Kind {
    #[default]
    Info,
    Success,
    Error,
}

impl Kind {
    pub fn color(self) -> &'static str {
        match self {
            Kind::Success => "#10b981",
            Kind::Error => "#ef4444",
            Kind::Info => "#6366f1",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Kind::Info => "notification-info",
            Kind::Success => "notification-success",
            Kind::Error => "notification-error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Inserted but still parked off-screen.
    Entering,
    Visible,
    /// Exit transition running, detached once it ends.
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: Kind,
    pub phase: Phase,
}

impl Notification {
    pub fn transform(&self) -> &'static str {
        match self.phase {
            Phase::Visible => "translateX(0)",
            Phase::Entering | Phase::Leaving => "translateX(100%)",
        }
    }
}

#[derive(Default)]
struct Slot {
    current: Option<Notification>,
    next_id: u64,
}

impl Slot {
    fn insert(&mut self, message: String, kind: Kind) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        if let Some(evicted) = self.current.take() {
            debug!("Evicting {}", evicted.id);
        }
        self.current = Some(Notification {
            id,
            message,
            kind,
            phase: Phase::Entering,
        });
        id
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.current.as_mut().filter(|n| n.id == id)
    }

    fn reveal(&mut self, id: NotificationId) -> bool {
        match self.get_mut(id) {
            Some(n) if n.phase == Phase::Entering => {
                n.phase = Phase::Visible;
                true
            }
            _ => false,
        }
    }

    fn begin_exit(&mut self, id: NotificationId) -> bool {
        match self.get_mut(id) {
            Some(n) if n.phase != Phase::Leaving => {
                n.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    fn detach(&mut self, id: NotificationId) -> bool {
        if self.get_mut(id).is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }
}

/// Owner of the single on-screen notification.
///
/// `show` replaces whatever is displayed. Every timer callback is keyed by
/// the id it was scheduled for, so callbacks outliving their notification
/// do nothing.
#[derive(Clone)]
pub struct NotificationCenter {
    slot: Rc<RefCell<Slot>>,
    scheduler: Rc<dyn Scheduler>,
    on_change: Callback<()>,
}

impl PartialEq for NotificationCenter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl NotificationCenter {
    pub fn new(scheduler: Rc<dyn Scheduler>, on_change: Callback<()>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot::default())),
            scheduler,
            on_change,
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.slot.borrow().current.clone()
    }

    pub fn show(&self, message: impl Into<String>, kind: Kind) -> NotificationId {
        let id = self.slot.borrow_mut().insert(message.into(), kind);
        debug!("Showing {} ({:?})", id, kind);
        self.on_change.emit(());

        let center = self.clone();
        self.scheduler.schedule(
            config::NOTIFICATION_ENTER_DELAY_MS,
            Box::new(move || {
                center.apply(|slot| slot.reveal(id));
            }),
        );
        let center = self.clone();
        self.scheduler.schedule(
            config::NOTIFICATION_AUTO_DISMISS_MS,
            Box::new(move || center.dismiss(id)),
        );
        id
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Kind::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Kind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Kind::Error)
    }

    /// Starts the exit transition; the element is detached once it ends.
    pub fn dismiss(&self, id: NotificationId) {
        if !self.apply(|slot| slot.begin_exit(id)) {
            return;
        }
        let center = self.clone();
        self.scheduler.schedule(
            config::NOTIFICATION_EXIT_MS,
            Box::new(move || {
                if center.apply(|slot| slot.detach(id)) {
                    debug!("Detached {}", id);
                }
            }),
        );
    }

    fn apply(&self, f: impl FnOnce(&mut Slot) -> bool) -> bool {
        let changed = f(&mut self.slot.borrow_mut());
        if changed {
            self.on_change.emit(());
        }
        changed
    }
}

#[hook]
pub fn use_notifications() -> Option<NotificationCenter> {
    use_context::<NotificationCenter>()
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let trigger = use_force_update();
    let center = use_memo(
        move |_| {
            NotificationCenter::new(
                Rc::new(BrowserScheduler),
                Callback::from(move |_| trigger.force_update()),
            )
        },
        (),
    );
    let center = (*center).clone();

    let toast = center.current().map(|notification| {
        let on_close = {
            let center = center.clone();
            let id = notification.id;
            Callback::from(move |_| center.dismiss(id))
        };
        let key = notification.id.to_string();
        html! {
            <Toast key={key} notification={notification} on_close={on_close} />
        }
    });

    html! {
        <ContextProvider<NotificationCenter> context={center}>
            { for props.children.iter() }
            { toast.unwrap_or_default() }
        </ContextProvider<NotificationCenter>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notification: Notification,
    on_close: Callback<()>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let ToastProps { notification, on_close } = props;
    let onclick = {
        let on_close = on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let style = format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
         padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); \
         z-index: 10000; transform: {}; transition: transform 0.3s ease; max-width: 400px;",
        notification.kind.color(),
        notification.transform(),
    );

    html! {
        <div class={classes!("notification", notification.kind.class())} {style}>
            <div class="notification-content">
                <span class="notification-message">{&notification.message}</span>
                <button class="notification-close" {onclick}>{strings::NOTIFICATION_CLOSE}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::manual::ManualScheduler;
    use std::cell::Cell;

    fn center() -> (NotificationCenter, Rc<ManualScheduler>, Rc<Cell<u32>>) {
        let clock = Rc::new(ManualScheduler::default());
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        let center = NotificationCenter::new(
            clock.clone(),
            Callback::from(move |_| counter.set(counter.get() + 1)),
        );
        (center, clock, renders)
    }

    fn phase(center: &NotificationCenter) -> Option<Phase> {
        center.current().map(|n| n.phase)
    }

    #[test]
    fn kind_defaults_to_info() {
        assert_eq!(Kind::default(), Kind::Info);
        assert_eq!(Kind::default().color(), "#6366f1");
        assert_eq!(Kind::Success.color(), "#10b981");
        assert_eq!(Kind::Error.color(), "#ef4444");
    }

    #[test]
    fn enters_after_short_delay() {
        let (center, clock, renders) = center();
        center.info("hello");
        assert_eq!(phase(&center), Some(Phase::Entering));
        assert_eq!(center.current().unwrap().transform(), "translateX(100%)");
        assert_eq!(renders.get(), 1);

        clock.advance(99);
        assert_eq!(phase(&center), Some(Phase::Entering));
        clock.advance(1);
        assert_eq!(phase(&center), Some(Phase::Visible));
        assert_eq!(center.current().unwrap().transform(), "translateX(0)");
        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn auto_dismisses_between_5000_and_5300_ms() {
        let (center, clock, _) = center();
        center.success("saved");

        clock.advance(4_999);
        assert_eq!(phase(&center), Some(Phase::Visible));
        clock.advance(1);
        assert_eq!(phase(&center), Some(Phase::Leaving));
        clock.advance(299);
        assert!(center.current().is_some());
        clock.advance(1);
        assert!(center.current().is_none());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn second_show_evicts_first() {
        let (center, clock, _) = center();
        let first = center.info("first");
        clock.advance(1_000);
        let second = center.error("second");

        let current = center.current().unwrap();
        assert_eq!(current.id, second);
        assert_ne!(first, second);
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, Kind::Error);

        // First notification's auto-dismiss fires at 5000 and must not touch the second.
        clock.advance(4_000);
        assert_eq!(center.current().map(|n| (n.id, n.phase)), Some((second, Phase::Visible)));
        clock.advance(1_000);
        assert_eq!(phase(&center), Some(Phase::Leaving));
        clock.advance(300);
        assert!(center.current().is_none());
    }

    #[test]
    fn manual_dismiss_removes_within_exit_transition() {
        let (center, clock, _) = center();
        let id = center.info("bye");
        clock.advance(2_000);

        center.dismiss(id);
        assert_eq!(phase(&center), Some(Phase::Leaving));
        clock.advance(300);
        assert!(center.current().is_none());

        // The stale auto-dismiss timer is a no-op.
        clock.advance(5_000);
        assert!(center.current().is_none());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn close_during_auto_exit_still_removes_on_time() {
        let (center, clock, _) = center();
        let id = center.info("closing");

        clock.advance(5_100);
        assert_eq!(phase(&center), Some(Phase::Leaving));
        center.dismiss(id);
        assert_eq!(clock.pending(), 1);

        clock.advance(199);
        assert!(center.current().is_some());
        clock.advance(1);
        assert!(center.current().is_none());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn dismiss_during_entrance_and_repeated_close_are_idempotent() {
        let (center, clock, renders) = center();
        let id = center.info("quick");
        center.dismiss(id);
        let after_first = renders.get();
        center.dismiss(id);
        assert_eq!(renders.get(), after_first);

        clock.advance(100);
        assert_eq!(phase(&center), Some(Phase::Leaving));
        clock.advance(200);
        assert!(center.current().is_none());
    }

    #[test]
    fn stale_detach_does_not_remove_newer_notification() {
        let (center, clock, _) = center();
        let old = center.info("old");
        center.dismiss(old);
        clock.advance(100);
        let new = center.info("new");
        clock.advance(200);
        assert_eq!(center.current().map(|n| n.id), Some(new));
    }
}
