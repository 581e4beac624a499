use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays up.
pub const NOTICE_DISMISS_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Advisory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn advisory(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Advisory, message: message.into() }
    }
}

/// Single notification slot. Each `show` gets a new generation and only the
/// expiry carrying the current generation clears the slot, so a newer notice
/// is never removed by an older timer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<(u64, Notice)>,
}

impl NoticeSlot {
    pub fn show(&mut self, generation: u64, notice: Notice) {
        self.current = Some((generation, notice));
    }

    pub fn expire(&mut self, generation: u64) -> bool {
        match self.current {
            Some((current, _)) if current == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(_, notice)| notice)
    }
}

pub enum NoticeAction {
    Show(u64, Notice),
    Expire(u64),
}

impl Reducible for NoticeSlot {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NoticeAction::Show(generation, notice) => next.show(generation, notice),
            NoticeAction::Expire(generation) => {
                if !next.expire(generation) {
                    return self;
                }
            }
        }
        next.into()
    }
}

/// Handle returned by [`use_notice`].
#[derive(Clone)]
pub struct NoticeHandle {
    slot: UseReducerHandle<NoticeSlot>,
    clock: Rc<Cell<u64>>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl NoticeHandle {
    pub fn show(&self, notice: Notice) {
        let generation = self.clock.get() + 1;
        self.clock.set(generation);
        self.slot.dispatch(NoticeAction::Show(generation, notice));

        let slot = self.slot.clone();
        // Replacing the handle drops and cancels the previous timer
        *self.timer.borrow_mut() = Some(Timeout::new(NOTICE_DISMISS_MS, move || {
            slot.dispatch(NoticeAction::Expire(generation));
        }));
    }

    pub fn notice(&self) -> Option<Notice> {
        self.slot.notice().cloned()
    }
}

#[hook]
pub fn use_notice() -> NoticeHandle {
    let slot = use_reducer(NoticeSlot::default);
    let clock = use_memo(|_| Cell::new(0u64), ());
    let timer = use_mut_ref(|| None::<Timeout>);
    NoticeHandle { slot, clock, timer }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    /// Rendered inside advisory notices, e.g. a "switch form" button.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };
    let (class, icon) = match notice.kind {
        NoticeKind::Success => ("toast toast-success", "✓"),
        NoticeKind::Error => ("toast toast-error", "!"),
        NoticeKind::Advisory => ("toast toast-advisory", "i"),
    };

    html! {
        <div class={class} role="status">
            <style>
                {r#"
                .toast {
                    position: fixed;
                    top: 6rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 1.5rem;
                    border-radius: 12px;
                    color: #fff;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                    animation: toastIn 0.3s ease-out;
                }
                .toast-success { background: rgba(34, 197, 94, 0.9); }
                .toast-error { background: rgba(239, 68, 68, 0.9); }
                .toast-advisory { background: linear-gradient(to right, #cc73f8, #b44fe0); }
                .toast-icon {
                    font-weight: 700;
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 50%;
                    border: 2px solid #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .toast button {
                    background: rgba(255, 255, 255, 0.2);
                    border: none;
                    color: #fff;
                    border-radius: 8px;
                    padding: 0.4rem 0.8rem;
                    cursor: pointer;
                }
                @keyframes toastIn {
                    from { opacity: 0; transform: translate(-50%, -20px); }
                    to { opacity: 1; transform: translate(-50%, 0); }
                }
                "#}
            </style>
            <span class="toast-icon">{icon}</span>
            <p>{&notice.message}</p>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_notice_survives_older_expiry() {
        let mut slot = NoticeSlot::default();
        slot.show(1, Notice::error("first"));
        slot.show(2, Notice::success("second"));

        assert!(!slot.expire(1));
        assert_eq!(slot.notice(), Some(&Notice::success("second")));

        assert!(slot.expire(2));
        assert_eq!(slot.notice(), None);
    }

    #[test]
    fn expiring_an_empty_slot_is_harmless() {
        let mut slot = NoticeSlot::default();
        assert!(!slot.expire(7));
    }

    #[test]
    fn reducer_keeps_state_on_stale_expiry() {
        let slot = Rc::new(NoticeSlot::default());
        let slot = slot.reduce(NoticeAction::Show(3, Notice::advisory("hint")));
        let same = slot.clone().reduce(NoticeAction::Expire(2));
        assert!(Rc::ptr_eq(&slot, &same));
        let cleared = same.reduce(NoticeAction::Expire(3));
        assert_eq!(cleared.notice(), None);
    }
}
