use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};

/// How long a toast stays up before it dismisses itself.
pub const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(notice) => {
                let mut queue = (*self).clone();
                queue.toasts.push(Toast {
                    id: queue.next_id,
                    notice,
                });
                queue.next_id += 1;
                Rc::new(queue)
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|toast| toast.id == id) {
                    return self;
                }
                let mut queue = (*self).clone();
                queue.toasts.retain(|toast| toast.id != id);
                Rc::new(queue)
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster" aria-live="polite">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        top: 1.5rem;
                        right: 1.5rem;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        max-width: 360px;
                    }
                    .toast {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        padding: 1rem 1.25rem;
                        background: #fff;
                        border: 1px solid var(--luxury-border);
                        border-left: 4px solid var(--luxury-rose);
                        border-radius: 8px;
                        box-shadow: 0 8px 30px -2px rgba(166, 112, 112, 0.2);
                        color: var(--luxury-charcoal);
                        font-size: 0.95rem;
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast.error {
                        border-left-color: #c0392b;
                    }
                    .toast-message {
                        flex: 1;
                    }
                    .toast-close {
                        background: none;
                        border: none;
                        color: var(--luxury-muted-text);
                        cursor: pointer;
                        padding: 0;
                    }
                    @keyframes toastIn {
                        from { transform: translateX(20px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                "#}
            </style>
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                // Dropping the timeout cancels it when the toast goes away early
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let (class, test_id) = match props.toast.notice.kind {
        NoticeKind::Success => ("toast success", "toast-success"),
        NoticeKind::Error => ("toast error", "toast-error"),
    };

    html! {
        <div class={class} role="status" data-testid={test_id}>
            <span class="toast-message">{ &props.toast.notice.message }</span>
            <button class="toast-close" onclick={close} aria-label="Dismiss">
                <IconView icon={Icon::Close} size={16} />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, notice: Notice) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push(notice))
    }

    #[test]
    fn pushed_toasts_get_increasing_ids() {
        let queue = Rc::new(ToastQueue::default());
        let queue = push(queue, Notice::success("sent"));
        let queue = push(queue, Notice::error("failed"));

        let ids: Vec<u32> = queue.toasts.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(queue.toasts[1].notice.kind, NoticeKind::Error);
    }

    #[test]
    fn dismiss_removes_only_the_named_toast() {
        let queue = Rc::new(ToastQueue::default());
        let queue = push(queue, Notice::success("first"));
        let queue = push(queue, Notice::success("second"));

        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].notice.message, "second");
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let queue = Rc::new(ToastQueue::default());
        let queue = push(queue, Notice::success("first"));
        let queue = queue.reduce(ToastAction::Dismiss(0));
        let queue = push(queue, Notice::success("again"));

        assert_eq!(queue.toasts[0].id, 1);
    }

    #[test]
    fn dismissing_an_unknown_id_keeps_the_same_queue() {
        let queue = push(Rc::new(ToastQueue::default()), Notice::error("failed"));
        let after = queue.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &after));
    }
}
