use std::time::Duration;

pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Default, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "sent");
        let b = queue.push(ToastKind::Error, "failed");
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
        let kinds = queue.iter().map(|t| t.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Error]);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        let b = queue.push(ToastKind::Success, "two");
        queue.dismiss(a);
        assert_eq!(queue.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);

        // already gone
        queue.dismiss(a);
        assert_eq!(queue.len(), 1);
        queue.dismiss(b);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Error, "x");
        queue.dismiss(a);
        let b = queue.push(ToastKind::Error, "y");
        assert_ne!(a, b);
    }
}
