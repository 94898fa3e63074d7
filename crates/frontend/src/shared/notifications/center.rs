use crate::shared::capability::{Spawner, Timer};
use contracts::shared::notification::{
    Notification, NotificationId, NotificationTimings, Severity,
};
use futures::future::FutureExt;
use leptos::prelude::*;
use std::rc::Rc;

/// Owns the list of live notifications and drives each one's timers.
///
/// Every `notify` call spawns an independent lifecycle task, so overlapping
/// toasts never wait on each other. The list keeps insertion order.
#[derive(Clone)]
pub struct NotificationCenter {
    toasts: RwSignal<Vec<Notification>>,
    timer: Rc<dyn Timer>,
    spawner: Spawner,
    timings: NotificationTimings,
}

impl NotificationCenter {
    pub fn new(timer: Rc<dyn Timer>, spawner: Spawner, timings: NotificationTimings) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            timer,
            spawner,
            timings,
        }
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let toast = Notification::new(message, severity);
        let id = toast.id;
        log::debug!("notify [{}]: {}", severity.css_class(), toast.message);
        self.toasts.update(|list| list.push(toast));
        (self.spawner)(self.lifecycle(id).boxed_local());
        id
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Severity::Success)
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Severity::Info)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Severity::Error)
    }

    /// Removes a toast before its timers run out (click to dismiss).
    pub fn dismiss(&self, id: NotificationId) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    /// Live toasts, oldest first.
    pub fn toasts(&self) -> ReadSignal<Vec<Notification>> {
        self.toasts.read_only()
    }

    pub fn timings(&self) -> NotificationTimings {
        self.timings
    }

    fn lifecycle(&self, id: NotificationId) -> impl std::future::Future<Output = ()> + 'static {
        let toasts = self.toasts;
        let timer = Rc::clone(&self.timer);
        let timings = self.timings;

        async move {
            loop {
                let phase = toasts
                    .try_with_untracked(|list| list.iter().find(|t| t.id == id).map(|t| t.phase))
                    .flatten();
                // Dismissed early, or the host was unmounted.
                let Some(phase) = phase else { return };

                timer.sleep(timings.dwell_ms(phase)).await;

                let finished = toasts.try_update(|list| {
                    let Some(pos) = list.iter().position(|t| t.id == id) else {
                        return true;
                    };
                    if list[pos].advance() {
                        false
                    } else {
                        list.remove(pos);
                        true
                    }
                });
                if finished.unwrap_or(true) {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::reactive_owner;
    use contracts::shared::notification::ToastPhase;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::future::LocalBoxFuture;
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;

    /// Timer whose sleeps complete only when the test fires them.
    #[derive(Default)]
    struct ManualTimer {
        pending: RefCell<Vec<(u32, oneshot::Sender<()>)>>,
    }

    impl ManualTimer {
        fn fire_all(&self) -> Vec<u32> {
            self.pending
                .borrow_mut()
                .drain(..)
                .map(|(ms, tx)| {
                    let _ = tx.send(());
                    ms
                })
                .collect()
        }
    }

    impl Timer for ManualTimer {
        fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().push((ms, tx));
            async move {
                let _ = rx.await;
            }
            .boxed_local()
        }
    }

    fn setup() -> (LocalPool, Rc<ManualTimer>, NotificationCenter) {
        reactive_owner();
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        let timer = Rc::new(ManualTimer::default());
        let center = NotificationCenter::new(
            timer.clone(),
            Rc::new(move |fut: LocalBoxFuture<'static, ()>| {
                spawner.spawn_local(fut).expect("spawn toast lifecycle")
            }),
            NotificationTimings::default(),
        );
        (pool, timer, center)
    }

    fn phases(center: &NotificationCenter) -> Vec<ToastPhase> {
        center.toasts().get_untracked().iter().map(|t| t.phase).collect()
    }

    #[test]
    fn test_toast_walks_through_phases_and_is_removed() {
        let (mut pool, timer, center) = setup();
        center.success("HTML copied!");
        pool.run_until_stalled();
        assert_eq!(phases(&center), vec![ToastPhase::Entering]);

        assert_eq!(timer.fire_all(), vec![10]);
        pool.run_until_stalled();
        assert_eq!(phases(&center), vec![ToastPhase::Shown]);
        assert_eq!(
            center.toasts().get_untracked()[0].css_class(),
            "notification success show"
        );

        assert_eq!(timer.fire_all(), vec![2990]);
        pool.run_until_stalled();
        assert_eq!(phases(&center), vec![ToastPhase::Leaving]);

        assert_eq!(timer.fire_all(), vec![300]);
        pool.run_until_stalled();
        assert!(center.toasts().get_untracked().is_empty());
        assert!(timer.fire_all().is_empty());
    }

    #[test]
    fn test_lifetime_is_bounded_with_many_concurrent_toasts() {
        let (mut pool, timer, center) = setup();
        for i in 0..5 {
            center.info(format!("message {i}"));
        }
        pool.run_until_stalled();

        let mut waited = 0;
        while !center.toasts().get_untracked().is_empty() {
            let fired = timer.fire_all();
            assert_eq!(fired.len(), 5);
            waited += fired[0];
            pool.run_until_stalled();
        }
        assert_eq!(waited, center.timings().total_lifetime_ms());
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let (mut pool, _timer, center) = setup();
        center.success("first");
        center.error("second");
        center.info("third");
        pool.run_until_stalled();
        let messages: Vec<_> = center
            .toasts()
            .get_untracked()
            .into_iter()
            .map(|t| t.message)
            .collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_dismiss_stops_lifecycle() {
        let (mut pool, timer, center) = setup();
        let id = center.error("Download failed. Please try again.");
        pool.run_until_stalled();
        center.dismiss(id);
        assert!(center.toasts().get_untracked().is_empty());

        timer.fire_all();
        pool.run_until_stalled();
        assert!(center.toasts().get_untracked().is_empty());
        assert!(timer.fire_all().is_empty());
    }

    #[test]
    fn test_clones_share_one_toast_list() {
        let (mut pool, timer, center) = setup();
        let other = center.clone();
        let id = other.success("done");
        pool.run_until_stalled();
        assert_eq!(center.toasts().get_untracked()[0].id, id);

        for _ in 0..3 {
            timer.fire_all();
            pool.run_until_stalled();
        }
        assert!(center.toasts().get_untracked().is_empty());
        assert!(other.toasts().get_untracked().is_empty());
    }
}
