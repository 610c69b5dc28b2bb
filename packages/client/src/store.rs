use tokio::sync::watch;

/// A value that views can observe.
///
/// Holds the latest value; every [`publish`](Store::publish) replaces it
/// wholesale and wakes subscribers. Subscribers always see the current value
/// first, then each later change.
#[derive(Debug)]
pub struct Store<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    pub fn publish(&self, value: T) {
        self.sender.send_replace(value);
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_latest_value() {
        let store = Store::new(1);

        store.publish(2);
        store.publish(3);

        assert_eq!(store.get(), 3);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let store: Store<Vec<String>> = Store::default();

        store.publish(vec!["a".to_string()]);

        assert_eq!(store.get(), vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_subscriber_sees_current_then_changes() {
        let store = Store::new(false);
        let mut receiver = store.subscribe();

        assert!(!*receiver.borrow_and_update());

        store.publish(true);
        receiver.changed().await.unwrap();

        assert!(*receiver.borrow_and_update());
    }

    #[tokio::test]
    async fn test_late_subscriber_sees_latest_value() {
        let store = Store::new(Some("first".to_string()));
        store.publish(None);

        let receiver = store.subscribe();

        assert_eq!(*receiver.borrow(), None);
    }
}
