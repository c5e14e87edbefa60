use tokio::sync::broadcast;

use crate::event::GuardEvent;

#[derive(Clone)]
pub struct GuardBus {
    sender: broadcast::Sender<GuardEvent>,
}

impl GuardBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GuardEvent> {
        self.sender.subscribe()
    }

    pub fn publish(
        &self,
        event: GuardEvent,
    ) -> Result<usize, broadcast::error::SendError<GuardEvent>> {
        self.sender.send(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;

    fn test_event() -> GuardEvent {
        GuardEvent::new(Outcome::Approved {
            value: "Gruvbox".into(),
        })
    }

    #[test]
    fn publish_and_receive_event() {
        let bus = GuardBus::new(8);
        let mut rx = bus.subscribe();

        let _ = bus.publish(test_event());

        let received = rx.try_recv().expect("recv");
        assert!(
            matches!(received.outcome, Outcome::Approved { ref value } if value.as_str() == "Gruvbox")
        );
    }

    #[test]
    fn multiple_subscribers_receive_event() {
        let bus = GuardBus::new(8);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let event = test_event();
        let _ = bus.publish(event.clone());

        assert_eq!(rx1.try_recv().expect("recv1").id, event.id);
        assert_eq!(rx2.try_recv().expect("recv2").id, event.id);
    }

    #[test]
    fn publish_without_subscribers_errors() {
        let bus = GuardBus::new(8);
        assert!(bus.publish(test_event()).is_err());
    }
}
