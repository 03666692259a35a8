//! Benachrichtigungen des Zeichen-Widgets und Abo-Verwaltung.

use super::{Feature, UpdateAction};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Zwischenstand einer laufenden Zeichen-Interaktion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InProgress {
    /// Name aus dem Zustand des Zeichenmodus (z.B. beim Fortsetzen einer Linie)
    pub name: Option<String>,
}

/// Benachrichtigung des Zeichen-Widgets
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    /// Features wurden neu erstellt
    FeaturesCreated { features: Vec<Feature> },
    /// Features wurden geändert
    FeaturesUpdated {
        features: Vec<Feature>,
        action: UpdateAction,
    },
    /// Selektion hat sich geändert
    SelectionChanged { features: Vec<Feature> },
    /// Features wurden gelöscht
    FeaturesDeleted { features: Vec<Feature> },
    /// Zeiger bewegt sich während des Zeichnens (Geometrie noch nicht gespeichert)
    LiveDragMove {
        feature: Feature,
        in_progress: InProgress,
    },
}

/// Art einer Benachrichtigung (für Abo-Filter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawEventKind {
    /// Erstellen
    Created,
    /// Ändern
    Updated,
    /// Selektionswechsel
    SelectionChanged,
    /// Löschen
    Deleted,
    /// Live-Zeichnen
    LiveDragMove,
}

impl DrawEventKind {
    /// Alle Event-Arten.
    pub const ALL: [DrawEventKind; 5] = [
        DrawEventKind::Created,
        DrawEventKind::Updated,
        DrawEventKind::SelectionChanged,
        DrawEventKind::Deleted,
        DrawEventKind::LiveDragMove,
    ];
}

impl DrawEvent {
    /// Gibt die Art des Events zurück.
    pub fn kind(&self) -> DrawEventKind {
        match self {
            DrawEvent::FeaturesCreated { .. } => DrawEventKind::Created,
            DrawEvent::FeaturesUpdated { .. } => DrawEventKind::Updated,
            DrawEvent::SelectionChanged { .. } => DrawEventKind::SelectionChanged,
            DrawEvent::FeaturesDeleted { .. } => DrawEventKind::Deleted,
            DrawEvent::LiveDragMove { .. } => DrawEventKind::LiveDragMove,
        }
    }
}

/// Empfangsseite eines Abos.
///
/// Beim Drop wird der Kanal geschlossen; der [`EventBus`] entfernt den
/// Abonnenten beim nächsten Publish.
pub struct Subscription {
    receiver: Receiver<DrawEvent>,
}

impl Subscription {
    /// Nächstes wartendes Event (None = Queue leer).
    pub fn next_event(&self) -> Option<DrawEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

struct Subscriber {
    kinds: Vec<DrawEventKind>,
    sender: Sender<DrawEvent>,
}

/// Verteilt Widget-Benachrichtigungen an alle Abonnenten in Eingangsreihenfolge.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    /// Erstellt einen Bus ohne Abonnenten.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Abonnenten für die angegebenen Event-Arten.
    pub fn subscribe(&mut self, kinds: &[DrawEventKind]) -> Subscription {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(Subscriber {
            kinds: kinds.to_vec(),
            sender,
        });
        Subscription { receiver }
    }

    /// Verteilt ein Event; getrennte Abonnenten werden dabei entfernt.
    pub fn publish(&mut self, event: DrawEvent) {
        let kind = event.kind();
        self.subscribers.retain(|subscriber| {
            if !subscriber.kinds.contains(&kind) {
                return true;
            }
            subscriber.sender.send(event.clone()).is_ok()
        });
    }

    /// Anzahl registrierter Abonnenten (inkl. noch nicht bereinigter).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_kommen_in_eingangsreihenfolge_an() {
        let mut bus = EventBus::new();
        let sub = bus.subscribe(&DrawEventKind::ALL);

        bus.publish(DrawEvent::SelectionChanged { features: vec![] });
        bus.publish(DrawEvent::FeaturesDeleted { features: vec![] });

        assert_eq!(sub.next_event().map(|e| e.kind()), Some(DrawEventKind::SelectionChanged));
        assert_eq!(sub.next_event().map(|e| e.kind()), Some(DrawEventKind::Deleted));
        assert!(sub.next_event().is_none());
    }

    #[test]
    fn test_filter_nach_event_art() {
        let mut bus = EventBus::new();
        let sub = bus.subscribe(&[DrawEventKind::Deleted]);

        bus.publish(DrawEvent::SelectionChanged { features: vec![] });
        assert!(sub.next_event().is_none());
    }

    #[test]
    fn test_gedroppte_subscription_wird_entfernt() {
        let mut bus = EventBus::new();
        let sub = bus.subscribe(&DrawEventKind::ALL);
        assert_eq!(bus.subscriber_count(), 1);

        drop(sub);
        bus.publish(DrawEvent::FeaturesDeleted { features: vec![] });
        assert_eq!(bus.subscriber_count(), 0);
    }
}
