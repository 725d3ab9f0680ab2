//! Integration tests for velum-telemetry.

use velum_telemetry::events::{ConstraintFamily, EventKind};
use velum_telemetry::{EventBus, EventSink, SimulationEvent, VecSink};
use velum_types::{BodyId, TriangleId};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct CountingSink {
    count: Arc<AtomicUsize>,
}

impl EventSink for CountingSink {
    fn handle(&mut self, _event: &SimulationEvent) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    fn name(&self) -> &str {
        "counting_sink"
    }
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(VecSink::new()));
    bus.set_enabled(false);

    bus.emit(SimulationEvent::new(0, EventKind::FrameBegin { dt: 1.0 / 60.0 }));
    bus.flush();
    // Nothing observable through the sink trait here, but the emit must
    // not panic and the bus stays usable once re-enabled.
    bus.set_enabled(true);
    bus.emit(SimulationEvent::new(1, EventKind::FrameBegin { dt: 1.0 / 60.0 }));
    bus.flush();
    assert!(bus.is_enabled());
}

#[test]
fn flush_delivers_to_every_sink() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(CountingSink {
        count: Arc::clone(&first),
    }));
    bus.add_sink(Box::new(CountingSink {
        count: Arc::clone(&second),
    }));
    assert_eq!(bus.sink_count(), 2);

    for frame in 0..3 {
        bus.emit(SimulationEvent::new(
            frame,
            EventKind::Energy {
                body: BodyId(0),
                distance: Some(1.5),
                volume: None,
            },
        ));
    }
    bus.flush();

    assert_eq!(first.load(Ordering::Relaxed), 3);
    assert_eq!(second.load(Ordering::Relaxed), 3);
}

#[test]
fn cloned_sender_reaches_the_bus() {
    let count = Arc::new(AtomicUsize::new(0));
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(CountingSink {
        count: Arc::clone(&count),
    }));
    let sender = bus.sender();

    // Senders cross thread boundaries the way frame tasks do.
    let handle = std::thread::spawn(move || {
        sender
            .send(SimulationEvent::new(
                7,
                EventKind::ConstraintFamilySkipped {
                    body: BodyId(2),
                    family: ConstraintFamily::Distance,
                },
            ))
            .unwrap();
    });
    handle.join().unwrap();

    bus.flush();
    assert_eq!(count.load(Ordering::Relaxed), 1);
}

#[test]
fn events_serialize_to_json() {
    let event = SimulationEvent::new(
        12,
        EventKind::PickHit {
            body: BodyId(1),
            triangle_index: TriangleId(40),
            point: [0.25, 0.25, 0.0],
        },
    );

    let json = serde_json::to_string(&event).unwrap();
    let back: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back.frame, 12);
    match back.kind {
        EventKind::PickHit { triangle_index, .. } => assert_eq!(triangle_index, TriangleId(40)),
        other => panic!("unexpected event kind {other:?}"),
    }
}
