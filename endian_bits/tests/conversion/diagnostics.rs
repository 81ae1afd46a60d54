use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use endian_bits::{Decimal, big_endian, little_endian};
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Clone, Default)]
struct EventCounter {
    events: Arc<AtomicUsize>,
}

impl<S> tracing_subscriber::Layer<S> for EventCounter
where
    S: tracing::Subscriber,
{
    fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.events.fetch_add(1, Ordering::SeqCst);
    }
}

fn events_during(operation: impl FnOnce()) -> usize {
    let counter = EventCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    tracing::subscriber::with_default(subscriber, operation);
    counter.events.load(Ordering::SeqCst)
}

//------------------------------------------------------------------------------
// Rejections
//------------------------------------------------------------------------------

#[test]
fn insufficient_bytes_emits_one_event() {
    let events = events_during(|| assert!(little_endian().decode_u32(&[1, 2], 0).is_err()));
    assert_eq!(events, 1);
}

#[test]
fn invalid_start_index_emits_one_event() {
    let events = events_during(|| assert!(big_endian().decode_u16(&[1, 2], 2).is_err()));
    assert_eq!(events, 1);
}

#[test]
fn odd_byte_count_emits_one_event() {
    let events = events_during(|| assert!(little_endian().decode_string(&[1, 2, 3], 0, 3).is_err()));
    assert_eq!(events, 1);
}

#[test]
fn malformed_decimal_emits_one_event() {
    let events = events_during(|| assert!(big_endian().decode_decimal(&[0xFF; 16], 0).is_err()));
    assert_eq!(events, 1);
}

#[test]
fn malformed_decimal_words_emit_one_event() {
    let events = events_during(|| assert!(Decimal::from_bits([0, 0, 0, 0x0000_0001]).is_err()));
    assert_eq!(events, 1);
}

#[test]
fn oversized_scale_emits_one_event() {
    let events = events_during(|| assert!(Decimal::new(1, 29).is_err()));
    assert_eq!(events, 1);
}

//------------------------------------------------------------------------------
// Successes
//------------------------------------------------------------------------------

#[test]
fn successful_conversions_are_silent() {
    let events = events_during(|| {
        let bytes = big_endian().encode_str("a😀b");
        assert!(big_endian().decode_string(&bytes, 0, bytes.len()).is_ok());
        assert!(big_endian().decode_string(&bytes, bytes.len(), 0).is_ok());
        assert!(little_endian().decode_u32(&[1, 2, 3, 4], 0).is_ok());
        let decimal = little_endian().encode(Decimal::new(-12345, 2).unwrap());
        assert!(little_endian().decode_decimal(&decimal, 0).is_ok());
    });
    assert_eq!(events, 0);
}
