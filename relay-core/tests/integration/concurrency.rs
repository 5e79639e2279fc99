use crate::fixtures::{relay_with_trusted, RelayBuilder, RELAYER, REMOTE_SENDER};
use relay_core::{Identity, InboundDelivery, RelayNotification};
use std::collections::BTreeSet;

const THREADS: u8 = 8;
const PER_THREAD: u64 = 50;

#[test]
fn concurrent_submissions_yield_dense_indices() {
    let relay = RelayBuilder::default().build();

    std::thread::scope(|scope| {
        for thread in 0..THREADS {
            let core = &relay.core;
            scope.spawn(move || {
                let sender = Identity::new([thread + 1; 20]);
                for i in 0..PER_THREAD {
                    core.submit_outbound(sender, format!("thread-{thread}-{i}")).expect("submit");
                }
            });
        }
    });

    let expected = u64::from(THREADS) * PER_THREAD;
    assert_eq!(relay.core.count().expect("count"), expected);
    let all = relay.core.list_all().expect("list_all");
    let indices: Vec<u64> = all.iter().map(|m| m.index).collect();
    assert_eq!(indices, (0..expected).collect::<Vec<_>>());

    // per-sender submission order survives interleaving
    for thread in 0..THREADS {
        let sender = Identity::new([thread + 1; 20]);
        let contents: Vec<&str> = all.iter().filter(|m| m.sender == sender).map(|m| m.content.as_str()).collect();
        let expected: Vec<String> = (0..PER_THREAD).map(|i| format!("thread-{thread}-{i}")).collect();
        assert_eq!(contents, expected);
    }

    // notification log order equals commit order
    let published: Vec<u64> = relay
        .published()
        .iter()
        .filter_map(|n| match n {
            RelayNotification::MessageSubmitted { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(published, (0..expected).collect::<Vec<_>>());
}

#[test]
fn concurrent_duplicate_deliveries_accept_exactly_once() {
    let relay = relay_with_trusted(RELAYER);
    let delivery = InboundDelivery::new(REMOTE_SENDER, "race", 77);

    let outcomes: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let core = &relay.core;
                let delivery = delivery.clone();
                scope.spawn(move || core.deliver(RELAYER, delivery).is_ok())
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().expect("join")).collect()
    });

    assert_eq!(outcomes.iter().filter(|ok| **ok).count(), 1);
    assert_eq!(relay.core.processed_count().expect("processed_count"), 1);
    let received = relay.published().iter().filter(|n| matches!(n, RelayNotification::MessageReceived { .. })).count();
    assert_eq!(received, 1);
}

#[test]
fn concurrent_distinct_deliveries_are_all_recorded() {
    let relay = relay_with_trusted(RELAYER);

    std::thread::scope(|scope| {
        for thread in 0..THREADS {
            let core = &relay.core;
            scope.spawn(move || {
                for i in 0..PER_THREAD {
                    let delivery = InboundDelivery::new(REMOTE_SENDER, format!("{thread}:{i}"), i);
                    core.deliver(RELAYER, delivery).expect("deliver");
                }
            });
        }
    });

    assert_eq!(relay.core.processed_count().expect("processed_count"), u64::from(THREADS) * PER_THREAD);
    let keys: BTreeSet<String> = relay
        .published()
        .iter()
        .filter_map(|n| match n {
            RelayNotification::MessageReceived { content, .. } => Some(content.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(keys.len() as u64, u64::from(THREADS) * PER_THREAD);
}
