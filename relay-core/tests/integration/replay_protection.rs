use crate::fixtures::{RelayBuilder, OWNER, RELAYER, REMOTE_SENDER, USER};
use relay_core::domain::FingerprintPolicy;
use relay_core::{fingerprint, ErrorKind, Fingerprint, InboundDelivery};

#[test]
fn duplicate_delivery_is_rejected_across_relayers_and_trust_changes() {
    let relay = RelayBuilder::default().build();
    relay.core.set_relayer_trust(OWNER, RELAYER, true).expect("grant relayer");
    relay.core.set_relayer_trust(OWNER, USER, true).expect("grant user");

    let delivery = InboundDelivery::new(REMOTE_SENDER, "transfer 10", 1_000);
    relay.core.deliver(RELAYER, delivery.clone()).expect("first delivery");

    relay.core.set_relayer_trust(OWNER, RELAYER, false).expect("revoke");
    relay.core.set_relayer_trust(OWNER, RELAYER, true).expect("re-grant");

    for caller in [RELAYER, USER, OWNER] {
        let err = relay.core.deliver(caller, delivery.clone()).expect_err("replay");
        assert_eq!(err.kind(), ErrorKind::AlreadyProcessed);
    }
    assert_eq!(relay.core.processed_count().expect("processed_count"), 1);
}

#[test]
fn same_content_with_new_timestamp_is_a_new_message() {
    let relay = RelayBuilder::default().build();
    relay.core.deliver(OWNER, InboundDelivery::new(REMOTE_SENDER, "ping", 1)).expect("t=1");
    relay.core.deliver(OWNER, InboundDelivery::new(REMOTE_SENDER, "ping", 2)).expect("t=2");
    relay.core.deliver(OWNER, InboundDelivery::new(USER, "ping", 1)).expect("other sender");
    assert_eq!(relay.core.processed_count().expect("processed_count"), 3);
}

#[test]
fn caller_timestamp_is_not_checked_against_clock() {
    let relay = RelayBuilder::default().now_secs(10).build();
    relay.core.deliver(OWNER, InboundDelivery::new(REMOTE_SENDER, "from the future", u64::MAX)).expect("future timestamp");
    relay.core.deliver(OWNER, InboundDelivery::new(REMOTE_SENDER, "from the past", 0)).expect("zero timestamp");
}

#[test]
fn forged_keys_cannot_double_accept_under_default_policy() {
    let relay = RelayBuilder::default().build();
    assert_eq!(relay.core.fingerprint_policy().expect("policy"), FingerprintPolicy::Recompute);

    let honest = fingerprint(&REMOTE_SENDER, "withdraw", 5);
    for seed in 0..16u8 {
        let supplied = if seed == 0 { honest } else { Fingerprint::new([seed; 32]) };
        let outcome = relay.core.deliver_inbound(OWNER, REMOTE_SENDER, "withdraw", 5, supplied);
        assert_eq!(outcome.is_ok(), seed == 0, "seed {seed}");
    }
    assert!(relay.core.is_processed(&honest).expect("is_processed"));
    assert_eq!(relay.core.processed_count().expect("processed_count"), 1);
}
