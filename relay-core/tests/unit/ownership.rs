use crate::fixtures::{RelayBuilder, NEW_OWNER, OWNER, RELAYER, USER};
use relay_core::{ErrorKind, Identity, RelayNotification};

#[test]
fn test_ownership_when_transferred_then_gate_moves() {
    let relay = RelayBuilder::default().build();
    relay.core.transfer_ownership(OWNER, NEW_OWNER).expect("transfer");
    assert_eq!(relay.core.owner().expect("owner"), NEW_OWNER);

    let err = relay.core.set_relayer_trust(OWNER, RELAYER, true).expect_err("old owner");
    assert!(err.is_unauthorized());
    relay.core.set_relayer_trust(NEW_OWNER, RELAYER, true).expect("new owner grants");

    assert_eq!(relay.published()[0], RelayNotification::OwnershipTransferred { previous_owner: OWNER, new_owner: NEW_OWNER });
}

#[test]
fn test_ownership_when_transferred_then_relayer_trust_unchanged() {
    let relay = RelayBuilder::default().build();
    relay.core.transfer_ownership(OWNER, NEW_OWNER).expect("transfer");
    assert!(relay.core.is_trusted(OWNER).expect("old owner stays trusted"));
    assert!(!relay.core.is_trusted(NEW_OWNER).expect("new owner not auto-trusted"));
}

#[test]
fn test_ownership_when_non_owner_transfers_then_unauthorized() {
    let relay = RelayBuilder::default().build();
    let err = relay.core.transfer_ownership(USER, USER).expect_err("not owner");
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(relay.core.owner().expect("owner"), OWNER);
}

#[test]
fn test_ownership_when_new_owner_null_then_invalid_argument() {
    let relay = RelayBuilder::default().build();
    let err = relay.core.transfer_ownership(OWNER, Identity::NULL).expect_err("null owner");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(relay.core.owner().expect("owner"), OWNER);
    assert!(relay.published().is_empty());
}
