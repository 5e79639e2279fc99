use crate::foundation::{Identity, RelayError, Result};

/// Single-owner gate for administrative operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ownership {
    owner: Identity,
}

impl Ownership {
    /// Seeds the owner with the deploying identity.
    pub fn new(deployer: Identity) -> Result<Self> {
        if deployer.is_null() {
            return Err(RelayError::null_identity("deployer"));
        }
        Ok(Self { owner: deployer })
    }

    pub fn owner(&self) -> Identity {
        self.owner
    }

    pub fn is_owner(&self, caller: &Identity) -> bool {
        self.owner == *caller
    }

    pub fn require_owner(&self, caller: &Identity) -> Result<()> {
        if !self.is_owner(caller) {
            return Err(RelayError::NotOwner { caller: caller.to_string() });
        }
        Ok(())
    }

    /// Hands the gate to `new_owner` and returns the previous owner.
    pub fn transfer(&mut self, caller: &Identity, new_owner: Identity) -> Result<Identity> {
        self.require_owner(caller)?;
        if new_owner.is_null() {
            return Err(RelayError::null_identity("new_owner"));
        }
        let previous = std::mem::replace(&mut self.owner, new_owner);
        Ok(previous)
    }
}
