//! Genesis configuration for the addressbook module.

use bazaar_runtime::store::KvStore;
use bazaar_types::AddressRecord;
use serde::{Deserialize, Serialize};

use crate::error::AddressbookError;
use crate::state::AddressbookState;

/// Genesis configuration for the addressbook module.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AddressbookGenesis {
    /// Records existing at chain start.
    pub addresses: Vec<AddressRecord>,
}

impl AddressbookGenesis {
    /// Validate the genesis configuration.
    pub fn validate(&self) -> Result<(), GenesisValidationError> {
        let mut seen = std::collections::BTreeSet::new();
        for record in &self.addresses {
            for (name, value) in [
                ("creator", &record.creator),
                ("network", &record.network),
                ("label", &record.label),
                ("value", &record.value),
            ] {
                if value.is_empty() {
                    return Err(GenesisValidationError::InvalidRecord(format!(
                        "{name} is empty"
                    )));
                }
            }
            let key = (
                record.creator.clone(),
                record.network.clone(),
                record.label.clone(),
            );
            if !seen.insert(key) {
                return Err(GenesisValidationError::DuplicateRecord {
                    creator: record.creator.clone(),
                    network: record.network.clone(),
                    label: record.label.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Errors that can occur during genesis validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenesisValidationError {
    #[error("invalid address record: {0}")]
    InvalidRecord(String),

    #[error("duplicate address record ({creator}, {network}, {label})")]
    DuplicateRecord {
        creator: String,
        network: String,
        label: String,
    },
}

/// Write a validated genesis configuration into the store.
pub fn init_genesis<S: KvStore>(
    state: &mut AddressbookState<S>,
    genesis: &AddressbookGenesis,
) -> Result<(), AddressbookError> {
    genesis
        .validate()
        .map_err(|err| AddressbookError::InvalidInput(err.to_string()))?;

    for record in &genesis.addresses {
        state.set_record(record)?;
    }
    Ok(())
}
