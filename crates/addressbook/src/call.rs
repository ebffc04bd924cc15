//! Call message types for the addressbook module.

use borsh::{BorshDeserialize, BorshSerialize};

/// Call messages for the addressbook module.
///
/// The sender of the enclosing transaction is the record creator; a record
/// can only ever be touched under its creator's key.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub enum AddressbookCall {
    /// Register a new remote address.
    CreateAddress {
        network: String,
        label: String,
        value: String,
    },

    /// Replace the value of an existing record.
    UpdateAddress {
        network: String,
        label: String,
        value: String,
    },

    /// Remove a record.
    DeleteAddress { network: String, label: String },
}
