//! Query handlers for the addressbook module.

use bazaar_runtime::store::KvStore;
use bazaar_types::{AddressRecord, PageRequest, PageResponse};
use serde::{Deserialize, Serialize};

use crate::error::AddressbookError;
use crate::state::AddressbookState;

/// Query request types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum AddressbookQuery {
    /// Look up a record by its composite key. Fails with `NotFound` when
    /// absent.
    GetAddress {
        creator: String,
        network: String,
        label: String,
    },

    /// List records in key order.
    ListAddresses { pagination: PageRequest },
}

/// Query response types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum AddressbookQueryResponse {
    Address(AddressRecord),

    Addresses {
        addresses: Vec<AddressRecord>,
        pagination: PageResponse,
    },
}

/// Handle a query.
pub fn handle_query<S: KvStore>(
    state: &AddressbookState<S>,
    query: AddressbookQuery,
) -> Result<AddressbookQueryResponse, AddressbookError> {
    match query {
        AddressbookQuery::GetAddress {
            creator,
            network,
            label,
        } => {
            let record = state
                .record(&creator, &network, &label)?
                .ok_or(AddressbookError::NotFound)?;
            Ok(AddressbookQueryResponse::Address(record))
        }

        AddressbookQuery::ListAddresses { pagination } => {
            let (addresses, pagination) = state.records(&pagination)?;
            Ok(AddressbookQueryResponse::Addresses {
                addresses,
                pagination,
            })
        }
    }
}
