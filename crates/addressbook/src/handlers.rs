//! Message handlers for the addressbook module.
//!
//! Same shape as the marketplace handlers: stateless adapters that invoke
//! the state mutation and append the event pair only on success.

use bazaar_runtime::store::KvStore;
use bazaar_runtime::TxContext;
use bazaar_types::AddressRecord;

use crate::error::AddressbookError;
use crate::events;
use crate::state::AddressbookState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<T, AddressbookError>;

fn validate_component(name: &str, value: &str) -> Result<(), AddressbookError> {
    if value.is_empty() {
        return Err(AddressbookError::InvalidInput(format!("{name} is empty")));
    }
    if value.contains('\0') {
        return Err(AddressbookError::InvalidInput(format!(
            "{name} contains a NUL byte"
        )));
    }
    Ok(())
}

fn validate_key(creator: &str, network: &str, label: &str) -> Result<(), AddressbookError> {
    validate_component("creator", creator)?;
    validate_component("network", network)?;
    validate_component("label", label)
}

/// Handle a `CreateAddress` call; the sender becomes the creator.
pub fn handle_create_address<S: KvStore>(
    state: &mut AddressbookState<S>,
    ctx: &mut TxContext,
    network: String,
    label: String,
    value: String,
) -> HandlerResult<()> {
    validate_key(&ctx.sender, &network, &label)?;
    validate_component("value", &value)?;

    if state.record(&ctx.sender, &network, &label)?.is_some() {
        return Err(AddressbookError::AlreadyExists);
    }

    let record = AddressRecord {
        creator: ctx.sender.clone(),
        network,
        label,
        value,
    };
    state.set_record(&record)?;

    ctx.events.emit_all(events::create_address_events(&record));
    Ok(())
}

/// Handle an `UpdateAddress` call.
pub fn handle_update_address<S: KvStore>(
    state: &mut AddressbookState<S>,
    ctx: &mut TxContext,
    network: String,
    label: String,
    value: String,
) -> HandlerResult<()> {
    validate_key(&ctx.sender, &network, &label)?;
    validate_component("value", &value)?;

    if state.record(&ctx.sender, &network, &label)?.is_none() {
        return Err(AddressbookError::NotFound);
    }

    let record = AddressRecord {
        creator: ctx.sender.clone(),
        network,
        label,
        value,
    };
    state.set_record(&record)?;

    ctx.events.emit_all(events::update_address_events(&record));
    Ok(())
}

/// Handle a `DeleteAddress` call.
pub fn handle_delete_address<S: KvStore>(
    state: &mut AddressbookState<S>,
    ctx: &mut TxContext,
    network: String,
    label: String,
) -> HandlerResult<()> {
    validate_key(&ctx.sender, &network, &label)?;

    if state.record(&ctx.sender, &network, &label)?.is_none() {
        return Err(AddressbookError::NotFound);
    }
    state.delete_record(&ctx.sender, &network, &label);

    ctx.events
        .emit_all(events::delete_address_events(&ctx.sender, &network, &label));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EVENT_TYPE_CREATE_ADDRESS;
    use bazaar_runtime::EVENT_TYPE_MESSAGE;

    #[test]
    fn test_create_then_update_then_delete() {
        let mut state = AddressbookState::in_memory();

        let mut ctx = TxContext::new("alice", 1);
        handle_create_address(
            &mut state,
            &mut ctx,
            "BTC".to_string(),
            "main".to_string(),
            "bc1qexample".to_string(),
        )
        .unwrap();
        assert_eq!(
            state.record("alice", "BTC", "main").unwrap().unwrap().value,
            "bc1qexample"
        );

        let mut ctx = TxContext::new("alice", 2);
        handle_update_address(
            &mut state,
            &mut ctx,
            "BTC".to_string(),
            "main".to_string(),
            "bc1qother".to_string(),
        )
        .unwrap();
        assert_eq!(
            state.record("alice", "BTC", "main").unwrap().unwrap().value,
            "bc1qother"
        );

        let mut ctx = TxContext::new("alice", 3);
        handle_delete_address(&mut state, &mut ctx, "BTC".to_string(), "main".to_string())
            .unwrap();
        assert_eq!(state.record("alice", "BTC", "main").unwrap(), None);
    }

    #[test]
    fn test_create_emits_domain_event_before_message() {
        let mut state = AddressbookState::in_memory();
        let mut ctx = TxContext::new("alice", 1);
        handle_create_address(
            &mut state,
            &mut ctx,
            "BTC".to_string(),
            "main".to_string(),
            "bc1qexample".to_string(),
        )
        .unwrap();

        let kinds: Vec<&str> = ctx.events.events().iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec![EVENT_TYPE_CREATE_ADDRESS, EVENT_TYPE_MESSAGE]);
    }

    #[test]
    fn test_duplicate_create_rejected() {
        let mut state = AddressbookState::in_memory();
        let mut ctx = TxContext::new("alice", 1);
        handle_create_address(
            &mut state,
            &mut ctx,
            "BTC".to_string(),
            "main".to_string(),
            "bc1qexample".to_string(),
        )
        .unwrap();

        let mut ctx = TxContext::new("alice", 2);
        let result = handle_create_address(
            &mut state,
            &mut ctx,
            "BTC".to_string(),
            "main".to_string(),
            "bc1qother".to_string(),
        );
        assert_eq!(result, Err(AddressbookError::AlreadyExists));
        assert!(ctx.events.events().is_empty());
    }

    #[test]
    fn test_update_missing_record_rejected() {
        let mut state = AddressbookState::in_memory();
        let mut ctx = TxContext::new("alice", 1);
        let result = handle_update_address(
            &mut state,
            &mut ctx,
            "BTC".to_string(),
            "main".to_string(),
            "bc1qexample".to_string(),
        );
        assert_eq!(result, Err(AddressbookError::NotFound));
    }

    #[test]
    fn test_foreign_record_is_not_visible_to_other_creators() {
        let mut state = AddressbookState::in_memory();
        let mut ctx = TxContext::new("alice", 1);
        handle_create_address(
            &mut state,
            &mut ctx,
            "BTC".to_string(),
            "main".to_string(),
            "bc1qexample".to_string(),
        )
        .unwrap();

        // The key includes the creator, so bob deletes nothing of alice's.
        let mut ctx = TxContext::new("bob", 2);
        let result =
            handle_delete_address(&mut state, &mut ctx, "BTC".to_string(), "main".to_string());
        assert_eq!(result, Err(AddressbookError::NotFound));
        assert!(state.record("alice", "BTC", "main").unwrap().is_some());
    }

    #[test]
    fn test_empty_and_nul_components_rejected() {
        let mut state = AddressbookState::in_memory();
        let mut ctx = TxContext::new("alice", 1);
        let result = handle_create_address(
            &mut state,
            &mut ctx,
            String::new(),
            "main".to_string(),
            "bc1qexample".to_string(),
        );
        assert!(matches!(result, Err(AddressbookError::InvalidInput(_))));

        let result = handle_create_address(
            &mut state,
            &mut ctx,
            "BTC".to_string(),
            "ma\0in".to_string(),
            "bc1qexample".to_string(),
        );
        assert!(matches!(result, Err(AddressbookError::InvalidInput(_))));
    }
}
