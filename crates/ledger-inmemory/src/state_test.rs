//! Unit tests for LedgerState.
//!
//! Covers id assignment, read-marking and the delete cascade without the async wrapper.

use ledger_core::{LedgerError, SilentObserver, User};

use crate::state::{LedgerSnapshot, LedgerState};

fn users() -> (User, User, User) {
    (User::new(1), User::new(2), User::new(3))
}

#[test]
fn test_ids_start_at_zero_and_increase() {
    let (alice, bob, carol) = users();
    let mut state = LedgerState::default();

    state.send_message(&alice, &bob, "one");
    state.send_message(&alice, &carol, "two");
    state.send_message(&bob, &alice, "three");

    let snapshot = state.snapshot();
    let chat_ids: Vec<u64> = snapshot.chats.iter().map(|c| c.id).collect();
    let message_ids: Vec<u64> = snapshot.messages.iter().map(|m| m.id).collect();
    assert_eq!(chat_ids, vec![0, 1]);
    assert_eq!(message_ids, vec![0, 1, 2]);
    assert_eq!(snapshot.messages[2].chat_id, 0);
}

#[test]
fn test_ids_not_reused_after_delete() {
    let (alice, bob, carol) = users();
    let mut state = LedgerState::default();

    state.send_message(&alice, &bob, "one");
    state.send_message(&alice, &carol, "two");
    state.delete_message(1, &SilentObserver).unwrap();

    state.send_message(&alice, &carol, "three");
    let snapshot = state.snapshot();
    assert_eq!(snapshot.chats.last().unwrap().id, 2);
    assert_eq!(snapshot.messages.last().unwrap().id, 2);
}

#[test]
fn test_reply_marks_inbound_read_only() {
    let (alice, bob, _) = users();
    let mut state = LedgerState::default();

    state.send_message(&alice, &bob, "hi");
    state.send_message(&alice, &bob, "are you there?");
    state.send_message(&bob, &alice, "yo");

    let messages = state.get_all_messages_from_chat(0);
    assert!(messages[0].read);
    assert!(messages[1].read);
    assert!(!messages[2].read);
}

#[test]
fn test_delete_message_keeps_chat_with_remaining_messages() {
    let (alice, bob, _) = users();
    let mut state = LedgerState::default();

    state.send_message(&alice, &bob, "hi");
    state.send_message(&bob, &alice, "yo");

    assert!(state.delete_message(0, &SilentObserver).unwrap());
    assert_eq!(state.len_chats(), 1);
    assert_eq!(state.len_messages(), 1);
}

#[test]
fn test_delete_last_message_removes_chat() {
    let (alice, bob, _) = users();
    let mut state = LedgerState::default();

    state.send_message(&alice, &bob, "hi");
    assert!(state.delete_message(0, &SilentObserver).unwrap());
    assert_eq!(state.len_chats(), 0);
    assert_eq!(state.len_messages(), 0);
    assert_eq!(
        state.delete_message(0, &SilentObserver),
        Err(LedgerError::MessageNotFound(0))
    );
}

#[test]
fn test_create_chat_does_not_deduplicate() {
    let (alice, bob, _) = users();
    let mut state = LedgerState::default();

    state.create_chat(&alice, &bob);
    state.create_chat(&bob, &alice);
    assert_eq!(state.get_chat_list(&alice, &bob).len(), 2);
}

#[test]
fn test_clear_resets_counters() {
    let (alice, bob, _) = users();
    let mut state = LedgerState::default();

    state.send_message(&alice, &bob, "hi");
    state.send_message(&alice, &bob, "again");
    state.clear_all_data();
    assert_eq!(state.snapshot(), LedgerSnapshot::default());

    state.send_message(&bob, &alice, "fresh");
    let snapshot = state.snapshot();
    assert_eq!(snapshot.chats[0].id, 0);
    assert_eq!(snapshot.messages[0].id, 0);
}
