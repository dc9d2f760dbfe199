use super::*;
use crate::output::mock::MockQuizOutput;
use crate::quiz::category::BOOKS;

#[test]
fn shows_start_page() {
    let output = MockQuizOutput::new();
    let mut state = SetupState::new(BOOKS, output.clone());
    state.on_begin();
    assert_eq!(output.flush(), [Message::StartPage(BOOKS)]);
}

#[test]
fn changes_category() {
    let output = MockQuizOutput::new();
    let mut state = SetupState::new(BOOKS, output.clone());
    state.select_category(CategoryId(15));
    assert_eq!(state.category(), CategoryId(15));
    assert!(output.contains_message(&Message::CategorySelected(CategoryId(15))));
}
