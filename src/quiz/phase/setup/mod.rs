use crate::output::{Message, QuizOutput};
use crate::quiz::category::CategoryId;
use crate::quiz::State;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug)]
pub struct SetupState<O> {
    category: CategoryId,
    output: O,
}

impl<O: QuizOutput> SetupState<O> {
    pub fn new(category: CategoryId, output: O) -> Self {
        SetupState { category, output }
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn select_category(&mut self, category: CategoryId) {
        self.category = category;
        self.output.say(&Message::CategorySelected(category));
    }
}

impl<O: QuizOutput> State for SetupState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::StartPage(self.category));
    }

    fn on_end(&mut self) {}
}
