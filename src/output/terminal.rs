use itertools::Itertools;

use crate::output::{Message, QuizOutput};
use crate::quiz::category::{Category, CategoryId, CATEGORIES};
use crate::quiz::definition::{AnswerMark, Question};

const HELP: &str = "Commands:
  categories                   list the available categories
  category <id|name>           pick the category of the next quiz
  start                        fetch questions and begin the quiz
  answer <question> <choice>   pick an answer by text, by number, or by #number
  check                        check your answers
  again                        go back to the start page
  toggle                       check answers, or play again once checked
  show                         print the quiz again
  quit                         leave";

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }
}

fn mark_symbol(mark: AnswerMark) -> &'static str {
    match mark {
        AnswerMark::CorrectAndChosen => " ✅",
        AnswerMark::CorrectNotChosen => " ✅ (correct answer)",
        AnswerMark::ChosenButWrong => " ❌",
        AnswerMark::Neutral => "",
    }
}

fn render_question(index: usize, question: &Question, graded: bool) -> String {
    let answers = question
        .answers()
        .iter()
        .enumerate()
        .map(|(answer_index, answer)| {
            let radio = if question.selected_answer() == Some(answer.as_str()) {
                "(•)"
            } else {
                "( )"
            };
            let mark = if graded {
                mark_symbol(question.mark(answer))
            } else {
                ""
            };
            format!("   {} {}. {}{}", radio, answer_index + 1, answer, mark)
        })
        .join("\n");
    format!("{}. {}\n{}", index + 1, question.text(), answers)
}

pub fn render_questions(questions: &[Question], graded: bool) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| render_question(index, question, graded))
        .join("\n\n")
}

pub fn interpret_message(message: &Message) -> String {
    use Message::*;
    match message {
        AnswerSelected(index, answer) => format!("Question {}: you picked \"{}\".", index + 1, answer),
        Categories(current) => {
            let mut message = "📚 Available categories:".to_owned();
            for category in CATEGORIES.iter() {
                let marker = if category.id == *current { "👉" } else { "  " };
                message += &format!("\n{} {} ({})", marker, category.name, category.id);
            }
            message
        }
        CategorySelected(category) => format!("Category set to {}.", Category::display_name(*category)),
        CommandFailed(reason) => format!("⚠️ {}", reason),
        FetchFailed(e) => format!("⚠️ Could not get questions: {}. Use `start` to try again.", e),
        FetchingQuestions(category) => format!("⏳ Fetching questions about {}...", Category::display_name(*category)),
        Help => HELP.to_owned(),
        QuestionsReady(questions) if questions.is_empty() => "There are no questions in this batch. Use `again` to pick another category.".to_owned(),
        QuestionsReady(questions) => format!("{}\n\nUse `answer <question> <choice>` to answer, then `check`.", render_questions(questions, false)),
        QuizResults(questions, score) => format!(
            "{}\n\n🏁 You scored {}/{} correct answers. Use `again` to play again.",
            render_questions(questions, true),
            score,
            questions.len()
        ),
        StartPage(category) => start_page(*category),
    }
}

fn start_page(category: CategoryId) -> String {
    format!(
        "🧠 Quizzical\nSelected category: {}. Use `category <name>` to change it, `start` to begin or `help` for all commands.",
        Category::display_name(category)
    )
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}\n", interpret_message(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::definition::RawQuestion;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question() -> Question {
        let mut rng = StdRng::seed_from_u64(9);
        Question::from_raw(
            RawQuestion {
                question: "Who wrote &quot;Dune&quot;?".to_owned(),
                correct_answer: "Frank Herbert".to_owned(),
                incorrect_answers: vec!["Isaac Asimov".to_owned(), "Ursula K. Le Guin".to_owned()],
            },
            &mut rng,
        )
    }

    #[test]
    fn renders_unanswered_question() {
        let rendered = render_questions(&[question()], false);
        assert!(rendered.starts_with("1. Who wrote \"Dune\"?"));
        assert_eq!(rendered.matches("( )").count(), 3);
        assert!(!rendered.contains('✅'));
    }

    #[test]
    fn renders_selection() {
        let mut question = question();
        question.select("Isaac Asimov").unwrap();
        let rendered = render_questions(&[question], false);
        assert_eq!(rendered.matches("(•)").count(), 1);
        assert!(rendered.lines().any(|l| l.contains("(•)") && l.contains("Isaac Asimov")));
    }

    #[test]
    fn renders_marks_after_grading() {
        let mut question = question();
        question.select("Isaac Asimov").unwrap();
        let rendered = render_questions(&[question], true);
        assert!(rendered
            .lines()
            .any(|l| l.contains("Isaac Asimov") && l.ends_with('❌')));
        assert!(rendered
            .lines()
            .any(|l| l.contains("Frank Herbert") && l.ends_with("(correct answer)")));
    }

    #[test]
    fn announces_score() {
        let mut question = question();
        question.select("Frank Herbert").unwrap();
        let text = interpret_message(&Message::QuizResults(vec![question], 1));
        assert!(text.contains("You scored 1/1 correct answers"));
    }

    #[test]
    fn lists_categories_with_current_one() {
        let text = interpret_message(&Message::Categories(CategoryId(12)));
        assert!(text.contains("👉 Music (12)"));
        assert!(text.contains("Books (10)"));
    }
}
