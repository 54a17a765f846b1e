//! Interest scoring engine.
//!
//! Turns quiz answers into per-stream aptitude scores and a single
//! recommended stream by weighted summation, and drives a quiz attempt
//! through `NotStarted -> InProgress -> Completed`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QuizError;
use crate::model::{QuizQuestion, Stream, StreamScores};

/// Chosen option values keyed by 0-based question index.
pub type QuizAnswers = BTreeMap<usize, String>;

/// Outcome of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recommendation {
    pub primary_stream: Stream,
    pub scores: StreamScores,
}

/// Score a set of answers against the question list.
///
/// Answers whose value matches no option of their question contribute
/// nothing. Answers keyed outside `[0, questions.len())` are rejected with
/// [`QuizError::InvalidIndex`].
pub fn score(answers: &QuizAnswers, questions: &[QuizQuestion]) -> Result<Recommendation, QuizError> {
    let mut scores = StreamScores::default();

    for (&index, value) in answers {
        let question = questions.get(index).ok_or(QuizError::InvalidIndex {
            index,
            len: questions.len(),
        })?;
        match question.option(value) {
            Some(option) => scores.add(&option.weight),
            None => tracing::debug!(index, value = %value, "answer matches no option, ignoring"),
        }
    }

    Ok(Recommendation {
        primary_stream: primary_stream(&scores),
        scores,
    })
}

/// The stream with the highest score; ties go to science, then commerce,
/// then arts.
pub fn primary_stream(scores: &StreamScores) -> Stream {
    let max = scores.max();
    Stream::ALL
        .into_iter()
        .find(|&s| scores.get(s) == max)
        .unwrap_or(Stream::Science)
}

/// Where a quiz attempt currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    InProgress {
        current: usize,
        answers: QuizAnswers,
    },
    Completed {
        answers: QuizAnswers,
        recommendation: Recommendation,
    },
}

/// What happened after an accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Move on to the question at this index.
    Next(usize),
    /// The last question was answered.
    Completed(Recommendation),
}

/// A single quiz attempt. Starting over means creating a new session.
#[derive(Debug, Clone)]
pub struct QuizSession<'q> {
    id: Uuid,
    questions: &'q [QuizQuestion],
    state: QuizState,
}

impl<'q> QuizSession<'q> {
    pub fn new(questions: &'q [QuizQuestion]) -> Self {
        Self {
            id: Uuid::new_v4(),
            questions,
            state: QuizState::NotStarted,
        }
    }

    /// Answer every question in order, returning the final recommendation.
    pub fn run<S: AsRef<str>>(
        questions: &'q [QuizQuestion],
        values: &[S],
    ) -> Result<(Self, Recommendation), QuizError> {
        if values.len() != questions.len() {
            return Err(QuizError::AnswerCount {
                expected: questions.len(),
                got: values.len(),
            });
        }

        let mut session = Self::new(questions);
        session.start()?;
        for (index, value) in values.iter().enumerate() {
            session.answer(index, value.as_ref())?;
        }
        let recommendation = *session.recommendation().ok_or(QuizError::NotInProgress)?;
        Ok((session, recommendation))
    }

    /// Attempt id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn questions(&self) -> &'q [QuizQuestion] {
        self.questions
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.state != QuizState::NotStarted {
            return Err(QuizError::AlreadyStarted);
        }

        self.state = if self.questions.is_empty() {
            let answers = QuizAnswers::new();
            let recommendation = score(&answers, self.questions)?;
            QuizState::Completed {
                answers,
                recommendation,
            }
        } else {
            QuizState::InProgress {
                current: 0,
                answers: QuizAnswers::new(),
            }
        };
        Ok(())
    }

    /// The question awaiting an answer, with its index.
    pub fn current_question(&self) -> Option<(usize, &'q QuizQuestion)> {
        match &self.state {
            QuizState::InProgress { current, .. } => {
                self.questions.get(*current).map(|q| (*current, q))
            }
            _ => None,
        }
    }

    /// Record the answer for question `index` and advance.
    ///
    /// Only the current question may be answered, and only with one of its
    /// option values. Answering the last question scores the attempt.
    pub fn answer(&mut self, index: usize, value: &str) -> Result<QuizStep, QuizError> {
        let len = self.questions.len();
        let QuizState::InProgress { current, answers } = &mut self.state else {
            return Err(QuizError::NotInProgress);
        };

        if index >= len {
            return Err(QuizError::InvalidIndex { index, len });
        }
        if index != *current {
            return Err(QuizError::OutOfOrder {
                expected: *current,
                got: index,
            });
        }
        if self.questions[index].option(value).is_none() {
            return Err(QuizError::UnknownOption {
                index,
                value: value.to_string(),
            });
        }

        answers.insert(index, value.to_string());
        *current += 1;
        if *current < len {
            return Ok(QuizStep::Next(*current));
        }

        let answers = std::mem::take(answers);
        let recommendation = score(&answers, self.questions)?;
        tracing::info!(
            attempt = %self.id,
            stream = %recommendation.primary_stream,
            "quiz completed"
        );
        self.state = QuizState::Completed {
            answers,
            recommendation,
        };
        Ok(QuizStep::Completed(recommendation))
    }

    /// Step back to the previous question, keeping recorded answers.
    pub fn back(&mut self) -> Result<usize, QuizError> {
        match &mut self.state {
            QuizState::InProgress { current, .. } => {
                *current = current.saturating_sub(1);
                Ok(*current)
            }
            _ => Err(QuizError::NotInProgress),
        }
    }

    /// The value recorded for a question, if any.
    pub fn selected(&self, index: usize) -> Option<&str> {
        self.answers()?.get(&index).map(String::as_str)
    }

    pub fn answers(&self) -> Option<&QuizAnswers> {
        match &self.state {
            QuizState::NotStarted => None,
            QuizState::InProgress { answers, .. } | QuizState::Completed { answers, .. } => {
                Some(answers)
            }
        }
    }

    /// Progress through the quiz as shown on the question screen.
    pub fn progress_percent(&self) -> u32 {
        match &self.state {
            QuizState::NotStarted => 0,
            QuizState::InProgress { current, .. } => {
                let len = self.questions.len().max(1) as f64;
                (((*current + 1) as f64 / len) * 100.0).round() as u32
            }
            QuizState::Completed { .. } => 100,
        }
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match &self.state {
            QuizState::Completed { recommendation, .. } => Some(recommendation),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, QuizState::Completed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn questions() -> Vec<QuizQuestion> {
        Catalog::builtin().unwrap().questions
    }

    fn answers(pairs: &[(usize, &str)]) -> QuizAnswers {
        pairs.iter().map(|&(i, v)| (i, v.to_string())).collect()
    }

    const SCIENCE_PICKS: [&str; 6] = [
        "analytical",
        "math_science",
        "innovation",
        "independent",
        "laboratory",
        "research",
    ];

    #[test]
    fn all_science_options() {
        let qs = questions();
        let picks: Vec<(usize, &str)> = SCIENCE_PICKS.iter().copied().enumerate().collect();
        let rec = score(&answers(&picks), &qs).unwrap();
        assert_eq!(
            rec.scores,
            StreamScores {
                science: 18,
                commerce: 9,
                arts: 9
            }
        );
        assert_eq!(rec.primary_stream, Stream::Science);
    }

    #[test]
    fn empty_answers_default_to_science() {
        let rec = score(&QuizAnswers::new(), &questions()).unwrap();
        assert_eq!(rec.scores, StreamScores::default());
        assert_eq!(rec.primary_stream, Stream::Science);
    }

    #[test]
    fn single_business_answer_picks_commerce() {
        let rec = score(&answers(&[(0, "business")]), &questions()).unwrap();
        assert_eq!(
            rec.scores,
            StreamScores {
                science: 2,
                commerce: 3,
                arts: 2
            }
        );
        assert_eq!(rec.primary_stream, Stream::Commerce);
    }

    #[test]
    fn three_way_tie_resolves_to_science() {
        // recognition, varied, global_impact are all 2/2/2
        let rec = score(
            &answers(&[(2, "recognition"), (4, "varied"), (5, "global_impact")]),
            &questions(),
        )
        .unwrap();
        assert_eq!(rec.scores.science, rec.scores.commerce);
        assert_eq!(rec.scores.commerce, rec.scores.arts);
        assert_eq!(rec.primary_stream, Stream::Science);
    }

    #[test]
    fn commerce_arts_tie_resolves_to_commerce() {
        // social (1/2/3) + team (2/3/2) => 3/5/5
        let rec = score(&answers(&[(0, "social"), (3, "team")]), &questions()).unwrap();
        assert_eq!(rec.scores.commerce, 5);
        assert_eq!(rec.scores.arts, 5);
        assert_eq!(rec.primary_stream, Stream::Commerce);
    }

    #[test]
    fn unmatched_option_contributes_nothing() {
        let qs = questions();
        let with_bogus = score(&answers(&[(0, "business"), (1, "astrology")]), &qs).unwrap();
        let without = score(&answers(&[(0, "business")]), &qs).unwrap();
        assert_eq!(with_bogus, without);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let err = score(&answers(&[(0, "business"), (6, "analytical")]), &questions()).unwrap_err();
        assert_eq!(err, QuizError::InvalidIndex { index: 6, len: 6 });
    }

    #[test]
    fn oversized_catalog_weights_do_not_overflow() {
        let content = r#"
[[questions]]
id = 1
prompt = "First"
options = [{ value = "a", label = "A", weight = { science = 4000000000, commerce = 0, arts = 1 } }]

[[questions]]
id = 2
prompt = "Second"
options = [{ value = "b", label = "B", weight = { science = 4000000000, commerce = 0, arts = 1 } }]
"#;
        let catalog =
            crate::catalog::parse_catalog_str(content, std::path::Path::new("heavy.toml")).unwrap();
        let (_, rec) = QuizSession::run(&catalog.questions, &["a", "b"]).unwrap();
        assert_eq!(rec.scores.science, u32::MAX);
        assert_eq!(rec.scores.arts, 2);
        assert_eq!(rec.primary_stream, Stream::Science);
    }

    #[test]
    fn scoring_is_deterministic() {
        let qs = questions();
        let a = answers(&[(0, "creative"), (1, "economics"), (4, "community")]);
        assert_eq!(score(&a, &qs).unwrap(), score(&a, &qs).unwrap());
    }

    #[test]
    fn scores_stay_within_bounds() {
        let qs = questions();
        // Exhaust every option of every question one at a time, plus each
        // question's heaviest pick for all six.
        for (index, question) in qs.iter().enumerate() {
            for option in &question.options {
                let rec = score(&answers(&[(index, option.value.as_str())]), &qs).unwrap();
                for (_, s) in rec.scores.iter() {
                    assert!(s <= 3);
                }
            }
        }
        for stream in Stream::ALL {
            let picks: QuizAnswers = qs
                .iter()
                .enumerate()
                .map(|(i, q)| {
                    let best = q.options.iter().max_by_key(|o| o.weight.get(stream)).unwrap();
                    (i, best.value.clone())
                })
                .collect();
            let rec = score(&picks, &qs).unwrap();
            assert!(rec.scores.max() <= 3 * picks.len() as u32);
        }
    }

    #[test]
    fn session_walks_through_states() {
        let qs = questions();
        let mut session = QuizSession::new(&qs);
        assert_eq!(session.state(), &QuizState::NotStarted);
        assert_eq!(session.answer(0, "analytical"), Err(QuizError::NotInProgress));

        session.start().unwrap();
        assert_eq!(session.start(), Err(QuizError::AlreadyStarted));
        assert_eq!(session.progress_percent(), 17);

        for (index, value) in SCIENCE_PICKS.iter().enumerate().take(5) {
            assert_eq!(session.answer(index, value).unwrap(), QuizStep::Next(index + 1));
        }
        let step = session.answer(5, "research").unwrap();
        let QuizStep::Completed(rec) = step else {
            panic!("expected completion, got {step:?}");
        };
        assert_eq!(rec.primary_stream, Stream::Science);
        assert!(session.is_completed());
        assert_eq!(session.recommendation(), Some(&rec));
        assert_eq!(session.progress_percent(), 100);
        assert_eq!(session.answer(5, "research"), Err(QuizError::NotInProgress));
    }

    #[test]
    fn session_rejects_out_of_order_and_unknown_answers() {
        let qs = questions();
        let mut session = QuizSession::new(&qs);
        session.start().unwrap();

        assert_eq!(
            session.answer(1, "languages"),
            Err(QuizError::OutOfOrder {
                expected: 0,
                got: 1
            })
        );
        assert_eq!(
            session.answer(0, "languages"),
            Err(QuizError::UnknownOption {
                index: 0,
                value: "languages".into()
            })
        );
        assert_eq!(
            session.answer(9, "analytical"),
            Err(QuizError::InvalidIndex { index: 9, len: 6 })
        );
        assert_eq!(session.current_question().map(|(i, _)| i), Some(0));
    }

    #[test]
    fn back_keeps_previous_answer() {
        let qs = questions();
        let mut session = QuizSession::new(&qs);
        session.start().unwrap();
        session.answer(0, "creative").unwrap();
        assert_eq!(session.back().unwrap(), 0);
        assert_eq!(session.back().unwrap(), 0);
        assert_eq!(session.selected(0), Some("creative"));

        // Re-answering overwrites the earlier choice.
        session.answer(0, "social").unwrap();
        assert_eq!(session.selected(0), Some("social"));
        assert_eq!(session.current_question().map(|(i, _)| i), Some(1));
    }

    #[test]
    fn run_scores_a_full_attempt() {
        let qs = questions();
        let commerce = ["business", "economics", "financial", "team", "office", "entrepreneurship"];
        let (session, rec) = QuizSession::run(&qs, &commerce).unwrap();
        assert_eq!(rec.scores.commerce, 18);
        assert_eq!(rec.primary_stream, Stream::Commerce);
        assert_eq!(session.answers().map(|a| a.len()), Some(6));

        let err = QuizSession::run(&qs, &["business"]).unwrap_err();
        assert_eq!(err, QuizError::AnswerCount { expected: 6, got: 1 });
    }

    #[test]
    fn empty_quiz_completes_on_start() {
        let mut session = QuizSession::new(&[]);
        session.start().unwrap();
        assert_eq!(
            session.recommendation().map(|r| r.primary_stream),
            Some(Stream::Science)
        );
    }

    #[test]
    fn sessions_have_distinct_ids() {
        let qs = questions();
        assert_ne!(QuizSession::new(&qs).id(), QuizSession::new(&qs).id());
    }

    #[test]
    fn recommendation_serializes_stream_lowercase() {
        let rec = score(&answers(&[(0, "creative")]), &questions()).unwrap();
        let json = serde_json::to_value(rec).unwrap();
        assert_eq!(json["primary_stream"], "arts");
        assert_eq!(json["scores"]["arts"], 3);
    }
}
