//! Line-oriented front-end over an [`Interpreter`].
//!
//! A session adds the conveniences a user-facing calculator needs on top of
//! the bare interpreter: an input length limit, the implicit answer prefix for
//! lines that start with an operator, and a bounded history of evaluated lines.

use std::collections::VecDeque;

use tracing::debug;

use crate::config::CalcConfig;
use crate::tokenizer::ANSWER_MARKER;
use crate::{CalcError, CalcResult, Interpreter};

/// One successful submission, with the answer marker replaced by the answer it
/// referred to.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub evaluated: String,
    pub value: i64,
}

#[derive(Debug)]
pub struct Session {
    config: CalcConfig,
    interpreter: Interpreter,
    history: VecDeque<HistoryRecord>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CalcConfig::default())
    }
}

impl Session {
    pub fn new(config: CalcConfig) -> Self {
        Self {
            config,
            interpreter: Interpreter::new(),
            history: VecDeque::new(),
        }
    }

    /// Executes one line of user input.
    ///
    /// ```
    /// # use tcalc::Session;
    /// let mut session = Session::default();
    /// session.submit("6").unwrap();
    /// assert_eq!(session.submit("* 7"), Ok(42));
    /// assert_eq!(session.history()[1].evaluated, "6* 7");
    /// ```
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn submit(&mut self, line: &str) -> CalcResult<i64> {
        let length = line.chars().count();
        if length > self.config.max_input_length {
            return Err(CalcError::InputTooLong {
                length,
                limit: self.config.max_input_length,
            });
        }

        let input = self.with_implicit_answer(line);
        let previous = self.interpreter.answer();
        let value = self.interpreter.exec(&input)?;

        self.record(HistoryRecord {
            evaluated: substitute_answer(&input, previous),
            value,
        });
        Ok(value)
    }

    fn with_implicit_answer(&self, line: &str) -> String {
        if !self.config.implicit_answer {
            return line.to_string();
        }
        match self.interpreter.tokenize(line).first() {
            Some(token) if token.expects_left_operand() => {
                debug!(%token, "line starts with an operator, prefixing the answer");
                format!("{}{}", ANSWER_MARKER, line)
            }
            _ => line.to_string(),
        }
    }

    fn record(&mut self, record: HistoryRecord) {
        self.history.push_back(record);
        while self.history.len() > self.config.history_size {
            self.history.pop_front();
        }
    }

    pub fn history(&self) -> &VecDeque<HistoryRecord> {
        &self.history
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }
}

/// Replaces every answer marker with the answer's digits; negative answers are
/// parenthesized so the text still reads as the same expression.
fn substitute_answer(input: &str, answer: i64) -> String {
    let replacement = if answer < 0 {
        format!("({})", answer)
    } else {
        answer.to_string()
    };
    input.replace(ANSWER_MARKER, &replacement)
}
