use std::collections::HashMap;

use tracing::{debug, warn};

use crate::analyzer::parse;
use crate::eval::{Evaluator, Scope};
use crate::tokenizer::{tokenize, Token};
use crate::{CalcError, CalcResult};

/// Session state of the calculator: variables, the answer register and the
/// last error.
///
/// All mutation goes through [`Interpreter::exec`]. A failing call only
/// replaces the last error; the answer register and the variables keep the
/// values they had before the call.
#[derive(Debug, Default)]
pub struct Interpreter {
    variables: HashMap<String, i64>,
    answer: i64,
    last_error: Option<CalcError>,
    evaluator: Evaluator,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes, parses and evaluates one line of input.
    ///
    /// On success the value becomes the new answer, assignments made by the
    /// expression are committed and the last error is cleared.
    ///
    /// ```
    /// # use tcalc::Interpreter;
    /// let mut calc = Interpreter::new();
    /// calc.exec("x = 1 + 2 * 3").unwrap();
    /// assert_eq!(calc.answer(), 9);
    /// assert_eq!(calc.exec("_ans_ - x"), Ok(0));
    /// ```
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn exec(&mut self, input: &str) -> CalcResult<i64> {
        match self.run(input) {
            Ok((value, assignments)) => {
                self.variables.extend(assignments);
                self.answer = value;
                self.last_error = None;
                debug!(answer = value, "answer updated");
                Ok(value)
            }
            Err(e) => {
                warn!("{}", e);
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn run(&self, input: &str) -> CalcResult<(i64, HashMap<String, i64>)> {
        let tokens = tokenize(input);
        let expr = parse(&tokens)?;
        let mut scope = Scope::new(&self.variables, self.answer);
        let value = self.evaluator.eval(&expr, &mut scope)?;
        Ok((value, scope.into_assignments()))
    }

    /// The tokenizer, exposed so a front-end can look at a line before executing it.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        tokenize(input)
    }

    pub fn answer(&self) -> i64 {
        self.answer
    }

    pub fn variables(&self) -> &HashMap<String, i64> {
        &self.variables
    }

    /// Value of a variable; never-assigned names read as zero.
    pub fn variable(&self, name: &str) -> i64 {
        self.variables.get(name).copied().unwrap_or_default()
    }

    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }
}
