use pretty_assertions::assert_eq;
use tcalc::{analyzer::ParseError, eval::EvalError, CalcError, Interpreter};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[test]
fn it_evaluates_expressions() {
    let test_cases = [
        ("1 + 3 + 2", 6),
        ("1 + 2 * 3", 9),
        ("1 * (3 + 2)", 5),
        ("1 * (3 + 2)*(5+6)", 55),
        ("(2 * (3 + 2) - 1)+ 1 / 1", 10),
        ("2 * (3 + 2) - 1 + 1 / 1", 10),
        ("(2 * (3 + 2) - 1)+ 1 / 1*3", 30),
        ("1 << 5", 32),
        ("2>>1", 1),
        ("1&2", 0),
        ("1|2", 3),
        ("1^2", 3),
        ("1^3", 2),
        ("~1", -2),
        ("2**5", 32),
        ("-5", -5),
        ("-(2 + 3)", -5),
        ("~(1 << 3) & 15", 7),
        ("100 % 7 * 2", 4),
    ];

    for (expression, expected) in test_cases {
        let mut calc = Interpreter::new();
        assert_eq!(calc.exec(expression), Ok(expected), "expression: {}", expression);
        assert_eq!(calc.answer(), expected);
    }
}

#[test]
fn it_rejects_malformed_expressions() {
    let test_cases = ["0+-1", "", "=1", "(1 + 2", "1 / 0", "5 % 0", "* 2", "1 2"];

    for expression in test_cases {
        let mut calc = Interpreter::new();
        calc.exec("6").unwrap();
        assert!(calc.exec(expression).is_err(), "expression: {}", expression);
        assert_eq!(calc.answer(), 6, "expression: {}", expression);
        assert!(calc.last_error().is_some());
    }
}

#[test]
fn it_reports_error_kinds() {
    let mut calc = Interpreter::new();
    assert_eq!(
        calc.exec(""),
        Err(CalcError::Parse(ParseError::EmptyExpression))
    );
    assert_eq!(
        calc.exec("= 3"),
        Err(CalcError::Parse(ParseError::LeadingAssignment))
    );
    assert_eq!(
        calc.exec("((1)"),
        Err(CalcError::Parse(ParseError::UnmatchedParen))
    );
    assert_eq!(
        calc.exec("8 / (4 - 4)"),
        Err(CalcError::Eval(EvalError::DivisionByZero))
    );
    assert!(matches!(
        calc.exec("0+-1"),
        Err(CalcError::Eval(EvalError::MalformedExpression(_)))
    ));
}

#[test]
fn it_keeps_state_across_calls() {
    let mut calc = Interpreter::new();
    assert_eq!(calc.exec("x=5"), Ok(5));
    assert_eq!(calc.exec("y = x * 2"), Ok(10));
    assert_eq!(calc.exec("x + y"), Ok(15));
    assert_eq!(calc.exec("_ans_ - 1"), Ok(14));
    assert_eq!(calc.exec("x = _ans_"), Ok(14));
    assert_eq!(calc.variable("x"), 14);
    assert_eq!(calc.variable("y"), 10);
    assert_eq!(calc.exec("never_set + 1"), Ok(1));
}

#[test]
fn it_is_unchanged_by_failures() {
    let mut calc = Interpreter::new();
    calc.exec("x = 3").unwrap();
    calc.exec("y = 4").unwrap();
    let variables = calc.variables().clone();

    for expression in ["x = 1 / 0", "(y = 9) % 0", "x = (1", "_ans_ = 2", "x = 1 +"] {
        assert!(calc.exec(expression).is_err(), "expression: {}", expression);
        assert_eq!(calc.variables(), &variables);
        assert_eq!(calc.answer(), 4);
    }

    assert_eq!(calc.exec("x * y"), Ok(12));
}

#[test]
fn it_reads_unpaired_angle_brackets_as_names() {
    let mut calc = Interpreter::new();
    assert_eq!(calc.exec("<5"), Ok(0));
    assert_eq!(calc.exec("2 + >x"), Ok(2));
    assert_eq!(
        calc.exec("1 <5"),
        Err(CalcError::Parse(ParseError::UnexpectedOperand(
            "<5".to_string()
        )))
    );
    assert_eq!(calc.answer(), 2);
}

#[test]
fn it_exposes_tokens_for_front_ends() {
    let calc = Interpreter::new();
    let texts: Vec<String> = calc
        .tokenize("(2 * (3 + 2) - 1)+ 1 / 1")
        .iter()
        .map(|token| token.to_string())
        .collect();
    assert_eq!(
        texts,
        ["(", "2", "*", "(", "3", "+", "2", ")", "-", "1", ")", "+", "1", "/", "1"]
    );
}
