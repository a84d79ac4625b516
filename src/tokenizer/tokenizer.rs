use nom::{branch::alt, bytes::complete::take_while};
use tracing::{debug, trace, warn};

use super::{
    symbol::{parse_operator, parse_paren, parse_stray_symbol},
    token::{is_separator, parse_operand, ParserResult, Token},
};

fn skip_separators(input: &str) -> &str {
    let skipped: ParserResult<&str> = take_while(is_separator)(input);
    match skipped {
        Ok((rest, _)) => rest,
        Err(_) => input,
    }
}

/// Splits a line of calculator input into tokens.
///
/// Every character is accepted: anything that is neither a separator nor a symbol
/// accumulates into an operand, so `1abc` comes out as one operand and is only
/// judged at evaluation time. Tokens carry no positions.
///
/// ```
/// # use tcalc::tokenizer::tokenize;
/// let texts: Vec<String> = tokenize("2**(x+1)").iter().map(|t| t.to_string()).collect();
/// assert_eq!(texts, ["2", "**", "(", "x", "+", "1", ")"]);
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut remaining = skip_separators(input);

    while !remaining.is_empty() {
        let result = alt((
            // Symbols (two-character operators first)
            parse_operator,
            parse_paren,
            parse_stray_symbol,
            // Everything else
            parse_operand,
        ))(remaining);

        match result {
            Ok((rest, token)) => {
                trace!(%token, "token");
                tokens.push(token);
                remaining = skip_separators(rest);
            }
            Err(e) => {
                // unreachable with the character classes above; keep the tail as one operand
                warn!("tokenizer stopped early: {:?}", e);
                tokens.push(Token::Operand(remaining.to_string()));
                break;
            }
        }
    }

    debug!(count = tokens.len(), "tokenized");
    tokens
}
