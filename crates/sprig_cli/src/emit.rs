//! Runs the pipeline up to the requested stage and formats what it produced

use crate::args::Emit;
use sprig_ast::printer::TreePrinter;
use sprig_parsing::lexer::lex;
use sprig_parsing::parser::parse;
use sprig_tokens::spanned::Spanned;
use sprig_tokens::token::Token;
use std::fmt::{Display, Formatter};
use tracing::{debug, instrument};

/// Runs `src` through the pipeline and formats the output of `stage`
#[instrument(skip(src))]
pub fn emit(src: &str, stage: Emit) -> Result<String, sprig_parsing::Error> {
    let tokens = lex(src)?;
    if stage == Emit::Tokens {
        return Ok(Lines(tokens.iter().map(SpannedToken)).to_string());
    }

    let program = parse(&tokens)?;
    debug!("emitting {} statements", program.len());
    let output = match stage {
        Emit::Tree => TreePrinter::print(&program),
        _ => Lines(program.statements.iter()).to_string(),
    };
    Ok(output)
}

/// Displays each item on its own line
struct Lines<I>(I);

impl<I> Display for Lines<I>
where
    I: Iterator + Clone,
    I::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for item in self.0.clone() {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

/// A token prefixed by its span
struct SpannedToken<'a>(&'a Token);

impl Display for SpannedToken<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<8} {}", self.0.span().to_string(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_parsing::Error;
    use test_log::test;

    #[test]
    fn test_emit_tokens() {
        let output = emit("a *= 2", Emit::Tokens).expect("could not lex");
        assert_eq!(
            output,
            "0..1     SYMBOL(a)\n2..4     MULT_EQUAL\n5..6     NUMBER(2)\n6..6     EOF\n"
        );
    }

    #[test]
    fn test_emit_ast() {
        let output = emit("x = 1\nf(x)", Emit::Ast).expect("could not parse");
        assert_eq!(
            output,
            "ExprStmt(BinaryExpression(EQUAL, SymbolLiteral(x), NumberLiteral(1)))\n\
             ExprStmt(FuncCallExpression(f, [SymbolLiteral(x)]))\n"
        );
    }

    #[test]
    fn test_emit_tree() {
        let output = emit("x + 1", Emit::Tree).expect("could not parse");
        assert!(output.contains("BinaryExpression PLUS"), "{output}");
    }

    #[test]
    fn test_lines() {
        assert_eq!(Lines(["a", "b"].iter()).to_string(), "a\nb\n");
        assert_eq!(Lines(std::iter::empty::<&str>()).to_string(), "");
    }

    #[test]
    fn test_tokens_skip_parsing() {
        assert!(emit("if x", Emit::Tokens).is_ok());
        assert!(matches!(emit("if x", Emit::Ast), Err(Error::Syntax(_))));
    }
}
