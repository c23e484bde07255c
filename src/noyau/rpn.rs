// src/noyau/rpn.rs
//
// Shunting-yard : suite de Token (infixe) -> RPN (postfixe)
//
// Règles:
// - Number / LastResult : sortie directe
// - '(' : empilée, sert de butée
// - ')' : dépile jusqu’à '(' (jetée) ; pile vide avant => parenthèses non appariées
// - opérateur : dépile tant que le sommet n’est pas '(' et que
//     prec(sommet) >= prec(op)   (gauche, défaut pour tous)
//     prec(sommet) >  prec(op)   (droite, `^` seulement si réglé)
// - fin : on vide la pile ; une '(' restante => parenthèses non appariées

use log::trace;

use super::erreurs::ParseError;
use super::jetons::{format_tokens, Operator, Token};
use super::reglages::{Associativite, Reglages};

/// Conversion avec les réglages par défaut (tout associatif à gauche).
///
/// Exemple:
///   tokens: 3 + 4 * 2
///   rpn:    3 4 2 * +
#[cfg_attr(not(test), allow(dead_code))]
pub fn convert(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    convert_with(tokens, &Reglages::default())
}

pub fn convert_with(tokens: &[Token], reglages: &Reglages) -> Result<Vec<Token>, ParseError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    // ne contient que des Operator et des LeftParen
    let mut ops: Vec<Token> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Token::Number(_) | Token::LastResult => out.push(tok),

            Token::LeftParen => ops.push(tok),

            Token::RightParen => loop {
                match ops.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => out.push(top),
                    None => return Err(ParseError::MismatchedParens),
                }
            },

            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = ops.last() {
                    if !doit_depiler(top, op, reglages) {
                        break;
                    }
                    ops.pop();
                    out.push(Token::Operator(top));
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Token::LeftParen) {
            return Err(ParseError::MismatchedParens);
        }
        out.push(op);
    }

    trace!("rpn: {}", format_tokens(&out));
    Ok(out)
}

fn doit_depiler(top: Operator, entrant: Operator, reglages: &Reglages) -> bool {
    match reglages.associativite(entrant) {
        Associativite::Gauche => top.precedence() >= entrant.precedence(),
        Associativite::Droite => top.precedence() > entrant.precedence(),
    }
}
