//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> substitution de `r` -> shunting-yard -> réduction RPN
//!
//! Tout est pur : même texte + même dernier résultat => même sortie.
//! La session (session.rs) est seule à muter un état, après coup.

use log::trace;
use num_traits::Zero;

use super::erreurs::{EvalError, SessionError};
use super::jetons::{format_tokens, tokenize, Literal, Operator, Token};
use super::reglages::Reglages;
use super::rpn::convert_with;

/// Résultat + démarche (jetons et RPN en texte) d'un succès.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub valeur: f64,
    pub jetons: String,
    pub rpn: String,
}

/// Réduit une RPN à une valeur unique via une pile.
///
/// Opérateur : le premier dépilé est l’opérande de droite (b), le second celui de gauche (a).
/// À la fin, exactement une valeur doit rester.
pub fn evaluate(rpn: &[Token]) -> Result<f64, EvalError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len() / 2 + 1);

    for tok in rpn {
        match tok {
            Token::Number(lit) => st.push(lit.value()),

            Token::Operator(op) => {
                if st.len() < 2 {
                    return Err(EvalError::InvalidExpression);
                }
                let b = st.pop().ok_or(EvalError::InvalidExpression)?;
                let a = st.pop().ok_or(EvalError::InvalidExpression)?;
                st.push(appliquer(*op, a, b)?);
            }

            // `r` non substitué, ou parenthèse : pas une RPN
            Token::LastResult | Token::LeftParen | Token::RightParen => {
                return Err(EvalError::InvalidExpression)
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::InvalidExpression),
    }
}

fn appliquer(op: Operator, a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(match op {
        Operator::Plus => a + b,
        Operator::Minus => a - b,
        Operator::Star => a * b,
        Operator::Slash => {
            // zéro exact, pas d'epsilon (-0.0 compris)
            if b.is_zero() {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        Operator::Caret => a.powf(b),
    })
}

/// Pipeline complet pour une ligne, étant donné le dernier résultat connu.
pub fn run_pipeline(
    texte: &str,
    dernier: Option<f64>,
    reglages: &Reglages,
) -> Result<Trace, SessionError> {
    // 1) `r` sans résultat précédent : refusé avant même les jetons
    if texte.contains('r') && dernier.is_none() {
        return Err(SessionError::NoPreviousResult);
    }

    // 2) Jetons
    let jetons = tokenize(texte)?;
    let jetons_txt = format_tokens(&jetons);
    trace!("jetons: {jetons_txt}");

    // 3) Substitution de `r` sur les jetons (jamais sur le texte)
    let jetons = substituer_dernier(jetons, dernier)?;

    // 4) RPN
    let rpn = convert_with(&jetons, reglages)?;

    // 5) Valeur
    let valeur = evaluate(&rpn)?;

    Ok(Trace {
        valeur,
        jetons: jetons_txt,
        rpn: format_tokens(&rpn),
    })
}

fn substituer_dernier(jetons: Vec<Token>, dernier: Option<f64>) -> Result<Vec<Token>, SessionError> {
    jetons
        .into_iter()
        .map(|t| match t {
            Token::LastResult => dernier
                .map(|v| Token::Number(Literal::Fractional(v)))
                .ok_or(SessionError::NoPreviousResult),
            autre => Ok(autre),
        })
        .collect()
}
