// src/noyau/erreurs.rs
//
// Taxonomie des erreurs du noyau : une enum par étage du pipeline,
// plus l'erreur de session qui les enveloppe telles quelles.

use thiserror::Error;

/// Étage 1 : jetons.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("caractère inconnu : '{0}'")]
    UnknownCharacter(char),
    #[error("nombre mal formé : \"{0}\"")]
    MalformedNumber(String),
}

/// Étage 2 : shunting-yard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("parenthèses non appariées")]
    MismatchedParens,
}

/// Étage 3 : réduction de la RPN.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("expression invalide")]
    InvalidExpression,
    #[error("division par zéro")]
    DivisionByZero,
}

/// Erreur vue par l'appelant de `Session::evaluate_line`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("aucun résultat précédent ('r') disponible")]
    NoPreviousResult,
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
