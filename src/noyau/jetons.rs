// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::erreurs::LexError;

/// Opérateur binaire. Précédence fixe : `+ -` = 1, `* /` = 2, `^` = 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
}

impl Operator {
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Plus | Operator::Minus => 1,
            Operator::Star | Operator::Slash => 2,
            Operator::Caret => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
            Operator::Caret => '^',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            '^' => Some(Operator::Caret),
            _ => None,
        }
    }
}

/// Littéral numérique.
///
/// Garde la forme de surface (entier vs décimal) pour le ré-affichage ;
/// l'arithmétique, elle, se fait toujours en `f64`.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Integer(BigInt),
    Fractional(f64),
}

impl Literal {
    pub fn value(&self) -> f64 {
        match self {
            // BigInt trop grand => +/- infini (comportement de num-bigint)
            Literal::Integer(n) => n.to_f64().unwrap_or(f64::INFINITY),
            Literal::Fractional(x) => *x,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(Literal),
    Operator(Operator),
    LeftParen,
    RightParen,

    // `r` : remplacé par la session avant la conversion
    LastResult,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12) et décimaux (ex: 3.5, .5, 5.)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - r (dernier résultat)
///
/// Un seul passage, sans retour arrière. Pas de jeton de fin : la longueur suffit.
pub fn tokenize(s: &str) -> Result<Vec<Token>, LexError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Token::LeftParen);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Token::RightParen);
                i += 1;
                continue;
            }
            'r' => {
                out.push(Token::LastResult);
                i += 1;
                continue;
            }
            _ => {}
        }

        if let Some(op) = Operator::from_char(c) {
            out.push(Token::Operator(op));
            i += 1;
            continue;
        }

        // Nombre : plus longue suite de chiffres et de '.'
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Token::Number(parse_literal(&texte)?));
            continue;
        }

        return Err(LexError::UnknownCharacter(c));
    }

    Ok(out)
}

fn parse_literal(texte: &str) -> Result<Literal, LexError> {
    let malforme = || LexError::MalformedNumber(texte.to_string());

    match texte.matches('.').count() {
        0 => BigInt::parse_bytes(texte.as_bytes(), 10)
            .map(Literal::Integer)
            .ok_or_else(malforme),
        // "." seul n'a aucun chiffre
        1 => texte
            .parse::<f64>()
            .map(Literal::Fractional)
            .map_err(|_| malforme()),
        _ => Err(malforme()),
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Token::Number(Literal::Integer(n)) => n.to_string(),
            // Debug garde le point : 10.0 reste "10.0"
            Token::Number(Literal::Fractional(x)) => format!("{x:?}"),
            Token::Operator(op) => op.symbol().to_string(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
            Token::LastResult => "r".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
