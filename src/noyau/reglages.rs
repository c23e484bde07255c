//! Réglages du noyau (pas de fichier : valeurs par défaut + setters bornés).

use super::jetons::Operator;

/// Précision d'affichage par défaut (chiffres après la virgule).
pub const DIGITS_DEFAUT: usize = 12;

/// Au-delà, f64 n'a plus rien à dire.
pub const DIGITS_MAX: usize = 17;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Associativite {
    #[default]
    Gauche,
    Droite,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    /// Associativité de `^` seulement ; `+ - * /` restent à gauche.
    /// Gauche par défaut : 2^3^2 = (2^3)^2 = 64.
    pub associativite_puissance: Associativite,

    pub digits: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            associativite_puissance: Associativite::Gauche,
            digits: DIGITS_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn associativite(&self, op: Operator) -> Associativite {
        match op {
            Operator::Caret => self.associativite_puissance,
            _ => Associativite::Gauche,
        }
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
    }
}
