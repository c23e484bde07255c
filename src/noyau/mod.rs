//! Noyau : expression infixe -> valeur
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (+ rendu texte des jetons)
//! - rpn.rs      : shunting-yard (infixe -> RPN)
//! - eval.rs     : réduction RPN + pipeline complet
//! - session.rs  : historique + dernier résultat (`r`)
//! - erreurs.rs  : une erreur par étage
//! - reglages.rs : associativité de `^`, précision d’affichage
//! - format.rs   : affichage des résultats

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod reglages;
pub mod rpn;
pub mod session;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use format::format_resultat;
pub use reglages::{Associativite, Reglages};
pub use session::Session;
