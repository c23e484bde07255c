//! src/app/commande.rs
//!
//! Commandes du shell (jamais envoyées au noyau).

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commande {
    Vide,
    Aide,
    Historique,
    Effacer,
    Quitter,
    /// Tout le reste : une expression pour le noyau.
    Calcul(String),
}

/// Classe une ligne saisie (espaces retirés, insensible à la casse pour les mots-clés).
pub fn parse_commande(ligne: &str) -> Commande {
    let s = ligne.trim();
    match s.to_lowercase().as_str() {
        "" => Commande::Vide,
        "help" => Commande::Aide,
        "history" => Commande::Historique,
        "clear" | "cls" | "c" => Commande::Effacer,
        "quit" | "q" | "exit" => Commande::Quitter,
        _ => Commande::Calcul(s.to_string()),
    }
}

pub const TEXTE_AIDE: &str = "\
Commandes de la calculatrice :
  +, -, *, /, ^   Arithmétique de base
  ( )             Parenthèses de regroupement
  r               Dernier résultat (ex: 'r + 5')

Commandes spéciales :
  help            Affiche cette aide
  history         Historique des calculs
  clear/cls/c     Efface l’écran
  quit/q/exit     Quitte la calculatrice";
