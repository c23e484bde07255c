//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, journal, démarche, session)
//! et exécuter les commandes du shell sans logique d’affichage.
//!
//! Contrats :
//! - Les commandes (help/history/clear/quit) ne passent jamais par le noyau.
//! - Une erreur s’affiche au journal ; la session reste utilisable.
//! - Actions déterministes, sans effet de bord caché.

use log::info;

use super::commande::{parse_commande, Commande, TEXTE_AIDE};
use crate::noyau::{format_resultat, Reglages, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreLigne {
    Saisie,
    Resultat,
    Erreur,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ligne {
    pub genre: GenreLigne,
    pub texte: String,
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub journal: Vec<Ligne>,
    pub demarche: Demarche,

    // --- noyau ---
    pub session: Session,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
    // Lu par app.rs : fermeture de la fenêtre (natif).
    pub quitter: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            journal: vec![Ligne {
                genre: GenreLigne::Info,
                texte: "Calculatrice (tapez 'help' pour les commandes)".into(),
            }],
            demarche: Demarche::default(),
            session: Session::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            quitter: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : nouvelle session (historique + `r` perdus), réglages conservés.
    pub fn reset_total(&mut self) {
        let reglages = self.session.reglages().clone();
        self.session = Session::new(reglages);
        self.entree.clear();
        self.journal.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR / `clear` : efface le journal (l’écran), la session ne bouge pas.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn reglages_mut(&mut self) -> &mut Reglages {
        self.session.reglages_mut()
    }

    /* ------------------------ Shell ------------------------ */

    /// Enter / "=" : exécute la ligne courante puis vide l’entrée.
    pub fn soumettre(&mut self) {
        let ligne = std::mem::take(&mut self.entree);
        self.executer(&ligne);
        self.focus_entree = true;
    }

    pub fn executer(&mut self, ligne: &str) {
        match parse_commande(ligne) {
            Commande::Vide => {}
            Commande::Aide => self.pousser(GenreLigne::Info, TEXTE_AIDE),
            Commande::Historique => self.afficher_historique(),
            Commande::Effacer => self.clear_journal(),
            Commande::Quitter => {
                info!("quit demandé");
                self.quitter = true;
            }
            Commande::Calcul(expr) => self.calculer(&expr),
        }
    }

    fn calculer(&mut self, expr: &str) {
        self.pousser(GenreLigne::Saisie, format!("> {expr}"));

        match self.session.evaluate_line_trace(expr) {
            Ok(trace) => {
                let digits = self.session.reglages().digits;
                self.pousser(
                    GenreLigne::Resultat,
                    format!("= {}", format_resultat(trace.valeur, digits)),
                );
                self.demarche = Demarche {
                    jetons: trace.jetons,
                    rpn: trace.rpn,
                };
            }
            Err(e) => self.pousser(GenreLigne::Erreur, format!("Erreur : {e}")),
        }
    }

    fn afficher_historique(&mut self) {
        if self.session.history().is_empty() {
            self.pousser(GenreLigne::Info, "Aucun historique");
            return;
        }

        let digits = self.session.reglages().digits;
        let lignes: Vec<String> = self
            .session
            .history()
            .iter()
            .enumerate()
            .map(|(i, (expr, v))| format!("{}: {expr} = {}", i + 1, format_resultat(*v, digits)))
            .collect();
        self.pousser(GenreLigne::Info, lignes.join("\n"));
    }

    fn pousser(&mut self, genre: GenreLigne, texte: impl Into<String>) {
        self.journal.push(Ligne {
            genre,
            texte: texte.into(),
        });
    }
}
