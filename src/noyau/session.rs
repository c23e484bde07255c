//! Session : historique + mémoire du dernier résultat autour du pipeline.
//!
//! Contrat :
//! - l’état ne bouge qu’après un succès complet (historique puis dernier résultat)
//! - un échec laisse historique et dernier résultat strictement inchangés
//! - `last_result` vaut None jusqu’au premier succès, puis n’est plus jamais effacé

use log::debug;

use super::erreurs::SessionError;
use super::eval::{run_pipeline, Trace};
use super::reglages::Reglages;

#[derive(Clone, Debug, Default)]
pub struct Session {
    historique: Vec<(String, f64)>,
    dernier: Option<f64>,
    reglages: Reglages,
}

impl Session {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    /// Point d’entrée unique du shell.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn evaluate_line(&mut self, texte: &str) -> Result<f64, SessionError> {
        self.evaluate_line_trace(texte).map(|t| t.valeur)
    }

    /// Comme `evaluate_line`, avec la démarche (jetons, RPN).
    pub fn evaluate_line_trace(&mut self, texte: &str) -> Result<Trace, SessionError> {
        let trace = match run_pipeline(texte, self.dernier, &self.reglages) {
            Ok(t) => t,
            Err(e) => {
                debug!("rejet {texte:?}: {e}");
                return Err(e);
            }
        };

        // texte original (avant substitution de `r`)
        self.historique.push((texte.to_string(), trace.valeur));
        self.dernier = Some(trace.valeur);
        debug!("{texte:?} = {} (historique: {})", trace.valeur, self.historique.len());

        Ok(trace)
    }

    pub fn history(&self) -> &[(String, f64)] {
        &self.historique
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn last_result(&self) -> Option<f64> {
        self.dernier
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    pub fn reglages_mut(&mut self) -> &mut Reglages {
        &mut self.reglages
    }
}
