// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter soumet la ligne (quand le champ est focus)
// - Tactile : boutons d’insertion, focus redonné après clic (focus_entree)
// - Journal façon terminal + panneau Démarche (jetons / RPN du dernier succès)

use eframe::egui;

use super::etat::{AppCalc, GenreLigne};
use crate::noyau::reglages::DIGITS_MAX;
use crate::noyau::Associativite;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice RPN");
        ui.add_space(6.0);

        self.ui_entree(ui);

        ui.add_space(8.0);
        ui.separator();

        self.ui_reglages(ui);

        ui.separator();
        ui.add_space(4.0);

        self.ui_demarche(ui);

        ui.add_space(4.0);
        self.ui_journal(ui);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (3 + 4) * 2, r / 2, help")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter : TextEdit singleline perd le focus à la validation
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.soumettre();
        }

        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            for (label, texte) in [
                ("(", "("),
                (")", ")"),
                ("+", " + "),
                ("-", " - "),
                ("*", " * "),
                ("/", " / "),
                ("^", " ^ "),
                ("r", "r"),
            ] {
                self.bouton_insert(ui, label, texte);
            }

            ui.separator();

            for chiffre in ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "."] {
                self.bouton_insert(ui, chiffre, chiffre);
            }

            ui.add_space(10.0);

            if ui.add_sized([64.0, 28.0], egui::Button::new("=")).clicked() {
                self.soumettre();
            }
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface l’écran (la session reste)", Action::ClearJournal);
            self.bouton_action(ui, "AC", "Nouvelle session", Action::ResetTotal);
        });
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let reglages = self.reglages_mut();

            let mut droite = reglages.associativite_puissance == Associativite::Droite;
            if ui
                .checkbox(&mut droite, "^ associatif à droite")
                .on_hover_text("Décoché : 2^3^2 = 64 ; coché : 2^3^2 = 512")
                .changed()
            {
                reglages.associativite_puissance = if droite {
                    Associativite::Droite
                } else {
                    Associativite::Gauche
                };
            }

            ui.separator();

            ui.label("Affichage :");
            let mut d = reglages.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                reglages.set_digits(d as usize);
            }
        });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn ui_journal(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for ligne in &self.journal {
                            let texte = egui::RichText::new(&ligne.texte).monospace();
                            match ligne.genre {
                                GenreLigne::Erreur => {
                                    ui.colored_label(ui.visuals().error_fg_color, texte);
                                }
                                GenreLigne::Saisie => {
                                    ui.label(texte.weak());
                                }
                                GenreLigne::Resultat => {
                                    ui.label(texte.strong());
                                }
                                GenreLigne::Info => {
                                    ui.label(texte);
                                }
                            }
                        }
                    });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearJournal => self.clear_journal(),
                Action::ResetTotal => self.reset_total(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        if ui.add_sized([32.0, 28.0], egui::Button::new(label)).clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearJournal,
    ResetTotal,
}
