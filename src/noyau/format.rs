// src/noyau/format.rs

use super::reglages::DIGITS_MAX;

/// Au-delà, un entier f64 n’est plus exact : on passe en notation scientifique.
const ENTIER_MAX_AFFICHE: f64 = 1e15;

/// Affichage d’un résultat :
/// - entier exact => sans virgule ("10", "-3")
/// - sinon au plus `digits` chiffres après la virgule, zéros finaux retirés
/// - très grand / très petit => notation scientifique
/// - ∞, -∞, indéfini (NaN)
pub fn format_resultat(v: f64, digits: usize) -> String {
    if v.is_nan() {
        return "indéfini".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    if v.abs() >= ENTIER_MAX_AFFICHE {
        return format!("{v:e}");
    }
    if v.fract() == 0.0 {
        // -0.0 => "0"
        return format!("{}", v as i64);
    }

    let digits = digits.min(DIGITS_MAX);
    // 0 décimale : arrondi à l’entier, jamais de notation scientifique
    if digits > 0 && v.abs() < 10f64.powi(-(digits as i32)) {
        return format!("{v:e}");
    }

    let s = format!("{v:.digits$}");
    // sans '.', les zéros finaux font partie de l’entier
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
