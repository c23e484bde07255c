//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : un échec ne modifie jamais la session
//! - référence : évaluateur direct par niveaux de précédence (sans RPN)

use std::time::{Duration, Instant};

use super::erreurs::{EvalError, SessionError};
use super::Session;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence ------------------------ */

const OPS: [char; 5] = ['+', '-', '*', '/', '^'];

fn niveau(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' => 2,
        _ => 3,
    }
}

fn applique(op: char, a: f64, b: f64) -> Option<f64> {
    match op {
        '+' => Some(a + b),
        '-' => Some(a - b),
        '*' => Some(a * b),
        '/' if b == 0.0 => None,
        '/' => Some(a / b),
        _ => Some(a.powf(b)),
    }
}

/// Chaîne plate v0 op0 v1 op1 v2 ... : on réduit d’abord `^`, puis `* /`, puis `+ -`,
/// chaque niveau de gauche à droite. None = division par zéro.
fn reference_chaine(valeurs: &[f64], ops: &[char]) -> Option<f64> {
    let mut vals = valeurs.to_vec();
    let mut ops = ops.to_vec();
    for n in [3u8, 2, 1] {
        let mut i = 0;
        while i < ops.len() {
            if niveau(ops[i]) == n {
                let v = applique(ops[i], vals[i], vals[i + 1])?;
                vals[i] = v;
                vals.remove(i + 1);
                ops.remove(i);
            } else {
                i += 1;
            }
        }
    }
    vals.first().copied()
}

fn meme_valeur(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    // inclut 0 (utile pour les divisions par zéro)
    let n = rng.pick(10);
    if rng.pick(4) == 0 {
        let s = format!("{n}.5");
        let v = s.parse().unwrap();
        (s, v)
    } else {
        (n.to_string(), n as f64)
    }
}

/// Expression totalement parenthésée + sa valeur directe.
fn gen_arbre(rng: &mut Rng, depth: usize) -> (String, Option<f64>) {
    if depth == 0 || rng.pick(4) == 0 {
        let (s, v) = gen_nombre(rng);
        return (s, Some(v));
    }
    let op = OPS[rng.pick(4) as usize]; // pas de ^ : valeurs bornées
    let (sa, va) = gen_arbre(rng, depth - 1);
    let (sb, vb) = gen_arbre(rng, depth - 1);
    let v = match (va, vb) {
        (Some(a), Some(b)) => applique(op, a, b),
        _ => None,
    };
    (format!("({sa} {op} {sb})"), v)
}

/// Chaîne sans parenthèses : la précédence fait tout le travail.
fn gen_chaine(rng: &mut Rng, longueur: usize) -> (String, Option<f64>) {
    let mut valeurs = Vec::new();
    let mut ops = Vec::new();
    let (s0, v0) = gen_nombre(rng);
    let mut texte = s0;
    valeurs.push(v0);
    for _ in 0..longueur {
        let op = OPS[rng.pick(5) as usize];
        let (s, v) = gen_nombre(rng);
        texte.push_str(&format!("{op}{s}"));
        ops.push(op);
        valeurs.push(v);
    }
    (texte, reference_chaine(&valeurs, &ops))
}

fn gen_bruit(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '7', '.', '+', '-', '*', '/', '^', '(', ')', ' ', 'r', '$',
    ];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

fn verifie_contre_reference(expr: &str, reference: Option<f64>) {
    match (Session::default().evaluate_line(expr), reference) {
        (Ok(v), Some(r)) => assert!(meme_valeur(v, r), "expr={expr:?} obtenu={v} ref={r}"),
        (Err(SessionError::Eval(EvalError::DivisionByZero)), None) => {}
        (obtenu, r) => panic!("expr={expr:?} obtenu={obtenu:?} ref={r:?}"),
    }
}

#[test]
fn fuzz_safe_arbres_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);
    for _ in 0..300 {
        budget(t0, max);
        let (expr, reference) = gen_arbre(&mut rng, 5);
        verifie_contre_reference(&expr, reference);
    }
}

#[test]
fn fuzz_safe_chaines_precedence() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_ok = 0usize;
    for i in 0..300 {
        budget(t0, max);
        let (expr, reference) = gen_chaine(&mut rng, 1 + i % 8);
        if reference.is_some() {
            seen_ok += 1;
        }
        verifie_contre_reference(&expr, reference);
    }
    // sinon le fuzz ne “balaye” rien
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_echecs_sans_effet_de_bord() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0x5EED_u64);
    let mut s = Session::default();
    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for i in 0..400 {
        budget(t0, max);
        let expr = gen_bruit(&mut rng, 1 + i % 12);

        let avant_len = s.history().len();
        let avant_r = s.last_result().map(f64::to_bits);

        match s.evaluate_line(&expr) {
            Ok(v) => {
                assert_eq!(s.history().len(), avant_len + 1);
                assert_eq!(s.last_result().map(f64::to_bits), Some(v.to_bits()));
                assert_eq!(s.history()[avant_len].0, expr);
                seen_ok += 1;
            }
            Err(_) => {
                assert_eq!(s.history().len(), avant_len, "expr={expr:?}");
                assert_eq!(s.last_result().map(f64::to_bits), avant_r, "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    assert!(seen_ok > 0, "aucun succès vu");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut rng_a = Rng::new(42);
    let mut rng_b = Rng::new(42);
    for _ in 0..100 {
        let (ea, _) = gen_chaine(&mut rng_a, 6);
        let (eb, _) = gen_chaine(&mut rng_b, 6);
        assert_eq!(ea, eb);

        let a = Session::default().evaluate_line(&ea).map(f64::to_bits);
        let b = Session::default().evaluate_line(&eb).map(f64::to_bits);
        assert_eq!(a, b);
    }
}

#[test]
fn fuzz_safe_somme_longue_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 2000 termes, pile d’opérateurs jamais plus haute que 1
    let expr = vec!["0.5"; 2000].join("+");
    budget(t0, max);

    let v = Session::default()
        .evaluate_line(&expr)
        .unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 1000.0);
}
