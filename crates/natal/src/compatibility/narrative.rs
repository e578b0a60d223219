//! Rule-based narrative for a sign pair.
//!
//! Each rule contributes at most one line. Lists are cut to the configured
//! caps after all rules ran, so earlier rules take precedence.

use crate::aspects::aspect_between_signs;
use crate::compatibility::scorer::{matching_pairs, PairFactors};
use crate::compatibility::types::FamousPair;
use crate::reference::{element_relation, AspectKind, ElementRelation, Modality, ZodiacSign};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrativeLimits {
    pub max_strengths: usize,
    pub max_challenges: usize,
}

impl Default for NarrativeLimits {
    fn default() -> Self {
        Self { max_strengths: 5, max_challenges: 4 }
    }
}

const FALLBACK_CHALLENGE: &str = "Keeping things fresh takes deliberate effort from both sides";

pub fn strengths(a: ZodiacSign, b: ZodiacSign, factors: &PairFactors, cap: usize) -> Vec<String> {
    let (ea, eb) = (a.element(), b.element());
    let mut lines = Vec::new();

    match element_relation(ea, eb) {
        ElementRelation::Same => {
            lines.push(format!("Shared {} element: you instinctively understand each other's pace", ea))
        }
        ElementRelation::Complementary => {
            lines.push(format!("Complementary elements: {} and {} feed each other", ea, eb))
        }
        _ => {}
    }

    match aspect_between_signs(a, b) {
        Some(AspectKind::Trine) => lines.push("Trine placement brings easy, natural harmony".to_string()),
        Some(AspectKind::Sextile) => {
            lines.push("Sextile placement opens friendly and cooperative opportunities".to_string())
        }
        Some(AspectKind::Opposition) => {
            lines.push("Opposite signs attract and balance each other's blind spots".to_string())
        }
        _ => {}
    }

    match factors.natural_compatibility {
        100 => lines.push("Each sign lists the other as a natural match".to_string()),
        50 => {
            let (drawn, to) = if a.is_naturally_compatible_with(b) { (a, b) } else { (b, a) };
            lines.push(format!("One-sided pull: {} is naturally drawn to {}", drawn, to))
        }
        _ => {}
    }

    if a.modality() != b.modality() {
        lines.push(format!(
            "Different modalities: {} and {} energies cover each other's approach to change",
            a.modality(),
            b.modality()
        ));
    }

    if a != b && a.ruler() == b.ruler() {
        lines.push(format!("Both ruled by {}, you value the same things", a.ruler()));
    }

    if let Some((trait_a, _)) = matching_pairs(a.profile().traits, b.profile().traits).next() {
        lines.push(format!("Both of you are {}", trait_a));
    }

    lines.truncate(cap);
    lines
}

pub fn challenges(a: ZodiacSign, b: ZodiacSign, factors: &PairFactors, cap: usize) -> Vec<String> {
    let (ea, eb) = (a.element(), b.element());
    let mut lines = Vec::new();

    match aspect_between_signs(a, b) {
        Some(AspectKind::Square) => {
            lines.push("Square tension can turn small disagreements into power struggles".to_string())
        }
        Some(AspectKind::Opposition) => {
            lines.push("Opposite priorities need conscious compromise".to_string())
        }
        _ => {}
    }

    if element_relation(ea, eb) == ElementRelation::Clashing {
        lines.push(format!("Clashing elements: {} and {} can dampen each other's energy", ea, eb));
    }

    if a.modality() == b.modality() {
        lines.push(
            match a.modality() {
                Modality::Cardinal => "Two cardinal signs may compete to lead",
                Modality::Fixed => "Two fixed signs can dig in and refuse to yield",
                Modality::Mutable => "Two mutable signs may drift without a clear direction",
            }
            .to_string(),
        );
    }

    if factors.natural_compatibility == 0 {
        lines.push("Neither sign naturally gravitates toward the other".to_string());
    }

    if let Some((weakness, _)) = matching_pairs(a.profile().weaknesses, b.profile().weaknesses).next() {
        lines.push(format!("Both of you can be {}", weakness));
    }

    if lines.is_empty() {
        lines.push(FALLBACK_CHALLENGE.to_string());
    }
    lines.truncate(cap);
    lines
}

/// One line of advice, by whole-sign aspect first, then by element.
pub fn advice(a: ZodiacSign, b: ZodiacSign) -> &'static str {
    match aspect_between_signs(a, b) {
        Some(AspectKind::Trine) => {
            "Your harmony comes easily; keep challenging each other so it doesn't turn into routine."
        }
        Some(AspectKind::Square) => {
            "Treat friction as fuel: name the tension early and negotiate instead of competing."
        }
        Some(AspectKind::Opposition) => {
            "You mirror each other; learn from the traits you lack rather than resisting them."
        }
        _ => match element_relation(a.element(), b.element()) {
            ElementRelation::Same => "You speak the same language; make room for each other's individuality.",
            ElementRelation::Complementary => "Lean on what the other provides and say out loud what you need.",
            ElementRelation::Clashing => "Slow down and translate: you express care in very different ways.",
            ElementRelation::Neutral => "Build shared rituals that give both of you a stable common ground.",
        },
    }
}

fn pair_key(a: ZodiacSign, b: ZodiacSign) -> (ZodiacSign, ZodiacSign) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

lazy_static::lazy_static! {
    static ref FAMOUS_PAIRS: HashMap<(ZodiacSign, ZodiacSign), Vec<(&'static str, &'static str)>> = {
        use ZodiacSign::*;
        let entries: [(ZodiacSign, ZodiacSign, &str, &str); 10] = [
            (Virgo, Sagittarius, "Beyoncé & Jay-Z", "Perfectionist meets free spirit"),
            (Leo, Capricorn, "Barack & Michelle Obama", "Charisma anchored by discipline"),
            (Virgo, Scorpio, "Blake Lively & Ryan Reynolds", "Playful banter over deep loyalty"),
            (Cancer, Capricorn, "Prince William & Kate Middleton", "Home and duty in balance"),
            (Aquarius, Pisces, "Paul Newman & Joanne Woodward", "Idealists with a fifty-year marriage"),
            (Libra, Aquarius, "John Lennon & Yoko Ono", "Two visionaries sharing one cause"),
            (Cancer, Scorpio, "Tom Hanks & Rita Wilson", "Water signs with lasting devotion"),
            (Aries, Taurus, "Victoria & David Beckham", "Drive paired with steadiness"),
            (Pisces, Cancer, "Johnny Cash & June Carter", "A love song written by two water signs"),
            (Scorpio, Pisces, "Goldie Hawn & Kurt Russell", "Intensity softened by devotion"),
        ];
        let mut m: HashMap<(ZodiacSign, ZodiacSign), Vec<(&'static str, &'static str)>> = HashMap::new();
        for (a, b, names, description) in entries {
            m.entry(pair_key(a, b)).or_default().push((names, description));
        }
        m
    };
}

pub fn famous_pairs(a: ZodiacSign, b: ZodiacSign) -> Vec<FamousPair> {
    FAMOUS_PAIRS
        .get(&pair_key(a, b))
        .map(|pairs| {
            pairs
                .iter()
                .map(|(names, description)| FamousPair {
                    names: names.to_string(),
                    description: description.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}
