//! Celebrity sun-sign matching.

use crate::compatibility::scorer::CompatibilityScorer;
use crate::compatibility::types::CelebrityMatch;
use crate::reference::{Element, ZodiacSign};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy)]
pub struct Celebrity {
    pub name: &'static str,
    pub sun_sign: ZodiacSign,
}

const fn celebrity(name: &'static str, sun_sign: ZodiacSign) -> Celebrity {
    Celebrity { name, sun_sign }
}

/// Fixed roster. Order breaks score ties.
pub static ROSTER: [Celebrity; 16] = [
    celebrity("Beyoncé", ZodiacSign::Virgo),
    celebrity("Taylor Swift", ZodiacSign::Sagittarius),
    celebrity("Leonardo DiCaprio", ZodiacSign::Scorpio),
    celebrity("Rihanna", ZodiacSign::Pisces),
    celebrity("Oprah Winfrey", ZodiacSign::Aquarius),
    celebrity("Lady Gaga", ZodiacSign::Aries),
    celebrity("Adele", ZodiacSign::Taurus),
    celebrity("Kanye West", ZodiacSign::Gemini),
    celebrity("Selena Gomez", ZodiacSign::Cancer),
    celebrity("Barack Obama", ZodiacSign::Leo),
    celebrity("Kim Kardashian", ZodiacSign::Libra),
    celebrity("Michelle Obama", ZodiacSign::Capricorn),
    celebrity("Zendaya", ZodiacSign::Virgo),
    celebrity("Harry Styles", ZodiacSign::Aquarius),
    celebrity("Keanu Reeves", ZodiacSign::Virgo),
    celebrity("Jennifer Lopez", ZodiacSign::Leo),
];

fn fun_facts(element: Element) -> &'static [&'static str] {
    match element {
        Element::Fire => &[
            "shares your appetite for the spotlight",
            "would match your energy on any dance floor",
            "turns bold ideas into headlines, just like you would",
        ],
        Element::Earth => &[
            "builds things that last, the way you do",
            "would appreciate your work ethic",
            "shares your taste for the finer, tangible things",
        ],
        Element::Air => &[
            "could talk with you until sunrise",
            "shares your restless curiosity",
            "would trade big ideas with you over coffee",
        ],
        Element::Water => &[
            "feels things as deeply as you do",
            "would read your mood before you say a word",
            "turns emotion into art, which you would understand",
        ],
    }
}

/// Pure `seed -> index` selection. The same seed always picks the same
/// index; `len` of zero yields zero.
pub fn seed_index(seed: u64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    // splitmix64 finalizer
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z % len as u64) as usize
}

fn fact_seed(birth_date: NaiveDate, sign: ZodiacSign) -> u64 {
    let day = birth_date.num_days_from_ce() as i64 as u64;
    day.wrapping_mul(12).wrapping_add(sign.index() as u64)
}

pub fn fun_fact(celebrity: &Celebrity, birth_date: NaiveDate) -> String {
    let pool = fun_facts(celebrity.sun_sign.element());
    let line = pool[seed_index(fact_seed(birth_date, celebrity.sun_sign), pool.len())];
    format!("{} {}", celebrity.name, line)
}

/// Top `count` roster entries for a sun sign, best first. Stable sort, so
/// equal scores keep roster order.
pub fn match_celebrities(
    scorer: &CompatibilityScorer,
    sun_sign: ZodiacSign,
    birth_date: NaiveDate,
    count: usize,
) -> Vec<CelebrityMatch> {
    let mut scored: Vec<(&Celebrity, u8)> = ROSTER
        .iter()
        .map(|c| (c, scorer.overall(sun_sign, c.sun_sign)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .take(count)
        .map(|(c, score)| CelebrityMatch {
            name: c.name.to_string(),
            sun_sign: c.sun_sign,
            match_percentage: score,
            fun_fact: fun_fact(c, birth_date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seed_index_in_range_and_stable() {
        for seed in 0..200u64 {
            let i = seed_index(seed, 3);
            assert!(i < 3);
            assert_eq!(i, seed_index(seed, 3));
        }
        assert_eq!(seed_index(42, 0), 0);
    }

    #[test]
    fn test_top_five_sorted() {
        let scorer = CompatibilityScorer::default();
        let matches = match_celebrities(&scorer, ZodiacSign::Aries, date(1990, 4, 1), 5);
        assert_eq!(matches.len(), 5);
        for pair in matches.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let scorer = CompatibilityScorer::default();
        let matches = match_celebrities(&scorer, ZodiacSign::Taurus, date(1990, 5, 1), ROSTER.len());
        let position = |name: &str| ROSTER.iter().position(|c| c.name == name).unwrap();
        for pair in matches.windows(2) {
            if pair[0].match_percentage == pair[1].match_percentage {
                assert!(position(pair[0].name.as_str()) < position(pair[1].name.as_str()));
            }
        }
    }

    #[test]
    fn test_fun_fact_names_celebrity() {
        let fact = fun_fact(&ROSTER[0], date(2000, 1, 1));
        assert!(fact.starts_with("Beyoncé "));
    }
}
