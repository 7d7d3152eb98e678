//! Text normalization for whisky names.
//!
//! Everything here is a pure `str -> String` function. The age-phrase
//! patterns cover the forms seen in the corpus (`12yo`, `12 y/o`,
//! `12 yr`, `12 years old`, `12-year-old`); the standalone-number pass
//! additionally removes a bare age token near the end of the name when
//! the record carries an explicit `age_years`. That pass can in theory
//! eat an unrelated trailing number that happens to equal the age (a
//! cask number, say); the corpus has never needed stricter
//! disambiguation, so the heuristic stands.

use std::sync::LazyLock;

use regex::Regex;

static AGE_PHRASES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b\d{1,3}\s*(?:yo|y/o)\b",
        r"(?i)\b\d{1,3}\s*(?:yr|yrs)\b",
        r"(?i)\b\d{1,3}\s*(?:year|years)\s*(?:old)?\b",
        r"(?i)\b\d{1,3}\s*-\s*(?:year|years)\s*-\s*old\b",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static GENERIC_TYPE_WORDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bblended\s+scotch\s+whisky\b",
        r"(?i)\bblended\s+malt\s+scotch\s+whisky\b",
        r"(?i)\bsingle\s+malt\s+scotch\s+whisky\b",
        r"(?i)\bscotch\s+whisky\b",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static MULTI_SPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s{2,}").ok());

fn collapse_spaces(s: &str) -> String {
    match MULTI_SPACE.as_ref() {
        Some(re) => re.replace_all(s, " ").trim().to_string(),
        None => s.trim().to_string(),
    }
}

/// Slugify a display string into `[a-z0-9]` hyphen-separated form.
///
/// Lowercases, expands `&` to "and", drops apostrophes, collapses any
/// run of other characters to a single hyphen, and trims hyphens at
/// both ends. Idempotent.
#[must_use]
pub fn slugify(s: &str) -> String {
    let lowered = s.to_lowercase().replace('&', " and ");
    let mut out = String::with_capacity(lowered.len());
    let mut gap = false;
    for c in lowered.chars() {
        if c == '\'' || c == '\u{2019}' {
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.push(c);
        } else {
            gap = true;
        }
    }
    out
}

/// Remove age phrases from a whisky name.
///
/// When `age_years` is given, a standalone occurrence of the rounded
/// age is also removed, but only when bounded by end-of-string or
/// closing punctuation so a mid-name number survives.
#[must_use]
pub fn strip_age_words(name: &str, age_years: Option<f64>) -> String {
    let mut out = name.to_string();
    for re in AGE_PHRASES.iter() {
        out = re.replace_all(&out, "").into_owned();
    }
    out = collapse_spaces(&out);

    if let Some(age) = age_years.filter(|a| a.is_finite()) {
        let rounded = age.round() as i64;
        // `regex` has no lookahead; capture the bounding tail and
        // re-emit it.
        let pattern = format!(r"\b{rounded}\b(?P<tail>\s*[)\]}}\-–—,:;]|\s*$)");
        if let Ok(re) = Regex::new(&pattern) {
            out = re.replace_all(&out, "${tail}").into_owned();
            out = collapse_spaces(&out);
        }
    }

    out
}

/// Remove generic category phrases ("Single Malt Scotch Whisky" and
/// friends) from a whisky name.
#[must_use]
pub fn strip_generic_type_words(name: &str) -> String {
    let mut out = name.to_string();
    for re in GENERIC_TYPE_WORDS.iter() {
        out = re.replace_all(&out, "").into_owned();
    }
    collapse_spaces(&out)
}

/// `"{base} {N} Year Old"` with the age rounded to an integer.
#[must_use]
pub fn format_age_title(base_name: &str, age_years: f64) -> String {
    format!("{} {} Year Old", base_name, age_years.round() as i64)
}

/// Map a 1-10 overall score to 1-5 stars: clamp, halve, round, clamp.
#[must_use]
pub fn stars_from_1to10(v: f64) -> u8 {
    let clamped = v.clamp(1.0, 10.0);
    ((clamped / 2.0).round() as i64).clamp(1, 5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basics() {
        assert_eq!(slugify("Chivas Regal 12"), "chivas-regal-12");
        assert_eq!(slugify("Ballantine's 17"), "ballantines-17");
        assert_eq!(slugify("Smoke & Mirrors"), "smoke-and-mirrors");
        assert_eq!(slugify("  --Weird__Input!!  "), "weird-input");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugify_is_idempotent() {
        for input in [
            "Chivas Regal 12 Year Old",
            "Ballantine's 17",
            "Smoke & Mirrors",
            "  odd -- spacing  ",
            "\u{00e9}l\u{00e8}ve", // non-ascii letters drop to hyphens
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn slugify_output_charset() {
        let re = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
        for input in ["Chivas Regal 12", "A&B", "x", "Ballantine's"] {
            let s = slugify(input);
            assert!(s.is_empty() || re.is_match(&s), "bad slug {s:?}");
        }
    }

    #[test]
    fn strips_age_phrase_variants() {
        assert_eq!(strip_age_words("Glen Foo 12yo", None), "Glen Foo");
        assert_eq!(strip_age_words("Glen Foo 12 y/o", None), "Glen Foo");
        assert_eq!(strip_age_words("Glen Foo 12 yr", None), "Glen Foo");
        assert_eq!(strip_age_words("Glen Foo 12 yrs", None), "Glen Foo");
        assert_eq!(strip_age_words("Glen Foo 12 Years Old", None), "Glen Foo");
        assert_eq!(strip_age_words("Glen Foo 12-year-old", None), "Glen Foo");
    }

    #[test]
    fn strips_standalone_age_only_at_a_boundary() {
        assert_eq!(strip_age_words("Chivas Regal 12", Some(12.0)), "Chivas Regal");
        assert_eq!(strip_age_words("Chivas Regal 12,", Some(12.0)), "Chivas Regal ,");
        // mid-name numbers survive
        assert_eq!(
            strip_age_words("Batch 12 Reserve", Some(12.0)),
            "Batch 12 Reserve"
        );
        // a different number is never touched
        assert_eq!(strip_age_words("Chivas Regal 18", Some(12.0)), "Chivas Regal 18");
    }

    #[test]
    fn ballantines_seventeen_scenario() {
        let stripped = strip_age_words("Ballantine's 17 Year Old Scotch Whisky", Some(17.0));
        let base = strip_generic_type_words(&stripped);
        assert_eq!(base, "Ballantine's");
        assert!(!base.contains("17"));
        assert!(!base.to_lowercase().contains("year old"));
        assert!(!base.to_lowercase().contains("scotch whisky"));
    }

    #[test]
    fn strips_generic_type_words() {
        assert_eq!(
            strip_generic_type_words("Monkey Shoulder Blended Malt Scotch Whisky"),
            "Monkey Shoulder"
        );
        assert_eq!(
            strip_generic_type_words("Glenfiddich Single Malt Scotch Whisky"),
            "Glenfiddich"
        );
        assert_eq!(strip_generic_type_words("Famous Grouse scotch whisky"), "Famous Grouse");
    }

    #[test]
    fn never_panics_on_degenerate_input() {
        assert_eq!(strip_age_words("", None), "");
        assert_eq!(strip_generic_type_words(""), "");
        assert_eq!(strip_age_words("12", Some(12.0)), "");
    }

    #[test]
    fn formats_age_title() {
        assert_eq!(format_age_title("Chivas Regal", 12.0), "Chivas Regal 12 Year Old");
        assert_eq!(format_age_title("Glen Foo", 17.6), "Glen Foo 18 Year Old");
    }

    #[test]
    fn stars_mapping() {
        assert_eq!(stars_from_1to10(1.0), 1);
        assert_eq!(stars_from_1to10(2.0), 1);
        assert_eq!(stars_from_1to10(5.0), 3); // 2.5 rounds away from zero
        assert_eq!(stars_from_1to10(9.0), 5); // 4.5 rounds up
        assert_eq!(stars_from_1to10(10.0), 5);
        assert_eq!(stars_from_1to10(0.0), 1); // clamped up
        assert_eq!(stars_from_1to10(99.0), 5); // clamped down
    }
}
