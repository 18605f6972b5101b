pub mod pools;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use pools::{
    BOOLEAN_PREFIXES, CITIES, CITY_TELLS, COLORS, COLOR_TELLS, COUNTRIES, COUNTRY_TELLS, DOMAINS,
    EMAIL_TELLS, FIRST_NAMES, FIRST_NAME_TELLS, LAST_NAMES, LAST_NAME_TELLS, NUMERIC_SUFFIXES,
};

/// The flavor of placeholder a field name calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleTag {
    Boolean,
    Numeric,
    FirstName,
    LastName,
    City,
    Country,
    Color,
    Email,
    Generic,
}

/// Classify a field name. First match wins: boolean, numeric, then the string tells.
pub fn classify(field_name: &str) -> SampleTag {
    if is_boolean(field_name) {
        return SampleTag::Boolean;
    }

    let lower = field_name.to_lowercase();

    if is_numeric(&lower) {
        return SampleTag::Numeric;
    }

    let string_tells: [(&[&str], SampleTag); 6] = [
        (LAST_NAME_TELLS, SampleTag::LastName),
        (FIRST_NAME_TELLS, SampleTag::FirstName),
        (CITY_TELLS, SampleTag::City),
        (COUNTRY_TELLS, SampleTag::Country),
        (COLOR_TELLS, SampleTag::Color),
        (EMAIL_TELLS, SampleTag::Email),
    ];

    string_tells
        .iter()
        .find(|(tells, _)| tells.iter().any(|tell| lower.contains(tell)))
        .map(|&(_, tag)| tag)
        .unwrap_or(SampleTag::Generic)
}

/// `isConfirmed`, `hasChildren`: a prefix followed by an uppercase character.
fn is_boolean(field_name: &str) -> bool {
    BOOLEAN_PREFIXES.iter().any(|prefix| {
        let Some(head) = field_name.get(..prefix.len()) else {
            return false;
        };
        head.eq_ignore_ascii_case(prefix)
            && field_name[prefix.len()..]
                .chars()
                .next()
                .is_some_and(char::is_uppercase)
    })
}

fn is_numeric(lower: &str) -> bool {
    (lower.ends_with("age") && !lower.ends_with("message"))
        || NUMERIC_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// Draws placeholder values for leaf fields.
///
/// The RNG is injected so callers can pin a seed and get the same file twice.
pub struct SampleValues<R> {
    rng: R,
}

impl<R: Rng> SampleValues<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Never fails; unknown names (including the empty string) yield `""`.
    pub fn sample(&mut self, field_name: &str) -> Value {
        match classify(field_name) {
            SampleTag::Boolean => Value::Bool(false),
            SampleTag::Numeric => Value::from(10),
            SampleTag::LastName => self.pick(LAST_NAMES).into(),
            SampleTag::FirstName => self.pick(FIRST_NAMES).into(),
            SampleTag::City => self.pick(CITIES).into(),
            SampleTag::Country => self.pick(COUNTRIES).into(),
            SampleTag::Color => self.pick(COLORS).into(),
            SampleTag::Email => Value::String(self.email()),
            SampleTag::Generic => Value::String(String::new()),
        }
    }

    fn pick(&mut self, pool: &'static [&'static str]) -> &'static str {
        pool[self.rng.random_range(0..pool.len())]
    }

    fn email(&mut self) -> String {
        let domain = self.pick(DOMAINS);
        let name: String = self
            .pick(FIRST_NAMES)
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        format!("{name}@{domain}")
    }
}

impl SampleValues<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl Default for SampleValues<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}
