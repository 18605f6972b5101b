pub const COUNTRIES: &[&str] = &["Sweden", "Japan", "Italy", "Brazil"];
pub const CITIES: &[&str] = &["Chicago", "Gothenburg", "Kairo", "Sidney"];
pub const FIRST_NAMES: &[&str] = &["Obi-Wan", "Rey", "Aragorn", "Mary"];
pub const LAST_NAMES: &[&str] = &["Kenobi", "Higginbottom", "Smith", "Anderson"];
pub const COLORS: &[&str] = &["blue", "green", "red", "orange"];
pub const DOMAINS: &[&str] = &["example.com", "example.net", "example.org"];

pub(crate) const BOOLEAN_PREFIXES: &[&str] = &["is", "has"];

/// `age` is handled separately so that `message` is not numeric.
pub(crate) const NUMERIC_SUFFIXES: &[&str] = &[
    "number", "length", "height", "width", "size", "index", "order", "ordinal", "quantity", "id",
];

pub(crate) const LAST_NAME_TELLS: &[&str] = &["lastname", "surname", "familyname", "last_name"];
pub(crate) const FIRST_NAME_TELLS: &[&str] = &["firstname", "first_name", "name", "author"];
pub(crate) const CITY_TELLS: &[&str] = &["city", "town"];
pub(crate) const COUNTRY_TELLS: &[&str] = &["country", "land"];
pub(crate) const COLOR_TELLS: &[&str] = &["color", "colour"];
pub(crate) const EMAIL_TELLS: &[&str] = &[
    "email",
    "e_mail",
    "mail",
    "emailaddress",
    "mailaddress",
    "mail_address",
    "email_address",
];
