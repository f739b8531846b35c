/// An option of the country dropdown: a display name and its stable code.
///
/// The record stores the `code`, never the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub code: &'static str,
}

pub const COUNTRIES: [Country; 10] = [
    Country { name: "Australia", code: "AU" },
    Country { name: "Brazil", code: "BR" },
    Country { name: "China", code: "CN" },
    Country { name: "Egypt", code: "EG" },
    Country { name: "France", code: "FR" },
    Country { name: "Germany", code: "DE" },
    Country { name: "India", code: "IN" },
    Country { name: "Japan", code: "JP" },
    Country { name: "Spain", code: "ES" },
    Country { name: "United States", code: "US" },
];

/// Looks up a country by its code.
pub fn find_country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.code == code)
}
