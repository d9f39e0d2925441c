//! ISO 3166-1 alpha-3 country identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Countries that area data may refer to.
///
/// Only some of them have a rule registered; see
/// [`CountryRule`](crate::rules::CountryRule).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    Aut,
    Bel,
    Che,
    Cze,
    Deu,
    Dnk,
    Esp,
    Fra,
    Gbr,
    Hun,
    Ita,
    Lie,
    Lux,
    Nld,
    Pol,
    Prt,
    Svk,
    Svn,
    Swe,
    Usa,
}

impl Country {
    pub fn alpha3(&self) -> &'static str {
        match self {
            Country::Aut => "AUT",
            Country::Bel => "BEL",
            Country::Che => "CHE",
            Country::Cze => "CZE",
            Country::Deu => "DEU",
            Country::Dnk => "DNK",
            Country::Esp => "ESP",
            Country::Fra => "FRA",
            Country::Gbr => "GBR",
            Country::Hun => "HUN",
            Country::Ita => "ITA",
            Country::Lie => "LIE",
            Country::Lux => "LUX",
            Country::Nld => "NLD",
            Country::Pol => "POL",
            Country::Prt => "PRT",
            Country::Svk => "SVK",
            Country::Svn => "SVN",
            Country::Swe => "SWE",
            Country::Usa => "USA",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alpha3())
    }
}

/// Returned for codes outside the known set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCountry(pub String);

impl fmt::Display for UnknownCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown country code '{}'", self.0)
    }
}

impl std::error::Error for UnknownCountry {}

impl FromStr for Country {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let country = match s {
            "AUT" => Country::Aut,
            "BEL" => Country::Bel,
            "CHE" => Country::Che,
            "CZE" => Country::Cze,
            "DEU" => Country::Deu,
            "DNK" => Country::Dnk,
            "ESP" => Country::Esp,
            "FRA" => Country::Fra,
            "GBR" => Country::Gbr,
            "HUN" => Country::Hun,
            "ITA" => Country::Ita,
            "LIE" => Country::Lie,
            "LUX" => Country::Lux,
            "NLD" => Country::Nld,
            "POL" => Country::Pol,
            "PRT" => Country::Prt,
            "SVK" => Country::Svk,
            "SVN" => Country::Svn,
            "SWE" => Country::Swe,
            "USA" => Country::Usa,
            _ => return Err(UnknownCountry(s.to_string())),
        };
        Ok(country)
    }
}
