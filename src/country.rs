//! Static country data: assessment levels and document requirements

/// One country entry with its assessment level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryAssessment {
    pub code: &'static str,
    pub name: &'static str,
    pub level: u32,
}

impl CountryAssessment {
    /// Label shown in the country select
    pub fn option_label(&self) -> String {
        format!("{} (Assessment Level {})", self.name, self.level)
    }
}

/// Assessment level per country, keyed by code (table order, not display order)
pub const COUNTRY_ASSESSMENT_LEVELS: &[CountryAssessment] = &[
    CountryAssessment {
        code: "AU",
        name: "Australia",
        level: 1,
    },
    CountryAssessment {
        code: "BR",
        name: "Brazil",
        level: 2,
    },
    CountryAssessment {
        code: "CA",
        name: "Canada",
        level: 1,
    },
    CountryAssessment {
        code: "CN",
        name: "China",
        level: 2,
    },
    CountryAssessment {
        code: "DE",
        name: "Germany",
        level: 1,
    },
    CountryAssessment {
        code: "GB",
        name: "United Kingdom",
        level: 1,
    },
    CountryAssessment {
        code: "IN",
        name: "India",
        level: 3,
    },
    CountryAssessment {
        code: "MX",
        name: "Mexico",
        level: 2,
    },
    CountryAssessment {
        code: "NG",
        name: "Nigeria",
        level: 3,
    },
    CountryAssessment {
        code: "PK",
        name: "Pakistan",
        level: 3,
    },
    CountryAssessment {
        code: "US",
        name: "United States",
        level: 1,
    },
    CountryAssessment {
        code: "VN",
        name: "Vietnam",
        level: 3,
    },
];

/// Look up a country by code
pub fn lookup(code: &str) -> Option<&'static CountryAssessment> {
    COUNTRY_ASSESSMENT_LEVELS.iter().find(|c| c.code == code)
}

/// Get countries ordered by display name (case-insensitive, ascending)
pub fn sorted_by_name() -> Vec<&'static CountryAssessment> {
    let mut countries: Vec<_> = COUNTRY_ASSESSMENT_LEVELS.iter().collect();
    countries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(b.name))
    });
    countries
}

/// Get the ordered document requirements for a country.
///
/// Baseline documents apply to every known country; assessment levels 2 and 3
/// require additional evidence. Unknown codes have no requirements.
pub fn document_requirements(code: &str) -> Vec<&'static str> {
    let Some(country) = lookup(code) else {
        return Vec::new();
    };

    let mut requirements = vec!["Valid passport", "Certified academic transcripts"];
    if country.level >= 2 {
        requirements.push("English language test results");
        requirements.push("Evidence of financial capacity");
    }
    if country.level >= 3 {
        requirements.push("Police clearance certificate");
        requirements.push("Health examination report");
        requirements.push("Statement of purpose");
    }
    requirements
}
