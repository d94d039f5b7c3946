// Static seismic tables and the country record builder

use serde::Serialize;

// ============================================================================
// INPUT TABLES
// ============================================================================

// Immutable input tables for the dashboard
//
// Three parallel lookup structures: an ordered (country, magnitude) base list
// plus two name-keyed maps. They are passed into `build_records` explicitly
// rather than living as module globals, so tests can substitute partial tables.
//
// The base list drives record order everywhere downstream: ranked subsets break
// ties by this order, and bucket membership lists preserve it.
#[derive(Debug, Clone)]
pub struct SeismicTables {
    // Ordered base list: (country, expected magnitude)
    pub magnitudes: Vec<(&'static str, f64)>,

    // country -> susceptibility score in [0, 1]
    pub vulnerability: Vec<(&'static str, f64)>,

    // country -> ISO-3166 alpha-3 code (keys the choropleth)
    pub iso_codes: Vec<(&'static str, &'static str)>,
}

impl SeismicTables {
    // The embedded 14-country dataset the dashboard ships with
    pub fn builtin() -> Self {
        Self {
            magnitudes: vec![
                ("Japan", 6.2),
                ("Indonesia", 6.0),
                ("Philippines", 5.8),
                ("Chile", 5.6),
                ("New Zealand", 5.4),
                ("United States", 4.5),
                ("Mexico", 5.0),
                ("Peru", 5.3),
                ("Turkey", 4.8),
                ("Italy", 4.6),
                ("South Korea", 3.5),
                ("China", 4.2),
                ("Argentina", 4.5),
                ("Russia", 3.8),
            ],
            vulnerability: vec![
                ("Japan", 0.8),
                ("Indonesia", 0.85),
                ("Philippines", 0.8),
                ("Chile", 0.75),
                ("New Zealand", 0.7),
                ("United States", 0.5),
                ("Mexico", 0.6),
                ("Peru", 0.65),
                ("Turkey", 0.55),
                ("Italy", 0.45),
                ("South Korea", 0.4),
                ("China", 0.5),
                ("Argentina", 0.4),
                ("Russia", 0.35),
            ],
            iso_codes: vec![
                ("Japan", "JPN"),
                ("Indonesia", "IDN"),
                ("Philippines", "PHL"),
                ("Chile", "CHL"),
                ("New Zealand", "NZL"),
                ("United States", "USA"),
                ("Mexico", "MEX"),
                ("Peru", "PER"),
                ("Turkey", "TUR"),
                ("Italy", "ITA"),
                ("South Korea", "KOR"),
                ("China", "CHN"),
                ("Argentina", "ARG"),
                ("Russia", "RUS"),
            ],
        }
    }

    // Exact-name lookup into the vulnerability map; None on miss
    fn vulnerability_for(&self, country: &str) -> Option<f64> {
        self.vulnerability
            .iter()
            .find(|(name, _)| *name == country)
            .map(|(_, v)| *v)
    }

    // Exact-name lookup into the ISO code map; None on miss
    fn iso_for(&self, country: &str) -> Option<String> {
        self.iso_codes
            .iter()
            .find(|(name, _)| *name == country)
            .map(|(_, code)| code.to_string())
    }
}

// ============================================================================
// COUNTRY RECORDS
// ============================================================================

// One fully-joined row of the dashboard dataset
//
// Vulnerability and ISO code come from name-keyed lookups and may be missing
// when a table lacks the country; missing fields serialize as JSON null and
// render as blanks rather than failing (the original's permissive semantics).
#[derive(Debug, Clone, Serialize)]
pub struct CountryRecord {
    pub name: String,

    // Expected earthquake magnitude, roughly 0-10
    pub magnitude: f64,

    // Susceptibility score in [0, 1]; None when the lookup missed
    pub vulnerability: Option<f64>,

    // Risk score used for ranking and map coloring.
    // Currently a straight copy of magnitude; vulnerability is joined and
    // displayed but not folded in (see the footnote the renderer emits).
    pub impact: f64,

    // ISO-3166 alpha-3 code; None when the lookup missed
    pub iso: Option<String>,
}

// Build the record collection from the input tables
//
// One record per entry in the base magnitude list, in list order. Lookups are
// permissive: a name missing from the vulnerability or ISO table leaves the
// field None and raises no error.
pub fn build_records(tables: &SeismicTables) -> Vec<CountryRecord> {
    tables
        .magnitudes
        .iter()
        .map(|&(name, magnitude)| CountryRecord {
            name: name.to_string(),
            magnitude,
            vulnerability: tables.vulnerability_for(name),
            impact: magnitude,
            iso: tables.iso_for(name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_complete() {
        let tables = SeismicTables::builtin();
        assert_eq!(tables.magnitudes.len(), 14);

        // Every base-list country has entries in both lookup tables
        for &(name, _) in &tables.magnitudes {
            assert!(tables.vulnerability_for(name).is_some(), "no vulnerability for {}", name);
            assert!(tables.iso_for(name).is_some(), "no ISO code for {}", name);
        }
    }

    #[test]
    fn test_impact_equals_magnitude() {
        let records = build_records(&SeismicTables::builtin());
        assert_eq!(records.len(), 14);
        for record in &records {
            assert_eq!(record.impact, record.magnitude);
        }
    }

    #[test]
    fn test_records_preserve_table_order() {
        let records = build_records(&SeismicTables::builtin());
        assert_eq!(records[0].name, "Japan");
        assert_eq!(records[0].iso.as_deref(), Some("JPN"));
        assert_eq!(records[13].name, "Russia");
        assert_eq!(records[13].iso.as_deref(), Some("RUS"));
    }

    #[test]
    fn test_missing_lookups_yield_none() {
        let tables = SeismicTables {
            magnitudes: vec![("Atlantis", 7.0)],
            vulnerability: vec![],
            iso_codes: vec![("Japan", "JPN")],
        };
        let records = build_records(&tables);
        assert_eq!(records.len(), 1);
        assert!(records[0].vulnerability.is_none());
        assert!(records[0].iso.is_none());
        // The record itself is still built, impact included
        assert_eq!(records[0].impact, 7.0);
    }
}
