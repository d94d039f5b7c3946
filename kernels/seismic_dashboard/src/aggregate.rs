// Ranked subsets and magnitude buckets

use crate::dataset::CountryRecord;

// ============================================================================
// TOP-N RANKING
// ============================================================================

// Select the top n records by impact, descending
//
// Ties keep their base-list order (stable sort). When n exceeds the record
// count the whole collection is returned; no error is raised. The result
// borrows from the input since ranked subsets are views, recomputed per panel.
pub fn top_n(records: &[CountryRecord], n: usize) -> Vec<&CountryRecord> {
    let mut ranked: Vec<&CountryRecord> = records.iter().collect();
    // sort_by is stable, so equal impacts stay in input order
    ranked.sort_by(|a, b| b.impact.total_cmp(&a.impact));
    ranked.truncate(n.min(records.len()));
    ranked
}

// ============================================================================
// MAGNITUDE BUCKETS
// ============================================================================

// Countries grouped into one 0.5-wide magnitude bin
//
// The key is stored as a count of half-magnitude units (floor(magnitude * 2))
// so bucket ordering is plain integer ordering; `label` renders it to one
// decimal for display ("3.5", "6.0").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnitudeBucket {
    // floor(magnitude * 2); e.g. magnitude 5.8 -> 11
    pub half_units: i64,

    // Member countries, in base-list encounter order
    pub countries: Vec<String>,
}

impl MagnitudeBucket {
    // Display key: the bucket's lower bound to one decimal place
    pub fn label(&self) -> String {
        format!("{:.1}", self.half_units as f64 / 2.0)
    }
}

// Group records into 0.5-wide magnitude buckets, ascending by bucket value
//
// Every record lands in exactly one bucket (key = floor(magnitude * 2) / 2).
// Within a bucket, countries keep their encounter order.
pub fn bucket_by_magnitude(records: &[CountryRecord]) -> Vec<MagnitudeBucket> {
    let mut buckets: Vec<MagnitudeBucket> = Vec::new();

    for record in records {
        let half_units = (record.magnitude * 2.0).floor() as i64;
        match buckets.iter_mut().find(|b| b.half_units == half_units) {
            Some(bucket) => bucket.countries.push(record.name.clone()),
            None => buckets.push(MagnitudeBucket {
                half_units,
                countries: vec![record.name.clone()],
            }),
        }
    }

    // Ascending numeric order for display; members were filled in encounter
    // order and are untouched by this sort
    buckets.sort_by_key(|b| b.half_units);
    buckets
}
