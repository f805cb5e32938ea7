/// A parsed search query: place name plus optional region qualifier.
///
/// Built transiently from the raw search text; nothing beyond trimming is
/// validated here. A blank place name is allowed to reach the fetch step,
/// the search control's enablement is the only gate (see `SearchSession`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub place: String,
    pub region: Option<String>,
}

impl Query {
    /// Split raw search text on the first comma: the part before it,
    /// trimmed, is the place name; the part after it, trimmed, is the
    /// region qualifier. An empty remainder counts as no qualifier.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(',') {
            Some((place, rest)) => {
                let region = rest.trim();
                Self {
                    place: place.trim().to_string(),
                    region: (!region.is_empty()).then(|| region.to_string()),
                }
            }
            None => Self {
                place: raw.trim().to_string(),
                region: None,
            },
        }
    }

    /// Value of the `city` request parameter: the place name, comma-joined
    /// with the region qualifier when one is present.
    pub fn city_param(&self) -> String {
        match &self.region {
            Some(region) => format!("{},{}", self.place, region),
            None => self.place.clone(),
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.city_param())
    }
}
