use blockcheck_domain::{LookupRequest, LookupResult};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Raw query-string parameters of the lookup endpoint.
#[derive(Deserialize, Debug, Default)]
pub struct LookupParams {
    pub domain: Option<String>,
    pub domains: Option<String>,
    pub refresh: Option<String>,
    pub json: Option<String>,
}

impl LookupParams {
    pub fn refresh_requested(&self) -> bool {
        self.refresh.as_deref() == Some("true")
    }

    pub fn json_requested(&self) -> bool {
        self.json.as_deref() == Some("true")
    }

    pub fn into_request(self) -> LookupRequest {
        LookupRequest {
            domain: self.domain,
            domains: self.domains,
        }
    }
}

/// JSON rendering of a lookup result: `{"<domain>": {"blocked": bool}}`.
///
/// Serialized by hand so the map keeps the result's first-occurrence order.
pub struct JsonLookup<'a>(pub &'a LookupResult);

#[derive(Serialize)]
struct BlockedFlag {
    blocked: bool,
}

impl Serialize for JsonLookup<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0.entries() {
            map.serialize_entry(&entry.domain, &BlockedFlag {
                blocked: entry.blocked,
            })?;
        }
        map.end()
    }
}
