//! Domain fixture catalog and import resolver.
//!
//! One table maps a domain type name to both the bare identifier the
//! synthesizer emits and the import statement that binds that identifier to a
//! JSON fixture file. Synthesizer and resolver read the same
//! [`FixtureCatalog`], keyed by the same stripped type name.

use serde::{Deserialize, Serialize};

/// Qualifier appended to required prop types.
pub const REQUIRED_SUFFIX: &str = ".isRequired";

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainFixture {
    /// Type expression without `.isRequired`, e.g. `RomanPropTypes.Order`.
    pub type_name: String,
    /// Identifier bound by the import and used as the prop value.
    pub identifier: String,
    /// Module path of the fixture data.
    pub path: String,
}

impl DomainFixture {
    #[must_use]
    pub fn new(
        type_name: impl Into<String>,
        identifier: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            identifier: identifier.into(),
            path: path.into(),
        }
    }

    /// Import statement text, without a trailing semicolon.
    #[must_use]
    pub fn import_statement(&self) -> String {
        format!("import {} from '{}'", self.identifier, self.path)
    }
}

const BUILTIN: &[(&str, &str, &str)] = &[
    (
        "RomanPropTypes.CardData",
        "cardData",
        "roman-shared/src/cardData/testData/cardData.json",
    ),
    (
        "RomanPropTypes.Doctor",
        "doctor",
        "roman-shared/src/user/testData/doctor.json",
    ),
    (
        "RomanPropTypes.DraftUser",
        "draftUser",
        "roman-shared/src/user/testData/draftUser.json",
    ),
    (
        "RomanPropTypes.Member",
        "member",
        "roman-shared/src/user/testData/member.json",
    ),
    (
        "RomanPropTypes.Order",
        "order",
        "roman-shared/src/order/testData/order.json",
    ),
    (
        "RomanPropTypes.Pharmacist",
        "pharmacist",
        "roman-shared/src/user/testData/pharmacist.json",
    ),
    (
        "RomanPropTypes.Plan",
        "plan",
        "roman-shared/src/plan/testData/plan.json",
    ),
    (
        "RomanPropTypes.PlanListItem",
        "planListItem",
        "roman-shared/src/plan/testData/planListItem.json",
    ),
    (
        "RomanPropTypes.Prescription",
        "prescription",
        "roman-shared/src/prescription/testData/prescription.json",
    ),
    (
        "RomanPropTypes.Product",
        "product",
        "roman-shared/src/product/testData/product.json",
    ),
    (
        "RomanPropTypes.Tracker",
        "tracker",
        "roman-shared/src/tracker/testData/tracker.json",
    ),
    (
        "RomanPropTypes.TrackerPlan",
        "trackerPlan",
        "roman-shared/src/tracker/testData/trackerPlan.json",
    ),
    (
        "RomanPropTypes.TreatmentRecommendation",
        "treatmentRecommendation",
        "roman-shared/src/treatment-recommendation/testData/treatmentRecommendation.json",
    ),
    (
        "RomanPropTypes.TreatmentRecommendationItem",
        "treatmentRecommendationItem",
        "roman-shared/src/treatment-recommendation/testData/treatmentRecommendationItem.json",
    ),
    (
        "RomanPropTypes.TreatmentRequest",
        "treatmentRequest",
        "roman-shared/src/treatment-request/testData/treatmentRequest.json",
    ),
    (
        "RomanPropTypes.TreatmentRequestItem",
        "treatmentRequestItem",
        "roman-shared/src/treatment-request/testData/treatmentRequestItem.json",
    ),
    (
        "RomanPropTypes.User",
        "user",
        "roman-shared/src/user/testData/user.json",
    ),
];

/// Closed table of domain types that have fixture data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCatalog {
    entries: Vec<DomainFixture>,
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FixtureCatalog {
    /// The builtin catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(type_name, ident, path)| DomainFixture::new(*type_name, *ident, *path))
                .collect(),
        }
    }

    /// A catalog with no entries.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add entries, replacing any existing entry with the same type name.
    #[must_use]
    pub fn with_entries(mut self, extra: impl IntoIterator<Item = DomainFixture>) -> Self {
        for entry in extra {
            let type_name = strip_required(&entry.type_name).to_string();
            let entry = DomainFixture { type_name, ..entry };
            match self
                .entries
                .iter_mut()
                .find(|e| e.type_name == entry.type_name)
            {
                Some(existing) => *existing = entry,
                None => self.entries.push(entry),
            }
        }
        self
    }

    /// Look up a raw type expression. `.isRequired` is stripped first.
    #[must_use]
    pub fn lookup(&self, raw: &str) -> Option<&DomainFixture> {
        let key = strip_required(raw);
        self.entries.iter().find(|e| e.type_name == key)
    }

    #[must_use]
    pub fn entries(&self) -> &[DomainFixture] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip one trailing `.isRequired` qualifier.
#[must_use]
pub fn strip_required(raw: &str) -> &str {
    raw.strip_suffix(REQUIRED_SUFFIX).unwrap_or(raw)
}

/// Import statement supplying fixture data for `raw`, if it names a catalog type.
#[must_use]
pub fn resolve_import(raw: Option<&str>, catalog: &FixtureCatalog) -> Option<String> {
    let raw = raw?;
    catalog.lookup(raw).map(DomainFixture::import_statement)
}
