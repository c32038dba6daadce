use std::fmt;

/// Free-text place category.
///
/// Matching against the canonical category sets is case-insensitive and
/// ignores surrounding whitespace.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Category(String);

/// Categories that are booked for a stay and priced per person-hour.
/// All other categories are priced flat per person.
pub const LODGING_CATEGORIES: [&str; 5] = ["hotel", "motel", "resort", "guest_house", "hostel"];

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PricingPolicy {
    /// Duration-based pricing; a checkout time is mandatory.
    PerPersonHour,
    /// Flat pricing, settled up front.
    PerPerson,
}

impl Category {
    pub fn new(from: impl Into<String>) -> Self {
        Self(from.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_lodging(&self) -> bool {
        let category = self.0.trim();
        LODGING_CATEGORIES
            .iter()
            .any(|lodging| lodging.eq_ignore_ascii_case(category))
    }

    pub fn pricing_policy(&self) -> PricingPolicy {
        if self.is_lodging() {
            PricingPolicy::PerPersonHour
        } else {
            PricingPolicy::PerPerson
        }
    }
}

impl From<String> for Category {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Category {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<Category> for String {
    fn from(from: Category) -> Self {
        from.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}
