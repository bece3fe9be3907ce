use std::fmt;

use sea_orm::entity::prelude::*;

/// The kind of a node in the content tree.
///
/// Each kind has its own table holding the content of the page, keyed by the page ID.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, serde::Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    #[sea_orm(string_value = "about_index")]
    AboutIndex,
    #[sea_orm(string_value = "safety_insurance_index")]
    SafetyInsuranceIndex,
    #[sea_orm(string_value = "testimonials_index")]
    TestimonialsIndex,
    #[sea_orm(string_value = "testimonial")]
    Testimonial,
    #[sea_orm(string_value = "travel_index")]
    TravelIndex,
    #[sea_orm(string_value = "travel")]
    Travel,
}

impl PageKind {
    /// Returns the name displayed in the editor for this kind of page.
    pub fn verbose_name(self) -> &'static str {
        match self {
            Self::AboutIndex => "website about index page",
            Self::SafetyInsuranceIndex => "website safety insurance index page",
            Self::TestimonialsIndex => "website testimonals index page",
            Self::Testimonial => "website testimonial page",
            Self::TravelIndex => "website travel index page",
            Self::Travel => "website travel page",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verbose_name())
    }
}
