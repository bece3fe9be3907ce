//! The editor and search configuration of the content pages and snippets.
//!
//! This is only metadata, consumed by the content editor and the search indexer: which fields
//! are editable, how they are grouped and in which order, and which fields are indexed.

use entity::types::PageKind;

/// The widget used to edit a field, when it isn't the default one of its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    /// A list of checkboxes, for a many-to-many field.
    CheckboxSelectMultiple,
    /// A year/month/day selector.
    SelectDate,
}

/// An element of the editor of a page or a snippet.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Panel {
    /// A single field.
    Field {
        /// The name of the field.
        name: &'static str,
        /// The widget used to edit it, if not the default one.
        widget: Option<Widget>,
        /// The CSS class of the panel.
        classname: Option<&'static str>,
    },
    /// A group of panels, under a heading.
    MultiField {
        /// The heading of the group.
        heading: &'static str,
        /// The panels of the group.
        children: Vec<Panel>,
    },
    /// The list of the child objects of a relation, edited inline.
    Inline {
        /// The name of the relation.
        relation: &'static str,
        /// The label of the list.
        label: &'static str,
    },
    /// An image selector.
    ImageChooser {
        /// The name of the field.
        name: &'static str,
    },
}

impl Panel {
    const fn field(name: &'static str) -> Self {
        Self::Field {
            name,
            widget: None,
            classname: None,
        }
    }

    const fn full(name: &'static str) -> Self {
        Self::Field {
            name,
            widget: None,
            classname: Some("full"),
        }
    }

    const fn with_widget(name: &'static str, widget: Widget) -> Self {
        Self::Field {
            name,
            widget: Some(widget),
            classname: None,
        }
    }

    /// Returns the names of the fields edited by this panel, in order.
    pub fn field_names(&self) -> Vec<&'static str> {
        match self {
            Self::Field { name, .. } | Self::ImageChooser { name } => vec![*name],
            Self::Inline { relation, .. } => vec![*relation],
            Self::MultiField { children, .. } => {
                children.iter().flat_map(Panel::field_names).collect()
            }
        }
    }
}

/// A field indexed by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SearchField {
    /// The name of the field.
    pub name: &'static str,
    /// Whether the field also matches on partial words.
    pub partial_match: bool,
    /// The relevance of the field compared to the others.
    pub boost: Option<u32>,
}

impl SearchField {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            partial_match: false,
            boost: None,
        }
    }
}

/// The editor and search configuration of a kind of page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PageConfig {
    /// The panels of the content tab of the editor.
    pub content_panels: Vec<Panel>,
    /// The indexed fields.
    pub search_fields: Vec<SearchField>,
}

fn base_content_panels() -> Vec<Panel> {
    vec![Panel::full("title")]
}

fn base_search_fields() -> Vec<SearchField> {
    vec![SearchField {
        name: "title",
        partial_match: true,
        boost: Some(2),
    }]
}

fn extend<T>(mut base: Vec<T>, items: impl IntoIterator<Item = T>) -> Vec<T> {
    base.extend(items);
    base
}

/// Returns the editor and search configuration of the provided kind of page.
pub fn page_config(kind: PageKind) -> PageConfig {
    let (content_panels, search_fields) = match kind {
        PageKind::AboutIndex => (
            vec![Panel::field("body")],
            vec![SearchField::new("body")],
        ),
        PageKind::SafetyInsuranceIndex => (
            vec![
                Panel::field("body_left"),
                Panel::field("body_right"),
                Panel::field("body_bottom"),
                Panel::field("pdf"),
            ],
            vec![
                SearchField::new("body_left"),
                SearchField::new("body_right"),
                SearchField::new("body_bottom"),
            ],
        ),
        PageKind::TestimonialsIndex => (vec![Panel::full("intro")], Vec::new()),
        PageKind::Testimonial => (
            vec![
                Panel::MultiField {
                    heading: "Trip information",
                    children: vec![
                        Panel::field("full_name"),
                        Panel::field("trip_event"),
                        Panel::field("organization"),
                        Panel::field("date"),
                        Panel::with_widget("categories", Widget::CheckboxSelectMultiple),
                        Panel::field("tags"),
                    ],
                },
                Panel::field("text"),
            ],
            vec![
                SearchField::new("text"),
                SearchField::new("full_name"),
                SearchField::new("organization"),
            ],
        ),
        PageKind::TravelIndex => (vec![Panel::full("body")], Vec::new()),
        PageKind::Travel => (
            vec![
                Panel::MultiField {
                    heading: "Trip/Event information",
                    children: vec![
                        Panel::field("destination"),
                        Panel::with_widget("date", Widget::SelectDate),
                        Panel::field("start_location"),
                        Panel::field("end_location"),
                        Panel::with_widget("categories", Widget::CheckboxSelectMultiple),
                    ],
                },
                Panel::field("intro"),
                Panel::field("text"),
                Panel::Inline {
                    relation: "gallery_images",
                    label: "Gallery images",
                },
            ],
            vec![SearchField::new("text"), SearchField::new("destination")],
        ),
    };

    PageConfig {
        content_panels: extend(base_content_panels(), content_panels),
        search_fields: extend(base_search_fields(), search_fields),
    }
}

/// Returns the editor panels of the category snippet.
pub fn category_panels() -> Vec<Panel> {
    vec![
        Panel::field("name"),
        Panel::field("parent"),
        Panel::field("description"),
        Panel::ImageChooser { name: "icon" },
    ]
}

/// Returns the editor panels of an image of a travel page gallery.
pub fn gallery_image_panels() -> Vec<Panel> {
    vec![Panel::ImageChooser { name: "image" }, Panel::field("caption")]
}

#[cfg(test)]
mod tests {
    use entity::types::PageKind;
    use sea_orm::Iterable as _;

    use super::{Panel, Widget, page_config};

    fn search_names(kind: PageKind) -> Vec<&'static str> {
        page_config(kind).search_fields.iter().map(|f| f.name).collect()
    }

    fn panel_names(kind: PageKind) -> Vec<&'static str> {
        page_config(kind)
            .content_panels
            .iter()
            .flat_map(Panel::field_names)
            .collect()
    }

    #[test]
    fn every_page_starts_with_title() {
        for kind in PageKind::iter() {
            assert_eq!(panel_names(kind)[0], "title");
            assert_eq!(search_names(kind)[0], "title");
        }
    }

    #[test]
    fn search_fields() {
        assert_eq!(search_names(PageKind::AboutIndex), ["title", "body"]);
        assert_eq!(
            search_names(PageKind::SafetyInsuranceIndex),
            ["title", "body_left", "body_right", "body_bottom"]
        );
        assert_eq!(
            search_names(PageKind::Testimonial),
            ["title", "text", "full_name", "organization"]
        );
        assert_eq!(search_names(PageKind::Travel), ["title", "text", "destination"]);
        assert_eq!(search_names(PageKind::TravelIndex), ["title"]);
    }

    #[test]
    fn travel_panels() {
        assert_eq!(
            panel_names(PageKind::Travel),
            [
                "title",
                "destination",
                "date",
                "start_location",
                "end_location",
                "categories",
                "intro",
                "text",
                "gallery_images",
            ]
        );

        let config = page_config(PageKind::Travel);
        let Panel::MultiField { heading, children } = &config.content_panels[1] else {
            panic!("expected a group of fields");
        };
        assert_eq!(*heading, "Trip/Event information");
        assert!(children.contains(&Panel::Field {
            name: "date",
            widget: Some(Widget::SelectDate),
            classname: None,
        }));
    }

    #[test]
    fn testimonial_panels() {
        assert_eq!(
            panel_names(PageKind::Testimonial),
            [
                "title",
                "full_name",
                "trip_event",
                "organization",
                "date",
                "categories",
                "tags",
                "text",
            ]
        );
    }
}
