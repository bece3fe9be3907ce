//! The category taxonomy of the content pages.
//!
//! Categories form a forest: each category may have a parent, and the roots have none.
//! Validation refuses the cycles of up to three categories (a category being its own parent,
//! its grandparent, or the parent of its grandparent). Longer cycles aren't refused, only
//! reported in the logs.

use std::collections::{HashMap, HashSet};

use entity::{types::slugify, website_category};
use sea_orm::{
    ActiveModelTrait as _, ActiveValue::Set, ColumnTrait as _, ConnectionTrait, EntityTrait,
    QueryFilter as _,
};

use crate::error::{ValidationError, WebsiteError, WebsiteResult};

/// The longest cycle refused by [`CategoryForest::clean`].
const MAX_REFUSED_CYCLE: usize = 3;

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent_id: Option<i32>,
}

/// The categories of the website, addressed by their ID.
#[derive(Debug, Clone, Default)]
pub struct CategoryForest {
    nodes: HashMap<i32, Node>,
}

impl FromIterator<website_category::Model> for CategoryForest {
    fn from_iter<T: IntoIterator<Item = website_category::Model>>(iter: T) -> Self {
        Self {
            nodes: iter
                .into_iter()
                .map(|c| {
                    (
                        c.id,
                        Node {
                            name: c.name,
                            parent_id: c.parent_id,
                        },
                    )
                })
                .collect(),
        }
    }
}

impl CategoryForest {
    /// Loads all the categories from the database.
    pub async fn load<C: ConnectionTrait>(conn: &C) -> WebsiteResult<Self> {
        Ok(website_category::Entity::find().all(conn).await?.into_iter().collect())
    }

    /// Returns whether the category with the provided ID is in the forest.
    pub fn contains(&self, id: i32) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the parent of the category, if it has one.
    pub fn parent_of(&self, id: i32) -> Option<i32> {
        self.nodes.get(&id).and_then(|n| n.parent_id)
    }

    /// Inserts or replaces a category in the forest.
    pub fn set(&mut self, id: i32, name: String, parent_id: Option<i32>) {
        self.nodes.insert(id, Node { name, parent_id });
    }

    /// Checks that the category with the ID `id` (or a new category if `None`) can have
    /// `parent_id` as parent.
    pub fn clean(&self, id: Option<i32>, parent_id: Option<i32>) -> Result<(), ValidationError> {
        let (Some(id), Some(parent_id)) = (id, parent_id) else {
            return Ok(());
        };

        if parent_id == id {
            return Err(ValidationError::SelfParent);
        }

        match self.cycle_len(id, parent_id) {
            Some(len) if len <= MAX_REFUSED_CYCLE => {
                return Err(ValidationError::CircularParents);
            }
            Some(len) => tracing::warn!(
                category_id = id,
                parent_id,
                cycle_len = len,
                "category parent creates a cycle that isn't refused by validation"
            ),
            None => (),
        }

        Ok(())
    }

    /// Returns the length of the cycle that setting `parent_id` as parent of `id` would create.
    fn cycle_len(&self, id: i32, parent_id: i32) -> Option<usize> {
        let mut visited = HashSet::new();
        let mut current = Some(parent_id);
        let mut len = 1;
        while let Some(c) = current {
            if c == id {
                return Some(len);
            }
            if !visited.insert(c) {
                return None;
            }
            current = self.parent_of(c);
            len += 1;
        }
        None
    }

    /// Returns the displayed name of a category: `"{parent} - {name}"`, or just the name
    /// if it has no parent.
    pub fn display_name(&self, id: i32) -> Option<String> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(id);

        while let Some(c) = current {
            if !visited.insert(c) {
                break;
            }
            let Some(node) = self.nodes.get(&c) else {
                break;
            };
            chain.push(node.name.as_str());
            current = node.parent_id;
        }

        if chain.is_empty() {
            return None;
        }
        chain.reverse();
        Some(chain.join(" - "))
    }
}

/// The data of a category to save.
#[derive(Debug, Clone, Default)]
pub struct CategoryInput {
    /// The ID of the category to update, or `None` to create one.
    pub id: Option<i32>,
    /// The name of the category.
    pub name: String,
    /// The slug, derived from the name when empty.
    pub slug: String,
    /// The parent category, if any.
    pub parent_id: Option<i32>,
    /// The icon image, if any.
    pub icon_id: Option<i32>,
    /// The description of the category.
    pub description: String,
}

/// Validates then saves a category.
#[tracing::instrument(skip(conn))]
pub async fn save_category<C: ConnectionTrait>(
    conn: &C,
    input: CategoryInput,
) -> WebsiteResult<website_category::Model> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::Blank("name").into());
    }

    let forest = CategoryForest::load(conn).await?;
    if let Some(id) = input.id.filter(|id| !forest.contains(*id)) {
        return Err(WebsiteError::WebsiteCategoryNotFound(id));
    }
    if let Some(parent_id) = input.parent_id.filter(|id| !forest.contains(*id)) {
        return Err(WebsiteError::WebsiteCategoryNotFound(parent_id));
    }
    forest.clean(input.id, input.parent_id)?;

    let slug = if input.slug.is_empty() {
        slugify(&input.name)
    } else {
        input.slug
    };

    let mut taken = website_category::Entity::find().filter(website_category::Column::Slug.eq(slug.as_str()));
    if let Some(id) = input.id {
        taken = taken.filter(website_category::Column::Id.ne(id));
    }
    if taken.one(conn).await?.is_some() {
        return Err(ValidationError::DuplicateCategorySlug(slug).into());
    }

    let mut category = website_category::ActiveModel {
        name: Set(input.name),
        slug: Set(slug),
        parent_id: Set(input.parent_id),
        icon_id: Set(input.icon_id),
        description: Set(input.description),
        ..Default::default()
    };

    let category = match input.id {
        Some(id) => {
            category.id = Set(id);
            category.update(conn).await?
        }
        None => category.insert(conn).await?,
    };

    Ok(category)
}

/// Returns the displayed names of the categories with the provided IDs.
pub fn display_names(forest: &CategoryForest, ids: impl IntoIterator<Item = i32>) -> Vec<String> {
    ids.into_iter()
        .filter_map(|id| forest.display_name(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::error::ValidationError;

    use super::CategoryForest;

    fn chain() -> CategoryForest {
        // A <- B <- C
        let mut forest = CategoryForest::default();
        forest.set(1, "A".to_owned(), None);
        forest.set(2, "B".to_owned(), Some(1));
        forest.set(3, "C".to_owned(), Some(2));
        forest
    }

    #[test]
    fn self_parent_refused() {
        let forest = chain();
        assert_eq!(forest.clean(Some(2), Some(2)), Err(ValidationError::SelfParent));
        assert_eq!(
            ValidationError::SelfParent.to_string(),
            "Parent category cannot be self."
        );
    }

    #[test]
    fn grandparent_cycle_refused() {
        let forest = chain();
        // B.parent = C while C.parent = B
        assert_eq!(
            forest.clean(Some(2), Some(3)),
            Err(ValidationError::CircularParents)
        );
        assert_eq!(
            ValidationError::CircularParents.to_string(),
            "Cannot have circular Parents."
        );
    }

    #[test]
    fn three_node_cycle_refused() {
        let forest = chain();
        // A.parent = C makes A -> C -> B -> A
        assert_eq!(forest.cycle_len(1, 3), Some(3));
        assert_eq!(
            forest.clean(Some(1), Some(3)),
            Err(ValidationError::CircularParents)
        );
    }

    #[test]
    fn four_node_cycle_only_flagged() {
        let mut forest = chain();
        forest.set(4, "D".to_owned(), Some(3));
        // A.parent = D makes A -> D -> C -> B -> A
        assert_eq!(forest.cycle_len(1, 4), Some(4));
        assert_eq!(forest.clean(Some(1), Some(4)), Ok(()));
    }

    #[test]
    fn valid_parents() {
        let forest = chain();
        assert_eq!(forest.clean(None, Some(3)), Ok(()));
        assert_eq!(forest.clean(Some(3), Some(1)), Ok(()));
        assert_eq!(forest.clean(Some(1), None), Ok(()));
        assert_eq!(forest.cycle_len(3, 1), None);
    }

    #[test]
    fn display() {
        let forest = chain();
        assert_eq!(forest.display_name(1).as_deref(), Some("A"));
        assert_eq!(forest.display_name(2).as_deref(), Some("A - B"));
        assert_eq!(forest.display_name(3).as_deref(), Some("A - B - C"));
        assert_eq!(forest.display_name(4), None);
    }

    #[test]
    fn display_bounded_on_cycle() {
        let mut forest = CategoryForest::default();
        forest.set(1, "A".to_owned(), Some(2));
        forest.set(2, "B".to_owned(), Some(1));
        assert_eq!(forest.display_name(1).as_deref(), Some("B - A"));
    }
}
