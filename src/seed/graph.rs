//! Declared foreign-key dependency graph for the seeded tables.
//!
//! Insert and delete order used to be a hand-maintained sequence of calls;
//! here the edges are declared once and the order is a topological sort, so
//! adding a table only means adding a row to `DEPENDENCIES`.

use std::fmt;

/// One variant per seeded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Categories,
    Users,
    Profiles,
    Companies,
    Jobs,
    Applications,
    SavedJobs,
    Posts,
    Comments,
    Likes,
    Events,
    Campaigns,
    Donations,
}

impl EntityKind {
    pub fn table_name(self) -> &'static str {
        match self {
            EntityKind::Categories => "categories",
            EntityKind::Users => "users",
            EntityKind::Profiles => "profiles",
            EntityKind::Companies => "companies",
            EntityKind::Jobs => "jobs",
            EntityKind::Applications => "applications",
            EntityKind::SavedJobs => "saved_jobs",
            EntityKind::Posts => "posts",
            EntityKind::Comments => "comments",
            EntityKind::Likes => "likes",
            EntityKind::Events => "events",
            EntityKind::Campaigns => "campaigns",
            EntityKind::Donations => "donations",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Every seeded table and the tables its foreign keys point at.
const DEPENDENCIES: &[(EntityKind, &[EntityKind])] = &[
    (EntityKind::Categories, &[]),
    (EntityKind::Users, &[]),
    (EntityKind::Profiles, &[EntityKind::Users]),
    (EntityKind::Companies, &[]),
    (EntityKind::Jobs, &[EntityKind::Users, EntityKind::Companies]),
    (
        EntityKind::Applications,
        &[EntityKind::Jobs, EntityKind::Users],
    ),
    (
        EntityKind::SavedJobs,
        &[EntityKind::Jobs, EntityKind::Users],
    ),
    (
        EntityKind::Posts,
        &[EntityKind::Users, EntityKind::Categories],
    ),
    (
        EntityKind::Comments,
        &[EntityKind::Posts, EntityKind::Users],
    ),
    (EntityKind::Likes, &[EntityKind::Posts, EntityKind::Users]),
    (EntityKind::Events, &[EntityKind::Users]),
    (EntityKind::Campaigns, &[EntityKind::Users]),
    (
        EntityKind::Donations,
        &[EntityKind::Campaigns, EntityKind::Users],
    ),
];

/// The declared edges contain a cycle, which can never be seeded.
#[derive(Debug, PartialEq, Eq)]
pub struct CycleError {
    pub unresolved: Vec<EntityKind>,
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dependency cycle among seeded tables: {}",
            self.unresolved
                .iter()
                .map(|k| k.table_name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for CycleError {}

/// Stable topological sort over `DEPENDENCIES`: repeatedly takes the first
/// declared kind whose dependencies are already placed, so the result is
/// deterministic across runs.
pub fn insert_order() -> Result<Vec<EntityKind>, CycleError> {
    let mut remaining: Vec<(EntityKind, &[EntityKind])> = DEPENDENCIES.to_vec();
    let mut ordered = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let ready = remaining
            .iter()
            .position(|(_, deps)| deps.iter().all(|d| ordered.contains(d)));

        match ready {
            Some(idx) => ordered.push(remaining.remove(idx).0),
            None => {
                return Err(CycleError {
                    unresolved: remaining.iter().map(|(k, _)| *k).collect(),
                })
            }
        }
    }

    Ok(ordered)
}

/// Exact reverse of `insert_order`, used by the clean routine so child rows
/// are removed before the rows they reference.
pub fn delete_order() -> Result<Vec<EntityKind>, CycleError> {
    let mut order = insert_order()?;
    order.reverse();
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[EntityKind], kind: EntityKind) -> usize {
        order
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_else(|| panic!("{} missing from order", kind))
    }

    #[test]
    fn insert_order_covers_every_kind_once() {
        let order = insert_order().expect("graph is acyclic");
        assert_eq!(order.len(), DEPENDENCIES.len());
        for (kind, _) in DEPENDENCIES {
            assert_eq!(order.iter().filter(|k| *k == kind).count(), 1);
        }
    }

    #[test]
    fn dependencies_come_before_dependents() {
        let order = insert_order().expect("graph is acyclic");
        for (kind, deps) in DEPENDENCIES {
            for dep in *deps {
                assert!(
                    position(&order, *dep) < position(&order, *kind),
                    "{} must be inserted before {}",
                    dep,
                    kind
                );
            }
        }
    }

    #[test]
    fn expected_pairwise_ordering() {
        let order = insert_order().expect("graph is acyclic");
        assert!(position(&order, EntityKind::Users) < position(&order, EntityKind::Profiles));
        assert!(position(&order, EntityKind::Companies) < position(&order, EntityKind::Jobs));
        assert!(position(&order, EntityKind::Categories) < position(&order, EntityKind::Posts));
        assert!(position(&order, EntityKind::Jobs) < position(&order, EntityKind::Applications));
        assert!(position(&order, EntityKind::Posts) < position(&order, EntityKind::Likes));
        assert!(position(&order, EntityKind::Campaigns) < position(&order, EntityKind::Donations));
    }

    #[test]
    fn delete_order_is_reverse_of_insert_order() {
        let mut insert = insert_order().expect("graph is acyclic");
        let delete = delete_order().expect("graph is acyclic");
        insert.reverse();
        assert_eq!(insert, delete);
    }

    #[test]
    fn delete_order_starts_with_leaf_tables() {
        let delete = delete_order().expect("graph is acyclic");
        // users and categories carry no foreign keys, so they must go last
        let tail: Vec<EntityKind> = delete.iter().rev().take(4).copied().collect();
        assert!(tail.contains(&EntityKind::Users));
        assert!(tail.contains(&EntityKind::Categories));
        assert!(
            position(&delete, EntityKind::Donations) < position(&delete, EntityKind::Campaigns)
        );
        assert!(position(&delete, EntityKind::Profiles) < position(&delete, EntityKind::Users));
    }
}
