//! Dependency-ordered, idempotent fixture writer.
//!
//! Every entity is looked up by its natural key before insertion, so
//! re-running a seed binary never duplicates rows. Insert order comes from
//! the declared graph; the first database error aborts the run.

use super::catalog::{self, UserFixture};
use super::graph::{self, EntityKind};
use crate::auth;
use crate::orm::{campaigns, categories, companies, events, jobs, posts, profiles, users};
use chrono::Utc;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr, Set, TransactionTrait};
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedCounts {
    pub created: usize,
    pub skipped: usize,
}

impl SeedCounts {
    fn created(&mut self) {
        self.created += 1;
    }

    fn skipped(&mut self) {
        self.skipped += 1;
    }
}

/// Per-table created/skipped tally for one seed run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: SeedCounts,
    pub users: SeedCounts,
    pub companies: SeedCounts,
    pub jobs: SeedCounts,
    pub posts: SeedCounts,
    pub events: SeedCounts,
    pub campaigns: SeedCounts,
}

impl SeedSummary {
    pub fn log(&self) {
        for (table, counts) in [
            ("categories", &self.categories),
            ("users", &self.users),
            ("companies", &self.companies),
            ("jobs", &self.jobs),
            ("posts", &self.posts),
            ("events", &self.events),
            ("campaigns", &self.campaigns),
        ] {
            log::info!(
                "{}: {} created, {} already present",
                table,
                counts.created,
                counts.skipped
            );
        }
    }
}

fn bad_fixture(what: &str, key: &str) -> DbErr {
    DbErr::Custom(format!("fixture references unknown {}: {}", what, key))
}

fn bad_date(what: &str, title: &str) -> DbErr {
    DbErr::Custom(format!("fixture '{}' has an invalid {}", title, what))
}

fn string_list(items: &[&str]) -> Option<serde_json::Value> {
    if items.is_empty() {
        None
    } else {
        Some(serde_json::json!(items))
    }
}

/// Insert the whole catalog in dependency order. Safe to re-run.
pub async fn seed(db: &DatabaseConnection) -> Result<SeedSummary, DbErr> {
    let order = graph::insert_order().map_err(|e| DbErr::Custom(e.to_string()))?;
    let mut summary = SeedSummary::default();

    let mut category_ids = HashMap::new();
    let mut user_ids = HashMap::new();
    let mut company_ids = HashMap::new();

    for kind in order {
        match kind {
            EntityKind::Categories => {
                category_ids = seed_categories(db, &mut summary.categories).await?;
            }
            EntityKind::Users => {
                user_ids = seed_users(db, &mut summary.users).await?;
            }
            EntityKind::Companies => {
                company_ids = seed_companies(db, &mut summary.companies).await?;
            }
            EntityKind::Jobs => {
                seed_jobs(db, &user_ids, &company_ids, &mut summary.jobs).await?;
            }
            EntityKind::Posts => {
                seed_posts(db, &user_ids, &category_ids, &mut summary.posts).await?;
            }
            EntityKind::Events => {
                seed_events(db, &user_ids, &mut summary.events).await?;
            }
            EntityKind::Campaigns => {
                seed_campaigns(db, &user_ids, &mut summary.campaigns).await?;
            }
            // Profiles are written with their owning user; the remaining
            // tables carry no fixtures and fill up through the app itself.
            EntityKind::Profiles
            | EntityKind::Applications
            | EntityKind::SavedJobs
            | EntityKind::Comments
            | EntityKind::Likes
            | EntityKind::Donations => {
                log::debug!("no fixtures for {}", kind);
            }
        }
    }

    Ok(summary)
}

/// Delete every seeded table in reverse dependency order. Any FK violation
/// from a reordered graph surfaces as a hard `DbErr`.
pub async fn clean(db: &DatabaseConnection) -> Result<(), DbErr> {
    use crate::orm::{applications, comments, donations, likes, saved_jobs};

    let order = graph::delete_order().map_err(|e| DbErr::Custom(e.to_string()))?;

    for kind in order {
        let res = match kind {
            EntityKind::Likes => likes::Entity::delete_many().exec(db).await?,
            EntityKind::Comments => comments::Entity::delete_many().exec(db).await?,
            EntityKind::Posts => posts::Entity::delete_many().exec(db).await?,
            EntityKind::Donations => donations::Entity::delete_many().exec(db).await?,
            EntityKind::Campaigns => campaigns::Entity::delete_many().exec(db).await?,
            EntityKind::Events => events::Entity::delete_many().exec(db).await?,
            EntityKind::SavedJobs => saved_jobs::Entity::delete_many().exec(db).await?,
            EntityKind::Applications => applications::Entity::delete_many().exec(db).await?,
            EntityKind::Jobs => jobs::Entity::delete_many().exec(db).await?,
            EntityKind::Companies => companies::Entity::delete_many().exec(db).await?,
            EntityKind::Categories => categories::Entity::delete_many().exec(db).await?,
            EntityKind::Profiles => profiles::Entity::delete_many().exec(db).await?,
            EntityKind::Users => users::Entity::delete_many().exec(db).await?,
        };
        log::info!("cleaned {}: {} rows", kind, res.rows_affected);
    }

    Ok(())
}

/// Create the super admin account if it does not exist yet. Returns true
/// when a row was created.
pub async fn seed_super_admin(db: &DatabaseConnection) -> Result<bool, DbErr> {
    let mut hashes = HashMap::new();
    let mut counts = SeedCounts::default();
    let mut ids = HashMap::new();
    seed_user(db, &catalog::SUPER_ADMIN, &mut hashes, &mut counts, &mut ids).await?;
    Ok(counts.created == 1)
}

async fn seed_categories(
    db: &DatabaseConnection,
    counts: &mut SeedCounts,
) -> Result<HashMap<&'static str, i32>, DbErr> {
    let mut ids = HashMap::new();

    for fixture in catalog::CATEGORIES {
        let existing = categories::Entity::find()
            .filter(categories::Column::Slug.eq(fixture.slug))
            .one(db)
            .await?;

        let id = match existing {
            Some(row) => {
                counts.skipped();
                row.id
            }
            None => {
                let row = categories::ActiveModel {
                    name: Set(fixture.name.to_owned()),
                    slug: Set(fixture.slug.to_owned()),
                    description: Set(Some(fixture.description.to_owned())),
                    icon: Set(Some(fixture.icon.to_owned())),
                    color: Set(Some(fixture.color.to_owned())),
                    ..Default::default()
                };
                let res = categories::Entity::insert(row).exec(db).await?;
                counts.created();
                res.last_insert_id
            }
        };
        ids.insert(fixture.slug, id);
    }

    Ok(ids)
}

async fn seed_user(
    db: &DatabaseConnection,
    fixture: &UserFixture,
    hashes: &mut HashMap<&'static str, String>,
    counts: &mut SeedCounts,
    ids: &mut HashMap<&'static str, i32>,
) -> Result<(), DbErr> {
    let existing = users::Entity::find()
        .filter(users::Column::Email.eq(fixture.email))
        .one(db)
        .await?;

    if let Some(row) = existing {
        counts.skipped();
        ids.insert(fixture.email, row.id);
        repair_missing_profile(db, fixture, row.id).await?;
        return Ok(());
    }

    // Hash each distinct plaintext once; argon2 is deliberately slow.
    if !hashes.contains_key(fixture.password) {
        let hash = auth::hash_password(fixture.password)
            .map_err(|e| DbErr::Custom(format!("password hashing failed: {}", e)))?;
        hashes.insert(fixture.password, hash);
    }
    let password = hashes[fixture.password].clone();

    let user = users::ActiveModel {
        email: Set(fixture.email.to_owned()),
        password: Set(password),
        role: Set(fixture.role.clone()),
        status: Set(users::UserStatus::Active),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    // The user row and its profile land together or not at all; a row
    // without its profile would be skipped forever by the email guard.
    let txn = db.begin().await?;
    let res = users::Entity::insert(user).exec(&txn).await?;
    let user_id = res.last_insert_id;
    profiles::Entity::insert(profile_model(fixture, user_id))
        .exec(&txn)
        .await?;
    txn.commit().await?;

    counts.created();
    ids.insert(fixture.email, user_id);
    Ok(())
}

fn profile_model(fixture: &UserFixture, user_id: i32) -> profiles::ActiveModel {
    let p = &fixture.profile;
    profiles::ActiveModel {
        user_id: Set(user_id),
        full_name: Set(p.full_name.to_owned()),
        bio: Set(Some(p.bio.to_owned())),
        nim: Set(p.nim.map(str::to_owned)),
        batch: Set(p.batch.map(str::to_owned)),
        major: Set(p.major.map(str::to_owned)),
        graduation_year: Set(p.graduation_year),
        current_position: Set(Some(p.current_position.to_owned())),
        current_company: Set(Some(p.current_company.to_owned())),
        skills: Set(string_list(p.skills)),
        linkedin_url: Set(p.linkedin_url.map(str::to_owned)),
        github_url: Set(p.github_url.map(str::to_owned)),
        ..Default::default()
    }
}

/// A user row written by an older seed could predate its profile. Recreate
/// the profile from the fixture so the user/profile pairing holds after any
/// re-run, not just on fresh databases.
async fn repair_missing_profile(
    db: &DatabaseConnection,
    fixture: &UserFixture,
    user_id: i32,
) -> Result<(), DbErr> {
    let present = profiles::Entity::find()
        .filter(profiles::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .is_some();

    if !present {
        log::warn!("user {} has no profile row, recreating it", fixture.email);
        profiles::Entity::insert(profile_model(fixture, user_id))
            .exec(db)
            .await?;
    }
    Ok(())
}

async fn seed_users(
    db: &DatabaseConnection,
    counts: &mut SeedCounts,
) -> Result<HashMap<&'static str, i32>, DbErr> {
    let mut hashes = HashMap::new();
    let mut ids = HashMap::new();

    seed_user(db, &catalog::SUPER_ADMIN, &mut hashes, counts, &mut ids).await?;
    for fixture in catalog::ALUMNI {
        seed_user(db, fixture, &mut hashes, counts, &mut ids).await?;
    }

    Ok(ids)
}

async fn seed_companies(
    db: &DatabaseConnection,
    counts: &mut SeedCounts,
) -> Result<HashMap<&'static str, i32>, DbErr> {
    let mut ids = HashMap::new();

    for fixture in catalog::COMPANIES {
        let existing = companies::Entity::find()
            .filter(companies::Column::Name.eq(fixture.name))
            .one(db)
            .await?;

        let id = match existing {
            Some(row) => {
                counts.skipped();
                row.id
            }
            None => {
                let row = companies::ActiveModel {
                    name: Set(fixture.name.to_owned()),
                    slug: Set(fixture.slug.to_owned()),
                    description: Set(Some(fixture.description.to_owned())),
                    website: Set(fixture.website.map(str::to_owned)),
                    logo: Set(fixture.logo.map(str::to_owned)),
                    industry: Set(Some(fixture.industry.to_owned())),
                    size: Set(Some(fixture.size.to_owned())),
                    location: Set(Some(fixture.location.to_owned())),
                    founded: Set(Some(fixture.founded)),
                    created_at: Set(Utc::now().naive_utc()),
                    ..Default::default()
                };
                let res = companies::Entity::insert(row).exec(db).await?;
                counts.created();
                res.last_insert_id
            }
        };
        ids.insert(fixture.name, id);
    }

    Ok(ids)
}

async fn seed_jobs(
    db: &DatabaseConnection,
    user_ids: &HashMap<&'static str, i32>,
    company_ids: &HashMap<&'static str, i32>,
    counts: &mut SeedCounts,
) -> Result<(), DbErr> {
    for fixture in catalog::JOBS {
        let poster = *user_ids
            .get(fixture.poster_email)
            .ok_or_else(|| bad_fixture("poster", fixture.poster_email))?;
        let company = *company_ids
            .get(fixture.company_name)
            .ok_or_else(|| bad_fixture("company", fixture.company_name))?;

        let existing = jobs::Entity::find()
            .filter(jobs::Column::Title.eq(fixture.title))
            .one(db)
            .await?;

        if existing.is_some() {
            counts.skipped();
            continue;
        }

        let row = jobs::ActiveModel {
            posted_by: Set(poster),
            company_id: Set(Some(company)),
            title: Set(fixture.title.to_owned()),
            description: Set(fixture.description.to_owned()),
            requirements: Set(Some(fixture.requirements.to_owned())),
            responsibilities: Set(Some(fixture.responsibilities.to_owned())),
            job_type: Set(fixture.job_type.clone()),
            level: Set(fixture.level.clone()),
            location: Set(Some(fixture.location.to_owned())),
            is_remote: Set(fixture.is_remote),
            salary_min: Set(Some(fixture.salary_min)),
            salary_max: Set(Some(fixture.salary_max)),
            salary_currency: Set(fixture.salary_currency.to_owned()),
            skills: Set(string_list(fixture.skills)),
            benefits: Set(string_list(fixture.benefits)),
            is_active: Set(true),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        jobs::Entity::insert(row).exec(db).await?;
        counts.created();
    }

    Ok(())
}

async fn seed_posts(
    db: &DatabaseConnection,
    user_ids: &HashMap<&'static str, i32>,
    category_ids: &HashMap<&'static str, i32>,
    counts: &mut SeedCounts,
) -> Result<(), DbErr> {
    for fixture in catalog::POSTS {
        let author = *user_ids
            .get(fixture.author_email)
            .ok_or_else(|| bad_fixture("author", fixture.author_email))?;
        let category = *category_ids
            .get(fixture.category_slug)
            .ok_or_else(|| bad_fixture("category", fixture.category_slug))?;

        let existing = posts::Entity::find()
            .filter(posts::Column::Title.eq(fixture.title))
            .one(db)
            .await?;

        if existing.is_some() {
            counts.skipped();
            continue;
        }

        let row = posts::ActiveModel {
            user_id: Set(author),
            category_id: Set(category),
            title: Set(fixture.title.to_owned()),
            content: Set(fixture.content.to_owned()),
            excerpt: Set(Some(fixture.excerpt.to_owned())),
            status: Set(fixture.status.clone()),
            views: Set(fixture.views),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        posts::Entity::insert(row).exec(db).await?;
        counts.created();
    }

    Ok(())
}

async fn seed_events(
    db: &DatabaseConnection,
    user_ids: &HashMap<&'static str, i32>,
    counts: &mut SeedCounts,
) -> Result<(), DbErr> {
    for fixture in catalog::EVENTS {
        let organizer = *user_ids
            .get(fixture.organizer_email)
            .ok_or_else(|| bad_fixture("organizer", fixture.organizer_email))?;
        let start = fixture
            .start_date
            .resolve()
            .ok_or_else(|| bad_date("start date", fixture.title))?;
        let end = fixture
            .end_date
            .resolve()
            .ok_or_else(|| bad_date("end date", fixture.title))?;

        let existing = events::Entity::find()
            .filter(events::Column::Title.eq(fixture.title))
            .one(db)
            .await?;

        if existing.is_some() {
            counts.skipped();
            continue;
        }

        let row = events::ActiveModel {
            organizer_id: Set(organizer),
            title: Set(fixture.title.to_owned()),
            description: Set(fixture.description.to_owned()),
            event_type: Set(fixture.event_type.clone()),
            status: Set(fixture.status.clone()),
            start_date: Set(start),
            end_date: Set(end),
            location: Set(Some(fixture.location.to_owned())),
            is_online: Set(fixture.is_online),
            capacity: Set(Some(fixture.capacity)),
            price: Set(None),
            cover_image: Set(fixture.cover_image.map(str::to_owned)),
            speakers: Set(None),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        events::Entity::insert(row).exec(db).await?;
        counts.created();
    }

    Ok(())
}

async fn seed_campaigns(
    db: &DatabaseConnection,
    user_ids: &HashMap<&'static str, i32>,
    counts: &mut SeedCounts,
) -> Result<(), DbErr> {
    for fixture in catalog::CAMPAIGNS {
        let creator = *user_ids
            .get(fixture.creator_email)
            .ok_or_else(|| bad_fixture("creator", fixture.creator_email))?;
        let end = fixture
            .end_date
            .resolve()
            .ok_or_else(|| bad_date("end date", fixture.title))?;

        let existing = campaigns::Entity::find()
            .filter(campaigns::Column::Title.eq(fixture.title))
            .one(db)
            .await?;

        if existing.is_some() {
            counts.skipped();
            continue;
        }

        let row = campaigns::ActiveModel {
            creator_id: Set(creator),
            title: Set(fixture.title.to_owned()),
            description: Set(fixture.description.to_owned()),
            category: Set(fixture.category.clone()),
            goal_amount: Set(fixture.goal_amount),
            current_amount: Set(0),
            status: Set(campaigns::CampaignStatus::PendingApproval),
            end_date: Set(end),
            cover_image: Set(fixture.cover_image.map(str::to_owned)),
            rejection_reason: Set(None),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        campaigns::Entity::insert(row).exec(db).await?;
        counts.created();
    }

    Ok(())
}
