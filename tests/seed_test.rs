//! Seed writer integration tests against a live database.
//!
//! Requires TEST_DATABASE_URL pointing at a database with the
//! AlumniConnect schema applied; each test skips itself when unset.

mod common;

use aluconnect::orm::{categories, companies, jobs, posts, profiles, users};
use aluconnect::seed;
use common::database::try_connect;
use sea_orm::{entity::*, query::*};
use serial_test::serial;
use std::collections::HashSet;

#[actix_rt::test]
#[serial]
async fn full_seed_populates_catalog_counts() {
    let db = match try_connect().await {
        Some(db) => db,
        None => return,
    };

    seed::clean(&db).await.expect("clean succeeds");
    let summary = seed::seed(&db).await.expect("seed succeeds");

    // 1 super admin + 3 alumni
    assert_eq!(summary.users.created, 4);
    assert_eq!(summary.categories.created, 6);
    assert_eq!(summary.companies.created, 5);
    assert_eq!(summary.jobs.created, 5);

    let job_rows = jobs::Entity::find().all(&db).await.expect("jobs");
    assert_eq!(job_rows.len(), 5);
}

#[actix_rt::test]
#[serial]
async fn seeded_jobs_reference_rows_created_in_the_same_run() {
    let db = match try_connect().await {
        Some(db) => db,
        None => return,
    };

    seed::clean(&db).await.expect("clean succeeds");
    seed::seed(&db).await.expect("seed succeeds");

    let user_ids: HashSet<i32> = users::Entity::find()
        .all(&db)
        .await
        .expect("users")
        .into_iter()
        .map(|u| u.id)
        .collect();
    let company_ids: HashSet<i32> = companies::Entity::find()
        .all(&db)
        .await
        .expect("companies")
        .into_iter()
        .map(|c| c.id)
        .collect();

    for job in jobs::Entity::find().all(&db).await.expect("jobs") {
        assert!(user_ids.contains(&job.posted_by), "dangling posted_by");
        let company = job.company_id.expect("seeded jobs carry a company");
        assert!(company_ids.contains(&company), "dangling company_id");
    }
}

#[actix_rt::test]
#[serial]
async fn seeded_posts_resolve_to_seeded_category_slugs() {
    let db = match try_connect().await {
        Some(db) => db,
        None => return,
    };

    seed::clean(&db).await.expect("clean succeeds");
    seed::seed(&db).await.expect("seed succeeds");

    let seeded_slugs: HashSet<String> = aluconnect::seed::catalog::CATEGORIES
        .iter()
        .map(|c| c.slug.to_owned())
        .collect();

    for post in posts::Entity::find().all(&db).await.expect("posts") {
        let category = categories::Entity::find_by_id(post.category_id)
            .one(&db)
            .await
            .expect("query")
            .expect("post category exists");
        assert!(
            seeded_slugs.contains(&category.slug),
            "post '{}' resolves to unseeded category '{}'",
            post.title,
            category.slug
        );
    }
}

#[actix_rt::test]
#[serial]
async fn every_seeded_user_carries_exactly_one_profile() {
    let db = match try_connect().await {
        Some(db) => db,
        None => return,
    };

    seed::clean(&db).await.expect("clean succeeds");
    seed::seed(&db).await.expect("seed succeeds");

    for user in users::Entity::find().all(&db).await.expect("users") {
        let profile_rows = profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(user.id))
            .all(&db)
            .await
            .expect("profiles");
        assert_eq!(
            profile_rows.len(),
            1,
            "user '{}' must have exactly one profile",
            user.email
        );
    }
}

#[actix_rt::test]
#[serial]
async fn rerunning_seed_creates_no_duplicates() {
    let db = match try_connect().await {
        Some(db) => db,
        None => return,
    };

    seed::clean(&db).await.expect("clean succeeds");
    seed::seed(&db).await.expect("first run succeeds");

    let users_before = users::Entity::find().all(&db).await.expect("users").len();

    let second = seed::seed(&db).await.expect("second run succeeds");
    assert_eq!(second.users.created, 0);
    assert_eq!(second.categories.created, 0);
    assert_eq!(second.jobs.created, 0);

    let users_after = users::Entity::find().all(&db).await.expect("users").len();
    assert_eq!(users_before, users_after, "re-run must not add users");
}

#[actix_rt::test]
#[serial]
async fn super_admin_seed_is_idempotent_and_verifiable() {
    let db = match try_connect().await {
        Some(db) => db,
        None => return,
    };

    seed::clean(&db).await.expect("clean succeeds");

    assert!(seed::seed_super_admin(&db).await.expect("first run"));
    assert!(
        !seed::seed_super_admin(&db).await.expect("second run"),
        "second run must find the existing account"
    );

    let admin = users::Entity::find()
        .filter(users::Column::Email.eq(aluconnect::seed::catalog::SUPER_ADMIN_EMAIL))
        .one(&db)
        .await
        .expect("query")
        .expect("admin row exists");
    assert_eq!(admin.role, users::UserRole::SuperAdmin);
    assert!(aluconnect::auth::verify_password(
        aluconnect::seed::catalog::SUPER_ADMIN_PASSWORD,
        &admin.password
    ));
}
