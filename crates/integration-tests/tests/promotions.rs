//! Promotion catalog flow: seed admin manages banners, window filtering
//! follows the clock, and everything survives a restart.

use chrono::Duration;

use quickbite_integration_tests::TestContext;
use quickbite_storefront::models::Account;
use quickbite_storefront::services::{
    AuthService, NewPromotion, PromotionError, PromotionService, Registration,
};

fn seeded_admin(ctx: &TestContext) -> Account {
    let auth = AuthService::new(ctx.state());
    auth.ensure_seed_admin().expect("seeding failed");
    auth.login("admin", "admin123", false).expect("admin login failed")
}

fn summer_special() -> NewPromotion {
    NewPromotion {
        title: "Summer Special".to_owned(),
        description: "Free drink with every burger".to_owned(),
        image: None,
        start_date: "2025-06-16".parse().expect("valid date"),
        end_date: "2025-06-30".parse().expect("valid date"),
    }
}

#[test]
fn test_admin_manages_promotions() {
    let ctx = TestContext::new();
    let admin = seeded_admin(&ctx);
    let promos = PromotionService::new(ctx.state());

    let created = promos.add(&admin, summer_special()).expect("add failed");

    // Stored, but not running yet: the window opens tomorrow.
    assert_eq!(promos.list().expect("list failed").len(), 1);
    assert!(promos.list_current().expect("list failed").is_empty());

    ctx.clock().advance(Duration::days(1));
    assert_eq!(promos.list_current().expect("list failed").len(), 1);

    // Survives a restart.
    let reopened = ctx.reopen();
    let promos = PromotionService::new(&reopened);
    assert_eq!(promos.list_current().expect("list failed").len(), 1);

    promos.remove(&admin, created.id).expect("remove failed");
    assert!(promos.list().expect("list failed").is_empty());
}

#[test]
fn test_regular_user_cannot_manage_promotions() {
    let ctx = TestContext::new();
    let admin = seeded_admin(&ctx);
    let promos = PromotionService::new(ctx.state());
    let created = promos.add(&admin, summer_special()).expect("add failed");

    let auth = AuthService::new(ctx.state());
    auth.register(&Registration {
        username: "mallory".to_owned(),
        email: "mallory@example.com".to_owned(),
        password: "hunter22".to_owned(),
        confirm_password: "hunter22".to_owned(),
    })
    .expect("registration failed");
    let mallory = auth.login("mallory", "hunter22", false).expect("login failed");

    assert!(matches!(
        promos.add(&mallory, summer_special()),
        Err(PromotionError::Forbidden)
    ));
    assert!(matches!(
        promos.remove(&mallory, created.id),
        Err(PromotionError::Forbidden)
    ));
    assert_eq!(promos.list().expect("list failed").len(), 1);
}

#[test]
fn test_update_rewrites_window() {
    let ctx = TestContext::new();
    let admin = seeded_admin(&ctx);
    let promos = PromotionService::new(ctx.state());
    let created = promos.add(&admin, summer_special()).expect("add failed");

    let mut extended = summer_special();
    extended.end_date = "2025-07-31".parse().expect("valid date");
    promos
        .update(&admin, created.id, extended)
        .expect("update failed");

    ctx.clock().advance(Duration::days(40));
    let reopened = ctx.reopen();
    let promos = PromotionService::new(&reopened);
    let all = promos.list_all().expect("list failed");
    assert_eq!(all.len(), 1);
    assert_eq!(
        all[0].end_date,
        "2025-07-31".parse::<chrono::NaiveDate>().expect("valid date")
    );
    // July 25th falls inside the extended window.
    assert_eq!(promos.list_current().expect("list failed").len(), 1);
}
