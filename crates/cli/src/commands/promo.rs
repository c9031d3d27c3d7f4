//! Promotion catalog commands.

use chrono::NaiveDate;

use quickbite_core::PromotionId;
use quickbite_storefront::models::Promotion;
use quickbite_storefront::services::{AuthService, NewPromotion, PromotionService};
use quickbite_storefront::AppState;

/// Create a promotion. Requires a signed-in admin.
pub fn add(
    state: &AppState,
    title: String,
    description: String,
    image: Option<String>,
    start: NaiveDate,
    end: NaiveDate,
) -> quickbite_storefront::Result<()> {
    let actor = AuthService::new(state).require_user()?;
    let promos = PromotionService::new(state);

    let promotion = promos.add(
        &actor,
        NewPromotion {
            title,
            description,
            image,
            start_date: start,
            end_date: end,
        },
    )?;
    println!("created promotion {}", promotion.id);
    Ok(())
}

/// Delete a promotion. Requires a signed-in admin.
pub fn remove(state: &AppState, id: PromotionId) -> quickbite_storefront::Result<()> {
    let actor = AuthService::new(state).require_user()?;
    PromotionService::new(state).remove(&actor, id)?;
    println!("deleted promotion {id}");
    Ok(())
}

/// List promotions: active ones by default, `--current` for today's,
/// `--all` for every stored one.
pub fn list(state: &AppState, current: bool, all: bool) -> quickbite_storefront::Result<()> {
    let promos = PromotionService::new(state);

    let promotions = if all {
        promos.list_all()?
    } else if current {
        promos.list_current()?
    } else {
        promos.list()?
    };

    if promotions.is_empty() {
        println!("no promotions");
        return Ok(());
    }
    for promotion in promotions {
        print_promotion(&promotion);
    }
    Ok(())
}

fn print_promotion(promotion: &Promotion) {
    let state = if promotion.active { "" } else { " (off)" };
    println!(
        "{}  {} .. {}{state}  {}",
        promotion.id, promotion.start_date, promotion.end_date, promotion.title
    );
    println!("    {}", promotion.description);
}
