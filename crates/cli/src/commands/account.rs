//! Account commands: seed, register, login, logout, whoami.

use quickbite_storefront::services::{AuthService, Registration};
use quickbite_storefront::AppState;

/// Create the seed admin account if no admin exists yet.
pub fn seed(state: &AppState) -> quickbite_storefront::Result<()> {
    let auth = AuthService::new(state);
    if auth.ensure_seed_admin()? {
        println!("seed admin account created (username: admin)");
    } else {
        println!("an admin account already exists, nothing to do");
    }
    Ok(())
}

/// Register a new account.
pub fn register(
    state: &AppState,
    username: String,
    email: String,
    password: String,
    confirm: String,
) -> quickbite_storefront::Result<()> {
    let auth = AuthService::new(state);
    let account = auth.register(&Registration {
        username,
        email,
        password,
        confirm_password: confirm,
    })?;
    println!("registered {} <{}>", account.username, account.email);
    println!("sign in with: qb login {}", account.username);
    Ok(())
}

/// Sign in and persist the session.
pub fn login(
    state: &AppState,
    identifier: &str,
    password: &str,
    remember: bool,
) -> quickbite_storefront::Result<()> {
    let auth = AuthService::new(state);
    let account = auth.login(identifier, password, remember)?;
    println!("signed in as {}", account.username);
    Ok(())
}

/// Sign out.
pub fn logout(state: &AppState) -> quickbite_storefront::Result<()> {
    let auth = AuthService::new(state);
    auth.logout()?;
    println!("signed out");
    Ok(())
}

/// Show the signed-in account, if any.
pub fn whoami(state: &AppState) -> quickbite_storefront::Result<()> {
    let auth = AuthService::new(state);
    match auth.current_user()? {
        Some(account) => {
            let role = if account.role.is_admin() { " (admin)" } else { "" };
            println!("{} <{}>{role}", account.username, account.email);
        }
        None => match auth.remembered_identifier()? {
            Some(identifier) => println!("not signed in (last identifier: {identifier})"),
            None => println!("not signed in"),
        },
    }
    Ok(())
}
