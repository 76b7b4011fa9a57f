use axum_extra::extract::cookie::{Cookie, CookieJar};

const MESSAGE_COOKIE: &str = "flash_message";
const CATEGORY_COOKIE: &str = "flash_category";

/// One transient notice, carried in cookies from a write to the next page
/// view.
#[derive(Debug, Clone)]
pub struct Flash {
    pub message: String,
    pub category: String,
}

fn cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value)).path("/").build()
}

/// Sets the flash cookies on the outgoing response.
pub fn set(jar: CookieJar, message: &str, category: &str) -> CookieJar {
    jar.add(cookie(MESSAGE_COOKIE, message.to_string()))
        .add(cookie(CATEGORY_COOKIE, category.to_string()))
}

/// Reads the flash, if any, and clears its cookies so the notice is shown
/// exactly once. Page handlers return the jar with their response.
pub fn take(jar: CookieJar) -> (Option<Flash>, CookieJar) {
    let flash = jar.get(MESSAGE_COOKIE).map(|message| Flash {
        message: message.value().to_string(),
        category: jar
            .get(CATEGORY_COOKIE)
            .map(|c| c.value().to_string())
            .unwrap_or_else(|| "success".to_string()),
    });

    if flash.is_some() {
        let jar = jar
            .remove(cookie(MESSAGE_COOKIE, String::new()))
            .remove(cookie(CATEGORY_COOKIE, String::new()));
        (flash, jar)
    } else {
        (None, jar)
    }
}
