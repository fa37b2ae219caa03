use std::convert::Infallible;
use warp::http::{StatusCode, Uri};
use warp::reply::Response;
use warp::Reply;
use crate::structs::login_form::LoginForm;
use crate::structs::register_form::RegisterForm;
use crate::ui::pages;

pub async fn login_page_handler() -> Result<Response, Infallible> {
    Ok(warp::reply::html(pages::login_page()).into_response())
}

// Credentials are not checked; there is no account store.
pub async fn login_handler(form: LoginForm) -> Result<Response, Infallible> {
    log::info!("🔓 Login for '{}' accepted without verification", form.username.trim());
    Ok(warp::redirect::see_other(Uri::from_static("/dashboard")).into_response())
}

pub async fn register_page_handler() -> Result<Response, Infallible> {
    Ok(warp::reply::html(pages::register_page(&RegisterForm::default(), &[])).into_response())
}

pub async fn register_handler(form: RegisterForm) -> Result<Response, Infallible> {
    let validation = form.validate();

    if validation.is_valid {
        // Nothing is persisted; a valid form goes straight to the login page.
        log::info!("📝 Registration form accepted for '{}'", form.username.trim());
        return Ok(warp::redirect::see_other(Uri::from_static("/account/login")).into_response());
    }

    log::debug!("Registration form rejected: {:?}", validation.errors);
    let page = pages::register_page(&form, &validation.errors);
    Ok(warp::reply::with_status(warp::reply::html(page), StatusCode::UNPROCESSABLE_ENTITY).into_response())
}
