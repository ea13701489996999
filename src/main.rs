mod config;

use actix_web::error::ErrorInternalServerError;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use asana_oauthbutton::dom::markup::Markup;
use asana_oauthbutton::pages::IndexPage;
use asana_oauthbutton::{asana_button, query, ASANA};
use config::Config;
use log::info;
use sailfish::TemplateOnce;

async fn index(req: HttpRequest, config: web::Data<Config>) -> actix_web::Result<HttpResponse> {
    let alt = query::parse(req.query_string())
        .get("alt")
        .map_or(false, |value| value == "true" || value == "1");

    let button = asana_button(&Markup, &config.public_url, &config.client_id, alt)
        .map_err(ErrorInternalServerError)?;

    let (toggle_href, toggle_text) = if alt {
        ("/", "Default style")
    } else {
        ("/?alt=true", "Alternate style")
    };

    let page = IndexPage {
        title: ASANA.title,
        endpoint: ASANA.endpoint,
        redirect_uri: &config.public_url,
        button: button.to_string(),
        toggle_href,
        toggle_text,
    }
    .render_once()
    .map_err(ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(page))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "asana_oauthbutton=info,actix_server=info,actix_web=info");
    }
    env_logger::init();

    let config = Config::from_env();
    info!(
        "serving the {} button for client {} on {}",
        ASANA.name, config.client_id, config.bind
    );

    let bind = config.bind.clone();
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .wrap(Logger::default())
            .route("/", web::get().to(index))
            .service(actix_files::Files::new("/static", "./static"))
    })
    .bind(bind)?
    .run()
    .await
}
