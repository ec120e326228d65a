use crate::app_state::{AppConfig, AppState};
use crate::io_struct::{ScreeningForm, ValidationError};
use crate::model::Risk;
use crate::pages::Page;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, HttpServer, get, post, web};
use std::io::Write;

#[get("/health")]
pub async fn health(_req: HttpRequest, _: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().body("Ok")
}

#[get("/")]
pub async fn index(_req: HttpRequest, app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(app_state.pages.get(Page::Index).to_owned())
}

#[post("/")]
pub async fn screen(
    _req: HttpRequest,
    form: web::Form<ScreeningForm>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let features = match form.to_features() {
        Ok(features) => features,
        Err(err) => {
            log::info!("rejected screening submission: {}", err);
            return HttpResponse::UnprocessableEntity()
                .content_type(ContentType::html())
                .body(validation_page(&err));
        }
    };
    let label = app_state.model.predict(&features);
    let risk = Risk::from_label(&label);
    log::info!("predicted label {} -> {:?}", label, risk);
    let page = match risk {
        Risk::AtRisk => Page::Positive,
        Risk::NotAtRisk => Page::Negative,
    };
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(app_state.pages.get(page).to_owned())
}

fn validation_page(err: &ValidationError) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Invalid submission</title></head>\n\
         <body>\n<h1>Invalid submission</h1>\n<p>{}</p>\n\
         <p><a href=\"/\">Back to the form</a></p>\n</body>\n</html>\n",
        err
    )
}

// default level is info
pub fn init_logging() {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .init();
}

pub async fn startup(config: AppConfig, state: AppState) -> std::io::Result<()> {
    let app_state = web::Data::new(state);

    println!("Starting server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(app_state.clone())
            .service(health)
            .service(index)
            .service(screen)
    })
    .bind((config.host, config.port))?
    .run()
    .await?;

    std::io::Result::Ok(())
}
