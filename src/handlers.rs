//! HTTP handlers and page rendering.

use actix_files::NamedFile;
use actix_web::http::{header, Method, StatusCode};
use actix_web::{post, web, Either, HttpResponse, Responder};
use tera::{Context, Tera};

use crate::errors::ServerError;
use crate::models::FormParams;
use crate::store::MemoStore;

fn render_index(store: &MemoStore, tmpl: &Tera) -> Result<HttpResponse, ServerError> {
    let memos = store.list_all()?;
    let mut ctx = Context::new();
    ctx.insert("memos", &memos);
    let view = tmpl.render("index.html", &ctx)?;
    Ok(HttpResponse::Ok().content_type("text/html").body(view))
}

fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// GET / — the submission form plus every memo, newest first.
pub async fn index(
    store: web::Data<MemoStore>,
    tmpl: web::Data<Tera>,
) -> Result<HttpResponse, ServerError> {
    render_index(&store, &tmpl)
}

/// POST / — store the memo, then redirect so a browser refresh re-issues
/// the GET rather than the POST. Empty or missing content stores nothing
/// and re-renders the unchanged list.
pub async fn create(
    store: web::Data<MemoStore>,
    params: web::Form<FormParams>,
    tmpl: web::Data<Tera>,
) -> Result<HttpResponse, ServerError> {
    match params.content.as_deref().filter(|content| !content.is_empty()) {
        Some(content) => {
            store.create(content)?;
            Ok(redirect_home())
        }
        None => {
            log::debug!("skipping submission with empty content");
            render_index(&store, &tmpl)
        }
    }
}

/// POST /delete/{id} — idempotent delete, then redirect.
#[post("/delete/{id}")]
pub async fn delete(
    store: web::Data<MemoStore>,
    info: web::Path<(i32,)>,
) -> Result<HttpResponse, ServerError> {
    let (id,) = info.into_inner();
    store.delete_by_id(id)?;
    Ok(redirect_home())
}

/// Catch-all: the 404 page for GET requests, 405 for any other method.
pub async fn default_handler(req_method: Method) -> actix_web::Result<impl Responder> {
    match req_method {
        Method::GET => {
            let file = NamedFile::open("templates/404.html")?
                .customize()
                .with_status(StatusCode::NOT_FOUND);
            Ok(Either::Left(file))
        }
        _ => Ok(Either::Right(HttpResponse::MethodNotAllowed().finish())),
    }
}
