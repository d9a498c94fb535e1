use super::*;
use crate::gameplay::*;
use crate::gameroom::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::ResponseError;
use actix_web::web;

pub async fn health(lobby: web::Data<Lobby>) -> impl Responder {
    match lobby
        .ping()
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(()) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("storage unavailable"),
    }
}

pub async fn create(lobby: web::Data<Lobby>, form: Option<web::Form<CreateForm>>) -> impl Responder {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    match Setup::try_from(form) {
        Err(e) => e.error_response(),
        Ok(setup) => match lobby.open(setup).await {
            Err(e) => e.error_response(),
            Ok(session) => HttpResponse::Ok().json(Snapshot::created(&session)),
        },
    }
}

pub async fn state(lobby: web::Data<Lobby>, path: web::Path<String>) -> impl Responder {
    match session_id(&path) {
        Err(e) => e.error_response(),
        Ok(id) => match lobby.state(id).await {
            Err(e) => e.error_response(),
            Ok(session) => HttpResponse::Ok().json(Snapshot::from(&session)),
        },
    }
}

pub async fn roll(
    lobby: web::Data<Lobby>,
    path: web::Path<String>,
    form: Option<web::Form<ActorForm>>,
) -> impl Responder {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    let request = session_id(&path).and_then(|id| Ok((id, form.player()?)));
    match request {
        Err(e) => e.error_response(),
        Ok((id, player)) => match lobby.act(id, Action::Roll { player }).await {
            Err(e) => e.error_response(),
            Ok((session, outcome)) => match Rolled::new(&session, &outcome) {
                Some(body) => HttpResponse::Ok().json(body),
                None => unexpected(&outcome),
            },
        },
    }
}

pub async fn choose(
    lobby: web::Data<Lobby>,
    path: web::Path<String>,
    form: Option<web::Form<ChooseForm>>,
) -> impl Responder {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    let request = session_id(&path).and_then(|id| Ok((id, form.player()?, form.card()?)));
    match request {
        Err(e) => e.error_response(),
        Ok((id, player, card)) => match lobby.act(id, Action::Choose { player, card }).await {
            Err(e) => e.error_response(),
            Ok((session, outcome)) => match Chosen::new(&session, &outcome) {
                Some(body) => HttpResponse::Ok().json(body),
                None => unexpected(&outcome),
            },
        },
    }
}

pub async fn pass(
    lobby: web::Data<Lobby>,
    path: web::Path<String>,
    query: web::Query<ActorForm>,
) -> impl Responder {
    let request = session_id(&path).and_then(|id| Ok((id, query.player()?)));
    match request {
        Err(e) => e.error_response(),
        Ok((id, player)) => match lobby.act(id, Action::Pass { player }).await {
            Err(e) => e.error_response(),
            Ok((session, _)) => HttpResponse::Ok().json(Snapshot::from(&session)),
        },
    }
}

pub async fn end(lobby: web::Data<Lobby>, path: web::Path<String>) -> impl Responder {
    match session_id(&path) {
        Err(e) => e.error_response(),
        Ok(id) => match lobby.act(id, Action::End).await {
            Err(e) => e.error_response(),
            Ok((session, _)) => HttpResponse::Ok().json(Snapshot::from(&session)),
        },
    }
}

fn unexpected(outcome: &Outcome) -> HttpResponse {
    log::error!("action produced an unrelated outcome: {:?}", outcome);
    Failure::Corrupt("unexpected outcome".to_string()).error_response()
}
