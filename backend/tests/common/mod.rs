//! Shared wiring for integration tests: real services over in-memory storage.

#![allow(dead_code, reason = "each integration test binary uses a subset")]

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use mockable::{Clock, DefaultClock};
use practice_tracker::Trace;
use practice_tracker::domain::{PracticeGoalsService, PracticeSessionService, PracticeStatsService};
use practice_tracker::inbound::http::configure_api;
use practice_tracker::inbound::http::state::{HttpState, HttpStatePorts};
use practice_tracker::outbound::persistence::{
    InMemoryGoalsRepository, InMemoryPracticeSessionRepository,
};

/// Handler state over fresh repositories and the system clock.
pub fn app_state() -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let sessions_repo = Arc::new(InMemoryPracticeSessionRepository::new());
    let goals_repo = Arc::new(InMemoryGoalsRepository::default());
    let sessions = Arc::new(PracticeSessionService::new(
        Arc::clone(&sessions_repo),
        Arc::clone(&clock),
    ));
    let goals = Arc::new(PracticeGoalsService::new(Arc::clone(&goals_repo)));
    web::Data::new(HttpState::new(HttpStatePorts {
        sessions: sessions.clone(),
        sessions_query: sessions,
        goals: goals.clone(),
        goals_query: goals,
        stats: Arc::new(PracticeStatsService::new(sessions_repo, goals_repo, clock)),
    }))
}

/// A live server on an ephemeral loopback port.
pub struct TestServer {
    pub base_url: String,
    handle: ServerHandle,
}

impl TestServer {
    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

/// Start the API on `127.0.0.1:0` inside the current actix runtime.
pub fn spawn_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    let state = app_state();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Trace)
            .configure(configure_api)
    })
    .workers(1)
    .listen(listener)
    .expect("listen on ephemeral port")
    .run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    TestServer {
        base_url: format!("http://127.0.0.1:{port}"),
        handle,
    }
}
