//! Drives the signup controller against a real server on an ephemeral port.

use std::sync::{Arc, Mutex};

use actix_web::{web, App, HttpServer};

use campus_connect::{
    client::{
        ClientConfig, ClubDraft, EntityKind, HttpSignupApi, Route, Severity, SignupController,
        StudentDraft, SubmitOutcome,
    },
    database, handler,
    middleware::cors,
    security::PasswordHasher,
};

#[actix_web::test]
async fn signup_form_round_trip() {
    let pool = database::initialize_db_pool(":memory:", 1);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(PasswordHasher::new(4)))
            .wrap(cors::policy(["http://localhost:30500"]))
            .configure(handler::configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let config = ClientConfig::new(format!("http://{addr}").parse().unwrap());
    let api = HttpSignupApi::new(&config).unwrap();
    let routes = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&routes);
    let controller = SignupController::new(api, move |route: Route| {
        recorded.lock().unwrap().push(route)
    });

    for (field, value) in [
        ("name", "Ada"),
        ("email", "ada@x.edu"),
        ("course", "CS"),
        ("password", "p1"),
    ] {
        controller
            .update_field(EntityKind::Student, field, value)
            .unwrap();
    }
    assert!(!controller.is_submit_disabled(EntityKind::Student));

    let outcome = controller.submit(EntityKind::Student).await;
    let SubmitOutcome::Registered(receipt) = outcome else {
        panic!("expected registration, got {outcome:?}");
    };
    assert!(receipt.id.is_some());
    assert_eq!(controller.student_draft(), StudentDraft::default());
    assert_eq!(*routes.lock().unwrap(), vec![Route::Login]);
    assert!(!controller.is_in_flight());

    // Same email twice for clubs: the second attempt is refused by the server.
    controller.select_tab(EntityKind::Club);
    for _ in 0..2 {
        for (field, value) in [
            ("name", "Chess"),
            ("email", "chess@x.edu"),
            ("password", "secret"),
        ] {
            controller.update_field(EntityKind::Club, field, value).unwrap();
        }
        controller.submit(EntityKind::Club).await;
    }

    let notification = controller.notification();
    assert!(notification.open);
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.message, "Email already registered");
    assert_eq!(
        controller.club_draft(),
        ClubDraft {
            name: "Chess".into(),
            email: "chess@x.edu".into(),
            description: String::new(),
            password: "secret".into(),
        }
    );
    assert!(!controller.is_in_flight());

    handle.stop(true).await;
}
