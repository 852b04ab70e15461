/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
  "OK"
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{
    App,
    http::StatusCode,
    test::{self, TestRequest},
    web,
  };

  #[actix_web::test]
  async fn test_health_check() {
    let app =
      test::init_service(App::new().route("/health", web::get().to(health_check))).await;

    let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(body, "OK");
  }
}
