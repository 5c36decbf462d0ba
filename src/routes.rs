use crate::gql::ApiSchema;
use actix_cors::Cors;
use actix_web::{guard, web, HttpRequest, HttpResponse, Result};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

async fn index(schema: web::Data<ApiSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn index_playground(req: HttpRequest) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new(req.path()))))
}

/// Browsers may call the function from any origin.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

pub fn configure(cfg: &mut web::ServiceConfig, endpoint: &str, playground: bool) {
    cfg.service(web::resource(endpoint).guard(guard::Post()).to(index));
    if playground {
        cfg.service(
            web::resource(endpoint)
                .guard(guard::Get())
                .to(index_playground),
        );
    }
}
