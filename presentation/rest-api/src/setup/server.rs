use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, &config.api_prefix, &addr)
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}{}", addr, config.api_prefix);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// API nested under `api_prefix`, plus Swagger UI and the OpenAPI document.
    pub fn routes(container: DependencyContainer, api_prefix: &str, addr: &str) -> Route {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.category_api,
                container.supplier_api,
            ),
            "Inventory API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}{}", addr, api_prefix));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest(api_prefix, api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }
}
