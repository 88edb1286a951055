use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;

pub(crate) async fn create_catalog_service(config: &Configuration, store: RepositoryStore,
                                           book_repo: Arc<dyn BookRepository>) -> Arc<dyn CatalogService> {
    let publisher = create_publisher(store.gateway_publisher()).await;
    Arc::new(CatalogServiceImpl::new(config, book_repo, publisher))
}
