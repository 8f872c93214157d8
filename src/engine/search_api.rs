use super::Engine;

use async_trait::async_trait;

use crate::api::SearchAPI;
use crate::entities::PointOfInterest;
use crate::error::Error;

#[async_trait]
impl SearchAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_nearby(&self, category: &str) -> Result<Vec<PointOfInterest>, Error> {
        let region = self.display.visible_region();

        let items = self.services.search(category, region).await.map_err(|err| {
            tracing::error!(code = err.code, "local search failed: {}", err.message);
            err
        })?;

        tracing::debug!(count = items.len(), "local search finished");

        Ok(items)
    }
}
