//! Parking spot client methods

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{OccupancyUpdateRequest, ParkingSpot};
use http::Method;

impl ApiClient {
    /// List spots within walking distance of a map center
    pub async fn spots_near(&self, lat: f64, lon: f64) -> Result<Vec<ParkingSpot>, ClientError> {
        let ctx = self.context(Method::GET, &format!("/api/spots/?lat={lat}&lon={lon}"));
        self.execute(ctx).await
    }

    /// Report the current occupancy of a spot
    pub async fn change_occupancy(
        &self,
        update: OccupancyUpdateRequest,
    ) -> Result<ParkingSpot, ClientError> {
        let ctx = self
            .context(Method::POST, "/api/spot/occupancy/")
            .json(&update)?;
        self.execute(ctx).await
    }
}
