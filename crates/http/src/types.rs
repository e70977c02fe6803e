//! Wire types for the Parkwatch API

use serde::{Deserialize, Serialize};

/// A crowd-sourced parking spot
///
/// Coordinates are transmitted as strings by the service and kept that way
/// here; callers parse them when they need numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingSpot {
    pub parking_spot_id: String,
    pub parking_spot_name: String,
    pub longitude: String,
    pub latitude: String,
    pub operation_hours: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub detail: String,
    /// Last reported occupancy, 0-100
    pub occupancy_percent: u8,
}

/// Author of a spot post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAuthor {
    pub username: String,
    pub email: String,
}

/// A user post attached to a parking spot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotPost {
    pub title: String,
    pub post: String,
    pub author: PostAuthor,
    pub created_at: String,
    /// Identifier of the spot the post belongs to
    pub parking_space: String,
}

/// Occupancy report for a spot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyUpdateRequest {
    pub parking_spot_id: String,
    pub occupancy_percent: u8,
}

/// New comment on an existing post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub comment: String,
}

/// Message envelope the service uses for non-payload responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
